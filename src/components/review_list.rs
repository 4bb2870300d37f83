use leptos::*;

use crate::models::review::{star_fill, Review};

/// List of reviews, newest first. Each row shows five star glyphs (filled
/// count rounds half-up), the rating to one decimal place, the date, and the
/// comment. Comments render as text nodes, never as markup.
#[component]
pub fn ReviewList(reviews: ReadSignal<Vec<Review>>) -> impl IntoView {
    view! {
        <ul class="reviews">
            {move || {
                let list = reviews.get();
                if list.is_empty() {
                    return vec![view! {
                        <li class="review placeholder">{ "No reviews yet for this product." }</li>
                    }
                    .into_view()];
                }
                list.into_iter()
                    .map(|review| {
                        let filled = star_fill(review.rating);
                        view! {
                            <li class="review">
                                <div class="head">
                                    <span
                                        class="stars"
                                        aria-label=format!("{} stars", review.rating_label())
                                    >
                                        {(1..=5u8)
                                            .map(|slot| {
                                                let class = if slot <= filled { "star filled" } else { "star" };
                                                view! { <span class=class>{ "★" }</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </span>
                                    <strong>{review.rating_label()}</strong>
                                    <span class="date">{review.date_label()}</span>
                                </div>
                                <p class="text">{review.text}</p>
                            </li>
                        }
                        .into_view()
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
