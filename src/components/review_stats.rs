use leptos::*;

use crate::models::review::{RatingSummary, Review};

/// Count and average rating for the currently displayed review list.
/// An empty list shows the "—" sentinel instead of a numeric average.
#[component]
pub fn ReviewStats(reviews: ReadSignal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="review-stats">
            {move || {
                let summary = RatingSummary::of(&reviews.get());
                format!("Average: {} · {}", summary.average_label(), summary.count_label())
            }}
        </div>
    }
}
