/// Main application entry point.
/// Owns the selection and review-list state and wires the catalog, form,
/// stats, and list components together around the review store.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::{
    item_list::ItemList, review_form::ReviewForm, review_list::ReviewList,
    review_stats::ReviewStats,
};
use crate::models::item::{catalog, Item};
use crate::models::review::{NewReview, Review};
use crate::storage::ItemReviewStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = ItemReviewStore::browser();
    let items = catalog();
    let first_id = items[0].id.clone();

    // Selection and the reviews shown for it; only this component mutates them.
    let (selected_id, set_selected_id) = create_signal(first_id.clone());
    let (reviews, set_reviews) = create_signal(store.reviews_for(&first_id));

    let select_item = {
        let store = store.clone();
        Callback::new(move |id: String| {
            set_reviews.set(store.reviews_for(&id));
            set_selected_id.set(id);
        })
    };

    let submit_review = {
        let store = store.clone();
        Callback::new(move |new_review: NewReview| {
            let id = selected_id.get_untracked();
            store.add_review(&id, Review::new(new_review));
            set_reviews.set(store.reviews_for(&id));
        })
    };

    let header_items = items.clone();
    let current_item = move || -> Option<Item> {
        let id = selected_id.get();
        header_items.iter().find(|item| item.id == id).cloned()
    };

    view! {
        <Title text="Brew Ratings"/>
        <div class="layout">
            <aside class="order">
                <h2>{ "Your order" }</h2>
                <ItemList items=items selected=selected_id on_select=select_item/>
            </aside>
            <main class="panel">
                <header class="current-item">
                    {move || {
                        current_item()
                            .map(|item| {
                                let price_label = format!("· {}", item.price_label());
                                view! {
                                    <span class="current-name">{item.name}</span>
                                    <span class="current-price">
                                        {price_label}
                                    </span>
                                }
                            })
                    }}
                </header>
                <ReviewStats reviews=reviews/>
                // Remounting the form when the selection changes resets the
                // rating display, counter, comment, and error region
                {move || {
                    let _ = selected_id.get();
                    view! { <ReviewForm on_submit=submit_review/> }
                }}
                <h2>{ "Reviews" }</h2>
                <ReviewList reviews=reviews/>
            </main>
        </div>
    }
}
