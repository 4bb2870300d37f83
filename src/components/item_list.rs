use leptos::*;

use crate::models::item::Item;

/// The catalog column. One clickable row per item showing image, quantity
/// badge, name, and price; the selected row carries the `active` class.
/// Selection itself is owned by the parent and arrives via `on_select`.
#[component]
pub fn ItemList(
    items: Vec<Item>,
    selected: ReadSignal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="items">
            {items
                .into_iter()
                .map(|item| {
                    let id = item.id.clone();
                    let click_id = item.id.clone();
                    view! {
                        <li
                            class="item"
                            class:active=move || selected.get() == id
                            on:click=move |_| on_select.call(click_id.clone())
                        >
                            <img src=item.image.clone() alt=item.name.clone()/>
                            <div class="info">
                                <div class="row-top">
                                    <span class="qty">{format!("{}x", item.qty)}</span>
                                    <span class="name">{item.name.clone()}</span>
                                </div>
                                <div class="price">{item.price_label()}</div>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
