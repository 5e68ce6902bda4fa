//! Featured dishes gallery with category filter

use leptos::prelude::*;
use savory_core::{Catalog, CatalogFilter, MenuItem};

use crate::components::DishCard;

#[component]
pub fn FeaturedDishes() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::new(Catalog::featured()));
    let keys = filter.with_untracked(CatalogFilter::available_keys);

    let visible = Memo::new(move |_| {
        filter.with(|f| f.visible_items().cloned().collect::<Vec<MenuItem>>())
    });

    let buttons = keys
        .into_iter()
        .map(|key| {
            let label = key.label().to_string();
            let active_key = key.clone();
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.selection() == &active_key)
                    on:click=move |_| filter.update(|f| f.select(key.clone()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="section featured">
            <div class="container">
                <div class="section-header">
                    <h2>"Featured Dishes"</h2>
                    <p>
                        "Discover our chef's favorite creations, made with locally-sourced \
                         ingredients and served fresh daily"
                    </p>
                </div>

                <div class="filter-bar">{buttons}</div>

                <div class="dish-grid">
                    <For
                        each=move || visible.get()
                        key=|dish: &MenuItem| dish.id
                        children=|dish: MenuItem| view! { <DishCard dish=dish /> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty">"Nothing in this section yet."</p>
                </Show>

                <div class="section-footer">
                    <a href="/menu" class="btn btn-primary">"View Full Menu →"</a>
                </div>
            </div>
        </section>
    }
}
