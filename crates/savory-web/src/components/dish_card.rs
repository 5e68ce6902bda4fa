//! Dish card shown in the featured gallery

use leptos::prelude::*;
use savory_core::MenuItem;

#[component]
pub fn DishCard(dish: MenuItem) -> impl IntoView {
    let badges = dish
        .badges()
        .into_iter()
        .map(|badge| view! { <span class=badge.css_class()>{badge.label()}</span> })
        .collect_view();
    let price = dish.display_price();
    let category = dish.category.as_str();

    view! {
        <article class="dish-card" data-dish-id=dish.id.to_string()>
            <div class="dish-image">{badges}</div>

            <div class="dish-body">
                <h3 class="dish-name">{dish.name}</h3>
                <p class="dish-subtitle">{dish.subtitle}</p>
                <p class="dish-description">{dish.description}</p>

                <div class="dish-meta">
                    <span class="dish-category">{category}</span>
                    <span class="dish-price">{price}</span>
                </div>

                // No cart behind this yet
                <button type="button" class="btn btn-primary add-to-cart">"+ Add to Cart"</button>
            </div>
        </article>
    }
}
