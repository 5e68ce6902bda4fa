//! Call-to-action banner and perk cards

use leptos::prelude::*;
use savory_core::content::{PERKS, PROMO_CODE};

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="section cta">
            <div class="container">
                <div class="cta-banner">
                    <h2>"Ready to Experience Authentic Indian Cuisine?"</h2>
                    <p>"Order now and get 20% off on your first order. Use code: " {PROMO_CODE}</p>
                    <div class="cta-actions">
                        <a href="/menu" class="btn btn-accent">"Order Now →"</a>
                        <a href="/app" class="btn btn-light">"Download Our App"</a>
                    </div>
                </div>

                <div class="perk-grid">
                    {PERKS
                        .iter()
                        .map(|perk| {
                            view! {
                                <div class="perk-card">
                                    <div class="perk-icon">{perk.icon}</div>
                                    <div>
                                        <h3>{perk.title}</h3>
                                        <p>{perk.description}</p>
                                        <a href=perk.link.href class="perk-link">{perk.link.label}</a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
