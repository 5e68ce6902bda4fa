//! Hero banner

use leptos::prelude::*;
use savory_core::content::{HERO_STATS, HERO_TILES};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <div class="hero-rating">"★ Rated 4.9 out of 5 on Yelp"</div>

                    <h1 class="hero-title">
                        "Fresh, Local" <span class="accent-green">" Ingredients"</span>
                        <br />
                        "Crafted with" <span class="accent-orange">" Passion"</span>
                    </h1>

                    <p class="hero-lead">
                        "Experience modern American cuisine where farm-fresh ingredients meet \
                         culinary innovation. From hearty breakfasts to gourmet dinners, every \
                         dish is a celebration of flavor."
                    </p>

                    <div class="hero-meta">
                        <span>"🕒 25-35 min delivery"</span>
                        <span class="divider"></span>
                        <span><strong>"$15"</strong>" min order"</span>
                    </div>

                    <div class="hero-actions">
                        <a href="/menu" class="btn btn-primary">"Order Now →"</a>
                        <a href="/reservations" class="btn btn-secondary">"Book a Table"</a>
                    </div>

                    <div class="stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <p class="stat-value">{stat.value}</p>
                                        <p class="stat-label">{stat.label}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-tiles">
                    {HERO_TILES
                        .iter()
                        .map(|tile| {
                            view! {
                                <div class=tile.css_class>
                                    <h3>{tile.title}</h3>
                                    <p>{tile.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="hero-badge">"Locally Sourced Ingredients"</div>
                </div>
            </div>
        </section>
    }
}
