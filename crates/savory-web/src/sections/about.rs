//! About blurb

use leptos::prelude::*;
use savory_core::content::ABOUT_STATS;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="section about">
            <div class="container about-grid">
                <div class="about-visual">
                    <div class="about-tiles">
                        <div class="about-tile tile-slate"></div>
                        <div class="about-tile tile-emerald"></div>
                        <div class="about-tile tile-orange"></div>
                        <div class="about-tile tile-amber"></div>
                    </div>
                    <div class="about-badge">
                        <p class="about-badge-value">"10+"</p>
                        <p>"Years of Excellence"</p>
                    </div>
                </div>

                <div class="about-content">
                    <p class="eyebrow">"Our Story"</p>
                    <h2>"Where Fresh Meets Flavor"</h2>

                    <p>
                        "Founded in 2014, Savory has been a cornerstone of modern American dining \
                         in New York. Our journey began with a simple vision: to elevate classic \
                         American cuisine using fresh, locally-sourced ingredients and innovative \
                         cooking techniques."
                    </p>
                    <p>
                        "Every dish on our menu is crafted with passion - from hearty breakfast \
                         classics to gourmet dinners, from farm-fresh salads to perfectly grilled \
                         steaks. Our chefs, trained at top culinary schools, work directly with \
                         local farmers and suppliers to ensure the freshest ingredients make it to \
                         your plate."
                    </p>

                    <div class="about-stats">
                        {ABOUT_STATS
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

                    <div class="about-actions">
                        <button type="button" class="btn btn-primary">"Learn More"</button>
                        <button type="button" class="btn btn-outline">"Meet Our Chefs"</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
