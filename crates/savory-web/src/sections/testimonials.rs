//! Customer testimonials

use leptos::prelude::*;
use savory_core::content::{TESTIMONIALS, TESTIMONIAL_STATS};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials">
            <div class="container">
                <div class="section-header">
                    <h2>"What Our Customers Say"</h2>
                    <p>"Don't just take our word for it - hear from our satisfied customers"</p>
                </div>

                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial-card">
                                    <div class="stars" aria-label=format!("{} out of 5", t.rating)>
                                        {t.stars()}
                                    </div>
                                    <p class="quote">"\u{201c}" {t.content} "\u{201d}"</p>
                                    <footer>
                                        <p class="author">{t.name}</p>
                                        <p class="author-role">{t.role}</p>
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="testimonial-stats">
                    {TESTIMONIAL_STATS
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
        </section>
    }
}
