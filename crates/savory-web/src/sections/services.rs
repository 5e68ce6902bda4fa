//! Service cards

use leptos::prelude::*;
use savory_core::content::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="section services">
            <div class="container">
                <div class="section-header">
                    <h2>"Our Services"</h2>
                    <p>"Choose how you want to enjoy our delicious food - we're flexible to your needs"</p>
                </div>

                <div class="service-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="service-features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
