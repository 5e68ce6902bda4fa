//! Site footer

use leptos::prelude::*;
use savory_core::content::{LEGAL_LINKS, OPENING_HOURS, QUICK_LINKS, SITE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-col">
                    <h3 class="footer-title">{SITE.name}</h3>
                    <p class="footer-blurb">
                        "Fresh, locally-sourced ingredients meet culinary innovation. \
                         Experience modern American cuisine crafted with passion and served with pride."
                    </p>
                    <div class="footer-social">
                        <a href="#" aria-label="Facebook">"f"</a>
                        <a href="#" aria-label="Instagram">"◎"</a>
                        <a href="#" aria-label="Twitter">"𝕏"</a>
                    </div>
                </div>

                <div class="footer-col">
                    <h3 class="footer-title">"Quick Links"</h3>
                    <ul>
                        {QUICK_LINKS
                            .iter()
                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-col">
                    <h3 class="footer-title">"Contact Us"</h3>
                    <ul class="footer-contact">
                        <li>"📍 " {SITE.address_lines[0]} <br /> {SITE.address_lines[1]}</li>
                        <li>"📞 " {SITE.phone}</li>
                        <li>"✉️ " {SITE.email}</li>
                    </ul>
                </div>

                <div class="footer-col">
                    <h3 class="footer-title">"Opening Hours"</h3>
                    <ul class="footer-hours">
                        {OPENING_HOURS
                            .iter()
                            .map(|slot| {
                                view! {
                                    <li class="hours-days">"🕒 " {slot.days}</li>
                                    <li class="hours-time">{slot.hours}</li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="happy-hour">
                        <p class="happy-hour-title">"🍺 Happy Hour"</p>
                        <p class="happy-hour-time">{SITE.happy_hour}</p>
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{SITE.copyright}</p>
                <div class="footer-legal">
                    {LEGAL_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
