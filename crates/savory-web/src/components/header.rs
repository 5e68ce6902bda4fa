//! Site header with top bar, navigation and mobile menu

use leptos::prelude::*;
use savory_core::NavToggle;
use savory_core::content::{ACCOUNT_LINK, NAV_LINKS, SITE};

#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavToggle::default());

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="top-bar">
                <div class="container top-bar-inner">
                    <span class="top-bar-phone">"📞 Order Now: " {SITE.phone}</span>
                    <span class="top-bar-hours">{SITE.hours_summary}</span>
                </div>
            </div>

            <nav class="container main-nav">
                <a href="/" class="logo">
                    <span class="logo-mark">"S"</span>
                    <span class="logo-text">
                        <span class="logo-name">{SITE.name}</span>
                        <span class="logo-tagline">{SITE.tagline}</span>
                    </span>
                </a>

                <div class="nav-links">{desktop_links}</div>

                <div class="nav-actions">
                    <button type="button" class="icon-btn" aria-label="Account">"👤"</button>
                    // Cart is decorative: nothing is ever added
                    <button type="button" class="icon-btn cart" aria-label="Cart">
                        "🛒"
                        <span class="cart-count">"0"</span>
                    </button>
                    <button
                        type="button"
                        class="icon-btn menu-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || nav.get().is_open().to_string()
                        on:click=move |_| nav.update(NavToggle::toggle)
                    >
                        {move || if nav.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            <Show when=move || nav.get().is_open()>
                <div class="container mobile-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="mobile-link"
                                    on:click=move |_| nav.update(NavToggle::close)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="mobile-account">
                        <a href=ACCOUNT_LINK.href class="mobile-link">{ACCOUNT_LINK.label}</a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
