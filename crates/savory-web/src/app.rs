//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Header};
use crate::pages::HomePage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
