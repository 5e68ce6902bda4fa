//! Home Page

use leptos::prelude::*;

use crate::sections::{AboutSection, Cta, FeaturedDishes, Hero, Services, Testimonials};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <FeaturedDishes />
            <AboutSection />
            <Services />
            <Testimonials />
            <Cta />
        </div>
    }
}
