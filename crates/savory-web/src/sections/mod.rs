//! Home Page Sections

mod about;
mod cta;
mod featured;
mod hero;
mod services;
mod testimonials;

pub use about::AboutSection;
pub use cta::Cta;
pub use featured::FeaturedDishes;
pub use hero::Hero;
pub use services::Services;
pub use testimonials::Testimonials;
