//! UI Components

mod dish_card;
mod footer;
mod header;

pub use dish_card::DishCard;
pub use footer::Footer;
pub use header::Header;
