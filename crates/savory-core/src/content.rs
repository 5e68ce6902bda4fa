//! Static Site Content
//!
//! Copy, links and figures rendered as-is by the landing page sections.

use serde::Serialize;

/// Brand and contact details shared by the header and footer
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address_lines: [&'static str; 2],
    pub hours_summary: &'static str,
    pub happy_hour: &'static str,
    pub copyright: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Savory",
    tagline: "Modern American Kitchen",
    title: "Savory - Modern American Kitchen & Bar",
    description: "Fresh, locally-sourced American cuisine with a modern twist. \
                  Order online for delivery, takeaway, or dine-in at our contemporary restaurant.",
    phone: "(555) 123-4567",
    email: "info@savoryrestaurant.com",
    address_lines: ["456 Main Street,", "New York, NY 10001"],
    hours_summary: "Open: Mon-Thu 11AM-10PM, Fri-Sat 11AM-11PM, Sun 10AM-9PM",
    happy_hour: "Daily: 3:00 PM - 6:00 PM",
    copyright: "© 2024 Savory Restaurant. All rights reserved.",
};

/// Code promoted by the call-to-action banner
pub const PROMO_CODE: &str = "WELCOME20";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/menu", label: "Menu" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/catering", label: "Catering" },
    NavLink { href: "/contact", label: "Contact" },
];

pub const ACCOUNT_LINK: NavLink = NavLink { href: "/login", label: "Login / Sign Up" };

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { href: "/menu", label: "Our Menu" },
    NavLink { href: "/reservations", label: "Reservations" },
    NavLink { href: "/catering", label: "Catering Services" },
    NavLink { href: "/gift-cards", label: "Gift Cards" },
    NavLink { href: "/careers", label: "Careers" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { href: "/privacy", label: "Privacy Policy" },
    NavLink { href: "/terms", label: "Terms of Service" },
    NavLink { href: "/sitemap", label: "Sitemap" },
];

/// A headline figure such as "25K+ Happy Customers"
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "200+", label: "Menu Items" },
    Stat { value: "25K+", label: "Happy Customers" },
    Stat { value: "10+", label: "Years Experience" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "100%", label: "Fresh Daily" },
    Stat { value: "20+", label: "Expert Staff" },
    Stat { value: "7", label: "Days a Week" },
    Stat { value: "4.9★", label: "Customer Rating" },
];

pub const TESTIMONIAL_STATS: &[Stat] = &[
    Stat { value: "4.8/5", label: "Average Rating" },
    Stat { value: "10K+", label: "Happy Customers" },
    Stat { value: "50K+", label: "Orders Delivered" },
];

/// Hero image grid tile
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Tile {
    pub title: &'static str,
    pub caption: &'static str,
    pub css_class: &'static str,
}

pub const HERO_TILES: &[Tile] = &[
    Tile { title: "Breakfast", caption: "All-Day Breakfast Menu", css_class: "tile tile-orange" },
    Tile { title: "Farm Fresh", caption: "Salads & Bowls", css_class: "tile tile-emerald" },
    Tile { title: "Grill & BBQ", caption: "Smoked to Perfection", css_class: "tile tile-amber" },
    Tile { title: "Burgers & Wings", caption: "American Classics", css_class: "tile tile-red" },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🚚",
        title: "Home Delivery",
        description: "Fast and safe delivery to your doorstep within 30-45 minutes",
        features: ["Live tracking", "Contactless delivery", "Free above ₹500"],
    },
    Service {
        icon: "🏪",
        title: "Takeaway",
        description: "Order ahead and pick up at your convenience",
        features: ["Ready in 20 mins", "10% discount", "Skip the queue"],
    },
    Service {
        icon: "🍽️",
        title: "Dine-In",
        description: "Experience our warm hospitality and ambience",
        features: ["Table reservation", "Special occasions", "Private dining"],
    },
    Service {
        icon: "📅",
        title: "Catering",
        description: "Perfect for events, parties, and corporate gatherings",
        features: ["Custom menus", "Professional service", "All occasions"],
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// 1 to 5
    pub rating: u8,
}

impl Testimonial {
    /// Rating as a row of star glyphs
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Priya Sharma",
        role: "Food Blogger",
        content: "The most authentic Indian food I've had outside of India! \
                  The spice levels are perfect and the flavors are incredibly rich.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "Regular Customer",
        content: "Been ordering from Spice Garden for 2 years now. Consistent quality, \
                  great portions, and their butter chicken is to die for!",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Anjali Patel",
        role: "Corporate Client",
        content: "We regularly order catering for our office events. Professional service, \
                  timely delivery, and everyone loves the food!",
        rating: 5,
    },
];

/// Feature card under the call-to-action banner
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Perk {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: NavLink,
}

pub const PERKS: &[Perk] = &[
    Perk {
        icon: "🎁",
        title: "Loyalty Rewards Program",
        description: "Earn points with every order and redeem them for free dishes and exclusive discounts.",
        link: NavLink { href: "/rewards", label: "Learn More →" },
    },
    Perk {
        icon: "%",
        title: "Group Order Discounts",
        description: "Planning a party? Get up to 30% off on bulk orders for groups of 10 or more.",
        link: NavLink { href: "/catering", label: "Get Quote →" },
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: "Monday - Friday", hours: "11:00 AM - 10:00 PM" },
    OpeningHours {
        days: "Saturday - Sunday",
        hours: "11:00 AM - 11:00 PM, Sun: 10:00 AM - 9:00 PM",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_stars() {
        assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");

        let harsh = Testimonial { rating: 2, ..TESTIMONIALS[0] };
        assert_eq!(harsh.stars(), "★★");

        let inflated = Testimonial { rating: 9, ..TESTIMONIALS[0] };
        assert_eq!(inflated.stars().chars().count(), 5);
    }

    #[test]
    fn test_testimonial_ids_unique() {
        let ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_nav_links_are_absolute() {
        for link in NAV_LINKS.iter().chain(QUICK_LINKS).chain(LEGAL_LINKS) {
            assert!(link.href.starts_with('/'), "{} -> {}", link.label, link.href);
        }
        assert_eq!(NAV_LINKS[0], NavLink { href: "/", label: "Home" });
    }

    #[test]
    fn test_site_serializes() {
        let json = serde_json::to_value(SITE).unwrap();
        assert_eq!(json["name"], "Savory");
        assert_eq!(json["address_lines"][1], "New York, NY 10001");
    }
}
