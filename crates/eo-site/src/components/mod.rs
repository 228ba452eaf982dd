//! Site components

mod footer;
mod nav;
mod review_carousel;
mod visitor_badge;

pub use footer::SiteFooter;
pub use nav::SiteNav;
pub use review_carousel::ReviewCarousel;
pub use visitor_badge::VisitorBadge;
