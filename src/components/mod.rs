//! Site components.
//!
//! Layout chrome (nav bar, menu overlay, contact drawer, cursor, starfield)
//! plus the building blocks the pages compose.

mod contact_drawer;
mod custom_cursor;
mod empty_state;
mod hero_section;
mod layout;
mod menu_overlay;
mod motion_score;
mod nav_bar;
mod portfolio_hero;
mod process_reel;
mod starfield;
mod work_card;

pub use contact_drawer::ContactDrawer;
pub use custom_cursor::CustomCursor;
pub use empty_state::EmptyState;
pub use hero_section::HeroSection;
pub use layout::SiteLayout;
pub use menu_overlay::MenuOverlay;
pub use motion_score::MotionScore;
pub use nav_bar::NavBar;
pub use portfolio_hero::PortfolioHero;
pub use process_reel::ProcessReel;
pub use starfield::Starfield;
pub use work_card::WorkCard;
