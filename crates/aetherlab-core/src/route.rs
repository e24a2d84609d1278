//! Navigation targets and the paths they map to.

use std::str::FromStr;

use crate::error::PortfolioError;

pub const HOME_PATH: &str = "/";
pub const WORK_PATH: &str = "/work";
pub const RESUME_PATH: &str = "/resume";
pub const ABOUT_PATH: &str = "/about";
pub const CONTACT_PATH: &str = "/contact";

/// A primary navigation destination.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NavTarget {
    Home,
    Work,
    Resume,
    About,
    Contact,
}

impl NavTarget {
    /// Entries shown in the nav bar and menu overlay, in display order
    pub const PRIMARY: [NavTarget; 4] = [
        NavTarget::Work,
        NavTarget::Resume,
        NavTarget::About,
        NavTarget::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Home => HOME_PATH,
            NavTarget::Work => WORK_PATH,
            NavTarget::Resume => RESUME_PATH,
            NavTarget::About => ABOUT_PATH,
            NavTarget::Contact => CONTACT_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Work => "Work",
            NavTarget::Resume => "Résumé",
            NavTarget::About => "About",
            NavTarget::Contact => "Contact",
        }
    }

    /// Secondary line shown under each entry in the menu overlay
    pub fn description(&self) -> &'static str {
        match self {
            NavTarget::Home => "Back to the hub",
            NavTarget::Work => "Selected case studies",
            NavTarget::Resume => "Experience & skills",
            NavTarget::About => "Studio background",
            NavTarget::Contact => "Start a collaboration",
        }
    }

    /// Stable identifier, also used as the section id on the home page
    pub fn id(&self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::Work => "work",
            NavTarget::Resume => "resume",
            NavTarget::About => "about",
            NavTarget::Contact => "contact",
        }
    }

    /// Map a scroll-spy section id back to a nav entry, if it names one.
    pub fn from_section_id(id: &str) -> Option<NavTarget> {
        Self::PRIMARY.into_iter().find(|target| target.id() == id)
    }
}

impl FromStr for NavTarget {
    type Err = PortfolioError;

    /// Parse an exact route path (a trailing slash is tolerated).
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Ok(NavTarget::Home),
            WORK_PATH => Ok(NavTarget::Work),
            RESUME_PATH => Ok(NavTarget::Resume),
            ABOUT_PATH => Ok(NavTarget::About),
            CONTACT_PATH => Ok(NavTarget::Contact),
            _ => Err(PortfolioError::UnknownRoute(path.to_string())),
        }
    }
}

/// Treat an empty pathname as the root route.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        HOME_PATH.to_string()
    } else {
        path.to_string()
    }
}
