use dioxus::prelude::*;

use crate::components::SiteLayout;
use crate::pages::{About, CaseStudyView, Contact, Home, NotFound, Resume, WorkIndex};
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Portfolio hero, approach and lab sections
/// - `/work` - Filterable project grid
/// - `/work/:slug` - Case study, or an empty state when the slug is unknown
/// - `/resume`, `/about` - Static pages
/// - `/contact` - Home content with the contact drawer forced open
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/work")]
        WorkIndex {},
        #[route("/work/:slug")]
        CaseStudyView { slug: String },
        #[route("/resume")]
        Resume {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Typed route for a path produced by the overlay coordinator.
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or(Route::Home {})
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "AetherLab" }
        style { {root_variables()} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(route_for("/"), Route::Home {});
        assert_eq!(route_for("/contact"), Route::Contact {});
        assert_eq!(
            route_for("/work/nebula-horizon"),
            Route::CaseStudyView {
                slug: "nebula-horizon".to_string()
            }
        );
        assert!(matches!(route_for("/nowhere"), Route::NotFound { .. }));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Resume {}.to_string(), "/resume");
        assert_eq!(
            Route::CaseStudyView {
                slug: "lyra-signal".to_string()
            }
            .to_string(),
            "/work/lyra-signal"
        );
    }
}
