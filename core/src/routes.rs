//! Client-side routes and the static landing page.
//!
//! Two routes, no query parameters, no deep-linking into edit state.

/// The two pages this client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — the informational landing page.
    Home,
    /// `/crud` — the user management page.
    Crud,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/crud" => Some(Route::Crud),
            _ => None,
        }
    }

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Crud => "/crud",
        }
    }
}

/// Static content of the landing page. No data dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub title: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub cta_path: &'static str,
}

pub fn home_page() -> HomePage {
    HomePage {
        title: "Welcome to Run Registration",
        tagline: "Manage registered users: list, create, edit, and delete records.",
        features: &[
            "User listing",
            "Create and edit via modal form",
            "Confirmed deletes",
            "Backed by a remote HTTP API",
        ],
        cta_label: "View CRUD Page",
        cta_path: Route::Crud.path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/crud"), Some(Route::Crud));
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::from_path("/crud/7"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/crud?edit=1"), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Home, Route::Crud] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn home_page_links_to_crud() {
        assert_eq!(home_page().cta_path, "/crud");
    }
}
