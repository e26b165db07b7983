//! Static route table.

/// Every page the site serves, plus the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    About,
    Contact,
    Legal,
    NotFound,
}

impl Route {
    /// Routed pages in navigation order. `NotFound` is not listed.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Services,
        Route::About,
        Route::Contact,
        Route::Legal,
    ];

    /// Match a request path. Query strings, fragments and a trailing slash
    /// are ignored; anything unknown maps to `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" | "/index.html" => Self::Home,
            "/services" => Self::Services,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/legal" => Self::Legal,
            _ => Self::NotFound,
        }
    }

    /// Site-relative path, `None` for the catch-all.
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Services => Some("/services"),
            Self::About => Some("/about"),
            Self::Contact => Some("/contact"),
            Self::Legal => Some("/legal"),
            Self::NotFound => None,
        }
    }

    /// File written by the static export, relative to the output dir.
    pub const fn output_file(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Services => "services/index.html",
            Self::About => "about/index.html",
            Self::Contact => "contact/index.html",
            Self::Legal => "legal/index.html",
            Self::NotFound => "404.html",
        }
    }

    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            _ => 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_exact() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/services"), Route::Services);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
        assert_eq!(Route::from_path("/legal"), Route::Legal);
    }

    #[test]
    fn test_from_path_ignores_slash_query_fragment() {
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/contact?sent=1"), Route::Contact);
        assert_eq!(Route::from_path("/contact#contact-form-section"), Route::Contact);
        assert_eq!(Route::from_path("/?utm_source=x"), Route::Home);
    }

    #[test]
    fn test_unknown_is_not_found() {
        assert_eq!(Route::from_path("/blog"), Route::NotFound);
        assert_eq!(Route::from_path("/services/immigration"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
        assert_eq!(Route::NotFound.status(), 404);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            let path = route.path().unwrap();
            assert_eq!(Route::from_path(path), route);
            assert_eq!(route.status(), 200);
        }
    }

    #[test]
    fn test_output_files_unique() {
        let mut files: Vec<_> = Route::ALL.iter().map(|r| r.output_file()).collect();
        files.push(Route::NotFound.output_file());
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), 6);
    }
}
