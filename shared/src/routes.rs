//! Routing table
//!
//! Maps URL paths to pages. Anything unmatched lands on the home page.

use std::fmt;
use url::form_urlencoded;

/// Page route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product listing, optionally carrying a search query
    Home { query: Option<String> },
    Cart,
    Login,
    Signup,
    Profile,
    Product(i64),
    Contact,
    Forgot,
    /// Password reset, carrying the token from the reset link
    Reset { token: Option<String> },
}

impl Route {
    pub fn home() -> Self {
        Self::Home { query: None }
    }

    /// Home page with a search query; blank queries drop the parameter
    pub fn search(query: &str) -> Self {
        let query = query.trim();
        Self::Home {
            query: (!query.is_empty()).then(|| query.to_string()),
        }
    }

    /// Parse a path (with optional query string) into a route
    pub fn parse(url: &str) -> Self {
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home {
                query: query_param(query, "q"),
            },
            ["cart"] => Self::Cart,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["profile"] => Self::Profile,
            ["contact"] => Self::Contact,
            ["forgot"] => Self::Forgot,
            ["reset"] => Self::Reset {
                token: query_param(query, "token"),
            },
            ["product", id] => match id.parse::<i64>() {
                Ok(id) => Self::Product(id),
                Err(_) => Self::home(),
            },
            _ => Self::home(),
        }
    }

    /// Render the route back to a path
    pub fn path(&self) -> String {
        match self {
            Self::Home { query: None } => "/".to_string(),
            Self::Home { query: Some(q) } => format!("/?q={}", encode_component(q)),
            Self::Cart => "/cart".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Product(id) => format!("/product/{}", id),
            Self::Contact => "/contact".to_string(),
            Self::Forgot => "/forgot".to_string(),
            Self::Reset { token: None } => "/reset".to_string(),
            Self::Reset { token: Some(t) } => format!("/reset?token={}", encode_component(t)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Form-encode a query component
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::home());
        assert_eq!(Route::parse("/cart"), Route::Cart);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/profile"), Route::Profile);
        assert_eq!(Route::parse("/contact"), Route::Contact);
        assert_eq!(Route::parse("/forgot"), Route::Forgot);
        assert_eq!(Route::parse("/product/42"), Route::Product(42));
    }

    #[test]
    fn test_unmatched_falls_back_to_home() {
        assert_eq!(Route::parse("/nope"), Route::home());
        assert_eq!(Route::parse("/product/abc"), Route::home());
        assert_eq!(Route::parse("/product/1/extra"), Route::home());
    }

    #[test]
    fn test_query_parameters() {
        assert_eq!(
            Route::parse("/?q=red%20shoes"),
            Route::Home {
                query: Some("red shoes".into())
            }
        );
        assert_eq!(
            Route::parse("/reset?token=abc123"),
            Route::Reset {
                token: Some("abc123".into())
            }
        );
        assert_eq!(Route::parse("/reset"), Route::Reset { token: None });
    }

    #[test]
    fn test_search_route_round_trips() {
        let route = Route::search("  red & blue ");
        assert_eq!(route.path(), "/?q=red+%26+blue");
        assert_eq!(Route::parse(&route.path()), route);
        assert_eq!(Route::search("   "), Route::home());
    }
}
