//! The current location, as carried in the URL fragment.
//!
//! A fragment of `#/about?tab=team` yields the path `/about` and the query
//! `tab=team`. Only the path takes part in route matching.

use std::fmt;
use std::str::FromStr;

/// A normalized location: an absolute path plus an optional query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Location {
    /// Creates a location from a bare path such as `/about` or `about?x=1`.
    ///
    /// An empty path is the root `/`, and a missing leading slash is added.
    #[must_use]
    pub fn new(path: &str) -> Self {
        // A nested fragment inside the fragment carries no routing meaning.
        let path = path.split_once('#').map_or(path, |(before, _)| before);

        let (path, query) = match path.split_once('?') {
            Some((path, query)) if !query.is_empty() => (path, Some(query.to_string())),
            Some((path, _)) => (path, None),
            None => (path, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self { path, query }
    }

    /// The root location `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
        }
    }

    /// Parses a raw `window.location.hash` value, with or without its `#`.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self::new(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    /// The path used for route matching.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query string, without its leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Renders the location as a URL fragment, e.g. `#/about`.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        format!("#{self}")
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(query) => write!(f, "{}?{}", self.path, query),
            None => f.write_str(&self.path),
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_fragment(s))
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_is_root() {
        assert_eq!(Location::from_fragment(""), Location::root());
        assert_eq!(Location::from_fragment("#"), Location::root());
        assert_eq!(Location::from_fragment("#/").path(), "/");
    }

    #[test]
    fn fragment_path_is_extracted() {
        let location = Location::from_fragment("#/about");
        assert_eq!(location.path(), "/about");
        assert_eq!(location.query(), None);
    }

    #[test]
    fn missing_leading_slash_is_added() {
        assert_eq!(Location::from_fragment("#about").path(), "/about");
        assert_eq!(Location::new("about").path(), "/about");
    }

    #[test]
    fn query_is_split_from_path() {
        let location = Location::from_fragment("#/about?tab=team");
        assert_eq!(location.path(), "/about");
        assert_eq!(location.query(), Some("tab=team"));
        assert_eq!(location.to_fragment(), "#/about?tab=team");

        let bare = Location::from_fragment("#/about?");
        assert_eq!(bare.query(), None);
        assert_eq!(bare, Location::new("/about"));
    }

    #[test]
    fn nested_fragment_is_discarded() {
        let location = Location::from_fragment("#/about#team");
        assert_eq!(location.path(), "/about");
        assert_eq!(location.to_fragment(), "#/about");
    }

    #[test]
    fn trailing_slash_is_preserved() {
        assert_eq!(Location::new("/about/").path(), "/about/");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["", "#", "#about", "#/about?x=1", "/missing#frag"] {
            let once = Location::from_fragment(raw);
            let twice = Location::from_fragment(&once.to_fragment());
            assert_eq!(once, twice, "normalizing {raw:?} twice changed it");
        }
    }

    #[test]
    fn parses_from_str() {
        let location: Location = "#/about".parse().expect("infallible");
        assert_eq!(location.to_string(), "/about");
    }
}
