//! Client-side locations: a pathname plus ordered search parameters.

use std::fmt;

/// A parsed in-app href such as `/vehicles?page=2&q=ford`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    search: Vec<(String, String)>,
}

impl Location {
    /// A location with no search parameters.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize_path(&path.into()),
            search: Vec::new(),
        }
    }

    /// Parse an href. The fragment is dropped, a missing leading slash is
    /// added and a trailing slash is removed (except for `/`).
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, query) = href.split_once('?').unwrap_or((href, ""));

        let search = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();

        Self {
            path: normalize_path(path),
            search,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of a search parameter.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.search
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn search_params(&self) -> &[(String, String)] {
        &self.search
    }

    /// Set a search parameter, replacing any existing values for it.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.search.retain(|(k, _)| *k != key);
        self.search.push((key, value.into()));
        self
    }

    /// Replace the pathname, keeping the search parameters.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = normalize_path(path);
        self
    }

    /// Path segments without empty parts; `/` has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Serialize back to an href with percent-encoded search values.
    pub fn href(&self) -> String {
        if self.search.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .search
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_and_search() {
        let location = Location::parse("/vehicles?page=2&q=land+rover#top");

        assert_eq!(location.path(), "/vehicles");
        assert_eq!(location.query("page"), Some("2"));
        assert_eq!(location.query("q"), Some("land rover"));
        assert_eq!(location.query("missing"), None);
    }

    #[test]
    fn test_parse_normalizes_slashes() {
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::parse("/").path(), "/");
        assert_eq!(Location::parse("vehicles/").path(), "/vehicles");
    }

    #[test]
    fn test_href_round_trips_encoded_values() {
        let location = Location::new("/login").with_query("to", "/vehicles/abc");

        assert_eq!(location.href(), "/login?to=%2Fvehicles%2Fabc");
        assert_eq!(Location::parse(&location.href()), location);
    }

    #[test]
    fn test_with_query_replaces_existing_value() {
        let location = Location::parse("/vehicles?page=3&q=ford").with_query("page", "4");

        assert_eq!(location.query("page"), Some("4"));
        assert_eq!(location.search_params().len(), 2);
    }

    #[test]
    fn test_segments() {
        let location = Location::parse("/vehicles/abc/destroy");
        let segments: Vec<&str> = location.segments().collect();
        assert_eq!(segments, vec!["vehicles", "abc", "destroy"]);
        assert_eq!(Location::parse("/").segments().count(), 0);
    }
}
