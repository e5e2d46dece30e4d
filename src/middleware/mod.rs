pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static TODO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/api/todos/[^/?]+").expect("Invalid todo id regex"));

/// Collapses per-record paths so spans group by route.
pub(crate) fn normalize_uri(path: &str) -> String {
    TODO_ID_REGEX.replace(path, "/api/todos/{id}").to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_uri;

    #[test]
    fn normalize_uri_test() {
        assert_eq!(normalize_uri("/api/todos/27"), "/api/todos/{id}");
        assert_eq!(normalize_uri("/api/todos/abc?x=1"), "/api/todos/{id}?x=1");
    }

    #[test]
    fn normalize_uri_keeps_collection_paths() {
        assert_eq!(normalize_uri("/api/todos"), "/api/todos");
        assert_eq!(normalize_uri("/api/health"), "/api/health");
    }
}
