use wasm_bindgen::JsValue;
use web_sys::window;

/// Parse a query string (with or without the leading '?') into ordered
/// key/value pairs. Duplicate keys are kept; callers that care take the
/// first occurrence.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn get_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Apply pagination keys to an existing query. With `preserve` the other
/// parameters keep their position and the pagination keys are updated in
/// place (or appended); without it the result is the pagination keys alone.
pub fn merge_params(
    existing: &[(String, String)],
    updates: &[(String, String)],
    preserve: bool,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = if preserve {
        existing.to_vec()
    } else {
        Vec::new()
    };

    for (key, value) in updates {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }

    merged
}

/// Current query string of the browser URL, "" outside a browser context.
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrite the query string in place (no navigation, no history entry) so
/// the URL stays a shareable representation of the current list state.
pub fn replace_search(pairs: &[(String, String)]) {
    let Some(win) = window() else { return };
    let Ok(pathname) = win.location().pathname() else { return };

    let query = encode_query(pairs);
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query)
    };

    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()));
    }
}

fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|c| c.into_owned())
        .unwrap_or(plus_decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_query_with_and_without_question_mark() {
        let expected = pairs(&[("page", "3"), ("search", "french")]);
        assert_eq!(parse_query("?page=3&search=french"), expected);
        assert_eq!(parse_query("page=3&search=french"), expected);
        assert_eq!(parse_query(""), vec![]);
    }

    #[test]
    fn decodes_escapes_and_plus_as_space() {
        let parsed = parse_query("search=a1%20course&name=Ana+Ruiz");
        assert_eq!(parsed[0].1, "a1 course");
        assert_eq!(parsed[1].1, "Ana Ruiz");
    }

    #[test]
    fn encode_round_trips_reserved_characters() {
        let original = pairs(&[("search", "tea & scones"), ("page", "1")]);
        assert_eq!(parse_query(&encode_query(&original)), original);
    }

    #[test]
    fn merge_preserves_unrelated_params_in_place() {
        let existing = pairs(&[("status", "active"), ("page", "1")]);
        let updates = pairs(&[("page", "3"), ("page_size", "20")]);
        let merged = merge_params(&existing, &updates, true);
        assert_eq!(
            merged,
            pairs(&[("status", "active"), ("page", "3"), ("page_size", "20")])
        );
    }

    #[test]
    fn merge_without_preserve_keeps_only_pagination_keys() {
        let existing = pairs(&[("status", "active"), ("page", "1")]);
        let updates = pairs(&[("page", "3"), ("page_size", "20")]);
        let merged = merge_params(&existing, &updates, false);
        assert_eq!(merged, updates);
    }

    #[test]
    fn get_param_takes_first_occurrence() {
        let existing = pairs(&[("page", "2"), ("page", "9")]);
        assert_eq!(get_param(&existing, "page"), Some("2"));
        assert_eq!(get_param(&existing, "missing"), None);
    }
}
