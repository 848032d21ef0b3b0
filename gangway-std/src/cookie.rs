//! Token extraction from a raw cookie header.

use percent_encoding::percent_decode_str;

/// Extract the value stored under `key` in a semicolon-delimited cookie
/// header.
///
/// Fragments are split once on the first `=`; fragments without one are
/// not a match. Both key and value are trimmed, the key is compared
/// case-sensitively, and the first matching fragment wins even when
/// duplicate keys exist. The selected value is percent-decoded (lossily,
/// so decoding never fails).
///
/// Returns the empty string when no fragment matches. A matched value
/// that decodes to the empty string is indistinguishable from "no match";
/// both are treated as "no token".
///
/// # Example
///
/// ```rust,ignore
/// let token = cookie::token("XSRF-TOKEN=abc%20def; other=1", "XSRF-TOKEN");
/// assert_eq!(token, "abc def");
/// ```
pub fn token(header: &str, key: &str) -> String {
    header
        .split(';')
        .filter_map(|fragment| fragment.split_once('='))
        .map(|(raw_key, raw_value)| (raw_key.trim(), raw_value.trim()))
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::token;

    #[test]
    fn extracts_among_other_cookies() {
        let header = "session=xyz; XSRF-TOKEN=abc123; theme=dark";
        assert_eq!(token(header, "XSRF-TOKEN"), "abc123");
    }

    #[test]
    fn percent_decodes_the_value() {
        assert_eq!(token("XSRF-TOKEN=abc%20def; other=1", "XSRF-TOKEN"), "abc def");
        assert_eq!(token("t=%7B%22a%22%3A1%7D", "t"), r#"{"a":1}"#);
    }

    #[test]
    fn trims_whitespace_around_keys_and_values() {
        assert_eq!(token("  XSRF-TOKEN  =  abc  ; other=1", "XSRF-TOKEN"), "abc");
        assert_eq!(token("a=1;XSRF-TOKEN=abc", "XSRF-TOKEN"), "abc");
    }

    #[test]
    fn no_match_returns_empty() {
        assert_eq!(token("session=xyz; theme=dark", "XSRF-TOKEN"), "");
        assert_eq!(token("", "XSRF-TOKEN"), "");
    }

    #[test]
    fn key_match_is_case_sensitive() {
        assert_eq!(token("xsrf-token=abc", "XSRF-TOKEN"), "");
    }

    #[test]
    fn malformed_fragments_are_skipped() {
        assert_eq!(token("garbage; ; XSRF-TOKEN=abc; =", "XSRF-TOKEN"), "abc");
    }

    #[test]
    fn first_match_wins_on_duplicate_keys() {
        assert_eq!(token("XSRF-TOKEN=first; XSRF-TOKEN=second", "XSRF-TOKEN"), "first");
    }

    #[test]
    fn value_may_contain_equals_signs() {
        assert_eq!(token("XSRF-TOKEN=a=b=c", "XSRF-TOKEN"), "a=b=c");
    }

    #[test]
    fn empty_value_is_treated_as_no_token() {
        assert_eq!(token("XSRF-TOKEN=; other=1", "XSRF-TOKEN"), "");
    }
}
