use percent_encoding::percent_decode_str;

use crate::constants::QUERY_PARAM;

/// Pull the `data` value out of a query string such as `?foo=1&data=abc`.
/// The leading `?` is optional and the value is percent-decoded.
pub fn token_from_search(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    for pair in search.split('&') {
        let mut it = pair.splitn(2, '=');
        let key = it.next()?;
        let value = it.next().unwrap_or("");
        if key == QUERY_PARAM && !value.is_empty() {
            return Some(
                percent_decode_str(value)
                    .decode_utf8()
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| value.to_string()),
            );
        }
    }
    None
}

pub fn search_for(token: &str) -> String {
    format!("?{}={}", QUERY_PARAM, token)
}

/// Absolute link that reopens the page with `token`.
pub fn share_url(origin: &str, token: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), search_for(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_search() {
        assert_eq!(token_from_search("?data=abc"), Some("abc".to_string()));
        assert_eq!(token_from_search("data=abc"), Some("abc".to_string()));
        assert_eq!(token_from_search("?x=1&data=a%2Db&y=2"), Some("a-b".to_string()));
        assert_eq!(token_from_search("?metadata=abc"), None);
        assert_eq!(token_from_search("?data="), None);
        assert_eq!(token_from_search(""), None);
    }

    #[test]
    fn test_share_url() {
        assert_eq!(share_url("https://spin.example", "abc"), "https://spin.example/?data=abc");
        assert_eq!(share_url("https://spin.example/", "abc"), "https://spin.example/?data=abc");
    }
}
