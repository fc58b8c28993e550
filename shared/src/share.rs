use log::warn;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::Result;
use crate::option_list::OptionList;
use crate::query::share_url;

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub data: ShortenData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenData {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

/// Everything the share sheet needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRequest {
    pub url: String,
    pub title: String,
    pub text: String,
}

impl ShareRequest {
    pub fn new(origin: &str, title: impl Into<String>, options: &OptionList) -> Result<Self> {
        let token = codec::encode_checked(options)?;
        Ok(Self {
            url: share_url(origin, &token),
            title: title.into(),
            text: options.share_summary(),
        })
    }

    pub fn shorten_request(&self) -> ShortenRequest {
        ShortenRequest {
            url: self.url.clone(),
        }
    }

    /// Swap in the shortener's answer when it is usable, otherwise keep the
    /// full link.
    pub fn with_shortened(mut self, body: Option<&str>) -> Self {
        self.url = resolve_share_url(&self.url, body);
        self
    }
}

/// The short URL from a shortener response body, or `full_url` if the body is
/// missing or has the wrong shape.
pub fn resolve_share_url(full_url: &str, body: Option<&str>) -> String {
    let Some(body) = body else {
        return full_url.to_string();
    };
    match serde_json::from_str::<ShortenResponse>(body) {
        Ok(resp) if !resp.data.short_url.trim().is_empty() => resp.data.short_url,
        Ok(_) => {
            warn!("shortener returned an empty url");
            full_url.to_string()
        }
        Err(e) => {
            warn!("unexpected shortener response: {}", e);
            full_url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouletteError;
    use crate::option_list::{list_of, WheelOption};

    #[test]
    fn test_share_request_embeds_token() {
        let options = list_of(&["A", "B"]);
        let req = ShareRequest::new("https://spin.example", "Roulette", &options).unwrap();
        assert_eq!(
            req.url,
            format!("https://spin.example/?data={}", codec::encode(&options))
        );
        assert_eq!(req.text, "A,B... Roulette");
        assert_eq!(
            serde_json::to_string(&req.shorten_request()).unwrap(),
            format!(r#"{{"url":"{}"}}"#, req.url)
        );
    }

    #[test]
    fn test_share_request_oversize() {
        let options: OptionList = (0..500)
            .map(|i| WheelOption::new(format!("entry {}", i)).unwrap())
            .collect();
        assert!(matches!(
            ShareRequest::new("https://spin.example", "Roulette", &options),
            Err(RouletteError::OversizeEncoding { .. })
        ));
    }

    #[test]
    fn test_resolve_share_url() {
        let full = "https://spin.example/?data=abc";
        assert_eq!(
            resolve_share_url(full, Some(r#"{"data":{"shortUrl":"https://s.example/x"}}"#)),
            "https://s.example/x"
        );
        assert_eq!(resolve_share_url(full, None), full);
        assert_eq!(resolve_share_url(full, Some("<html>")), full);
        assert_eq!(resolve_share_url(full, Some(r#"{"shortUrl":"x"}"#)), full);
        assert_eq!(resolve_share_url(full, Some(r#"{"data":{"shortUrl":""}}"#)), full);
    }
}
