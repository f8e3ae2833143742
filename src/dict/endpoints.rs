//! URL builders for the dictionary site. Pure, no I/O.

use url::Url;
use url::form_urlencoded::Serializer;

use super::fetcher::DictError;

pub const DEFAULT_HOST: &str = "https://dic.daum.net/";
pub const DEFAULT_LANGUAGE: &str = "eng";

const SEARCH_PATH: &str = "search.do";
const DETAIL_PATH: &str = "word/view.do";
const EXAMPLE_PATH: &str = "word/view_example_more.do";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Always ends with `/`.
    host: String,
    language: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Endpoints {
    pub fn new(host: &str, language: &str) -> Result<Self, DictError> {
        Url::parse(host).map_err(|e| DictError::Parse(format!("invalid host {host}: {e}")))?;
        let host = if host.ends_with('/') {
            host.to_string()
        } else {
            format!("{host}/")
        };
        Ok(Self {
            host,
            language: language.to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn search_url(&self, keyword: &str) -> String {
        let query = Serializer::new(String::new())
            .append_pair("q", keyword)
            .append_pair("dic", &self.language)
            .finish();
        format!("{}{}?{}", self.host, SEARCH_PATH, query)
    }

    pub fn detail_url(&self, word_id: &str) -> String {
        let query = Serializer::new(String::new())
            .append_pair("wordid", word_id)
            .finish();
        format!("{}{}?{}", self.host, DETAIL_PATH, query)
    }

    pub fn example_url(&self, word_id: &str, page: u32) -> String {
        let query = Serializer::new(String::new())
            .append_pair("wordid", word_id)
            .append_pair("summaryid", "etc")
            .append_pair("page", &page.to_string())
            .finish();
        format!("{}{}?{}", self.host, EXAMPLE_PATH, query)
    }
}

/// Example page URL on the default host.
pub fn example_url(word_id: &str, page: u32) -> String {
    Endpoints::default().example_url(word_id, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_url_has_all_params() {
        let url = example_url("ID7", 3);
        assert!(url.starts_with(DEFAULT_HOST));
        assert!(url.contains("wordid=ID7"));
        assert!(url.contains("summaryid=etc"));
        assert!(url.contains("page=3"));
    }

    #[test]
    fn test_example_url_is_deterministic() {
        let first = example_url("ID7", 3);
        let _ = example_url("OTHER", 9);
        assert_eq!(example_url("ID7", 3), first);
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.search_url("look up"),
            "https://dic.daum.net/search.do?q=look+up&dic=eng"
        );
    }

    #[test]
    fn test_host_without_trailing_slash() {
        let endpoints = Endpoints::new("http://127.0.0.1:8080", "eng").unwrap();
        assert_eq!(
            endpoints.detail_url("W1"),
            "http://127.0.0.1:8080/word/view.do?wordid=W1"
        );
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(matches!(
            Endpoints::new("not a url", "eng"),
            Err(DictError::Parse(_))
        ));
    }
}
