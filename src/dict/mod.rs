//! # Dictionary Access
//!
//! Everything that knows about the remote dictionary: its URLs, its page
//! markup, and how pages are fetched.
//!
//! - [`endpoints`]: URL builders (pure)
//! - [`parser`]: HTML extraction (pure)
//! - [`fetcher`]: the `Fetcher` trait and `DictError`
//! - [`http`]: the reqwest implementation of `Fetcher`

pub mod endpoints;
pub mod fetcher;
pub mod http;
pub mod parser;
pub mod types;

pub use endpoints::{Endpoints, example_url};
pub use fetcher::{DictError, Fetcher};
pub use http::HttpFetcher;
pub use parser::{format_examples, parse_detail, parse_examples, parse_related_words, parse_search_result};
pub use types::{Category, ExamplePair, LookupResult, NO_RESULTS, RelatedWordEntry, RelatedWords};

use log::info;

/// Resolves `keyword` to its meaning and word id.
pub async fn lookup(
    fetcher: &dyn Fetcher,
    endpoints: &Endpoints,
    keyword: &str,
) -> Result<LookupResult, DictError> {
    let body = fetcher.fetch(&endpoints.search_url(keyword)).await?;
    let result = parse_search_result(&body)?;
    info!("Lookup {:?} -> word id {:?}", keyword, result.word_id);
    Ok(result)
}

/// Fetches an examples page and extracts its sentence pairs.
pub async fn fetch_examples(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<ExamplePair>, DictError> {
    let body = fetcher.fetch(url).await?;
    parse_examples(&body)
}
