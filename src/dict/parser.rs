//! # Page Extraction
//!
//! Pure functions turning dictionary HTML into domain types. Nothing here
//! performs I/O; callers fetch the markup through a [`Fetcher`](super::Fetcher).
//!
//! Three page shapes are understood:
//!
//! - **search results**: meaning text plus the word id, found either in an
//!   auto-redirect `<meta http-equiv="Refresh">` (single match) or in the
//!   first "clean search" link (ambiguous match)
//! - **word detail**: `#OPPOSITE_WORD` / `#SIMILAR_WORD` lists of related words
//! - **examples**: `<li>` items holding a `.txt_example` sentence and its
//!   `.mean_example` translation

use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::endpoints::DEFAULT_HOST;
use super::fetcher::DictError;
use super::types::{Category, ExamplePair, LookupResult, RelatedWordEntry, RelatedWords};

fn selector(css: &str) -> Result<Selector, DictError> {
    Selector::parse(css).map_err(|e| DictError::Parse(format!("invalid selector {css}: {e:?}")))
}

/// Concatenated text of every descendant of `element` matching `sel`.
fn text_of(element: ElementRef<'_>, sel: &Selector) -> String {
    element.select(sel).flat_map(|e| e.text()).collect()
}

/// Reads the `wordid` query parameter. Relative links resolve against the
/// dictionary host.
fn word_id_from_url(href: &str) -> Option<String> {
    let base = Url::parse(DEFAULT_HOST).ok();
    let url = Url::options().base_url(base.as_ref()).parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "wordid")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Target of a refresh directive such as `0;URL=https://...`.
fn refresh_target(content: &str) -> Option<&str> {
    let start = content.to_ascii_lowercase().find("url=")? + "url=".len();
    Some(content[start..].trim().trim_matches(|c: char| c == '\'' || c == '"'))
}

/// Extracts the meaning and word id from a search result page.
///
/// A page without a description (or with an empty one) is a miss, not an
/// error: it yields [`LookupResult::not_found`].
pub fn parse_search_result(html: &str) -> Result<LookupResult, DictError> {
    let document = Html::parse_document(html);

    let description = selector("meta[property='og:description']")?;
    let meaning = document
        .select(&description)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.trim().is_empty());
    let Some(meaning) = meaning else {
        debug!("No description meta on search page");
        return Ok(LookupResult::not_found());
    };

    let refresh = selector("meta[http-equiv]")?;
    let redirect = document.select(&refresh).find(|meta| {
        meta.value()
            .attr("http-equiv")
            .is_some_and(|v| v.eq_ignore_ascii_case("refresh"))
    });

    // The two paths never mix: a page with a redirect is a single match and
    // its links point at unrelated words.
    let word_id = match redirect {
        Some(meta) => meta
            .value()
            .attr("content")
            .and_then(refresh_target)
            .and_then(word_id_from_url),
        None => {
            let link = selector("a.txt_cleansch, a[txt_cleansch]")?;
            document
                .select(&link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(word_id_from_url)
        }
    };

    Ok(LookupResult::new(meaning.to_string(), word_id))
}

/// Extracts related words for `category` ("antonym" or "synonym").
///
/// Unknown categories give an empty list rather than an error.
pub fn parse_detail(html: &str, category: &str) -> Result<RelatedWords, DictError> {
    match Category::from_name(category) {
        Some(category) => parse_related_words(html, category),
        None => {
            warn!("Unsupported detail category: {:?}", category);
            Ok(RelatedWords::Entries(Vec::new()))
        }
    }
}

pub fn parse_related_words(html: &str, category: Category) -> Result<RelatedWords, DictError> {
    let document = Html::parse_document(html);
    let container = selector(&format!("#{}", category.container_id()))?;
    let item = selector("li")?;
    let headword = selector("a")?;
    let gloss = selector("span")?;

    let Some(container) = document.select(&container).next() else {
        return Ok(RelatedWords::NotFound);
    };

    let entries: Vec<RelatedWordEntry> = container
        .select(&item)
        .map(|li| RelatedWordEntry {
            headword: text_of(li, &headword).trim().to_string(),
            gloss: text_of(li, &gloss).trim().to_string(),
        })
        .collect();

    if entries.is_empty() {
        Ok(RelatedWords::NotFound)
    } else {
        Ok(RelatedWords::Entries(entries))
    }
}

/// Extracts sentence/translation pairs from an examples page.
///
/// The sentence span can carry trailing widgets after a line break; only
/// its first line is kept. Items without a sentence are skipped.
pub fn parse_examples(html: &str) -> Result<Vec<ExamplePair>, DictError> {
    let document = Html::parse_document(html);
    let item = selector("li")?;
    let sentence = selector(".txt_example")?;
    let meaning = selector(".mean_example")?;

    let pairs = document
        .select(&item)
        .filter_map(|li| {
            let text: String = li.select(&sentence).next()?.text().collect();
            let source = text.trim_start().lines().next().unwrap_or_default().trim_end();
            let translation = li
                .select(&meaning)
                .next()
                .map(|e| e.text().collect::<String>().trim().to_string())
                .unwrap_or_default();
            Some(ExamplePair {
                source: source.to_string(),
                translation,
            })
        })
        .collect();

    Ok(pairs)
}

/// Renders pairs as `"<source>\n -> <translation>\n\n"` blocks.
pub fn format_examples(pairs: &[ExamplePair]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}\n -> {}\n\n", pair.source, pair.translation))
        .collect()
}
