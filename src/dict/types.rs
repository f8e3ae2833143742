//! Domain types produced by the extraction functions.

use std::fmt;

/// Meaning text shown when a lookup, or a detail section, has nothing to show.
pub const NO_RESULTS: &str = "No results found.";

/// Outcome of resolving a keyword against the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub meaning: String,
    /// `None` whenever `meaning` is [`NO_RESULTS`], whatever the page said.
    pub word_id: Option<String>,
}

impl LookupResult {
    pub fn new(meaning: String, word_id: Option<String>) -> Self {
        let word_id = if meaning == NO_RESULTS {
            None
        } else {
            word_id.filter(|id| !id.is_empty())
        };
        Self { meaning, word_id }
    }

    pub fn not_found() -> Self {
        Self {
            meaning: NO_RESULTS.to_string(),
            word_id: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.word_id.is_none() && self.meaning == NO_RESULTS
    }
}

/// Related-word sections of the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Antonym,
    Synonym,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Antonym => "antonym",
            Category::Synonym => "synonym",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "antonym" => Some(Category::Antonym),
            "synonym" => Some(Category::Synonym),
            _ => None,
        }
    }

    /// Element id of the section container on the detail page.
    pub fn container_id(self) -> &'static str {
        match self {
            Category::Antonym => "OPPOSITE_WORD",
            Category::Synonym => "SIMILAR_WORD",
        }
    }
}

/// One antonym or synonym entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedWordEntry {
    pub headword: String,
    pub gloss: String,
}

/// Related words extracted for one category.
///
/// `NotFound` is kept apart from the entries so an entry whose text happens
/// to read "No results found." is never mistaken for an empty section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelatedWords {
    Entries(Vec<RelatedWordEntry>),
    NotFound,
}

impl fmt::Display for RelatedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelatedWords::NotFound => f.write_str(NO_RESULTS),
            RelatedWords::Entries(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}: {}", entry.headword, entry.gloss)?;
                }
                Ok(())
            }
        }
    }
}

/// An example sentence with its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePair {
    pub source: String,
    pub translation: String,
}
