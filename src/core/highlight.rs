//! Keyword emphasis for example output.
//!
//! Example output is a run of blank-line separated paragraphs (one per
//! sentence pair). Each paragraph is cut into plain and emphasized fragments
//! around every occurrence of the term; the adapter decides how emphasis looks.

/// Separator between example paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    Emphasis(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(s) | Fragment::Emphasis(s) => s,
        }
    }
}

/// Splits `text` around each (case-sensitive) occurrence of `term`.
///
/// Concatenating the fragment texts gives back `text` unchanged.
pub fn fragments<'a>(text: &'a str, term: &str) -> Vec<Fragment<'a>> {
    if term.is_empty() {
        return vec![Fragment::Plain(text)];
    }

    let mut out = Vec::new();
    let mut last = 0;
    for (start, matched) in text.match_indices(term) {
        if start > last {
            out.push(Fragment::Plain(&text[last..start]));
        }
        out.push(Fragment::Emphasis(matched));
        last = start + matched.len();
    }
    if last < text.len() || out.is_empty() {
        out.push(Fragment::Plain(&text[last..]));
    }
    out
}

/// Splits example output into paragraphs and emphasizes `term` in each.
/// Joining the paragraphs with [`PARAGRAPH_SEPARATOR`] restores the layout.
pub fn highlight<'a>(output: &'a str, term: &str) -> Vec<Vec<Fragment<'a>>> {
    output
        .split(PARAGRAPH_SEPARATOR)
        .map(|paragraph| fragments(paragraph, term))
        .collect()
}
