//! Word filters applied to source values before indexing
//!
//! A filter either rewrites a word (for example lower-casing it) or drops
//! it by returning `None`. Filters run in order; the output of one is the
//! input of the next.

/// Normalization step for words entering the index.
pub trait WordFilter {
    /// Rewritten word, or `None` to skip it.
    fn apply(&self, word: &str) -> Option<String>;
}

impl<F> WordFilter for F
where
    F: Fn(&str) -> Option<String>,
{
    fn apply(&self, word: &str) -> Option<String> {
        self(word)
    }
}

/// Lower-case the word.
pub fn lowercase(word: &str) -> Option<String> {
    Some(word.to_lowercase())
}

/// Drop words that are empty or whitespace only.
pub fn skip_blank(word: &str) -> Option<String> {
    if word.trim().is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

/// Run `word` through every filter in order.
pub fn apply_filters(word: &str, filters: &[&dyn WordFilter]) -> Option<String> {
    let mut current = word.to_string();
    for filter in filters {
        current = filter.apply(&current)?;
    }
    Some(current)
}
