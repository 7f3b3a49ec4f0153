//! Text normalization for keyword matching.

/// Lowercased text split two ways: into whitespace-separated words and
/// into sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
}

impl NormalizedText {
    /// True when the input held nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercase `text`, split words on any whitespace and sentences on
/// `.`, `!` and `?`. Words keep attached punctuation ("fever," stays as is);
/// keyword matching is by substring so this does not hide hits.
///
/// Blank input yields empty lists rather than an error.
pub fn normalize(text: &str) -> NormalizedText {
    let lowered = text.to_lowercase();

    let words = lowered.split_whitespace().map(str::to_string).collect();

    let sentences = lowered
        .split(['.', '!', '?'])
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .collect();

    NormalizedText { words, sentences }
}
