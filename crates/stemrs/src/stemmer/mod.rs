// Language front end
// Rule program selection by language tag, plus a stem memo for
// repetitive word streams

mod bypass;
mod german;

pub use bypass::BypassStemmer;
pub use german::GermanStemmer;

use ahash::RandomState;
use smol_str::SmolStr;
use std::collections::HashMap;

/// A per-language rule program over the stemming VM.
///
/// The calling convention is load-run-read: `set_current`, `stem`,
/// `get_current`. Implementations are reusable across words and own
/// all mutable state, so one instance serves one word stream.
pub trait Stemmer {
    /// Load the word to stem.
    fn set_current(&mut self, word: &str);
    /// Run the language's step sequence over the loaded word.
    fn stem(&mut self) -> bool;
    /// The buffer contents after stemming. Side-effect free.
    fn get_current(&self) -> String;
}

/// Supported languages, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    German,
    /// Identity fallback for unknown or empty codes.
    Bypass,
}

impl Language {
    /// Map an ISO 639-1 code to a language. Unknown codes get the
    /// bypass stemmer rather than an error: stemming degrades to
    /// identity, it does not fail.
    pub fn from_code(code: &str) -> Language {
        match code {
            "de" => Language::German,
            _ => Language::Bypass,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::Bypass => "",
        }
    }

    fn new_stemmer(&self) -> Box<dyn Stemmer> {
        match self {
            Language::German => Box::new(GermanStemmer::new()),
            Language::Bypass => Box::new(BypassStemmer::new()),
        }
    }
}

/// Front end owning one rule program and a per-instance memo of
/// stemmed terms.
///
/// The memo is keyed and valued as `SmolStr`; stems are short, so
/// lookups stay allocation-light. Each instance owns its cache; share
/// nothing and no locking is ever needed.
pub struct SnowballStemmer {
    language: Language,
    stemmer: Box<dyn Stemmer>,
    cache: HashMap<SmolStr, SmolStr, RandomState>,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        SnowballStemmer {
            language,
            stemmer: language.new_stemmer(),
            cache: HashMap::with_capacity_and_hasher(256, RandomState::new()),
        }
    }

    pub fn from_code(code: &str) -> Self {
        SnowballStemmer::new(Language::from_code(code))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Stem one term.
    pub fn stem(&mut self, term: &str) -> String {
        self.stemmer.set_current(term);
        self.stemmer.stem();
        self.stemmer.get_current()
    }

    /// Stem one term through the memo. Worth it when the word stream
    /// repeats terms heavily (indexing, query expansion).
    pub fn stem_cached(&mut self, term: &str) -> SmolStr {
        if let Some(hit) = self.cache.get(term) {
            return hit.clone();
        }
        let stemmed = SmolStr::new(self.stem(term));
        self.cache.insert(SmolStr::new(term), stemmed.clone());
        stemmed
    }
}
