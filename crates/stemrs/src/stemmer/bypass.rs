// Identity rule program, the fallback when no language applies

use super::Stemmer;
use crate::engine::StemProgram;

/// Stemmer that runs no steps: every word comes back unchanged.
pub struct BypassStemmer {
    prog: StemProgram,
}

impl Default for BypassStemmer {
    fn default() -> Self {
        BypassStemmer::new()
    }
}

impl BypassStemmer {
    pub fn new() -> Self {
        BypassStemmer {
            prog: StemProgram::new(),
        }
    }
}

impl Stemmer for BypassStemmer {
    fn set_current(&mut self, word: &str) {
        self.prog.set_current(word);
    }

    fn stem(&mut self) -> bool {
        true
    }

    fn get_current(&self) -> String {
        self.prog.get_current()
    }
}
