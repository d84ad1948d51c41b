// Among tables: ordered candidate sets for longest-match search
// Backtrack links between entries form an implicit trie

use super::StemProgram;

/// Extra admissibility check run after an entry's pattern has matched.
///
/// Guards get read-only access to the program, with the cursor already
/// moved past the candidate text. A guard returning `false` rejects the
/// match outright and the search continues at the entry's backtrack
/// link: guards override, they do not merely filter.
pub type AmongGuard = fn(&StemProgram) -> bool;

/// One candidate of an among table: a literal pattern plus matching
/// metadata.
pub struct Among {
    /// Pattern as chars. Matched as a prefix (forward search) or a
    /// suffix (backward search) of the working buffer.
    pub(crate) pattern: Vec<char>,
    /// Entry to try next when this one fails. Must point to a strictly
    /// earlier entry, typically the longest proper affix of `pattern`
    /// present in the same table.
    pub(crate) backtrack: Option<usize>,
    /// Tag returned on a successful match; rule programs dispatch on it.
    pub(crate) result: u32,
    pub(crate) guard: Option<AmongGuard>,
}

impl Among {
    pub fn new(pattern: &str, backtrack: Option<usize>, result: u32) -> Self {
        Among {
            pattern: pattern.chars().collect(),
            backtrack,
            result,
            guard: None,
        }
    }

    pub fn with_guard(
        pattern: &str,
        backtrack: Option<usize>,
        result: u32,
        guard: AmongGuard,
    ) -> Self {
        Among {
            guard: Some(guard),
            ..Among::new(pattern, backtrack, result)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// An ordered set of `Among` entries, validated at construction.
///
/// Entry order is significant twice over: the search bisects the table
/// assuming it is sorted by pattern (by reversed pattern for backward
/// tables), and equal-length ties resolve to the latest admissible
/// entry. Backtrack links pointing forward or out of bounds are rule
/// program defects and fail construction immediately.
pub struct AmongTable {
    pub(crate) entries: Vec<Among>,
}

impl AmongTable {
    pub fn new(entries: Vec<Among>) -> Self {
        for (i, entry) in entries.iter().enumerate() {
            if let Some(b) = entry.backtrack {
                if b >= i {
                    panic!(
                        "among table entry {} has backtrack link {} (must point to an earlier entry)",
                        i, b
                    );
                }
            }
        }
        AmongTable { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_backtrack_chain() {
        let table = AmongTable::new(vec![
            Among::new("s", None, 1),
            Among::new("es", Some(0), 2),
            Among::new("ies", Some(1), 3),
        ]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    #[should_panic(expected = "backtrack link")]
    fn test_forward_backtrack_rejected() {
        AmongTable::new(vec![
            Among::new("s", Some(1), 1),
            Among::new("es", None, 2),
        ]);
    }

    #[test]
    #[should_panic(expected = "backtrack link")]
    fn test_self_backtrack_rejected() {
        AmongTable::new(vec![Among::new("s", Some(0), 1)]);
    }

    #[test]
    fn test_empty_pattern_entry() {
        let table = AmongTable::new(vec![Among::new("", None, 1)]);
        assert!(table.entries[0].is_empty());
        assert_eq!(table.entries[0].len(), 0);
    }
}
