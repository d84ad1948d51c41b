// Among search: longest-match lookup over a sorted candidate table
// One bisection-plus-backtrack core serves both scan directions

use super::among::{Among, AmongTable};
use super::StemProgram;

/// Scan direction of an among search.
///
/// Forward matches table patterns as prefixes of the text at the
/// cursor; backward matches them as suffixes of the text ending at the
/// cursor. All index arithmetic below is mirrored through this tag so
/// the two searches cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Longest-match search against `table` starting at the program cursor.
///
/// Phase one bisects the table, extending the prefix shared with the
/// text (`common_i`/`common_j` carry the match length already proven
/// for the lower and upper fence, so no character is compared twice).
/// Phase two walks backtrack links from the landing entry: the first
/// fully matched entry whose guard admits it wins, which realizes both
/// longest-match and latest-entry tie-breaking.
///
/// On success the cursor moves past the matched text and the entry's
/// result tag is returned. On failure the cursor is restored and the
/// result is `None`; no match is an ordinary outcome, not an error.
pub(crate) fn find_among_dir(
    prog: &mut StemProgram,
    table: &AmongTable,
    dir: Direction,
) -> Option<u32> {
    if table.is_empty() {
        return None;
    }

    let c = prog.cursor;
    let mut i = 0usize;
    let mut j = table.len();
    let mut common_i = 0usize;
    let mut common_j = 0usize;
    let mut first_key_inspected = false;

    loop {
        let k = i + (j - i) / 2;
        let w = &table.entries[k];
        let mut common = common_i.min(common_j);
        let mut diff = 0i32;

        while common < w.len() {
            if exhausted(prog, c, common, dir) {
                diff = -1;
                break;
            }
            diff = text_char(prog, c, common, dir) as i32 - pattern_char(w, common, dir) as i32;
            if diff != 0 {
                break;
            }
            common += 1;
        }

        if diff < 0 {
            j = k;
            common_j = common;
        } else {
            i = k;
            common_i = common;
        }
        if j - i <= 1 {
            if i > 0 || j == i || first_key_inspected {
                break;
            }
            // The bisection never lands on entry 0 by itself; give the
            // lowest entry one inspection before settling
            first_key_inspected = true;
        }
    }

    loop {
        let w = &table.entries[i];
        if common_i >= w.len() {
            // Full pattern matched: position the cursor past it, then
            // let the guard (if any) veto
            prog.cursor = match dir {
                Direction::Forward => c + w.len(),
                Direction::Backward => c - w.len(),
            };
            match w.guard {
                None => return Some(w.result),
                Some(guard) if guard(prog) => return Some(w.result),
                Some(_) => {}
            }
        }
        match w.backtrack {
            Some(b) => i = b,
            None => {
                prog.cursor = c;
                return None;
            }
        }
    }
}

#[inline(always)]
fn exhausted(prog: &StemProgram, c: usize, common: usize, dir: Direction) -> bool {
    match dir {
        Direction::Forward => c + common == prog.limit,
        Direction::Backward => c - common == prog.limit_backward,
    }
}

#[inline(always)]
fn text_char(prog: &StemProgram, c: usize, common: usize, dir: Direction) -> char {
    match dir {
        Direction::Forward => prog.current[c + common],
        Direction::Backward => prog.current[c - 1 - common],
    }
}

#[inline(always)]
fn pattern_char(w: &Among, common: usize, dir: Direction) -> char {
    match dir {
        Direction::Forward => w.pattern[common],
        Direction::Backward => w.pattern[w.len() - 1 - common],
    }
}
