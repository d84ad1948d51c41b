// German rule program
// Prelude/postlude protect u and y between vowels and fold ß and
// umlauts; three backward passes strip inflectional and derivational
// suffixes gated by the R1/R2 regions

use super::Stemmer;
use crate::engine::{Among, AmongTable, Grouping, StemProgram};

/// a e i o u y ä ö ü
const VOWELS: Grouping = Grouping::new(
    &[17, 65, 16, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 32, 8],
    97,
    252,
);

/// Consonants a plain s may follow: b d f g h k l m n r t
const S_ENDINGS: Grouping = Grouping::new(&[117, 30, 5], 98, 116);

/// Consonants st may follow: b d f g h k l m n t
const ST_ENDINGS: Grouping = Grouping::new(&[117, 30, 4], 98, 116);

pub struct GermanStemmer {
    prog: StemProgram,

    /// Postlude rewrites: protected U/Y back to lowercase, umlauts to
    /// their plain vowels. The empty entry is the always-matching
    /// fallback that steps the scan forward.
    postlude_marks: AmongTable,
    /// Step 1: e em en ern er s es
    step1_suffixes: AmongTable,
    /// Step 2: en er st est
    step2_suffixes: AmongTable,
    /// Step 3: end ig ung lich isch ik heit keit
    step3_suffixes: AmongTable,
    /// ig/lich residue checked after a removed keit
    nested_suffixes: AmongTable,

    /// R1/R2 region starts, recomputed per word.
    p1: usize,
    p2: usize,
    /// Floor for R1: at least three chars before it.
    x: usize,
}

impl Default for GermanStemmer {
    fn default() -> Self {
        GermanStemmer::new()
    }
}

impl GermanStemmer {
    pub fn new() -> Self {
        GermanStemmer {
            prog: StemProgram::new(),
            postlude_marks: AmongTable::new(vec![
                Among::new("", None, 6),
                Among::new("U", Some(0), 2),
                Among::new("Y", Some(0), 1),
                Among::new("ä", Some(0), 3),
                Among::new("ö", Some(0), 4),
                Among::new("ü", Some(0), 5),
            ]),
            step1_suffixes: AmongTable::new(vec![
                Among::new("e", None, 2),
                Among::new("em", None, 1),
                Among::new("en", None, 2),
                Among::new("ern", None, 1),
                Among::new("er", None, 1),
                Among::new("s", None, 3),
                Among::new("es", Some(5), 2),
            ]),
            step2_suffixes: AmongTable::new(vec![
                Among::new("en", None, 1),
                Among::new("er", None, 1),
                Among::new("st", None, 2),
                Among::new("est", Some(2), 1),
            ]),
            step3_suffixes: AmongTable::new(vec![
                Among::new("end", None, 1),
                Among::new("ig", None, 2),
                Among::new("ung", None, 1),
                Among::new("lich", None, 3),
                Among::new("isch", None, 2),
                Among::new("ik", None, 2),
                Among::new("heit", None, 3),
                Among::new("keit", None, 4),
            ]),
            nested_suffixes: AmongTable::new(vec![
                Among::new("ig", None, 1),
                Among::new("lich", None, 1),
            ]),
            p1: 0,
            p2: 0,
            x: 0,
        }
    }

    /// Rewrite `plain` to `marked` when it sits between two vowels,
    /// then rewind to `reset` so the scan re-inspects the span.
    fn protect(&mut self, plain: &str, marked: &str, reset: usize) -> bool {
        if self.prog.eq_s(plain) {
            self.prog.ket = self.prog.cursor;
            if self.prog.in_grouping(&VOWELS) {
                self.prog.slice_from(marked);
                self.prog.cursor = reset;
                return true;
            }
        }
        false
    }

    /// ß → ss, then mark u/y between vowels as U/Y so the suffix steps
    /// never treat them as vowels.
    fn prelude(&mut self) {
        let start = self.prog.cursor;
        loop {
            let c = self.prog.cursor;
            self.prog.bra = c;
            if self.prog.eq_s("ß") {
                self.prog.ket = self.prog.cursor;
                self.prog.slice_from("ss");
            } else {
                if c >= self.prog.limit {
                    break;
                }
                self.prog.cursor = c + 1;
            }
        }
        self.prog.cursor = start;
        loop {
            let run = self.prog.cursor;
            loop {
                let c = self.prog.cursor;
                if self.prog.in_grouping(&VOWELS) {
                    let mark = self.prog.cursor;
                    self.prog.bra = mark;
                    if self.protect("u", "U", c) {
                        break;
                    }
                    self.prog.cursor = mark;
                    if self.protect("y", "Y", c) {
                        break;
                    }
                }
                if c >= self.prog.limit {
                    self.prog.cursor = run;
                    return;
                }
                self.prog.cursor = c + 1;
            }
        }
    }

    /// Advance past the next vowel-to-consonant transition. True when
    /// the scan ran off the end of the word first.
    fn past_vc(&mut self) -> bool {
        while !self.prog.in_grouping(&VOWELS) {
            if self.prog.cursor >= self.prog.limit {
                return true;
            }
            self.prog.cursor += 1;
        }
        while !self.prog.out_grouping(&VOWELS) {
            if self.prog.cursor >= self.prog.limit {
                return true;
            }
            self.prog.cursor += 1;
        }
        false
    }

    /// R1 starts after the first vowel-consonant pair (but never before
    /// position 3), R2 after the second. Words too short for a region
    /// leave both at the limit, which disables the gated steps.
    fn mark_regions(&mut self) {
        self.p1 = self.prog.limit;
        self.p2 = self.p1;
        self.x = self.prog.cursor + 3;
        if self.x <= self.prog.limit && !self.past_vc() {
            self.p1 = self.prog.cursor.max(self.x);
            if !self.past_vc() {
                self.p2 = self.prog.cursor;
            }
        }
    }

    fn in_r1(&self) -> bool {
        self.p1 <= self.prog.cursor
    }

    fn in_r2(&self) -> bool {
        self.p2 <= self.prog.cursor
    }

    /// Three backward passes over the word end. Each pass restores the
    /// cursor to the word end before matching, so an earlier deletion
    /// feeds the later passes.
    fn standard_suffix(&mut self) {
        let back = self.prog.limit - self.prog.cursor;

        self.prog.ket = self.prog.cursor;
        if let Some(tag) = self.prog.find_among_b(&self.step1_suffixes) {
            self.prog.bra = self.prog.cursor;
            if self.in_r1() {
                match tag {
                    1 => self.prog.slice_del(),
                    2 => {
                        self.prog.slice_del();
                        // a trailing s of a removed plural survives only
                        // outside nis
                        self.prog.ket = self.prog.cursor;
                        if self.prog.eq_s_b("s") {
                            self.prog.bra = self.prog.cursor;
                            if self.prog.eq_s_b("nis") {
                                self.prog.slice_del();
                            }
                        }
                    }
                    _ => {
                        if self.prog.in_grouping_b(&S_ENDINGS) {
                            self.prog.slice_del();
                        }
                    }
                }
            }
        }

        self.prog.cursor = self.prog.limit - back;
        self.prog.ket = self.prog.cursor;
        if let Some(tag) = self.prog.find_among_b(&self.step2_suffixes) {
            self.prog.bra = self.prog.cursor;
            if self.in_r1() {
                match tag {
                    1 => self.prog.slice_del(),
                    _ => {
                        // st drops only after a valid consonant with at
                        // least three chars before it
                        if self.prog.in_grouping_b(&ST_ENDINGS) {
                            let c = self.prog.cursor;
                            if c >= self.prog.limit_backward + 3 {
                                self.prog.cursor = c - 3;
                                self.prog.slice_del();
                            }
                        }
                    }
                }
            }
        }

        self.prog.cursor = self.prog.limit - back;
        self.prog.ket = self.prog.cursor;
        if let Some(tag) = self.prog.find_among_b(&self.step3_suffixes) {
            self.prog.bra = self.prog.cursor;
            if self.in_r2() {
                match tag {
                    1 => {
                        // end/ung, then a preceding ig not itself after e
                        self.prog.slice_del();
                        self.prog.ket = self.prog.cursor;
                        if self.prog.eq_s_b("ig") {
                            self.prog.bra = self.prog.cursor;
                            if !self.prog.eq_s_b("e") && self.in_r2() {
                                self.prog.slice_del();
                            }
                        }
                    }
                    2 => {
                        // ig/isch/ik drop only when not preceded by e
                        if !self.prog.eq_s_b("e") {
                            self.prog.slice_del();
                        }
                    }
                    3 => {
                        // lich/heit, then er/en in R1
                        self.prog.slice_del();
                        self.prog.ket = self.prog.cursor;
                        if self.prog.eq_s_b("er") || self.prog.eq_s_b("en") {
                            self.prog.bra = self.prog.cursor;
                            if self.in_r1() {
                                self.prog.slice_del();
                            }
                        }
                    }
                    _ => {
                        // keit, then ig/lich in R2
                        self.prog.slice_del();
                        self.prog.ket = self.prog.cursor;
                        if let Some(t) = self.prog.find_among_b(&self.nested_suffixes) {
                            self.prog.bra = self.prog.cursor;
                            if self.in_r2() && t == 1 {
                                self.prog.slice_del();
                            }
                        }
                    }
                }
            }
        }
    }

    /// Unprotect U/Y and strip umlauts across the whole word.
    fn postlude(&mut self) {
        loop {
            self.prog.bra = self.prog.cursor;
            let Some(tag) = self.prog.find_among(&self.postlude_marks) else {
                return;
            };
            self.prog.ket = self.prog.cursor;
            match tag {
                1 => self.prog.slice_from("y"),
                2 | 5 => self.prog.slice_from("u"),
                3 => self.prog.slice_from("a"),
                4 => self.prog.slice_from("o"),
                _ => {
                    if self.prog.cursor >= self.prog.limit {
                        return;
                    }
                    self.prog.cursor += 1;
                }
            }
        }
    }
}

impl Stemmer for GermanStemmer {
    fn set_current(&mut self, word: &str) {
        self.prog.set_current(word);
    }

    fn stem(&mut self) -> bool {
        let start = self.prog.cursor;
        self.prelude();
        self.prog.cursor = start;
        self.mark_regions();
        self.prog.limit_backward = start;
        self.prog.cursor = self.prog.limit;
        self.standard_suffix();
        self.prog.cursor = self.prog.limit_backward;
        self.postlude();
        true
    }

    fn get_current(&self) -> String {
        self.prog.get_current()
    }
}
