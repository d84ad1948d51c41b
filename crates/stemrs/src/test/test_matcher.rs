// Tests for the among search, both directions
use crate::*;

const DEL: u32 = 1;

fn plural_table() -> AmongTable {
    // "es" falls back to its proper suffix "s"
    AmongTable::new(vec![
        Among::new("s", None, DEL),
        Among::new("es", Some(0), DEL),
    ])
}

fn strip(word: &str, table: &AmongTable) -> String {
    let mut prog = StemProgram::new();
    prog.set_current(word);
    prog.cursor = prog.limit;
    prog.ket = prog.cursor;
    if let Some(tag) = prog.find_among_b(table) {
        assert_eq!(tag, DEL);
        prog.bra = prog.cursor;
        prog.slice_del();
    }
    prog.get_current()
}

#[test]
fn test_suffix_strip_scenario() {
    let table = plural_table();
    assert_eq!(strip("boxes", &table), "box");
    assert_eq!(strip("cats", &table), "cat");
    assert_eq!(strip("cat", &table), "cat");
}

#[test]
fn test_longest_match_wins() {
    let table = AmongTable::new(vec![
        Among::new("e", None, 1),
        Among::new("ement", Some(0), 2),
    ]);
    let mut prog = StemProgram::new();
    prog.set_current("agreement");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), Some(2));
    assert_eq!(prog.cursor, 4);
}

#[test]
fn test_no_match_leaves_cursor() {
    let table = plural_table();
    let mut prog = StemProgram::new();
    prog.set_current("cat");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), None);
    assert_eq!(prog.cursor, 3);
}

#[test]
fn test_word_shorter_than_any_candidate() {
    let table = AmongTable::new(vec![Among::new("ement", None, 1)]);
    let mut prog = StemProgram::new();
    prog.set_current("a");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), None);
    assert_eq!(prog.cursor, 1);
}

#[test]
fn test_empty_word_and_empty_table() {
    let mut prog = StemProgram::new();
    prog.set_current("");
    assert_eq!(prog.find_among_b(&plural_table()), None);
    assert_eq!(prog.find_among(&plural_table()), None);
    let empty = AmongTable::new(vec![]);
    prog.set_current("word");
    assert_eq!(prog.find_among(&empty), None);
}

#[test]
fn test_forward_search_with_fallback_entry() {
    // the empty pattern always matches and consumes nothing
    let table = AmongTable::new(vec![
        Among::new("", None, 3),
        Among::new("u", Some(0), 1),
        Among::new("ü", Some(0), 2),
    ]);
    let mut prog = StemProgram::new();
    prog.set_current("über");
    assert_eq!(prog.find_among(&table), Some(2));
    assert_eq!(prog.cursor, 1);
    assert_eq!(prog.find_among(&table), Some(3));
    assert_eq!(prog.cursor, 1);
}

fn reject(_: &StemProgram) -> bool {
    false
}

fn accept(_: &StemProgram) -> bool {
    true
}

#[test]
fn test_guard_veto_falls_back_to_backtrack() {
    let vetoed = AmongTable::new(vec![
        Among::new("s", None, 1),
        Among::with_guard("es", Some(0), 2, reject),
    ]);
    let mut prog = StemProgram::new();
    prog.set_current("boxes");
    prog.cursor = prog.limit;
    // "es" matches but its guard overrides; "s" wins instead
    assert_eq!(prog.find_among_b(&vetoed), Some(1));
    assert_eq!(prog.cursor, 4);

    let admitted = AmongTable::new(vec![
        Among::new("s", None, 1),
        Among::with_guard("es", Some(0), 2, accept),
    ]);
    prog.set_current("boxes");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&admitted), Some(2));
    assert_eq!(prog.cursor, 3);
}

fn cursor_at_three(prog: &StemProgram) -> bool {
    prog.cursor == 3
}

#[test]
fn test_guard_runs_with_cursor_past_match() {
    let table = AmongTable::new(vec![Among::with_guard("es", None, 2, cursor_at_three)]);
    let mut prog = StemProgram::new();
    prog.set_current("boxes");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), Some(2));
}

#[test]
fn test_guard_failure_restores_cursor() {
    let table = AmongTable::new(vec![Among::with_guard("es", None, 2, reject)]);
    let mut prog = StemProgram::new();
    prog.set_current("boxes");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), None);
    assert_eq!(prog.cursor, 5);
}

#[test]
fn test_equal_length_latest_entry_wins() {
    let table = AmongTable::new(vec![
        Among::new("s", None, 1),
        Among::new("s", Some(0), 2),
    ]);
    let mut prog = StemProgram::new();
    prog.set_current("cats");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&table), Some(2));

    // with the later duplicate vetoed, the earlier entry is the result
    let vetoed = AmongTable::new(vec![
        Among::new("s", None, 1),
        Among::with_guard("s", Some(0), 2, reject),
    ]);
    prog.set_current("cats");
    prog.cursor = prog.limit;
    assert_eq!(prog.find_among_b(&vetoed), Some(1));
}
