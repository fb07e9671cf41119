use std::error::Error as StdError;
use std::fmt;

use error_details::{linearize, new, print_error_details, render, with_stack, wrap, Error};

#[derive(Debug)]
struct PlainError;

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("plain failure")
    }
}

impl StdError for PlainError {}

/// e1..e8 tree: two nested joins under a wrap chain.
fn sample_tree() -> Error {
    let e1 = new("error 1");
    let e2 = wrap(e1, "error 2 wrapping error 1").unwrap();
    let e3 = new("error 3");
    let e4 = error_details::join!(e2, e3).unwrap();
    let e5 = new("error 5");
    let e6 = error_details::join!(e4, e5).unwrap();
    let e7 = wrap(e6, "error 7").unwrap();
    with_stack(e7).unwrap()
}

#[test]
fn pure_chains_stay_at_level_zero() {
    let err = wrap(wrap(wrap(new("a"), "b").unwrap(), "c").unwrap(), "d").unwrap();

    let records = linearize(&err);
    assert_eq!(records.len(), 4);
    for record in &records {
        assert_eq!(record.level(), 0);
        assert_eq!(record.index(), 0);
    }
    assert_eq!(records[0].message(), "d: c: b: a");
    assert_eq!(records[3].message(), "a");
}

#[test]
fn a_join_indents_its_branches() {
    let e1 = new("inner");
    let wrapped = wrap(e1, "x").unwrap();
    let e2 = new("other");
    let joined = error_details::join!(wrapped, e2).unwrap();

    let records = linearize(&joined);
    let positions: Vec<(usize, usize)> = records.iter().map(|r| (r.level(), r.index())).collect();
    // Join at the root, both branches one level down; the chain under the
    // first branch continues at the same level and index.
    assert_eq!(positions, [(0, 0), (1, 0), (1, 0), (1, 1)]);
}

#[test]
fn nested_joins_compound_indentation() {
    let tree = sample_tree();
    let records = linearize(&tree);

    let expected: [(&str, usize, usize); 8] = [
        ("error 7", 0, 0), // stack-only annotation, message deferred
        ("error 7", 0, 0),
        ("error 2 wrapping error 1", 0, 0),
        ("error 2 wrapping error 1", 1, 0),
        ("error 2 wrapping error 1: error 1", 2, 0),
        ("error 1", 2, 0),
        ("error 3", 2, 1),
        ("error 5", 1, 1),
    ];
    assert_eq!(records.len(), expected.len());
    for (record, (prefix, level, index)) in records.iter().zip(expected) {
        assert!(
            record.message().starts_with(prefix),
            "message {:?} does not start with {:?}",
            record.message(),
            prefix
        );
        assert_eq!((record.level(), record.index()), (level, index));
    }
}

#[test]
fn every_chained_error_appears_exactly_once() {
    let tree = sample_tree();
    let records = linearize(&tree);
    let chain_len = tree.chain().count();
    assert_eq!(records.len(), chain_len);
}

#[test]
fn records_carry_variant_type_names() {
    let joined = error_details::join!(new("a"), new("b")).unwrap();
    let records = linearize(&joined);

    assert!(records[0].type_name().contains("JoinedError"));
    assert!(records[1].type_name().contains("AnnotatedError"));
}

#[test]
fn foreign_roots_keep_their_type_name() {
    let records = linearize(&PlainError);
    assert_eq!(records.len(), 1);
    assert!(records[0].type_name().contains("PlainError"));
    assert!(records[0].stack().is_none());
}

#[test]
fn wrapped_foreign_errors_render_without_a_stack() {
    let err = wrap(PlainError, "outer").unwrap();
    let records = linearize(&err);

    assert_eq!(records.len(), 2);
    assert!(records[0].stack().is_some());
    assert!(records[1].stack().is_none());
    assert!(records[1].type_name().contains("PlainError"));
}

#[test]
fn stacked_records_render_two_lines() {
    let err = new("boom");
    let lines = print_error_details(&err);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('('));
    assert!(lines[0].contains("AnnotatedError"));
    assert!(lines[1].starts_with('\t'));
    assert!(lines[1].ends_with(": boom"));
}

#[test]
fn stackless_records_render_one_line() {
    let lines = print_error_details(&PlainError);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("PlainError"));
    assert!(lines[0].ends_with(") plain failure"));
}

#[test]
fn branch_indices_are_labeled_once_then_padded() {
    let lines = print_error_details(&sample_tree());

    let first_level1 = lines
        .iter()
        .find(|line| line.starts_with("\t["))
        .expect("a level-one branch label must be rendered");
    assert!(first_level1.starts_with("\t[0] ("));

    // A chain continuation at an unchanged position gets an equal-width
    // blank placeholder instead of a repeated label.
    assert!(lines.iter().any(|line| line.starts_with("\t\t    (")));
    // The second branch of each join is labeled with its index.
    assert!(lines.iter().any(|line| line.starts_with("\t\t[1] (")));
    assert!(lines.iter().any(|line| line.starts_with("\t[1] (")));
}

#[test]
fn level_zero_lines_carry_no_index_prefix() {
    let lines = print_error_details(&sample_tree());
    assert!(lines[0].starts_with('('));
}

#[test]
fn print_error_details_is_idempotent() {
    let tree = sample_tree();
    let first = print_error_details(&tree);
    let second = print_error_details(&tree);
    assert_eq!(first, second);
}

#[test]
fn render_is_deterministic_over_the_same_records() {
    let tree = sample_tree();
    let records = linearize(&tree);
    assert_eq!(render(&records), render(&records));
}

#[test]
fn debug_formatting_matches_the_detailed_report() {
    let tree = sample_tree();
    let debug = format!("{tree:?}");
    assert_eq!(debug, print_error_details(&tree).join("\n"));
}
