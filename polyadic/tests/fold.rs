use polyadic::fold::{And, Or, Then};
use polyadic::prelude::*;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn group(a: String, b: String) -> String {
    format!("({}+{})", a, b)
}

fn abc() -> (String, String, String) {
    ("a".to_string(), "b".to_string(), "c".to_string())
}

#[test]
fn all_modes_agree_for_an_associative_operator() {
    let values = (1, 2, 3, 4, 5);
    assert_eq!(fold_right(values, add), 15);
    assert_eq!(fold_left(values, add), 15);
    assert_eq!(fold_right_from(values, 0, add), 15);
    assert_eq!(fold_left_from(values, 0, add), 15);
}

#[test]
fn grouping_is_exact_for_a_non_associative_operator() {
    assert_eq!(fold_right(abc(), group), "(a+(b+c))");
    assert_eq!(fold_left(abc(), group), "((a+b)+c)");
    assert_eq!(fold_right_from(abc(), "s".to_string(), group), "(a+(b+(c+s)))");
    assert_eq!(fold_left_from(abc(), "s".to_string(), group), "(((s+a)+b)+c)");
}

#[test]
fn subtraction_distinguishes_left_from_right() {
    let sub = |a: i32, b: i32| a - b;
    assert_eq!(fold_right((10, 4, 3), sub), 10 - (4 - 3));
    assert_eq!(fold_left((10, 4, 3), sub), (10 - 4) - 3);
}

#[test]
fn seeded_folds_of_nothing_return_the_seed() {
    assert_eq!(fold_right_from((), 7, add), 7);
    assert_eq!(fold_left_from((), "seed", |_: &str, _: &str| "unused"), "seed");
}

#[test]
fn identity_operators_reduce_nothing() {
    assert!(fold_right((), And));
    assert!(fold_left((), And));
    assert!(!fold_right((), Or));
    assert!(!fold_left((), Or));
    fold_right((), Then);
    fold_left((), Then);
}

#[test]
fn logical_operators_over_values() {
    assert!(!fold_left((true, false, true), And));
    assert!(fold_right((false, false, true), Or));
}

#[test]
fn then_keeps_the_last_value_and_runs_everything_in_order() {
    let mut order = Vec::new();
    let mut step = |n: u8| {
        order.push(n);
        n
    };
    let last = fold_left((step(1), step(2), step(3)), Then);
    assert_eq!(last, 3);
    assert_eq!(order, [1, 2, 3]);
}

#[test]
fn single_element_is_returned_unchanged() {
    let mut calls = 0;
    let result = fold_left(("only".to_string(),), |a: String, _: String| {
        calls += 1;
        a
    });
    assert_eq!(result, "only");
    assert_eq!(calls, 0);
}

#[test]
fn products_fold_like_tuples() {
    let p = product![1, 2, 3, 4, 5];
    assert_eq!(p.clone().fold_right(add), 15);
    assert_eq!(p.fold_left_from(100, add), 115);
}
