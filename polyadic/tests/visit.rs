use std::fmt::Display;

use polyadic::prelude::*;

#[derive(Default)]
struct Log(Vec<String>);

impl<T: Display> Visitor<T> for Log {
    type Output = ();

    fn visit(&mut self, value: T) {
        self.0.push(value.to_string());
    }
}

#[test]
fn logs_each_value_left_to_right() {
    let mut log = Log::default();
    visit!(log; 7.5, "hello", "world");
    assert_eq!(log.0, ["7.5", "hello", "world"]);
}

#[test]
fn empty_argument_list_never_calls_the_visitor() {
    // `Log` has no notion of visiting nothing, and needs none.
    let mut log = Log::default();
    visit!(log;);
    assert!(log.0.is_empty());
}

#[test]
fn visits_a_product_by_reference_and_keeps_it() {
    let p = product![1, 'x', String::from("owned")];
    let mut log = Log::default();
    p.for_each_ref(&mut log);
    assert_eq!(log.0, ["1", "x", "owned"]);
    assert_eq!(p.get::<2>(), "owned");
}

#[test]
fn mutates_every_slot_in_place() {
    struct Bump;

    impl<'a> Visitor<&'a mut i32> for Bump {
        type Output = ();
        fn visit(&mut self, value: &'a mut i32) {
            *value += 1;
        }
    }

    impl<'a> Visitor<&'a mut String> for Bump {
        type Output = ();
        fn visit(&mut self, value: &'a mut String) {
            value.push('+');
        }
    }

    let mut p = product![1, String::from("a"), 10];
    p.for_each_mut(&mut Bump);
    assert_eq!(p.into_inner(), (2, String::from("a+"), 11));
}

#[test]
fn moves_temporaries_and_borrows_named_values() {
    #[derive(Default)]
    struct Moves {
        owned: usize,
        borrowed: usize,
    }

    impl Visitor<String> for Moves {
        type Output = ();
        fn visit(&mut self, _: String) {
            self.owned += 1;
        }
    }

    impl<'a> Visitor<&'a String> for Moves {
        type Output = ();
        fn visit(&mut self, _: &'a String) {
            self.borrowed += 1;
        }
    }

    let kept = String::from("kept");
    let mut moves = Moves::default();
    visit!(moves; String::from("a"), &kept, String::from("b"), &kept);
    assert_eq!((moves.owned, moves.borrowed), (2, 2));
    assert_eq!(kept, "kept");
}
