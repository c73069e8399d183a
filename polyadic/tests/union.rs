use std::cell::{Cell, RefCell};
use std::rc::Rc;

use polyadic::prelude::*;
use polyadic::unary::{S, Z};

#[test]
fn constructing_with_an_int_activates_the_int() {
    let u: Union<(i32, String)> = Union::new(7_i32);
    assert_eq!(u.index(), 0);
    assert!(u.is::<i32, _>());
    assert!(!u.is::<String, _>());
    assert_eq!(u.get::<i32, _>(), Ok(&7));
}

#[test]
fn wrong_alternative_is_a_type_mismatch() {
    let u: Union<(i32, String)> = Union::new(7_i32);
    match u.get::<String, _>() {
        Err(Error::TypeMismatch {
            requested,
            requested_index,
            active,
        }) => {
            assert_eq!(requested, std::any::type_name::<String>());
            assert_eq!(requested_index, 1);
            assert_eq!(active, 0);
        }
        other => panic!("expected a type mismatch, got {:?}", other),
    }
}

/// Counts how many times any of its clones has been dropped.
#[derive(Clone)]
struct Tracked(Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn reassignment_drops_the_old_value_once_and_moves_the_new_one_in() {
    let drops = Rc::new(Cell::new(0));
    let mut u: Union<(Tracked, String)> = Union::new(Tracked(drops.clone()));
    assert_eq!(drops.get(), 0);
    assert_eq!(Rc::strong_count(&drops), 2);

    u.set(String::from("replacement"));
    assert_eq!(drops.get(), 1);
    assert_eq!(Rc::strong_count(&drops), 1);
    assert_eq!(u.index(), 1);
    assert_eq!(u.get::<String, _>().map(String::as_str), Ok("replacement"));

    drop(u);
    assert_eq!(drops.get(), 1);
}

/// Records its construction and its drop in a shared log.
struct Noisy {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Noisy {
    fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        log.borrow_mut().push(format!("construct {}", name));
        Noisy {
            name,
            log: log.clone(),
        }
    }
}

impl Drop for Noisy {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

#[test]
fn rebuilding_in_place_drops_the_old_value_before_constructing_the_new_one() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut u: Union<(Noisy, u8)> = Union::new(Noisy::new("old", &log));
    log.borrow_mut().clear();

    u.set_with(|| Noisy::new("new", &log));
    assert_eq!(*log.borrow(), ["drop old", "construct new"]);
    assert_eq!(u.index(), 0);
    assert_eq!(u.get::<Noisy, _>().map(|n| n.name).ok(), Some("new"));

    log.borrow_mut().clear();
    drop(u);
    assert_eq!(*log.borrow(), ["drop new"]);
}

#[test]
fn rebuilding_at_a_position_drops_first_even_among_duplicates() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut u: Union<(Noisy, Noisy)> = Union::at::<0>(Noisy::new("left", &log));
    log.borrow_mut().clear();

    u.set_at_with::<1, _>(|| Noisy::new("right", &log));
    assert_eq!(*log.borrow(), ["drop left", "construct right"]);
    assert_eq!(u.index(), 1);
}

#[test]
fn plain_set_builds_the_argument_before_the_old_value_goes() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut u: Union<(u8, Noisy)> = Union::new(Noisy::new("old", &log));
    log.borrow_mut().clear();

    u.set(Noisy::new("new", &log));
    assert_eq!(*log.borrow(), ["construct new", "drop old"]);
}

#[test]
fn cloning_a_union_clones_the_active_value() {
    let drops = Rc::new(Cell::new(0));
    let u: Union<(String, Tracked)> = Union::new(Tracked(drops.clone()));
    let v = u.clone();
    assert_eq!(v.index(), 1);
    assert_eq!(Rc::strong_count(&drops), 3);
    drop((u, v));
    assert_eq!(drops.get(), 2);
}

#[test]
fn mutation_through_get_mut() {
    let mut u: Union<(Vec<u8>, char)> = Union::new(vec![1_u8]);
    u.get_mut::<Vec<u8>, _>().unwrap().push(2);
    assert_eq!(u.take::<Vec<u8>, _>().ok(), Some(vec![1, 2]));
}

struct Describe;

impl<'a> Visitor<&'a i32> for Describe {
    type Output = String;
    fn visit(&mut self, value: &'a i32) -> String {
        format!("int {}", value)
    }
}

impl<'a> Visitor<&'a String> for Describe {
    type Output = String;
    fn visit(&mut self, value: &'a String) -> String {
        format!("string {:?}", value)
    }
}

impl Visitor<i32> for Describe {
    type Output = String;
    fn visit(&mut self, value: i32) -> String {
        format!("owned int {}", value)
    }
}

impl Visitor<String> for Describe {
    type Output = String;
    fn visit(&mut self, value: String) -> String {
        format!("owned string {:?}", value)
    }
}

#[test]
fn visit_reaches_exactly_the_active_value() {
    let mut u: Union<(i32, String)> = Union::new(3_i32);
    assert_eq!(u.visit(&mut Describe), "int 3");
    u.set(String::from("x"));
    assert_eq!(u.visit(&mut Describe), "string \"x\"");
    assert_eq!(u.into_visit(&mut Describe), "owned string \"x\"");
}

#[test]
fn visit_mut_edits_the_active_value() {
    struct Shout;

    impl<'a> Visitor<&'a mut String> for Shout {
        type Output = ();
        fn visit(&mut self, value: &'a mut String) {
            value.make_ascii_uppercase();
        }
    }

    impl<'a> Visitor<&'a mut char> for Shout {
        type Output = ();
        fn visit(&mut self, value: &'a mut char) {
            value.make_ascii_uppercase();
        }
    }

    let mut u: Union<(String, char)> = Union::new('q');
    u.visit_mut(&mut Shout);
    assert_eq!(u.get::<char, _>(), Ok(&'Q'));
}

#[test]
fn duplicated_types_are_addressed_by_position() {
    let mut u: Union<(u32, u32, bool)> = Union::at::<1>(5);
    assert_eq!(u.get::<u32, S<Z>>(), Ok(&5));
    assert!(u.get::<u32, Z>().is_err());
    u.set_at::<0>(6);
    assert_eq!(u.index(), 0);
    u.set(true);
    assert_eq!(u.index(), 2);
}

#[test]
fn equality_and_hashing_follow_the_active_value() {
    use std::collections::HashSet;

    let a: Union<(u8, char)> = Union::new(1_u8);
    let b: Union<(u8, char)> = Union::new('1');
    assert_ne!(a, b);
    assert_eq!(a, Union::new(1_u8));

    let set: HashSet<_> = [a, b, a].into_iter().collect();
    assert_eq!(set.len(), 2);
}
