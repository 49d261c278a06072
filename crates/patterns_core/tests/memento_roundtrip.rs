use patterns_core::{Caretaker, CaretakerError, Originator};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

#[test]
fn restore_brings_back_begin_state() {
    let mut originator = Originator::new("init".to_string());
    assert_eq!(originator.show(), "state: init");

    originator.set_state("begin".to_string());
    let memento = originator.create_memento();

    let mut caretaker = Caretaker::new();
    caretaker.set_memento(memento);

    originator.set_state("change".to_string());
    assert_eq!(originator.get_state(), "change");

    let saved = caretaker.require_memento().expect("memento was saved");
    originator.restore(saved);
    assert_eq!(originator.get_state(), "begin");
    assert_eq!(originator.show(), "state: begin");
}

#[test]
fn caretaker_hands_back_most_recent_memento() {
    let mut originator = Originator::new(0_u32);
    let mut caretaker = Caretaker::new();

    for value in 1..=3 {
        originator.set_state(value);
        caretaker.set_memento(originator.create_memento());
    }

    let held = caretaker.get_memento().expect("memento held");
    assert!(originator.owns(held));
    assert_eq!(*held.state(), 3);
}

#[test]
fn empty_caretaker_reports_absence() {
    let mut caretaker: Caretaker<u32> = Caretaker::new();
    assert!(caretaker.get_memento().is_none());
    assert!(caretaker.take_memento().is_none());
    assert_eq!(
        caretaker.require_memento().unwrap_err(),
        CaretakerError::Empty
    );
    assert_eq!(
        CaretakerError::Empty.to_string(),
        "caretaker holds no memento"
    );
}

#[test]
fn restoring_a_foreign_memento_is_accepted() {
    let other = Originator::new(vec![1, 2, 3]);
    let mut target = Originator::new(Vec::new());
    let memento = other.create_memento();

    assert_eq!(memento.origin(), other.id());
    assert!(!target.owns(&memento));

    target.restore(&memento);
    assert_eq!(target.state(), &vec![1, 2, 3]);
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn restore_returns_to_any_captured_point(
        states in prop::collection::vec(any::<String>(), 1..16),
        pick in any::<prop::sample::Index>(),
        later in prop::collection::vec(any::<String>(), 0..16),
    ) {
        let mut originator = Originator::new(String::new());
        let k = pick.index(states.len());
        let mut memento = None;
        for (i, state) in states.iter().enumerate() {
            originator.set_state(state.clone());
            if i == k {
                memento = Some(originator.create_memento());
            }
        }
        for state in &later {
            originator.set_state(state.clone());
        }

        let memento = memento.expect("index is within states");
        originator.restore(&memento);
        prop_assert_eq!(originator.get_state(), states[k].clone());
    }

    #[test]
    fn memento_is_unaffected_by_later_changes(
        captured in any::<i64>(),
        later in prop::collection::vec(any::<i64>(), 0..16),
    ) {
        let mut originator = Originator::new(captured);
        let memento = originator.create_memento();
        let copy = memento.clone();
        for value in later {
            originator.set_state(value);
        }

        prop_assert_eq!(*memento.state(), captured);
        prop_assert_eq!(memento, copy);
    }
}
