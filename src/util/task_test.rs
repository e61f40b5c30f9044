use super::*;

#[test]
fn new_flag_starts_alive() {
    assert!(AliveFlag::new().is_alive());
}

#[test]
fn retire_marks_the_flag_dead() {
    let flag = AliveFlag::new();
    flag.retire();
    assert!(!flag.is_alive());
}

#[test]
fn clones_observe_the_same_lifetime() {
    let flag = AliveFlag::new();
    let task_copy = flag.clone();
    assert!(task_copy.is_alive());
    flag.retire();
    assert!(!task_copy.is_alive());
}
