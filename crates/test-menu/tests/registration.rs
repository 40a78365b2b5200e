use std::sync::atomic::{AtomicUsize, Ordering};

use test_menu::{
    select, test_assert, test_assert_eq, test_case, test_ignore, Registry, TestFailure, TestResult,
};

static UNIT_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test_case]
fn plain_unit() {
    UNIT_CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test_case(desc = "[math][fast]")]
fn adds_up() -> TestResult {
    test_assert_eq!(2 + 2, 4);
    Ok(())
}

#[test_case(desc = "[math]", name = "division by zero is caught")]
fn checked_div() -> TestResult {
    test_assert!(10u32.checked_div(0).is_none());
    Ok(())
}

#[test_case(desc = "[wip]")]
fn not_ready() -> TestResult {
    test_ignore!();
}

fn suite() -> Registry {
    let mut builder = Registry::builder();
    builder
        .register(PLAIN_UNIT_CASE)
        .register(ADDS_UP_CASE)
        .register(CHECKED_DIV_CASE)
        .register(NOT_READY_CASE);
    builder.build()
}

#[test]
fn test_descriptor_fields() {
    assert_eq!(ADDS_UP_CASE.name, "adds_up");
    assert_eq!(ADDS_UP_CASE.desc, "[math][fast]");
    assert!(ADDS_UP_CASE.file.ends_with("registration.rs"));
    assert!(ADDS_UP_CASE.line > 0);

    assert_eq!(PLAIN_UNIT_CASE.desc, "");
    assert_eq!(CHECKED_DIV_CASE.name, "division by zero is caught");
}

#[test]
fn test_entry_points() {
    let before = UNIT_CALLS.load(Ordering::SeqCst);
    assert_eq!((PLAIN_UNIT_CASE.test_fn)(), Ok(()));
    assert!(UNIT_CALLS.load(Ordering::SeqCst) > before);

    assert_eq!((ADDS_UP_CASE.test_fn)(), Ok(()));
    assert_eq!((CHECKED_DIV_CASE.test_fn)(), Ok(()));
    assert!(matches!(
        (NOT_READY_CASE.test_fn)(),
        Err(TestFailure::Ignored { .. })
    ));
}

#[test]
fn test_registration_order_drives_selection() {
    let reg = suite();
    let names: Vec<_> = reg.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        [
            "plain_unit",
            "adds_up",
            "division by zero is caught",
            "not_ready"
        ]
    );

    let math: Vec<_> = select::by_tag(&reg, "[math]").map(|c| c.name).collect();
    assert_eq!(math, ["adds_up", "division by zero is caught"]);

    assert_eq!(select::by_index(&reg, 4).map(|c| c.name), Some("not_ready"));
}
