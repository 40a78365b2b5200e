//! Demo test cases listed by the menu.

use std::{thread, time::Duration};

use test_menu::{
    test_assert, test_assert_eq, test_case, test_ignore, Registry, RegistryBuilder, TestResult,
};

#[test_case(desc = "[math][fast]")]
fn add_small_numbers() -> TestResult {
    test_assert_eq!(2 + 3, 5);
    Ok(())
}

#[test_case(desc = "[math]")]
fn checked_overflow() -> TestResult {
    test_assert!(u8::MAX.checked_add(1).is_none());
    test_assert_eq!(200u8.saturating_add(100), u8::MAX);
    Ok(())
}

#[test_case(desc = "[str][fast]")]
fn split_fields() -> TestResult {
    let fields: Vec<_> = "ttyS0,115200,8n1".split(',').collect();
    test_assert_eq!(fields.len(), 3);
    test_assert_eq!(fields[1].parse::<u32>().ok(), Some(115_200));
    Ok(())
}

#[test_case(desc = "[str]")]
fn banner() {
    log::info!("unit test cases pass unless they panic");
}

#[test_case(desc = "[slow]")]
fn settle_delay() -> TestResult {
    thread::sleep(Duration::from_millis(50));
    Ok(())
}

#[test_case(desc = "[math][broken]")]
fn wrong_answer() -> TestResult {
    test_assert_eq!(6 * 7, 41);
    Ok(())
}

#[test_case(desc = "[wip]")]
fn pending_feature() -> TestResult {
    test_ignore!();
}

pub fn register(builder: &mut RegistryBuilder) {
    builder
        .register(ADD_SMALL_NUMBERS_CASE)
        .register(CHECKED_OVERFLOW_CASE)
        .register(SPLIT_FIELDS_CASE)
        .register(BANNER_CASE)
        .register(SETTLE_DELAY_CASE)
        .register(WRONG_ANSWER_CASE)
        .register(PENDING_FEATURE_CASE);
}

pub fn registry() -> Registry {
    let mut builder = Registry::builder();
    register(&mut builder);
    builder.build()
}
