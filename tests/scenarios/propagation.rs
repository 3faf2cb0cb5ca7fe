//! Early return with `attempt!` and with `?` through `into_std`.

use std::cell::RefCell;

use outcome::{Failure, Result, UsageError, attempt};

fn load(key: &str, log: &RefCell<Vec<String>>) -> Result<i32> {
    log.borrow_mut().push(format!("load {key}"));
    match key {
        "a" => Result::Ok(1),
        "b" => Result::Ok(2),
        _ => Result::Err(Failure::other(format!("missing key {key}"))),
    }
}

fn load_pair(first: &str, second: &str, log: &RefCell<Vec<String>>) -> Result<i32> {
    let a = attempt!(load(first, log));
    let b = attempt!(load(second, log));
    Result::Ok(a + b)
}

#[test]
fn attempt_runs_both_steps_on_success() {
    let log = RefCell::new(Vec::new());
    assert_eq!(load_pair("a", "b", &log), Result::Ok(3));
    assert_eq!(*log.borrow(), vec!["load a", "load b"]);
}

#[test]
fn attempt_skips_second_step_after_failure() {
    let log = RefCell::new(Vec::new());
    let res = load_pair("zzz", "b", &log);
    assert_eq!(res, Result::Err(Failure::other("missing key zzz")));
    assert_eq!(*log.borrow(), vec!["load zzz"]);
}

#[test]
fn attempt_accepts_trailing_comma() {
    fn double(res: Result<i32>) -> Result<i32> {
        let v = attempt!(res,);
        Result::Ok(v * 2)
    }
    assert_eq!(double(Result::Ok(4)), Result::Ok(8));
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum LayerError {
    #[error("lower layer: {0}")]
    Lower(#[from] Failure),
    #[error("usage: {0}")]
    Usage(#[from] UsageError),
}

fn upper(key: &str, log: &RefCell<Vec<String>>) -> Result<i32, LayerError> {
    let v = attempt!(load(key, log));
    Result::Ok(v * 100)
}

#[test]
fn attempt_converts_into_enclosing_error_type() {
    let log = RefCell::new(Vec::new());
    assert_eq!(upper("b", &log), Result::Ok(200));
    assert_eq!(
        upper("q", &log),
        Result::Err(LayerError::Lower(Failure::other("missing key q")))
    );
}

fn with_question_mark(first: &str, second: &str) -> std::result::Result<i32, Failure> {
    let log = RefCell::new(Vec::new());
    let a = load(first, &log).into_std()?;
    let b = load(second, &log).into_std()?;
    Ok(a * b)
}

#[test]
fn question_mark_through_into_std() {
    assert_eq!(with_question_mark("a", "b"), Ok(2));
    assert_eq!(
        with_question_mark("a", "nope"),
        Err(Failure::other("missing key nope"))
    );
}

#[test]
fn question_mark_result_converts_back() {
    let res: Result<i32> = with_question_mark("b", "b").into();
    assert_eq!(res, Result::Ok(4));
}
