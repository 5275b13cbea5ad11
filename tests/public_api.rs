//! Integration tests for the public API.
//!
//! These tests go through the crate the way a downstream user would, only
//! touching exported items.

use arrayish::{Array, Bounds, DEFAULT_SEPARATOR, Error, Value, array};
use expect_test::expect;
use pretty_assertions::assert_eq;

#[test]
fn test_reference_scenario() {
    let mut arr = array![23, 24, 2, 5, 10];

    let one = arr.slice(2..3);
    assert_eq!(one.len(), 1);
    assert_eq!(one.values(), &[2]);

    assert!(arr.slice(20..).is_empty());

    assert_eq!(arr.join(), "23,24,2,5,10");
    assert_eq!(arr.join_with(":"), "23:24:2:5:10");

    assert_eq!(arr.index_of(&5), Some(3));
    assert_eq!(arr.index_of(&0), None);

    expect!["Array [23 24 2 5 10]"].assert_eq(&arr.to_string());

    arr.fill(3, 0..);
    assert!(arr.every(|x, _| *x == 3));
    expect!["Array [3 3 3 3 3]"].assert_eq(&arr.to_string());
}

#[test]
fn test_default_separator() {
    let arr = array!["a", "b"];
    assert_eq!(DEFAULT_SEPARATOR, ",");
    assert_eq!(arr.join(), arr.join_with(DEFAULT_SEPARATOR));
}

#[test]
fn test_errors_are_recoverable() {
    let mut arr: Array<u8> = Array::new(Vec::new());

    let err = arr.pop().unwrap_err();
    expect!["cannot pop from an empty array"].assert_eq(&err.to_string());

    let err = arr.get(3).unwrap_err();
    assert_eq!(err, Error::OutOfRange { index: 3, len: 0 });
    expect!["index 3 out of range for array of length 0"].assert_eq(&err.to_string());

    // The array is still usable after an error
    arr.push(1);
    assert_eq!(arr.shift(), Ok(1));
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::EmptySequence { operation: "shift" });
}

#[test]
fn test_bounds_from_ranges() {
    let arr: Array<u32> = (0..10).collect();
    assert_eq!(arr.slice(Bounds::From(7)), arr.slice(7..));
    assert_eq!(arr.slice(Bounds::Omitted), arr.slice(..));
    assert_eq!(
        arr.slice(Bounds::Range { start: 2, end: 4 }).into_vec(),
        vec![2, 3]
    );
}

#[test]
fn test_pipeline() {
    let words: Array<String> = ["apple", "kiwi", "banana", "fig"]
        .into_iter()
        .map(String::from)
        .collect();

    let long = words.filter(|w, _| w.len() > 3).map(|w, i| format!("{i}:{w}"));
    expect!["0:apple|1:kiwi|2:banana"].assert_eq(&long.join_with("|"));

    let lengths = words.map(|w, _| w.len());
    assert_eq!(lengths.values(), &[5, 4, 6, 3]);
    assert_eq!(lengths.find(|n, _| *n > 5), Some(&6));
    assert!(lengths.some(|n, _| *n == 3));
}

#[test]
fn test_heterogeneous_values() {
    let mut arr: Array<Value> = array![Value::from(1), Value::from("two"), Value::Null];
    arr.unshift(Value::from(0.5));
    arr.push(Value::from(array![Value::from(true)]));

    expect!["Array [0.5 1 two <nil> Array [true]]"].assert_eq(&arr.to_string());
    assert_eq!(arr.index_of(&Value::from("two")), Some(2));

    let kinds = arr.map(|v, _| v.kind());
    assert_eq!(kinds.join(), "Float,Int,Str,Null,Array");
}
