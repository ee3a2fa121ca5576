mod common;

use insta::assert_snapshot;
use rstest::rstest;

use realfn_sequence::{IndexError, OwningSequence};

#[rstest]
#[case(0)]
#[case(1)]
#[case(17)]
fn test_with_len_has_len(#[case] len: usize) {
    common::init_tracing();
    assert_eq!(OwningSequence::<f64>::with_len(len).len(), len);
}

#[rstest]
#[case(vec![])]
#[case(vec![4])]
#[case(vec![4, 5, 6])]
fn test_append_grows_by_one(#[case] items: Vec<i32>) {
    common::init_tracing();
    let mut sequence = OwningSequence::from(items.clone());
    let old_len = sequence.len();
    sequence.append(42);
    assert_eq!(sequence.len(), old_len + 1);
    assert_eq!(sequence.get(old_len), Ok(&42));
    assert_eq!(&sequence.as_slice()[..old_len], items.as_slice());
}

#[rstest]
#[case(0, vec![20, 30])]
#[case(1, vec![10, 30])]
#[case(2, vec![10, 20])]
fn test_remove_at_preserves_order(#[case] index: usize, #[case] expected: Vec<i32>) {
    common::init_tracing();
    let mut sequence = OwningSequence::from(vec![10, 20, 30]);
    sequence.remove_at(index).unwrap();
    assert_eq!(sequence.as_slice(), expected.as_slice());
}

#[test]
fn test_remove_at_out_of_range() {
    common::init_tracing();
    let mut sequence = OwningSequence::from(vec![10, 20, 30]);
    assert_eq!(sequence.remove_at(3), Err(IndexError { index: 3, len: 3 }));
    assert_eq!(sequence.len(), 3);
}

#[test]
fn test_mutating_copy_keeps_original() {
    common::init_tracing();
    let original = OwningSequence::from(vec![vec![1], vec![2]]);
    let mut copy = original.clone();
    copy.at(0).unwrap().push(100);
    copy.remove_at(1).unwrap();
    assert_eq!(original.as_slice(), &[vec![1], vec![2]]);
    assert_eq!(copy.as_slice(), &[vec![1, 100]]);
}

#[test]
fn test_index_error_message() {
    common::init_tracing();
    let sequence = OwningSequence::<u8>::with_len(2);
    let error = sequence.get(5).unwrap_err();
    assert_snapshot!(error.to_string(), @"index 5 out of bounds for length 2");
}
