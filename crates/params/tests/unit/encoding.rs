//! # Field Encoding Tests
//!
//! Tests for instruction-field codes and the widths derived from them.

use anycore_params::encoding::{BranchType, FieldEncoding, FunctionalUnit, InstType, LdStSize};
use rstest::rstest;

fn assert_codes_are_dense<E: FieldEncoding + PartialEq>() {
    for (i, v) in E::ALL.iter().enumerate() {
        assert_eq!(v.code(), i as u64, "{v:?}");
        assert_eq!(E::from_code(i as u64), Some(*v));
        assert!(v.code() < 1 << E::field_bits(), "{v:?} does not fit its field");
    }
    assert_eq!(E::from_code(E::ALL.len() as u64), None);
}

#[test]
fn test_codes_are_dense_and_fit() {
    assert_codes_are_dense::<BranchType>();
    assert_codes_are_dense::<InstType>();
    assert_codes_are_dense::<LdStSize>();
    assert_codes_are_dense::<FunctionalUnit>();
}

#[test]
fn test_field_widths() {
    assert_eq!(BranchType::field_bits(), 2);
    assert_eq!(InstType::field_bits(), 3);
    assert_eq!(LdStSize::field_bits(), 2);
    assert_eq!(FunctionalUnit::field_bits(), 2);
}

#[rstest]
#[case(LdStSize::Byte, 1)]
#[case(LdStSize::HalfWord, 2)]
#[case(LdStSize::Word, 4)]
#[case(LdStSize::DoubleWord, 8)]
fn test_ldst_size_bytes(#[case] size: LdStSize, #[case] bytes: u64) {
    assert_eq!(size.bytes(), bytes);
}
