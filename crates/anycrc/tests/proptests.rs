//! Property-based tests over the public API.
//!
//! These tests verify invariants that must hold for all parameter sets and
//! inputs, not just specific test vectors.

use anycrc::{Crc, CrcParams, Kernel, ParamError};
use proptest::prelude::*;

// Test Strategies

fn mask(width: u32) -> u64 {
  if width == 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Generate a valid parameter set of any width.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (2u32..=64, any::<[u64; 3]>(), any::<(bool, bool)>()).prop_map(|(width, [poly, init, xor_out], (refin, refout))| {
    let m = mask(width);
    CrcParams::new(width, poly & m, init & m, xor_out & m, refin, refout).expect("masked fields are valid")
  })
}

/// Generate arbitrary byte vectors up to 4KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..4096)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn kernels_agree(params in arb_params(), data in arb_data()) {
    let table = Crc::with_kernel(params, Kernel::Table);
    let bitwise = Crc::with_kernel(params, Kernel::Bitwise);
    prop_assert_eq!(table.checksum(&data), bitwise.checksum(&data));
  }

  #[test]
  fn check_value_length(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params);
    prop_assert_eq!(crc.check_value(&data).len(), params.width().div_ceil(8) as usize);
  }

  #[test]
  fn deterministic(params in arb_params(), data in arb_data()) {
    let first = Crc::new(params).checksum(&data);
    let crc = Crc::new(params);
    prop_assert_eq!(crc.checksum(&data), first);
    prop_assert_eq!(crc.checksum(&data), first);
  }

  #[test]
  fn try_forms_match_plain_forms(params in arb_params(), data in arb_data()) {
    let crc = Crc::try_new(Some(params)).expect("params present");
    prop_assert_eq!(crc.try_checksum(Some(&data)), Ok(crc.checksum(&data)));
    prop_assert_eq!(crc.try_check_value(Some(&data)), Ok(crc.check_value(&data)));
  }

  #[test]
  fn xor_out_is_applied_last(params in arb_params(), data in arb_data(), flip in any::<u64>()) {
    // Changing only xor_out changes the result by exactly the XOR difference.
    let flip = flip & params.mask();
    let other = CrcParams::new(
      params.width(),
      params.polynomial(),
      params.initial(),
      params.xor_out() ^ flip,
      params.reflect_in(),
      params.reflect_out(),
    ).expect("masked fields are valid");
    prop_assert_eq!(Crc::new(params).checksum(&data) ^ Crc::new(other).checksum(&data), flip);
  }

  #[test]
  fn invalid_width_rejected(width in prop_oneof![0u32..2, 65u32..=u32::MAX]) {
    prop_assert_eq!(CrcParams::new(width, 0, 0, 0, false, false), Err(ParamError::Width(width)));
  }
}
