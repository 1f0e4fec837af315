//! Property tests tying the table engine to the bitwise reference.
//!
//! The reference implementation follows the Rocksoft model bit by bit and
//! shares nothing with the table path, so agreement across random parameter
//! sets is strong evidence the table generation and byte loop are right for
//! every width, including the widths below 8 that no catalog entry covers
//! exhaustively.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use super::{bits::width_mask, reference::checksum_bitwise, tables::generate_table};
use crate::{Crc, CrcParams};

/// Random valid parameter set: width in 2..=64 with every field masked.
fn arb_params() -> impl Strategy<Value = CrcParams> {
  (2u32..=64, any::<u64>(), any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>()).prop_map(
    |(width, poly, init, xor_out, refin, refout)| {
      let mask = width_mask(width);
      match CrcParams::new(width, poly & mask, init & mask, xor_out & mask, refin, refout) {
        Ok(params) => params,
        Err(err) => panic!("masked params rejected: {err}"),
      }
    },
  )
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  #[test]
  fn table_equals_reference(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params);
    prop_assert_eq!(
      crc.checksum_table(&data),
      checksum_bitwise(&params, &data),
      "params={:?} len={}", params, data.len()
    );
  }

  #[test]
  fn table_entries_fit_width(params in arb_params()) {
    let mask = params.mask();
    let table = generate_table(&params);
    prop_assert_eq!(table.len(), 256);
    for (i, &entry) in table.iter().enumerate() {
      prop_assert!(entry <= mask, "index {} entry {:#x} mask {:#x}", i, entry, mask);
    }
  }

  #[test]
  fn result_fits_width(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params);
    prop_assert!(crc.checksum(&data) <= params.mask());
  }

  #[test]
  fn bytes_decode_to_numeric(params in arb_params(), data in arb_data()) {
    let crc = Crc::new(params);
    let value = crc.check_value(&data);
    prop_assert_eq!(value.len(), params.width().div_ceil(8) as usize);

    let mut wide = [0u8; 8];
    wide[..value.len()].copy_from_slice(value.as_bytes());
    prop_assert_eq!(u64::from_le_bytes(wide), crc.checksum(&data));
  }

  #[test]
  fn out_of_range_fields_are_rejected(width in 2u32..64, extra in 1u64..=0xFF) {
    let too_big = width_mask(width) + extra.min(u64::MAX - width_mask(width));
    prop_assert!(CrcParams::new(width, too_big, 0, 0, false, false).is_err());
    prop_assert!(CrcParams::new(width, 0, too_big, 0, false, false).is_err());
    prop_assert!(CrcParams::new(width, 0, 0, too_big, false, false).is_err());
  }
}
