//! Differential fuzzing of the table kernel against the bitwise reference.
//!
//! The fuzzer picks an arbitrary width and field values; out-of-range inputs
//! must be rejected by validation, in-range ones must agree across kernels.

#![no_main]

use anycrc::{Crc, CrcParams, Kernel, common::bits::width_mask};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
  width: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
  data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
  let width = u32::from(input.width);
  let Ok(params) = CrcParams::new(
    width,
    input.polynomial,
    input.initial,
    input.xor_out,
    input.reflect_in,
    input.reflect_out,
  ) else {
    // Rejection must be justified by the width or a field that does not fit.
    let valid_width = (2..=64).contains(&width);
    assert!(
      !valid_width
        || input.polynomial > width_mask(width)
        || input.initial > width_mask(width)
        || input.xor_out > width_mask(width)
    );
    return;
  };

  let table = Crc::with_kernel(params, Kernel::Table);
  let bitwise = Crc::with_kernel(params, Kernel::Bitwise);

  let ours = table.checksum(input.data);
  let reference = bitwise.checksum(input.data);
  assert_eq!(
    ours, reference,
    "kernel mismatch: table={ours:#x}, bitwise={reference:#x}, params={params:?}, len={}",
    input.data.len()
  );

  let value = table.check_value(input.data);
  assert_eq!(value.len(), params.check_len());
  assert_eq!(value.to_u64(), ours);
  assert!(ours <= params.mask());
});
