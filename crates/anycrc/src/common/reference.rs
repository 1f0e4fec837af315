//! Bitwise reference implementation for every width.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one bit at a time straight from the Rocksoft model:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **No tables**: Nothing shared with the table-driven engine
//! - **Const-evaluable**: Can verify check values at compile time
//!
//! The table-driven engine must produce identical results for every parameter
//! set. These are intentionally slow (~8 operations per bit); use them for
//! correctness checks, test oracles, and the forced bitwise kernel.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::bits::{reflect, reflect_byte};
use crate::params::CrcParams;

/// Bitwise CRC computation, MSB-first.
///
/// Input bytes are reflected when `reflect_in` is set, the register is
/// reflected when `reflect_out` is set, and `xor_out` is applied last.
///
/// # Returns
///
/// The final check value in the low `width` bits.
#[must_use]
pub const fn checksum_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let width = params.width();
  let mask = params.mask();
  let poly = params.polynomial();
  let top_shift = width - 1;

  let mut crc = params.initial();
  let mut i: usize = 0;
  while i < data.len() {
    let byte = if params.reflect_in() {
      reflect_byte(data[i])
    } else {
      data[i]
    };

    let mut bit: u32 = 8;
    while bit > 0 {
      bit -= 1;
      let feedback = ((byte >> bit) as u64 & 1) ^ ((crc >> top_shift) & 1);
      crc = (crc << 1) & mask;
      if feedback != 0 {
        crc ^= poly;
      }
    }
    i += 1;
  }

  if params.reflect_out() {
    crc = reflect(crc, width);
  }
  crc ^ params.xor_out()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementation against known
// check values at compile time. If these fail, the build fails.

/// Standard test input for CRC check values.
const CHECK_INPUT: &[u8] = b"123456789";

const fn reference_check(
  width: u32,
  poly: u64,
  init: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
) -> u64 {
  match CrcParams::new(width, poly, init, xor_out, reflect_in, reflect_out) {
    Ok(params) => checksum_bitwise(&params, CHECK_INPUT),
    Err(_) => panic!("invalid reference parameters"),
  }
}

// CRC-8/SMBUS
const _: () = assert!(reference_check(8, 0x07, 0x00, 0x00, false, false) == 0xF4);

// CRC-12/UMTS: reflect-out without reflect-in
const _: () = assert!(reference_check(12, 0x80F, 0x000, 0x000, false, true) == 0xDAF);

// CRC-32/ISO-HDLC
const _: () = assert!(reference_check(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true) == 0xCBF4_3926);

// CRC-64/XZ
const _: () = assert!(reference_check(64, 0x42F0_E1EB_A9EA_3693, !0, !0, true, true) == 0x995D_C9BB_DF19_39FA);

// CRC-5/USB
const _: () = assert!(reference_check(5, 0x05, 0x1F, 0x1F, true, true) == 0x19);
