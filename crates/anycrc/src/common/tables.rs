//! Const-fn CRC lookup table generation for any width.
//!
//! One 256-entry table of `u64` serves every width from 2 to 64. Entries are
//! stored in the register's bit order: reflected for `reflect_in` variants,
//! normal otherwise, always masked to `width` bits.
//!
//! # Widths below 8
//!
//! The byte-wise algorithm seeds the register with `byte << (width - 8)`,
//! which has no meaning when `width < 8`. For those widths the eight division
//! steps run in an 8-bit register with the polynomial aligned to its top bit,
//! and the result is shifted back down afterwards. Widths of 8 and above take
//! the same code path with an alignment of zero.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::bits::{reflect, reflect_byte, width_mask};
use crate::params::CrcParams;

/// Number of entries in a byte-wise lookup table.
pub const TABLE_LEN: usize = 256;

/// Generate a single lookup table entry for input byte `index`.
#[must_use]
pub const fn table_entry(params: &CrcParams, index: u8) -> u64 {
  let width = params.width();
  // Working register is at least 8 bits wide so a whole byte fits at its top.
  let reg_width = if width < 8 { 8 } else { width };
  let align = reg_width - width;
  let reg_mask = width_mask(reg_width);
  let top_bit = 1u64 << (reg_width - 1);
  let poly = params.polynomial() << align;

  let in_byte = if params.reflect_in() { reflect_byte(index) } else { index };
  let mut r = (in_byte as u64) << (reg_width - 8);

  let mut bit = 0;
  while bit < 8 {
    r = if r & top_bit != 0 { (r << 1) ^ poly } else { r << 1 };
    r &= reg_mask;
    bit += 1;
  }

  r >>= align;
  if params.reflect_in() {
    r = reflect(r, width);
  }
  r & params.mask()
}

/// Generate the full 256-entry lookup table for `params`.
#[must_use]
pub const fn generate_table(params: &CrcParams) -> [u64; TABLE_LEN] {
  let mut table = [0u64; TABLE_LEN];
  let mut i = 0usize;
  while i < TABLE_LEN {
    table[i] = table_entry(params, i as u8);
    i += 1;
  }
  table
}
