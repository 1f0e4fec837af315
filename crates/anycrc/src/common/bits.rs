//! Width masks and bit reflection.
//!
//! Every register in this crate is carried in a `u64` regardless of the CRC
//! width, so these helpers are the single place where variable-width shifts
//! happen. All of them are `const fn` so tables and catalog entries can be
//! evaluated at compile time.

/// Smallest supported CRC width in bits.
pub const MIN_WIDTH: u32 = 2;

/// Largest supported CRC width in bits.
pub const MAX_WIDTH: u32 = 64;

/// All-ones mask covering the low `width` bits.
///
/// Widths of 64 and above get the full register as their own branch, so the
/// shift below never reaches the register size. Width 0 yields 0.
#[inline]
#[must_use]
pub const fn width_mask(width: u32) -> u64 {
  match width {
    0 => 0,
    64.. => u64::MAX,
    _ => u64::MAX >> (64 - width),
  }
}

/// Reverse the low `bit_count` bits of `value`.
///
/// Output bit `bit_count - 1 - k` is input bit `k`; bits at or above
/// `bit_count` are zero in the result.
#[inline]
#[must_use]
pub const fn reflect(value: u64, bit_count: u32) -> u64 {
  if bit_count == 0 {
    return 0;
  }
  let full = value.reverse_bits();
  if bit_count >= 64 {
    full
  } else {
    full >> (64 - bit_count)
  }
}

/// Reverse the bits of a single byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// Number of bytes needed to hold a `width`-bit check value.
#[inline]
#[must_use]
pub const fn byte_len(width: u32) -> usize {
  width.div_ceil(8) as usize
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Bit-at-a-time reflection, kept deliberately naive.
  fn reflect_naive(value: u64, bit_count: u32) -> u64 {
    let mut out = 0u64;
    for k in 0..bit_count {
      if (value >> k) & 1 == 1 {
        out |= 1 << (bit_count - 1 - k);
      }
    }
    out
  }

  #[test]
  fn mask_edges() {
    assert_eq!(width_mask(0), 0x0);
    assert_eq!(width_mask(1), 0x1);
    assert_eq!(width_mask(2), 0x3);
    assert_eq!(width_mask(8), 0xFF);
    assert_eq!(width_mask(12), 0xFFF);
    assert_eq!(width_mask(63), u64::MAX >> 1);
    assert_eq!(width_mask(64), u64::MAX);
    assert_eq!(width_mask(200), u64::MAX);
  }

  #[test]
  fn reflect_known_values() {
    assert_eq!(reflect(0b1010, 4), 0b0101);
    assert_eq!(reflect(0b1100, 4), 0b0011);
    assert_eq!(reflect(0xFF, 8), 0xFF);
    assert_eq!(reflect(0x80, 8), 0x01);
    assert_eq!(reflect(0b01, 2), 0b10);
    assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
    assert_eq!(reflect(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
  }

  #[test]
  fn reflect_drops_bits_above_count() {
    // Bit 8 is outside an 8-bit reflection and must not leak into the result.
    assert_eq!(reflect(0x101, 8), 0x80);
    assert_eq!(reflect(u64::MAX, 5), 0x1F);
  }

  #[test]
  fn reflect_matches_naive_for_every_width() {
    let samples = [0u64, 1, 0x5A, 0x8000_0000_0000_0001, 0x0123_4567_89AB_CDEF, u64::MAX];
    for width in 1..=64 {
      for &value in &samples {
        assert_eq!(reflect(value, width), reflect_naive(value, width), "width={width} value={value:#x}");
      }
    }
  }

  #[test]
  fn reflect_is_an_involution_on_masked_values() {
    for width in 1..=64 {
      let value = 0xDEAD_BEEF_CAFE_F00D & width_mask(width);
      assert_eq!(reflect(reflect(value, width), width), value);
    }
  }

  #[test]
  fn reflect_byte_matches_generic() {
    for b in 0..=255u8 {
      assert_eq!(u64::from(reflect_byte(b)), reflect(u64::from(b), 8));
    }
  }

  #[test]
  fn byte_len_rounds_up() {
    assert_eq!(byte_len(2), 1);
    assert_eq!(byte_len(8), 1);
    assert_eq!(byte_len(9), 2);
    assert_eq!(byte_len(12), 2);
    assert_eq!(byte_len(24), 3);
    assert_eq!(byte_len(40), 5);
    assert_eq!(byte_len(64), 8);
  }
}
