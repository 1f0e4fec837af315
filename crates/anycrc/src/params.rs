//! CRC algorithm parameters.
//!
//! This module defines the validated parameter set for one CRC variant,
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::{
  common::bits::{MAX_WIDTH, MIN_WIDTH, byte_len, reflect, width_mask},
  error::ParamError,
};

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm
/// in the Rocksoft model. Values are checked once in [`CrcParams::new`] and
/// cannot change afterwards.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC, 2 through 64
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `xor_out`: Value to XOR with the final CRC
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC32, CRC32C) use
/// reflected input and output, which maps to LSB-first processing. A few
/// (CRC-12/UMTS) reflect only the output.
///
/// # Examples
///
/// ```
/// use anycrc::CrcParams;
///
/// let params = CrcParams::new(16, 0x1021, 0xFFFF, 0x0000, false, false)?;
/// assert_eq!(params.width(), 16);
/// assert_eq!(params.mask(), 0xFFFF);
/// assert_eq!(params.check_len(), 2);
/// # Ok::<(), anycrc::ParamError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawParams"))]
pub struct CrcParams {
  width: u32,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
}

impl CrcParams {
  /// Validate and build a parameter set.
  ///
  /// # Errors
  ///
  /// - [`ParamError::Width`] if `width` is outside `2..=64`.
  /// - [`ParamError::Polynomial`], [`ParamError::Initial`] or
  ///   [`ParamError::XorOut`] if that value has bits set at or above `width`.
  ///
  /// Checks run in that order and the first failure is returned.
  pub const fn new(
    width: u32,
    polynomial: u64,
    initial: u64,
    xor_out: u64,
    reflect_in: bool,
    reflect_out: bool,
  ) -> Result<Self, ParamError> {
    if width < MIN_WIDTH || width > MAX_WIDTH {
      return Err(ParamError::Width(width));
    }

    let mask = width_mask(width);
    if polynomial > mask {
      return Err(ParamError::Polynomial {
        width,
        value: polynomial,
      });
    }
    if initial > mask {
      return Err(ParamError::Initial { width, value: initial });
    }
    if xor_out > mask {
      return Err(ParamError::XorOut { width, value: xor_out });
    }

    Ok(Self {
      width,
      polynomial,
      initial,
      xor_out,
      reflect_in,
      reflect_out,
    })
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Generator polynomial (normal form, without the implicit high bit).
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u64 {
    self.initial
  }

  /// Value XORed into the final register.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// Whether input bytes are reflected before processing.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is reflected before the XOR-out stage.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// All-ones mask of `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }

  /// Length in bytes of the check value, `ceil(width / 8)`.
  #[inline]
  #[must_use]
  pub const fn check_len(&self) -> usize {
    byte_len(self.width)
  }

  /// Returns the reflected polynomial (bit-reversed across `width` bits).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect(self.polynomial, self.width)
  }
}

/// Unvalidated wire form; deserialization goes through [`CrcParams::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParams {
  width: u32,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_in: bool,
  reflect_out: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for CrcParams {
  type Error = ParamError;

  fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
    Self::new(
      raw.width,
      raw.polynomial,
      raw.initial,
      raw.xor_out,
      raw.reflect_in,
      raw.reflect_out,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_params_round_trip_through_accessors() {
    let params = CrcParams::new(32, 0x14C1_08E0, 0xFFFF_0000, 0xEEAA_00B1, true, false).unwrap();
    assert_eq!(params.width(), 32);
    assert_eq!(params.polynomial(), 0x14C1_08E0);
    assert_eq!(params.initial(), 0xFFFF_0000);
    assert_eq!(params.xor_out(), 0xEEAA_00B1);
    assert!(params.reflect_in());
    assert!(!params.reflect_out());
    assert_eq!(params.mask(), 0xFFFF_FFFF);
    assert_eq!(params.check_len(), 4);
  }

  #[test]
  fn width_bounds() {
    assert_eq!(CrcParams::new(0, 0, 0, 0, false, false), Err(ParamError::Width(0)));
    assert_eq!(CrcParams::new(1, 1, 0, 0, false, false), Err(ParamError::Width(1)));
    assert_eq!(
      CrcParams::new(65, u64::MAX, u64::MAX, u64::MAX, false, false),
      Err(ParamError::Width(65))
    );
    assert!(CrcParams::new(2, 0x3, 0x3, 0x3, false, false).is_ok());
    assert!(CrcParams::new(7, 0x0F, 0x0F, 0x0F, false, false).is_ok());
    assert!(CrcParams::new(64, u64::MAX, u64::MAX, u64::MAX, true, true).is_ok());
  }

  #[test]
  fn polynomial_too_wide() {
    assert_eq!(
      CrcParams::new(32, 0x1_FFFF_FFFF, 0xFFFF_0000, 0xEEAA_00B1, true, false),
      Err(ParamError::Polynomial {
        width: 32,
        value: 0x1_FFFF_FFFF
      })
    );
  }

  #[test]
  fn initial_too_wide() {
    assert_eq!(
      CrcParams::new(32, 0xFFFF_FFFF, 0x1_FFFF_FFFF, 0xEEAA_00B1, true, false),
      Err(ParamError::Initial {
        width: 32,
        value: 0x1_FFFF_FFFF
      })
    );
  }

  #[test]
  fn xor_out_too_wide() {
    assert_eq!(
      CrcParams::new(32, 0xFFFF_FFFF, 0xFFFF_FFFF, 0x1_FFFF_FFFF, true, false),
      Err(ParamError::XorOut {
        width: 32,
        value: 0x1_FFFF_FFFF
      })
    );
  }

  #[test]
  fn first_failure_wins() {
    // Every numeric field is too wide; the polynomial is checked first.
    assert_eq!(
      CrcParams::new(4, 0x10, 0x10, 0x10, false, false).unwrap_err().field(),
      "polynomial"
    );
    assert_eq!(CrcParams::new(4, 0x1, 0x10, 0x10, false, false).unwrap_err().field(), "initial");
  }

  #[test]
  fn mask_boundary_is_inclusive() {
    for width in MIN_WIDTH..=MAX_WIDTH {
      let mask = width_mask(width);
      assert!(CrcParams::new(width, mask, mask, mask, false, false).is_ok(), "width={width}");
      if width < 64 {
        assert!(CrcParams::new(width, mask + 1, 0, 0, false, false).is_err(), "width={width}");
      }
    }
  }

  #[test]
  fn polynomial_reflected_known_values() {
    let crc32c = CrcParams::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true).unwrap();
    assert_eq!(crc32c.polynomial_reflected(), 0x82F6_3B78);

    let crc32 = CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true).unwrap();
    assert_eq!(crc32.polynomial_reflected(), 0xEDB8_8320);

    let crc5 = CrcParams::new(5, 0x05, 0x1F, 0x1F, true, true).unwrap();
    assert_eq!(crc5.polynomial_reflected(), 0x14);
  }

  #[test]
  fn const_construction() {
    const P: CrcParams = match CrcParams::new(8, 0x07, 0, 0, false, false) {
      Ok(p) => p,
      Err(_) => panic!("invalid params"),
    };
    assert_eq!(P.polynomial(), 0x07);
  }
}
