//! Byte-array form of a check value.

use core::fmt;

/// A computed check value in little-endian byte order.
///
/// Holds exactly `ceil(width / 8)` significant bytes, least-significant first.
/// The numeric form is available through [`CheckValue::to_u64`].
///
/// # Examples
///
/// ```
/// use anycrc::{Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::CRC16_XMODEM);
/// let value = crc.check_value(b"123456789");
/// assert_eq!(value.as_bytes(), &[0xC3, 0x31]);
/// assert_eq!(value.to_u64(), 0x31C3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckValue {
  bytes: [u8; 8],
  len: u8,
}

impl CheckValue {
  /// Encode `value` as `len` little-endian bytes.
  ///
  /// Bytes beyond `len` are dropped, so `value` should already be masked to
  /// the CRC width.
  #[inline]
  #[must_use]
  #[allow(clippy::indexing_slicing)] // `i` is bounded by the array length.
  pub(crate) const fn from_value(value: u64, len: usize) -> Self {
    let len = if len > 8 { 8 } else { len };
    let mut bytes = value.to_le_bytes();
    let mut i = len;
    while i < 8 {
      bytes[i] = 0;
      i += 1;
    }
    Self { bytes, len: len as u8 }
  }

  /// The significant bytes, least-significant first.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    self.bytes.get(..usize::from(self.len)).unwrap_or(&[])
  }

  /// Number of significant bytes, `ceil(width / 8)`.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)] // Never empty: width is at least 2 bits.
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// The bytes zero-extended to a full register and decoded little-endian.
  #[inline]
  #[must_use]
  pub const fn to_u64(&self) -> u64 {
    u64::from_le_bytes(self.bytes)
  }

  /// Copy the significant bytes into a new vector.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn to_vec(&self) -> alloc::vec::Vec<u8> {
    self.as_bytes().to_vec()
  }
}

impl AsRef<[u8]> for CheckValue {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl From<CheckValue> for u64 {
  #[inline]
  fn from(value: CheckValue) -> Self {
    value.to_u64()
  }
}

impl fmt::Debug for CheckValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("CheckValue").field(&self.as_bytes()).finish()
  }
}

/// Hex digits, most-significant first, two per byte.
impl fmt::LowerHex for CheckValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in self.as_bytes().iter().rev() {
      write!(f, "{byte:02x}")?;
    }
    Ok(())
  }
}

impl fmt::UpperHex for CheckValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for byte in self.as_bytes().iter().rev() {
      write!(f, "{byte:02X}")?;
    }
    Ok(())
  }
}

impl fmt::Display for CheckValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "0x{self:x}")
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn truncates_to_len() {
    let v = CheckValue::from_value(0xCBF4_3926, 4);
    assert_eq!(v.as_bytes(), &[0x26, 0x39, 0xF4, 0xCB]);
    assert_eq!(v.len(), 4);
    assert_eq!(v.to_u64(), 0xCBF4_3926);
  }

  #[test]
  fn bytes_past_len_are_cleared() {
    // A value wider than `len` keeps only its low bytes in both forms.
    let v = CheckValue::from_value(0x1234_5678, 2);
    assert_eq!(v.as_bytes(), &[0x78, 0x56]);
    assert_eq!(v.to_u64(), 0x5678);
  }

  #[test]
  fn full_width() {
    let v = CheckValue::from_value(0x995D_C9BB_DF19_39FA, 8);
    assert_eq!(v.as_bytes(), &[0xFA, 0x39, 0x19, 0xDF, 0xBB, 0xC9, 0x5D, 0x99]);
    assert_eq!(u64::from(v), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn formatting() {
    let v = CheckValue::from_value(0x0DAF, 2);
    assert_eq!(format!("{v:x}"), "0daf");
    assert_eq!(format!("{v:X}"), "0DAF");
    assert_eq!(v.to_string(), "0x0daf");
    assert_eq!(format!("{v:?}"), "CheckValue([175, 13])");
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn to_vec_copies_significant_bytes() {
    let v = CheckValue::from_value(0xF4, 1);
    assert_eq!(v.to_vec(), alloc::vec![0xF4]);
  }
}
