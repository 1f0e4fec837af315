//! Error types for CRC parameter validation and engine calls.
//!
//! Two kinds exist. [`ParamError`] is the invalid-argument kind and is the only
//! error [`CrcParams::new`](crate::CrcParams::new) can return. [`CrcError`]
//! wraps it and adds [`CrcError::NullArgument`] for the `try_*` entry points
//! that accept optional inputs.

use core::fmt;

/// A CRC parameter was outside its allowed range.
///
/// # Examples
///
/// ```
/// use anycrc::{CrcParams, ParamError};
///
/// let err = CrcParams::new(65, 0x07, 0, 0, false, false).unwrap_err();
/// assert_eq!(err, ParamError::Width(65));
/// assert_eq!(err.to_string(), "width must be between 2 and 64 bits, got 65");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamError {
  /// Width was below 2 or above 64.
  Width(u32),
  /// Polynomial does not fit in `width` bits.
  Polynomial {
    /// Requested width.
    width: u32,
    /// Rejected polynomial.
    value: u64,
  },
  /// Initial register value does not fit in `width` bits.
  Initial {
    /// Requested width.
    width: u32,
    /// Rejected initial value.
    value: u64,
  },
  /// XOR-out value does not fit in `width` bits.
  XorOut {
    /// Requested width.
    width: u32,
    /// Rejected XOR-out value.
    value: u64,
  },
}

impl ParamError {
  /// Name of the offending parameter.
  #[inline]
  #[must_use]
  pub const fn field(&self) -> &'static str {
    match self {
      Self::Width(_) => "width",
      Self::Polynomial { .. } => "polynomial",
      Self::Initial { .. } => "initial",
      Self::XorOut { .. } => "xor_out",
    }
  }
}

impl fmt::Display for ParamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Width(width) => write!(f, "width must be between 2 and 64 bits, got {width}"),
      Self::Polynomial { width, value } => write!(f, "polynomial {value:#x} exceeds {width} bits"),
      Self::Initial { width, value } => write!(f, "initial value {value:#x} exceeds {width} bits"),
      Self::XorOut { width, value } => write!(f, "xor-out value {value:#x} exceeds {width} bits"),
    }
  }
}

impl core::error::Error for ParamError {}

/// Failure of an engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// A parameter failed validation.
  InvalidArgument(ParamError),
  /// A required argument was absent. Carries the argument name.
  NullArgument(&'static str),
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
      Self::NullArgument(name) => write!(f, "argument `{name}` cannot be null"),
    }
  }
}

impl core::error::Error for CrcError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::InvalidArgument(err) => Some(err),
      Self::NullArgument(_) => None,
    }
  }
}

impl From<ParamError> for CrcError {
  #[inline]
  fn from(err: ParamError) -> Self {
    Self::InvalidArgument(err)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};
  use core::error::Error;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      ParamError::Width(1).to_string(),
      "width must be between 2 and 64 bits, got 1"
    );
    assert_eq!(
      ParamError::Polynomial {
        width: 32,
        value: 0x1_FFFF_FFFF
      }
      .to_string(),
      "polynomial 0x1ffffffff exceeds 32 bits"
    );
    assert_eq!(
      ParamError::Initial { width: 8, value: 0x100 }.to_string(),
      "initial value 0x100 exceeds 8 bits"
    );
    assert_eq!(
      ParamError::XorOut { width: 4, value: 0x10 }.to_string(),
      "xor-out value 0x10 exceeds 4 bits"
    );
    assert_eq!(
      CrcError::NullArgument("data").to_string(),
      "argument `data` cannot be null"
    );
    assert_eq!(
      CrcError::from(ParamError::Width(65)).to_string(),
      "invalid argument: width must be between 2 and 64 bits, got 65"
    );
  }

  #[test]
  fn field_names() {
    assert_eq!(ParamError::Width(0).field(), "width");
    assert_eq!(ParamError::Polynomial { width: 8, value: 0 }.field(), "polynomial");
    assert_eq!(ParamError::Initial { width: 8, value: 0 }.field(), "initial");
    assert_eq!(ParamError::XorOut { width: 8, value: 0 }.field(), "xor_out");
  }

  #[test]
  fn source_chain() {
    let inner = ParamError::Width(70);
    let err = CrcError::from(inner);
    let source = err.source().expect("invalid-argument errors carry a source");
    assert_eq!(source.to_string(), inner.to_string());
    assert!(CrcError::NullArgument("params").source().is_none());
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", CrcError::NullArgument("data")), "NullArgument(\"data\")");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + Copy + core::error::Error>() {}
    assert_send_sync::<ParamError>();
    assert_send_sync::<CrcError>();
  }
}
