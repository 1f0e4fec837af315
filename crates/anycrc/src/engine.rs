//! Table-driven CRC engine.
//!
//! [`Crc`] pairs a validated [`CrcParams`] with the 256-entry lookup table
//! derived from it. The table is built once in [`Crc::new`] and never changes,
//! so one engine can be shared freely across threads and reused for any
//! number of inputs.

// SAFETY: Table indices are masked to 0..=0xFF before use.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use crate::{
  check::CheckValue,
  common::{
    bits::reflect,
    reference::checksum_bitwise,
    tables::{TABLE_LEN, generate_table},
  },
  config::{self, Kernel},
  error::CrcError,
  params::CrcParams,
};

/// A CRC engine for one parameter set.
///
/// # Examples
///
/// ```
/// use anycrc::{Crc, CrcParams};
///
/// let params = CrcParams::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true)?;
/// let crc = Crc::new(params);
/// assert_eq!(crc.checksum(b"123456789"), 0xCBF4_3926);
/// assert_eq!(crc.check_value(b"123456789").as_bytes(), &[0x26, 0x39, 0xF4, 0xCB]);
/// # Ok::<(), anycrc::ParamError>(())
/// ```
///
/// Engines can be built at compile time:
///
/// ```
/// use anycrc::{Crc, CrcParams};
///
/// static CRC64_XZ: Crc = Crc::new(CrcParams::CRC64_XZ);
/// assert_eq!(CRC64_XZ.checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
/// ```
#[derive(Clone)]
pub struct Crc {
  params: CrcParams,
  table: [u64; TABLE_LEN],
  kernel: Kernel,
}

impl Crc {
  /// Build an engine and its lookup table.
  ///
  /// The engine uses [`Kernel::Auto`], which honors the process
  /// configuration (see [`config`](crate::config)).
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self {
      table: generate_table(&params),
      params,
      kernel: Kernel::Auto,
    }
  }

  /// Build an engine pinned to `kernel`, ignoring configuration overrides
  /// unless `kernel` is [`Kernel::Auto`].
  #[must_use]
  pub fn with_kernel(params: CrcParams, kernel: Kernel) -> Self {
    trace_build(&params, kernel);
    Self {
      kernel,
      ..Self::new(params)
    }
  }

  /// Build an engine from an optional parameter set.
  ///
  /// # Errors
  ///
  /// [`CrcError::NullArgument`] if `params` is `None`.
  pub fn try_new(params: Option<CrcParams>) -> Result<Self, CrcError> {
    let params = params.ok_or(CrcError::NullArgument("params"))?;
    trace_build(&params, Kernel::Auto);
    Ok(Self::new(params))
  }

  /// The parameter set this engine was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The lookup table, in register bit order, each entry masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[u64; TABLE_LEN] {
    &self.table
  }

  /// The kernel this engine was built with (possibly `Auto`).
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Kernel {
    self.kernel
  }

  /// Name of the kernel that [`checksum`](Self::checksum) runs.
  #[inline]
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.effective_kernel().as_str()
  }

  #[inline]
  fn effective_kernel(&self) -> Kernel {
    match self.kernel {
      Kernel::Auto => config::get().effective,
      kernel => kernel,
    }
  }

  /// Compute the check value of `data` as a number.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    match self.effective_kernel() {
      Kernel::Bitwise => checksum_bitwise(&self.params, data),
      Kernel::Auto | Kernel::Table => self.checksum_table(data),
    }
  }

  /// Compute the check value of `data` as `ceil(width / 8)` little-endian bytes.
  #[inline]
  #[must_use]
  pub fn check_value(&self, data: &[u8]) -> CheckValue {
    CheckValue::from_value(self.checksum(data), self.params.check_len())
  }

  /// [`checksum`](Self::checksum) for callers holding optional data.
  ///
  /// # Errors
  ///
  /// [`CrcError::NullArgument`] if `data` is `None`.
  #[inline]
  pub fn try_checksum(&self, data: Option<&[u8]>) -> Result<u64, CrcError> {
    data.map(|data| self.checksum(data)).ok_or(CrcError::NullArgument("data"))
  }

  /// [`check_value`](Self::check_value) for callers holding optional data.
  ///
  /// # Errors
  ///
  /// [`CrcError::NullArgument`] if `data` is `None`.
  #[inline]
  pub fn try_check_value(&self, data: Option<&[u8]>) -> Result<CheckValue, CrcError> {
    data.map(|data| self.check_value(data)).ok_or(CrcError::NullArgument("data"))
  }

  /// Byte-at-a-time table computation.
  ///
  /// Always uses the table regardless of the configured kernel, and is
  /// usable in const contexts.
  #[must_use]
  pub const fn checksum_table(&self, data: &[u8]) -> u64 {
    let params = &self.params;
    let width = params.width();
    let mask = params.mask();

    let mut crc = if params.reflect_in() {
      reflect(params.initial(), width)
    } else {
      params.initial()
    };

    let mut i = 0usize;
    if params.reflect_in() {
      while i < data.len() {
        let index = ((crc ^ data[i] as u64) & 0xFF) as usize;
        crc = (self.table[index] ^ (crc >> 8)) & mask;
        i += 1;
      }
    } else {
      // Top byte of the register; widths below 8 are lifted to fill it.
      let (down, up) = if width >= 8 { (width - 8, 0) } else { (0, 8 - width) };
      while i < data.len() {
        let index = ((((crc >> down) << up) ^ data[i] as u64) & 0xFF) as usize;
        crc = (self.table[index] ^ (crc << 8)) & mask;
        i += 1;
      }
    }

    if params.reflect_in() != params.reflect_out() {
      crc = reflect(crc, width);
    }
    crc ^ params.xor_out()
  }
}

impl fmt::Debug for Crc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("params", &self.params)
      .field("kernel", &self.kernel)
      .finish_non_exhaustive()
  }
}

#[cfg(feature = "tracing")]
fn trace_build(params: &CrcParams, kernel: Kernel) {
  tracing::debug!(
    width = params.width(),
    polynomial = params.polynomial(),
    reflect_in = params.reflect_in(),
    reflect_out = params.reflect_out(),
    kernel = kernel.as_str(),
    "building CRC engine"
  );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_build(_params: &CrcParams, _kernel: Kernel) {}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const fn table_check(params: CrcParams) -> u64 {
  Crc::new(params).checksum_table(b"123456789")
}

const _: () = assert!(table_check(CrcParams::CRC8_SMBUS) == 0xF4);
const _: () = assert!(table_check(CrcParams::CRC16_XMODEM) == 0x31C3);
const _: () = assert!(table_check(CrcParams::CRC32_ISO_HDLC) == 0xCBF4_3926);
const _: () = assert!(table_check(CrcParams::CRC64_XZ) == 0x995D_C9BB_DF19_39FA);
const _: () = assert!(table_check(CrcParams::CRC12_UMTS) == 0xDAF);
