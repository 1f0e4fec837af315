//! Generic table-driven CRC computation for any width from 2 to 64 bits.
//!
//! One engine reproduces any CRC variant described in the Rocksoft model:
//! width, polynomial, initial value, XOR-out value, and independent input and
//! output reflection.
//!
//! # Usage
//!
//! | Step | Type | Fails with |
//! |------|------|------------|
//! | Describe the variant | [`CrcParams::new`] | [`ParamError`] |
//! | Build the lookup table | [`Crc::new`] | never |
//! | Compute | [`Crc::checksum`] / [`Crc::check_value`] | never |
//!
//! The `try_*` forms ([`Crc::try_new`], [`Crc::try_checksum`],
//! [`Crc::try_check_value`]) accept optional inputs and report
//! [`CrcError::NullArgument`] when one is missing.
//!
//! # Example
//!
//! ```rust
//! use anycrc::{Crc, CrcParams};
//!
//! // CRC-12/UMTS reflects its output but not its input.
//! let params = CrcParams::new(12, 0x80F, 0x000, 0x000, false, true)?;
//! let crc = Crc::new(params);
//!
//! let data = b"123456789";
//! assert_eq!(crc.checksum(data), 0xDAF);
//! assert_eq!(crc.check_value(data).as_bytes(), &[0xAF, 0x0D]);
//!
//! // Catalog constants work the same way.
//! let crc32 = Crc::new(CrcParams::CRC32_ISO_HDLC);
//! assert_eq!(crc32.checksum(data), 0xCBF4_3926);
//! # Ok::<(), anycrc::ParamError>(())
//! ```
//!
//! # Threading
//!
//! A [`Crc`] never changes after construction. Share it by reference, in an
//! `Arc`, or as a `static` (construction is `const fn`).
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `std` | yes | Reads `ANYCRC_FORCE` (see [`config`]); implies `alloc` |
//! | `alloc` | via `std` | [`CheckValue::to_vec`] |
//! | `tracing` | no | Debug events on engine construction, warnings on bad overrides |
//! | `serde` | no | (De)serialize [`CrcParams`]; deserialization validates |
//!
//! # no_std Support
//!
//! Disable default features for embedded use:
//!
//! ```toml
//! [dependencies]
//! anycrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
mod check;
pub mod common;
pub mod config;
mod engine;
pub mod error;
mod params;

pub use check::CheckValue;
pub use config::Kernel;
pub use engine::Crc;
pub use error::{CrcError, ParamError};
pub use params::CrcParams;
