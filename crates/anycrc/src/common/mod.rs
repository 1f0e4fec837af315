//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Width masks and bit reflection
//! - Const-fn lookup table generation for every width
//! - The bitwise reference implementation used as the test oracle

pub mod bits;
mod proptests;
pub mod reference;
pub mod tables;
