//! Runtime kernel configuration.
//!
//! Engines built with [`Kernel::Auto`] consult this module on every call to
//! decide which kernel computes the checksum. The only knob today is a forced
//! kernel, read from the environment once per process:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `ANYCRC_FORCE` | `auto`, `table` (alias `portable`), `bitwise` (alias `reference`) |
//!
//! Without the `std` feature there is no environment and `Auto` always
//! resolves to [`Kernel::Table`].

/// Kernel used to compute a checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
  /// Defer to [`get`]; resolves to [`Kernel::Table`] unless overridden.
  #[default]
  Auto,
  /// Byte-at-a-time lookup table.
  Table,
  /// Bit-at-a-time reference; no table reads.
  Bitwise,
}

impl Kernel {
  /// Stable lowercase name, as accepted by `ANYCRC_FORCE`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Bitwise => "bitwise",
    }
  }

  /// Parse a kernel name, ignoring ASCII case and surrounding whitespace.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("portable") {
      return Some(Self::Table);
    }
    if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
      return Some(Self::Bitwise);
    }
    None
  }

  /// Resolve `Auto` to a concrete kernel.
  #[inline]
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto => Self::Table,
      other => other,
    }
  }
}

/// Effective configuration after applying overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Kernel requested through the environment (or `Auto`).
  pub requested: Kernel,
  /// Concrete kernel that `Auto` engines will run.
  pub effective: Kernel,
}

impl CrcConfig {
  #[inline]
  const fn from_requested(requested: Kernel) -> Self {
    Self {
      requested,
      effective: requested.resolve(),
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Kernel,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  const FORCE_VAR: &str = "ANYCRC_FORCE";

  let force = match std::env::var(FORCE_VAR) {
    Ok(value) if value.trim().is_empty() => Kernel::Auto,
    Ok(value) => match Kernel::parse(&value) {
      Some(kernel) => kernel,
      None => {
        #[cfg(feature = "tracing")]
        tracing::warn!(var = FORCE_VAR, value = %value, "ignoring unrecognized kernel override");
        Kernel::Auto
      }
    },
    Err(_) => Kernel::Auto,
  };

  Overrides { force }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective configuration for this process.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  CrcConfig::from_requested(overrides().force)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_names_and_aliases() {
    assert_eq!(Kernel::parse("auto"), Some(Kernel::Auto));
    assert_eq!(Kernel::parse(" TABLE "), Some(Kernel::Table));
    assert_eq!(Kernel::parse("portable"), Some(Kernel::Table));
    assert_eq!(Kernel::parse("Bitwise"), Some(Kernel::Bitwise));
    assert_eq!(Kernel::parse("reference"), Some(Kernel::Bitwise));
    assert_eq!(Kernel::parse("simd"), None);
    assert_eq!(Kernel::parse(""), None);
  }

  #[test]
  fn as_str_round_trips() {
    for kernel in [Kernel::Auto, Kernel::Table, Kernel::Bitwise] {
      assert_eq!(Kernel::parse(kernel.as_str()), Some(kernel));
    }
  }

  #[test]
  fn auto_resolves_to_table() {
    assert_eq!(Kernel::Auto.resolve(), Kernel::Table);
    assert_eq!(Kernel::Bitwise.resolve(), Kernel::Bitwise);
    assert_eq!(CrcConfig::from_requested(Kernel::Auto).effective, Kernel::Table);
  }

  #[test]
  fn effective_is_never_auto() {
    let cfg = get();
    assert_ne!(cfg.effective, Kernel::Auto);
    assert_eq!(cfg.effective, cfg.requested.resolve());
  }
}
