//! Basic usage: custom parameters, catalog constants, both result forms.
//!
//! Run with: `cargo run --example basic -p anycrc`

use anycrc::{Crc, CrcParams, ParamError, catalog};

fn main() -> Result<(), ParamError> {
  println!("=== anycrc Basic Examples ===\n");

  let data = b"123456789";

  // Custom parameters: CRC-12/UMTS reflects its output only.
  let params = CrcParams::new(12, 0x80F, 0x000, 0x000, false, true)?;
  let crc12 = Crc::new(params);
  let value = crc12.check_value(data);
  println!("CRC-12/UMTS:     {value} bytes={:02x?}", value.as_bytes());
  assert_eq!(value.to_u64(), 0xDAF);

  // Catalog constant.
  let crc32 = Crc::new(CrcParams::CRC32_ISO_HDLC);
  println!("CRC-32/ISO-HDLC: 0x{:08X}", crc32.checksum(data));

  // Out-of-range parameters are rejected up front.
  match CrcParams::new(8, 0x107, 0, 0, false, false) {
    Ok(_) => unreachable!("polynomial is nine bits"),
    Err(err) => println!("rejected:        {err}"),
  }

  println!("\n--- Catalog ---\n");
  for entry in catalog::ALL {
    let crc = Crc::new(entry.params());
    let got = crc.check_value(data);
    let status = if got.to_u64() == entry.check() { "ok" } else { "MISMATCH" };
    println!("{:<28} {:>18} {status}", entry.name(), got.to_string());
  }

  Ok(())
}
