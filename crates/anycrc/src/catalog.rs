//! Named CRC parameter sets.
//!
//! Entries follow the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! naming, with each check value being the CRC of the ASCII string
//! `"123456789"`. Every constant is validated when the crate is compiled.
//!
//! # Examples
//!
//! ```
//! use anycrc::{Crc, CrcParams, catalog};
//!
//! let crc = Crc::new(CrcParams::CRC16_MODBUS);
//! assert_eq!(crc.checksum(b"123456789"), 0x4B37);
//!
//! let entry = catalog::find("crc-16/modbus").unwrap();
//! assert_eq!(entry.params(), CrcParams::CRC16_MODBUS);
//! assert_eq!(entry.check(), 0x4B37);
//! ```

use crate::params::CrcParams;

/// Build a catalog constant, failing compilation if it is invalid.
const fn entry(width: u32, poly: u64, init: u64, xor_out: u64, reflect_in: bool, reflect_out: bool) -> CrcParams {
  match CrcParams::new(width, poly, init, xor_out, reflect_in, reflect_out) {
    Ok(params) => params,
    Err(_) => panic!("invalid catalog entry"),
  }
}

impl CrcParams {
  /// `CRC-3/GSM`: check `0x4`.
  pub const CRC3_GSM: Self = entry(3, 0x3, 0x0, 0x7, false, false);

  /// `CRC-3/ROHC`: check `0x6`.
  pub const CRC3_ROHC: Self = entry(3, 0x3, 0x7, 0x0, true, true);

  /// `CRC-4/G-704`: check `0x7`.
  pub const CRC4_G_704: Self = entry(4, 0x3, 0x0, 0x0, true, true);

  /// `CRC-4/INTERLAKEN`: check `0xB`.
  pub const CRC4_INTERLAKEN: Self = entry(4, 0x3, 0xF, 0xF, false, false);

  /// `CRC-5/EPC-C1G2`: check `0x00`.
  pub const CRC5_EPC_C1G2: Self = entry(5, 0x09, 0x09, 0x00, false, false);

  /// `CRC-5/G-704`: check `0x07`.
  pub const CRC5_G_704: Self = entry(5, 0x15, 0x00, 0x00, true, true);

  /// `CRC-5/USB`: check `0x19`.
  pub const CRC5_USB: Self = entry(5, 0x05, 0x1F, 0x1F, true, true);

  /// `CRC-6/CDMA2000-A`: check `0x0D`.
  pub const CRC6_CDMA2000_A: Self = entry(6, 0x27, 0x3F, 0x00, false, false);

  /// `CRC-6/DARC`: check `0x26`.
  pub const CRC6_DARC: Self = entry(6, 0x19, 0x00, 0x00, true, true);

  /// `CRC-6/G-704`: check `0x06`.
  pub const CRC6_G_704: Self = entry(6, 0x03, 0x00, 0x00, true, true);

  /// `CRC-6/GSM`: check `0x13`.
  pub const CRC6_GSM: Self = entry(6, 0x2F, 0x00, 0x3F, false, false);

  /// `CRC-7/MMC`: check `0x75`.
  pub const CRC7_MMC: Self = entry(7, 0x09, 0x00, 0x00, false, false);

  /// `CRC-7/ROHC`: check `0x53`.
  pub const CRC7_ROHC: Self = entry(7, 0x4F, 0x7F, 0x00, true, true);

  /// `CRC-8/AUTOSAR`: check `0xDF`.
  pub const CRC8_AUTOSAR: Self = entry(8, 0x2F, 0xFF, 0xFF, false, false);

  /// `CRC-8/CDMA2000`: check `0xDA`.
  pub const CRC8_CDMA2000: Self = entry(8, 0x9B, 0xFF, 0x00, false, false);

  /// `CRC-8/DARC`: check `0x15`.
  pub const CRC8_DARC: Self = entry(8, 0x39, 0x00, 0x00, true, true);

  /// `CRC-8/DVB-S2`: check `0xBC`.
  pub const CRC8_DVB_S2: Self = entry(8, 0xD5, 0x00, 0x00, false, false);

  /// `CRC-8/EBU`: check `0x97`.
  pub const CRC8_EBU: Self = entry(8, 0x1D, 0xFF, 0x00, true, true);

  /// `CRC-8/GSM-A`: check `0x37`.
  pub const CRC8_GSM_A: Self = entry(8, 0x1D, 0x00, 0x00, false, false);

  /// `CRC-8/GSM-B`: check `0x94`.
  pub const CRC8_GSM_B: Self = entry(8, 0x49, 0x00, 0xFF, false, false);

  /// `CRC-8/I-CODE`: check `0x7E`.
  pub const CRC8_I_CODE: Self = entry(8, 0x1D, 0xFD, 0x00, false, false);

  /// `CRC-8/ITU`: check `0xA1`.
  pub const CRC8_ITU: Self = entry(8, 0x07, 0x00, 0x55, false, false);

  /// `CRC-8/LTE`: check `0xEA`.
  pub const CRC8_LTE: Self = entry(8, 0x9B, 0x00, 0x00, false, false);

  /// `CRC-8/MAXIM`: check `0xA1`.
  pub const CRC8_MAXIM: Self = entry(8, 0x31, 0x00, 0x00, true, true);

  /// `CRC-8/OPENSAFETY`: check `0x3E`.
  pub const CRC8_OPENSAFETY: Self = entry(8, 0x2F, 0x00, 0x00, false, false);

  /// `CRC-8/ROHC`: check `0xD0`.
  pub const CRC8_ROHC: Self = entry(8, 0x07, 0xFF, 0x00, true, true);

  /// `CRC-8/SAE-J1850`: check `0x4B`.
  pub const CRC8_SAE_J1850: Self = entry(8, 0x1D, 0xFF, 0xFF, false, false);

  /// `CRC-8/SMBUS`: check `0xF4`.
  pub const CRC8_SMBUS: Self = entry(8, 0x07, 0x00, 0x00, false, false);

  /// `CRC-8/WCDMA`: check `0x25`.
  pub const CRC8_WCDMA: Self = entry(8, 0x9B, 0x00, 0x00, true, true);

  /// `CRC-10/ATM`: check `0x199`.
  pub const CRC10_ATM: Self = entry(10, 0x233, 0x000, 0x000, false, false);

  /// `CRC-10/CDMA2000`: check `0x233`.
  pub const CRC10_CDMA2000: Self = entry(10, 0x3D9, 0x3FF, 0x000, false, false);

  /// `CRC-10/GSM`: check `0x12A`.
  pub const CRC10_GSM: Self = entry(10, 0x175, 0x000, 0x3FF, false, false);

  /// `CRC-12/CDMA2000`: check `0xD4D`.
  pub const CRC12_CDMA2000: Self = entry(12, 0xF13, 0xFFF, 0x000, false, false);

  /// `CRC-12/DECT`: check `0xF5B`.
  pub const CRC12_DECT: Self = entry(12, 0x80F, 0x000, 0x000, false, false);

  /// `CRC-12/GSM`: check `0xB34`.
  pub const CRC12_GSM: Self = entry(12, 0xD31, 0x000, 0xFFF, false, false);

  /// `CRC-12/UMTS`: check `0xDAF`.
  pub const CRC12_UMTS: Self = entry(12, 0x80F, 0x000, 0x000, false, true);

  /// `CRC-13/BBC`: check `0x04FA`.
  pub const CRC13_BBC: Self = entry(13, 0x1CF5, 0x0000, 0x0000, false, false);

  /// `CRC-14/DARC`: check `0x082D`.
  pub const CRC14_DARC: Self = entry(14, 0x0805, 0x0000, 0x0000, true, true);

  /// `CRC-14/GSM`: check `0x30AE`.
  pub const CRC14_GSM: Self = entry(14, 0x202D, 0x0000, 0x3FFF, false, false);

  /// `CRC-15/CAN`: check `0x059E`.
  pub const CRC15_CAN: Self = entry(15, 0x4599, 0x0000, 0x0000, false, false);

  /// `CRC-15/MPT1327`: check `0x2566`.
  pub const CRC15_MPT1327: Self = entry(15, 0x6815, 0x0000, 0x0001, false, false);

  /// `CRC-16/ARC`: check `0xBB3D`.
  pub const CRC16_ARC: Self = entry(16, 0x8005, 0x0000, 0x0000, true, true);

  /// `CRC-16/AUG-CCITT`: check `0xE5CC`.
  pub const CRC16_AUG_CCITT: Self = entry(16, 0x1021, 0x1D0F, 0x0000, false, false);

  /// `CRC-16/BUYPASS`: check `0xFEE8`.
  pub const CRC16_BUYPASS: Self = entry(16, 0x8005, 0x0000, 0x0000, false, false);

  /// `CRC-16/CCITT-FALSE`: check `0x29B1`.
  pub const CRC16_CCITT_FALSE: Self = entry(16, 0x1021, 0xFFFF, 0x0000, false, false);

  /// `CRC-16/CDMA2000`: check `0x4C06`.
  pub const CRC16_CDMA2000: Self = entry(16, 0xC867, 0xFFFF, 0x0000, false, false);

  /// `CRC-16/CMS`: check `0xAEE7`.
  pub const CRC16_CMS: Self = entry(16, 0x8005, 0xFFFF, 0x0000, false, false);

  /// `CRC-16/DDS-110`: check `0x9ECF`.
  pub const CRC16_DDS_110: Self = entry(16, 0x8005, 0x800D, 0x0000, false, false);

  /// `CRC-16/DECT-R`: check `0x007E`.
  pub const CRC16_DECT_R: Self = entry(16, 0x0589, 0x0000, 0x0001, false, false);

  /// `CRC-16/DECT-X`: check `0x007F`.
  pub const CRC16_DECT_X: Self = entry(16, 0x0589, 0x0000, 0x0000, false, false);

  /// `CRC-16/DNP`: check `0xEA82`.
  pub const CRC16_DNP: Self = entry(16, 0x3D65, 0x0000, 0xFFFF, true, true);

  /// `CRC-16/EN-13757`: check `0xC2B7`.
  pub const CRC16_EN_13757: Self = entry(16, 0x3D65, 0x0000, 0xFFFF, false, false);

  /// `CRC-16/GENIBUS`: check `0xD64E`.
  pub const CRC16_GENIBUS: Self = entry(16, 0x1021, 0xFFFF, 0xFFFF, false, false);

  /// `CRC-16/GSM`: check `0xCE3C`.
  pub const CRC16_GSM: Self = entry(16, 0x1021, 0x0000, 0xFFFF, false, false);

  /// `CRC-16/ISO-IEC-14443-3-A`: check `0xBF05`.
  pub const CRC16_ISO_IEC_14443_3_A: Self = entry(16, 0x1021, 0xC6C6, 0x0000, true, true);

  /// `CRC-16/KERMIT`: check `0x2189`.
  pub const CRC16_KERMIT: Self = entry(16, 0x1021, 0x0000, 0x0000, true, true);

  /// `CRC-16/LJ1200`: check `0xBDF4`.
  pub const CRC16_LJ1200: Self = entry(16, 0x6F63, 0x0000, 0x0000, false, false);

  /// `CRC-16/MAXIM`: check `0x44C2`.
  pub const CRC16_MAXIM: Self = entry(16, 0x8005, 0x0000, 0xFFFF, true, true);

  /// `CRC-16/MCRF4XX`: check `0x6F91`.
  pub const CRC16_MCRF4XX: Self = entry(16, 0x1021, 0xFFFF, 0x0000, true, true);

  /// `CRC-16/MODBUS`: check `0x4B37`.
  pub const CRC16_MODBUS: Self = entry(16, 0x8005, 0xFFFF, 0x0000, true, true);

  /// `CRC-16/OPENSAFETY-A`: check `0x5D38`.
  pub const CRC16_OPENSAFETY_A: Self = entry(16, 0x5935, 0x0000, 0x0000, false, false);

  /// `CRC-16/OPENSAFETY-B`: check `0x20FE`.
  pub const CRC16_OPENSAFETY_B: Self = entry(16, 0x755B, 0x0000, 0x0000, false, false);

  /// `CRC-16/PROFIBUS`: check `0xA819`.
  pub const CRC16_PROFIBUS: Self = entry(16, 0x1DCF, 0xFFFF, 0xFFFF, false, false);

  /// `CRC-16/RIELLO`: check `0x63D0`.
  pub const CRC16_RIELLO: Self = entry(16, 0x1021, 0xB2AA, 0x0000, true, true);

  /// `CRC-16/T10-DIF`: check `0xD0DB`.
  pub const CRC16_T10_DIF: Self = entry(16, 0x8BB7, 0x0000, 0x0000, false, false);

  /// `CRC-16/TELEDISK`: check `0x0FB3`.
  pub const CRC16_TELEDISK: Self = entry(16, 0xA097, 0x0000, 0x0000, false, false);

  /// `CRC-16/TMS37157`: check `0x26B1`.
  pub const CRC16_TMS37157: Self = entry(16, 0x1021, 0x89EC, 0x0000, true, true);

  /// `CRC-16/USB`: check `0xB4C8`.
  pub const CRC16_USB: Self = entry(16, 0x8005, 0xFFFF, 0xFFFF, true, true);

  /// `CRC-16/X25`: check `0x906E`.
  pub const CRC16_X25: Self = entry(16, 0x1021, 0xFFFF, 0xFFFF, true, true);

  /// `CRC-16/XMODEM`: check `0x31C3`.
  pub const CRC16_XMODEM: Self = entry(16, 0x1021, 0x0000, 0x0000, false, false);

  /// `CRC-24/BLE`: check `0xC2_5A56`.
  pub const CRC24_BLE: Self = entry(24, 0x00_065B, 0x55_5555, 0x00_0000, true, true);

  /// `CRC-24/FLEXRAY-A`: check `0x79_79BD`.
  pub const CRC24_FLEXRAY_A: Self = entry(24, 0x5D_6DCB, 0xFE_DCBA, 0x00_0000, false, false);

  /// `CRC-24/FLEXRAY-B`: check `0x1F_23B8`.
  pub const CRC24_FLEXRAY_B: Self = entry(24, 0x5D_6DCB, 0xAB_CDEF, 0x00_0000, false, false);

  /// `CRC-24/INTERLAKEN`: check `0xB4_F3E6`.
  pub const CRC24_INTERLAKEN: Self = entry(24, 0x32_8B63, 0xFF_FFFF, 0xFF_FFFF, false, false);

  /// `CRC-24/LTE-A`: check `0xCD_E703`.
  pub const CRC24_LTE_A: Self = entry(24, 0x86_4CFB, 0x00_0000, 0x00_0000, false, false);

  /// `CRC-24/LTE-B`: check `0x23_EF52`.
  pub const CRC24_LTE_B: Self = entry(24, 0x80_0063, 0x00_0000, 0x00_0000, false, false);

  /// `CRC-24/OPENPGP`: check `0x21_CF02`.
  pub const CRC24_OPENPGP: Self = entry(24, 0x86_4CFB, 0xB7_04CE, 0x00_0000, false, false);

  /// `CRC-30/CDMA`: check `0x04C3_4ABF`.
  pub const CRC30_CDMA: Self = entry(30, 0x2030_B9C7, 0x3FFF_FFFF, 0x3FFF_FFFF, false, false);

  /// `CRC-32/AIXM`: check `0x3010_BF7F`.
  pub const CRC32_AIXM: Self = entry(32, 0x8141_41AB, 0x0000_0000, 0x0000_0000, false, false);

  /// `CRC-32/AUTOSAR`: check `0x1697_D06A`.
  pub const CRC32_AUTOSAR: Self = entry(32, 0xF4AC_FB13, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// `CRC-32/BASE91-D`: check `0x8731_5576`.
  pub const CRC32_BASE91_D: Self = entry(32, 0xA833_982B, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// `CRC-32/BZIP2`: check `0xFC89_1918`.
  pub const CRC32_BZIP2: Self = entry(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, false, false);

  /// `CRC-32/CKSUM`: check `0x765E_7680`.
  pub const CRC32_CKSUM: Self = entry(32, 0x04C1_1DB7, 0x0000_0000, 0xFFFF_FFFF, false, false);

  /// `CRC-32/ISCSI`: check `0xE306_9283`.
  pub const CRC32_ISCSI: Self = entry(32, 0x1EDC_6F41, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// `CRC-32/ISO-HDLC`: check `0xCBF4_3926`.
  pub const CRC32_ISO_HDLC: Self = entry(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF, true, true);

  /// `CRC-32/JAMCRC`: check `0x340B_C6D9`.
  pub const CRC32_JAMCRC: Self = entry(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, true, true);

  /// `CRC-32/MPEG2`: check `0x0376_E6E7`.
  pub const CRC32_MPEG2: Self = entry(32, 0x04C1_1DB7, 0xFFFF_FFFF, 0x0000_0000, false, false);

  /// `CRC-32/XFER`: check `0xBD0B_E338`.
  pub const CRC32_XFER: Self = entry(32, 0x0000_00AF, 0x0000_0000, 0x0000_0000, false, false);

  /// `CRC-40/GSM`: check `0xD4_164F_C646`.
  pub const CRC40_GSM: Self = entry(40, 0x00_0482_0009, 0x00_0000_0000, 0xFF_FFFF_FFFF, false, false);

  /// `CRC-64/ECMA-182`: check `0x6C40_DF5F_0B49_7347`.
  pub const CRC64_ECMA_182: Self = entry(64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, 0x0000_0000_0000_0000, false, false);

  /// `CRC-64/GO-ISO`: check `0xB909_56C7_75A4_1001`.
  pub const CRC64_GO_ISO: Self = entry(64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, true, true);

  /// `CRC-64/WE`: check `0x62EC_59E3_F1A4_F00A`.
  pub const CRC64_WE: Self = entry(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, false, false);

  /// `CRC-64/XZ`: check `0x995D_C9BB_DF19_39FA`.
  pub const CRC64_XZ: Self = entry(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF, true, true);
}

/// A named parameter set with its published check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
  name: &'static str,
  params: CrcParams,
  check: u64,
}

impl CatalogEntry {
  const fn new(name: &'static str, params: CrcParams, check: u64) -> Self {
    Self { name, params, check }
  }

  /// Catalog name, e.g. `"CRC-32/ISO-HDLC"`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// The parameter set.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    self.params
  }

  /// CRC of `"123456789"` under these parameters.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }
}

/// Every named parameter set, ordered by width then name.
pub const ALL: &[CatalogEntry] = &[
  CatalogEntry::new("CRC-3/GSM", CrcParams::CRC3_GSM, 0x4),
  CatalogEntry::new("CRC-3/ROHC", CrcParams::CRC3_ROHC, 0x6),
  CatalogEntry::new("CRC-4/G-704", CrcParams::CRC4_G_704, 0x7),
  CatalogEntry::new("CRC-4/INTERLAKEN", CrcParams::CRC4_INTERLAKEN, 0xB),
  CatalogEntry::new("CRC-5/EPC-C1G2", CrcParams::CRC5_EPC_C1G2, 0x00),
  CatalogEntry::new("CRC-5/G-704", CrcParams::CRC5_G_704, 0x07),
  CatalogEntry::new("CRC-5/USB", CrcParams::CRC5_USB, 0x19),
  CatalogEntry::new("CRC-6/CDMA2000-A", CrcParams::CRC6_CDMA2000_A, 0x0D),
  CatalogEntry::new("CRC-6/DARC", CrcParams::CRC6_DARC, 0x26),
  CatalogEntry::new("CRC-6/G-704", CrcParams::CRC6_G_704, 0x06),
  CatalogEntry::new("CRC-6/GSM", CrcParams::CRC6_GSM, 0x13),
  CatalogEntry::new("CRC-7/MMC", CrcParams::CRC7_MMC, 0x75),
  CatalogEntry::new("CRC-7/ROHC", CrcParams::CRC7_ROHC, 0x53),
  CatalogEntry::new("CRC-8/AUTOSAR", CrcParams::CRC8_AUTOSAR, 0xDF),
  CatalogEntry::new("CRC-8/CDMA2000", CrcParams::CRC8_CDMA2000, 0xDA),
  CatalogEntry::new("CRC-8/DARC", CrcParams::CRC8_DARC, 0x15),
  CatalogEntry::new("CRC-8/DVB-S2", CrcParams::CRC8_DVB_S2, 0xBC),
  CatalogEntry::new("CRC-8/EBU", CrcParams::CRC8_EBU, 0x97),
  CatalogEntry::new("CRC-8/GSM-A", CrcParams::CRC8_GSM_A, 0x37),
  CatalogEntry::new("CRC-8/GSM-B", CrcParams::CRC8_GSM_B, 0x94),
  CatalogEntry::new("CRC-8/I-CODE", CrcParams::CRC8_I_CODE, 0x7E),
  CatalogEntry::new("CRC-8/ITU", CrcParams::CRC8_ITU, 0xA1),
  CatalogEntry::new("CRC-8/LTE", CrcParams::CRC8_LTE, 0xEA),
  CatalogEntry::new("CRC-8/MAXIM", CrcParams::CRC8_MAXIM, 0xA1),
  CatalogEntry::new("CRC-8/OPENSAFETY", CrcParams::CRC8_OPENSAFETY, 0x3E),
  CatalogEntry::new("CRC-8/ROHC", CrcParams::CRC8_ROHC, 0xD0),
  CatalogEntry::new("CRC-8/SAE-J1850", CrcParams::CRC8_SAE_J1850, 0x4B),
  CatalogEntry::new("CRC-8/SMBUS", CrcParams::CRC8_SMBUS, 0xF4),
  CatalogEntry::new("CRC-8/WCDMA", CrcParams::CRC8_WCDMA, 0x25),
  CatalogEntry::new("CRC-10/ATM", CrcParams::CRC10_ATM, 0x199),
  CatalogEntry::new("CRC-10/CDMA2000", CrcParams::CRC10_CDMA2000, 0x233),
  CatalogEntry::new("CRC-10/GSM", CrcParams::CRC10_GSM, 0x12A),
  CatalogEntry::new("CRC-12/CDMA2000", CrcParams::CRC12_CDMA2000, 0xD4D),
  CatalogEntry::new("CRC-12/DECT", CrcParams::CRC12_DECT, 0xF5B),
  CatalogEntry::new("CRC-12/GSM", CrcParams::CRC12_GSM, 0xB34),
  CatalogEntry::new("CRC-12/UMTS", CrcParams::CRC12_UMTS, 0xDAF),
  CatalogEntry::new("CRC-13/BBC", CrcParams::CRC13_BBC, 0x04FA),
  CatalogEntry::new("CRC-14/DARC", CrcParams::CRC14_DARC, 0x082D),
  CatalogEntry::new("CRC-14/GSM", CrcParams::CRC14_GSM, 0x30AE),
  CatalogEntry::new("CRC-15/CAN", CrcParams::CRC15_CAN, 0x059E),
  CatalogEntry::new("CRC-15/MPT1327", CrcParams::CRC15_MPT1327, 0x2566),
  CatalogEntry::new("CRC-16/ARC", CrcParams::CRC16_ARC, 0xBB3D),
  CatalogEntry::new("CRC-16/AUG-CCITT", CrcParams::CRC16_AUG_CCITT, 0xE5CC),
  CatalogEntry::new("CRC-16/BUYPASS", CrcParams::CRC16_BUYPASS, 0xFEE8),
  CatalogEntry::new("CRC-16/CCITT-FALSE", CrcParams::CRC16_CCITT_FALSE, 0x29B1),
  CatalogEntry::new("CRC-16/CDMA2000", CrcParams::CRC16_CDMA2000, 0x4C06),
  CatalogEntry::new("CRC-16/CMS", CrcParams::CRC16_CMS, 0xAEE7),
  CatalogEntry::new("CRC-16/DDS-110", CrcParams::CRC16_DDS_110, 0x9ECF),
  CatalogEntry::new("CRC-16/DECT-R", CrcParams::CRC16_DECT_R, 0x007E),
  CatalogEntry::new("CRC-16/DECT-X", CrcParams::CRC16_DECT_X, 0x007F),
  CatalogEntry::new("CRC-16/DNP", CrcParams::CRC16_DNP, 0xEA82),
  CatalogEntry::new("CRC-16/EN-13757", CrcParams::CRC16_EN_13757, 0xC2B7),
  CatalogEntry::new("CRC-16/GENIBUS", CrcParams::CRC16_GENIBUS, 0xD64E),
  CatalogEntry::new("CRC-16/GSM", CrcParams::CRC16_GSM, 0xCE3C),
  CatalogEntry::new("CRC-16/ISO-IEC-14443-3-A", CrcParams::CRC16_ISO_IEC_14443_3_A, 0xBF05),
  CatalogEntry::new("CRC-16/KERMIT", CrcParams::CRC16_KERMIT, 0x2189),
  CatalogEntry::new("CRC-16/LJ1200", CrcParams::CRC16_LJ1200, 0xBDF4),
  CatalogEntry::new("CRC-16/MAXIM", CrcParams::CRC16_MAXIM, 0x44C2),
  CatalogEntry::new("CRC-16/MCRF4XX", CrcParams::CRC16_MCRF4XX, 0x6F91),
  CatalogEntry::new("CRC-16/MODBUS", CrcParams::CRC16_MODBUS, 0x4B37),
  CatalogEntry::new("CRC-16/OPENSAFETY-A", CrcParams::CRC16_OPENSAFETY_A, 0x5D38),
  CatalogEntry::new("CRC-16/OPENSAFETY-B", CrcParams::CRC16_OPENSAFETY_B, 0x20FE),
  CatalogEntry::new("CRC-16/PROFIBUS", CrcParams::CRC16_PROFIBUS, 0xA819),
  CatalogEntry::new("CRC-16/RIELLO", CrcParams::CRC16_RIELLO, 0x63D0),
  CatalogEntry::new("CRC-16/T10-DIF", CrcParams::CRC16_T10_DIF, 0xD0DB),
  CatalogEntry::new("CRC-16/TELEDISK", CrcParams::CRC16_TELEDISK, 0x0FB3),
  CatalogEntry::new("CRC-16/TMS37157", CrcParams::CRC16_TMS37157, 0x26B1),
  CatalogEntry::new("CRC-16/USB", CrcParams::CRC16_USB, 0xB4C8),
  CatalogEntry::new("CRC-16/X25", CrcParams::CRC16_X25, 0x906E),
  CatalogEntry::new("CRC-16/XMODEM", CrcParams::CRC16_XMODEM, 0x31C3),
  CatalogEntry::new("CRC-24/BLE", CrcParams::CRC24_BLE, 0xC2_5A56),
  CatalogEntry::new("CRC-24/FLEXRAY-A", CrcParams::CRC24_FLEXRAY_A, 0x79_79BD),
  CatalogEntry::new("CRC-24/FLEXRAY-B", CrcParams::CRC24_FLEXRAY_B, 0x1F_23B8),
  CatalogEntry::new("CRC-24/INTERLAKEN", CrcParams::CRC24_INTERLAKEN, 0xB4_F3E6),
  CatalogEntry::new("CRC-24/LTE-A", CrcParams::CRC24_LTE_A, 0xCD_E703),
  CatalogEntry::new("CRC-24/LTE-B", CrcParams::CRC24_LTE_B, 0x23_EF52),
  CatalogEntry::new("CRC-24/OPENPGP", CrcParams::CRC24_OPENPGP, 0x21_CF02),
  CatalogEntry::new("CRC-30/CDMA", CrcParams::CRC30_CDMA, 0x04C3_4ABF),
  CatalogEntry::new("CRC-32/AIXM", CrcParams::CRC32_AIXM, 0x3010_BF7F),
  CatalogEntry::new("CRC-32/AUTOSAR", CrcParams::CRC32_AUTOSAR, 0x1697_D06A),
  CatalogEntry::new("CRC-32/BASE91-D", CrcParams::CRC32_BASE91_D, 0x8731_5576),
  CatalogEntry::new("CRC-32/BZIP2", CrcParams::CRC32_BZIP2, 0xFC89_1918),
  CatalogEntry::new("CRC-32/CKSUM", CrcParams::CRC32_CKSUM, 0x765E_7680),
  CatalogEntry::new("CRC-32/ISCSI", CrcParams::CRC32_ISCSI, 0xE306_9283),
  CatalogEntry::new("CRC-32/ISO-HDLC", CrcParams::CRC32_ISO_HDLC, 0xCBF4_3926),
  CatalogEntry::new("CRC-32/JAMCRC", CrcParams::CRC32_JAMCRC, 0x340B_C6D9),
  CatalogEntry::new("CRC-32/MPEG2", CrcParams::CRC32_MPEG2, 0x0376_E6E7),
  CatalogEntry::new("CRC-32/XFER", CrcParams::CRC32_XFER, 0xBD0B_E338),
  CatalogEntry::new("CRC-40/GSM", CrcParams::CRC40_GSM, 0xD4_164F_C646),
  CatalogEntry::new("CRC-64/ECMA-182", CrcParams::CRC64_ECMA_182, 0x6C40_DF5F_0B49_7347),
  CatalogEntry::new("CRC-64/GO-ISO", CrcParams::CRC64_GO_ISO, 0xB909_56C7_75A4_1001),
  CatalogEntry::new("CRC-64/WE", CrcParams::CRC64_WE, 0x62EC_59E3_F1A4_F00A),
  CatalogEntry::new("CRC-64/XZ", CrcParams::CRC64_XZ, 0x995D_C9BB_DF19_39FA),
];

/// Look up a catalog entry by name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
  ALL.iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_are_unique() {
    for (i, a) in ALL.iter().enumerate() {
      for b in ALL.iter().skip(i + 1) {
        assert!(!a.name.eq_ignore_ascii_case(b.name), "duplicate entry {}", a.name);
      }
    }
  }

  #[test]
  fn ordered_by_width() {
    assert!(ALL.windows(2).all(|w| w[0].params.width() <= w[1].params.width()));
  }

  #[test]
  fn find_is_case_insensitive() {
    assert_eq!(find("CRC-32/ISO-HDLC").map(CatalogEntry::params), Some(CrcParams::CRC32_ISO_HDLC));
    assert_eq!(find("crc-12/umts").map(CatalogEntry::check), Some(0xDAF));
    assert!(find("CRC-32/NOPE").is_none());
  }

  #[test]
  fn check_values_fit_width() {
    for entry in ALL {
      assert!(entry.check <= entry.params.mask(), "{}", entry.name);
    }
  }
}
