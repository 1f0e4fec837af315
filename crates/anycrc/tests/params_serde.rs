//! Serialization of parameter sets (requires the `serde` feature).

#![cfg(feature = "serde")]

use anycrc::CrcParams;

#[test]
fn serializes_all_fields() {
  let json = serde_json::to_value(CrcParams::CRC12_UMTS).expect("serialize");
  assert_eq!(
    json,
    serde_json::json!({
      "width": 12,
      "polynomial": 0x80F,
      "initial": 0,
      "xor_out": 0,
      "reflect_in": false,
      "reflect_out": true,
    })
  );
}

#[test]
fn deserializes_valid_params() {
  let json = r#"{"width":16,"polynomial":4129,"initial":65535,"xor_out":0,"reflect_in":false,"reflect_out":false}"#;
  let params: CrcParams = serde_json::from_str(json).expect("deserialize");
  assert_eq!(params, CrcParams::CRC16_CCITT_FALSE);
}

#[test]
fn deserialization_validates() {
  let json = r#"{"width":8,"polynomial":263,"initial":0,"xor_out":0,"reflect_in":false,"reflect_out":false}"#;
  let err = serde_json::from_str::<CrcParams>(json).unwrap_err();
  assert!(err.to_string().contains("polynomial 0x107 exceeds 8 bits"), "{err}");

  let json = r#"{"width":65,"polynomial":1,"initial":0,"xor_out":0,"reflect_in":false,"reflect_out":false}"#;
  assert!(serde_json::from_str::<CrcParams>(json).is_err());
}
