//! Error messages and their serialized form.

#![cfg(feature = "schemes")]

use insta::assert_snapshot;
use pruefziffer::checksum::{luhn, verhoeff};
use pruefziffer::iso7064::mod_97_10;
use pruefziffer::schemes::{aadhaar, be, iban, imei};
use pruefziffer::{Alphabet, AlphabetError, ErrorKind, ValidationError};

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn engine_messages() {
    assert_snapshot!(
        luhn::validate("7894").unwrap_err().to_string(),
        @"invalid checksum: luhn checksum is 6, expected 0"
    );
    assert_snapshot!(
        verhoeff::validate("12a4").unwrap_err().to_string(),
        @r#"invalid format: 'a' is not one of "0123456789""#
    );
    assert_snapshot!(
        luhn::validate("").unwrap_err().to_string(),
        @"invalid format: empty number"
    );
    assert_snapshot!(
        mod_97_10::validate("99991234567890121414AB").unwrap_err().to_string(),
        @"invalid format: check digits must be numeric"
    );
}

#[test]
fn scheme_messages() {
    assert_snapshot!(
        iban::validate("DE89370400440532013001").unwrap_err().to_string(),
        @"invalid checksum: check digits are 89, expected 62"
    );
    assert_snapshot!(
        imei::validate("4901542032375").unwrap_err().to_string(),
        @"invalid length: IMEI must be 14, 15 or 16 digits, got 13"
    );
    assert_snapshot!(
        aadhaar::validate("134567890124").unwrap_err().to_string(),
        @"invalid format: Aadhaar cannot start with 0 or 1"
    );
    assert_snapshot!(
        be::nn::validate("01022900137").unwrap_err().to_string(),
        @"invalid component: 1901-02-29 is not a date"
    );
    assert_snapshot!(
        be::ssn::validate("12345678901").unwrap_err().to_string(),
        @"invalid component: month 34 must be in 20..32 or 40..52 for a BIS number"
    );
}

#[test]
fn alphabet_messages() {
    assert_snapshot!(Alphabet::new("0").unwrap_err().to_string(), @"alphabet needs at least 2 symbols");
    assert_eq!(Alphabet::new("0120").unwrap_err(), AlphabetError::Duplicate('0'));
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn serializes_as_tagged_object() {
    let err = luhn::validate("7894").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "invalid_checksum",
            "reason": "luhn checksum is 6, expected 0",
        })
    );
}

#[test]
fn deserializes_back() {
    let json = r#"{"kind":"invalid_length","reason":"too short"}"#;
    let err: ValidationError = serde_json::from_str(json).unwrap();
    assert_eq!(err, ValidationError::length("too short"));
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
    assert_eq!(err.reason(), "too short");
}

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::InvalidComponent).unwrap(),
        r#""invalid_component""#
    );
}

#[test]
fn kinds_are_ordered_by_specificity() {
    let mut kinds = vec![
        ErrorKind::InvalidChecksum,
        ErrorKind::InvalidFormat,
        ErrorKind::InvalidComponent,
        ErrorKind::InvalidLength,
    ];
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::InvalidFormat,
            ErrorKind::InvalidLength,
            ErrorKind::InvalidComponent,
            ErrorKind::InvalidChecksum,
        ]
    );
}
