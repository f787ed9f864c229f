//! Belgian personal numbers.
//!
//! The national number (Rijksregisternummer, [`nn`]) and the BIS number
//! ([`bis`]) share one layout: `YYMMDD` birth date, a three-digit serial and
//! two check digits. BIS numbers add 20 or 40 to the month. The social
//! security number ([`ssn`]) is whichever of the two applies.

pub mod bis;
pub mod nn;
pub mod ssn;

pub use bis::Bis;
pub use nn::Nn;

use chrono::{Datelike, NaiveDate, Utc};

use crate::core::{ValidationError, clean, is_digits};

/// Strip spaces, dashes and dots.
pub(crate) fn compact(raw: &str) -> String {
    clean(raw, " -.").trim().to_string()
}

/// `YY.MM.DD-SSS.CC`
pub(crate) fn format(raw: &str) -> String {
    let number = compact(raw);
    if number.len() != 11 || !number.is_ascii() {
        return number;
    }
    format!(
        "{}.{}.{}-{}.{}",
        &number[..2],
        &number[2..4],
        &number[4..6],
        &number[6..9],
        &number[9..]
    )
}

/// Format and length checks shared by NN and BIS.
pub(crate) fn check_structure(number: &str) -> Result<(), ValidationError> {
    if !is_digits(number) || number.bytes().all(|b| b == b'0') {
        return Err(ValidationError::format("number must be digits and not all zeros"));
    }
    if number.len() != 11 {
        return Err(ValidationError::length(format!(
            "number must be 11 digits, got {}",
            number.len()
        )));
    }
    Ok(())
}

/// Two-digit field at `at`; callers have checked the structure.
pub(crate) fn field(number: &str, at: usize) -> u32 {
    number[at..at + 2].parse().unwrap_or(0)
}

/// Day range check; 0 stands for an unknown day.
pub(crate) fn check_day(number: &str) -> Result<u32, ValidationError> {
    let day = field(number, 4);
    if day > 31 {
        return Err(ValidationError::component(format!("day {day} out of range")));
    }
    Ok(day)
}

/// Birth century implied by the check digits, if any.
///
/// People born from 2000 on have a `2` prefixed to the first nine digits
/// before taking the remainder; that variant is only considered when the
/// resulting year is not in the future.
pub(crate) fn century(number: &str) -> Option<i32> {
    let base: u64 = number[..9].parse().ok()?;
    let check: u64 = number[9..].parse().ok()?;
    if 97 - base % 97 == check {
        return Some(1900);
    }
    let year = 2000 + field(number, 0) as i32;
    if year <= Utc::now().year() && 97 - (2_000_000_000 + base) % 97 == check {
        return Some(2000);
    }
    None
}

/// Checksum step shared by NN and BIS: returns the century or a checksum
/// error.
pub(crate) fn check_century(number: &str) -> Result<i32, ValidationError> {
    century(number).ok_or_else(|| {
        ValidationError::checksum("check digits match neither the 1900s nor the 2000s")
    })
}

/// A fully known birth date must exist in the decoded century.
pub(crate) fn check_date(
    century: i32,
    number: &str,
    month: u32,
    day: u32,
) -> Result<(), ValidationError> {
    if month == 0 || day == 0 {
        return Ok(());
    }
    let year = century + field(number, 0) as i32;
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ValidationError::component(format!(
            "{year:04}-{month:02}-{day:02} is not a date"
        )));
    }
    Ok(())
}
