#![cfg(feature = "iso7064")]

use pruefziffer::checksum::{CheckAlgorithm, Damm, Luhn, Verhoeff, damm, luhn, verhoeff};
use pruefziffer::iso7064::{
    Mod11_2, Mod11_10, Mod37_2, Mod37_36, Mod97_10, mod_11_2, mod_11_10, mod_37_36, mod_97_10,
};
use pruefziffer::{Alphabet, DECIMAL, ErrorKind};

// ---------------------------------------------------------------------------
// Reference vectors
// ---------------------------------------------------------------------------

#[test]
fn luhn_vectors() {
    assert_eq!(luhn::checksum("7894").unwrap(), 6);
    assert_eq!(luhn::calc_check_digit("7894").unwrap(), '9');
    assert!(luhn::is_valid("78949"));
}

#[test]
fn verhoeff_vectors() {
    assert!(!verhoeff::is_valid("1234"));
    assert_eq!(verhoeff::checksum("1234").unwrap(), 1);
    assert_eq!(verhoeff::calc_check_digit("1234").unwrap(), '0');
    assert!(verhoeff::is_valid("12340"));
}

#[test]
fn damm_vectors() {
    assert_ne!(damm::checksum("572").unwrap(), 0);
    assert_eq!(damm::calc_check_digit("572").unwrap(), '4');
    assert!(damm::is_valid("5724"));
}

#[test]
fn mod_11_10_vectors() {
    assert_eq!(mod_11_10::calc_check_digit("79462").unwrap(), '3');
    assert!(mod_11_10::is_valid("794623"));
}

#[test]
fn mod_97_10_vectors() {
    assert_eq!(
        mod_97_10::calc_check_digits("9999123456789012141400").unwrap(),
        "90"
    );
    assert!(mod_97_10::is_valid("9999123456789012141490"));
}

#[test]
fn mod_11_2_vectors() {
    assert_eq!(mod_11_2::calc_check_digit("079").unwrap(), 'X');
    assert!(mod_11_2::is_valid("079X"));
}

#[test]
fn mod_37_36_vectors() {
    assert_eq!(mod_37_36::calc_check_digit("A12425GABC1234002").unwrap(), 'M');
}

// ---------------------------------------------------------------------------
// Uniform trait behaviour
// ---------------------------------------------------------------------------

fn all_engines() -> Vec<Box<dyn CheckAlgorithm>> {
    vec![
        Box::new(Luhn::default()),
        Box::new(Verhoeff),
        Box::new(Damm::default()),
        Box::new(Mod11_10),
        Box::new(Mod11_2),
        Box::new(Mod37_2::default()),
        Box::new(Mod37_36::default()),
        Box::new(Mod97_10),
    ]
}

#[test]
fn every_engine_rejects_empty_as_format() {
    for engine in all_engines() {
        let err = engine.validate("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{}", engine.name());
        assert!(!engine.is_valid(""));
    }
}

#[test]
fn every_engine_rejects_foreign_symbols_as_format() {
    for engine in all_engines() {
        let err = engine.validate("12#45").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{}", engine.name());
    }
}

#[test]
fn every_engine_round_trips() {
    for engine in all_engines() {
        let digits = engine.calc_check_digits("20240615").unwrap();
        let full = format!("20240615{digits}");
        assert!(engine.is_valid(&full), "{} rejected {full}", engine.name());
        assert_eq!(
            engine.checksum(&full).unwrap(),
            engine.valid_checksum(),
            "{}",
            engine.name()
        );
    }
}

#[test]
fn targets() {
    let zero = ["luhn", "verhoeff", "damm"];
    for engine in all_engines() {
        let expected = if zero.contains(&engine.name()) { 0 } else { 1 };
        assert_eq!(engine.valid_checksum(), expected, "{}", engine.name());
    }
}

#[test]
fn hybrid_over_decimal_equals_mod_11_10() {
    let generic = Mod37_36::new(DECIMAL);
    for n in ["0", "79462", "00200667308", "99999999999999999999"] {
        assert_eq!(generic.checksum(n).unwrap(), Mod11_10.checksum(n).unwrap());
        assert_eq!(
            generic.calc_check_digit(n).unwrap(),
            Mod11_10.calc_check_digit(n).unwrap()
        );
    }
}

#[test]
fn pure_over_decimal_x_equals_mod_11_2() {
    let generic = Mod37_2::new(Alphabet::new("0123456789X").unwrap());
    for n in ["0794", "079", "123456789"] {
        assert_eq!(
            generic.calc_check_digit(n).unwrap(),
            Mod11_2.calc_check_digit(n).unwrap()
        );
    }
}

#[test]
fn luhn_mod_n_uses_alphabet_size() {
    let hex = Alphabet::new("0123456789abcdef").unwrap();
    assert_eq!(Luhn::new(hex).checksum("1234").unwrap(), 14);
    assert_eq!(Luhn::default().checksum("1234").unwrap(), 4);
}

#[test]
fn engines_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let n = format!("{i}7894");
                let d = luhn::calc_check_digit(&n).unwrap();
                luhn::is_valid(&format!("{n}{d}"))
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
