#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::checksum::{damm, luhn, verhoeff};
use pruefziffer::iso7064::{mod_11_2, mod_11_10, mod_37_2, mod_37_36, mod_97_10};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = luhn::validate(s);
        let _ = verhoeff::validate(s);
        let _ = damm::validate(s);
        let _ = mod_11_10::validate(s);
        let _ = mod_11_2::validate(s);
        let _ = mod_37_2::validate(s);
        let _ = mod_37_36::validate(s);
        let _ = mod_97_10::validate(s);
        let _ = mod_97_10::calc_check_digits(s);
    }
});
