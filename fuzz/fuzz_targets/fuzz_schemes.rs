#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::NumberScheme;
use pruefziffer::schemes::{Aadhaar, Iban, Imei, be};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let schemes: [&dyn NumberScheme; 6] =
            [&Iban, &Imei, &Aadhaar, &be::Nn, &be::Bis, &be::ssn::SSN];
        for scheme in schemes {
            // A valid number must survive format → validate unchanged.
            if let Ok(compact) = scheme.validate(s) {
                assert_eq!(scheme.validate(&scheme.format(s)).ok(), Some(compact));
            }
        }
    }
});
