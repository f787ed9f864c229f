#![no_main]

use libfuzzer_sys::fuzz_target;
use pruefziffer::checksum::CheckAlgorithm;
use pruefziffer::iso7064::{Mod37_2, Mod37_36, Mod97_10};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if s.is_empty() {
            return;
        }
        let engines: [&dyn CheckAlgorithm; 3] =
            [&Mod37_2::default(), &Mod37_36::default(), &Mod97_10];
        for engine in engines {
            // Whatever gets check digits appended must then validate.
            if let Ok(digits) = engine.calc_check_digits(s) {
                assert!(engine.is_valid(&format!("{s}{digits}")), "{}", engine.name());
            }
        }
    }
});
