//! Input cleaning shared by all `compact` implementations.

/// Replace Unicode look-alikes with their ASCII counterpart, then drop every
/// character contained in `deletechars`.
///
/// Dashes and hyphens become `-`, fancy spaces become ` `, fullwidth and
/// mathematical digits become `0`-`9`, and so on. Deletion happens after
/// folding, so `clean("12–34", "-")` yields `"1234"`.
pub fn clean(raw: &str, deletechars: &str) -> String {
    raw.chars()
        .map(fold)
        .filter(|c| !deletechars.contains(*c))
        .collect()
}

/// Whether `number` is non-empty and made of ASCII digits only.
///
/// Unlike [`char::is_numeric`], other Unicode digits are rejected.
pub fn is_digits(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

fn fold(c: char) -> char {
    match c {
        '\u{058A}' | '\u{05BE}' | '\u{2010}'..='\u{2015}' | '\u{FE63}' | '\u{FF0D}'
        | '\u{180A}' | '\u{203E}' | '\u{2043}' | '\u{00AF}' | '\u{02D7}' | '\u{FFE3}'
        | '\u{1680}' | '\u{207B}' | '\u{208B}' | '\u{2212}' | '\u{23AF}'
        | '\u{23BA}'..='\u{23BD}' | '\u{23E4}' => '-',

        '\u{066D}' | '\u{070D}' | '\u{2055}' | '\u{A60E}' | '\u{FE61}' | '\u{FF0A}'
        | '\u{2217}' | '\u{22C6}' | '\u{2731}'..='\u{2733}' | '\u{204E}'
        | '\u{273A}'..='\u{273D}' | '\u{274A}' | '\u{274B}' => '*',

        '\u{060C}' | '\u{201A}' | '\u{3001}' | '\u{066B}' | '\u{066C}' | '\u{2032}'
        | '\u{2E34}' | '\u{FE10}' | '\u{FE50}' | '\u{FE51}' | '\u{FF0C}' | '\u{00B8}' => ',',

        '\u{00B7}' | '\u{0387}' | '\u{06D4}' | '\u{3002}' | '\u{2022}' | '\u{2024}'
        | '\u{2027}' | '\u{2E31}' | '\u{30FB}' | '\u{FE52}' | '\u{FF0E}' | '\u{FF65}'
        | '\u{2219}' | '\u{22C5}' | '\u{02D9}' | '\u{0701}' | '\u{0702}' | '\u{0830}'
        | '\u{0F0B}' | '\u{0F0C}' | '\u{16EB}' | '\u{2E33}' | '\u{FBB2}' | '\u{FBB3}'
        | '\u{10101}' | '\u{1091F}' | '\u{10A50}' => '.',

        '\u{083C}' | '\u{2044}' | '\u{2215}' | '\u{FF0F}' | '\u{29F8}' | '\u{27CB}' => '/',

        '\u{1361}' | '\u{16EC}' | '\u{1804}' | '\u{FE13}' | '\u{FF1A}' | '\u{FE30}'
        | '\u{FE55}' => ':',

        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => ' ',

        '\u{0060}' | '\u{00B4}' | '\u{02B9}' | '\u{02BB}' | '\u{02BC}' | '\u{02BE}'
        | '\u{02BF}' | '\u{02C8}' | '\u{0300}' | '\u{0301}' | '\u{0312}' | '\u{0313}'
        | '\u{055A}' | '\u{2018}' | '\u{2019}' | '\u{201B}' => '\'',

        // Fullwidth digits
        '\u{FF10}'..='\u{FF19}' => digit(c as u32 - 0xFF10),
        // Mathematical bold, double-struck, sans-serif, sans-serif bold, monospace
        '\u{1D7CE}'..='\u{1D7FF}' => digit((c as u32 - 0x1D7CE) % 10),

        _ => c,
    }
}

fn digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}
