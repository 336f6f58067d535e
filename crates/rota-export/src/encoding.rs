//! Single-byte text encoding for the table font.
//!
//! The document uses built-in Helvetica with `WinAnsiEncoding` as the base
//! and a `/Differences` array re-mapping the six Latin-5 Turkish positions,
//! i.e. the Windows-1254 layout. One byte per character; characters the
//! encoding cannot represent become `?`.

const REPLACEMENT: u8 = b'?';

/// The re-mapped positions, as (code, glyph name) pairs for the font's
/// `/Differences` array.
pub const TURKISH_DIFFERENCES: [(u8, &str); 6] = [
    (0xD0, "Gbreve"),
    (0xDD, "Idotaccent"),
    (0xDE, "Scedilla"),
    (0xF0, "gbreve"),
    (0xFD, "dotlessi"),
    (0xFE, "scedilla"),
];

/// Encode `text` for the table font.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

pub fn encode_char(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7e}' => c as u8,
        'Ğ' => 0xD0,
        'İ' => 0xDD,
        'Ş' => 0xDE,
        'ğ' => 0xF0,
        'ı' => 0xFD,
        'ş' => 0xFE,
        // The WinAnsi typographic slots that show up in pasted sheet text.
        '\u{20ac}' => 0x80,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        // Latin-1 passes through, except the six re-mapped positions above.
        '\u{a0}'..='\u{ff}' => match c as u32 {
            0xD0 | 0xDD | 0xDE | 0xF0 | 0xFD | 0xFE => REPLACEMENT,
            b => b as u8,
        },
        _ => REPLACEMENT,
    }
}
