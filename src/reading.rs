/// Map fullwidth digits and Latin letters to their ASCII forms.
///
/// Every other character, including fullwidth punctuation, is left as is.
pub fn normalize_reading(reading: &str) -> String {
    reading.chars().map(to_halfwidth).collect()
}

fn to_halfwidth(c: char) -> char {
    match c {
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => {
            // The fullwidth forms sit at a fixed offset from ASCII.
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Whether `text` is a non-empty run of hiragana.
///
/// Accepts the Hiragana block (U+3040..=U+309F), U+30A0 and the prolonged
/// sound mark `ー` (U+30FC).
pub fn is_hiragana(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_reading_char)
}

fn is_reading_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}' | '\u{30FC}')
}
