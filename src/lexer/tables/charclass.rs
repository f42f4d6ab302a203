// src/lexer/tables/charclass.rs
// Byte classes used by the rule file. Everything is decided over the 256
// single-byte code values, with byte b standing for code point U+00bb.

/// Bytes expanded by the `sep` rule token. `/` is listed twice; the second
/// entry never wins because of first-definition-wins.
pub const SEPARATORS: [u8; 26] = [
    b'(', b')', b'{', b'}', b'[', b']', b';', b',', b'.', b' ', b'/', b'=', b'>', b'<', b'!', b'~',
    b'?', b':', b'&', b'|', b'+', b'-', b'*', b'/', b'^', b'%',
];

/// Named single-byte tokens accepted both as a rule symbol and as the
/// excluded symbol of a `no` rule.
pub fn named_byte(name: &str) -> Option<u8> {
    Some(match name {
        "LF" => 10,
        "FF" => 12,
        "CR" => 13,
        "space" => 32,
        "HT" => 9,
        "VT" => 11,
        "BS" => 8,
        _ => return None,
    })
}

/// Java identifier-start rule restricted to U+0000..=U+00FF: ASCII letters,
/// `$`, `_`, the currency signs and the Latin-1 letters.
#[inline]
pub fn is_java_letter(b: u8) -> bool {
    matches!(
        b,
        b'a'..=b'z'
            | b'A'..=b'Z'
            | b'$'
            | b'_'
            | 0xA2..=0xA5
            | 0xAA
            | 0xB5
            | 0xBA
            | 0xC0..=0xD6
            | 0xD8..=0xF6
            | 0xF8..=0xFF
    )
}

/// Java identifier-part rule restricted to U+0000..=U+00FF. Besides letters
/// and digits this admits the identifier-ignorable controls and the soft
/// hyphen.
#[inline]
pub fn is_java_letter_or_digit(b: u8) -> bool {
    is_java_letter(b)
        || b.is_ascii_digit()
        || matches!(b, 0x00..=0x08 | 0x0E..=0x1B | 0x7F..=0x9F | 0xAD)
}

/// Bytes that continue an identifier but cannot start one (`JD`).
#[inline]
pub fn is_java_digit_like(b: u8) -> bool {
    is_java_letter_or_digit(b) && !is_java_letter(b)
}
