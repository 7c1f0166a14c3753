/// Returns the width in bytes of the UTF-8 character starting with the given leading byte.
///
/// Continuation bytes are reported as width 1 so that callers scanning byte by byte always advance.
#[inline]
pub(crate) const fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Returns the smallest character boundary of `text` that is greater than or equal to `offset`.
#[inline]
pub(crate) fn ceil_char_boundary(text: &str, mut offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

/// Returns the largest character boundary of `text` that is less than or equal to `offset`.
#[inline]
pub(crate) fn floor_char_boundary(text: &str, mut offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Returns the offset of the character boundary following the one at `offset`.
#[inline]
pub(crate) fn next_char_boundary(text: &str, offset: usize) -> usize {
    match text.as_bytes().get(offset) {
        Some(&b) => offset + utf8_char_width(b),
        None => text.len(),
    }
}
