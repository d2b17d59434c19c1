//! Characters allowed in a header field name.
//!
//! The set is the decimal code points
//! `{33, 34-39, 42, 43, 45, 46, 48-57, 65-90, 93-122, 124, 126}`.
//! It excludes `:`, whitespace, control bytes and the separators
//! `( ) < > @ , ; [ \ ? = { }`. Every byte outside of ASCII is rejected.

static TOKEN_TABLE: [bool; 256] = build_table();

const fn build_table() -> [bool; 256] {
    const RANGES: [(u8, u8); 9] = [
        (33, 33),
        (34, 39),
        (42, 43),
        (45, 46),
        (48, 57),
        (65, 90),
        (93, 122),
        (124, 124),
        (126, 126),
    ];

    let mut table = [false; 256];
    let mut i = 0;
    while i < RANGES.len() {
        let (lo, hi) = RANGES[i];
        let mut b = lo as usize;
        while b <= hi as usize {
            table[b] = true;
            b += 1;
        }
        i += 1;
    }
    table
}

pub fn is_token_byte(b: u8) -> bool {
    TOKEN_TABLE[b as usize]
}

/// Returns `true` if `name` is non-empty and made only of token bytes.
pub fn is_token(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_token_byte)
}
