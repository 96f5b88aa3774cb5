//! Roman numeral conversion for section ordinals.
//!
//! `encode` handles the full subtractive notation, while `decode` only knows
//! the fixed table I..XV. Anything outside the table decodes to
//! [`SENTINEL_ORDINAL`] so malformed or large prefixes sort last instead of
//! failing. Ordinals above 15 do not survive a trip through title text.

/// Out-of-band ordinal for unparseable or out-of-table numerals.
pub const SENTINEL_ORDINAL: u32 = 999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const DECODE_TABLE: [&str; 15] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
];

/// Encodes `n` in standard subtractive notation. `encode(0)` is empty.
pub fn encode(n: u32) -> String {
    let mut remaining = n;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while remaining >= value {
            out.push_str(numeral);
            remaining -= value;
        }
    }
    out
}

/// Decodes a numeral from the I..XV table, or returns [`SENTINEL_ORDINAL`].
pub fn decode(numeral: &str) -> u32 {
    let numeral = numeral.trim();
    DECODE_TABLE
        .iter()
        .position(|candidate| *candidate == numeral)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(SENTINEL_ORDINAL)
}
