//! Deterministic data fixtures.

/// Bytes `i % 255` for `i` in `[0, len)`.
///
/// The modulus is deliberately not 256 so the pattern drifts relative to
/// power-of-two chunk boundaries and a chunk mapped to the wrong logical
/// offset shows up as a mismatch.
pub fn byte_pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 255) as u8).collect()
}

/// Two-field record for exercising non-byte element types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub field1: i32,
    pub field2: i32,
}

/// `n` records with `field1 = i` and `field2 = -i`.
pub fn records(n: usize) -> Vec<Record> {
    (0..n as i32)
        .map(|i| Record {
            field1: i,
            field2: -i,
        })
        .collect()
}
