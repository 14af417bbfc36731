//! Source reference (UUIDv4) validation and generation

use rand::RngCore;
use uuid::Uuid;

/// Check a string against the canonical UUIDv4 grammar.
///
/// Case-insensitive 8-4-4-4-12 hex grouping with the version nibble fixed
/// to `4` and the variant nibble constrained to `8`, `9`, `a` or `b`.
/// Stricter than [`Uuid::parse_str`], which also accepts non-hyphenated
/// and braced forms the provider rejects.
pub fn is_valid_reference(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        14 => b == b'4',
        19 => matches!(b.to_ascii_lowercase(), b'8' | b'9' | b'a' | b'b'),
        _ => b.is_ascii_hexdigit(),
    })
}

/// Generate a fresh UUIDv4 reference from the OS random source
pub fn generate_reference() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a UUIDv4 reference from an injected random source.
///
/// Lets tests drive generation with a seeded RNG; the version and variant
/// bits are forced regardless of the source.
pub fn generate_reference_with<R: RngCore>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}
