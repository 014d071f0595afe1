//! Deterministic short code generation.
//!
//! A short code is a pure function of the long URL: the MD5 digest of the
//! URL bytes is interpreted as a 128-bit unsigned integer, encoded in
//! base62, and truncated from the most-significant end.

use md5::{Digest, Md5};

/// Default number of characters in a generated short code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Base62 symbol table: digits, then uppercase, then lowercase.
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Maximum length of a base62-encoded 128-bit integer.
///
/// `ceil(128 / log2(62))` = 22, so requesting more characters than this
/// cannot yield additional entropy.
pub const MAX_CODE_LENGTH: usize = 22;

/// Derives a short code from a long URL.
///
/// The same input always produces the same output. No URL validation is
/// performed; empty or malformed strings are hashed as-is.
///
/// Truncation to `length` characters means distinct URLs can map to the
/// same code (birthday bound on a 62^length space). Collision resolution
/// is the caller's concern: the store keeps whichever mapping was
/// inserted first.
pub fn shorten(long_url: &str, length: usize) -> String {
    let digest = Md5::digest(long_url.as_bytes());
    let value = u128::from_be_bytes(digest.into());

    encode_base62(value).chars().take(length).collect()
}

/// Encodes an unsigned 128-bit integer in base62, most significant digit
/// first.
fn encode_base62(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}
