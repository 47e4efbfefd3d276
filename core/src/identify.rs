//! Content addressing for key records
//!
//! A record's identifier is the lowercase hex SHA-1 of its public key. It is
//! a state-reconciliation handle, not an integrity check.

use sha1::{Digest, Sha1};

/// Compute the content address of `data`.
///
/// Empty input yields an empty identifier. Otherwise the input is trimmed of
/// surrounding whitespace (as if it were text) and hashed, giving 40 lowercase
/// hex characters.
pub fn identify(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let digest = Sha1::digest(trim_whitespace(data));
    hex::encode(digest)
}

/// Strip Unicode whitespace from both ends of a byte string.
///
/// Matches Go's rune-wise `strings.TrimSpace` over arbitrary bytes, so ids
/// agree with state written by the Go provider. `<[u8]>::trim_ascii` is not
/// enough: it skips `\x0b` and non-ASCII spaces. Only well-formed UTF-8
/// sequences count as characters; a stray byte that does not decode is never
/// trimmed.
fn trim_whitespace(data: &[u8]) -> &[u8] {
    let mut start = 0;
    let mut end = data.len();

    while start < end {
        match leading_char(&data[start..end]) {
            Some((c, len)) if c.is_whitespace() => start += len,
            _ => break,
        }
    }

    while end > start {
        match trailing_char(&data[start..end]) {
            Some((c, len)) if c.is_whitespace() => end -= len,
            _ => break,
        }
    }

    &data[start..end]
}

fn leading_char(bytes: &[u8]) -> Option<(char, usize)> {
    (1..=bytes.len().min(4)).find_map(|n| single_char(&bytes[..n]).map(|c| (c, n)))
}

fn trailing_char(bytes: &[u8]) -> Option<(char, usize)> {
    let len = bytes.len();
    (1..=len.min(4)).find_map(|n| single_char(&bytes[len - n..]).map(|c| (c, n)))
}

fn single_char(bytes: &[u8]) -> Option<char> {
    let s = std::str::from_utf8(bytes).ok()?;
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
