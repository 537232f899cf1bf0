use thiserror::Error;

/// A deterministic string hash producing a 32-bit seed.
pub trait StringHash {
    /// Hashes `input`, or returns `None` when no digest is defined for it
    /// (for example, the empty string).
    fn hash32(&self, input: &str) -> Option<u32>;
}

/// Errors that can occur when parsing a hexadecimal digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// The digest contains no digits.
    #[error("digest is empty")]
    Empty,
    /// The digest has more than eight hex digits and does not fit in 32 bits.
    #[error("digest has {len} hex digits, at most 8 fit in 32 bits")]
    TooLong { len: usize },
    /// The digest contains a character that is not a hex digit.
    #[error("invalid hex digit {digit:?} in digest")]
    InvalidDigit { digit: char },
}

/// Paul Hsieh's SuperFastHash over the UTF-8 bytes of a string.
///
/// All arithmetic wraps at 32 bits. The empty string has no digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SuperFastHash;

impl SuperFastHash {
    /// Hashes raw bytes. Returns `None` for empty input.
    pub fn hash_bytes(bytes: &[u8]) -> Option<u32> {
        if bytes.is_empty() {
            return None;
        }

        let mut hash = bytes.len() as u32;
        let mut chunks = bytes.chunks_exact(4);

        for chunk in &mut chunks {
            hash = hash.wrapping_add(le16(chunk[0], chunk[1]));
            let tmp = (le16(chunk[2], chunk[3]) << 11) ^ hash;
            hash = (hash << 16) ^ tmp;
            hash = hash.wrapping_add(hash >> 11);
        }

        match *chunks.remainder() {
            [b0, b1, b2] => {
                hash = hash.wrapping_add(le16(b0, b1));
                hash ^= hash << 16;
                hash ^= (b2 as u32) << 18;
                hash = hash.wrapping_add(hash >> 11);
            }
            [b0, b1] => {
                hash = hash.wrapping_add(le16(b0, b1));
                hash ^= hash << 11;
                hash = hash.wrapping_add(hash >> 17);
            }
            [b0] => {
                hash = hash.wrapping_add(b0 as u32);
                hash ^= hash << 10;
                hash = hash.wrapping_add(hash >> 1);
            }
            _ => {}
        }

        // Final avalanche
        hash ^= hash << 3;
        hash = hash.wrapping_add(hash >> 5);
        hash ^= hash << 4;
        hash = hash.wrapping_add(hash >> 17);
        hash ^= hash << 25;
        hash = hash.wrapping_add(hash >> 6);

        Some(hash)
    }

    /// Returns the digest of `input` as eight lowercase hex digits.
    pub fn hex_digest(input: &str) -> Option<String> {
        Self::hash_bytes(input.as_bytes()).map(|h| format!("{:08x}", h))
    }
}

impl StringHash for SuperFastHash {
    fn hash32(&self, input: &str) -> Option<u32> {
        Self::hash_bytes(input.as_bytes())
    }
}

#[inline(always)]
fn le16(lo: u8, hi: u8) -> u32 {
    ((hi as u32) << 8) | lo as u32
}

/// Parses a hexadecimal digest of one to eight digits into its value.
///
/// Both cases are accepted. Signs, prefixes and whitespace are not.
pub fn parse_digest(hex: &str) -> Result<u32, DigestError> {
    if hex.is_empty() {
        return Err(DigestError::Empty);
    }

    if let Some(digit) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DigestError::InvalidDigit { digit });
    }

    if hex.len() > 8 {
        return Err(DigestError::TooLong { len: hex.len() });
    }

    u32::from_str_radix(hex, 16).map_err(|_| DigestError::TooLong { len: hex.len() })
}
