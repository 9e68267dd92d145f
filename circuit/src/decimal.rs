//! Per-byte decimal encoding.
//!
//! The byte-oriented circuit takes every input byte as its own field element,
//! written as a base-10 string.

/// Maps every byte to its decimal string, preserving order and length.
///
/// ```
/// use circuit::to_decimal_strings;
///
/// assert_eq!(to_decimal_strings(&[0, 7, 255]), vec!["0", "7", "255"]);
/// ```
pub fn to_decimal_strings(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(u8::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_byte_value() {
        let bytes: Vec<u8> = (0..=255).collect();
        let strings = to_decimal_strings(&bytes);
        assert_eq!(strings.len(), 256);
        for (b, s) in bytes.iter().zip(&strings) {
            assert_eq!(s.parse::<u8>().unwrap(), *b);
        }
        assert!(to_decimal_strings(&[]).is_empty());
    }
}
