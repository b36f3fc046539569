use lazy_static::lazy_static;

lazy_static! {
    // RFC 8259 insignificant whitespace: space, tab, LF, CR
    static ref JSON_WHITESPACE: [bool; 256] = {
        let mut table = [false; 256];
        for b in [b' ', b'\t', b'\n', b'\r'] {
            table[b as usize] = true;
        }
        table
    };
}

#[inline]
pub fn is_json_whitespace(byte: u8) -> bool {
    JSON_WHITESPACE[byte as usize]
}

/// Index of the first byte that is not JSON whitespace.
pub fn first_non_whitespace(window: &[u8]) -> Option<usize> {
    window.iter().position(|&b| !is_json_whitespace(b))
}

/// Checks the whole buffer (not just the probe window) for bytes >= 0x80.
pub fn contains_non_ascii(content: &[u8]) -> bool {
    !content.is_ascii()
}

/// Case-insensitive comparison that only folds `A`-`Z`.
/// Any other byte, including non-ASCII, must match exactly.
pub fn ascii_equals_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| fold(x) == fold(y))
}

#[inline]
fn fold(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + 32
    } else {
        byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_table() {
        for b in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_json_whitespace(b));
        }
        // Form feed and vertical tab are not JSON whitespace
        assert!(!is_json_whitespace(0x0C));
        assert!(!is_json_whitespace(0x0B));
        assert!(!is_json_whitespace(b'a'));
    }

    #[test]
    fn test_first_non_whitespace() {
        assert_eq!(first_non_whitespace(b"  \t\n{"), Some(4));
        assert_eq!(first_non_whitespace(b"x"), Some(0));
        assert_eq!(first_non_whitespace(b" \r\n "), None);
        assert_eq!(first_non_whitespace(b""), None);
    }

    #[test]
    fn test_contains_non_ascii() {
        assert!(!contains_non_ascii(b"hello"));
        assert!(contains_non_ascii(&[0x41, 0xFF]));
        assert!(contains_non_ascii(&[0x80]));
        assert!(!contains_non_ascii(b""));

        // Not window-bounded
        let mut long = vec![b'a'; 4096];
        long.push(0xC3);
        assert!(contains_non_ascii(&long));
    }

    #[test]
    fn test_ascii_equals_ignore_case() {
        assert!(ascii_equals_ignore_case(b"ABC", b"abc"));
        assert!(ascii_equals_ignore_case(b"Content-Type", b"content-type"));
        assert!(!ascii_equals_ignore_case(b"ABC", b"abd"));
        assert!(!ascii_equals_ignore_case(b"AB", b"ABC"));
        assert!(ascii_equals_ignore_case(b"", b""));
    }

    #[test]
    fn test_non_ascii_bytes_compare_exactly() {
        // 0xC0 is 'A' + 0x80; it must not fold to 0xE0
        assert!(!ascii_equals_ignore_case(&[0xC0], &[0xE0]));
        assert!(ascii_equals_ignore_case(&[0xC0, b'X'], &[0xC0, b'x']));
        // Lowercase is not folded to uppercase: '[' (0x5B) vs '{' (0x7B)
        assert!(!ascii_equals_ignore_case(b"[", b"{"));
    }
}
