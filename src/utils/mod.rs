// Sat Oct 17 2026 - Alex

use crate::memory::Address;

pub fn hex_string_spaced(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

/// Parses a hex byte string into bytes, in the order written.
///
/// Separated input such as `"1 2 0x03, ff"` is one byte per token. An unbroken run such as
/// `"0x010203ff"` is read two digits at a time.
pub fn parse_hex(s: &str) -> Option<Vec<u8>> {
    let s = s.trim();
    if s.contains(|c: char| c.is_whitespace() || c == ',') {
        return s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_hex_byte)
            .collect();
    }

    let s = strip_hex_prefix(s);
    if s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }

    let mut result = Vec::with_capacity(s.len() / 2);
    for i in (0..s.len()).step_by(2) {
        let byte = u8::from_str_radix(&s[i..i + 2], 16).ok()?;
        result.push(byte);
    }

    Some(result)
}

fn parse_hex_byte(token: &str) -> Option<u8> {
    let digits = strip_hex_prefix(token);
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Parses an address written in hex, with or without a `0x` prefix.
pub fn parse_address(s: &str) -> Option<Address> {
    let s = s.trim();
    let digits = strip_hex_prefix(s).replace('_', "");
    u64::from_str_radix(&digits, 16).ok().map(Address::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("01 02 03 04"), Some(vec![1, 2, 3, 4]));
        assert_eq!(parse_hex("0x01,0xff"), Some(vec![1, 0xff]));
        assert_eq!(parse_hex("deadBEEF"), Some(vec![0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(parse_hex("abc"), None);
        assert_eq!(parse_hex("zz"), None);
    }

    #[test]
    fn test_parse_hex_separated_single_digits() {
        assert_eq!(parse_hex("1 2 3 4"), Some(vec![1, 2, 3, 4]));
        assert_eq!(parse_hex("0x1, 0xff,a"), Some(vec![1, 0xff, 0xa]));
        assert_eq!(parse_hex(" 0X0a  "), Some(vec![0x0a]));
        assert_eq!(parse_hex("123 4"), None);
        assert_eq!(parse_hex("0x 1"), None);
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x69"), Some(Address::new(0x69)));
        assert_eq!(parse_address("7fff_0000"), Some(Address::new(0x7fff_0000)));
        assert_eq!(parse_address("0xg1"), None);
    }

    #[test]
    fn test_hex_string_spaced() {
        assert_eq!(hex_string_spaced(&[0, 0x1f, 0xa0]), "00 1f a0");
    }
}
