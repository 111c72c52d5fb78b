pub(crate) fn u16_from_hex(value: &str) -> Result<u16, std::num::ParseIntError> {
    let s = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u16::from_str_radix(s, 16)
}

/// Parse whitespace-separated hex byte pairs, eg `"de ad be ef"` or `"deadbeef"`.
pub(crate) fn bytes_from_hex(value: &str) -> Result<Vec<u8>, String> {
    let digits: String = value.split_whitespace().collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in {value:?}"));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid hex byte at offset {i} in {value:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_ids() {
        assert_eq!(u16_from_hex("0x10C4"), Ok(0x10C4));
        assert_eq!(u16_from_hex("ea80"), Ok(0xEA80));
        assert!(u16_from_hex("0xZZ").is_err());
    }

    #[test]
    fn hex_bytes() {
        assert_eq!(bytes_from_hex("de ad BE ef"), Ok(vec![0xDE, 0xAD, 0xBE, 0xEF]));
        assert_eq!(bytes_from_hex("0102"), Ok(vec![1, 2]));
        assert!(bytes_from_hex("123").is_err());
        assert!(bytes_from_hex("zz").is_err());
    }
}
