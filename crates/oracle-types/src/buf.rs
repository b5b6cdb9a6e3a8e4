use thiserror::Error;

/// 32-byte buffer, used for commitments and host block hashes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Buf32(pub [u8; 32]);

impl_buf!(Buf32, 32);

/// Identity of a proposer on the host chain.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl_buf!(Address, 20);

/// Error parsing a buffer from its hex representation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BufParseError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {found}")]
    Length { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_detection() {
        assert!(Buf32::zero().is_zero());
        assert!(Buf32::default().is_zero());

        let mut raw = [0u8; 32];
        raw[31] = 1;
        assert!(!Buf32::from(raw).is_zero());
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let hex_str = "11".repeat(20);
        let plain: Address = hex_str.parse().unwrap();
        let prefixed: Address = format!("0x{hex_str}").parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain, Address::new([0x11; 20]));
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "abcd".parse::<Buf32>().unwrap_err();
        assert_eq!(
            err,
            BufParseError::Length {
                expected: 32,
                found: 2
            }
        );
        assert!(matches!("zz".parse::<Buf32>(), Err(BufParseError::Hex(_))));
    }

    #[test]
    fn test_display_is_truncated() {
        let mut raw = [0u8; 32];
        raw[0] = 0xab;
        raw[31] = 0xcd;
        let buf = Buf32::from(raw);
        assert_eq!(buf.to_string(), "ab0000..0000cd");
        assert_eq!(format!("{buf:?}").len(), 64);
    }

    #[test]
    fn test_serde_json_hex_string() {
        let buf = Buf32::new([0x42; 32]);
        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, format!("\"{}\"", "42".repeat(32)));

        let prefixed = format!("\"0x{}\"", "42".repeat(32));
        let decoded: Buf32 = serde_json::from_str(&prefixed).unwrap();
        assert_eq!(decoded, buf);

        assert!(serde_json::from_str::<Buf32>("\"4242\"").is_err());
    }

    #[test]
    fn test_borsh_is_raw_bytes() {
        let addr = Address::new([7; 20]);
        let bytes = borsh::to_vec(&addr).unwrap();
        assert_eq!(bytes, vec![7; 20]);
        assert_eq!(borsh::from_slice::<Address>(&bytes).unwrap(), addr);
    }
}
