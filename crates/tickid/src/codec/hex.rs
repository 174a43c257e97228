use super::{BYTE_LEN, NO_VALUE, check_len, invalid_char};
use crate::Result;

/// Length of the hex form of an identifier.
pub const HEX_LEN: usize = BYTE_LEN * 2;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Lookup table for hex decoding, accepting either case.
pub(super) const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 16 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[c.to_ascii_uppercase() as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Encodes 12 raw bytes as 24 lowercase hex characters.
#[inline]
pub fn encode_hex(input: &[u8; BYTE_LEN], buf: &mut [u8; HEX_LEN]) {
    for (pair, &b) in buf.chunks_exact_mut(2).zip(input) {
        pair[0] = ALPHABET[usize::from(b >> 4)];
        pair[1] = ALPHABET[usize::from(b & 0x0F)];
    }
}

/// Decodes a 24-character hex string (either case) into 12 raw bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless the input is exactly 24 bytes long
/// and [`Error::InvalidChar`] for the first non-hex character.
///
/// [`Error::InvalidLength`]: crate::Error::InvalidLength
/// [`Error::InvalidChar`]: crate::Error::InvalidChar
pub fn decode_hex(encoded: &str) -> Result<[u8; BYTE_LEN]> {
    check_len(encoded, HEX_LEN)?;
    let input = encoded.as_bytes();
    let mut out = [0_u8; BYTE_LEN];
    for (i, byte) in out.iter_mut().enumerate() {
        let hi = LOOKUP[usize::from(input[2 * i])];
        if hi == NO_VALUE {
            return Err(invalid_char(encoded, 2 * i));
        }
        let lo = LOOKUP[usize::from(input[2 * i + 1])];
        if lo == NO_VALUE {
            return Err(invalid_char(encoded, 2 * i + 1));
        }
        *byte = (hi << 4) | lo;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const SEQUENTIAL: [u8; BYTE_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

    #[test]
    fn encodes_lowercase() {
        let mut buf = [0_u8; HEX_LEN];
        encode_hex(&SEQUENTIAL, &mut buf);
        assert_eq!(&buf, b"000102030405060708090a0b");

        encode_hex(&[0xAB; BYTE_LEN], &mut buf);
        assert_eq!(&buf, b"abababababababababababab");
    }

    #[test]
    fn decodes_either_case() {
        assert_eq!(decode_hex("000102030405060708090a0b"), Ok(SEQUENTIAL));
        assert_eq!(decode_hex("000102030405060708090A0B"), Ok(SEQUENTIAL));
        assert_eq!(decode_hex("FFFFFFFFFFFFffffffffffff"), Ok([0xFF; BYTE_LEN]));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            decode_hex("000102030405060708090a0"),
            Err(Error::InvalidLength {
                expected: 24,
                len: 23
            })
        );
        assert_eq!(
            decode_hex(""),
            Err(Error::InvalidLength {
                expected: 24,
                len: 0
            })
        );
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert_eq!(
            decode_hex("00010203040506070809ga0b"),
            Err(Error::InvalidChar { ch: 'g', index: 20 })
        );
        assert_eq!(
            decode_hex("00010203040506070809ä0b"),
            Err(Error::InvalidChar {
                ch: 'ä',
                index: 20
            })
        );
    }
}
