use super::{BYTE_LEN, HEX_LEN, NO_VALUE, check_len, decode_hex, encode_hex, invalid_char};
use crate::Result;

/// Length of the compact form of an identifier.
pub const COMPACT_LEN: usize = BYTE_LEN * 8 / BITS_PER_CHAR;

/// The 64 compact symbols, in index order.
pub const COMPACT_ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

const BITS_PER_CHAR: usize = 6;

/// Lookup table for compact decoding. Case-sensitive.
pub(super) const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 64 {
        lut[COMPACT_ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes 12 raw bytes as 16 compact characters.
///
/// The 96 bits are regrouped most significant first into 6-bit units. This
/// is the same as taking the hex form three nibbles at a time and emitting
/// two symbols per group, so every symbol boundary lines up with the hex
/// form every 12 bits.
#[inline]
pub fn encode_compact(input: &[u8; BYTE_LEN], buf: &mut [u8; COMPACT_LEN]) {
    for (out, chunk) in buf.chunks_exact_mut(4).zip(input.chunks_exact(3)) {
        let acc = u32::from(chunk[0]) << 16 | u32::from(chunk[1]) << 8 | u32::from(chunk[2]);
        out[0] = COMPACT_ALPHABET[(acc >> 18 & 0x3F) as usize];
        out[1] = COMPACT_ALPHABET[(acc >> 12 & 0x3F) as usize];
        out[2] = COMPACT_ALPHABET[(acc >> 6 & 0x3F) as usize];
        out[3] = COMPACT_ALPHABET[(acc & 0x3F) as usize];
    }
}

/// Decodes a 16-character compact string into 12 raw bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless the input is exactly 16 bytes long
/// and [`Error::InvalidChar`] for the first symbol outside
/// [`COMPACT_ALPHABET`].
///
/// [`Error::InvalidLength`]: crate::Error::InvalidLength
/// [`Error::InvalidChar`]: crate::Error::InvalidChar
pub fn decode_compact(encoded: &str) -> Result<[u8; BYTE_LEN]> {
    check_len(encoded, COMPACT_LEN)?;
    let input = encoded.as_bytes();
    let mut out = [0_u8; BYTE_LEN];
    for (group, chunk) in out.chunks_exact_mut(3).enumerate() {
        let mut acc = 0_u32;
        for offset in 0..4 {
            let index = group * 4 + offset;
            let val = LOOKUP[usize::from(input[index])];
            if val == NO_VALUE {
                return Err(invalid_char(encoded, index));
            }
            acc = acc << BITS_PER_CHAR | u32::from(val);
        }
        chunk[0] = (acc >> 16) as u8;
        chunk[1] = (acc >> 8) as u8;
        chunk[2] = acc as u8;
    }
    Ok(out)
}

/// Re-packs a 24-character hex string into its 16-character compact form.
///
/// # Errors
///
/// Fails if `hex` is not exactly 24 hex characters.
pub fn compress(hex: &str) -> Result<String> {
    let bytes = decode_hex(hex)?;
    let mut buf = [0_u8; COMPACT_LEN];
    encode_compact(&bytes, &mut buf);
    Ok(ascii_to_string(&buf))
}

/// Expands a 16-character compact string back to 24 lowercase hex
/// characters. This is the exact inverse of [`compress`] for lowercase input.
///
/// # Errors
///
/// Fails if `compact` is not exactly 16 symbols from [`COMPACT_ALPHABET`].
pub fn decompress(compact: &str) -> Result<String> {
    let bytes = decode_compact(compact)?;
    let mut buf = [0_u8; HEX_LEN];
    encode_hex(&bytes, &mut buf);
    Ok(ascii_to_string(&buf))
}

pub(crate) fn ascii_to_string(buf: &[u8]) -> String {
    buf.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn alphabet_is_ordered_and_complete() {
        assert_eq!(COMPACT_LEN, 16);
        assert_eq!(&COMPACT_ALPHABET[..10], b"0123456789");
        assert_eq!(COMPACT_ALPHABET[10], b'a');
        assert_eq!(COMPACT_ALPHABET[36], b'A');
        assert_eq!(COMPACT_ALPHABET[62], b'-');
        assert_eq!(COMPACT_ALPHABET[63], b'_');
        for (i, &c) in COMPACT_ALPHABET.iter().enumerate() {
            assert_eq!(usize::from(LOOKUP[usize::from(c)]), i);
        }
    }

    #[test]
    fn compress_known_vectors() {
        let cases = [
            ("000000000000000000000000", "0000000000000000"),
            ("ffffffffffffffffffffffff", "________________"),
            ("000102030405060708090a0b", "00420Mg51ws82gEb"),
            ("4000000000000001ff0200fe", "g0000000007_0w3-"),
            ("48dc5e8d1ad2e7c07b01a381", "idNuzhHiVY1X0qe1"),
        ];
        for (hex, compact) in cases {
            assert_eq!(compress(hex).unwrap(), compact, "compress {hex}");
            assert_eq!(decompress(compact).unwrap(), hex, "decompress {compact}");
        }
    }

    #[test]
    fn compress_accepts_uppercase_hex() {
        assert_eq!(
            compress("48DC5E8D1AD2E7C07B01A381").unwrap(),
            "idNuzhHiVY1X0qe1"
        );
    }

    #[test]
    fn decompress_inverts_compress() {
        let mut hex = [0_u8; HEX_LEN];
        for seed in 0_u64..512 {
            let bytes: Vec<u8> = (0..BYTE_LEN as u64)
                .map(|i| (seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (i * 5)) as u8)
                .collect();
            encode_hex(bytes.as_slice().try_into().unwrap(), &mut hex);
            let hex = core::str::from_utf8(&hex).unwrap();
            assert_eq!(decompress(&compress(hex).unwrap()).unwrap(), hex);
        }
    }

    #[test]
    fn compress_rejects_bad_input() {
        assert_eq!(
            compress("0000"),
            Err(Error::InvalidLength {
                expected: 24,
                len: 4
            })
        );
        assert_eq!(
            compress("00000000000000000000000z"),
            Err(Error::InvalidChar { ch: 'z', index: 23 })
        );
    }

    #[test]
    fn decompress_rejects_bad_input() {
        assert_eq!(
            decompress("00420Mg51ws82gE"),
            Err(Error::InvalidLength {
                expected: 16,
                len: 15
            })
        );
        assert_eq!(
            decompress("00420Mg51ws82gE+"),
            Err(Error::InvalidChar { ch: '+', index: 15 })
        );
        assert_eq!(
            decompress("0042.Mg51ws82gEb"),
            Err(Error::InvalidChar { ch: '.', index: 4 })
        );
    }
}
