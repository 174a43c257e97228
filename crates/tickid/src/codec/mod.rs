mod compact;
mod hex;
mod validate;

pub use compact::*;
pub use hex::*;
pub use validate::*;

use crate::Error;

/// Number of raw bytes in an encoded identifier.
pub const BYTE_LEN: usize = 12;

const NO_VALUE: u8 = 255;

/// Builds the error for the first rejected byte of `input`.
///
/// Every byte before `index` was ASCII, so `index` is always on a char
/// boundary.
fn invalid_char(input: &str, index: usize) -> Error {
    let ch = input[index..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Error::InvalidChar { ch, index }
}

fn check_len(input: &str, expected: usize) -> Result<(), Error> {
    if input.len() == expected {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            expected,
            len: input.len(),
        })
    }
}
