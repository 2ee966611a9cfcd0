// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Base45 decoding (RFC 9285).

const ALPHABET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base45Error {
    #[error("invalid base45 character {0:?}")]
    InvalidCharacter(char),
    #[error("invalid base45 length: trailing group has a single character")]
    InvalidLength,
    #[error("base45 group does not fit in its output bytes")]
    DataOverflow,
}

fn index_of(ch: char) -> Result<u32, Base45Error> {
    let upper = ch.to_ascii_uppercase();
    if !upper.is_ascii() {
        return Err(Base45Error::InvalidCharacter(ch));
    }
    ALPHABET
        .iter()
        .position(|&c| c == upper as u8)
        .map(|i| i as u32)
        .ok_or(Base45Error::InvalidCharacter(ch))
}

/// Decode Base45 text. Lowercase letters are accepted.
pub fn decode(input: &str) -> Result<Vec<u8>, Base45Error> {
    let indices = input.chars().map(index_of).collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(indices.len() / 3 * 2 + 1);
    for group in indices.chunks(3) {
        match *group {
            [a, b, c] => {
                let x = a + 45 * b + 45 * 45 * c;
                if x > 0xFFFF {
                    return Err(Base45Error::DataOverflow);
                }
                out.push((x >> 8) as u8);
                out.push((x & 0xFF) as u8);
            }
            [a, b] => {
                let x = a + 45 * b;
                if x > 0xFF {
                    return Err(Base45Error::DataOverflow);
                }
                out.push(x as u8);
            }
            _ => return Err(Base45Error::InvalidLength),
        }
    }

    Ok(out)
}
