// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Generic CBOR value tree.
//!
//! Only what the decode pipeline needs: reading one data item into a [`CborValue`]
//! (definite and indefinite lengths) and writing a value back out so header labels can
//! be compared in their encoded form.

use std::convert::Infallible;

use minicbor::data::{Int, Tag, Type};
use minicbor::{Decoder, Encoder};

/// Nesting limit for arrays, maps and tags.
pub const MAX_NESTING_DEPTH: usize = 64;

const BREAK: u8 = 0xFF;

#[derive(Debug, Clone, PartialEq)]
pub enum CborValue {
    Unsigned(u64),
    /// Major type 1 argument `n`, representing the integer `-1 - n`.
    Negative(u64),
    Half(f32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Null,
    Undefined,
    Simple(u8),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<CborValue>),
    /// Entries in wire order. Duplicate keys are kept.
    Map(Vec<(CborValue, CborValue)>),
    Tag(u64, Box<CborValue>),
    Break,
}

impl CborValue {
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            CborValue::Unsigned(n) => Some(i128::from(*n)),
            CborValue::Negative(n) => Some(-1 - i128::from(*n)),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CborValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(CborValue, CborValue)]> {
        match self {
            CborValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Last value stored under an integer key.
    pub fn map_get_int(&self, key: i64) -> Option<&CborValue> {
        self.as_map()?
            .iter()
            .rev()
            .find(|(k, _)| k.as_integer() == Some(i128::from(key)))
            .map(|(_, v)| v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CborError {
    #[error("malformed CBOR: {0}")]
    Malformed(String),
    #[error("CBOR encoding failed: {0}")]
    Encoding(String),
}

impl From<minicbor::decode::Error> for CborError {
    fn from(e: minicbor::decode::Error) -> Self {
        CborError::Malformed(e.to_string())
    }
}

impl From<minicbor::encode::Error<Infallible>> for CborError {
    fn from(e: minicbor::encode::Error<Infallible>) -> Self {
        CborError::Encoding(e.to_string())
    }
}

/// Decode the first data item in `input`. Trailing bytes are ignored.
pub fn decode_value(input: &[u8]) -> Result<CborValue, CborError> {
    if input.is_empty() {
        return Err(CborError::Malformed("empty input".to_string()));
    }
    let mut dec = Decoder::new(input);
    read_value(&mut dec)
}

/// Read one data item at the decoder's position.
pub fn read_value(dec: &mut Decoder<'_>) -> Result<CborValue, CborError> {
    read_nested(dec, 0)
}

fn read_nested(dec: &mut Decoder<'_>, depth: usize) -> Result<CborValue, CborError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(CborError::Malformed(format!(
            "nesting deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }

    let value = match dec.datatype()? {
        Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::Int => {
            let n = i128::from(dec.int()?);
            if n >= 0 {
                CborValue::Unsigned(n as u64)
            } else {
                CborValue::Negative((-1 - n) as u64)
            }
        }
        Type::F16 => CborValue::Half(dec.f16()?),
        Type::F32 => CborValue::Float(dec.f32()?),
        Type::F64 => CborValue::Double(dec.f64()?),
        Type::Bool => CborValue::Bool(dec.bool()?),
        Type::Null => {
            dec.null()?;
            CborValue::Null
        }
        Type::Undefined => {
            dec.undefined()?;
            CborValue::Undefined
        }
        Type::Simple => CborValue::Simple(dec.simple()?),
        Type::Bytes => CborValue::Bytes(dec.bytes()?.to_vec()),
        Type::BytesIndef => {
            let mut out = Vec::new();
            for chunk in dec.bytes_iter()? {
                out.extend_from_slice(chunk?);
            }
            CborValue::Bytes(out)
        }
        Type::String => CborValue::Text(dec.str()?.to_string()),
        Type::StringIndef => {
            let mut out = String::new();
            for chunk in dec.str_iter()? {
                out.push_str(chunk?);
            }
            CborValue::Text(out)
        }
        Type::Array | Type::ArrayIndef => {
            let mut items = Vec::new();
            match dec.array()? {
                Some(len) => {
                    for _ in 0..len {
                        items.push(read_nested(dec, depth + 1)?);
                    }
                }
                None => {
                    while !at_break(dec)? {
                        items.push(read_nested(dec, depth + 1)?);
                    }
                    skip_break(dec);
                }
            }
            CborValue::Array(items)
        }
        Type::Map | Type::MapIndef => {
            let mut entries = Vec::new();
            match dec.map()? {
                Some(len) => {
                    for _ in 0..len {
                        let k = read_nested(dec, depth + 1)?;
                        let v = read_nested(dec, depth + 1)?;
                        entries.push((k, v));
                    }
                }
                None => {
                    while !at_break(dec)? {
                        let k = read_nested(dec, depth + 1)?;
                        let v = read_nested(dec, depth + 1)?;
                        entries.push((k, v));
                    }
                    skip_break(dec);
                }
            }
            CborValue::Map(entries)
        }
        Type::Tag => {
            let tag = dec.tag()?;
            CborValue::Tag(tag.as_u64(), Box::new(read_nested(dec, depth + 1)?))
        }
        Type::Break => {
            skip_break(dec);
            CborValue::Break
        }
        other => {
            return Err(CborError::Malformed(format!(
                "unrecognized data item {other:?} at offset {}",
                dec.position()
            )))
        }
    };

    Ok(value)
}

fn at_break(dec: &mut Decoder<'_>) -> Result<bool, CborError> {
    Ok(dec.datatype()? == Type::Break)
}

fn skip_break(dec: &mut Decoder<'_>) {
    debug_assert_eq!(dec.input().get(dec.position()), Some(&BREAK));
    dec.set_position(dec.position() + 1);
}

/// Encode a value with definite lengths (indefinite-length strings, arrays and maps
/// are written in their definite form).
pub fn encode_value(value: &CborValue) -> Result<Vec<u8>, CborError> {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    write_value(&mut enc, value)?;
    Ok(out)
}

fn write_value(enc: &mut Encoder<&mut Vec<u8>>, value: &CborValue) -> Result<(), CborError> {
    match value {
        CborValue::Unsigned(n) => {
            enc.u64(*n)?;
        }
        CborValue::Negative(n) => {
            let int = Int::try_from(-1 - i128::from(*n))
                .map_err(|e| CborError::Encoding(e.to_string()))?;
            enc.int(int)?;
        }
        CborValue::Half(f) => {
            enc.f16(*f)?;
        }
        CborValue::Float(f) => {
            enc.f32(*f)?;
        }
        CborValue::Double(f) => {
            enc.f64(*f)?;
        }
        CborValue::Bool(b) => {
            enc.bool(*b)?;
        }
        CborValue::Null => {
            enc.null()?;
        }
        CborValue::Undefined => {
            enc.undefined()?;
        }
        CborValue::Simple(s) => {
            enc.simple(*s)?;
        }
        CborValue::Bytes(b) => {
            enc.bytes(b)?;
        }
        CborValue::Text(s) => {
            enc.str(s)?;
        }
        CborValue::Array(items) => {
            enc.array(items.len() as u64)?;
            for item in items {
                write_value(enc, item)?;
            }
        }
        CborValue::Map(entries) => {
            enc.map(entries.len() as u64)?;
            for (k, v) in entries {
                write_value(enc, k)?;
                write_value(enc, v)?;
            }
        }
        CborValue::Tag(tag, inner) => {
            enc.tag(Tag::new(*tag))?;
            write_value(enc, inner)?;
        }
        CborValue::Break => {
            enc.end()?;
        }
    }
    Ok(())
}
