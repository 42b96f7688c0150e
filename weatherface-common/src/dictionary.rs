//! Binary encoding of app message dictionaries.
//!
//! Layout (little-endian):
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes)
//!   - TYPE (1 byte): 0 byte array, 1 cstring, 2 uint, 3 int
//!   - LENGTH (2 bytes): value length; a cstring counts its NUL terminator
//!   - VALUE (LENGTH bytes)
//!
//! Integers are 1, 2 or 4 bytes wide.

use heapless::{String, Vec};

use crate::types::config::{APP_MESSAGE_BUFFER_SIZE, MAX_TUPLES, MAX_VALUE_LEN};
use crate::types::message::{AppMessage, Tuple, TupleValue};

const TYPE_BYTE_ARRAY: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

/// KEY + TYPE + LENGTH
const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("buffer too small")]
    BufferTooSmall,
    #[error("dictionary truncated")]
    Truncated,
    #[error("unknown tuple type {0}")]
    InvalidType(u8),
    #[error("invalid value length")]
    InvalidLength,
    #[error("too many tuples")]
    TooManyTuples,
    #[error("value too large")]
    ValueTooLarge,
    #[error("cstring is not valid utf-8")]
    InvalidUtf8,
}

fn is_valid_int_width(width: u8) -> bool {
    matches!(width, 1 | 2 | 4)
}

impl AppMessage {
    /// Size of this message once encoded.
    pub fn encoded_len(&self) -> usize {
        1 + self
            .iter()
            .map(|t| TUPLE_HEADER_SIZE + value_len(&t.value))
            .sum::<usize>()
    }

    /// Encode this message into `buffer`.
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, DictionaryError> {
        let total = self.encoded_len();
        if buffer.len() < total {
            return Err(DictionaryError::BufferTooSmall);
        }

        buffer[0] = self.len() as u8;
        let mut pos = 1;
        for tuple in self.iter() {
            let len = value_len(&tuple.value);
            buffer[pos..pos + 4].copy_from_slice(&tuple.key.to_le_bytes());
            buffer[pos + 4] = type_byte(&tuple.value);
            buffer[pos + 5..pos + 7].copy_from_slice(&(len as u16).to_le_bytes());
            pos += TUPLE_HEADER_SIZE;

            let value = &mut buffer[pos..pos + len];
            match &tuple.value {
                TupleValue::ByteArray(bytes) => value.copy_from_slice(bytes),
                TupleValue::CString(s) => {
                    value[..s.len()].copy_from_slice(s.as_bytes());
                    value[s.len()] = 0;
                }
                TupleValue::Uint(v, width) => {
                    if !is_valid_int_width(*width) {
                        return Err(DictionaryError::InvalidLength);
                    }
                    value.copy_from_slice(&v.to_le_bytes()[..len]);
                }
                TupleValue::Int(v, width) => {
                    if !is_valid_int_width(*width) {
                        return Err(DictionaryError::InvalidLength);
                    }
                    value.copy_from_slice(&v.to_le_bytes()[..len]);
                }
            }
            pos += len;
        }

        Ok(total)
    }

    /// Encode this message into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, APP_MESSAGE_BUFFER_SIZE>, DictionaryError> {
        let mut buffer = [0u8; APP_MESSAGE_BUFFER_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| DictionaryError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Decode a message. Bytes after the last tuple are ignored.
    pub fn decode(bytes: &[u8]) -> Result<AppMessage, DictionaryError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictionaryError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictionaryError::TooManyTuples);
        }

        let mut message = AppMessage::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictionaryError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let ty = rest[4];
            let len = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < len {
                return Err(DictionaryError::Truncated);
            }
            let (raw, tail) = rest.split_at(len);
            rest = tail;

            let value = decode_value(ty, raw)?;
            message
                .push(Tuple { key, value })
                .map_err(|_| DictionaryError::TooManyTuples)?;
        }

        Ok(message)
    }
}

fn type_byte(value: &TupleValue) -> u8 {
    match value {
        TupleValue::ByteArray(_) => TYPE_BYTE_ARRAY,
        TupleValue::CString(_) => TYPE_CSTRING,
        TupleValue::Uint(..) => TYPE_UINT,
        TupleValue::Int(..) => TYPE_INT,
    }
}

fn value_len(value: &TupleValue) -> usize {
    match value {
        TupleValue::ByteArray(bytes) => bytes.len(),
        TupleValue::CString(s) => s.len() + 1,
        TupleValue::Uint(_, width) | TupleValue::Int(_, width) => *width as usize,
    }
}

fn decode_value(ty: u8, raw: &[u8]) -> Result<TupleValue, DictionaryError> {
    if raw.len() > MAX_VALUE_LEN {
        return Err(DictionaryError::ValueTooLarge);
    }

    match ty {
        TYPE_BYTE_ARRAY => {
            let mut bytes = Vec::new();
            bytes
                .extend_from_slice(raw)
                .map_err(|_| DictionaryError::ValueTooLarge)?;
            Ok(TupleValue::ByteArray(bytes))
        }
        TYPE_CSTRING => {
            let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
            let text = core::str::from_utf8(&raw[..end]).map_err(|_| DictionaryError::InvalidUtf8)?;
            let mut s = String::new();
            s.push_str(text).map_err(|_| DictionaryError::ValueTooLarge)?;
            Ok(TupleValue::CString(s))
        }
        TYPE_UINT => {
            let v = match *raw {
                [b0] => b0 as u32,
                [b0, b1] => u16::from_le_bytes([b0, b1]) as u32,
                [b0, b1, b2, b3] => u32::from_le_bytes([b0, b1, b2, b3]),
                _ => return Err(DictionaryError::InvalidLength),
            };
            Ok(TupleValue::Uint(v, raw.len() as u8))
        }
        TYPE_INT => {
            let v = match *raw {
                [b0] => b0 as i8 as i32,
                [b0, b1] => i16::from_le_bytes([b0, b1]) as i32,
                [b0, b1, b2, b3] => i32::from_le_bytes([b0, b1, b2, b3]),
                _ => return Err(DictionaryError::InvalidLength),
            };
            Ok(TupleValue::Int(v, raw.len() as u8))
        }
        other => Err(DictionaryError::InvalidType(other)),
    }
}
