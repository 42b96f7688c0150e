use heapless::{String, Vec};

use crate::types::config::{MAX_TUPLES, MAX_VALUE_LEN};

/// Result codes reported by the host message channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppMessageResult {
    #[error("ok")]
    Ok,
    #[error("send timed out")]
    SendTimeout,
    #[error("send rejected by companion")]
    SendRejected,
    #[error("companion not connected")]
    NotConnected,
    #[error("companion app not running")]
    AppNotRunning,
    #[error("invalid arguments")]
    InvalidArgs,
    #[error("outbox busy")]
    Busy,
    #[error("buffer overflow")]
    BufferOverflow,
    #[error("already released")]
    AlreadyReleased,
    #[error("callback already registered")]
    CallbackAlreadyRegistered,
    #[error("callback not registered")]
    CallbackNotRegistered,
    #[error("out of memory")]
    OutOfMemory,
    #[error("channel closed")]
    Closed,
    #[error("internal error")]
    InternalError,
    #[error("invalid state")]
    InvalidState,
}

/// Typed value of one dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleValue {
    ByteArray(Vec<u8, MAX_VALUE_LEN>),
    CString(String<MAX_VALUE_LEN>),
    /// Unsigned integer and the width in bytes it was written with.
    Uint(u32, u8),
    /// Signed integer and the width in bytes it was written with.
    Int(i32, u8),
}

impl TupleValue {
    /// Reads the value as a signed 32-bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            TupleValue::Int(v, _) => Some(*v),
            TupleValue::Uint(v, _) => Some(*v as i32),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TupleValue::CString(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    pub key: u32,
    pub value: TupleValue,
}

impl Tuple {
    pub fn int32(key: u32, value: i32) -> Self {
        Self {
            key,
            value: TupleValue::Int(value, 4),
        }
    }

    pub fn uint8(key: u32, value: u8) -> Self {
        Self {
            key,
            value: TupleValue::Uint(value as u32, 1),
        }
    }

    /// Builds a cstring tuple, truncating `value` to what a tuple can carry
    /// (one byte is kept for the NUL on the wire).
    pub fn cstring(key: u32, value: &str) -> Self {
        let mut s: String<MAX_VALUE_LEN> = String::new();
        for c in value.chars() {
            if s.len() + c.len_utf8() >= MAX_VALUE_LEN || s.push(c).is_err() {
                break;
            }
        }
        Self {
            key,
            value: TupleValue::CString(s),
        }
    }
}

/// One message on the app message channel: an ordered list of tuples.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppMessage {
    tuples: Vec<Tuple, MAX_TUPLES>,
}

impl AppMessage {
    pub fn new() -> Self {
        Self { tuples: Vec::new() }
    }

    /// Appends a tuple, handing it back if the message is full.
    pub fn push(&mut self, tuple: Tuple) -> Result<(), Tuple> {
        self.tuples.push(tuple)
    }

    pub fn with(mut self, tuple: Tuple) -> Result<Self, Tuple> {
        self.push(tuple)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Tuples in arrival order.
    pub fn iter(&self) -> core::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    pub fn find(&self, key: u32) -> Option<&Tuple> {
        self.tuples.iter().find(|t| t.key == key)
    }
}

impl<'a> IntoIterator for &'a AppMessage {
    type Item = &'a Tuple;
    type IntoIter = core::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
