use std::ffi::{CStr, CString};
use std::fmt;

use libc::{c_int, c_long};

/// A value read from, or written to, a process attribute.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    /// Result of a successful set.
    Unit,
    /// Return value of a get, or an integer to set.
    Integer(c_long),
    /// Integer the kernel stored through the get pointer.
    SignedInteger(c_int),
    /// A process name.
    Text(CString),
}

/// The variant of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// [`Value::Unit`]
    Unit,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::SignedInteger`]
    SignedInteger,
    /// [`Value::Text`]
    Text,
}

impl Value {
    /// The variant of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Integer(_) => ValueKind::Integer,
            Value::SignedInteger(_) => ValueKind::SignedInteger,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// The integer held by either integer variant.
    pub fn as_int(&self) -> Option<c_long> {
        match *self {
            Value::Integer(i) => Some(i),
            Value::SignedInteger(i) => Some(c_long::from(i)),
            _ => None,
        }
    }

    /// The string held by [`Value::Text`].
    pub fn as_text(&self) -> Option<&CStr> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is [`Value::Unit`].
    pub const fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::SignedInteger(i) => write!(f, "{}", i),
            Value::Text(s) => f.write_str(&s.to_string_lossy()),
        }
    }
}

macro_rules! from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Value {
                    Value::Integer(i as c_long)
                }
            }
        )+
    };
}

// Wider inputs are narrowed like a C cast, the kernel reads an unsigned long.
from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Integer(c_long::from(b))
    }
}

impl From<CString> for Value {
    fn from(s: CString) -> Value {
        Value::Text(s)
    }
}

impl From<&CStr> for Value {
    fn from(s: &CStr) -> Value {
        Value::Text(s.to_owned())
    }
}

/// Cut at the first NUL, which is where a C reader of the string stops.
impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::from(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::from(s.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(mut bytes: Vec<u8>) -> Value {
        if let Some(nul) = bytes.iter().position(|&b| b == 0) {
            bytes.truncate(nul);
        }
        // No interior NUL remains.
        Value::Text(CString::new(bytes).unwrap_or_default())
    }
}
