//! Observability trait for inspecting register state.
//!
//! Every block exposes its registers by name so a run can be inspected
//! without a debugger. Queries never affect generator state.

use std::fmt;

/// A dynamically-typed register value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single-bit signal or flag.
    Bool(bool),
    /// 8-bit register (control word, speed).
    U8(u8),
    /// Counter or coordinate register (10-bit values live here).
    U16(u16),
    /// Long-running counters (frames, ticks).
    U64(u64),
    /// Enumerated state rendered by name.
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v:#04X}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// A block whose registers can be inspected.
pub trait Observable {
    /// Query a specific register by path.
    ///
    /// Paths are hierarchical, separated by dots:
    /// - `timing.h` - horizontal counter
    /// - `anim.offset` - scroll offset
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    fn query_paths(&self) -> &'static [&'static str];
}
