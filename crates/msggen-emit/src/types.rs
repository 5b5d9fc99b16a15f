//! Mapping from C++ underlying types to message field types.

use crate::error::{EmitError, Result};

/// Field type of a generated message constant.
///
/// The message schema only defines constant semantics for signed 32-bit
/// integers, so this mapping is closed on purpose: any other underlying
/// type must fail loudly rather than be guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgType {
    /// Signed 32-bit integer (`int32`).
    Int32,
}

impl MsgType {
    /// Map a C++ underlying-type token to a message type.
    ///
    /// Accepts the spellings of a signed 32-bit integer; anything else is
    /// rejected by name.
    pub fn from_cpp(token: &str) -> Result<Self> {
        match token {
            "int" | "int32_t" | "std::int32_t" => Ok(MsgType::Int32),
            other => Err(EmitError::UnsupportedType {
                token: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MsgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MsgType::Int32 => write!(f, "int32"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_32_bit_spellings_map() {
        assert_eq!(MsgType::from_cpp("int").unwrap(), MsgType::Int32);
        assert_eq!(MsgType::from_cpp("int32_t").unwrap(), MsgType::Int32);
        assert_eq!(MsgType::from_cpp("std::int32_t").unwrap(), MsgType::Int32);
    }

    #[test]
    fn other_types_fail_by_name() {
        let err = MsgType::from_cpp("uint8_t").unwrap_err();
        match err {
            EmitError::UnsupportedType { token } => assert_eq!(token, "uint8_t"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_token() {
        assert_eq!(MsgType::Int32.to_string(), "int32");
    }
}
