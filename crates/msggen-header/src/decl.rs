//! Scanned enum declaration records.

use serde::{Deserialize, Serialize};

/// A single enumerator within an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDecl {
    /// Enumerator name in source casing (e.g. `LikeThis`).
    pub name: String,
    /// Raw trailing Doxygen comment, marker included; empty if absent.
    pub doc: String,
    /// Value literal text; implicit values are resolved to decimal text.
    pub value: String,
}

/// An enum declaration scanned from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Enum name.
    pub name: String,
    /// Underlying type token as written in the source; `int` if unspecified.
    pub underlying_type: String,
    /// Raw preceding Doxygen block, markers included; empty if absent.
    pub doc: String,
    /// Enumerators in declaration order.
    pub values: Vec<ValueDecl>,
}
