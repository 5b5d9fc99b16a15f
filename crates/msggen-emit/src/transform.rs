//! Per-enum transformation into message specifications.

use msggen_header::EnumDecl;

use crate::case::constant_name;
use crate::doc::{clean_enum_doc, clean_value_doc};
use crate::error::{EmitError, Result};
use crate::types::MsgType;

/// Enum names expected in the source header. A header yielding none of
/// these is probably not the right file.
pub const KNOWN_ENUMS: &[&str] = &["Result", "DurationDiscretization"];

/// Message names that must never be generated because a hand-maintained
/// file of the same name exists in the target package.
pub const RESERVED_MESSAGES: &[&str] = &["InternalState"];

/// A single named constant in a message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRecord {
    /// Constant name in SCREAMING_SNAKE_CASE.
    pub name: String,
    /// Cleaned one-line documentation; empty if the enumerator had none.
    pub doc: String,
    /// Value literal text, spaces removed.
    pub value: String,
    /// Field type of the constant.
    pub ty: MsgType,
}

/// Everything needed to render one message file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgSpec {
    /// Output file name (`<EnumName>.msg`).
    pub file_name: String,
    /// Source enum name.
    pub enum_name: String,
    /// Cleaned enum-level documentation.
    pub doc: String,
    /// Field type shared by all constants of this enum.
    pub ty: MsgType,
    /// Constants in declaration order.
    pub constants: Vec<ConstantRecord>,
}

/// Gatekeep a scanned header: there must be enums, and at least one of
/// them must carry a known name. The list passes through unmodified on
/// success; this filter never prunes.
pub fn sanity_check(decls: &[EnumDecl], known: &[String]) -> Result<()> {
    if decls.is_empty() {
        return Err(EmitError::NoEnums);
    }
    if !decls.iter().any(|d| known.iter().any(|k| k == &d.name)) {
        return Err(EmitError::NoKnownEnums);
    }
    Ok(())
}

/// Transform one scanned enum into a message specification.
///
/// The reserved-name check runs here, before any file is opened, so a
/// conflicting run produces no partial output for its enum.
pub fn msg_spec(decl: &EnumDecl, reserved: &[String]) -> Result<MsgSpec> {
    if reserved.iter().any(|r| r == &decl.name) {
        return Err(EmitError::ReservedName {
            name: decl.name.clone(),
        });
    }

    // One underlying type per enum; every constant shares it.
    let ty = MsgType::from_cpp(&decl.underlying_type)?;

    let constants = decl
        .values
        .iter()
        .map(|v| ConstantRecord {
            name: constant_name(&v.name),
            doc: clean_value_doc(&v.doc),
            value: v.value.replace(' ', "").trim().to_string(),
            ty,
        })
        .collect();

    Ok(MsgSpec {
        file_name: format!("{}.msg", decl.name),
        enum_name: decl.name.clone(),
        doc: clean_enum_doc(&decl.doc),
        ty,
        constants,
    })
}
