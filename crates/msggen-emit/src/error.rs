//! Message generation error types.

/// Errors that can occur while turning enums into message files.
///
/// All of these are fatal: the run aborts on the first one, and files
/// written for earlier enums are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The header contained no enum declarations at all.
    #[error("no enums found in header (is this the correct header?)")]
    NoEnums,

    /// Enums were found, but none of the expected ones.
    #[error("could not find any known enums (probably not a Ruckig header)")]
    NoKnownEnums,

    /// An enum collides with a hand-maintained message file.
    #[error("conflict with existing hand-maintained '{name}' message")]
    ReservedName { name: String },

    /// The enum's underlying type has no message equivalent.
    #[error("unrecognised C++ enum base type: '{token}'")]
    UnsupportedType { token: String },

    /// I/O error writing a message file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for message generation.
pub type Result<T> = std::result::Result<T, EmitError>;
