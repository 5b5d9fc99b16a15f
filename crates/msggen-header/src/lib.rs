//! Minimal C++ enum scanner for msggen.
//!
//! Extracts enum declarations (name, underlying type, Doxygen comments,
//! enumerators with resolved values) from a header file. This is not a C++
//! parser: it recognizes exactly the declaration shapes that appear in the
//! headers msggen consumes and skips everything else.
//!
//! ## Modules
//!
//! - [`decl`] - scanned declaration records
//! - [`scanner`] - the line-oriented scanner itself

pub mod decl;
pub mod error;
pub mod scanner;

pub use decl::{EnumDecl, ValueDecl};
pub use error::HeaderError;
pub use scanner::{extract_enums, parse_header};
