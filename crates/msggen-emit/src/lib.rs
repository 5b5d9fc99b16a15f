//! Message generation core for msggen.
//!
//! Turns scanned C++ enum declarations into ROS message definition files
//! with named integer constants, one file per enum.
//!
//! ## Modules
//!
//! - [`case`] - enumerator name case conversion
//! - [`doc`] - Doxygen comment cleaning
//! - [`types`] - underlying-type to message-type mapping
//! - [`transform`] - per-enum transformation into message specs
//! - [`render`] - message file rendering and writing
//! - [`stamp`] - generation timestamps

pub mod case;
pub mod doc;
pub mod error;
pub mod render;
pub mod stamp;
pub mod transform;
pub mod types;

// Re-export key items for convenience
pub use error::EmitError;
pub use render::{render, write_msg_file};
pub use stamp::now_iso8601;
pub use transform::{
    msg_spec, sanity_check, ConstantRecord, MsgSpec, KNOWN_ENUMS, RESERVED_MESSAGES,
};
pub use types::MsgType;
