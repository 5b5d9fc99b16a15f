//! Message file rendering and writing.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::transform::MsgSpec;

/// Render the full textual content of one message file.
///
/// The layout matches previously generated files byte for byte: a preamble
/// naming the stamp, source header and enum, then one documented constant
/// per enumerator, then the `value` data field. Output is deterministic
/// given the same spec, source path and stamp; the stamp is the only
/// element that varies between regenerations.
pub fn render(spec: &MsgSpec, source_file: &str, stamp: &str) -> String {
    let mut out = format!(
        "\n# Auto-generated on {stamp} from:\n#\n#  {source_file}\n#\n# Any modifications will be lost upon regeneration.\n\n# Enum-level Doxygen for {enum_name}:\n#\n#  \"{enum_doc}\"\n#\n\n",
        enum_name = spec.enum_name,
        enum_doc = spec.doc,
    );

    for c in &spec.constants {
        out.push_str(&format!("# {}\n{} {}={}\n\n", c.doc, c.ty, c.name, c.value));
    }

    // Trailing data field. All constants share the enum's type, so use it
    // directly; this also keeps an enum without enumerators well-defined.
    out.push_str(&format!("# data\n{} value\n", spec.ty));

    out
}

/// Render a message specification and write it to `<dir>/<file_name>`.
///
/// Overwrites an existing file of the same name; the reserved-name guard
/// has already run during the transform.
pub fn write_msg_file(
    dir: &Path,
    spec: &MsgSpec,
    source_file: &str,
    stamp: &str,
) -> Result<PathBuf> {
    let path = dir.join(&spec.file_name);
    std::fs::write(&path, render(spec, source_file, stamp))?;
    Ok(path)
}
