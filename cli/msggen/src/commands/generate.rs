//! `msggen generate`: write one .msg file per enum found in the header.

use std::path::Path;

use anyhow::{bail, Context, Result};

use msggen_emit::{msg_spec, now_iso8601, sanity_check, write_msg_file};
use msggen_header::extract_enums;

use crate::commands::absolutize;
use crate::config::MsggenConfig;

/// Run the generation pipeline: scan the header, gatekeep it, then write
/// one message file per enum.
///
/// The msg directory must already exist; this is checked before the header
/// is even read. Enums are processed in source order and a failure aborts
/// the run without touching files for the not-yet-processed enums.
pub fn run(
    cwd: &Path,
    config: &MsggenConfig,
    msg_dir_flag: Option<&str>,
    header: &str,
) -> Result<()> {
    let msg_dir = absolutize(cwd, Path::new(&config.resolve_msg_dir(msg_dir_flag)));
    if !msg_dir.is_dir() {
        bail!(
            "can't seem to find the 'msg' dir at '{}', aborting",
            msg_dir.display()
        );
    }

    let header_path = absolutize(cwd, Path::new(header));
    let decls = extract_enums(&header_path)
        .with_context(|| format!("scanning {}", header_path.display()))?;
    sanity_check(&decls, &config.generator.known_enums)?;

    let stamp = now_iso8601();
    let source_file = header_path.display().to_string();

    for decl in &decls {
        let spec = msg_spec(decl, &config.generator.reserved)?;
        let path = write_msg_file(&msg_dir, &spec, &source_file, &stamp)?;
        println!(
            "Processing '{}': writing {} constants to '{}' ..",
            spec.enum_name,
            spec.constants.len(),
            path.display()
        );
    }

    println!("Generated {} messages", decls.len());

    Ok(())
}
