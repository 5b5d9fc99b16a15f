//! `msggen list`: show the enums found in a header without writing files.

use std::path::Path;

use anyhow::{bail, Context, Result};

use msggen_emit::sanity_check;
use msggen_header::{extract_enums, EnumDecl};

use crate::commands::absolutize;
use crate::config::MsggenConfig;

/// Scan the header and print the enums it declares.
pub fn run(
    cwd: &Path,
    config: &MsggenConfig,
    export: Option<&str>,
    header: &str,
) -> Result<()> {
    let header_path = absolutize(cwd, Path::new(header));
    let decls = extract_enums(&header_path)
        .with_context(|| format!("scanning {}", header_path.display()))?;
    sanity_check(&decls, &config.generator.known_enums)?;

    match export {
        None | Some("text") => print_text(&decls),
        Some("json") => print_json(&decls)?,
        Some(other) => bail!("unknown export format: '{other}'. Choose: text, json"),
    }

    Ok(())
}

fn print_text(decls: &[EnumDecl]) {
    for decl in decls {
        println!(
            "{} ({}, {} values)",
            decl.name,
            decl.underlying_type,
            decl.values.len()
        );
        for v in &decl.values {
            println!("  {} = {}", v.name, v.value);
        }
    }
}

fn print_json(decls: &[EnumDecl]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(decls)?);
    Ok(())
}
