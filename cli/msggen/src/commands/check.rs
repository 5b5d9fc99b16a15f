//! `msggen check`: verify the msg files on disk match the header.
//!
//! Intended as a CI guard: regenerates everything in memory and compares
//! with what is checked in, ignoring the generation stamp.

use std::path::Path;

use anyhow::{bail, Context, Result};

use msggen_emit::{msg_spec, render, sanity_check};
use msggen_header::extract_enums;

use crate::commands::absolutize;
use crate::config::MsggenConfig;

/// Compare the on-disk message files against a fresh in-memory generation.
///
/// Fails if any file is missing or stale. The stamp line is excluded from
/// the comparison, so a plain regeneration never shows up as a difference.
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

    let source_file = header_path.display().to_string();
    let mut out_of_date = Vec::new();

    for decl in &decls {
        let spec = msg_spec(decl, &config.generator.reserved)?;
        let path = msg_dir.join(&spec.file_name);
        let expected = render(&spec, &source_file, "<stamp>");

        match std::fs::read_to_string(&path) {
            Ok(existing) if same_modulo_stamp(&existing, &expected) => {
                println!("{}: up to date", spec.file_name);
            }
            Ok(_) => {
                println!("{}: stale", spec.file_name);
                out_of_date.push(spec.file_name.clone());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!("{}: missing", spec.file_name);
                out_of_date.push(spec.file_name.clone());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        }
    }

    if !out_of_date.is_empty() {
        bail!(
            "{} message file(s) out of date: {}",
            out_of_date.len(),
            out_of_date.join(", ")
        );
    }

    println!("All {} message files up to date", decls.len());
    Ok(())
}

/// Compare two renderings, ignoring the line carrying the generation stamp.
fn same_modulo_stamp(a: &str, b: &str) -> bool {
    lines_without_stamp(a) == lines_without_stamp(b)
}

fn lines_without_stamp(s: &str) -> Vec<&str> {
    s.lines()
        .filter(|l| !l.starts_with("# Auto-generated on "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate;

    const SAMPLE: &str = "\
//! Result type
enum Result {
    Working = 0, ///< ok
    Error = -100, ///< bad
};
";

    fn project(header: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("msg")).unwrap();
        std::fs::write(dir.path().join("input_parameter.hpp"), header).unwrap();
        dir
    }

    #[test]
    fn check_passes_right_after_generate() {
        let dir = project(SAMPLE);
        let config = MsggenConfig::default();

        generate::run(dir.path(), &config, None, "input_parameter.hpp").unwrap();
        run(dir.path(), &config, None, "input_parameter.hpp").unwrap();
    }

    #[test]
    fn check_ignores_stamp_differences() {
        let dir = project(SAMPLE);
        let config = MsggenConfig::default();
        generate::run(dir.path(), &config, None, "input_parameter.hpp").unwrap();

        // Rewrite the file with a different stamp but identical content.
        let path = dir.path().join("msg/Result.msg");
        let content = std::fs::read_to_string(&path).unwrap();
        let restamped: String = content
            .lines()
            .map(|l| {
                if l.starts_with("# Auto-generated on ") {
                    "# Auto-generated on 1999-01-01T00:00:00Z from:".to_string()
                } else {
                    l.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
            + "\n";
        std::fs::write(&path, restamped).unwrap();

        run(dir.path(), &config, None, "input_parameter.hpp").unwrap();
    }

    #[test]
    fn check_detects_stale_files() {
        let dir = project(SAMPLE);
        let config = MsggenConfig::default();
        generate::run(dir.path(), &config, None, "input_parameter.hpp").unwrap();

        // The header gains an enumerator; the files on disk no longer match.
        let updated = "\
//! Result type
enum Result {
    Working = 0, ///< ok
    Finished = 1, ///< done
    Error = -100, ///< bad
};
";
        std::fs::write(dir.path().join("input_parameter.hpp"), updated).unwrap();

        let err = run(dir.path(), &config, None, "input_parameter.hpp").unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn check_detects_missing_files() {
        let dir = project(SAMPLE);
        let config = MsggenConfig::default();

        let err = run(dir.path(), &config, None, "input_parameter.hpp").unwrap_err();
        assert!(err.to_string().contains("Result.msg"));
    }

    #[test]
    fn stamp_line_filter() {
        let a = "# Auto-generated on X from:\nbody\n";
        let b = "# Auto-generated on Y from:\nbody\n";
        assert!(same_modulo_stamp(a, b));
        assert!(!same_modulo_stamp(a, "# Auto-generated on X from:\nother\n"));
    }
}
