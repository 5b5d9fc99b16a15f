//! Hand-written C++ enum scanner.
//!
//! Handles plain and scoped enum definitions with an optional underlying
//! type, preceding `//!` / `///` Doxygen blocks, and trailing `///<`
//! enumerator comments. Does NOT handle the preprocessor, nested types,
//! or constant expressions in initializers.

use std::path::Path;

use crate::decl::{EnumDecl, ValueDecl};
use crate::error::{HeaderError, Result};

/// Scan a header file for enum definitions.
pub fn extract_enums(path: &Path) -> Result<Vec<EnumDecl>> {
    let src = std::fs::read_to_string(path)?;
    parse_header(&src)
}

/// Scan header source text for enum definitions.
///
/// Returns the definitions in source order. A header without any enums
/// yields an empty list, not an error.
pub fn parse_header(src: &str) -> Result<Vec<EnumDecl>> {
    let lines: Vec<&str> = src.lines().collect();
    let mut decls = Vec::new();
    let mut pending_doc: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.starts_with("//!") || line.starts_with("///") {
            pending_doc.push(line);
            i += 1;
            continue;
        }

        if is_enum_head(line) {
            let doc = pending_doc.join("\n");
            pending_doc.clear();
            let (decl, next) = parse_enum(&lines, i, doc)?;
            if let Some(decl) = decl {
                decls.push(decl);
            }
            i = next;
            continue;
        }

        // Doc blocks only attach when immediately preceding a definition.
        pending_doc.clear();
        i += 1;
    }

    Ok(decls)
}

/// Whether a trimmed line begins an enum declaration.
fn is_enum_head(line: &str) -> bool {
    match line.strip_prefix("enum") {
        Some(rest) => {
            rest.is_empty()
                || rest.starts_with(char::is_whitespace)
                || rest.starts_with('{')
                || rest.starts_with(':')
        }
        None => false,
    }
}

/// Parse one enum starting at `lines[start]`.
///
/// Returns `None` for a forward declaration (head terminated by `;` before
/// any body). On success also returns the index of the first line after the
/// definition.
fn parse_enum(lines: &[&str], start: usize, doc: String) -> Result<(Option<EnumDecl>, usize)> {
    // Accumulate the head until the opening brace, which may sit on a
    // later line than the `enum` keyword.
    let mut head = String::new();
    let mut i = start;
    let body_rest;
    loop {
        if i >= lines.len() {
            return Err(HeaderError::Syntax {
                line: start + 1,
                detail: "enum declaration without body".to_string(),
            });
        }
        let line = lines[i].trim();
        let brace = line.find('{');
        if let Some(semi) = line.find(';') {
            if brace.map_or(true, |b| semi < b) {
                return Ok((None, i + 1));
            }
        }
        if let Some(b) = brace {
            head.push(' ');
            head.push_str(&line[..b]);
            body_rest = line[b + 1..].to_string();
            break;
        }
        head.push(' ');
        head.push_str(line);
        i += 1;
    }

    let (name, underlying_type) = parse_head(&head, start + 1)?;

    // Collect body text until the closing brace, keeping line numbers for
    // error reporting.
    let mut body_lines: Vec<(usize, String)> = Vec::new();
    let mut cur = body_rest;
    loop {
        if let Some(close) = cur.find('}') {
            body_lines.push((i + 1, cur[..close].to_string()));
            break;
        }
        body_lines.push((i + 1, cur));
        i += 1;
        if i >= lines.len() {
            return Err(HeaderError::Syntax {
                line: start + 1,
                detail: format!("unterminated enum body for '{name}'"),
            });
        }
        cur = lines[i].to_string();
    }

    let values = parse_body(&body_lines)?;

    Ok((
        Some(EnumDecl {
            name,
            underlying_type,
            doc,
            values,
        }),
        i + 1,
    ))
}

/// Parse the head text (everything between `enum` and `{`) into the enum
/// name and underlying type token.
fn parse_head(head: &str, line: usize) -> Result<(String, String)> {
    let head = head.trim();
    let (name_part, underlying) = match head.split_once(':') {
        Some((before, after)) => (before.trim(), after.trim()),
        None => (head, ""),
    };

    let mut toks = name_part.split_whitespace();
    if toks.next() != Some("enum") {
        return Err(HeaderError::Syntax {
            line,
            detail: "expected 'enum'".to_string(),
        });
    }
    let mut name = toks.next();
    if matches!(name, Some("class") | Some("struct")) {
        name = toks.next();
    }
    let name = match name {
        Some(n) if is_ident(n) => n.to_string(),
        Some(n) => {
            return Err(HeaderError::Syntax {
                line,
                detail: format!("invalid enum name '{n}'"),
            });
        }
        None => {
            return Err(HeaderError::Syntax {
                line,
                detail: "anonymous enums are not supported".to_string(),
            });
        }
    };
    if let Some(extra) = toks.next() {
        return Err(HeaderError::Syntax {
            line,
            detail: format!("unexpected token '{extra}' after enum name '{name}'"),
        });
    }

    let underlying = if underlying.is_empty() {
        "int".to_string()
    } else {
        underlying.to_string()
    };
    Ok((name, underlying))
}

/// Parse the enumerators between `{` and `}`.
fn parse_body(body_lines: &[(usize, String)]) -> Result<Vec<ValueDecl>> {
    let mut values: Vec<ValueDecl> = Vec::new();
    // Counter for implicit enumerator values; cleared after a non-integer
    // initializer, since the scanner cannot evaluate expressions.
    let mut next_value: Option<i64> = Some(0);

    for (line_no, text) in body_lines {
        // Split off a trailing Doxygen comment, if any.
        let (code, doc) = if let Some(pos) = text.find("///<") {
            (&text[..pos], text[pos..].trim().to_string())
        } else if let Some(pos) = text.find("//!<") {
            (&text[..pos], text[pos..].trim().to_string())
        } else if let Some(pos) = text.find("//") {
            (&text[..pos], String::new())
        } else {
            (text.as_str(), String::new())
        };

        let mut last_on_line = None;
        for piece in code.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            values.push(parse_enumerator(piece, *line_no, &mut next_value)?);
            last_on_line = Some(values.len() - 1);
        }

        // A trailing comment documents the last enumerator on its line.
        if !doc.is_empty() {
            if let Some(idx) = last_on_line {
                values[idx].doc = doc;
            }
        }
    }

    Ok(values)
}

/// Parse a single `NAME` or `NAME = literal` enumerator.
fn parse_enumerator(
    piece: &str,
    line: usize,
    next_value: &mut Option<i64>,
) -> Result<ValueDecl> {
    let (name, value) = match piece.split_once('=') {
        Some((name, init)) => {
            let init = init.trim();
            if init.is_empty() {
                return Err(HeaderError::Syntax {
                    line,
                    detail: format!("missing initializer for '{}'", name.trim()),
                });
            }
            *next_value = parse_int_literal(init).map(|v| v + 1);
            (name.trim(), init.to_string())
        }
        None => {
            let v = next_value.ok_or_else(|| HeaderError::Syntax {
                line,
                detail: format!(
                    "cannot derive implicit value for '{piece}' after a non-integer initializer"
                ),
            })?;
            *next_value = Some(v + 1);
            (piece, v.to_string())
        }
    };

    if !is_ident(name) {
        return Err(HeaderError::Syntax {
            line,
            detail: format!("invalid enumerator name '{name}'"),
        });
    }

    Ok(ValueDecl {
        name: name.to_string(),
        doc: String::new(),
        value,
    })
}

/// Parse a decimal or hex integer literal; `None` for anything else.
fn parse_int_literal(s: &str) -> Option<i64> {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest.trim()),
        None => (false, s.strip_prefix('+').unwrap_or(s).trim()),
    };
    let value = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };
    Some(if neg { -value } else { value })
}

/// Whether `s` is a C++ identifier.
fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
