//! Doxygen comment cleaning.
//!
//! The scanner keeps comment text raw, markers included; these helpers strip
//! the markers and surrounding whitespace for rendering. Absent docs come in
//! and go out as empty strings, so the renderer never branches on presence.

/// Marker used for enum-level Doxygen blocks.
const ENUM_MARKER: &str = "//!";

/// Markers used for trailing enumerator Doxygen comments. Headers mix the
/// `///<` and `//!` styles; ordering matters since `//!<` contains `//!`.
const VALUE_MARKERS: [&str; 3] = ["///<", "//!<", "//!"];

/// Strip enum-level Doxygen markers and surrounding whitespace.
pub fn clean_enum_doc(raw: &str) -> String {
    raw.replace(ENUM_MARKER, "").trim().to_string()
}

/// Strip enumerator-level Doxygen markers and surrounding whitespace.
pub fn clean_value_doc(raw: &str) -> String {
    let mut doc = raw.to_string();
    for marker in VALUE_MARKERS {
        doc = doc.replace(marker, "");
    }
    doc.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_doc_marker_stripped() {
        assert_eq!(clean_enum_doc("//! Result type"), "Result type");
        assert_eq!(clean_enum_doc("  //! padded  "), "padded");
    }

    #[test]
    fn enum_doc_multi_line() {
        assert_eq!(
            clean_enum_doc("//! line one\n//! line two"),
            "line one\n line two"
        );
    }

    #[test]
    fn value_doc_markers_stripped() {
        assert_eq!(clean_value_doc("///< ok"), "ok");
        assert_eq!(clean_value_doc("//!< ok"), "ok");
        assert_eq!(clean_value_doc("//!ok"), "ok");
        assert_eq!(clean_value_doc("//! bad"), "bad");
    }

    #[test]
    fn absent_docs_stay_empty() {
        assert_eq!(clean_enum_doc(""), "");
        assert_eq!(clean_value_doc(""), "");
    }

    #[test]
    fn unmarked_text_is_only_trimmed() {
        assert_eq!(clean_value_doc("  plain text  "), "plain text");
    }
}
