//! Enumerator name case conversion.

/// Convert an upper-camel-case identifier to lower snake case.
///
/// A separator is inserted before every uppercase letter that is not the
/// first character, so consecutive capitals split into single-letter
/// segments: `ABCFoo` becomes `a_b_c_foo`, not `abc_foo`. Previously
/// generated message files depend on this exact splitting; keep it.
pub fn to_snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for (i, c) in camel.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Derive a message constant name from an enumerator name.
pub fn constant_name(camel: &str) -> String {
    to_snake_case(camel).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_snake() {
        assert_eq!(to_snake_case("LikeThis"), "like_this");
        assert_eq!(to_snake_case("Working"), "working");
        assert_eq!(to_snake_case("ErrorInvalidInput"), "error_invalid_input");
    }

    #[test]
    fn acronyms_split_per_letter() {
        assert_eq!(to_snake_case("ABCFoo"), "a_b_c_foo");
        assert_eq!(to_snake_case("OTGError"), "o_t_g_error");
    }

    #[test]
    fn digits_do_not_split() {
        assert_eq!(to_snake_case("Vel2Pos"), "vel2_pos");
    }

    #[test]
    fn lower_snake_input_is_a_fixpoint() {
        assert_eq!(to_snake_case("like_this"), "like_this");
    }

    #[test]
    fn constant_names() {
        assert_eq!(constant_name("Working"), "WORKING");
        assert_eq!(constant_name("ErrorInvalidInput"), "ERROR_INVALID_INPUT");
        assert_eq!(constant_name("ABCFoo"), "A_B_C_FOO");
    }

    #[test]
    fn reapplying_via_snake_form_is_stable() {
        for name in ["LikeThis", "ABCFoo", "Working", "ErrorInvalidInput"] {
            assert_eq!(constant_name(&to_snake_case(name)), constant_name(name));
        }
    }
}
