//! Project name sanitization.

/// Normalize a user-supplied project name into a filesystem-safe
/// identifier: every whitespace character becomes `_`, then leading and
/// trailing whitespace is trimmed.
///
/// Total and idempotent. Empty input yields an empty output; callers
/// that need a non-empty project identity must guard for it (see
/// [`super::ProjectSpec::new`]).
pub fn sanitize_project_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    replaced.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(sanitize_project_name("My Game"), "My_Game");
    }

    #[test]
    fn all_whitespace_kinds_are_replaced() {
        let out = sanitize_project_name("A\tB\nC D");
        assert_eq!(out, "A_B_C_D");
        assert!(!out.chars().any(char::is_whitespace));
    }

    #[test]
    fn boundary_whitespace_leaves_no_whitespace() {
        let out = sanitize_project_name("  My Game \n");
        assert!(!out.chars().any(char::is_whitespace));
        assert_eq!(out.trim(), out);
    }

    #[test]
    fn clean_names_are_identity() {
        for name in ["MyGame", "Shooter2", "a_b_c"] {
            assert_eq!(sanitize_project_name(name), name);
        }
    }

    #[test]
    fn idempotent() {
        for raw in ["My Game", " padded ", "\ttabs\t", "", "clean"] {
            let once = sanitize_project_name(raw);
            assert_eq!(sanitize_project_name(&once), once);
        }
    }

    #[test]
    fn empty_input_is_allowed() {
        assert_eq!(sanitize_project_name(""), "");
    }
}
