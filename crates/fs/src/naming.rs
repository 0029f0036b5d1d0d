//! Base directory naming
//!
//! The base directory name is `<label>-<owner>`, reduced to a single safe
//! path segment: wildcard characters are dropped and anything other than
//! ASCII alphanumerics, `-` and `_` becomes `-`. Dots and separators never
//! survive, so the result can not be `.`, `..` or contain a `/`.

/// Characters removed outright
const STRIPPED: [char; 2] = ['*', '?'];

/// Build the base directory name for a manager label and owner
pub fn base_dir_name(label: &str, owner: &str) -> String {
    format!("{}-{}", label, owner)
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(base_dir_name("tempdir", "suite_a"), "tempdir-suite_a");
    }

    #[test]
    fn test_module_path_owner() {
        assert_eq!(
            base_dir_name("tempdir", "my_crate::tests::Suite"),
            "tempdir-my_crate--tests--Suite"
        );
    }

    #[test]
    fn test_wildcards_are_stripped() {
        assert_eq!(base_dir_name("tempdir", "*Suite?"), "tempdir-Suite");
    }

    #[test]
    fn test_dots_and_separators_replaced() {
        let name = base_dir_name("temp.dir", "../etc/pass wd\\x");
        assert_eq!(name, "temp-dir----etc-pass-wd-x");
        assert!(!name.contains('.'));
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_non_ascii_replaced() {
        assert_eq!(base_dir_name("t", "süite"), "t-s-ite");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(base_dir_name("a", "b"), base_dir_name("a", "b"));
        assert_ne!(base_dir_name("a", "b"), base_dir_name("a", "c"));
    }
}
