//! Shell output for ssm-env
//!
//! Renders resolved variables as statements a shell can `eval` or `source`.

pub mod posix;

pub use posix::*;

pub trait Shell {
    fn export(&self, key: &str, value: &str) -> String;

    fn escape(&self, s: &str) -> String;
}

/// Whether `name` can be assigned to in a POSIX shell
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("DB_PASSWORD"));
        assert!(is_valid_name("_x1"));
        assert!(!is_valid_name("1X"));
        assert!(!is_valid_name("A-B"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A B"));
    }
}
