use super::Shell;

/// `sh`-compatible output, also valid for bash and zsh
pub struct PosixShell;

impl Shell for PosixShell {
    fn export(&self, key: &str, value: &str) -> String {
        format!("{key}={}; export {key}", self.escape(value))
    }

    fn escape(&self, s: &str) -> String {
        escape_single_quoted(s)
    }
}

/// Quote `s` in single quotes; an embedded `'` closes the quote, adds a
/// double-quoted `'` and reopens it.
pub fn escape_single_quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');

    for c in s.chars() {
        if c == '\'' {
            result.push_str("'\"'\"'");
        } else {
            result.push(c);
        }
    }

    result.push('\'');
    result
}
