//! Path helpers

use std::borrow::Cow;
use std::fmt;

/// Why `~` expansion failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeExpansionError {
    /// `~name/...`; only the current user's home can be expanded
    UserSpecificHome,
    /// No home directory is known for the current user
    UnknownHome,
}

impl fmt::Display for HomeExpansionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeExpansionError::UserSpecificHome => {
                f.write_str("cannot expand user-specific home dir")
            }
            HomeExpansionError::UnknownHome => f.write_str("cannot determine home dir"),
        }
    }
}

impl std::error::Error for HomeExpansionError {}

/// Expand a leading `~` or `~/` to the home directory.
///
/// `home` is consulted first (typically `$HOME` from an environment snapshot)
/// and the platform's notion of the home directory is used when it is empty.
/// Paths that do not start with `~` are returned unchanged.
pub fn expand_home<'a>(
    path: &'a str,
    home: Option<&str>,
) -> Result<Cow<'a, str>, HomeExpansionError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(Cow::Borrowed(path));
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return Err(HomeExpansionError::UserSpecificHome);
    }

    let home_dir = match home.filter(|h| !h.is_empty()) {
        Some(home) => home.to_string(),
        None => dirs::home_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .ok_or(HomeExpansionError::UnknownHome)?,
    };

    Ok(shellexpand::tilde_with_context(path, || Some(home_dir)))
}
