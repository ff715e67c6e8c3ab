//! Permission bits for destination files

use std::fmt;

/// Largest mask accepted: permission bits plus setuid, setgid and sticky
const MAX_MODE: u32 = 0o7777;

/// A Unix permission mask given in octal, e.g. `600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Parse an octal string such as `600` or `0640`
    pub fn from_octal(text: &str) -> Result<Self, String> {
        if text.is_empty() || !text.bytes().all(|b| matches!(b, b'0'..=b'7')) {
            return Err(format!("'{text}' is not an octal number"));
        }
        let bits = u32::from_str_radix(text, 8)
            .map_err(|e| format!("'{text}' is not an octal number: {e}"))?;
        if bits > MAX_MODE {
            return Err(format!("'{text}' is larger than {MAX_MODE:o}"));
        }
        Ok(Self(bits))
    }

    /// The raw permission bits
    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Zero means "keep the mode the file was created with"
    #[must_use]
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_octal() {
        assert_eq!(FileMode::from_octal("600").unwrap().bits(), 0o600);
        assert_eq!(FileMode::from_octal("0755").unwrap().bits(), 0o755);
        assert!(FileMode::from_octal("0").unwrap().is_unset());
        assert_eq!(FileMode::from_octal("644").unwrap().to_string(), "0644");
    }

    #[test]
    fn test_from_octal_rejects_garbage() {
        assert!(FileMode::from_octal("rw-------").is_err());
        assert!(FileMode::from_octal("800").is_err());
        assert!(FileMode::from_octal("").is_err());
        assert!(FileMode::from_octal("17777").is_err());
        assert!(FileMode::from_octal("-600").is_err());
        assert!(FileMode::from_octal("+600").is_err());
        assert!(FileMode::from_octal(" 600").is_err());
        assert!(FileMode::from_octal("0o600").is_err());
    }
}
