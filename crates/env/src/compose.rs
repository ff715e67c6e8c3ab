//! Composing the resolved environment

use crate::reference::Reference;
use ssm_env_core::{split_entry, Environment, ResolvedValues};

/// Replace the value of every destination-backed variable with its path.
///
/// Runs after [`write_destinations`](crate::write_destinations) so the secret
/// is on disk and only the path reaches the process environment.
pub fn substitute_destinations(batch: &[Reference], values: &mut ResolvedValues) {
    for reference in batch {
        if let Some(destination) = reference.destination() {
            values.insert(reference.variable(), destination.to_string_lossy());
        }
    }
}

/// Rebuild `original` with resolved values substituted in place.
///
/// Entries whose name was not resolved are copied byte for byte, and every
/// entry keeps its position.
#[must_use]
pub fn compose(original: &Environment, values: &ResolvedValues) -> Environment {
    original
        .entries()
        .map(|entry| {
            let (name, _) = split_entry(entry);
            let resolved = std::str::from_utf8(name)
                .ok()
                .and_then(|name| values.get(name).map(|value| (name, value)));
            match resolved {
                Some((name, value)) => format!("{name}={value}").into_bytes(),
                None => entry.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_entries_are_identical() {
        let original = Environment::from_entries([
            "PATH=/usr/bin:/bin",
            "EMPTY=",
            "ODD",
            "EQ=a=b",
            "TOKEN=ssm:///token",
            "LANG=C.UTF-8",
        ]);
        let values: ResolvedValues = [("TOKEN", "s3cr3t")].into_iter().collect();

        let composed = compose(&original, &values);
        assert_eq!(
            composed,
            Environment::from_entries([
                "PATH=/usr/bin:/bin",
                "EMPTY=",
                "ODD",
                "EQ=a=b",
                "TOKEN=s3cr3t",
                "LANG=C.UTF-8",
            ])
        );
    }

    #[test]
    fn test_non_utf8_entries_are_copied_verbatim() {
        let original = Environment::from_entries([
            &b"RAW=a\xffb"[..],
            &b"\xfe=x"[..],
            &b"TOKEN=ssm:///token"[..],
        ]);
        let values: ResolvedValues = [("TOKEN", "s3cr3t")].into_iter().collect();

        let composed = compose(&original, &values);
        let entries: Vec<_> = composed.entries().collect();
        assert_eq!(
            entries,
            vec![&b"RAW=a\xffb"[..], &b"\xfe=x"[..], &b"TOKEN=s3cr3t"[..]]
        );
    }

    #[test]
    fn test_nothing_resolved_is_identity() {
        let original = Environment::from_entries(["A=1", "B=ssm-lookalike", "C=3"]);
        assert_eq!(compose(&original, &ResolvedValues::new()), original);
    }

    #[test]
    fn test_substitute_destinations() {
        let env = Environment::new();
        let batch = [
            Reference::parse("KEY", "ssm:///key?destination=/tmp/key", &env).unwrap(),
            Reference::parse("TOKEN", "ssm:///token", &env).unwrap(),
        ];
        let mut values: ResolvedValues =
            [("KEY", "-----BEGIN KEY-----"), ("TOKEN", "t")].into_iter().collect();

        substitute_destinations(&batch, &mut values);
        assert_eq!(values.get("KEY"), Some("/tmp/key"));
        assert_eq!(values.get("TOKEN"), Some("t"));
    }
}
