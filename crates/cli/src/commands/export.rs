use ssm_env_core::{Environment, Error, Result};
use ssm_env_env::{inject, ResolveOptions};
use ssm_env_shell::{is_valid_name, PosixShell, Shell};
use ssm_env_store::ParameterStore;
use std::io::Write;

/// Resolve every reference in `env` and print one export statement per
/// referenced variable, in environment order.
///
/// Destinations are written exactly as they are before a launch, so the
/// exported value of a destination-backed variable is its file path.
pub async fn execute<S, W>(
    env: &Environment,
    store: &S,
    options: ResolveOptions,
    out: &mut W,
) -> Result<()>
where
    S: ParameterStore + ?Sized,
    W: Write,
{
    let injection = inject(env, store, options).await?;
    let shell = PosixShell;

    for (name, value) in injection.values.iter() {
        if !is_valid_name(name) {
            tracing::warn!(variable = %name, "Skipping variable that is not a valid shell name");
            continue;
        }
        writeln!(out, "{}", shell.export(name, value))
            .map_err(|e| Error::file_system("<stdout>", "write to", e))?;
    }

    out.flush()
        .map_err(|e| Error::file_system("<stdout>", "write to", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssm_env_store::MemoryParameterStore;
    use tempfile::TempDir;

    async fn export(env: &Environment, store: &MemoryParameterStore) -> Result<String> {
        let mut out = Vec::new();
        execute(env, store, ResolveOptions::default(), &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_exports_only_references() {
        let env = Environment::from_entries([
            "PATH=/usr/bin",
            "DB_PASSWORD=ssm:///db/password",
            "GREETING=ssm:///greeting",
        ]);
        let store = MemoryParameterStore::new()
            .with_parameter("/db/password", "it's secret")
            .with_parameter("/greeting", "hello world");

        let output = export(&env, &store).await.unwrap();

        assert_eq!(
            output,
            "DB_PASSWORD='it'\"'\"'s secret'; export DB_PASSWORD\n\
             GREETING='hello world'; export GREETING\n"
        );
    }

    #[tokio::test]
    async fn test_exports_destination_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key");
        let env = Environment::from_entries([format!("KEY=ssm:///key?destination={}", path.display())]);
        let store = MemoryParameterStore::new().with_parameter("/key", "k");

        let output = export(&env, &store).await.unwrap();

        assert_eq!(output, format!("KEY='{}'; export KEY\n", path.display()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "k");
    }

    #[tokio::test]
    async fn test_no_references_prints_nothing() {
        let env = Environment::from_entries(["PATH=/usr/bin"]);
        let output = export(&env, &MemoryParameterStore::new()).await.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_shell_names_are_skipped() {
        let env = Environment::from_entries(["my-var=ssm:///a", "OK=ssm:///a"]);
        let store = MemoryParameterStore::new().with_parameter("/a", "1");

        let output = export(&env, &store).await.unwrap();

        assert_eq!(output, "OK='1'; export OK\n");
    }

    #[tokio::test]
    async fn test_failure_prints_nothing() {
        let env = Environment::from_entries(["A=ssm:///a", "B=ssm:///missing"]);
        let store = MemoryParameterStore::new().with_parameter("/a", "1");

        let mut out = Vec::new();
        let result = execute(&env, &store, ResolveOptions::default(), &mut out).await;

        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
