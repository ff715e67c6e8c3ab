use crate::platform;
use ssm_env_core::{Environment, Error, Result};
use ssm_env_env::{inject, ResolveOptions};
use ssm_env_store::ParameterStore;
use std::path::PathBuf;

/// Resolve every reference in `env` and replace this process with `command`.
///
/// The program is looked up on `PATH` before anything is fetched, so a typo
/// fails without touching the store or writing any destination.
pub async fn execute<S>(
    env: &Environment,
    store: &S,
    options: ResolveOptions,
    command: &[String],
) -> Result<()>
where
    S: ParameterStore + ?Sized,
{
    let (name, args) = command
        .split_first()
        .ok_or_else(|| Error::configuration("no command to run"))?;
    let program = find_program(name, args)?;

    let injection = inject(env, store, options).await?;

    match platform::launch(&program, name, args, &injection.environment)? {}
}

fn find_program(name: &str, args: &[String]) -> Result<PathBuf> {
    which::which(name).map_err(|e| {
        Error::command_execution(name, args.to_vec(), format!("could not find program: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssm_env_store::MemoryParameterStore;
    use tempfile::TempDir;

    #[cfg(unix)]
    #[test]
    fn test_find_program_on_path() {
        assert!(find_program("sh", &[]).unwrap().is_absolute());
    }

    #[tokio::test]
    async fn test_unknown_program_fails_before_resolving() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("never-written");
        let env = Environment::from_entries([format!("KEY=ssm:///key?destination={}", path.display())]);
        let store = MemoryParameterStore::new().with_parameter("/key", "k");
        let command = vec!["ssm-env-no-such-program".to_string(), "--flag".to_string()];

        let err = execute(&env, &store, ResolveOptions::default(), &command)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CommandExecution { .. }));
        assert!(err.to_string().contains("could not find program"));
        assert!(store.calls().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_empty_command_fails() {
        let env = Environment::from_entries(["A=1"]);
        let err = execute(&env, &MemoryParameterStore::new(), ResolveOptions::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
