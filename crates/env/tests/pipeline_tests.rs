//! End-to-end tests of the injection pipeline against an in-memory store

use ssm_env_core::{Environment, Error, ParseErrorKind};
use ssm_env_env::{inject, ResolveOptions};
use ssm_env_store::MemoryParameterStore;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_references_replaced_in_place() {
    let env = Environment::from_entries([
        "PATH=/usr/bin",
        "DB_PASSWORD=ssm:///app/db/password",
        "USER=app",
        "API_KEY=ssm:///app/api-key?template=Bearer {{ value }}",
        "LANG=C",
    ]);
    let store = MemoryParameterStore::new()
        .with_parameter("/app/db/password", "hunter2")
        .with_parameter("/app/api-key", "k3y");

    let injection = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap();

    assert_eq!(injection.references.len(), 2);
    assert_eq!(
        injection.environment,
        Environment::from_entries([
            "PATH=/usr/bin",
            "DB_PASSWORD=hunter2",
            "USER=app",
            "API_KEY=Bearer k3y",
            "LANG=C",
        ])
    );
}

#[tokio::test]
async fn test_destination_gets_secret_and_environment_gets_path() {
    let home = TempDir::new().unwrap();
    let env = Environment::from_entries([
        format!("HOME={}", home.path().display()),
        "PRIVATE_KEY=ssm:///ssh/key?destination=~/.id_rsa&chmod=600&template=key:{{ value }}"
            .to_string(),
    ]);
    let store = MemoryParameterStore::new().with_parameter("/ssh/key", "-----BEGIN-----");

    let injection = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap();

    let key_path = home.path().join(".id_rsa");
    assert_eq!(fs::read_to_string(&key_path).unwrap(), "key:-----BEGIN-----");
    assert_eq!(
        injection.environment.get("PRIVATE_KEY"),
        Some(key_path.to_string_lossy().as_ref())
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&key_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn test_missing_parameter_falls_back_to_existing_destination() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("f");
    fs::write(&path, "C").unwrap();

    let env = Environment::from_entries([format!("X=ssm:///x?destination={}", path.display())]);
    let store = MemoryParameterStore::new();

    let injection = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "C");
    assert_eq!(
        injection.environment.get("X"),
        Some(path.to_string_lossy().as_ref())
    );
}

#[tokio::test]
async fn test_one_bad_reference_fails_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never-written");
    let env = Environment::from_entries([
        format!("GOOD=ssm:///good?destination={}", path.display()),
        "BAD=ssm://host/bad".to_string(),
    ]);
    let store = MemoryParameterStore::new().with_parameter("/good", "g");

    let err = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.parse_kind(), Some(ParseErrorKind::HostNotAllowed));
    assert_eq!(err.variable(), Some("BAD"));
    assert!(store.calls().is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_resolution_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never-written");
    let env = Environment::from_entries([
        format!("GOOD=ssm:///good?destination={}", path.display()),
        "MISSING=ssm:///missing".to_string(),
    ]);
    let store = MemoryParameterStore::new().with_parameter("/good", "g");

    let err = inject(&env, &store, ResolveOptions { verbose: true })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NoDefault { .. }));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_no_references_is_a_no_op() {
    let env = Environment::from_entries(["A=1", "B=ssmish", "C="]);
    let store = MemoryParameterStore::new();

    let injection = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap();

    assert!(injection.references.is_empty());
    assert!(injection.values.is_empty());
    assert_eq!(injection.environment, env);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_reference_built_from_other_variables() {
    let dir = TempDir::new().unwrap();
    let env = Environment::from_entries([
        "STAGE=prod".to_string(),
        format!("SECRETS_DIR={}", dir.path().display()),
        "TLS_KEY=ssm:///$STAGE/tls/key?destination=${SECRETS_DIR}/tls.key".to_string(),
    ]);
    let store = MemoryParameterStore::new().with_parameter("/prod/tls/key", "tls-secret");

    let injection = inject(&env, &store, ResolveOptions::default())
        .await
        .unwrap();

    let key_path = dir.path().join("tls.key");
    assert_eq!(store.calls(), vec!["/prod/tls/key"]);
    assert_eq!(fs::read_to_string(&key_path).unwrap(), "tls-secret");
    assert_eq!(injection.environment.get("STAGE"), Some("prod"));
}
