use ssm_env_core::{Error, Result};
use ssm_env_store::ParameterStore;
use std::io::Write;

/// Print the decrypted value of parameter `name` without a trailing newline
pub async fn execute<S, W>(store: &S, name: &str, out: &mut W) -> Result<()>
where
    S: ParameterStore + ?Sized,
    W: Write,
{
    let value = store
        .get_parameter(name)
        .await
        .map_err(|e| Error::parameter_lookup(name, e))?;

    write!(out, "{value}")
        .and_then(|()| out.flush())
        .map_err(|e| Error::file_system("<stdout>", "write to", e))
}
