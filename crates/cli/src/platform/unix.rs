use ssm_env_core::{Environment, Error, Result};
use std::convert::Infallible;
use std::ffi::{CString, NulError};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

/// Replace the current process image with `program`.
///
/// The child sees `arg0` as its own name and exactly the entries of
/// `environment`, in order and byte for byte. Only returns when the exec
/// itself fails.
pub fn launch(
    program: &Path,
    arg0: &str,
    args: &[String],
    environment: &Environment,
) -> Result<Infallible> {
    let fail = |message: String| Error::command_execution(arg0, args.to_vec(), message);

    let path = CString::new(program.as_os_str().as_bytes())
        .map_err(|e| fail(format!("invalid program path: {e}")))?;
    let argv = std::iter::once(arg0).chain(args.iter().map(String::as_str));
    let argv = to_c_strings(argv.map(str::as_bytes))
        .map_err(|e| fail(format!("invalid argument: {e}")))?;
    let envp = to_c_strings(environment.entries())
        .map_err(|e| fail(format!("invalid environment entry: {e}")))?;

    let argv_ptrs = null_terminated(&argv);
    let envp_ptrs = null_terminated(&envp);

    tracing::debug!(program = %program.display(), "Replacing process");

    // SAFETY: every pointer refers to a live, NUL-terminated CString and both
    // arrays end with a null pointer.
    unsafe {
        libc::execve(path.as_ptr(), argv_ptrs.as_ptr(), envp_ptrs.as_ptr());
    }

    Err(fail(format!(
        "failed to exec {}: {}",
        program.display(),
        io::Error::last_os_error()
    )))
}

fn to_c_strings<'a, I>(items: I) -> std::result::Result<Vec<CString>, NulError>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    items.into_iter().map(CString::new).collect()
}

fn null_terminated(strings: &[CString]) -> Vec<*const libc::c_char> {
    strings
        .iter()
        .map(|s| s.as_ptr())
        .chain(std::iter::once(ptr::null()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_in_environment_is_rejected() {
        let env = Environment::from_entries([&b"A=x\0y"[..]]);
        let err = launch(Path::new("/bin/sh"), "sh", &[], &env).unwrap_err();
        assert!(matches!(err, Error::CommandExecution { .. }));
        assert!(err.to_string().contains("invalid environment entry"));
    }

    #[test]
    fn test_null_terminated() {
        let strings = to_c_strings([&b"A=1"[..], &b"B=2"[..]]).unwrap();
        let ptrs = null_terminated(&strings);
        assert_eq!(ptrs.len(), 3);
        assert!(ptrs[2].is_null());
    }
}
