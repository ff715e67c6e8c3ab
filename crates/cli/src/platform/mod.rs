//! Platform-specific launching of the target program

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::launch;
#[cfg(not(unix))]
pub use windows::launch;
