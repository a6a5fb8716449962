//! Shell-command invocation with captured output.

use crate::{Error, Result};
use std::process::Command;

/// Run a command line through the platform shell and return its stdout.
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows, so the usual shell
/// conveniences (pipes, globs, `$VAR`) work. Stdout is decoded as UTF-8
/// with lossy replacement. A non-zero exit status fails with
/// [`Error::CommandFailed`] carrying the status and captured stderr.
///
/// # Example
///
/// ```rust,ignore
/// let out = invoke_command("echo TEST")?;
/// assert!(out.contains("TEST"));
/// ```
pub fn invoke_command(command: &str) -> Result<String> {
    #[cfg(not(windows))]
    let output = Command::new("sh").arg("-c").arg(command).output()?;
    #[cfg(windows)]
    let output = Command::new("cmd").arg("/C").arg(command).output()?;

    if !output.status.success() {
        return Err(Error::CommandFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
