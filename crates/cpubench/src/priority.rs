//! Best-effort process priority elevation.
//!
//! Benchmark numbers are noisier when the scheduler preempts the workload,
//! so the driver asks for the highest priority and carries on with a warning
//! when the host refuses (non-root processes usually cannot lower their nice
//! value).

use std::io;

/// Raise this process to the highest scheduling priority.
///
/// # Errors
///
/// Returns the OS error when the priority change is refused.
#[cfg(unix)]
#[allow(unsafe_code)]
pub fn raise_priority() -> io::Result<()> {
    // SAFETY: setpriority only reads its scalar arguments.
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, -20) };
    if rc == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// Raise this process to the highest scheduling priority (no-op here).
#[cfg(not(unix))]
pub fn raise_priority() -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_priority_returns_a_result() {
        // Refusal is expected for unprivileged processes; either way the
        // call must not panic.
        let _ = raise_priority();
    }
}
