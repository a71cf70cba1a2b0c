//! Single foreground child supervision.
//!
//! The server child inherits the supervisor's stdout/stderr so its logs
//! appear live. While the supervisor blocks on `wait()`, an interrupt it
//! receives is forwarded to the child as SIGINT — a cooperative shutdown
//! request, not a kill — and the supervisor keeps waiting for the child's
//! natural exit. Handler registration is scoped to the wait: installed after
//! a successful spawn, restored when the wait completes.

use crate::error::{CairnError, Result};
use std::process::{Command, Stdio};

/// Spawn the child and block until it exits.
///
/// Returns `Ok(())` whatever the child's own exit code; the code is logged
/// at debug level for diagnostics. The only error path is failing to spawn.
pub fn supervise(mut command: Command) -> Result<()> {
    command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|source| CairnError::SpawnFailed {
        command: render(&command),
        source,
    })?;

    let _forwarder = interrupt::Forwarder::install(child.id());

    let status = child.wait()?;
    tracing::debug!(code = ?status.code(), "server exited");

    Ok(())
}

/// Human-readable rendering of a command line, for error messages.
fn render(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(
        command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

#[cfg(unix)]
mod interrupt {
    use std::sync::atomic::{AtomicI32, Ordering};

    /// Pid of the supervised child, 0 when none is running. Written before
    /// handler installation and restored after the wait completes, so the
    /// handler only ever sees a live pid.
    static CHILD_PID: AtomicI32 = AtomicI32::new(0);

    extern "C" fn forward_to_child(_signal: libc::c_int) {
        let pid = CHILD_PID.load(Ordering::SeqCst);
        if pid > 0 {
            // Async-signal-safe: kill(2) only.
            unsafe { libc::kill(pid, libc::SIGINT) };
        }
    }

    /// Scoped SIGINT forwarder. Restores the previous disposition and pid
    /// on drop, so nested or overlapping registrations unwind cleanly.
    pub struct Forwarder {
        previous: libc::sighandler_t,
        previous_pid: i32,
    }

    impl Forwarder {
        pub fn install(child_pid: u32) -> Self {
            let previous_pid = CHILD_PID.swap(child_pid as i32, Ordering::SeqCst);
            let previous =
                unsafe { libc::signal(libc::SIGINT, forward_to_child as libc::sighandler_t) };
            Self {
                previous,
                previous_pid,
            }
        }
    }

    impl Drop for Forwarder {
        fn drop(&mut self) {
            unsafe { libc::signal(libc::SIGINT, self.previous) };
            CHILD_PID.store(self.previous_pid, Ordering::SeqCst);
        }
    }
}

#[cfg(not(unix))]
mod interrupt {
    /// On Windows the console delivers Ctrl+C to the whole process group,
    /// so the child already receives the interrupt without forwarding.
    pub struct Forwarder;

    impl Forwarder {
        pub fn install(_child_pid: u32) -> Self {
            Self
        }
    }
}
