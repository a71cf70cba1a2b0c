//! Mock toolchain for tests.

use super::toolchain::{Toolchain, INTERPRETER};
use crate::error::{CairnError, Result};
use crate::shell::CommandResult;
use std::cell::RefCell;
use std::time::Duration;

/// Toolchain whose outcomes are scripted and whose calls are recorded.
///
/// Defaults to a healthy system: parseable interpreter version, manager on
/// the path, setup commands succeeding, server exiting cleanly.
#[derive(Debug)]
pub struct MockToolchain {
    version_output: String,
    version_exit: i32,
    interpreter_missing: bool,
    manager_present: bool,
    install_exit: i32,
    resolve_exit: i32,
    calls: RefCell<Vec<&'static str>>,
}

impl Default for MockToolchain {
    fn default() -> Self {
        Self {
            version_output: "ruby 2.1.0p0 (2013-12-25 revision 44422) [x86_64-linux]".to_string(),
            version_exit: 0,
            interpreter_missing: false,
            manager_present: true,
            install_exit: 0,
            resolve_exit: 0,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the version probe's stdout.
    pub fn with_version_output(mut self, output: &str) -> Self {
        self.version_output = output.to_string();
        self
    }

    /// Script the version probe's exit code.
    pub fn with_version_exit(mut self, code: i32) -> Self {
        self.version_exit = code;
        self
    }

    /// Make the interpreter unspawnable (not found at all).
    pub fn with_missing_interpreter(mut self) -> Self {
        self.interpreter_missing = true;
        self
    }

    /// Script the manager presence probe.
    pub fn with_manager_present(mut self, present: bool) -> Self {
        self.manager_present = present;
        self
    }

    /// Script the install command's exit code.
    pub fn with_install_exit(mut self, code: i32) -> Self {
        self.install_exit = code;
        self
    }

    /// Script the dependency-resolution command's exit code.
    pub fn with_resolve_exit(mut self, code: i32) -> Self {
        self.resolve_exit = code;
        self
    }

    /// Names of the trait methods invoked, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    fn result(exit: i32, stdout: &str) -> CommandResult {
        CommandResult::new(Some(exit), stdout.to_string(), Duration::from_millis(1))
    }
}

impl Toolchain for MockToolchain {
    fn interpreter_version(&self) -> Result<CommandResult> {
        self.record("interpreter_version");
        if self.interpreter_missing {
            return Err(CairnError::PrerequisiteMissing {
                interpreter: INTERPRETER.to_string(),
            });
        }
        Ok(Self::result(self.version_exit, &self.version_output))
    }

    fn manager_on_path(&self) -> bool {
        self.record("manager_on_path");
        self.manager_present
    }

    fn install_manager(&self) -> Result<CommandResult> {
        self.record("install_manager");
        Ok(Self::result(self.install_exit, ""))
    }

    fn resolve_dependencies(&self) -> Result<CommandResult> {
        self.record("resolve_dependencies");
        Ok(Self::result(self.resolve_exit, ""))
    }

    fn serve(&self) -> Result<()> {
        self.record("serve");
        Ok(())
    }
}
