//! Installers that never spawn anything.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use tracing::info;

use skelly_core::{
    application::{
        ApplicationError,
        ports::{InstallCommand, Installer},
    },
    error::SkellyResult,
};

/// Records every command it is asked to run.
///
/// Programs marked missing fail the way a real spawn would when the binary
/// is not on `PATH`. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    commands: Vec<InstallCommand>,
    missing: BTreeSet<String>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate `program` not being installed.
    pub fn with_missing(self, program: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.missing.insert(program.into());
        }
        self
    }

    /// Commands seen so far, including failed ones.
    pub fn commands(&self) -> Vec<InstallCommand> {
        self.inner
            .lock()
            .map(|inner| inner.commands.clone())
            .unwrap_or_default()
    }

    pub fn invocations(&self) -> usize {
        self.inner.lock().map(|inner| inner.commands.len()).unwrap_or(0)
    }
}

impl Installer for RecordingInstaller {
    fn run(&self, command: &InstallCommand) -> SkellyResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.commands.push(command.clone());

        if inner.missing.contains(&command.program) {
            return Err(ApplicationError::DependencyInstall {
                program: command.program.clone(),
                working_dir: command.working_dir.clone(),
                reason: "failed to start: No such file or directory (os error 2)".into(),
            }
            .into());
        }
        Ok(())
    }
}

/// Skips installation (`--skip-install`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstaller;

impl NoopInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl Installer for NoopInstaller {
    fn run(&self, command: &InstallCommand) -> SkellyResult<()> {
        info!(
            command = %command.display_line(),
            dir = %command.working_dir.display(),
            "Skipping dependency install"
        );
        Ok(())
    }
}
