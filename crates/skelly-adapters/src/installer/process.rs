//! Package managers as blocking subprocesses.

use std::process::{Command, Stdio};

use tracing::{info, instrument};

use skelly_core::{
    application::{
        ApplicationError,
        ports::{InstallCommand, Installer},
    },
    error::SkellyResult,
};

/// Runs the command and waits for it. No timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller {
    quiet: bool,
}

impl ProcessInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the child's stdout and stderr.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// npm and friends are `.cmd` shims on Windows and need the shell.
    fn command(install: &InstallCommand) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&install.program).args(&install.args);
            cmd
        } else {
            let mut cmd = Command::new(&install.program);
            cmd.args(&install.args);
            cmd
        }
    }
}

impl Installer for ProcessInstaller {
    #[instrument(skip_all, fields(command = %install.display_line(), dir = %install.working_dir.display()))]
    fn run(&self, install: &InstallCommand) -> SkellyResult<()> {
        let mut cmd = Self::command(install);
        cmd.current_dir(&install.working_dir);
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let failure = |reason: String| ApplicationError::DependencyInstall {
            program: install.program.clone(),
            working_dir: install.working_dir.clone(),
            reason,
        };

        let status = cmd
            .status()
            .map_err(|e| failure(format!("failed to start: {e}")))?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(failure(reason).into());
        }

        info!("Dependencies installed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skelly_core::error::SkellyError;
    use tempfile::TempDir;

    #[test]
    fn missing_binary_is_a_dependency_install_error() {
        let temp = TempDir::new().unwrap();
        let command = InstallCommand::new(
            "skelly-definitely-not-a-real-binary",
            ["install"],
            temp.path(),
        );

        let err = ProcessInstaller::new().quiet(true).run(&command).unwrap_err();
        match err {
            SkellyError::Application(ApplicationError::DependencyInstall {
                program, ..
            }) => assert_eq!(program, "skelly-definitely-not-a-real-binary"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let temp = TempDir::new().unwrap();
        let command = InstallCommand::new("false", Vec::<String>::new(), temp.path());

        let err = ProcessInstaller::new().quiet(true).run(&command).unwrap_err();
        assert!(err.to_string().contains("exited with status 1"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_succeeds() {
        let temp = TempDir::new().unwrap();
        let command = InstallCommand::new("true", Vec::<String>::new(), temp.path());
        ProcessInstaller::new().quiet(true).run(&command).unwrap();
    }
}
