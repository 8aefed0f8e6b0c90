use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::BranchName;
use crate::error::{QaTagError, Result};

/// Runs the `git` executable in a working directory.
///
/// Tag creation and push inherit the terminal so git's own progress and
/// credential prompts reach the operator.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        GitCli {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        log::debug!("Running: git {}", args.join(" "));

        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.workdir);
        cmd
    }

    /// Run a query and return its stdout
    fn capture(&self, args: &[&str]) -> Result<String> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| QaTagError::command(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QaTagError::command(format!(
                "git {} exited with code {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a command with inherited stdio
    fn run(&self, args: &[&str]) -> Result<()> {
        let status = self
            .command(args)
            .status()
            .map_err(|e| QaTagError::command(format!("Failed to execute git: {}", e)))?;

        if !status.success() {
            return Err(QaTagError::command(format!(
                "git {} exited with code {}",
                args.join(" "),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

impl super::Repository for GitCli {
    fn current_branch(&self) -> Result<BranchName> {
        let stdout = self.capture(&["branch", "--show-current"])?;
        Ok(BranchName::new(stdout))
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let stdout = self.capture(&["tag", "-l", pattern])?;

        let mut tags: Vec<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name])
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.run(&["push", remote, name])
    }
}
