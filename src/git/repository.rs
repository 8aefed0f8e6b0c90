use crate::domain::BranchName;
use crate::error::{QaTagError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository rooted at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path.as_ref()).map_err(|e| {
            QaTagError::NotARepository(format!("{}: {}", path.as_ref().display(), e.message()))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Branch HEAD points at when it has no commits yet
    fn unborn_branch(&self) -> Result<BranchName> {
        let head = self.repo.find_reference("HEAD")?;
        let name = head
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .unwrap_or_default();

        Ok(BranchName::new(name))
    }
}

impl super::Repository for Git2Repository {
    fn current_branch(&self) -> Result<BranchName> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => {
                Ok(BranchName::new(head.shorthand().unwrap_or_default()))
            }
            Ok(_) => Ok(BranchName::new("")),
            Err(e) if e.code() == ErrorCode::UnbornBranch => self.unborn_branch(),
            Err(e) => Err(e.into()),
        }
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(Some(pattern))?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| QaTagError::command(format!("Cannot create tag: {}", e.message())))?;

        Ok(())
    }

    fn push_tag(&self, remote_name: &str, name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|_| {
            QaTagError::command(format!("No remote named '{}' found", remote_name))
        })?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(username, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            git2::Cred::default()
        });

        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    QaTagError::command(format!("Network error during push: {}", e.message()))
                }
                _ => QaTagError::command(format!("Push failed: {}", e.message())),
            })?;

        Ok(())
    }
}
