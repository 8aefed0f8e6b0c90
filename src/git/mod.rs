//! Git operations abstraction layer
//!
//! The tagging workflow needs exactly four things from version control: the
//! current branch, the tags matching a glob, creating a tag on HEAD and
//! pushing a tag to a remote. They sit behind the [Repository] trait so the
//! workflow can run against:
//!
//! - [cli::GitCli]: shells out to the `git` executable
//! - [repository::Git2Repository]: libgit2 through the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use git_qa_tag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_qa_tag::Result<()> {
//! let branch = repo.current_branch()?;
//! let tags = repo.list_tags("1.2.0-123.*")?;
//! println!("{} has {} QA tags", branch, tags.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;
pub mod repository;

pub use cli::GitCli;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::Path;

use crate::config::Backend;
use crate::domain::BranchName;
use crate::error::Result;

/// Version-control operations used by the tagging workflow
///
/// All calls are synchronous and complete before the next step runs.
/// Implementations map their native failures to [crate::error::QaTagError];
/// the workflow decides which of them are fatal.
pub trait Repository {
    /// Name of the checked-out branch.
    ///
    /// A detached HEAD is reported as an empty [BranchName], not an error.
    fn current_branch(&self) -> Result<BranchName>;

    /// Tag names matching a shell glob (e.g. `1.2.0-123.*`), sorted by name
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;

    /// Create a lightweight tag on HEAD.
    ///
    /// Fails if the tag already exists.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to the named remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}

/// Opens the configured backend for the repository at `workdir`
pub fn open(backend: Backend, workdir: &Path) -> Result<Box<dyn Repository>> {
    log::debug!("Opening {:?} backend at {}", backend, workdir.display());

    match backend {
        Backend::Cli => Ok(Box::new(GitCli::new(workdir))),
        Backend::Libgit2 => Ok(Box::new(Git2Repository::open(workdir)?)),
    }
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn current_branch(&self) -> Result<BranchName> {
        (**self).current_branch()
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        (**self).list_tags(pattern)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        (**self).create_tag(name)
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        (**self).push_tag(remote, name)
    }
}
