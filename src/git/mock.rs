use crate::domain::BranchName;
use crate::error::{QaTagError, Result};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
///
/// Created tags join the tag list so a second run sees them; every mutation
/// is recorded for assertions.
pub struct MockRepository {
    branch: String,
    tags: RefCell<Vec<String>>,
    created: RefCell<Vec<String>>,
    pushed: RefCell<Vec<(String, String)>>,
    fail_list: bool,
    fail_create: bool,
    fail_push: bool,
}

impl MockRepository {
    /// Create an empty mock repository on the given branch
    pub fn new(branch: impl Into<String>) -> Self {
        MockRepository {
            branch: branch.into(),
            tags: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
            pushed: RefCell::new(Vec::new()),
            fail_list: false,
            fail_create: false,
            fail_push: false,
        }
    }

    /// Add an existing tag
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.tags.borrow_mut().push(name.into());
        self
    }

    /// Make `list_tags` return an error
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `create_tag` return an error
    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Make `push_tag` return an error
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// All tags currently in the repository
    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    /// Tags created through the trait, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed through the trait, in order
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new("main")
    }
}

/// Shell glob match supporting `*` and `?`, as `git tag -l` does
fn glob_matches(pattern: &str, name: &str) -> bool {
    let regex = regex::escape(pattern)
        .replace(r"\*", ".*")
        .replace(r"\?", ".");

    regex::Regex::new(&format!("^{}$", regex))
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

impl Repository for MockRepository {
    fn current_branch(&self) -> Result<BranchName> {
        Ok(BranchName::new(self.branch.as_str()))
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        if self.fail_list {
            return Err(QaTagError::command("tag listing failed"));
        }

        let mut tags: Vec<String> = self
            .tags
            .borrow()
            .iter()
            .filter(|tag| glob_matches(pattern, tag))
            .cloned()
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        if self.fail_create {
            return Err(QaTagError::command("tag creation failed"));
        }
        if self.tags.borrow().iter().any(|tag| tag == name) {
            return Err(QaTagError::command(format!("tag '{}' already exists", name)));
        }

        self.tags.borrow_mut().push(name.to_string());
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(QaTagError::command("remote unreachable"));
        }

        self.pushed
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
