/// The currently checked-out branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName {
    pub name: String,
}

impl BranchName {
    /// Create a branch name, trimming surrounding whitespace from command output
    pub fn new(name: impl Into<String>) -> Self {
        BranchName {
            name: name.into().trim().to_string(),
        }
    }

    /// HEAD is detached when git reports no current branch
    pub fn is_detached(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_detached() {
            f.write_str("(detached HEAD)")
        } else {
            f.write_str(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_command_output() {
        let branch = BranchName::new("feature/ABC-123-foo\n");
        assert_eq!(branch.name, "feature/ABC-123-foo");
        assert!(!branch.is_detached());
    }

    #[test]
    fn test_detached_head() {
        let branch = BranchName::new("");
        assert!(branch.is_detached());
        assert_eq!(branch.to_string(), "(detached HEAD)");
    }
}
