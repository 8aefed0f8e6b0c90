use regex::Regex;

use crate::config::TicketConfig;
use crate::domain::BranchName;
use crate::error::{QaTagError, Result};

/// A ticket identifier as found in the branch name or typed by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketId {
    pub raw: String,
}

impl TicketId {
    /// Build a ticket from operator input, rejecting blank values
    pub fn from_input(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QaTagError::EmptyTicketInput);
        }
        Ok(TicketId {
            raw: trimmed.to_string(),
        })
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Finds tickets in branch names and reduces them to the part used in tags.
///
/// With the default patterns `feature/ABC-123-foo` yields `ABC-123`, which
/// normalises to `123`; `hotfix/456` yields `456` unchanged.
#[derive(Debug, Clone)]
pub struct TicketMatcher {
    pattern: Regex,
    strip_prefix: Regex,
}

impl TicketMatcher {
    pub fn new(config: &TicketConfig) -> Result<Self> {
        let pattern = Regex::new(&config.pattern)
            .map_err(|e| QaTagError::config(format!("Invalid ticket pattern: {}", e)))?;
        let strip_prefix = Regex::new(&config.strip_prefix)
            .map_err(|e| QaTagError::config(format!("Invalid ticket prefix pattern: {}", e)))?;

        Ok(TicketMatcher {
            pattern,
            strip_prefix,
        })
    }

    /// First ticket-looking token in the branch name.
    ///
    /// Uses the first capture group when the pattern has one, the whole match otherwise.
    pub fn extract(&self, branch: &BranchName) -> Option<TicketId> {
        let captures = self.pattern.captures(&branch.name)?;
        let token = captures.get(1).or_else(|| captures.get(0))?;

        Some(TicketId {
            raw: token.as_str().to_string(),
        })
    }

    /// The ticket with its project key prefix removed
    pub fn normalize(&self, ticket: &TicketId) -> String {
        self.strip_prefix.replace(&ticket.raw, "").into_owned()
    }
}
