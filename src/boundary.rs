use std::fmt;

/// Non-fatal conditions met while computing the tag.
/// These are reported to the operator and the workflow carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The branch name carries no ticket; the operator is asked instead
    TicketNotInBranch { branch: String },
    /// Listing existing tags failed; the sequence restarts at zero
    TagLookupFailed { pattern: String, reason: String },
    /// The computed tag already exists because earlier tags were deleted or skipped
    SequenceCollision { tag: String, existing: usize },
    /// The manifest version is not a semantic version
    NonSemverVersion { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TicketNotInBranch { branch } => {
                write!(f, "Cannot extract a ticket number from branch '{}'", branch)
            }
            BoundaryWarning::TagLookupFailed { pattern, reason } => {
                write!(
                    f,
                    "Could not list tags matching '{}' ({}); assuming none exist",
                    pattern, reason
                )
            }
            BoundaryWarning::SequenceCollision { tag, existing } => {
                write!(
                    f,
                    "Tag '{}' already exists: {} related tags found but the sequence has gaps",
                    tag, existing
                )
            }
            BoundaryWarning::NonSemverVersion { version } => {
                write!(f, "Version '{}' is not a semantic version", version)
            }
        }
    }
}
