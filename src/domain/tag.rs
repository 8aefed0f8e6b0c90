use crate::manifest::ProjectVersion;

/// `{version}-{ticket}`, shared by every QA tag of one version/ticket pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPrefix {
    pub prefix: String,
}

impl TagPrefix {
    /// Create a prefix from the manifest version and the normalised ticket
    pub fn new(version: &ProjectVersion, ticket: &str) -> Self {
        TagPrefix {
            prefix: format!("{}-{}", version, ticket),
        }
    }

    /// Glob selecting the existing QA tags for this prefix
    /// Example: prefix="1.2.0-123" -> "1.2.0-123.*"
    pub fn glob(&self) -> String {
        format!("{}.*", self.prefix)
    }
}

impl std::fmt::Display for TagPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}

/// The next QA tag for a prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaTag {
    pub prefix: TagPrefix,
    pub existing: Vec<String>,
    pub qa_version: usize,
    pub name: String,
}

impl QaTag {
    /// Number the new tag after how many tags already carry the prefix.
    ///
    /// The sequence is the count of existing tags, not the highest suffix plus
    /// one, so a deleted tag in the middle makes the next name collide.
    pub fn next(prefix: TagPrefix, existing: Vec<String>) -> Self {
        let qa_version = existing.len();
        let name = format!("{}.{}", prefix, qa_version);

        QaTag {
            prefix,
            existing,
            qa_version,
            name,
        }
    }

    /// Whether the computed name is already taken
    pub fn collides(&self) -> bool {
        self.existing.iter().any(|tag| tag == &self.name)
    }
}
