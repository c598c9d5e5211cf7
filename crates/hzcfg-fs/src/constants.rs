//! Scheme prefixes recognised in resource names.

/// Prefixes that select how a resource name is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePrefix {
    /// `classpath:` - look the remainder up on the classpath only
    Classpath,
    /// `file:` - treat the remainder as a filesystem path only
    File,
}

impl ResourcePrefix {
    /// Get the string representation of the prefix, including the colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classpath => "classpath:",
            Self::File => "file:",
        }
    }

    /// Strip this prefix from `value`, returning the remainder if it matched.
    pub fn strip<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.strip_prefix(self.as_str())
    }
}

impl AsRef<str> for ResourcePrefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ResourcePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
