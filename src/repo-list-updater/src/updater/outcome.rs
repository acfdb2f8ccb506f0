//! Update outcome types.

/// What an update did to the entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Existing entries with the URL had their description replaced.
    Updated {
        /// Number of entries that matched.
        matches: usize,
    },

    /// No entry matched, so a new one was appended.
    Added {
        /// Name derived for the new entry.
        name: String,
    },
}

/// Result of a completed update.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// What happened to the entry list.
    pub outcome: UpdateOutcome,

    /// The updated document, as written (or as it would have been written).
    pub rendered: String,

    /// Whether the file was overwritten. False in dry-run mode.
    pub written: bool,
}
