//! Selectable model catalog.
//!
//! Display names are what the selection menu shows; identifiers are the
//! vendor strings handed to the completion service. The core never
//! interprets either.

/// One selectable model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelEntry {
    /// Display name shown in the selection menu
    pub name: &'static str,
    /// Vendor identifier used by the completion service
    pub id: &'static str,
}

/// Models offered for either speaker
pub const AVAILABLE_MODELS: &[ModelEntry] = &[
    ModelEntry {
        name: "o1",
        id: "o1",
    },
    ModelEntry {
        name: "gpt-4o",
        id: "gpt-4o",
    },
    ModelEntry {
        name: "gpt-4o-mini",
        id: "gpt-4o-mini",
    },
    ModelEntry {
        name: "grok-2",
        id: "x-ai/grok-2-1212",
    },
    ModelEntry {
        name: "claude-3.5-haiku",
        id: "anthropic/claude-3.5-haiku-20241022:beta",
    },
    ModelEntry {
        name: "claude-3.5-sonnet",
        id: "anthropic/claude-3.5-sonnet:beta",
    },
];

/// Look up a catalog entry by display name
pub fn find(name: &str) -> Option<&'static ModelEntry> {
    AVAILABLE_MODELS.iter().find(|entry| entry.name == name)
}

/// All display names, in catalog order
pub fn names() -> Vec<&'static str> {
    AVAILABLE_MODELS.iter().map(|entry| entry.name).collect()
}
