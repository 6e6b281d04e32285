//! Prompt defaults and quick-fill presets.

/// Prompt used until the user edits it.
pub const DEFAULT_PROMPT: &str = "Provide a detailed summary of this video. Identify key events, \
describe the setting, and list any text or dialogue that appears significant.";

/// Quick-fill prompts offered under the prompt box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPreset {
    /// The startup prompt.
    Summary,
    /// Visual style and camera work.
    VisualStyle,
    /// Chronological sequence of events.
    Timeline,
}

impl PromptPreset {
    pub const ALL: [PromptPreset; 3] = [Self::Summary, Self::VisualStyle, Self::Timeline];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::VisualStyle => "Visual Style",
            Self::Timeline => "Timeline",
        }
    }

    /// Keyword accepted by [`PromptPreset::parse`].
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::VisualStyle => "visual",
            Self::Timeline => "timeline",
        }
    }

    /// Prompt text this preset fills in.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Summary => DEFAULT_PROMPT,
            Self::VisualStyle => "Describe the visual style and camera angles used in this clip.",
            Self::Timeline => "List the chronological sequence of events.",
        }
    }

    /// Parse a preset keyword (case-insensitive). Returns `None` when unknown.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.keyword().eq_ignore_ascii_case(s) || p.label().eq_ignore_ascii_case(s))
    }
}
