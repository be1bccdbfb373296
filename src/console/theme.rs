//! Static styling table for the debate display.
//!
//! One canonical place for panel titles, colors, banners, and result
//! messages; nothing here is interpreted by the debate core.

use crossterm::style::Color;

use crate::debate::speaker::SpeakerId;

/// Panel styling for one voice of the debate
#[derive(Debug, Clone, Copy)]
pub struct PanelTheme {
    /// Panel title
    pub title: &'static str,
    /// Color of the panel body text
    pub text: Color,
    /// Color of the panel border
    pub border: Color,
}

/// Speaker 1 panel styling
pub const SPEAKER_ONE: PanelTheme = PanelTheme {
    title: "\u{1F399} SPEAKER 1",
    text: Color::Blue,
    border: Color::DarkBlue,
};

/// Speaker 2 panel styling
pub const SPEAKER_TWO: PanelTheme = PanelTheme {
    title: "\u{1F399} SPEAKER 2",
    text: Color::Green,
    border: Color::DarkGreen,
};

/// Forfeit-reason panel styling
pub const FORFEIT: PanelTheme = PanelTheme {
    title: "FORFEIT",
    text: Color::Red,
    border: Color::DarkRed,
};

/// Motion panel styling
pub const MOTION: PanelTheme = PanelTheme {
    title: "Motion",
    text: Color::Yellow,
    border: Color::DarkYellow,
};

/// Banner printed when the debate starts
pub const DEBATE_START_BANNER: &str = "=== DEBATE START ===";

/// Header printed above the model catalog
pub const MODELS_HEADER: &str = "\u{1F916} Available Models:";

/// Header for speaker 1's interactive configuration
pub const SPEAKER1_CONFIG: &str = "\u{1F399} Speaker 1 Configuration";

/// Header for speaker 2's interactive configuration
pub const SPEAKER2_CONFIG: &str = "\u{1F399} Speaker 2 Configuration";

/// Header printed before the motion prompt
pub const DEBATE_SETUP: &str = "\u{1F4E2} Debate Setup";

/// Header printed above the closing turn statistics
pub const DEBATE_STATS: &str = "Debate Statistics:";

/// Panel styling for the given speaker
pub fn for_speaker(id: SpeakerId) -> PanelTheme {
    match id {
        SpeakerId::One => SPEAKER_ONE,
        SpeakerId::Two => SPEAKER_TWO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_themes_are_distinct() {
        assert_ne!(for_speaker(SpeakerId::One).title, for_speaker(SpeakerId::Two).title);
    }
}
