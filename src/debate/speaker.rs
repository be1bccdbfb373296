use crate::completion::types::{Message, MessageRole};
use crate::prompts;

/// Side of the motion a speaker argues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Argues for the motion
    Proposition,
    /// Argues against the motion
    Opposition,
}

impl Side {
    /// Lowercase label used in prompts and result messages
    pub fn label(&self) -> &'static str {
        match self {
            Side::Proposition => "proposition",
            Side::Opposition => "opposition",
        }
    }

    /// Capitalized label for display
    pub fn display(&self) -> &'static str {
        match self {
            Side::Proposition => "Proposition",
            Side::Opposition => "Opposition",
        }
    }
}

/// Identifies one of the two debate speakers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakerId {
    /// Speaker 1, opens the debate for the proposition
    One,
    /// Speaker 2, responds for the opposition
    Two,
}

impl SpeakerId {
    /// 1-based ordinal for display and prompts
    pub fn ordinal(&self) -> u8 {
        match self {
            SpeakerId::One => 1,
            SpeakerId::Two => 2,
        }
    }

    /// The other speaker
    pub fn opponent(&self) -> SpeakerId {
        match self {
            SpeakerId::One => SpeakerId::Two,
            SpeakerId::Two => SpeakerId::One,
        }
    }

    /// Side this speaker argues (fixed: speaker 1 proposes)
    pub fn side(&self) -> Side {
        match self {
            SpeakerId::One => Side::Proposition,
            SpeakerId::Two => Side::Opposition,
        }
    }
}

/// One model-backed debate participant.
///
/// Owns its conversation history exclusively; the driver appends the
/// opponent's utterances, the turn executor appends the speaker's own.
#[derive(Debug, Clone)]
pub struct Speaker {
    /// Which of the two participants this is
    pub id: SpeakerId,
    /// Vendor model identifier passed to the completion service
    pub model: String,
    /// Role-tagged conversation, starting with one system message
    pub history: Vec<Message>,
}

impl Speaker {
    /// Create a speaker with its history seeded by the position-encoding
    /// system message.
    pub fn new(id: SpeakerId, model: impl Into<String>, motion: &str) -> Self {
        let system = prompts::system_prompt(id.ordinal(), id.side(), motion);
        Self {
            id,
            model: model.into(),
            history: vec![Message::system(system)],
        }
    }

    /// Side this speaker argues
    pub fn side(&self) -> Side {
        self.id.side()
    }

    /// Content of the speaker's most recent assistant message, if any
    pub fn last_utterance(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
    }

    /// Append the speaker's own reply text as an assistant message
    pub fn record_own(&mut self, text: impl Into<String>) {
        self.history.push(Message::assistant(text));
    }

    /// Append the opponent's latest reply text as a user message
    pub fn record_opponent(&mut self, text: impl Into<String>) {
        self.history.push(Message::user(text));
    }
}
