use tracing::{debug, info};

use crate::completion::{CompletionService, Message};
use crate::console::{theme, DebateView};
use crate::debate::reply::TurnOutcome;
use crate::debate::speaker::{Speaker, SpeakerId};
use crate::error::{AppError, AppResult, CompletionError};
use crate::prompts;

/// State of the turn-taking machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateState {
    /// Speaker 1 presents the opening argument
    Opening,
    /// Speaker 2 answers speaker 1's latest argument
    SpeakerTwoResponding,
    /// Speaker 1 answers speaker 2's latest argument
    SpeakerOneResponding,
    /// Terminal: the named speaker forfeited
    Forfeited(SpeakerId),
}

/// Terminal result of a debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebateOutcome {
    /// A speaker conceded; the opponent wins
    Forfeit {
        /// Who forfeited
        by: SpeakerId,
        /// Their stated reason
        reason: String,
        /// Total turns executed
        turns: u32,
    },
    /// The configured turn cap tripped with neither side conceding
    TurnLimit {
        /// Total turns executed
        turns: u32,
    },
}

impl DebateOutcome {
    /// The winning speaker, if a winner exists
    pub fn winner(&self) -> Option<SpeakerId> {
        match self {
            DebateOutcome::Forfeit { by, .. } => Some(by.opponent()),
            DebateOutcome::TurnLimit { .. } => None,
        }
    }

    /// Total turns executed
    pub fn turns(&self) -> u32 {
        match self {
            DebateOutcome::Forfeit { turns, .. } | DebateOutcome::TurnLimit { turns } => *turns,
        }
    }

    /// Closing message naming the winner (or the draw)
    pub fn announcement(&self) -> String {
        match self {
            DebateOutcome::Forfeit { by, .. } => {
                let winner = by.opponent();
                format!(
                    "Speaker {} ({}) forfeits! Speaker {} ({}) wins.",
                    by.ordinal(),
                    by.side().display(),
                    winner.ordinal(),
                    winner.side().display(),
                )
            }
            DebateOutcome::TurnLimit { turns } => {
                format!("Turn limit reached after {turns} turns. Neither side forfeited.")
            }
        }
    }
}

/// Strict-alternation debate between two model-backed speakers.
///
/// Drives the state machine until a speaker forfeits or the optional turn
/// cap trips. Without a cap and with two speakers that never forfeit, the
/// loop does not terminate.
#[derive(Debug)]
pub struct Debate {
    motion: String,
    speaker_one: Speaker,
    speaker_two: Speaker,
    turn_count: u32,
    max_turns: Option<u32>,
    state: DebateState,
}

impl Debate {
    /// Set up a debate on `motion` with one model per speaker.
    ///
    /// Seeds both speakers' histories with their position-encoding system
    /// message; speaker 1 argues the proposition, speaker 2 the opposition.
    pub fn new(
        motion: impl Into<String>,
        speaker_one_model: impl Into<String>,
        speaker_two_model: impl Into<String>,
    ) -> Self {
        let motion = motion.into();
        let speaker_one = Speaker::new(SpeakerId::One, speaker_one_model, &motion);
        let speaker_two = Speaker::new(SpeakerId::Two, speaker_two_model, &motion);

        Self {
            motion,
            speaker_one,
            speaker_two,
            turn_count: 0,
            max_turns: None,
            state: DebateState::Opening,
        }
    }

    /// Cap the debate at `max_turns` total speaker turns; `None` (the
    /// default) runs until a forfeit.
    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns.filter(|n| *n > 0);
        self
    }

    /// Turns executed so far
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Current machine state
    pub fn state(&self) -> DebateState {
        self.state
    }

    /// The motion under debate
    pub fn motion(&self) -> &str {
        &self.motion
    }

    /// Inspect a speaker's state
    pub fn speaker(&self, id: SpeakerId) -> &Speaker {
        match id {
            SpeakerId::One => &self.speaker_one,
            SpeakerId::Two => &self.speaker_two,
        }
    }

    /// Run the debate to its terminal state.
    ///
    /// Completion-service failures propagate; the driver does not retry
    /// or recover beyond what the service itself does.
    pub async fn run<S, V>(&mut self, service: &S, view: &mut V) -> AppResult<DebateOutcome>
    where
        S: CompletionService,
        V: DebateView,
    {
        view.line("");
        view.line(theme::DEBATE_START_BANNER);
        view.panel(&self.motion, theme::MOTION.title, &theme::MOTION);
        view.line("");

        info!(motion = %self.motion, "Debate started");

        loop {
            if let Some(max) = self.max_turns {
                if self.turn_count >= max {
                    info!(turns = self.turn_count, "Turn limit reached");
                    return Ok(DebateOutcome::TurnLimit {
                        turns: self.turn_count,
                    });
                }
            }

            match self.state {
                DebateState::Opening => {
                    let outcome = self
                        .perform_turn(SpeakerId::One, prompts::OPENING_PROMPT.to_string(), service, view)
                        .await?;

                    match outcome {
                        TurnOutcome::Forfeited { reason } => {
                            return Ok(self.conclude_forfeit(SpeakerId::One, reason, view));
                        }
                        TurnOutcome::Continuing { .. } => {
                            self.state = DebateState::SpeakerTwoResponding;
                        }
                    }
                }
                DebateState::SpeakerTwoResponding => {
                    let prompt = self.latest_utterance(SpeakerId::One)?;
                    let outcome = self
                        .perform_turn(SpeakerId::Two, prompt, service, view)
                        .await?;

                    match outcome {
                        TurnOutcome::Forfeited { reason } => {
                            return Ok(self.conclude_forfeit(SpeakerId::Two, reason, view));
                        }
                        TurnOutcome::Continuing { text } => {
                            self.speaker_one.record_opponent(text);
                            self.state = DebateState::SpeakerOneResponding;
                        }
                    }
                }
                DebateState::SpeakerOneResponding => {
                    let prompt = self.latest_utterance(SpeakerId::Two)?;
                    let outcome = self
                        .perform_turn(SpeakerId::One, prompt, service, view)
                        .await?;

                    match outcome {
                        TurnOutcome::Forfeited { reason } => {
                            return Ok(self.conclude_forfeit(SpeakerId::One, reason, view));
                        }
                        TurnOutcome::Continuing { text } => {
                            self.speaker_two.record_opponent(text);
                            self.state = DebateState::SpeakerTwoResponding;
                        }
                    }
                }
                DebateState::Forfeited(_) => {
                    return Err(AppError::Internal {
                        message: "debate already concluded".to_string(),
                    });
                }
            }
        }
    }

    /// Execute exactly one speaker turn.
    ///
    /// Submits the speaker's stored history plus one ephemeral user
    /// message carrying the prompt; on a continuing reply, renders the
    /// response panel and appends it to the speaker's own history.
    async fn perform_turn<S, V>(
        &mut self,
        id: SpeakerId,
        prompt: String,
        service: &S,
        view: &mut V,
    ) -> AppResult<TurnOutcome>
    where
        S: CompletionService,
        V: DebateView,
    {
        self.turn_count += 1;
        let speaker = match id {
            SpeakerId::One => &mut self.speaker_one,
            SpeakerId::Two => &mut self.speaker_two,
        };

        let mut messages = speaker.history.clone();
        messages.push(Message::user(prompt));

        let reply = service.reply(&speaker.model, &messages).await?;

        debug!(
            speaker = speaker.id.ordinal(),
            turn = self.turn_count,
            planning = %reply.planning,
            "Turn planning"
        );

        let outcome = reply.into_outcome().map_err(CompletionError::from)?;

        if let TurnOutcome::Continuing { text } = &outcome {
            let speaker_theme = theme::for_speaker(speaker.id);
            view.panel(
                text,
                &format!("{} (Turn {})", speaker_theme.title, self.turn_count),
                &speaker_theme,
            );
            speaker.record_own(text.clone());
        }

        Ok(outcome)
    }

    /// Print turn statistics and the forfeit reason, then build the outcome.
    fn conclude_forfeit<V: DebateView>(
        &mut self,
        by: SpeakerId,
        reason: String,
        view: &mut V,
    ) -> DebateOutcome {
        self.state = DebateState::Forfeited(by);

        info!(
            speaker = by.ordinal(),
            turns = self.turn_count,
            "Speaker forfeited"
        );

        view.line("");
        view.line(theme::DEBATE_STATS);
        view.line(&format!("Total turns: {}", self.turn_count));

        let title = format!(
            "{} (Turn {})",
            theme::for_speaker(by).title,
            self.turn_count
        );
        view.panel(&reason, &title, &theme::FORFEIT);

        DebateOutcome::Forfeit {
            by,
            reason,
            turns: self.turn_count,
        }
    }

    fn latest_utterance(&self, id: SpeakerId) -> AppResult<String> {
        self.speaker(id)
            .last_utterance()
            .map(str::to_string)
            .ok_or_else(|| AppError::Internal {
                message: format!("speaker {} has no utterance to respond to", id.ordinal()),
            })
    }
}
