//! Debate driver state-machine tests.
//!
//! The completion service is mocked with scripted replies; the view is a
//! recording stub so panel ordering and content can be asserted.

use async_trait::async_trait;
use mockall::mock;
use mockall::Sequence;
use pretty_assertions::assert_eq;

use podium::completion::types::MessageRole;
use podium::completion::{CompletionService, Message};
use podium::console::theme::PanelTheme;
use podium::console::DebateView;
use podium::debate::{Debate, DebateOutcome, DebateState, Reply, SpeakerId};
use podium::error::{CompletionError, CompletionResult};
use podium::prompts;

mock! {
    pub Service {}

    #[async_trait]
    impl CompletionService for Service {
        async fn reply(&self, model: &str, messages: &[Message]) -> CompletionResult<Reply>;
    }
}

/// View stub recording every call in order
#[derive(Debug, Default)]
struct RecordingView {
    events: Vec<ViewEvent>,
}

#[derive(Debug, PartialEq)]
enum ViewEvent {
    Line(String),
    Panel { text: String, title: String },
}

impl DebateView for RecordingView {
    fn line(&mut self, text: &str) {
        self.events.push(ViewEvent::Line(text.to_string()));
    }

    fn panel(&mut self, text: &str, title: &str, _theme: &PanelTheme) {
        self.events.push(ViewEvent::Panel {
            text: text.to_string(),
            title: title.to_string(),
        });
    }
}

impl RecordingView {
    fn panels(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Panel { text, title } => Some((title.as_str(), text.as_str())),
                ViewEvent::Line(_) => None,
            })
            .collect()
    }

    fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Line(text) => Some(text.as_str()),
                ViewEvent::Panel { .. } => None,
            })
            .collect()
    }
}

fn continuing(text: &str) -> Reply {
    Reply {
        planning: "scripted plan".to_string(),
        response: Some(text.to_string()),
        repeating_previous_arguments: false,
        reason_for_forfeit: None,
        to_forfeit_debate: false,
    }
}

fn forfeiting(reason: &str) -> Reply {
    Reply {
        planning: "scripted plan".to_string(),
        response: None,
        repeating_previous_arguments: false,
        reason_for_forfeit: Some(reason.to_string()),
        to_forfeit_debate: true,
    }
}

#[tokio::test]
async fn speaker_two_forfeits_on_first_turn() {
    let mut service = MockService::new();
    let mut seq = Sequence::new();

    // Turn 1: speaker 1 opens with history [system] + ephemeral opening prompt
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|model, messages| {
            model == "gpt-4o"
                && messages.len() == 2
                && messages[0].role == MessageRole::System
                && messages[1].role == MessageRole::User
                && messages[1].content == prompts::OPENING_PROMPT
        })
        .returning(|_, _| Ok(continuing("Remote work boosts productivity.")));

    // Turn 2: speaker 2 is prompted with speaker 1's utterance, then forfeits
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|model, messages| {
            model == "grok-2"
                && messages.len() == 2
                && messages[1].content == "Remote work boosts productivity."
        })
        .returning(|_, _| Ok(forfeiting("Cannot counter the productivity argument.")));

    let mut view = RecordingView::default();
    let mut debate = Debate::new("This house believes in remote work.", "gpt-4o", "grok-2");
    let outcome = debate.run(&service, &mut view).await.unwrap();

    assert_eq!(
        outcome,
        DebateOutcome::Forfeit {
            by: SpeakerId::Two,
            reason: "Cannot counter the productivity argument.".to_string(),
            turns: 2,
        }
    );
    assert_eq!(outcome.winner(), Some(SpeakerId::One));
    assert_eq!(
        outcome.announcement(),
        "Speaker 2 (Opposition) forfeits! Speaker 1 (Proposition) wins."
    );
    assert_eq!(debate.state(), DebateState::Forfeited(SpeakerId::Two));
    assert_eq!(debate.turn_count(), 2);

    // Speaker 2's history gains no assistant entry for the forfeiting turn
    assert_eq!(debate.speaker(SpeakerId::Two).history.len(), 1);
    assert_eq!(
        debate.speaker(SpeakerId::Two).history[0].role,
        MessageRole::System
    );

    // Speaker 1's history: system + its own opening argument
    let history = &debate.speaker(SpeakerId::One).history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].role, MessageRole::Assistant);
    assert_eq!(history[1].content, "Remote work boosts productivity.");
}

#[tokio::test]
async fn opening_forfeit_ends_debate_after_one_turn() {
    let mut service = MockService::new();
    service
        .expect_reply()
        .times(1)
        .returning(|_, _| Ok(forfeiting("I agree with the opposition.")));

    let mut view = RecordingView::default();
    let mut debate = Debate::new("motion", "o1", "gpt-4o-mini");
    let outcome = debate.run(&service, &mut view).await.unwrap();

    assert_eq!(
        outcome,
        DebateOutcome::Forfeit {
            by: SpeakerId::One,
            reason: "I agree with the opposition.".to_string(),
            turns: 1,
        }
    );
    assert_eq!(
        outcome.announcement(),
        "Speaker 1 (Proposition) forfeits! Speaker 2 (Opposition) wins."
    );
    assert_eq!(debate.speaker(SpeakerId::One).history.len(), 1);
}

#[tokio::test]
async fn histories_grow_one_round_at_a_time() {
    let mut service = MockService::new();
    let mut seq = Sequence::new();

    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(continuing("Remote work boosts productivity.")));
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(continuing("Offices build culture faster.")));

    let mut view = RecordingView::default();
    // Cap at two turns so the round's end state is observable
    let mut debate = Debate::new("This house believes in remote work.", "gpt-4o", "grok-2")
        .with_max_turns(Some(2));
    let outcome = debate.run(&service, &mut view).await.unwrap();

    assert_eq!(outcome, DebateOutcome::TurnLimit { turns: 2 });
    assert_eq!(outcome.winner(), None);

    // Speaker 1: system, own argument, opponent's reply as user
    let one = &debate.speaker(SpeakerId::One).history;
    assert_eq!(one.len(), 3);
    assert_eq!(one[1].role, MessageRole::Assistant);
    assert_eq!(one[1].content, "Remote work boosts productivity.");
    assert_eq!(one[2].role, MessageRole::User);
    assert_eq!(one[2].content, "Offices build culture faster.");

    // Speaker 2: system plus its own argument; speaker 1 has not spoken again
    let two = &debate.speaker(SpeakerId::Two).history;
    assert_eq!(two.len(), 2);
    assert_eq!(two[1].role, MessageRole::Assistant);
    assert_eq!(two[1].content, "Offices build culture faster.");
}

#[tokio::test]
async fn third_turn_submits_accumulated_history() {
    let mut service = MockService::new();
    let mut seq = Sequence::new();

    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(continuing("A1")));
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(continuing("B1")));
    // Speaker 1's second turn: stored history already ends with B1 as a
    // user entry, and B1 is also the ephemeral prompt
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|model, messages| {
            model == "gpt-4o"
                && messages.len() == 4
                && messages[1].content == "A1"
                && messages[2].content == "B1"
                && messages[2].role == MessageRole::User
                && messages[3].content == "B1"
                && messages[3].role == MessageRole::User
        })
        .returning(|_, _| Ok(forfeiting("Repeating myself.")));

    let mut view = RecordingView::default();
    let mut debate = Debate::new("motion", "gpt-4o", "grok-2");
    let outcome = debate.run(&service, &mut view).await.unwrap();

    assert_eq!(
        outcome,
        DebateOutcome::Forfeit {
            by: SpeakerId::One,
            reason: "Repeating myself.".to_string(),
            turns: 3,
        }
    );

    // The forfeiting turn left speaker 2's history untouched
    let two = &debate.speaker(SpeakerId::Two).history;
    assert_eq!(two.len(), 2);
}

#[tokio::test]
async fn turn_cap_stops_a_debate_nobody_forfeits() {
    let mut service = MockService::new();
    service
        .expect_reply()
        .times(5)
        .returning(|_, _| Ok(continuing("Same energy, new turn.")));

    let mut view = RecordingView::default();
    let mut debate = Debate::new("motion", "gpt-4o", "grok-2").with_max_turns(Some(5));
    let outcome = debate.run(&service, &mut view).await.unwrap();

    assert_eq!(outcome, DebateOutcome::TurnLimit { turns: 5 });
    assert_eq!(debate.turn_count(), 5);
    assert_eq!(
        outcome.announcement(),
        "Turn limit reached after 5 turns. Neither side forfeited."
    );
}

#[tokio::test]
async fn completion_failure_propagates_and_aborts() {
    let mut service = MockService::new();
    service.expect_reply().times(1).returning(|_, _| {
        Err(CompletionError::Unavailable {
            message: "rate limited".to_string(),
            retries: 3,
        })
    });

    let mut view = RecordingView::default();
    let mut debate = Debate::new("motion", "gpt-4o", "grok-2");
    let err = debate.run(&service, &mut view).await.unwrap_err();

    assert!(err.to_string().contains("rate limited"));
    // No turn completed normally, nothing appended anywhere
    assert_eq!(debate.speaker(SpeakerId::One).history.len(), 1);
    assert_eq!(debate.speaker(SpeakerId::Two).history.len(), 1);
}

#[tokio::test]
async fn view_receives_banner_motion_and_turn_panels_in_order() {
    let mut service = MockService::new();
    let mut seq = Sequence::new();

    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(continuing("Opening argument.")));
    service
        .expect_reply()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(forfeiting("Conceding.")));

    let mut view = RecordingView::default();
    let mut debate = Debate::new("The motion text", "gpt-4o", "grok-2");
    debate.run(&service, &mut view).await.unwrap();

    let panels = view.panels();
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0], ("Motion", "The motion text"));
    assert_eq!(panels[1].1, "Opening argument.");
    assert!(panels[1].0.contains("SPEAKER 1"));
    assert!(panels[1].0.contains("(Turn 1)"));
    assert_eq!(panels[2].1, "Conceding.");
    assert!(panels[2].0.contains("SPEAKER 2"));
    assert!(panels[2].0.contains("(Turn 2)"));

    let lines = view.lines();
    assert!(lines.contains(&"=== DEBATE START ==="));
    assert!(lines.contains(&"Total turns: 2"));
}
