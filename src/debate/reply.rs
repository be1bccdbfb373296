use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{SchemaError, SchemaResult};

/// Maximum length, in characters, of the response and forfeit-reason fields
pub const MAX_FIELD_CHARS: usize = 500;

/// Structured reply every speaker turn must produce.
///
/// This is the wire contract: either `response` (when continuing) or
/// `reason_for_forfeit` (when forfeiting) is populated, selected by
/// `to_forfeit_debate`. Use [`Reply::into_outcome`] to obtain the
/// validated form; the raw fields should not be read directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Planning and strategy rationale behind this turn
    pub planning: String,
    /// Debate response text, absent when forfeiting
    #[serde(default)]
    pub response: Option<String>,
    /// Self-check nudge: is the model about to repeat earlier arguments?
    #[serde(default)]
    pub repeating_previous_arguments: bool,
    /// Why the speaker forfeits, absent when continuing
    #[serde(default)]
    pub reason_for_forfeit: Option<String>,
    /// Whether the speaker forfeits the debate this turn
    pub to_forfeit_debate: bool,
}

/// Validated outcome of one turn.
///
/// Exactly one variant applies, so the one-of invariant between the
/// reply's `response` and `reason_for_forfeit` fields is enforced
/// structurally rather than checked at every read site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The speaker stays in the debate with this argument
    Continuing {
        /// Response text to hand to the opponent
        text: String,
    },
    /// The speaker concedes the debate
    Forfeited {
        /// The speaker's stated reason for conceding
        reason: String,
    },
}

impl Reply {
    /// Check the reply against the schema invariants.
    ///
    /// Fails when the field selected by `to_forfeit_debate` is absent or
    /// empty, when either text field exceeds [`MAX_FIELD_CHARS`], or when
    /// `planning` is empty.
    pub fn validate(&self) -> SchemaResult<()> {
        if self.planning.trim().is_empty() {
            return Err(SchemaError::EmptyPlanning);
        }

        check_length("response", self.response.as_deref())?;
        check_length("reason_for_forfeit", self.reason_for_forfeit.as_deref())?;

        if self.to_forfeit_debate {
            if !is_populated(self.reason_for_forfeit.as_deref()) {
                return Err(SchemaError::MissingForfeitReason);
            }
        } else if !is_populated(self.response.as_deref()) {
            return Err(SchemaError::MissingResponse);
        }

        Ok(())
    }

    /// Validate and convert into the tagged outcome.
    ///
    /// The branch not selected by `to_forfeit_debate` is discarded even if
    /// the model populated it.
    pub fn into_outcome(self) -> SchemaResult<TurnOutcome> {
        self.validate()?;

        if self.to_forfeit_debate {
            // validate() guarantees presence on this branch
            let reason = self.reason_for_forfeit.unwrap_or_default();
            Ok(TurnOutcome::Forfeited { reason })
        } else {
            let text = self.response.unwrap_or_default();
            Ok(TurnOutcome::Continuing { text })
        }
    }

    /// JSON schema describing the reply, submitted with every completion
    /// request so the service constrains model output to this shape.
    pub fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "planning": {
                    "type": "string",
                    "description": "The planning and strategy details for the debate response, based on the opponent's arguments"
                },
                "response": {
                    "type": ["string", "null"],
                    "description": "The actual debate response text. Can be null if you intend to forfeit the debate. Keep your response less than 500 characters."
                },
                "repeating_previous_arguments": {
                    "type": "boolean",
                    "description": "Flag indicating whether you are about to repeat previous arguments"
                },
                "reason_for_forfeit": {
                    "type": ["string", "null"],
                    "description": "The reason for forfeiting the debate. Can be null if you do not intend to forfeit the debate. Be specific about why you are forfeiting. Keep your response less than 500 characters."
                },
                "to_forfeit_debate": {
                    "type": "boolean",
                    "description": "Flag indicating whether to forfeit the debate"
                }
            },
            "required": [
                "planning",
                "response",
                "repeating_previous_arguments",
                "reason_for_forfeit",
                "to_forfeit_debate"
            ],
            "additionalProperties": false
        })
    }
}

impl TurnOutcome {
    /// Whether this outcome forfeits the debate
    pub fn is_forfeit(&self) -> bool {
        matches!(self, TurnOutcome::Forfeited { .. })
    }
}

fn is_populated(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.trim().is_empty())
}

fn check_length(name: &'static str, field: Option<&str>) -> SchemaResult<()> {
    if let Some(text) = field {
        let len = text.chars().count();
        if len > MAX_FIELD_CHARS {
            return Err(SchemaError::FieldTooLong {
                field: name,
                limit: MAX_FIELD_CHARS,
                len,
            });
        }
    }
    Ok(())
}
