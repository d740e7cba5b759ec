//! Actions for the reducer pattern
//!
//! Every state transition is described by an `Action`. Actions are built
//! by input adapters, consumed once by the reducer and then dropped.
//!
//! `RawAction` is the untyped form an action takes when it crosses a
//! process boundary (a replay script, a JSON message). Converting it into
//! an `Action` is the only place an unknown action kind can show up.

use serde::{Deserialize, Serialize};

use crate::error::{ReducerError, Result};

const INCREMENT_AGE: &str = "increment_age";
const CHANGED_NAME: &str = "changed_name";

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// The age button was pressed
    IncrementAge,

    /// The name field now holds `next_name`
    ChangedName {
        #[serde(rename = "nextName")]
        next_name: String,
    },
}

impl Action {
    /// Build a name change from anything string-like
    pub fn changed_name(next_name: impl Into<String>) -> Self {
        Action::ChangedName {
            next_name: next_name.into(),
        }
    }

    /// Wire tag of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Action::IncrementAge => INCREMENT_AGE,
            Action::ChangedName { .. } => CHANGED_NAME,
        }
    }

    /// Parse a single JSON object such as `{"type":"increment_age"}`
    pub fn parse_json(input: &str) -> Result<Self> {
        let raw: RawAction = serde_json::from_str(input)?;
        Ok(Action::try_from(raw)?)
    }
}

/// Tagged record form of an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(rename = "nextName", default, skip_serializing_if = "Option::is_none")]
    pub next_name: Option<String>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            next_name: None,
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = ReducerError;

    fn try_from(raw: RawAction) -> std::result::Result<Self, Self::Error> {
        match raw.kind.as_str() {
            INCREMENT_AGE => Ok(Action::IncrementAge),
            CHANGED_NAME => match raw.next_name {
                Some(next_name) => Ok(Action::ChangedName { next_name }),
                None => Err(ReducerError::MissingPayload {
                    kind: raw.kind,
                    field: "nextName",
                }),
            },
            _ => Err(ReducerError::UnrecognizedAction { kind: raw.kind }),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let kind = action.kind().to_string();
        match action {
            Action::IncrementAge => RawAction {
                kind,
                next_name: None,
            },
            Action::ChangedName { next_name } => RawAction {
                kind,
                next_name: Some(next_name),
            },
        }
    }
}
