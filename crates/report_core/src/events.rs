//! Observable dialog state and the change events published to subscribers.

use serde::{Deserialize, Serialize};
use shared::domain::{TargetId, TargetKind};

/// Point-in-time copy of what the dialog view needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogState {
    pub visible: bool,
    pub target_kind: TargetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<TargetId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DialogEvent {
    Opened {
        kind: TargetKind,
        #[serde(default)]
        id: Option<TargetId>,
    },
    Closed,
    Submitted {
        payload: serde_json::Value,
    },
}

impl DialogEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DialogEvent::Opened { .. } => "opened",
            DialogEvent::Closed => "closed",
            DialogEvent::Submitted { .. } => "submitted",
        }
    }
}
