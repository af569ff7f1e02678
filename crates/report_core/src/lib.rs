//! State holder for the "report content" dialog.
//!
//! One [`ReportDialogController`] is created per UI session and owned by the
//! view that presents the dialog. The view reads the state through the
//! accessors (or [`ReportDialogController::snapshot`]), calls back into the
//! controller on user actions, and may [`subscribe`](ReportDialogController::subscribe)
//! to be told about every change.

use chrono::Utc;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde_json::json;
use shared::domain::{TargetId, TargetKind};
use tracing::debug;

pub mod events;
pub mod notifier;

pub use events::{DialogEvent, DialogState};
pub use notifier::{NotifierCall, RecordingNotifier, ReportNotifier, TracingNotifier};

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Report submitted; the platform will review it shortly";
pub const SUBMIT_LOG_EVENT: &str = "report.submit";

pub struct ReportDialogController<N = TracingNotifier> {
    visible: bool,
    target_kind: TargetKind,
    target_id: Option<TargetId>,
    success_message: String,
    notifier: N,
    subscribers: Vec<Sender<DialogEvent>>,
}

impl Default for ReportDialogController<TracingNotifier> {
    fn default() -> Self {
        Self::new(TracingNotifier)
    }
}

impl<N: ReportNotifier> ReportDialogController<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            visible: false,
            target_kind: TargetKind::default(),
            target_id: None,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            notifier,
            subscribers: Vec::new(),
        }
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Shows the dialog for `kind`/`id`, replacing whatever target it had.
    pub fn open(&mut self, kind: TargetKind, id: Option<TargetId>) {
        self.target_kind = kind;
        self.target_id = id.clone();
        self.visible = true;
        debug!(target_kind = %kind, target_id = ?self.target_id, "report dialog opened");
        self.publish(DialogEvent::Opened { kind, id });
    }

    /// `open` with no arguments: a post, no identifier.
    pub fn open_default(&mut self) {
        self.open(TargetKind::default(), None);
    }

    /// Hides the dialog. The target is left as it was.
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        debug!(target_kind = %self.target_kind, "report dialog closed");
        self.publish(DialogEvent::Closed);
    }

    /// Hands `payload` to the notifier. The dialog stays open: the view
    /// shows its own "submitted" step and closes once the user confirms.
    pub fn submit(&mut self, payload: serde_json::Value) {
        let entry = json!({
            "target_kind": self.target_kind,
            "target_id": self.target_id,
            "submitted_at": Utc::now().to_rfc3339(),
            "payload": payload,
        });
        self.notifier.log(SUBMIT_LOG_EVENT, &entry);
        self.notifier.notify(&self.success_message);
        self.publish(DialogEvent::Submitted { payload });
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    pub fn target_id(&self) -> Option<&TargetId> {
        self.target_id.as_ref()
    }

    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    pub fn snapshot(&self) -> DialogState {
        DialogState {
            visible: self.visible,
            target_kind: self.target_kind,
            target_id: self.target_id.clone(),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Every later change is delivered to the returned receiver. Dropping
    /// the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<DialogEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self, event: DialogEvent) {
        let event_name = event.name();
        // Unbounded queues: sending only fails once the receiver is gone.
        self.subscribers.retain(|tx| match tx.send(event.clone()) {
            Ok(()) => true,
            Err(_) => {
                debug!(event = event_name, "dropping disconnected dialog subscriber");
                false
            }
        });
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
