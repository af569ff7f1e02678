//! Notification and logging collaborators the controller hands submissions to.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use tracing::info;

use crate::SUBMIT_LOG_EVENT;

/// Fire-and-forget sink for user-facing notices and structured log entries.
pub trait ReportNotifier {
    fn notify(&self, message: &str);
    fn log(&self, event: &str, data: &serde_json::Value);
}

impl<N: ReportNotifier + ?Sized> ReportNotifier for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        (**self).log(event, data)
    }
}

impl<N: ReportNotifier + ?Sized> ReportNotifier for Rc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        (**self).log(event, data)
    }
}

impl<N: ReportNotifier + ?Sized> ReportNotifier for Arc<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        (**self).log(event, data)
    }
}

/// Emits everything through `tracing` under the `report` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl ReportNotifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "report", %message, "notification");
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        info!(target: "report", event, data = %data, "{}", log_message(event));
    }
}

fn log_message(event: &str) -> &str {
    if event == SUBMIT_LOG_EVENT {
        "[Report Service] Submitting report"
    } else {
        event
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotifierCall {
    Notify(String),
    Log {
        event: String,
        data: serde_json::Value,
    },
}

/// Keeps every call in memory, in order. Handy for views that render
/// notices themselves and for asserting on submissions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: RefCell<Vec<NotifierCall>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<NotifierCall> {
        self.calls.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                NotifierCall::Notify(message) => Some(message.clone()),
                NotifierCall::Log { .. } => None,
            })
            .collect()
    }

    pub fn log_entries(&self) -> Vec<(String, serde_json::Value)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                NotifierCall::Log { event, data } => Some((event.clone(), data.clone())),
                NotifierCall::Notify(_) => None,
            })
            .collect()
    }

    /// Hands back everything recorded so far and starts over empty.
    pub fn take(&self) -> Vec<NotifierCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ReportNotifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.calls
            .borrow_mut()
            .push(NotifierCall::Notify(message.to_string()));
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        self.calls.borrow_mut().push(NotifierCall::Log {
            event: event.to_string(),
            data: data.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_message_is_keyed_on_event_name() {
        assert_eq!(
            log_message(SUBMIT_LOG_EVENT),
            "[Report Service] Submitting report"
        );
        assert_eq!(log_message("report.withdraw"), "report.withdraw");
    }

    #[test]
    fn take_empties_the_recording() {
        let notifier = RecordingNotifier::default();
        notifier.notify("first");
        notifier.log("report.withdraw", &serde_json::json!({ "id": 1 }));

        let calls = notifier.take();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], NotifierCall::Notify("first".to_string()));
        assert!(notifier.calls().is_empty());
    }
}
