//! One console session: a single dialog controller plus the view step the
//! console is currently showing.

use std::rc::Rc;

use crossbeam_channel::Receiver;
use report_core::{
    DialogEvent, NotifierCall, RecordingNotifier, ReportDialogController, ReportNotifier,
    TracingNotifier,
};

use crate::{
    config::Settings,
    controller::actions::{Action, HELP},
    ui::dialog::{self, ViewStep},
};

/// Forwards every call to `tracing` and records it so the console can
/// print pending notices after each action.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    recorded: RecordingNotifier,
}

impl ConsoleNotifier {
    /// Notices raised since the last call, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.recorded
            .take()
            .into_iter()
            .filter_map(|call| match call {
                NotifierCall::Notify(message) => Some(message),
                NotifierCall::Log { .. } => None,
            })
            .collect()
    }
}

impl ReportNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        TracingNotifier.notify(message);
        self.recorded.notify(message);
    }

    fn log(&self, event: &str, data: &serde_json::Value) {
        TracingNotifier.log(event, data);
        self.recorded.log(event, data);
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub quit: bool,
}

pub struct ConsoleSession {
    controller: ReportDialogController<Rc<ConsoleNotifier>>,
    notifier: Rc<ConsoleNotifier>,
    events: Option<Receiver<DialogEvent>>,
    step: ViewStep,
    json: bool,
}

impl ConsoleSession {
    pub fn new(settings: &Settings, json: bool) -> Self {
        let notifier = Rc::new(ConsoleNotifier::default());
        let mut controller = ReportDialogController::new(Rc::clone(&notifier))
            .with_success_message(settings.success_message.clone());
        let events = settings.echo_events.then(|| controller.subscribe());

        Self {
            controller,
            notifier,
            events,
            step: ViewStep::Hidden,
            json,
        }
    }

    pub fn step(&self) -> ViewStep {
        self.step
    }

    pub fn controller(&self) -> &ReportDialogController<Rc<ConsoleNotifier>> {
        &self.controller
    }

    pub fn handle(&mut self, action: Action) -> Outcome {
        let mut outcome = Outcome::default();

        match action {
            Action::Open { kind, id } => {
                self.controller.open(kind, id);
                self.step = ViewStep::Form;
                outcome.lines.extend(self.render());
            }
            Action::Close => {
                self.controller.close();
                self.step = ViewStep::Hidden;
                outcome.lines.extend(self.render());
            }
            Action::Submit(payload) => {
                if !self.controller.is_visible() {
                    tracing::warn!("report submitted while the dialog is hidden");
                }
                self.controller.submit(payload);
                if self.controller.is_visible() {
                    self.step = ViewStep::Submitted;
                }
                outcome.lines.extend(self.render());
            }
            Action::Done => {
                if self.step == ViewStep::Submitted {
                    self.controller.close();
                    self.step = ViewStep::Hidden;
                    outcome.lines.extend(self.render());
                } else {
                    outcome
                        .lines
                        .push("nothing to acknowledge; submit a report first".to_string());
                }
            }
            Action::State => outcome.lines.push(self.state_line()),
            Action::Help => outcome.lines.push(HELP.to_string()),
            Action::Quit => outcome.quit = true,
        }

        outcome.lines.extend(
            self.notifier
                .drain()
                .into_iter()
                .map(|message| format!("notice: {message}")),
        );
        outcome.lines.extend(self.drain_events());
        outcome
    }

    fn render(&self) -> Vec<String> {
        dialog::render(&self.controller.snapshot(), self.step)
    }

    fn state_line(&self) -> String {
        let state = self.controller.snapshot();
        if self.json {
            serde_json::to_string(&state)
                .unwrap_or_else(|err| format!("failed to serialize state: {err}"))
        } else {
            dialog::describe(&state)
        }
    }

    fn drain_events(&self) -> Vec<String> {
        let Some(events) = &self.events else {
            return Vec::new();
        };

        events
            .try_iter()
            .map(|event| match serde_json::to_string(&event) {
                Ok(encoded) => format!("event: {encoded}"),
                Err(_) => format!("event: {}", event.name()),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
