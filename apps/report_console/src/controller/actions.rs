//! User actions accepted by the console, one per input line.

use shared::{
    domain::{ReportForm, TargetId, TargetKind},
    error::ParseError,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Open {
        kind: TargetKind,
        id: Option<TargetId>,
    },
    Close,
    Submit(serde_json::Value),
    State,
    Done,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("unknown action '{0}' (try 'help')")]
    UnknownAction(String),
    #[error("'{action}' takes at most {max} argument(s)")]
    TooManyArguments { action: &'static str, max: usize },
    #[error("'submit' needs a reason or a JSON payload")]
    MissingPayload,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub const HELP: &str = "\
actions:
  open [post|comment] [id]    show the report dialog for a target
  close                       cancel and hide the dialog
  submit <json>               submit an arbitrary JSON payload
  submit <reason> [detail..]  submit a reason (spam, harassment, misinformation, illegal, other)
  done                        acknowledge the submitted step and close
  state                       print the current dialog state
  quit                        end the session";

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_action(line: &str) -> Result<Option<Action>, ActionError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb.to_ascii_lowercase().as_str() {
        "open" => parse_open(rest)?,
        "close" | "cancel" => no_arguments("close", rest, Action::Close)?,
        "submit" => Action::Submit(parse_payload(rest)?),
        "state" => no_arguments("state", rest, Action::State)?,
        "done" => no_arguments("done", rest, Action::Done)?,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => return Err(ActionError::UnknownAction(other.to_string())),
    };

    Ok(Some(action))
}

fn no_arguments(action: &'static str, rest: &str, parsed: Action) -> Result<Action, ActionError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ActionError::TooManyArguments { action, max: 0 })
    }
}

fn parse_open(rest: &str) -> Result<Action, ActionError> {
    let mut args = rest.split_whitespace();
    let kind = match args.next() {
        Some(raw) => raw.parse::<TargetKind>()?,
        None => TargetKind::default(),
    };
    let id = args.next().map(TargetId::parse).transpose()?;
    if args.next().is_some() {
        return Err(ActionError::TooManyArguments {
            action: "open",
            max: 2,
        });
    }

    Ok(Action::Open { kind, id })
}

fn parse_payload(rest: &str) -> Result<serde_json::Value, ActionError> {
    if rest.is_empty() {
        return Err(ActionError::MissingPayload);
    }

    match serde_json::from_str(rest) {
        Ok(payload) => return Ok(payload),
        Err(err) if rest.starts_with(['{', '[', '"']) => return Err(err.into()),
        Err(_) => {}
    }

    let (reason, detail) = match rest.split_once(char::is_whitespace) {
        Some((reason, detail)) => (reason, detail.trim()),
        None => (rest, ""),
    };
    let form = ReportForm::new(reason.parse()?).with_detail(detail);
    Ok(form.into_payload())
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
