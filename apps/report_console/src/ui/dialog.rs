use report_core::DialogState;
use shared::domain::ReportReason;

/// Which screen of the dialog the console is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStep {
    #[default]
    Hidden,
    Form,
    Submitted,
}

pub fn describe(state: &DialogState) -> String {
    let id = state
        .target_id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "visible={} target_kind={} target_id={id}",
        state.visible, state.target_kind
    )
}

pub fn render(state: &DialogState, step: ViewStep) -> Vec<String> {
    if !state.visible {
        return vec!["[report dialog hidden]".to_string()];
    }

    let title = match &state.target_id {
        Some(id) => format!("[report {} {id}]", state.target_kind),
        None => format!("[report {}]", state.target_kind),
    };

    match step {
        ViewStep::Hidden | ViewStep::Form => {
            let reasons = ReportReason::ALL
                .iter()
                .map(|reason| reason.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                title,
                format!("  choose a reason: {reasons}"),
                "  submit <reason> [detail] or 'close' to cancel".to_string(),
            ]
        }
        ViewStep::Submitted => vec![
            title,
            "  report submitted".to_string(),
            "  type 'done' to finish".to_string(),
        ],
    }
}
