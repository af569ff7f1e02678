use super::*;
use serde_json::json;

fn recording() -> ReportDialogController<RecordingNotifier> {
    ReportDialogController::new(RecordingNotifier::default())
}

#[test]
fn starts_closed_on_a_post_without_target() {
    let controller = recording();
    assert!(!controller.is_visible());
    assert_eq!(controller.target_kind(), TargetKind::Post);
    assert_eq!(controller.target_id(), None);
    assert_eq!(controller.snapshot(), DialogState::default());
}

#[test]
fn open_sets_every_field() {
    for kind in [TargetKind::Post, TargetKind::Comment] {
        for id in [None, Some(TargetId::Number(42)), Some(TargetId::from("p-9"))] {
            let mut controller = recording();
            controller.open(kind, id.clone());
            assert_eq!(
                controller.snapshot(),
                DialogState {
                    visible: true,
                    target_kind: kind,
                    target_id: id,
                }
            );
        }
    }
}

#[test]
fn open_default_targets_a_post_without_id() {
    let mut controller = recording();
    controller.open(TargetKind::Comment, Some(TargetId::Number(1)));
    controller.open_default();
    assert!(controller.is_visible());
    assert_eq!(controller.target_kind(), TargetKind::Post);
    assert_eq!(controller.target_id(), None);
}

#[test]
fn close_keeps_target_and_is_idempotent() {
    let mut controller = recording();
    controller.open(TargetKind::Comment, Some(TargetId::Number(42)));

    controller.close();
    let once = controller.snapshot();
    controller.close();

    assert_eq!(controller.snapshot(), once);
    assert_eq!(
        once,
        DialogState {
            visible: false,
            target_kind: TargetKind::Comment,
            target_id: Some(TargetId::Number(42)),
        }
    );
}

#[test]
fn submit_notifies_once_and_leaves_state_alone() {
    let mut controller = recording();
    controller.open(TargetKind::Comment, Some(TargetId::Number(42)));
    let before = controller.snapshot();

    controller.submit(json!({ "reason": "spam" }));

    assert_eq!(controller.snapshot(), before);
    assert_eq!(
        controller.notifier().notifications(),
        vec![DEFAULT_SUCCESS_MESSAGE.to_string()]
    );

    let entries = controller.notifier().log_entries();
    assert_eq!(entries.len(), 1);
    let (event, data) = &entries[0];
    assert_eq!(event, SUBMIT_LOG_EVENT);
    assert_eq!(data["payload"], json!({ "reason": "spam" }));
    assert_eq!(data["target_kind"], json!("comment"));
    assert_eq!(data["target_id"], json!(42));
    assert!(data["submitted_at"].is_string());
}

#[test]
fn submit_passes_any_payload_through_while_closed() {
    let mut controller = recording();
    controller.submit(json!([1, "two", null]));

    assert!(!controller.is_visible());
    let entries = controller.notifier().log_entries();
    assert_eq!(entries[0].1["payload"], json!([1, "two", null]));
    assert_eq!(entries[0].1["target_id"], serde_json::Value::Null);
}

#[test]
fn custom_success_message_is_used_for_notifications() {
    let mut controller = recording().with_success_message("thanks");
    controller.submit(json!({}));
    assert_eq!(controller.notifier().notifications(), vec!["thanks".to_string()]);
}

#[test]
fn subscribers_see_each_change_in_order() {
    let mut controller = recording();
    let events = controller.subscribe();

    controller.open(TargetKind::Comment, Some(TargetId::Number(3)));
    controller.submit(json!({ "reason": "other" }));
    controller.close();
    controller.close();

    let seen: Vec<DialogEvent> = events.try_iter().collect();
    assert_eq!(
        seen,
        vec![
            DialogEvent::Opened {
                kind: TargetKind::Comment,
                id: Some(TargetId::Number(3)),
            },
            DialogEvent::Submitted {
                payload: json!({ "reason": "other" }),
            },
            DialogEvent::Closed,
        ]
    );
}

#[test]
fn dropped_subscribers_are_pruned_on_next_change() {
    let mut controller = recording();
    let kept = controller.subscribe();
    drop(controller.subscribe());
    assert_eq!(controller.subscriber_count(), 2);

    controller.open_default();

    assert_eq!(controller.subscriber_count(), 1);
    assert_eq!(kept.try_iter().count(), 1);
}

#[test]
fn slow_subscriber_keeps_every_queued_event() {
    let mut controller = recording();
    let events = controller.subscribe();

    for id in 0..1_000 {
        controller.open(TargetKind::Comment, Some(TargetId::Number(id)));
        controller.close();
    }

    assert_eq!(controller.subscriber_count(), 1);
    assert_eq!(events.try_iter().count(), 2_000);
}

#[test]
fn shared_notifier_can_be_inspected_by_its_owner() {
    let notifier = RecordingNotifier::default();
    let mut controller = ReportDialogController::new(&notifier);
    controller.submit(json!({ "reason": "spam" }));
    controller.submit(json!({ "reason": "illegal" }));

    assert_eq!(notifier.notifications().len(), 2);
    notifier.clear();
    assert!(notifier.calls().is_empty());
}

#[test]
fn dialog_event_wire_shape_is_tagged() {
    let value = serde_json::to_value(DialogEvent::Opened {
        kind: TargetKind::Post,
        id: Some(TargetId::from("abc")),
    })
    .expect("serialize");
    assert_eq!(
        value,
        json!({ "type": "opened", "payload": { "kind": "post", "id": "abc" } })
    );
}
