use chart_panel::api::{LatestMessageSelector, Selection, select_latest};
use chart_panel::core::{MessageEvent, RawChartMessage, ReceiptTime};

const TOPIC: &str = "/chart";
const SCHEMA: &str = "plotly_msgs/msg/Chart";

fn event_at(topic: &str, sec: u32, nsec: u32, data: &str) -> MessageEvent {
    MessageEvent::new(
        topic,
        SCHEMA,
        ReceiptTime::new(sec, nsec).expect("valid receipt time"),
        RawChartMessage::new(data, ""),
    )
}

#[test]
fn no_topic_clears_regardless_of_input() {
    let previous = event_at(TOPIC, 1, 0, "[]");
    let incoming = vec![event_at(TOPIC, 2, 0, "[]")];
    assert_eq!(
        select_latest(Some(&previous), None, &incoming),
        Selection::Cleared
    );
    assert_eq!(select_latest(None, None, &[]), Selection::Cleared);
}

#[test]
fn empty_batch_retains_previous() {
    let previous = event_at(TOPIC, 1, 0, "[]");
    assert_eq!(
        select_latest(Some(&previous), Some(TOPIC), &[]),
        Selection::Retained
    );
}

#[test]
fn first_message_replaces_absent_selection() {
    let incoming = vec![event_at(TOPIC, 5, 0, "[1]")];
    assert_eq!(
        select_latest(None, Some(TOPIC), &incoming),
        Selection::Replaced(&incoming[0])
    );
}

#[test]
fn last_message_of_batch_is_compared() {
    let previous = event_at(TOPIC, 1, 0, "[]");
    let incoming = vec![
        event_at(TOPIC, 2, 0, "[1]"),
        event_at(TOPIC, 3, 0, "[2]"),
        event_at(TOPIC, 4, 0, "[3]"),
    ];
    assert_eq!(
        select_latest(Some(&previous), Some(TOPIC), &incoming),
        Selection::Replaced(&incoming[2])
    );
}

#[test]
fn older_or_equal_receipt_time_keeps_previous() {
    let previous = event_at(TOPIC, 10, 500, "[]");
    let older = vec![event_at(TOPIC, 10, 499, "[1]")];
    let tie = vec![event_at(TOPIC, 10, 500, "[2]")];
    assert_eq!(
        select_latest(Some(&previous), Some(TOPIC), &older),
        Selection::Retained
    );
    assert_eq!(
        select_latest(Some(&previous), Some(TOPIC), &tie),
        Selection::Retained
    );
}

#[test]
fn out_of_order_batch_uses_its_last_message_only() {
    let previous = event_at(TOPIC, 5, 0, "[]");
    let incoming = vec![event_at(TOPIC, 9, 0, "[1]"), event_at(TOPIC, 4, 0, "[2]")];
    assert_eq!(
        select_latest(Some(&previous), Some(TOPIC), &incoming),
        Selection::Retained
    );
}

#[test]
fn messages_on_other_topics_are_ignored() {
    let incoming = vec![
        event_at(TOPIC, 2, 0, "[1]"),
        event_at("/other", 3, 0, "[2]"),
    ];
    assert_eq!(
        select_latest(None, Some(TOPIC), &incoming),
        Selection::Replaced(&incoming[0])
    );
    assert_eq!(
        select_latest(None, Some("/missing"), &incoming),
        Selection::Retained
    );
}

#[test]
fn messages_with_unrecognized_schema_are_skipped() {
    let mut foreign = event_at(TOPIC, 9, 0, "[2]");
    foreign.schema_name = "sensor_msgs/Image".to_owned();
    let mut string_payload = event_at(TOPIC, 4, 0, "[1]");
    string_payload.schema_name = "std_msgs/String".to_owned();

    let incoming = vec![string_payload, foreign];
    assert_eq!(
        select_latest(None, Some(TOPIC), &incoming),
        Selection::Replaced(&incoming[0])
    );
    assert_eq!(
        select_latest(None, Some(TOPIC), &incoming[1..]),
        Selection::Retained
    );
}

#[test]
fn selector_is_idempotent_for_redelivered_message() {
    let mut selector = LatestMessageSelector::new();
    let frame = vec![event_at(TOPIC, 7, 0, "[1]")];

    assert!(selector.apply(Some(TOPIC), &frame));
    let first = selector.current().cloned();
    assert!(!selector.apply(Some(TOPIC), &frame));
    assert_eq!(selector.current().cloned(), first);
}

#[test]
fn selector_clear_and_reset() {
    let mut selector = LatestMessageSelector::new();
    let frame = vec![event_at(TOPIC, 7, 0, "[1]")];
    assert!(selector.apply(Some(TOPIC), &frame));

    assert!(selector.apply(None, &frame));
    assert!(selector.current().is_none());
    assert!(!selector.apply(None, &[]));

    assert!(selector.apply(Some(TOPIC), &frame));
    selector.reset();
    assert!(selector.current().is_none());
}
