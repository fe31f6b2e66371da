use super::*;

// =============================================================================
// parse_feed
// =============================================================================

#[test]
fn parse_feed_maps_wire_fields() {
    let body = r#"{"messages":[{"uuid":"a","name":"Bob","time":1000,"text":"hi"}]}"#;
    let records = parse_feed(body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "a");
    assert_eq!(records[0].author_display_name, "Bob");
    assert!((records[0].sent_at - 1000.0).abs() < f64::EPSILON);
    assert_eq!(records[0].body, "hi");
}

#[test]
fn parse_feed_accepts_fractional_time() {
    let body = r#"{"messages":[{"uuid":"a","name":"Dr. Ana","time":1700000000123.456,"text":"hello"}]}"#;
    let records = parse_feed(body).unwrap();
    assert!((records[0].sent_at - 1_700_000_000_123.456).abs() < 1e-3);
}

#[test]
fn parse_feed_keeps_remote_order() {
    let body = r#"{"messages":[
        {"uuid":"b","name":"x","time":2000,"text":"second"},
        {"uuid":"a","name":"x","time":1000,"text":"first"}
    ]}"#;
    let ids: Vec<_> = parse_feed(body).unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn parse_feed_rejects_missing_messages() {
    assert!(matches!(parse_feed(r#"{"items":[]}"#), Err(ChatError::Decode(_))));
}

#[test]
fn parse_feed_rejects_non_json() {
    assert!(matches!(parse_feed("<html>"), Err(ChatError::Decode(_))));
}

// =============================================================================
// OutgoingDraft
// =============================================================================

#[test]
fn outgoing_draft_serializes_as_uuid_and_text() {
    let draft = OutgoingDraft { id: "x-1".into(), body: "hello".into() };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json, serde_json::json!({"uuid": "x-1", "text": "hello"}));
}

#[test]
fn outgoing_draft_local_record_is_authored_by_you() {
    let draft = OutgoingDraft { id: "x-1".into(), body: "hello".into() };
    let record = draft.to_local_record(42.0);
    assert_eq!(record.id, "x-1");
    assert_eq!(record.author_display_name, LOCAL_AUTHOR);
    assert_eq!(record.body, "hello");
    assert!((record.sent_at - 42.0).abs() < f64::EPSILON);
}

// =============================================================================
// clock formatting
// =============================================================================

#[test]
fn format_clock_in_utc_pads_fields() {
    // 1970-01-01T01:02:03Z
    let ms = f64::from((3600 + 2 * 60 + 3) * 1000);
    assert_eq!(format_clock_in(ms, UtcOffset::UTC), "01:02:03");
}

#[test]
fn format_clock_in_applies_offset() {
    let offset = UtcOffset::from_hms(2, 0, 0).unwrap();
    assert_eq!(format_clock_in(0.0, offset), "02:00:00");
}

#[test]
fn format_clock_in_out_of_range_falls_back_to_epoch() {
    assert_eq!(format_clock_in(f64::MAX, UtcOffset::UTC), "00:00:00");
}

#[test]
fn rendered_message_copies_record_fields() {
    let record = MessageRecord {
        id: "a".into(),
        author_display_name: "Bob".into(),
        sent_at: 1000.0,
        body: "hi".into(),
    };
    let rendered = RenderedMessage::from_record(&record);
    assert_eq!(rendered.id, "a");
    assert_eq!(rendered.name, "Bob");
    assert_eq!(rendered.text, "hi");
    assert_eq!(rendered.time.len(), 8);
}

#[test]
fn now_millis_is_after_2020() {
    assert!(now_millis() > 1_577_836_800_000.0);
}
