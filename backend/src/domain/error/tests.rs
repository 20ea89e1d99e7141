//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
#[case(Error::service_unavailable("pool exhausted"), ErrorCode::ServiceUnavailable)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_missing_trace() {
    let json = serde_json::to_value(Error::service_unavailable("down")).expect("serialise");
    assert_eq!(
        json,
        serde_json::json!({ "code": "service_unavailable", "message": "down" })
    );

    let with_trace = Error::internal("boom").with_trace_id("abc");
    let json = serde_json::to_value(with_trace).expect("serialise");
    assert_eq!(json["traceId"], "abc");
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::internal("boom").to_string(), "boom");
}
