use api::{ApiError, ChartKind, ExplainRequest, GenerateResponse, SelectedFile, FILES_FIELD};
use serde_json::{json, Value};

fn backend_reply() -> Value {
    json!({
        "analysis_result": "## Strengths\n- Loyal customers",
        "charts_data": [
            {
                "title": "Revenue by quarter",
                "type": "bar",
                "data": { "labels": ["Q1", "Q2"], "datasets": [{ "data": [10, 12] }] },
                "options": { "plugins": { "legend": { "display": false } } }
            },
            {
                "type": "polarArea",
                "data": { "labels": ["A"], "datasets": [{ "data": [1] }] }
            }
        ]
    })
}

#[test]
fn generate_reply_decodes_with_defaults() {
    let reply: GenerateResponse = serde_json::from_value(backend_reply()).unwrap();
    let (text, charts) = reply.into_parts();

    assert!(text.starts_with("## Strengths"));
    assert_eq!(charts.len(), 2);
    assert_eq!(charts[0].kind, ChartKind::Bar);
    assert_eq!(charts[1].kind, ChartKind::PolarArea);
    assert_eq!(charts[1].title, api::DEFAULT_CHART_TITLE);
}

#[test]
fn retained_charts_go_back_unchanged() {
    let reply: GenerateResponse = serde_json::from_value(backend_reply()).unwrap();
    let (_, charts) = reply.into_parts();
    let request = ExplainRequest {
        files: vec![SelectedFile::new("q3.csv", b"a,b".to_vec())],
        charts,
    };

    let payload: Value = serde_json::from_str(&request.charts_payload().unwrap()).unwrap();

    let sent = &payload[0];
    assert_eq!(sent["type"], "bar");
    assert_eq!(sent["options"]["plugins"]["legend"]["display"], false);
    assert_eq!(payload[1]["type"], "polarArea");
}

#[test]
fn only_backend_errors_carry_a_user_message() {
    let reported = ApiError::Backend {
        status: 400,
        message: "No files uploaded".into(),
    };
    assert_eq!(reported.reported_message(), Some("No files uploaded"));

    for err in [
        ApiError::Status(502),
        ApiError::Transport("connection refused".into()),
        ApiError::Decode("expected value".into()),
    ] {
        assert_eq!(err.reported_message(), None, "{err}");
    }
}

#[test]
fn files_use_the_repeated_array_field() {
    assert_eq!(FILES_FIELD, "files[]");
    assert_eq!(SelectedFile::new("plan.PDF", Vec::<u8>::new()).mime, "application/pdf");
}
