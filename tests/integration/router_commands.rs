//! Command routing against a scripted instrument: request shapes, option validation and
//! exit codes.

use super::test_utils::{invoke, route, FakeTransport};
use serde_json::{json, Value};
use tempo::command::CommandId;
use tempo::config::TempoConfig;
use tempo::error::{TempoError, TransportError, TransportErrorKind};
use tempo::settings::Settings;

#[test]
fn test_no_command_pings_instrument() {
    let transport = FakeTransport::new().reply(200, r#"{"device":{"serialNumber":"T-1"}}"#);
    let run = invoke(&transport, &[]);

    run.result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo"]);
    let printed: Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(printed["httpCode"], 200);
    assert_eq!(printed["device"]["serialNumber"], "T-1");
}

#[test]
fn test_lid_commands() {
    let transport = FakeTransport::new()
        .reply(200, r#"{"lid":"open"}"#)
        .reply(200, "")
        .reply(200, "");
    invoke(&transport, &["lid"]).result.unwrap();
    invoke(&transport, &["open"]).result.unwrap();
    let close = invoke(&transport, &["close"]);

    close.result.unwrap();
    assert_eq!(close.stdout, "{\n  \"httpCode\": 200\n}\n");
    assert_eq!(
        transport.sent(),
        vec!["GET /tempo/lid", "PUT /tempo/lid/open", "PUT /tempo/lid/close"]
    );
}

#[test]
fn test_text_display() {
    let transport = FakeTransport::new().reply(200, r#"{"faults":[{"code":7},{"code":9}]}"#);
    let run = invoke(&transport, &["errors", "--display", "text"]);

    run.result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo/errors"]);
    assert_eq!(
        run.stdout,
        "  faults: \n      code: 7\n\n      code: 9\n  httpCode: 200\n"
    );
}

#[test]
fn test_errors_clear_and_protocols() {
    let transport = FakeTransport::new()
        .reply(200, r#"{"faults":[]}"#)
        .reply(200, r#"{"protocols":[]}"#)
        .reply(200, r#"{"protocols":[]}"#);
    invoke(&transport, &["errors", "--clear"]).result.unwrap();
    invoke(&transport, &["protocols"]).result.unwrap();
    invoke(&transport, &["protocols", "--public"]).result.unwrap();

    assert_eq!(
        transport.sent(),
        vec![
            "PUT /tempo/errors/clear",
            "GET /tempo/protocols/user",
            "GET /tempo/protocols/public"
        ]
    );
}

#[test]
fn test_run_control_commands() {
    let mut transport = FakeTransport::new();
    for _ in 0..4 {
        transport = transport.reply(200, r#"{"status":"stopped"}"#);
    }
    for command in ["stop", "skip", "pause", "resume"] {
        invoke(&transport, &[command]).result.unwrap();
    }
    assert_eq!(
        transport.sent(),
        vec![
            "PUT /tempo/protocol-run/stop",
            "PUT /tempo/protocol-run/skip",
            "PUT /tempo/protocol-run/pause",
            "PUT /tempo/protocol-run/resume"
        ]
    );
}

#[test]
fn test_reports_request_shapes() {
    let transport = FakeTransport::new()
        .reply(200, "[]")
        .reply(200, "[]")
        .reply(200, r#"{"id":"r7"}"#)
        .reply(200, r#"{"count":12}"#)
        .reply(200, r#"{"count":12}"#);
    invoke(&transport, &["reports"]).result.unwrap();
    invoke(&transport, &["reports", "--limit", "5", "--offset", "10"])
        .result
        .unwrap();
    invoke(&transport, &["reports", "--id", "r7"]).result.unwrap();
    invoke(&transport, &["reports", "--count"]).result.unwrap();
    // An offset of zero is the same as no offset.
    invoke(&transport, &["reports", "--count", "--offset", "0"])
        .result
        .unwrap();

    assert_eq!(
        transport.sent(),
        vec![
            "GET /tempo/run-reports",
            "GET /tempo/run-reports?limit=5&offset=10",
            "GET /tempo/run-reports/r7",
            "GET /tempo/run-reports/count",
            "GET /tempo/run-reports/count",
        ]
    );
}

#[test]
fn test_list_response_is_printed_without_marker() {
    let transport = FakeTransport::new().reply(200, r#"[{"id":"r1"}]"#);
    let run = invoke(&transport, &["reports"]);

    run.result.unwrap();
    assert_eq!(run.stdout, "[\n  {\n    \"id\": \"r1\"\n  }\n]\n");
}

#[test]
fn test_invalid_reports_options_never_connect() {
    let transport = FakeTransport::new();
    for args in [
        &["reports", "--id", "r7", "--count"][..],
        &["reports", "--id", "r7", "--limit", "2"][..],
        &["reports", "--count", "--limit", "2"][..],
    ] {
        let run = invoke(&transport, args);
        let err = run.result.unwrap_err();
        assert!(matches!(err, TempoError::InvalidOptions(_)), "{:?}", args);
        assert_eq!(err.exit_code(), 1);
        assert!(!run.connected);
        assert!(run.stdout.is_empty());
    }
    assert!(transport.sent().is_empty());
}

#[test]
fn test_run_status_without_protocol() {
    let transport = FakeTransport::new().reply(200, r#"{"status":"idle"}"#);
    invoke(&transport, &["run"]).result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo/protocol-run"]);
}

#[test]
fn test_run_start_only_options_require_protocol() {
    let transport = FakeTransport::new();
    for args in [
        &["run", "--public"][..],
        &["run", "--templates"][..],
        &["run", "--plate", "P-1"][..],
        &["run", "--name", "overnight"][..],
        &["run", "--volume", "20"][..],
        &["run", "--temp", "100"][..],
    ] {
        let run = invoke(&transport, args);
        assert!(
            matches!(run.result, Err(TempoError::InvalidOptions(_))),
            "{:?}",
            args
        );
        assert!(!run.connected);
    }
}

#[test]
fn test_run_start_with_defaults() {
    let transport = FakeTransport::new().reply(200, r#"{"status":"running"}"#);
    let run = invoke(
        &transport,
        &["run", "--protocol", "pcr40", "--templates", "--volume", "0", "--temp", "105"],
    );

    run.result.unwrap();
    let sent = transport.sent_requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_string(), "POST /tempo/protocol-run");
    assert_eq!(
        sent[0].body.clone().unwrap(),
        json!({
            "protocolName": "pcr40",
            "location": "templates",
            "runName": "runpcr404321",
            "plateID": "plate4321",
            "lidTemp": 105
        })
    );
}

#[test]
fn test_run_public_and_templates_rejected() {
    let transport = FakeTransport::new();
    let run = invoke(
        &transport,
        &["run", "--protocol", "pcr40", "--public", "--templates"],
    );
    assert_eq!(
        run.result.unwrap_err().to_string(),
        "Error. The --public and --templates options are mutually exclusive."
    );
    assert!(!run.connected);
}

#[test]
fn test_http_status_becomes_exit_code() {
    let transport = FakeTransport::new().reply(401, "Unauthorized");
    let run = invoke(&transport, &["status"]);

    let err = run.result.unwrap_err();
    assert_eq!(err.exit_code(), 401);
    assert_eq!(err.to_string(), "HTTP error: 401");
    assert!(run.stdout.is_empty());
}

#[test]
fn test_transport_failure_becomes_exit_code() {
    let transport = FakeTransport::new().fail(TransportError::new(
        TransportErrorKind::Connection,
        "Could not establish connection",
    ));
    let run = invoke(&transport, &["lid"]);

    let err = run.result.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        err.to_string(),
        "HTTP client error: Could not establish connection"
    );
}

#[test]
fn test_unparseable_response_fails() {
    let transport = FakeTransport::new().reply(200, "<html>");
    let run = invoke(&transport, &["status"]);
    assert!(matches!(run.result, Err(TempoError::Parse(_))));
    assert!(run.stdout.is_empty());
}

#[test]
fn test_more_than_one_command_is_rejected() {
    let transport = FakeTransport::new();
    let run = route(
        &transport,
        &Settings::default(),
        &TempoConfig::default(),
        None,
        &[CommandId::Open, CommandId::Close],
    );
    assert_eq!(
        run.result.unwrap_err().to_string(),
        "Error. No more than one command"
    );
    assert!(!run.connected);
}

#[test]
fn test_license_needs_no_connection() {
    let transport = FakeTransport::new();
    let run = invoke(&transport, &["license"]);

    run.result.unwrap();
    assert!(!run.connected);
    assert!(run.stdout.contains("MIT License"));
}
