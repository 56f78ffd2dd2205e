//! Monitoring through the router: poll counts, stop conditions and the final print.

use super::test_utils::{invoke, FakeTransport};
use tempo::error::TempoError;

#[test]
fn test_lid_monitor_polls_until_settled() {
    let transport = FakeTransport::new()
        .reply(200, r#"{"lid":"opening"}"#)
        .reply(200, r#"{"lid":"opening"}"#)
        .reply(200, r#"{"lid":"open"}"#);
    let run = invoke(&transport, &["lid", "--monitor", "--interval", "0"]);

    run.result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo/lid"; 3]);
    assert_eq!(run.stdout.matches("\"opening\"").count(), 2);
    assert!(run
        .stdout
        .ends_with("{\n  \"httpCode\": 200,\n  \"lid\": \"open\"\n}\n"));
}

#[test]
fn test_status_monitor_settled_on_first_poll() {
    let transport = FakeTransport::new().reply(200, r#"{"status":"idle"}"#);
    let run = invoke(&transport, &["status", "--monitor", "--interval", "0"]);

    run.result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo/status"]);
    assert_eq!(
        run.stdout,
        "{\n  \"httpCode\": 200,\n  \"status\": \"idle\"\n}\n"
    );
}

#[test]
fn test_failed_poll_stops_monitor_with_http_status() {
    let transport = FakeTransport::new()
        .reply(200, r#"{"lid":"closing"}"#)
        .reply(500, "Internal Server Error");
    let run = invoke(&transport, &["lid", "--monitor", "--interval", "0"]);

    let err = run.result.unwrap_err();
    assert!(matches!(err, TempoError::HttpStatus(500)));
    assert_eq!(err.exit_code(), 500);
    assert_eq!(transport.sent().len(), 2);
    assert_eq!(run.stdout.matches("\"closing\"").count(), 1);
}

#[test]
fn test_started_run_is_monitored_while_active() {
    let transport = FakeTransport::new()
        .reply(200, r#"{"status":"running"}"#)
        .reply(200, r#"{"status":"paused"}"#)
        .reply(200, r#"{"status":"complete"}"#);
    let run = invoke(
        &transport,
        &[
            "run",
            "--protocol",
            "pcr40",
            "--plate",
            "P-1",
            "--name",
            "overnight",
            "--monitor",
            "--interval",
            "0",
        ],
    );

    run.result.unwrap();
    assert_eq!(
        transport.sent(),
        vec![
            "POST /tempo/protocol-run",
            "GET /tempo/protocol-run",
            "GET /tempo/protocol-run"
        ]
    );
    assert!(run.stdout.contains("\"paused\""));
    assert!(run.stdout.ends_with("\"status\": \"complete\"\n}\n"));
}

#[test]
fn test_inactive_run_is_printed_without_monitoring() {
    let transport = FakeTransport::new().reply(200, r#"{"status":"idle"}"#);
    let run = invoke(&transport, &["run", "--monitor", "--interval", "0"]);

    run.result.unwrap();
    assert_eq!(transport.sent(), vec!["GET /tempo/protocol-run"]);
    assert_eq!(
        run.stdout,
        "{\n  \"httpCode\": 200,\n  \"status\": \"idle\"\n}\n"
    );
}

#[test]
fn test_rejected_run_start_is_not_monitored() {
    let transport = FakeTransport::new().reply(409, r#"{"error":"busy"}"#);
    let run = invoke(
        &transport,
        &["run", "--protocol", "pcr40", "--monitor", "--interval", "0"],
    );

    assert_eq!(run.result.unwrap_err().exit_code(), 409);
    assert_eq!(transport.sent().len(), 1);
}
