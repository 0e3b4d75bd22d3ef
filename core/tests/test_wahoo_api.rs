use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use metricsbike_core::wahoo_api::WahooClient;
use metricsbike_core::{DashboardConfig, DashboardError, WorkoutId};

/// Lokal HTTP-server for én forespørsel: svarer med `status` og `body`,
/// og returnerer rå request-tekst (request-linje + headere).
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            req.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&req).into_owned()
    });

    (format!("http://{addr}/v1/workouts"), handle)
}

fn client_for(endpoint: String, per_page: u32) -> WahooClient {
    WahooClient::new(&DashboardConfig {
        api_endpoint: endpoint,
        per_page,
        request_timeout_secs: 5,
        access_token: None,
    })
}

#[test]
fn test_list_workouts_sends_per_page_and_bearer() {
    let body = r#"{"items": [
        {"id": 7, "name": "cycling", "workout_summary": {"file": {"url": "https://cdn.example.com/7.fit"}}},
        {"id": "w-8", "name": "gravel"}
    ], "total": 2}"#;
    let (endpoint, server) = serve_once("200 OK", body);

    let workouts = client_for(endpoint, 3).list_workouts("tok").unwrap();
    let req = server.join().unwrap();

    let request_line = req.lines().next().unwrap_or_default();
    assert!(
        request_line.starts_with("GET /v1/workouts?per_page=3 "),
        "request line: {request_line}"
    );
    assert!(
        req.lines().any(|l| l.eq_ignore_ascii_case("authorization: bearer tok")),
        "request: {req}"
    );

    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0].id, Some(WorkoutId::Num(7)));
    assert_eq!(workouts[0].file_url(), Some("https://cdn.example.com/7.fit"));
    assert_eq!(workouts[1].id, Some(WorkoutId::Text("w-8".to_string())));
}

#[test]
fn test_list_workouts_non_2xx_is_status_error() {
    let (endpoint, server) = serve_once("401 Unauthorized", r#"{"error": "invalid token"}"#);

    let err = client_for(endpoint, 10).list_workouts("expired").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, DashboardError::Status { status: 401 }), "got {err:?}");
}

#[test]
fn test_list_workouts_unexpected_body() {
    let (endpoint, server) = serve_once("200 OK", r#"{"data": []}"#);

    let err = client_for(endpoint, 10).list_workouts("tok").unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, DashboardError::UnexpectedResponse), "got {err:?}");
}
