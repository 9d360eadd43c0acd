use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use kanboard_core::client::{KanboardApi, KanboardClient, KanboardError};
use kanboard_core::config::Settings;
use kanboard_core::rpc::{NamedParams, Params};

fn settings(endpoint: String, username: &str, password: &str) -> Settings {
    Settings {
        endpoint,
        api_key: "secret-token".to_string(),
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn api_key_header_and_envelope_are_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc.php")
            .header("content-type", "application/json")
            .header("x-api-auth", "secret-token")
            .body_contains("\"jsonrpc\":\"2.0\"")
            .body_contains("\"method\":\"getTask\"")
            .body_contains("\"params\":{\"task_id\":42}");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": {"id": "42", "title": "Ship"}}));
    });

    let client =
        KanboardClient::new(&settings(server.url("/jsonrpc.php"), "", "")).expect("client");
    assert_eq!(client.auth_scheme(), "api-key");
    let result = client
        .call("getTask", NamedParams::new().with("task_id", 42).into())
        .await
        .expect("call");

    mock.assert();
    assert_eq!(result, json!({"id": "42", "title": "Ship"}));
}

#[tokio::test]
async fn basic_auth_is_used_when_credentials_are_set() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc.php")
            .header("authorization", "Basic YWRtaW46c2VjcmV0")
            .body_contains("\"method\":\"getVersion\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "1.2.30"}));
    });

    let client = KanboardClient::new(&settings(server.url("/jsonrpc.php"), "admin", "secret"))
        .expect("client");
    assert_eq!(client.auth_scheme(), "basic");
    let result = client.call("getVersion", Params::None).await.expect("call");

    mock.assert();
    assert_eq!(result, json!("1.2.30"));
}

#[tokio::test]
async fn positional_params_are_sent_as_array() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/jsonrpc.php")
            .body_contains("\"params\":[3,\"Backlog\"]");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": {"id": 9}}));
    });

    let client =
        KanboardClient::new(&settings(server.url("/jsonrpc.php"), "", "")).expect("client");
    client
        .call(
            "getSwimlaneByName",
            Params::positional(vec![json!(3), json!("Backlog")]),
        )
        .await
        .expect("call");
    mock.assert();
}

#[tokio::test]
async fn non_200_status_is_reported_with_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/jsonrpc.php");
        then.status(403)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": {"id": 1}}));
    });

    let client =
        KanboardClient::new(&settings(server.url("/jsonrpc.php"), "", "")).expect("client");
    let err = client
        .call("getAllProjects", Params::None)
        .await
        .expect_err("status error");

    assert_eq!(err.status_code(), Some(403));
    let message = err.to_string();
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("Forbidden"), "{message}");
}

#[tokio::test]
async fn remote_error_wins_over_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/jsonrpc.php");
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"id": 5},
            "error": {"code": -32602, "message": "Invalid params"}
        }));
    });

    let client =
        KanboardClient::new(&settings(server.url("/jsonrpc.php"), "", "")).expect("client");
    let err = client
        .call("createTask", NamedParams::new().with("title", "x").into())
        .await
        .expect_err("remote error");

    match err {
        KanboardError::Remote { code, ref message } => {
            assert_eq!(code, -32602);
            assert_eq!(message, "Invalid params");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/jsonrpc.php");
        then.status(200).body("<html>maintenance</html>");
    });

    let client =
        KanboardClient::new(&settings(server.url("/jsonrpc.php"), "", "")).expect("client");
    let err = client
        .call("getMe", Params::None)
        .await
        .expect_err("decode error");
    assert!(matches!(err, KanboardError::Decode(_)), "{err}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let client = KanboardClient::new(&settings(
        "http://127.0.0.1:1/jsonrpc.php".to_string(),
        "",
        "",
    ))
    .expect("client");
    let err = client
        .call("getMe", Params::None)
        .await
        .expect_err("transport error");
    assert!(matches!(err, KanboardError::Transport(_)), "{err}");
    assert!(err.to_string().starts_with("failed to send request"));
}
