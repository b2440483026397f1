//! End-to-end token lifecycle against a stub Orchestrator.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vco_integration::{vco_config, ApiTokenParams, UserType, VcoClient, VcoError};

fn client_for(server: &MockServer, user_type: UserType) -> VcoClient {
    let config = vco_config()
        .hostname(server.uri())
        .username("admin@example.com")
        .password("hunter2")
        .user_type(user_type)
        .build()
        .unwrap();
    VcoClient::new(config).unwrap()
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/portal/rest/login/enterpriseLogin"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "velocloud.session=abc123; Path=/; HttpOnly")
                .set_body_json(json!({})),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn rpc_result(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"jsonrpc": "2.0", "id": 0, "result": value}))
}

#[tokio::test]
async fn full_lifecycle_switches_from_cookies_to_token_auth() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    // create and download ride on the login cookie
    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(json!({"method": "enterprise/createApiToken"})))
        .and(header("Cookie", "velocloud.session=abc123"))
        .respond_with(rpc_result(json!({"id": "tok-1"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(
            json!({"method": "enterprise/downloadApiToken", "params": {"id": "tok-1"}}),
        ))
        .and(header("Cookie", "velocloud.session=abc123"))
        .respond_with(rpc_result(json!({"id": "tok-1", "token": "secret-xyz"})))
        .expect(1)
        .mount(&server)
        .await;

    // list and revoke carry the downloaded bearer token
    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(json!({"method": "enterprise/getApiTokens", "params": {}})))
        .and(header("Authorization", "Token secret-xyz"))
        .respond_with(rpc_result(json!([{"id": "tok-1", "name": "API_TOKEN_NAME"}])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(
            json!({"method": "enterprise/revokeApiToken", "params": {"id": "tok-1"}}),
        ))
        .and(header("Authorization", "Token secret-xyz"))
        .respond_with(rpc_result(json!(1)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, UserType::Enterprise);
    client.authenticate().await.unwrap();

    let params = ApiTokenParams::for_enterprise(1, 1, "API_TOKEN_NAME", 300_000);
    let token_id = client.run_token_lifecycle(params).await.unwrap();
    assert_eq!(token_id.to_string(), "tok-1");

    // Once the token is downloaded, cookies no longer appear on the wire.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    for request in &requests[3..] {
        assert!(request.headers.get("cookie").is_none());
    }

    // JSON-RPC ids increased by one per call.
    let ids: Vec<u64> = requests[1..]
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            body["id"].as_u64().unwrap()
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn create_failure_abandons_the_sequence() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(json!({"method": "enterprise/createApiToken"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "tokenCreationFailed"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, UserType::Enterprise);
    client.authenticate().await.unwrap();

    let params = ApiTokenParams::for_enterprise(1, 1, "API_TOKEN_NAME", 300_000);
    let error = client.run_token_lifecycle(params).await.unwrap_err();
    match error {
        VcoError::Api(api) => assert_eq!(api.message, "tokenCreationFailed"),
        other => panic!("expected API error, got {:?}", other),
    }

    // login + failed create, nothing else
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn operator_role_uses_network_prefix_and_operator_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/portal/rest/login/operatorLogin"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "velocloud.session=op-sess")
                .set_body_json(json!({})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/portal/"))
        .and(body_partial_json(
            json!({"method": "network/createApiToken", "params": {"operatorUserId": 1}}),
        ))
        .respond_with(rpc_result(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, UserType::Operator);
    client.authenticate().await.unwrap();

    let params = ApiTokenParams::for_operator(1, "API_TOKEN_NAME", 300_000);
    let created = client.create_token(&params).await.unwrap();
    assert_eq!(created.id.to_string(), "42");
}

#[tokio::test]
async fn rejected_login_reports_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/portal/rest/login/enterpriseLogin"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, UserType::Enterprise);
    let error = client.authenticate().await.unwrap_err();
    assert!(matches!(error, VcoError::Auth(_)));
}
