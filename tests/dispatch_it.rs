// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use transip_client::{
	client::{Client, ClientBuilder},
	error::Error,
	request::{Query, RequestOptions},
	reqwest::{
		Method,
		header::{AUTHORIZATION, HeaderValue},
	},
};

fn build_client(server: &MockServer) -> Client {
	ClientBuilder::new()
		.base_url(server.base_url())
		.build()
		.expect("Test client should build against the mock origin.")
}

#[tokio::test]
async fn billing_guard_blocks_before_any_io() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/domains");
			then.status(200).body("{}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.request("domains", Method::POST, RequestOptions::new().billing(true))
		.await
		.expect_err("Billing-affecting calls must be rejected while billing is disallowed.");

	assert!(matches!(err, Error::BillingNotAllowed));

	mock.assert_calls_async(0).await;

	// Enabling the flag lets the same call through.
	client.allow_billing(true);
	client
		.request("domains", Method::POST, RequestOptions::new().billing(true))
		.await
		.expect("Billing-affecting call should pass once allowed.");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_mode_always_marks_outgoing_queries() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/vps").query_param("tags", "prod").query_param("test", "1");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client.test_mode(true);
	// The caller-supplied `test` parameter is replaced, not kept alongside.
	client
		.request(
			"vps",
			Method::GET,
			RequestOptions::new().query(Query::new().param("tags", "prod").param("test", 0)),
		)
		.await
		.expect("Test-mode request should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn null_query_parameters_are_omitted() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/domains").query_param("tags", "a");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client
		.request(
			"domains",
			Method::GET,
			RequestOptions::new()
				.query(Query::new().param("tags", "a").param_opt("region", None::<&str>)),
		)
		.await
		.expect("Request with a null parameter should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn bearer_header_carries_the_stored_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/products").header("authorization", "Bearer stored-token");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client.set_token("stored-token");
	client.get("products").await.expect("Authenticated request should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_override_client_defaults() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/products").header("authorization", "Bearer caller-token");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client.set_token("stored-token");
	client
		.request(
			"products",
			Method::GET,
			RequestOptions::new()
				.header(AUTHORIZATION, HeaderValue::from_static("Bearer caller-token")),
		)
		.await
		.expect("Request with overriding header should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn body_nulls_are_pruned_recursively() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/vps").json_body(json!({ "a": 1, "c": { "e": 2 } }));
			then.status(200).body("{}");
		})
		.await;
	let client = build_client(&server);

	client
		.request(
			"vps",
			Method::POST,
			RequestOptions::new().body(json!({ "a": 1, "b": null, "c": { "d": null, "e": 2 } })),
		)
		.await
		.expect("Request with pruned body should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn responses_are_returned_verbatim() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/domains/example.com");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"domain\":{\"name\":\"example.com\"},\"error\":\"ignored here\"}");
		})
		.await;
	let client = build_client(&server);
	let payload = client.get("domains/example.com").await.expect("Request should succeed.");

	// Resource-level error fields pass through untouched; only the auth path interprets them.
	assert_eq!(payload["domain"]["name"], "example.com");
	assert_eq!(payload["error"], "ignored here");
}

#[tokio::test]
async fn empty_response_bodies_decode_to_null() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/domains/example.com/actions");
			then.status(204);
		})
		.await;
	let client = build_client(&server);
	let payload = client
		.request("domains/example.com/actions", Method::DELETE, RequestOptions::new())
		.await
		.expect("Empty response should decode.");

	assert!(payload.is_null());
}

#[tokio::test]
async fn query_url_strips_the_configured_origin() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/domains").query_param("page", "2");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client
		.query_url(&format!("{}/domains?page=2", server.base_url()))
		.await
		.expect("Absolute-URL query should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn transport_failures_propagate_unmodified() {
	// Nothing listens on this origin; the connect error must surface as a transport failure.
	let client = ClientBuilder::new()
		.base_url("http://127.0.0.1:9")
		.build()
		.expect("Client should build against an unreachable origin.");
	let err = client.get("products").await.expect_err("Connecting must fail.");

	assert!(matches!(err, Error::Transport(_)));
}
