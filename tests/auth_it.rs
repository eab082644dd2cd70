// crates.io
use httpmock::prelude::*;
// self
use transip_client::{
	auth::AuthRequest,
	client::{Client, ClientBuilder},
	error::Error,
};

const LOGIN: &str = "demo-account";
const PRIVATE_PKCS1: &str = include_str!("fixtures/private_pkcs1.pem");
const PRIVATE_PKCS8: &str = include_str!("fixtures/private_pkcs8.pem");

fn build_client(server: &MockServer) -> Client {
	ClientBuilder::new()
		.base_url(server.base_url())
		.private_key(PRIVATE_PKCS8)
		.build()
		.expect("Test client should build against the mock origin.")
}

#[tokio::test]
async fn authenticate_exchanges_signed_request_for_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/auth")
				.header("content-type", "application/json")
				.header_exists("signature");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"token\":\"fresh-token\"}");
		})
		.await;
	let client = build_client(&server);
	let token = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect("Signed exchange should succeed.");

	assert_eq!(token.expose(), "fresh-token");
	assert_eq!(
		client.token().expect("Token should be stored on the client.").expose(),
		"fresh-token",
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_accepts_per_request_keys() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth").header_exists("signature");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token\":\"override-token\"}");
		})
		.await;
	// No key configured on the client; PKCS#1 material is supplied per request.
	let client = ClientBuilder::new()
		.base_url(server.base_url())
		.build()
		.expect("Keyless client should build.");
	let token = client
		.authenticate(AuthRequest::new(LOGIN).private_key(PRIVATE_PKCS1))
		.await
		.expect("Per-request PKCS#1 key should sign successfully.");

	assert_eq!(token.expose(), "override-token");

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_rejects_missing_login_before_any_io() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200).body("{\"token\":\"unreachable\"}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.authenticate(AuthRequest::new(""))
		.await
		.expect_err("An empty login must be rejected.");

	assert!(matches!(err, Error::MissingLogin));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn authenticate_requires_a_key_before_any_io() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200).body("{\"token\":\"unreachable\"}");
		})
		.await;
	let client = ClientBuilder::new()
		.base_url(server.base_url())
		.build()
		.expect("Keyless client should build.");
	let err = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect_err("A keyless authenticate call must be rejected.");

	assert!(matches!(err, Error::MissingKey));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn authenticate_rejects_malformed_keys_before_any_io() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200).body("{\"token\":\"unreachable\"}");
		})
		.await;
	let client = ClientBuilder::new()
		.base_url(server.base_url())
		.private_key("not a pem block")
		.build()
		.expect("Client should build with an as-yet-unvalidated key.");
	let err = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect_err("A malformed key must be rejected.");

	assert!(matches!(err, Error::InvalidKey(_)));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn authenticate_surfaces_provider_errors_verbatim() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(409)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid signature\"}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect_err("Provider rejections must surface.");

	assert!(matches!(err, Error::RemoteAuth { message } if message == "invalid signature"));
	assert!(client.token().is_none(), "A rejected exchange must not store a token.");

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_rejects_tokenless_responses() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200).header("content-type", "application/json").body("{\"ok\":true}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect_err("A token-free response is a protocol violation.");

	assert!(matches!(err, Error::MissingToken));

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_rejects_undecodable_responses() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200).header("content-type", "text/html").body("<html></html>");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect_err("A non-JSON response must fail decoding.");

	assert!(matches!(err, Error::ResponseParse { status: Some(200), .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_replaces_the_stored_token() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token\":\"second\"}");
		})
		.await;
	let client = build_client(&server);

	client.set_token("first");
	client
		.authenticate(AuthRequest::new(LOGIN))
		.await
		.expect("Exchange should succeed.");

	assert_eq!(
		client.token().expect("Token should be stored.").expose(),
		"second",
		"A later authenticate call wins over the injected token.",
	);
}
