//! Demonstrates the signed token exchange against a mock of the provider's `/auth` endpoint,
//! then an authenticated follow-up call carrying the freshly minted bearer token.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use transip_client::{auth::AuthRequest, client::ClientBuilder};

const PRIVATE_KEY: &str = include_str!("../tests/fixtures/private_pkcs8.pem");

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/auth").header_exists("signature");
			then.status(201)
				.header("content-type", "application/json")
				.body("{\"token\":\"demo-token\"}");
		})
		.await;
	let whoami_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api-test").header("authorization", "Bearer demo-token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"ping\":\"pong\"}");
		})
		.await;
	// Against the real API, drop `base_url` and configure the key via `env_private_key()`.
	let client =
		ClientBuilder::new().base_url(server.base_url()).private_key(PRIVATE_KEY).build()?;
	let token = client
		.authenticate(AuthRequest::new("demo-account").read_only(true).label("demo"))
		.await?;

	println!("Minted token (redacted in logs): {token}");

	let ping = client.general().api_test().await?;

	println!("Authenticated connectivity test: {ping}");

	auth_mock.assert_async().await;
	whoami_mock.assert_async().await;

	Ok(())
}
