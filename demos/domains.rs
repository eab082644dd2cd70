//! Walks the domain catalog against a mock origin: listing with a tag filter, reading DNS, and
//! a billing-guarded registration.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use transip_client::client::ClientBuilder;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/domains").query_param("tags", "production");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"domains\":[{\"name\":\"example.com\"}]}");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/domains/example.com/dns");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"dnsEntries\":[]}");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/domains");
			then.status(201).header("content-type", "application/json").body("{}");
		})
		.await;

	let client = ClientBuilder::new().base_url(server.base_url()).build()?;

	client.set_token("pre-issued-token");

	let domains = client.domains().list(Some("production")).await?;

	println!("Domains tagged production: {domains}");

	let dns = client.domains().dns().list("example.com").await?;

	println!("DNS entries: {dns}");

	// Registration changes the invoice, so the client refuses it until billing is enabled.
	assert!(client.domains().register(json!({ "domainName": "example.org" })).await.is_err());

	client.allow_billing(true);
	client.domains().register(json!({ "domainName": "example.org" })).await?;

	println!("Registration accepted after enabling billing.");

	Ok(())
}
