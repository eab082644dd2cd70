// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use transip_client::{
	api::CancellationTime,
	client::{Client, ClientBuilder},
	error::Error,
};

fn build_client(server: &MockServer) -> Client {
	ClientBuilder::new()
		.base_url(server.base_url())
		.build()
		.expect("Test client should build against the mock origin.")
}

#[tokio::test]
async fn domain_listing_threads_the_tag_filter() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/domains").query_param("tags", "prod");
			then.status(200).body("[]");
		})
		.await;
	let client = build_client(&server);

	client.domains().list(Some("prod")).await.expect("Domain listing should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn domain_registration_is_billing_guarded() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/domains").json_body(json!({ "domainName": "example.com" }));
			then.status(201).body("{}");
		})
		.await;
	let client = build_client(&server);
	let err = client
		.domains()
		.register(json!({ "domainName": "example.com" }))
		.await
		.expect_err("Registration must be rejected while billing is disallowed.");

	assert!(matches!(err, Error::BillingNotAllowed));

	mock.assert_calls_async(0).await;

	client.allow_billing(true);
	client
		.domains()
		.register(json!({ "domainName": "example.com" }))
		.await
		.expect("Registration should pass once billing is allowed.");

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn domain_dns_entries_are_wrapped_on_the_wire() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/domains/example.com/dns").json_body(json!({
				"dnsEntry": {
					"name": "www",
					"expire": 86400,
					"type": "A",
					"content": "203.0.113.10",
				},
			}));
			then.status(201);
		})
		.await;
	let client = build_client(&server);

	client
		.domains()
		.dns()
		.add(
			"example.com",
			json!({ "name": "www", "expire": 86400, "type": "A", "content": "203.0.113.10" }),
		)
		.await
		.expect("DNS entry creation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn domain_cancellation_sends_the_end_time() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path("/domains/example.com")
				.json_body(json!({ "endTime": "immediately" }));
			then.status(204);
		})
		.await;
	let client = build_client(&server);

	client
		.domains()
		.cancel("example.com", CancellationTime::Immediately)
		.await
		.expect("Cancellation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn vps_lifecycle_actions_patch_the_resource() {
	let server = MockServer::start_async().await;
	let start = server
		.mock_async(|when, then| {
			when.method(PATCH).path("/vps/demo-vps").json_body(json!({ "action": "start" }));
			then.status(204);
		})
		.await;
	let client = build_client(&server);

	client.vps().start("demo-vps").await.expect("Start action should succeed.");

	start.assert_async().await;

	let handover = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/vps/demo-vps")
				.json_body(json!({ "action": "handover", "targetCustomerName": "acme" }));
			then.status(204);
		})
		.await;

	client.vps().handover("demo-vps", "acme").await.expect("Handover should succeed.");

	handover.assert_async().await;
}

#[tokio::test]
async fn vps_snapshots_round_through_their_paths() {
	let server = MockServer::start_async().await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path("/vps/demo-vps/snapshots");
			then.status(201);
		})
		.await;
	let revert = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/vps/demo-vps/snapshots/nightly")
				.json_body(json!({ "destinationVpsName": "clone-vps" }));
			then.status(204);
		})
		.await;
	let client = build_client(&server);

	client.vps().snapshots().create("demo-vps").await.expect("Snapshot should be created.");
	client
		.vps()
		.snapshots()
		.revert("demo-vps", "nightly", Some("clone-vps"))
		.await
		.expect("Snapshot should revert.");

	create.assert_async().await;
	revert.assert_async().await;
}

#[tokio::test]
async fn vps_upgrades_are_billing_guarded() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/vps/demo-vps/upgrades")
				.json_body(json!({ "productName": "vps-bladevps-x8" }));
			then.status(201);
		})
		.await;
	let client = build_client(&server);
	let err = client
		.vps()
		.upgrades()
		.order("demo-vps", "vps-bladevps-x8")
		.await
		.expect_err("Upgrades must be rejected while billing is disallowed.");

	assert!(matches!(err, Error::BillingNotAllowed));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn haip_certificates_and_cancellation_hit_their_paths() {
	let server = MockServer::start_async().await;
	let lets_encrypt = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/haips/demo-haip/certificates")
				.json_body(json!({ "commonName": "example.com" }));
			then.status(201);
		})
		.await;
	let cancel = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/haips/demo-haip").json_body(json!({ "endTime": "end" }));
			then.status(204);
		})
		.await;
	let client = build_client(&server);

	client
		.haips()
		.certificates()
		.add_lets_encrypt("demo-haip", "example.com")
		.await
		.expect("Certificate order should succeed.");
	client
		.haips()
		.cancel("demo-haip", CancellationTime::End)
		.await
		.expect("Cancellation should succeed.");

	lets_encrypt.assert_async().await;
	cancel.assert_async().await;
}

#[tokio::test]
async fn colocation_remote_hands_posts_the_request() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/colocations/demo-colo/remote-hands").json_body(json!({
				"remoteHands": { "coloName": "demo-colo", "instructions": "reseat disk 3" },
			}));
			then.status(201);
		})
		.await;
	let client = build_client(&server);

	client
		.colocations()
		.remote_hands(
			"demo-colo",
			json!({ "coloName": "demo-colo", "instructions": "reseat disk 3" }),
		)
		.await
		.expect("Remote hands request should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn account_level_endpoints_resolve() {
	let server = MockServer::start_async().await;
	let products = server
		.mock_async(|when, then| {
			when.method(GET).path("/products");
			then.status(200).body("{\"products\":[]}");
		})
		.await;
	let api_test = server
		.mock_async(|when, then| {
			when.method(GET).path("/api-test");
			then.status(200).body("{\"ping\":\"pong\"}");
		})
		.await;
	let client = build_client(&server);

	client.general().products().await.expect("Product listing should succeed.");

	let ping = client.general().api_test().await.expect("API test should succeed.");

	assert_eq!(ping["ping"], "pong");

	products.assert_async().await;
	api_test.assert_async().await;
}

#[tokio::test]
async fn private_network_attachment_patches_the_action() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/private-networks/demo-net")
				.json_body(json!({ "action": "attachvps", "vpsName": "demo-vps" }));
			then.status(204);
		})
		.await;
	let client = build_client(&server);

	client
		.vps()
		.private_networks()
		.attach("demo-net", "demo-vps")
		.await
		.expect("Attachment should succeed.");

	mock.assert_async().await;
}
