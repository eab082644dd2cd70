//! Colocation catalog: rack information, IP management, and remote hands.

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	client::Client,
	http::ApiHttpClient,
	request::RequestOptions,
};

/// Colocation endpoints rooted at `colocations`.
pub struct Colocations<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	pub(crate) client: &'c Client<C>,
}
impl<'c, C> Colocations<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the colocations of the account.
	pub async fn list(&self) -> Result<Value> {
		self.client.get("colocations").await
	}

	/// Fetches a single colocation.
	pub async fn get(&self, colocation_name: &str) -> Result<Value> {
		self.client.get(&format!("colocations/{colocation_name}")).await
	}

	/// Requests a remote-hands intervention at the datacenter.
	pub async fn remote_hands(&self, colocation_name: &str, remote_hands: Value) -> Result<Value> {
		self.client
			.request(
				&format!("colocations/{colocation_name}/remote-hands"),
				Method::POST,
				RequestOptions::new().body(json!({ "remoteHands": remote_hands })),
			)
			.await
	}

	/// Enters the IP address sub-resource.
	pub fn ip_addresses(&self) -> ColocationIpAddresses<'c, C> {
		ColocationIpAddresses { client: self.client }
	}
}

/// IP addresses routed to a colocation.
pub struct ColocationIpAddresses<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> ColocationIpAddresses<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the IP addresses of a colocation.
	pub async fn list(&self, colocation_name: &str) -> Result<Value> {
		self.client.get(&format!("colocations/{colocation_name}/ip-addresses")).await
	}

	/// Fetches a single IP address.
	pub async fn get(&self, colocation_name: &str, ip_address: &str) -> Result<Value> {
		self.client.get(&format!("colocations/{colocation_name}/ip-addresses/{ip_address}")).await
	}

	/// Adds an IP address, optionally with reverse DNS.
	pub async fn create(
		&self,
		colocation_name: &str,
		ip_address: &str,
		reverse_dns: Option<&str>,
	) -> Result<Value> {
		self.client
			.request(
				&format!("colocations/{colocation_name}/ip-addresses"),
				Method::POST,
				RequestOptions::new()
					.body(json!({ "ipAddress": ip_address, "reverseDns": reverse_dns })),
			)
			.await
	}

	/// Updates the reverse DNS of an IP address.
	pub async fn set_reverse_dns(
		&self,
		colocation_name: &str,
		ip_address: &str,
		settings: Value,
	) -> Result<Value> {
		self.client
			.request(
				&format!("colocations/{colocation_name}/ip-addresses/{ip_address}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "ipAddress": settings })),
			)
			.await
	}

	/// Removes an IP address from a colocation.
	pub async fn remove(&self, colocation_name: &str, ip_address: &str) -> Result<Value> {
		self.client
			.request(
				&format!("colocations/{colocation_name}/ip-addresses/{ip_address}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Enters the colocation catalog.
	pub fn colocations(&self) -> Colocations<'_, C> {
		Colocations { client: self }
	}
}
