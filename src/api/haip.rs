//! High-availability IP catalog: load balancer lifecycle, certificates, and port routing.

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	api::CancellationTime,
	client::Client,
	http::ApiHttpClient,
	request::RequestOptions,
};

/// HA-IP endpoints rooted at `haips`.
pub struct Haips<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	pub(crate) client: &'c Client<C>,
}
impl<'c, C> Haips<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the HA-IPs of the account.
	pub async fn list(&self) -> Result<Value> {
		self.client.get("haips").await
	}

	/// Fetches a single HA-IP.
	pub async fn get(&self, haip_name: &str) -> Result<Value> {
		self.client.get(&format!("haips/{haip_name}")).await
	}

	/// Orders a new HA-IP. Billing-affecting.
	pub async fn order(&self, product_name: &str, description: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"haips",
				Method::POST,
				RequestOptions::new().billing(true).body(json!({
					"productName": product_name,
					"description": description,
				})),
			)
			.await
	}

	/// Updates an HA-IP's settings.
	pub async fn update(&self, haip_name: &str, haip: Value) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "haip": haip })),
			)
			.await
	}

	/// Cancels an HA-IP contract.
	pub async fn cancel(&self, haip_name: &str, end_time: CancellationTime) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "endTime": end_time.as_str() })),
			)
			.await
	}

	/// Fetches the status report of an HA-IP and its attached machines.
	pub async fn status_report(&self, haip_name: &str) -> Result<Value> {
		self.client.get(&format!("haips/{haip_name}/status-reports")).await
	}

	/// Enters the certificate sub-resource.
	pub fn certificates(&self) -> HaipCertificates<'c, C> {
		HaipCertificates { client: self.client }
	}

	/// Enters the IP address sub-resource.
	pub fn ip_addresses(&self) -> HaipIpAddresses<'c, C> {
		HaipIpAddresses { client: self.client }
	}

	/// Enters the port configuration sub-resource.
	pub fn port_configurations(&self) -> HaipPortConfigurations<'c, C> {
		HaipPortConfigurations { client: self.client }
	}
}

/// TLS certificates attached to an HA-IP.
pub struct HaipCertificates<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> HaipCertificates<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the certificates attached to an HA-IP.
	pub async fn list(&self, haip_name: &str) -> Result<Value> {
		self.client.get(&format!("haips/{haip_name}/certificates")).await
	}

	/// Attaches an existing certificate by identifier.
	pub async fn add(&self, haip_name: &str, ssl_certificate_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/certificates"),
				Method::POST,
				RequestOptions::new().body(json!({ "sslCertificateId": ssl_certificate_id })),
			)
			.await
	}

	/// Orders and attaches a Let's Encrypt certificate for the given common name.
	pub async fn add_lets_encrypt(&self, haip_name: &str, common_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/certificates"),
				Method::POST,
				RequestOptions::new().body(json!({ "commonName": common_name })),
			)
			.await
	}

	/// Detaches a certificate from an HA-IP.
	pub async fn detach(&self, haip_name: &str, certificate_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/certificates/{certificate_id}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Machines attached to an HA-IP.
pub struct HaipIpAddresses<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> HaipIpAddresses<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the IP addresses attached to an HA-IP.
	pub async fn list(&self, haip_name: &str) -> Result<Value> {
		self.client.get(&format!("haips/{haip_name}/ip-addresses")).await
	}

	/// Replaces the set of attached IP addresses.
	pub async fn replace(&self, haip_name: &str, ip_addresses: &[&str]) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/ip-addresses"),
				Method::PUT,
				RequestOptions::new().body(json!({ "ipAddresses": ip_addresses })),
			)
			.await
	}

	/// Detaches every IP address from an HA-IP.
	pub async fn detach_all(&self, haip_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/ip-addresses"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Port routing rules of an HA-IP.
pub struct HaipPortConfigurations<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> HaipPortConfigurations<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the port configurations of an HA-IP.
	pub async fn list(&self, haip_name: &str) -> Result<Value> {
		self.client.get(&format!("haips/{haip_name}/port-configurations")).await
	}

	/// Fetches a single port configuration.
	pub async fn get(&self, haip_name: &str, port_configuration_id: u64) -> Result<Value> {
		self.client
			.get(&format!("haips/{haip_name}/port-configurations/{port_configuration_id}"))
			.await
	}

	/// Creates a port configuration (name, source/target ports, mode, SSL handling).
	pub async fn create(&self, haip_name: &str, port_configuration: Value) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/port-configurations"),
				Method::POST,
				RequestOptions::new().body(port_configuration),
			)
			.await
	}

	/// Updates a port configuration.
	pub async fn update(
		&self,
		haip_name: &str,
		port_configuration_id: u64,
		port_configuration: Value,
	) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/port-configurations/{port_configuration_id}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "portConfiguration": port_configuration })),
			)
			.await
	}

	/// Removes a port configuration.
	pub async fn remove(&self, haip_name: &str, port_configuration_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("haips/{haip_name}/port-configurations/{port_configuration_id}"),
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
	/// Enters the HA-IP catalog.
	pub fn haips(&self) -> Haips<'_, C> {
		Haips { client: self }
	}
}
