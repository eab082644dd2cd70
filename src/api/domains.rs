//! Domain catalog: registration, transfers, DNS, and the surrounding sub-resources.

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	api::CancellationTime,
	client::Client,
	http::ApiHttpClient,
	request::{Query, RequestOptions},
};

/// Domain endpoints rooted at `domains`.
pub struct Domains<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	pub(crate) client: &'c Client<C>,
}
impl<'c, C> Domains<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists registered domains, optionally filtered by tags.
	pub async fn list(&self, tags: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"domains",
				Method::GET,
				RequestOptions::new().query(Query::new().param_opt("tags", tags)),
			)
			.await
	}

	/// Fetches a single domain.
	pub async fn get(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}")).await
	}

	/// Registers a new domain. Billing-affecting.
	pub async fn register(&self, registration: Value) -> Result<Value> {
		self.client
			.request("domains", Method::POST, RequestOptions::new().billing(true).body(registration))
			.await
	}

	/// Transfers a domain in, authorization code included in the payload. Billing-affecting.
	pub async fn transfer(&self, transfer: Value) -> Result<Value> {
		self.client
			.request("domains", Method::POST, RequestOptions::new().billing(true).body(transfer))
			.await
	}

	/// Updates a domain's settings.
	pub async fn update(&self, domain_name: &str, domain: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "domain": domain })),
			)
			.await
	}

	/// Cancels a domain registration.
	pub async fn cancel(&self, domain_name: &str, end_time: CancellationTime) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "endTime": end_time.as_str() })),
			)
			.await
	}

	/// Queries WHOIS information.
	pub async fn whois(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/whois")).await
	}

	/// Checks the availability of a single domain name.
	pub async fn availability(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domain-availability/{domain_name}")).await
	}

	/// Checks the availability of multiple domain names at once.
	pub async fn availability_list(&self, domain_names: &[&str]) -> Result<Value> {
		self.client
			.request(
				"domain-availability",
				Method::GET,
				RequestOptions::new().body(json!({ "domainNames": domain_names })),
			)
			.await
	}

	/// Orders whitelabel service for the account. Billing-affecting.
	pub async fn order_whitelabel(&self) -> Result<Value> {
		self.client.request("whitelabel", Method::POST, RequestOptions::new().billing(true)).await
	}

	/// Enters the branding sub-resource.
	pub fn branding(&self) -> DomainBranding<'c, C> {
		DomainBranding { client: self.client }
	}

	/// Enters the contacts sub-resource.
	pub fn contacts(&self) -> DomainContacts<'c, C> {
		DomainContacts { client: self.client }
	}

	/// Enters the DNS sub-resource.
	pub fn dns(&self) -> DomainDns<'c, C> {
		DomainDns { client: self.client }
	}

	/// Enters the DNSSEC sub-resource.
	pub fn dnssec(&self) -> DomainDnsSec<'c, C> {
		DomainDnsSec { client: self.client }
	}

	/// Enters the nameserver sub-resource.
	pub fn nameservers(&self) -> DomainNameservers<'c, C> {
		DomainNameservers { client: self.client }
	}

	/// Enters the pending-action sub-resource.
	pub fn actions(&self) -> DomainActions<'c, C> {
		DomainActions { client: self.client }
	}

	/// Enters the SSL certificate sub-resource.
	pub fn ssl(&self) -> DomainSsl<'c, C> {
		DomainSsl { client: self.client }
	}

	/// Enters the TLD catalog.
	pub fn tlds(&self) -> Tlds<'c, C> {
		Tlds { client: self.client }
	}
}

/// Branding shown on WHOIS and transfer pages.
pub struct DomainBranding<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainBranding<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the branding of a domain.
	pub async fn get(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/branding")).await
	}

	/// Replaces the branding of a domain.
	pub async fn update(&self, domain_name: &str, branding: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/branding"),
				Method::PUT,
				RequestOptions::new().body(json!({ "branding": branding })),
			)
			.await
	}
}

/// WHOIS contacts attached to a domain.
pub struct DomainContacts<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainContacts<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the contacts of a domain.
	pub async fn list(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/contacts")).await
	}

	/// Replaces the contacts of a domain.
	pub async fn update(&self, domain_name: &str, contacts: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/contacts"),
				Method::PUT,
				RequestOptions::new().body(json!({ "contacts": contacts })),
			)
			.await
	}
}

/// DNS entries of a domain.
pub struct DomainDns<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainDns<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the DNS entries of a domain.
	pub async fn list(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/dns")).await
	}

	/// Adds a single DNS entry.
	pub async fn add(&self, domain_name: &str, dns_entry: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/dns"),
				Method::POST,
				RequestOptions::new().body(json!({ "dnsEntry": dns_entry })),
			)
			.await
	}

	/// Updates the content of a single matching DNS entry.
	pub async fn update(&self, domain_name: &str, dns_entry: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/dns"),
				Method::PATCH,
				RequestOptions::new().body(json!({ "dnsEntry": dns_entry })),
			)
			.await
	}

	/// Replaces all DNS entries at once.
	pub async fn replace_all(&self, domain_name: &str, dns_entries: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/dns"),
				Method::PUT,
				RequestOptions::new().body(json!({ "dnsEntries": dns_entries })),
			)
			.await
	}

	/// Removes a single DNS entry.
	pub async fn remove(&self, domain_name: &str, dns_entry: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/dns"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "dnsEntry": dns_entry })),
			)
			.await
	}
}

/// DNSSEC keys of a domain.
pub struct DomainDnsSec<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainDnsSec<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the DNSSEC entries of a domain.
	pub async fn list(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/dnssec")).await
	}

	/// Replaces all DNSSEC entries at once.
	pub async fn replace_all(&self, domain_name: &str, dns_sec_entries: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/dnssec"),
				Method::PUT,
				RequestOptions::new().body(json!({ "dnsSecEntries": dns_sec_entries })),
			)
			.await
	}
}

/// Nameserver delegation of a domain.
pub struct DomainNameservers<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainNameservers<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the nameservers of a domain.
	pub async fn list(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/nameservers")).await
	}

	/// Replaces the nameservers of a domain.
	pub async fn update(&self, domain_name: &str, nameservers: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/nameservers"),
				Method::PUT,
				RequestOptions::new().body(json!({ "nameservers": nameservers })),
			)
			.await
	}
}

/// Pending registry actions on a domain.
pub struct DomainActions<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainActions<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the action currently running for a domain.
	pub async fn current(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/actions")).await
	}

	/// Retries a failed action with corrected data (authorization code, DNS entries,
	/// nameservers, or contacts).
	pub async fn retry(&self, domain_name: &str, correction: Value) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/actions"),
				Method::PATCH,
				RequestOptions::new().body(correction),
			)
			.await
	}

	/// Cancels the action currently running for a domain.
	pub async fn cancel(&self, domain_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("domains/{domain_name}/actions"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// SSL certificates attached to a domain.
pub struct DomainSsl<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> DomainSsl<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the certificates of a domain.
	pub async fn list(&self, domain_name: &str) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/ssl")).await
	}

	/// Fetches a single certificate by identifier.
	pub async fn get(&self, domain_name: &str, certificate_id: u64) -> Result<Value> {
		self.client.get(&format!("domains/{domain_name}/ssl/{certificate_id}")).await
	}
}

/// Top-level-domain catalog.
pub struct Tlds<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> Tlds<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists all TLDs that can be registered or transferred.
	pub async fn list(&self) -> Result<Value> {
		self.client.get("tlds").await
	}

	/// Fetches registration details of a single TLD.
	pub async fn get(&self, tld: &str) -> Result<Value> {
		self.client.get(&format!("tlds/{tld}")).await
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Enters the domain catalog.
	pub fn domains(&self) -> Domains<'_, C> {
		Domains { client: self }
	}
}
