//! Virtual server catalog: lifecycle, installs, storage, networking, and monitoring.

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

/// Virtual server endpoints rooted at `vps`.
pub struct Vps<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	pub(crate) client: &'c Client<C>,
}
impl<'c, C> Vps<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists virtual servers, optionally filtered by tags.
	pub async fn list(&self, tags: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"vps",
				Method::GET,
				RequestOptions::new().query(Query::new().param_opt("tags", tags)),
			)
			.await
	}

	/// Fetches a single virtual server.
	pub async fn get(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}")).await
	}

	/// Orders a new virtual server. Billing-affecting.
	pub async fn order(&self, order: Value) -> Result<Value> {
		self.client
			.request("vps", Method::POST, RequestOptions::new().billing(true).body(order))
			.await
	}

	/// Orders several virtual servers in one call. Billing-affecting.
	pub async fn order_batch(&self, vpss: Value) -> Result<Value> {
		self.client
			.request(
				"vps",
				Method::POST,
				RequestOptions::new().billing(true).body(json!({ "vpss": vpss })),
			)
			.await
	}

	/// Clones an existing virtual server. Billing-affecting.
	pub async fn clone_vps(
		&self,
		vps_name: &str,
		availability_zone: Option<&str>,
	) -> Result<Value> {
		self.client
			.request(
				"vps",
				Method::POST,
				RequestOptions::new().billing(true).body(json!({
					"vpsName": vps_name,
					"availabilityZone": availability_zone,
				})),
			)
			.await
	}

	/// Updates a virtual server's settings.
	pub async fn update(&self, vps_name: &str, vps: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "vps": vps })),
			)
			.await
	}

	/// Starts a stopped virtual server.
	pub async fn start(&self, vps_name: &str) -> Result<Value> {
		self.action(vps_name, json!({ "action": "start" })).await
	}

	/// Stops a running virtual server.
	pub async fn stop(&self, vps_name: &str) -> Result<Value> {
		self.action(vps_name, json!({ "action": "stop" })).await
	}

	/// Resets a virtual server (hard power cycle).
	pub async fn reset(&self, vps_name: &str) -> Result<Value> {
		self.action(vps_name, json!({ "action": "reset" })).await
	}

	/// Hands a virtual server over to another account.
	pub async fn handover(&self, vps_name: &str, target_customer_name: &str) -> Result<Value> {
		self.action(
			vps_name,
			json!({ "action": "handover", "targetCustomerName": target_customer_name }),
		)
		.await
	}

	/// Cancels a virtual server contract.
	pub async fn cancel(&self, vps_name: &str, end_time: CancellationTime) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "endTime": end_time.as_str() })),
			)
			.await
	}

	/// Fetches usage statistics (cpu, disk, network) for a virtual server.
	pub async fn usage(&self, vps_name: &str, filter: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/usage"),
				Method::GET,
				RequestOptions::new().body(filter),
			)
			.await
	}

	async fn action(&self, vps_name: &str, body: Value) -> Result<Value> {
		self.client
			.request(&format!("vps/{vps_name}"), Method::PATCH, RequestOptions::new().body(body))
			.await
	}

	/// Enters the VNC console sub-resource.
	pub fn vnc(&self) -> VpsVnc<'c, C> {
		VpsVnc { client: self.client }
	}

	/// Enters the addon sub-resource.
	pub fn addons(&self) -> VpsAddons<'c, C> {
		VpsAddons { client: self.client }
	}

	/// Enters the license sub-resource.
	pub fn licenses(&self) -> VpsLicenses<'c, C> {
		VpsLicenses { client: self.client }
	}

	/// Enters the upgrade sub-resource.
	pub fn upgrades(&self) -> VpsUpgrades<'c, C> {
		VpsUpgrades { client: self.client }
	}

	/// Enters the operating system sub-resource.
	pub fn operating_systems(&self) -> VpsOperatingSystems<'c, C> {
		VpsOperatingSystems { client: self.client }
	}

	/// Enters the IP address sub-resource.
	pub fn ip_addresses(&self) -> VpsIpAddresses<'c, C> {
		VpsIpAddresses { client: self.client }
	}

	/// Enters the snapshot sub-resource.
	pub fn snapshots(&self) -> VpsSnapshots<'c, C> {
		VpsSnapshots { client: self.client }
	}

	/// Enters the backup sub-resource.
	pub fn backups(&self) -> VpsBackups<'c, C> {
		VpsBackups { client: self.client }
	}

	/// Enters the firewall sub-resource.
	pub fn firewall(&self) -> VpsFirewall<'c, C> {
		VpsFirewall { client: self.client }
	}

	/// Enters the TCP monitor sub-resource.
	pub fn tcp_monitors(&self) -> VpsTcpMonitors<'c, C> {
		VpsTcpMonitors { client: self.client }
	}

	/// Enters the traffic pool sub-resource.
	pub fn traffic(&self) -> Traffic<'c, C> {
		Traffic { client: self.client }
	}

	/// Enters the private network catalog.
	pub fn private_networks(&self) -> PrivateNetworks<'c, C> {
		PrivateNetworks { client: self.client }
	}

	/// Enters the big storage catalog.
	pub fn big_storages(&self) -> BigStorages<'c, C> {
		BigStorages { client: self.client }
	}

	/// Enters the mail service sub-resource.
	pub fn mail_service(&self) -> MailService<'c, C> {
		MailService { client: self.client }
	}

	/// Enters the monitoring contact catalog.
	pub fn monitoring_contacts(&self) -> MonitoringContacts<'c, C> {
		MonitoringContacts { client: self.client }
	}
}

/// VNC console access of a virtual server.
pub struct VpsVnc<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsVnc<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the VNC connection data.
	pub async fn get(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/vnc-data")).await
	}

	/// Regenerates the VNC token.
	pub async fn regenerate_token(&self, vps_name: &str) -> Result<Value> {
		self.client
			.request(&format!("vps/{vps_name}/vnc-data"), Method::PATCH, RequestOptions::new())
			.await
	}
}

/// Addons attached to a virtual server.
pub struct VpsAddons<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsAddons<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the addons of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/addons")).await
	}

	/// Orders addons for a virtual server. Billing-affecting.
	pub async fn order(&self, vps_name: &str, addons: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/addons"),
				Method::POST,
				RequestOptions::new().billing(true).body(json!({ "addons": addons })),
			)
			.await
	}

	/// Cancels a single addon.
	pub async fn cancel(&self, vps_name: &str, addon_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/addons/{addon_name}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Software licenses attached to a virtual server.
pub struct VpsLicenses<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsLicenses<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the licenses of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/licenses")).await
	}

	/// Orders a license. Billing-affecting.
	pub async fn order(
		&self,
		vps_name: &str,
		license_name: &str,
		quantity: u32,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/licenses"),
				Method::POST,
				RequestOptions::new()
					.billing(true)
					.body(json!({ "licenseName": license_name, "quantity": quantity })),
			)
			.await
	}

	/// Switches a license to another product. Billing-affecting.
	pub async fn update(
		&self,
		vps_name: &str,
		license_id: u64,
		new_license_name: &str,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/licenses/{license_id}"),
				Method::PUT,
				RequestOptions::new()
					.billing(true)
					.body(json!({ "newLicenseName": new_license_name })),
			)
			.await
	}

	/// Cancels a license.
	pub async fn cancel(&self, vps_name: &str, license_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/licenses/{license_id}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Product upgrades available to a virtual server.
pub struct VpsUpgrades<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsUpgrades<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the upgrades available to a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/upgrades")).await
	}

	/// Upgrades the virtual server to another product. Billing-affecting.
	pub async fn order(&self, vps_name: &str, product_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/upgrades"),
				Method::POST,
				RequestOptions::new().billing(true).body(json!({ "productName": product_name })),
			)
			.await
	}
}

/// Operating system management of a virtual server.
pub struct VpsOperatingSystems<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsOperatingSystems<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the operating systems installable on a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/operating-systems")).await
	}

	/// Reinstalls the virtual server with the given operating system payload. Billing-affecting.
	pub async fn install(&self, vps_name: &str, install: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/operating-systems"),
				Method::POST,
				RequestOptions::new().billing(true).body(install),
			)
			.await
	}
}

/// IP addresses attached to a virtual server.
pub struct VpsIpAddresses<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsIpAddresses<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the IP addresses of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/ip-addresses")).await
	}

	/// Fetches a single IP address.
	pub async fn get(&self, vps_name: &str, ip_address: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/ip-addresses/{ip_address}")).await
	}

	/// Adds an IPv6 address to a virtual server.
	pub async fn add(&self, vps_name: &str, ip_address: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/ip-addresses"),
				Method::POST,
				RequestOptions::new().body(json!({ "ipAddress": ip_address })),
			)
			.await
	}

	/// Updates the reverse DNS of an IP address.
	pub async fn set_reverse_dns(
		&self,
		vps_name: &str,
		ip_address: &str,
		settings: Value,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/ip-addresses/{ip_address}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "ipAddress": settings })),
			)
			.await
	}

	/// Removes an IPv6 address from a virtual server.
	pub async fn remove(&self, vps_name: &str, ip_address: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/ip-addresses/{ip_address}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Snapshots of a virtual server.
pub struct VpsSnapshots<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsSnapshots<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the snapshots of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/snapshots")).await
	}

	/// Fetches a single snapshot.
	pub async fn get(&self, vps_name: &str, snapshot_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/snapshots/{snapshot_name}")).await
	}

	/// Creates a snapshot of a virtual server.
	pub async fn create(&self, vps_name: &str) -> Result<Value> {
		self.client
			.request(&format!("vps/{vps_name}/snapshots"), Method::POST, RequestOptions::new())
			.await
	}

	/// Reverts a snapshot, optionally onto another virtual server.
	pub async fn revert(
		&self,
		vps_name: &str,
		snapshot_name: &str,
		destination_vps_name: Option<&str>,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/snapshots/{snapshot_name}"),
				Method::PATCH,
				RequestOptions::new()
					.body(json!({ "destinationVpsName": destination_vps_name })),
			)
			.await
	}

	/// Removes a snapshot.
	pub async fn remove(&self, vps_name: &str, snapshot_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/snapshots/{snapshot_name}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Automatic backups of a virtual server.
pub struct VpsBackups<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsBackups<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the backups of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/backups")).await
	}

	/// Reverts a backup onto the virtual server.
	pub async fn revert(&self, vps_name: &str, backup_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/backups/{backup_id}"),
				Method::PATCH,
				RequestOptions::new().body(json!({ "action": "revert" })),
			)
			.await
	}

	/// Converts a backup into a snapshot.
	pub async fn convert(
		&self,
		vps_name: &str,
		backup_id: u64,
		description: &str,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/backups/{backup_id}"),
				Method::PATCH,
				RequestOptions::new()
					.body(json!({ "action": "convert", "description": description })),
			)
			.await
	}
}

/// Firewall of a virtual server.
pub struct VpsFirewall<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsFirewall<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the firewall of a virtual server.
	pub async fn get(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/firewall")).await
	}

	/// Replaces the firewall of a virtual server.
	pub async fn update(&self, vps_name: &str, firewall: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/firewall"),
				Method::PUT,
				RequestOptions::new().body(json!({ "vpsFirewall": firewall })),
			)
			.await
	}
}

/// TCP monitors watching a virtual server.
pub struct VpsTcpMonitors<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> VpsTcpMonitors<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the TCP monitors of a virtual server.
	pub async fn list(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("vps/{vps_name}/tcp-monitors")).await
	}

	/// Creates a TCP monitor.
	pub async fn create(&self, vps_name: &str, tcp_monitor: Value) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/tcp-monitors"),
				Method::POST,
				RequestOptions::new().body(json!({ "tcpMonitor": tcp_monitor })),
			)
			.await
	}

	/// Updates the TCP monitor watching an IP address.
	pub async fn update(
		&self,
		vps_name: &str,
		ip_address: &str,
		tcp_monitor: Value,
	) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/tcp-monitors/{ip_address}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "tcpMonitor": tcp_monitor })),
			)
			.await
	}

	/// Removes the TCP monitor watching an IP address.
	pub async fn remove(&self, vps_name: &str, ip_address: &str) -> Result<Value> {
		self.client
			.request(
				&format!("vps/{vps_name}/tcp-monitors/{ip_address}"),
				Method::DELETE,
				RequestOptions::new(),
			)
			.await
	}
}

/// Traffic pool statistics.
pub struct Traffic<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> Traffic<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the account-wide traffic pool.
	pub async fn pool(&self) -> Result<Value> {
		self.client.get("traffic").await
	}

	/// Fetches the traffic of a single virtual server.
	pub async fn get(&self, vps_name: &str) -> Result<Value> {
		self.client.get(&format!("traffic/{vps_name}")).await
	}
}

/// Private networks connecting virtual servers.
pub struct PrivateNetworks<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> PrivateNetworks<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists private networks, optionally those attached to one virtual server.
	pub async fn list(&self, vps_name: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"private-networks",
				Method::GET,
				RequestOptions::new().query(Query::new().param_opt("vpsName", vps_name)),
			)
			.await
	}

	/// Fetches a single private network.
	pub async fn get(&self, private_network_name: &str) -> Result<Value> {
		self.client.get(&format!("private-networks/{private_network_name}")).await
	}

	/// Orders a new private network. Billing-affecting.
	pub async fn order(&self, description: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"private-networks",
				Method::POST,
				RequestOptions::new().billing(true).body(json!({ "description": description })),
			)
			.await
	}

	/// Updates a private network's settings.
	pub async fn update(
		&self,
		private_network_name: &str,
		private_network: Value,
	) -> Result<Value> {
		self.client
			.request(
				&format!("private-networks/{private_network_name}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "privateNetwork": private_network })),
			)
			.await
	}

	/// Attaches a virtual server to a private network.
	pub async fn attach(&self, private_network_name: &str, vps_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("private-networks/{private_network_name}"),
				Method::PATCH,
				RequestOptions::new()
					.body(json!({ "action": "attachvps", "vpsName": vps_name })),
			)
			.await
	}

	/// Detaches a virtual server from a private network.
	pub async fn detach(&self, private_network_name: &str, vps_name: &str) -> Result<Value> {
		self.client
			.request(
				&format!("private-networks/{private_network_name}"),
				Method::PATCH,
				RequestOptions::new()
					.body(json!({ "action": "detachvps", "vpsName": vps_name })),
			)
			.await
	}

	/// Cancels a private network contract.
	pub async fn cancel(
		&self,
		private_network_name: &str,
		end_time: CancellationTime,
	) -> Result<Value> {
		self.client
			.request(
				&format!("private-networks/{private_network_name}"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "endTime": end_time.as_str() })),
			)
			.await
	}
}

/// Network-attached big storage volumes.
pub struct BigStorages<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<'c, C> BigStorages<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists big storages, optionally those attached to one virtual server.
	pub async fn list(&self, vps_name: Option<&str>) -> Result<Value> {
		self.client
			.request(
				"big-storages",
				Method::GET,
				RequestOptions::new().query(Query::new().param_opt("vpsName", vps_name)),
			)
			.await
	}

	/// Fetches a single big storage.
	pub async fn get(&self, big_storage_name: &str) -> Result<Value> {
		self.client.get(&format!("big-storages/{big_storage_name}")).await
	}

	/// Orders a new big storage. Billing-affecting.
	pub async fn order(&self, order: Value) -> Result<Value> {
		self.client
			.request("big-storages", Method::POST, RequestOptions::new().billing(true).body(order))
			.await
	}

	/// Upgrades an existing big storage's size or offsite backups. Billing-affecting.
	pub async fn upgrade(
		&self,
		big_storage_name: &str,
		size: u64,
		offsite_backups: Option<bool>,
	) -> Result<Value> {
		self.client
			.request(
				"big-storages",
				Method::POST,
				RequestOptions::new().billing(true).body(json!({
					"bigStorageName": big_storage_name,
					"size": size,
					"offsiteBackups": offsite_backups,
				})),
			)
			.await
	}

	/// Updates a big storage's settings (description, attached virtual server).
	pub async fn update(&self, big_storage_name: &str, big_storage: Value) -> Result<Value> {
		self.client
			.request(
				&format!("big-storages/{big_storage_name}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "bigStorage": big_storage })),
			)
			.await
	}

	/// Cancels a big storage contract.
	pub async fn cancel(
		&self,
		big_storage_name: &str,
		end_time: CancellationTime,
	) -> Result<Value> {
		self.client
			.request(
				&format!("big-storages/{big_storage_name}"),
				Method::DELETE,
				RequestOptions::new().body(json!({ "endTime": end_time.as_str() })),
			)
			.await
	}

	/// Fetches usage statistics for a big storage.
	pub async fn usage(&self, big_storage_name: &str, filter: Value) -> Result<Value> {
		self.client
			.request(
				&format!("big-storages/{big_storage_name}/usage"),
				Method::GET,
				RequestOptions::new().body(filter),
			)
			.await
	}

	/// Enters the backup sub-resource.
	pub fn backups(&self) -> BigStorageBackups<'c, C> {
		BigStorageBackups { client: self.client }
	}
}

/// Backups of a big storage volume.
pub struct BigStorageBackups<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> BigStorageBackups<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the backups of a big storage.
	pub async fn list(&self, big_storage_name: &str) -> Result<Value> {
		self.client.get(&format!("big-storages/{big_storage_name}/backups")).await
	}

	/// Reverts a backup onto the big storage.
	pub async fn revert(&self, big_storage_name: &str, backup_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("big-storages/{big_storage_name}/backups/{backup_id}"),
				Method::PATCH,
				RequestOptions::new().body(json!({ "action": "revert" })),
			)
			.await
	}
}

/// Legacy mail service addon.
pub struct MailService<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> MailService<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the mail service information.
	pub async fn get(&self) -> Result<Value> {
		self.client.get("mail-service").await
	}

	/// Regenerates the mail service password.
	pub async fn regenerate_password(&self) -> Result<Value> {
		self.client.request("mail-service", Method::PATCH, RequestOptions::new()).await
	}

	/// Adds the mail service DNS entries to the given domains.
	pub async fn add_dns_entries(&self, domain_names: &[&str]) -> Result<Value> {
		self.client
			.request(
				"mail-service",
				Method::POST,
				RequestOptions::new().body(json!({ "domainNames": domain_names })),
			)
			.await
	}
}

/// Contacts notified by the monitoring system.
pub struct MonitoringContacts<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	client: &'c Client<C>,
}
impl<C> MonitoringContacts<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the monitoring contacts of the account.
	pub async fn list(&self) -> Result<Value> {
		self.client.get("monitoring-contacts").await
	}

	/// Creates a monitoring contact.
	pub async fn create(&self, name: &str, telephone: &str, email: &str) -> Result<Value> {
		self.client
			.request(
				"monitoring-contacts",
				Method::POST,
				RequestOptions::new()
					.body(json!({ "name": name, "telephone": telephone, "email": email })),
			)
			.await
	}

	/// Updates a monitoring contact.
	pub async fn update(&self, contact_id: u64, contact: Value) -> Result<Value> {
		self.client
			.request(
				&format!("monitoring-contacts/{contact_id}"),
				Method::PUT,
				RequestOptions::new().body(json!({ "contact": contact })),
			)
			.await
	}

	/// Removes a monitoring contact.
	pub async fn remove(&self, contact_id: u64) -> Result<Value> {
		self.client
			.request(
				&format!("monitoring-contacts/{contact_id}"),
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
	/// Enters the virtual server catalog.
	pub fn vps(&self) -> Vps<'_, C> {
		Vps { client: self }
	}
}
