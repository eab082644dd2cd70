//! Account-level catalog: products, availability zones, and the connectivity test endpoint.

// self
use crate::{
	_prelude::*,
	client::Client,
	http::ApiHttpClient,
};

/// Account-level endpoints with no resource of their own.
pub struct General<'c, C>
where
	C: ?Sized + ApiHttpClient,
{
	pub(crate) client: &'c Client<C>,
}
impl<C> General<'_, C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the products available to the account.
	pub async fn products(&self) -> Result<Value> {
		self.client.get("products").await
	}

	/// Lists the specifications of a single product.
	pub async fn product_elements(&self, product_name: &str) -> Result<Value> {
		self.client.get(&format!("products/{product_name}/elements")).await
	}

	/// Lists the provider's availability zones.
	pub async fn availability_zones(&self) -> Result<Value> {
		self.client.get("availability-zones").await
	}

	/// Exercises the authenticated connectivity test endpoint.
	pub async fn api_test(&self) -> Result<Value> {
		self.client.get("api-test").await
	}
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Enters the account-level catalog.
	pub fn general(&self) -> General<'_, C> {
		General { client: self }
	}
}
