//! Client-level error types shared across authentication, dispatch, and the resource catalog.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Supplied private key text is not a usable PEM block.
	#[error(transparent)]
	InvalidKey(#[from] crate::auth::KeyError),
	/// Signing primitive rejected the normalized key or the signing operation.
	#[error(transparent)]
	Signing(#[from] crate::auth::SigningError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Authentication was requested without a login name.
	#[error("A non-empty `login` is required to request a token.")]
	MissingLogin,
	/// No private key was supplied and none is configured on the client.
	#[error(
		"No private key available. Pass one with the request or configure the client, e.g. via \
		 `TRANSIP_PRIVATE_KEY`."
	)]
	MissingKey,
	/// The provider rejected the authentication request.
	#[error("Provider rejected the authentication request: {message}.")]
	RemoteAuth {
		/// Provider-supplied reason, preserved verbatim.
		message: String,
	},
	/// The provider answered the token exchange without a token field.
	#[error("Authentication response did not include a token.")]
	MissingToken,
	/// A response body could not be decoded as JSON.
	#[error("Response body is not valid JSON.")]
	ResponseParse {
		/// Structured decoding failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the offending response.
		status: Option<u16>,
	},
	/// A billing-affecting call was attempted while billing is disabled on the client.
	#[error("The action would change your invoice. Enable billing on the client to proceed.")]
	BillingNotAllowed,
	/// A request URL could not be assembled from the base origin and resource path.
	#[error("Request URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A computed header value contained characters HTTP forbids.
	#[error("Computed request header value is invalid.")]
	InvalidHeader {
		/// Underlying header validation failure.
		#[source]
		source: InvalidHeaderValue,
	},
	/// A request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	BodySerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		Self::Transport(e.into())
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
