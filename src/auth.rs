//! Token-exchange building blocks: key normalization, nonce generation, request shaping, and
//! RSA-SHA512 signing.

pub mod key;
pub mod nonce;
pub mod request;
pub mod secret;
pub mod signer;

pub use key::*;
pub use nonce::*;
pub use request::*;
pub use secret::*;
pub use signer::*;
