//! Replay-protection nonce generation.

// crates.io
use rand::RngCore;

const NONCE_LEN: usize = 16;

/// Generates a fresh nonce: 16 bytes from a cryptographically secure source, rendered as 32
/// lowercase hexadecimal characters.
///
/// Every authentication call consumes a new nonce, so a caller-level retry of the whole call is
/// never replayed with stale material.
pub fn generate_nonce() -> String {
	let mut bytes = [0_u8; NONCE_LEN];

	rand::rng().fill_bytes(&mut bytes);

	hex::encode(bytes)
}
