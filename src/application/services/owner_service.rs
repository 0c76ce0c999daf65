//! Signed owner identities for multi-tenant scoping.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the cookie carrying the signed owner id.
pub const OWNER_COOKIE: &str = "user_id";

/// Signs and verifies owner ids.
///
/// A signed value has the form `<owner>.<hex HMAC-SHA256(owner)>`, keyed by
/// the server secret. Without the secret a client cannot claim another
/// owner's namespace.
#[derive(Clone)]
pub struct OwnerService {
    secret: String,
}

impl OwnerService {
    /// Creates a new owner service keyed by `secret`.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC accepts any key length")
    }

    /// Returns the signed cookie value for `owner_id`.
    pub fn sign(&self, owner_id: &str) -> String {
        let mut mac = self.mac();
        mac.update(owner_id.as_bytes());
        format!("{}.{}", owner_id, hex::encode(mac.finalize().into_bytes()))
    }

    /// Extracts the owner id from a signed value.
    ///
    /// Returns `None` if the value is malformed, the owner id is empty or the
    /// signature does not match.
    pub fn verify(&self, signed: &str) -> Option<String> {
        let (owner_id, signature) = signed.rsplit_once('.')?;

        if owner_id.is_empty() {
            return None;
        }

        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(owner_id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(owner_id.to_string())
    }
}
