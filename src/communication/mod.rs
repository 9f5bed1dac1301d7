//! Module to talk with the domain directory service over LDAP.
//!

mod ldap_channel;
pub use ldap_channel::LdapChannel;

mod tls;
pub use tls::TlsProfile;

use crate::error::Result;

/// One directory entry of a group managed service account: the account
/// name and the raw managed password attribute, when readable.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedAccount {
    pub name: String,
    pub password_blob: Option<Vec<u8>>,
}

/// Trait implemented by classes which retrieve gMSA entries from a
/// directory service
pub trait DirectoryChannel {
    /// Retrieves the gMSA entries with their managed password attribute.
    fn search_managed_accounts(&mut self)
        -> Result<Vec<ManagedAccount>>;
}
