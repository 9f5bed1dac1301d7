use crate::error::{Error, Result};
use native_tls::{Protocol, TlsConnector};

/// TLS profiles tried when upgrading the LDAP connection with start-TLS.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TlsProfile {
    /// Platform defaults, negotiates the highest version available.
    Modern,
    /// TLS 1.0 only, for older servers such as Windows Server 2012.
    Legacy,
}

impl TlsProfile {
    /// Builds the TLS connector of this profile. Certificate validation is
    /// disabled, domain controllers are commonly reached by a name their
    /// certificate does not cover.
    pub fn connector(&self) -> Result<TlsConnector> {
        let mut builder = TlsConnector::builder();
        builder.danger_accept_invalid_certs(true);
        builder.danger_accept_invalid_hostnames(true);

        if let TlsProfile::Legacy = self {
            builder.min_protocol_version(Some(Protocol::Tlsv10));
            builder.max_protocol_version(Some(Protocol::Tlsv10));
        }

        return builder.build().map_err(|err| {
            Error::String(format!(
                "Unable to build the {:?} TLS connector: {}",
                self, err
            ))
        });
    }
}
