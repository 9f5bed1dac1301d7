use crate::communication::{DirectoryChannel, ManagedAccount, TlsProfile};
use crate::core::DomainUser;
use crate::error::{Error, Result};
use ldap3::{LdapConn, LdapConnSettings, Scope, SearchEntry};
use log::{debug, info, warn};

pub const LDAP_PORT: u16 = 389;

const GMSA_FILTER: &str = "(objectClass=msDS-GroupManagedServiceAccount)";
const ACCOUNT_NAME_ATTRIBUTE: &str = "sAMAccountName";
const MANAGED_PASSWORD_ATTRIBUTE: &str = "msDS-ManagedPassword";

/// Retrieves gMSA entries through an authenticated LDAP session upgraded
/// with start-TLS
pub struct LdapChannel {
    ldap: LdapConn,
    search_base: String,
}

impl LdapChannel {
    /// Establishes the session against the given server: start-TLS with
    /// the modern profile, retried once with the legacy profile, then a
    /// simple bind as `DOMAIN\username`.
    pub fn connect(
        server: &str,
        user: &DomainUser,
        password: &str,
        search_base: String,
    ) -> Result<Self> {
        let mut ldap =
            match Self::connect_start_tls(server, TlsProfile::Modern) {
                Ok(ldap) => ldap,
                Err(err) => {
                    warn!(
                        "{}; retrying with the {:?} profile",
                        err,
                        TlsProfile::Legacy
                    );
                    Self::connect_start_tls(server, TlsProfile::Legacy)?
                }
            };

        let bind_name = format!("{}\\{}", user.domain, user.name);
        ldap.simple_bind(&bind_name, password)
            .and_then(|result| result.success())
            .map_err(|err| {
                Error::Connection(
                    format!("Unable to authenticate as '{}'", bind_name),
                    err,
                )
            })?;
        debug!("Bound to '{}' as '{}'", server, bind_name);

        return Ok(Self { ldap, search_base });
    }

    fn connect_start_tls(
        server: &str,
        profile: TlsProfile,
    ) -> Result<LdapConn> {
        let url = format!("ldap://{}:{}", server, LDAP_PORT);
        let settings = LdapConnSettings::new()
            .set_starttls(true)
            .set_no_tls_verify(true)
            .set_connector(profile.connector()?);

        return LdapConn::with_settings(settings, &url).map_err(|err| {
            Error::Connection(
                format!(
                    "Unable to negotiate start-TLS with '{}' using the \
                     {:?} profile",
                    server, profile
                ),
                err,
            )
        });
    }
}

impl DirectoryChannel for LdapChannel {
    fn search_managed_accounts(
        &mut self,
    ) -> Result<Vec<ManagedAccount>> {
        let (entries, _) = self
            .ldap
            .search(
                &self.search_base,
                Scope::Subtree,
                GMSA_FILTER,
                vec![ACCOUNT_NAME_ATTRIBUTE, MANAGED_PASSWORD_ATTRIBUTE],
            )
            .and_then(|result| result.success())
            .map_err(|err| {
                Error::Connection(
                    format!(
                        "Unable to search gMSA accounts under '{}'",
                        self.search_base
                    ),
                    err,
                )
            })?;

        let mut accounts = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut entry = SearchEntry::construct(entry);

            let name = match entry
                .attrs
                .remove(ACCOUNT_NAME_ATTRIBUTE)
                .and_then(first_value)
            {
                Some(name) => name,
                None => entry.dn.clone(),
            };

            // ldap3 files the attribute under bin_attrs unless its bytes
            // happen to be valid UTF-8
            let password_blob = entry
                .bin_attrs
                .remove(MANAGED_PASSWORD_ATTRIBUTE)
                .and_then(first_value)
                .or_else(|| {
                    entry
                        .attrs
                        .remove(MANAGED_PASSWORD_ATTRIBUTE)
                        .and_then(first_value)
                        .map(String::into_bytes)
                });

            accounts.push(ManagedAccount {
                name,
                password_blob,
            });
        }

        info!(
            "{} managed service accounts found under '{}'",
            accounts.len(),
            self.search_base
        );
        return Ok(accounts);
    }
}

fn first_value<T>(mut values: Vec<T>) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    return Some(values.swap_remove(0));
}
