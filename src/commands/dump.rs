use crate::communication::{DirectoryChannel, ManagedAccount};
use crate::core::{ntlm_hash, Credential, ManagedPasswordBlob};
use crate::error::{Error, Result};
use log::warn;

/// Retrieves the gMSA entries and prints one `<account>:::<nthash>` line
/// per account whose managed password could be decoded. Accounts that fail
/// to decode are reported on the diagnostic stream and skipped, they never
/// produce a partial line.
pub fn dump(channel: &mut dyn DirectoryChannel) -> Result<()> {
    let accounts = channel.search_managed_accounts()?;

    for account in accounts {
        match derive_credential(&account) {
            Ok(credential) => println!("{}", credential),
            Err(err) => warn!("Skipping '{}': {}", account.name, err),
        }
    }

    return Ok(());
}

fn derive_credential(account: &ManagedAccount) -> Result<Credential> {
    let raw = account
        .password_blob
        .as_ref()
        .ok_or_else(|| Error::MissingAttribute(account.name.clone()))?;

    let blob = ManagedPasswordBlob::parse(raw)?;
    let nt_hash = ntlm_hash(&blob.current_password)?;

    return Ok(Credential::new(account.name.clone(), nt_hash));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BLOB_HEADER_LEN;

    struct StubChannel {
        accounts: Vec<ManagedAccount>,
    }

    impl DirectoryChannel for StubChannel {
        fn search_managed_accounts(
            &mut self,
        ) -> Result<Vec<ManagedAccount>> {
            return Ok(self.accounts.clone());
        }
    }

    fn blob_with_password(utf16_password: &[u8]) -> Vec<u8> {
        let current_offset = BLOB_HEADER_LEN;
        let query_offset = current_offset + utf16_password.len();
        let unchanged_offset = query_offset + 8;
        let total = unchanged_offset + 8;

        let mut raw = Vec::new();
        raw.extend_from_slice(&1u16.to_le_bytes());
        raw.extend_from_slice(&0u16.to_le_bytes());
        raw.extend_from_slice(&(total as u32).to_le_bytes());
        raw.extend_from_slice(&(current_offset as u16).to_le_bytes());
        raw.extend_from_slice(&0u16.to_le_bytes());
        raw.extend_from_slice(&(query_offset as u16).to_le_bytes());
        raw.extend_from_slice(&(unchanged_offset as u16).to_le_bytes());
        raw.extend_from_slice(utf16_password);
        raw.extend_from_slice(&[0; 16]);
        return raw;
    }

    #[test]
    fn derive_credential_of_account_with_readable_blob() {
        // "password" in UTF-16LE plus the NUL terminator
        let mut utf16_password = Vec::new();
        for unit in "password".encode_utf16() {
            utf16_password.extend_from_slice(&unit.to_le_bytes());
        }
        utf16_password.extend_from_slice(&[0, 0]);

        let account = ManagedAccount {
            name: "svc_sql$".to_string(),
            password_blob: Some(blob_with_password(&utf16_password)),
        };

        let credential = derive_credential(&account).unwrap();

        assert_eq!(
            "svc_sql$:::8846f7eaee8fb117ad06bdd830b7586c",
            credential.to_string()
        );
    }

    #[test]
    fn fail_to_derive_credential_without_attribute() {
        let account = ManagedAccount {
            name: "svc_hidden$".to_string(),
            password_blob: None,
        };

        let error = derive_credential(&account).unwrap_err();

        assert!(matches!(error, Error::MissingAttribute(_)));
    }

    #[test]
    fn fail_to_derive_credential_from_malformed_blob() {
        let account = ManagedAccount {
            name: "svc_broken$".to_string(),
            password_blob: Some(vec![0x01, 0x02, 0x03]),
        };

        let error = derive_credential(&account).unwrap_err();

        assert!(matches!(error, Error::MalformedBlob(_)));
    }

    #[test]
    fn fail_to_derive_credential_from_terminator_only_password() {
        let account = ManagedAccount {
            name: "svc_empty$".to_string(),
            password_blob: Some(blob_with_password(&[0, 0])),
        };

        let error = derive_credential(&account).unwrap_err();

        assert!(matches!(error, Error::EmptyPassword));
    }

    #[test]
    fn dump_skips_failing_accounts_and_continues() {
        let mut channel = StubChannel {
            accounts: vec![
                ManagedAccount {
                    name: "svc_hidden$".to_string(),
                    password_blob: None,
                },
                ManagedAccount {
                    name: "svc_broken$".to_string(),
                    password_blob: Some(vec![0xff; 4]),
                },
            ],
        };

        // both accounts are skipped, the run itself succeeds
        dump(&mut channel).unwrap();
    }
}
