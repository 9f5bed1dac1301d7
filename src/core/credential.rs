use std::fmt;

/// Derived credential of one account, printed as `<account>:::<nthash>`,
/// the format expected by pass-the-hash tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub account: String,
    pub nt_hash: String,
}

impl Credential {
    pub fn new(account: String, nt_hash: String) -> Self {
        return Self { account, nt_hash };
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:::{}", self.account, self.nt_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_credential_line() {
        let credential = Credential::new(
            "svc_web$".to_string(),
            "8846f7eaee8fb117ad06bdd830b7586c".to_string(),
        );

        assert_eq!(
            "svc_web$:::8846f7eaee8fb117ad06bdd830b7586c",
            credential.to_string()
        );
    }
}
