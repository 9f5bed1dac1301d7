/// Builds the base distinguished name of a domain by joining its labels
/// as DC components: `sub.example.com` -> `DC=sub,DC=example,DC=com`.
pub fn domain_to_base_dn(domain: &str) -> String {
    return domain
        .split('.')
        .map(|label| format!("DC={}", label))
        .collect::<Vec<String>>()
        .join(",");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dn_of_multi_label_domain() {
        assert_eq!(
            "DC=sub,DC=example,DC=com",
            domain_to_base_dn("sub.example.com")
        );
    }

    #[test]
    fn base_dn_of_single_label_domain() {
        assert_eq!("DC=corp", domain_to_base_dn("corp"));
    }
}
