use std::convert::TryFrom;
use std::fmt;

// Struct to package the user identity with name and domain
#[derive(Clone, Debug, PartialEq)]
pub struct DomainUser {
    pub domain: String,
    pub name: String,
}

impl DomainUser {
    pub fn new(name: String, domain: String) -> Self {
        return Self { name, domain };
    }
}

impl fmt::Display for DomainUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.name)
    }
}

impl TryFrom<&str> for DomainUser {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> =
            value.split(|c| ['/', '\\'].contains(&c)).collect();

        if parts.len() != 2 || parts[0].len() == 0 || parts[1].len() == 0 {
            return Err(format!(
                "Invalid user '{}', it must be <domain>/<username>",
                value
            ));
        }

        return Ok(DomainUser::new(
            parts[1].to_string(),
            parts[0].to_string(),
        ));
    }
}

impl TryFrom<&String> for DomainUser {
    type Error = String;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        return Self::try_from(value.as_str());
    }
}

impl TryFrom<String> for DomainUser {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        return Self::try_from(&value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_with_slash_and_backslash() {
        let expected = DomainUser::new(
            "auditor".to_string(),
            "contoso.local".to_string(),
        );

        assert_eq!(
            expected,
            DomainUser::try_from("contoso.local/auditor").unwrap()
        );
        assert_eq!(
            expected,
            DomainUser::try_from("contoso.local\\auditor").unwrap()
        );
    }

    #[test]
    fn fail_to_parse_user_without_domain() {
        assert!(DomainUser::try_from("auditor").is_err());
        assert!(DomainUser::try_from("/auditor").is_err());
        assert!(DomainUser::try_from("contoso.local/").is_err());
    }
}
