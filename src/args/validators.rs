use crate::core::DomainUser;
use std::convert::TryFrom;

pub fn is_domain_user(v: String) -> Result<(), String> {
    DomainUser::try_from(v)?;
    return Ok(());
}
