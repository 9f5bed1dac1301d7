use ldap3::LdapError;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    String(String),

    /// Errors while establishing or using the LDAP session, such as
    /// start-TLS negotiation, bind or search failures. Fatal for the run.
    Connection(String, LdapError),

    /// Errors due to inconsistent offsets/lengths in a managed password
    /// blob. The affected account is skipped.
    MalformedBlob(String),

    /// The decoded password is empty or only contains the UTF-16 NUL
    /// terminator. The affected account is skipped.
    EmptyPassword,

    /// The entry lacks the managed password attribute, usually because the
    /// bound user is not allowed to read it. The affected account is skipped.
    MissingAttribute(String),
}

impl Error {
    pub fn is_connection_error(&self) -> bool {
        if let Error::Connection(_, _) = self {
            return true;
        }
        return false;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::String(s) => write!(f, "{}", s),
            Error::Connection(desc, ldap_error) => {
                write!(f, "{}: {}", desc, ldap_error)
            }
            Error::MalformedBlob(s) => {
                write!(f, "Malformed managed password blob: {}", s)
            }
            Error::EmptyPassword => {
                write!(f, "Managed password is empty")
            }
            Error::MissingAttribute(account) => {
                write!(
                    f,
                    "No managed password attribute readable for '{}'",
                    account
                )
            }
        }
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        return Self::String(error);
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        return Self::String(error.to_string());
    }
}

impl From<(&str, LdapError)> for Error {
    fn from(error: (&str, LdapError)) -> Self {
        return Self::Connection(error.0.into(), error.1);
    }
}

impl From<(String, LdapError)> for Error {
    fn from(error: (String, LdapError)) -> Self {
        return Self::Connection(error.0, error.1);
    }
}
