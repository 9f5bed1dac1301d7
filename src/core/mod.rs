mod blob;
pub use blob::{ManagedPasswordBlob, BLOB_HEADER_LEN};

mod credential;
pub use credential::Credential;

mod ntlm;
pub use ntlm::ntlm_hash;

mod user;
pub use user::DomainUser;
