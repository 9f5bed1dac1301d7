use crate::error::{Error, Result};
use md4::{Digest, Md4};

/// Size of the UTF-16 NUL terminator that closes the password field.
const UTF16_NUL_LEN: usize = 2;

/// Derives the NT hash of a managed password: MD4 over the UTF-16LE
/// password bytes with the trailing NUL terminator stripped, rendered as
/// lowercase hexadecimal. The password bytes are hashed as-is, without
/// ever being decoded to text.
pub fn ntlm_hash(utf16_password: &[u8]) -> Result<String> {
    if utf16_password.len() <= UTF16_NUL_LEN {
        return Err(Error::EmptyPassword);
    }

    let password = &utf16_password[..utf16_password.len() - UTF16_NUL_LEN];
    return Ok(hex::encode(Md4::digest(password)));
}
