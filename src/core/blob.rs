use crate::error::{Error, Result};
use log::warn;

/// Fixed part of the MSDS-MANAGEDPASSWORD_BLOB structure: version,
/// reserved, length and the four field offsets, all little-endian.
pub const BLOB_HEADER_LEN: usize = 16;

/// Variable-length fields of the blob, in their declared offset order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BlobField {
    CurrentPassword,
    PreviousPassword,
    QueryPasswordInterval,
    UnchangedPasswordInterval,
}

/// Decoded value of the msDS-ManagedPassword attribute
/// (MSDS-MANAGEDPASSWORD_BLOB, [MS-ADTS] 2.2.19).
///
/// The password fields hold the UTF-16LE encoded password, including the
/// trailing 2-byte NUL terminator. They are kept as raw bytes and never
/// decoded to text.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedPasswordBlob {
    pub version: u16,
    pub reserved: u16,
    pub length: u32,
    pub current_password: Vec<u8>,
    pub previous_password: Option<Vec<u8>>,
    pub query_password_interval: Vec<u8>,
    pub unchanged_password_interval: Vec<u8>,
}

impl ManagedPasswordBlob {
    /// Parses the raw attribute bytes. Each variable field spans from its
    /// declared offset to the offset of its successor, the last one runs to
    /// the end of the buffer. A previous password offset of 0 means the
    /// account has no previous password.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        if raw.len() < BLOB_HEADER_LEN {
            return Err(Error::MalformedBlob(format!(
                "{} bytes are fewer than the {} bytes of the fixed header",
                raw.len(),
                BLOB_HEADER_LEN
            )));
        }

        let version = u16::from_le_bytes([raw[0], raw[1]]);
        let reserved = u16::from_le_bytes([raw[2], raw[3]]);
        let length = u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]);
        let current_offset = u16::from_le_bytes([raw[8], raw[9]]) as usize;
        let previous_offset = u16::from_le_bytes([raw[10], raw[11]]) as usize;
        let query_offset = u16::from_le_bytes([raw[12], raw[13]]) as usize;
        let unchanged_offset =
            u16::from_le_bytes([raw[14], raw[15]]) as usize;

        let mut offsets = vec![(BlobField::CurrentPassword, current_offset)];
        if previous_offset != 0 {
            offsets.push((BlobField::PreviousPassword, previous_offset));
        }
        offsets.push((BlobField::QueryPasswordInterval, query_offset));
        offsets
            .push((BlobField::UnchangedPasswordInterval, unchanged_offset));

        let mut current_password = Vec::new();
        let mut previous_password = None;
        let mut query_password_interval = Vec::new();
        let mut unchanged_password_interval = Vec::new();

        for (i, &(field, offset)) in offsets.iter().enumerate() {
            if offset > raw.len() {
                return Err(Error::MalformedBlob(format!(
                    "{:?} offset {} points beyond the {} received bytes",
                    field,
                    offset,
                    raw.len()
                )));
            }

            let end = match offsets.get(i + 1) {
                Some(&(_, successor_offset)) => {
                    if successor_offset <= offset {
                        return Err(Error::MalformedBlob(format!(
                            "{:?} offset {} is not before its successor \
                             offset {}",
                            field, offset, successor_offset
                        )));
                    }
                    if successor_offset > raw.len() {
                        return Err(Error::MalformedBlob(format!(
                            "{:?} ends at offset {}, beyond the {} \
                             received bytes",
                            field,
                            successor_offset,
                            raw.len()
                        )));
                    }
                    successor_offset
                }
                None => raw.len(),
            };

            let value = raw[offset..end].to_vec();
            match field {
                BlobField::CurrentPassword => current_password = value,
                BlobField::PreviousPassword => {
                    previous_password = Some(value)
                }
                BlobField::QueryPasswordInterval => {
                    query_password_interval = value
                }
                BlobField::UnchangedPasswordInterval => {
                    unchanged_password_interval = value
                }
            }
        }

        if length as usize != raw.len() {
            warn!(
                "Blob declares {} bytes but {} were received, \
                 continuing anyway",
                length,
                raw.len()
            );
        }

        return Ok(Self {
            version,
            reserved,
            length,
            current_password,
            previous_password,
            query_password_interval,
            unchanged_password_interval,
        });
    }
}
