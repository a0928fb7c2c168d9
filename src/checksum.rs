//! Line checksums — whitespace-insensitive fingerprints of a single line.
//!
//! The checksum is the lowercase hex MD5 of the line with every whitespace
//! character removed. The analysis server stores the same fingerprint for the
//! line an issue was raised on, so a line that moved or was only re-indented
//! still produces the stored value.

use md5::{Digest, Md5};

/// Computes the fingerprint of one line of source text.
pub trait ChecksumCalculator: Send + Sync {
    fn calculate(&self, line_text: &str) -> String;
}

/// Whitespace-stripped MD5 line checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineChecksum;

impl LineChecksum {
    pub fn new() -> Self {
        Self
    }
}

impl ChecksumCalculator for LineChecksum {
    fn calculate(&self, line_text: &str) -> String {
        let stripped = strip_whitespace(line_text);
        hex::encode(Md5::digest(stripped.as_bytes()))
    }
}

/// Remove every Unicode whitespace character.
///
/// Case and Unicode normalization form are left untouched.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
