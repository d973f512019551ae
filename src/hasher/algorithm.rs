//! Recognized digest algorithms

use crate::error::HashError;
use crate::hasher::accumulator::{Accumulator, DigestAccumulator};
use md5::Md5;
use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Digest algorithm identifier. Adding an algorithm means adding a variant
/// here and a case to [`Algorithm::accumulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256];

    /// Canonical lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
        }
    }

    /// Digest size in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }

    /// Fresh incremental accumulator for this algorithm
    pub fn accumulator(&self) -> Box<dyn Accumulator> {
        match self {
            Algorithm::Md5 => Box::new(DigestAccumulator::new(Md5::new())),
            Algorithm::Sha1 => Box::new(DigestAccumulator::new(Sha1::new())),
            Algorithm::Sha256 => Box::new(DigestAccumulator::new(Sha256::new())),
        }
    }

    /// Parse every identifier, failing on the first unsupported one.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Algorithm>, HashError> {
        names.iter().map(|n| n.as_ref().parse()).collect()
    }
}

impl FromStr for Algorithm {
    type Err = HashError;

    // Identifiers are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(Algorithm::Md5),
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            _ => Err(HashError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
