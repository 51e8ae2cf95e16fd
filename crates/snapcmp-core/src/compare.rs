//! Positional fingerprint comparison strategies.

use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Every cell must match.
    Strict,
    /// Up to `floor(len * percent / 100)` cells may differ, plus one.
    Tolerant { percent: u32 },
}

impl Matcher {
    pub fn for_tolerance(percent: u32) -> Self {
        if percent == 0 {
            Matcher::Strict
        } else {
            Matcher::Tolerant { percent }
        }
    }

    /// Mismatches needed for two fingerprints of `len` cells to count as different.
    pub fn allowed_mismatches(&self, len: usize) -> usize {
        match *self {
            Matcher::Strict => 1,
            Matcher::Tolerant { percent } => len * percent as usize / 100 + 1,
        }
    }

    pub fn matches(&self, left: &Fingerprint, right: &Fingerprint) -> Result<bool> {
        if left.len() != right.len() {
            return Err(Error::FingerprintLength {
                left: left.len(),
                right: right.len(),
            });
        }
        let mut pairs = left.as_slice().iter().zip(right.as_slice());

        match *self {
            Matcher::Strict => Ok(pairs.all(|(a, b)| a == b)),
            Matcher::Tolerant { .. } => {
                let mut remaining = self.allowed_mismatches(left.len());
                for (a, b) in pairs {
                    if a != b {
                        remaining -= 1;
                        if remaining == 0 {
                            return Ok(false);
                        }
                    }
                }
                Ok(true)
            }
        }
    }
}
