// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Inner beacon representation and canonical message construction for
//! chained schemes.

use sha2::Digest;

/// Inner beacon representation for chained schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainedBeacon {
    pub round: u64,
    pub signature: Vec<u8>,
    pub previous_signature: Vec<u8>,
}

impl ChainedBeacon {
    pub fn new(round: u64, signature: Vec<u8>, previous_signature: Vec<u8>) -> Self {
        Self {
            round,
            signature,
            previous_signature,
        }
    }

    /// Message that signers of this round signed, see [`digest`].
    pub fn digest(&self) -> [u8; 32] {
        digest(&self.previous_signature, self.round)
    }

    /// Randomness value this beacon carries, see [`randomness`].
    pub fn randomness(&self) -> [u8; 32] {
        randomness(&self.signature)
    }

    pub fn short_sig(&self) -> String {
        hex::encode(self.signature.get(..3).unwrap_or_default())
    }
}

/// Returns the message to sign or to verify alongside a beacon signature:
/// `sha256( prev_sig || round_be )`. No padding or domain tag; the previous
/// signature may be empty for genesis-adjacent rounds.
pub fn digest(prev_sig: &[u8], round: u64) -> [u8; 32] {
    let mut h = sha2::Sha256::new();
    h.update(prev_sig);
    h.update(round.to_be_bytes());
    h.finalize().into()
}

/// Randomness of a round is the hash of its signature.
pub fn randomness(signature: &[u8]) -> [u8; 32] {
    sha2::Sha256::digest(signature).into()
}
