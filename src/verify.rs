// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! BLS signature check for a single beacon round.
//!
//! This is the trust-anchor check a client performs before accepting a
//! randomness value as authentic. Verification is a stateless predicate
//! over its inputs: no session, no retries, no logging.

use crate::beacon;
use crate::beacon::ChainedBeacon;
use crate::scheme;
use crate::scheme::KeyPoint;
use crate::scheme::PointError;
use crate::scheme::SigPoint;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    /// Bytes that do not deserialize into a valid group element.
    /// Recoverable by the caller supplying corrected input.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] PointError),
    /// Well-formed inputs that fail the pairing equality. This is the
    /// expected outcome for corrupted or adversarial beacon data.
    #[error("signature verification failed")]
    InvalidSignature,
}

/// Checks that `signature` is a valid threshold signature of round `round`
/// chained to `prev_signature`, under the chain key `public_key`.
///
/// The previous signature is only hashed, never decoded as a group
/// element; genesis-adjacent rounds may pass an empty slice.
pub fn verify(
    public_key: &[u8],
    prev_signature: &[u8],
    round: u64,
    signature: &[u8],
) -> Result<(), VerificationError> {
    let key = KeyPoint::deserialize(public_key)?;
    let sig = SigPoint::deserialize(signature)?;

    let msg = beacon::digest(prev_signature, round);
    if !scheme::bls_verify(&key, &sig, &msg) {
        return Err(VerificationError::InvalidSignature);
    }

    Ok(())
}

/// [`verify`] over the inner beacon representation.
pub fn verify_beacon(public_key: &[u8], beacon: &ChainedBeacon) -> Result<(), VerificationError> {
    verify(
        public_key,
        &beacon.previous_signature,
        beacon.round,
        &beacon.signature,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    // Known-good chained beacon: public key, round 397089 signature and the
    // round 397088 signature it is chained to.
    const KEY: &str = "88a8227b75dba145599d894d33eebde3b36fef900d456ae2cc4388867adb4769c40359f783750a41b4d17e40f578bfdb";
    const PREV_SIG: &str = "a2237ee39a1a6569cb8e02c6e979c07efe1f30be0ac501436bd325015f1cd6129dc56fd60efcdf9158d74ebfa34bfcbd17803dbca6d2ae8bc3a968e4dc582f8710c69de80b2e649663fef5742d22fff7d1619b75d5f222e8c9b8840bc2044bce";
    const SIG: &str = "88ccd9a91946bc0bbef2c6c60a09bbf4a247b1d2059522449aa1a35758feddfad85efe818bbde3e1e4ab0c852d96e65f0b1f97f239bf3fc918860ea846cbb500fcf7c9d0dd3d851320374460b5fc596b8cfd629f4c07c7507c259bf9beca850a";
    const ROUND: u64 = 397089;

    fn dehexify(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    #[test]
    fn beacon_verifies() {
        assert!(matches!(
            verify(&dehexify(KEY), &dehexify(PREV_SIG), ROUND, &dehexify(SIG)),
            Ok(())
        ));
    }

    #[test]
    fn verification_is_deterministic() {
        let (key, prev_sig, sig) = (dehexify(KEY), dehexify(PREV_SIG), dehexify(SIG));
        assert!(verify(&key, &prev_sig, ROUND, &sig) == verify(&key, &prev_sig, ROUND, &sig));
        assert!(
            verify(&key, &prev_sig, ROUND + 1, &sig) == verify(&key, &prev_sig, ROUND + 1, &sig)
        );
    }

    #[test]
    fn wrong_round_fails() {
        assert!(matches!(
            verify(
                &dehexify(KEY),
                &dehexify(PREV_SIG),
                ROUND + 1,
                &dehexify(SIG)
            ),
            Err(VerificationError::InvalidSignature)
        ));
    }

    #[test]
    fn swapped_signature_fails() {
        // The previous signature is a well-formed G2 point, but it signs
        // another round: rejection must be cryptographic, not a decode error.
        assert!(matches!(
            verify(
                &dehexify(KEY),
                &dehexify(PREV_SIG),
                ROUND,
                &dehexify(PREV_SIG)
            ),
            Err(VerificationError::InvalidSignature)
        ));
    }

    #[test]
    fn empty_prev_sig_fails_pairing_only() {
        // Message construction accepts the empty previous signature; the
        // failure has to surface as a pairing mismatch.
        assert!(matches!(
            verify(&dehexify(KEY), &[], ROUND, &dehexify(SIG)),
            Err(VerificationError::InvalidSignature)
        ));
    }

    #[test]
    fn malformed_key_is_not_invalid_signature() {
        let key = dehexify(KEY);
        assert!(matches!(
            verify(&key[..47], &dehexify(PREV_SIG), ROUND, &dehexify(SIG)),
            Err(VerificationError::MalformedInput(_))
        ));

        let mut corrupted = key.clone();
        corrupted[0] |= 0x40;
        assert!(matches!(
            verify(&corrupted, &dehexify(PREV_SIG), ROUND, &dehexify(SIG)),
            Err(VerificationError::MalformedInput(_))
        ));
    }

    #[test]
    fn malformed_signature_is_not_invalid_signature() {
        let sig = dehexify(SIG);
        assert!(matches!(
            verify(&dehexify(KEY), &dehexify(PREV_SIG), ROUND, &sig[..95]),
            Err(VerificationError::MalformedInput(_))
        ));

        let mut extended = sig.clone();
        extended.push(0);
        assert!(matches!(
            verify(&dehexify(KEY), &dehexify(PREV_SIG), ROUND, &extended),
            Err(VerificationError::MalformedInput(_))
        ));
    }

    #[test]
    fn beacon_repr_verifies() {
        let beacon = ChainedBeacon::new(ROUND, dehexify(SIG), dehexify(PREV_SIG));
        assert!(matches!(verify_beacon(&dehexify(KEY), &beacon), Ok(())));

        let stale = ChainedBeacon::new(ROUND + 1, dehexify(SIG), dehexify(PREV_SIG));
        assert!(matches!(
            verify_beacon(&dehexify(KEY), &stale),
            Err(VerificationError::InvalidSignature)
        ));
    }
}
