// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Glue over the [`bls12_381`] arithmetic: validated point decoding,
//! hash-to-group and the pairing equality. Everything above this module is
//! expressed only in terms of [`KeyPoint`], [`SigPoint`] and the checks
//! below, so the curve library can be swapped behind this boundary.

use super::DST;

use bls12_381::hash_to_curve::ExpandMsgXmd;
use bls12_381::hash_to_curve::HashToCurve;
use bls12_381::multi_miller_loop;
use bls12_381::G1Affine;
use bls12_381::G2Affine;
use bls12_381::G2Prepared;
use bls12_381::G2Projective;
use bls12_381::Gt;
use group::Group;

/// Length of a compressed G1 encoding.
pub const KEY_POINT_LEN: usize = 48;
/// Length of a compressed G2 encoding.
pub const SIG_POINT_LEN: usize = 96;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PointError {
    #[error("invalid encoding length: expected {expected} bytes, received {received}")]
    InvalidLength { expected: usize, received: usize },
    #[error("bytes are not a valid point of the expected group")]
    InvalidPoint,
}

/// Public key of a randomness chain: element of G1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPoint(G1Affine);

impl KeyPoint {
    /// Decodes a compressed G1 encoding, enforcing the on-curve and
    /// subgroup checks. The identity is not a usable public key and is
    /// rejected.
    pub fn deserialize(data: &[u8]) -> Result<Self, PointError> {
        let bytes: &[u8; KEY_POINT_LEN] =
            data.try_into().map_err(|_| PointError::InvalidLength {
                expected: KEY_POINT_LEN,
                received: data.len(),
            })?;

        let point = Option::<G1Affine>::from(G1Affine::from_compressed(bytes))
            .ok_or(PointError::InvalidPoint)?;
        if bool::from(point.is_identity()) {
            return Err(PointError::InvalidPoint);
        }

        Ok(Self(point))
    }

    pub fn serialize(&self) -> [u8; KEY_POINT_LEN] {
        self.0.to_compressed()
    }
}

/// Beacon signature: element of G2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigPoint(G2Affine);

impl SigPoint {
    /// Decodes a compressed G2 encoding under the same rules as
    /// [`KeyPoint::deserialize`], identity permitted.
    pub fn deserialize(data: &[u8]) -> Result<Self, PointError> {
        let bytes: &[u8; SIG_POINT_LEN] =
            data.try_into().map_err(|_| PointError::InvalidLength {
                expected: SIG_POINT_LEN,
                received: data.len(),
            })?;

        let point = Option::<G2Affine>::from(G2Affine::from_compressed(bytes))
            .ok_or(PointError::InvalidPoint)?;

        Ok(Self(point))
    }

    pub fn serialize(&self) -> [u8; SIG_POINT_LEN] {
        self.0.to_compressed()
    }
}

/// Hashes a message onto the signature group under the scheme domain.
pub(super) fn hash_to_sig_point(msg: &[u8]) -> SigPoint {
    let point = <G2Projective as HashToCurve<ExpandMsgXmd<sha2::Sha256>>>::hash_to_curve(msg, DST);
    SigPoint(G2Affine::from(&point))
}

/// Pairing equality `e(g1, sig) == e(key, hm)`, computed as a two-term
/// Miller loop with the negated generator and compared against the
/// identity of Gt.
pub(super) fn pairing_check(key: &KeyPoint, sig: &SigPoint, hm: &SigPoint) -> bool {
    let neg_gen = -G1Affine::generator();
    let sig_prepared = G2Prepared::from(sig.0);
    let hm_prepared = G2Prepared::from(hm.0);

    let paired = multi_miller_loop(&[(&neg_gen, &sig_prepared), (&key.0, &hm_prepared)]);
    paired.final_exponentiation() == Gt::identity()
}
