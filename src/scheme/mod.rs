// Copyright 2023-2025 StorSwift Inc.
// SPDX-License-Identifier: Apache-2.0

//! Process-wide curve and scheme selection.
//!
//! There is exactly one supported pairing suite per process lifetime:
//! BLS12-381 with public keys on G1 (compact encoding) and signatures on G2.
//! The values here are compile-time constants, so concurrent verifications
//! share them without synchronization.

mod backend;

pub use backend::KeyPoint;
pub use backend::PointError;
pub use backend::SigPoint;
pub use backend::KEY_POINT_LEN;
pub use backend::SIG_POINT_LEN;

/// Identifier of the supported scheme, kept verbatim for interoperability
/// with chains announcing their scheme by this name.
pub const SCHEME_ID: &str = "pedersen-bls-chained";

/// Domain separation tag of the hash-to-curve map (RFC 9380 suite
/// `BLS12381G2_XMD:SHA-256_SSWU_RO` with the standard signature DST).
pub(crate) const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// BLS check that `sig` over `msg` was produced with the distributed key
/// behind `key`. The signature is the single element recovered from a
/// quorum of partial signatures, so no share handling happens here.
pub fn bls_verify(key: &KeyPoint, sig: &SigPoint, msg: &[u8]) -> bool {
    let hm = backend::hash_to_sig_point(msg);
    backend::pairing_check(key, sig, &hm)
}
