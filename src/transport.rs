//! Marshalling between the raw textual call representation of an external
//! caller (hex-encoded points, base-10 round) and typed requests.

use crate::scheme::KEY_POINT_LEN;
use crate::scheme::SIG_POINT_LEN;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransportError {
    #[error("decoding {field} hex: {source}")]
    InvalidHex {
        field: &'static str,
        source: hex::FromHexError,
    },
    #[error("invalid round: {0}")]
    InvalidRound(String),
}

/// Raw verification request as received from an external caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyPacket {
    pub public_key: String,
    pub round: String,
    pub previous_signature: String,
    pub signature: String,
}

/// Typed verification request, output of packet marshalling.
///
/// Lengths of the byte fields are *not* enforced here: the core reports
/// them as part of its own malformed-input class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub public_key: Vec<u8>,
    pub round: u64,
    pub previous_signature: Vec<u8>,
    pub signature: Vec<u8>,
}

impl TryFrom<&VerifyPacket> for VerifyRequest {
    type Error = TransportError;

    fn try_from(packet: &VerifyPacket) -> Result<Self, Self::Error> {
        let public_key = decode_field("public key", &packet.public_key)?;
        let previous_signature = decode_field("previous signature", &packet.previous_signature)?;
        let signature = decode_field("signature", &packet.signature)?;
        let round = parse_round(&packet.round)?;

        Ok(Self {
            public_key,
            round,
            previous_signature,
            signature,
        })
    }
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, TransportError> {
    hex::decode(value).map_err(|source| TransportError::InvalidHex { field, source })
}

/// Parses a base-10 round, rejecting values outside the 64-bit range
/// rather than truncating them. Host environments hand rounds over in
/// wider numeric types than the chain ever uses.
pub fn parse_round(value: &str) -> Result<u64, TransportError> {
    let wide = value
        .trim()
        .parse::<i128>()
        .map_err(|_| TransportError::InvalidRound(value.into()))?;

    u64::try_from(wide).map_err(|_| TransportError::InvalidRound(value.into()))
}
