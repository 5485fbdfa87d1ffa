use crate::beacon;
use crate::handler::VerifierHandle;
use crate::log::init_log;
use crate::transport::VerifyPacket;
use crate::transport::VerifyRequest;

use clap::Parser;
use tracing::info;

/// Verifies that a single beacon output is a valid link of a randomness
/// chain: the signature must be a threshold signature of
/// `sha256( previous_signature || round )` under the chain public key.
#[derive(Debug, Parser)]
#[command(name = "beacon-verify")]
#[command(about = "Verify a single randomness beacon against the chain public key", long_about = None)]
pub struct Cli {
    #[arg(long)]
    verbose: bool,
    /// Public key of the chain, hex-encoded compressed G1 point
    #[arg(long)]
    public_key: String,
    /// Round number in base 10
    #[arg(long)]
    round: String,
    /// Signature of the previous round, hex-encoded. May be omitted for
    /// genesis-adjacent rounds.
    #[arg(long, default_value = "")]
    previous_signature: String,
    /// Signature to verify, hex-encoded compressed G2 point
    #[arg(long)]
    signature: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_log(self.verbose)?;

        let packet = VerifyPacket {
            public_key: self.public_key,
            round: self.round,
            previous_signature: self.previous_signature,
            signature: self.signature,
        };
        let request = VerifyRequest::try_from(&packet)?;
        let (round, signature) = (request.round, request.signature.clone());

        match VerifierHandle::start().verify(request).await {
            Ok(()) => {
                info!("beacon of round {round} is valid");
                println!("randomness: {}", hex::encode(beacon::randomness(&signature)));
                Ok(())
            }
            Err(err) => anyhow::bail!("beacon of round {round} is rejected: {err}"),
        }
    }
}
