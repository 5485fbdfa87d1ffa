//! Boundary adapter exposing the synchronous verifier behind an
//! asynchronous handle.
//!
//! The verifier itself is a pure predicate; this actor only marshals
//! requests across the async boundary and owns all logging. Each command
//! runs on a blocking worker because the pairing check is CPU-bound.

use crate::transport::VerifyRequest;
use crate::verify;
use crate::verify::VerificationError;

use tokio::sync::mpsc;
use tokio::sync::oneshot;
use tokio::task;
use tracing::debug;

/// Callback for [`VerifyCmd`]
pub type Callback<T, E> = oneshot::Sender<Result<T, E>>;

/// Commands for the verifier actor.
pub enum VerifyCmd {
    Beacon {
        request: VerifyRequest,
        cb: Callback<(), VerificationError>,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum HandlerError {
    #[error("verifier actor has been closed unexpectedly")]
    ActorClosedRx,
    #[error("cb sender has been closed unexpectedly")]
    CbClosedTx(#[from] oneshot::error::RecvError),
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

/// Handle for the verifier actor.
#[derive(Clone)]
pub struct VerifierHandle {
    sender: mpsc::Sender<VerifyCmd>,
}

impl VerifierHandle {
    /// Starts the verifier actor and returns its handle.
    ///
    /// The actor holds no state between commands, so concurrent handles
    /// only ever contend on the command channel.
    pub fn start() -> Self {
        let (cmd_tx, mut cmd_rx) = mpsc::channel::<VerifyCmd>(1);

        task::spawn_blocking(move || {
            while let Some(cmd) = cmd_rx.blocking_recv() {
                match cmd {
                    VerifyCmd::Beacon { request, cb } => {
                        let result = verify::verify(
                            &request.public_key,
                            &request.previous_signature,
                            request.round,
                            &request.signature,
                        );
                        if let Err(err) = &result {
                            debug!("beacon of round {} rejected: {err}", request.round);
                        }
                        if cb.send(result).is_err() {
                            debug!("callback receiver has been dropped");
                        }
                    }
                }
            }
        });

        Self { sender: cmd_tx }
    }

    /// Verifies a single beacon, resolving once the actor replies.
    pub async fn verify(&self, request: VerifyRequest) -> Result<(), HandlerError> {
        let (cb, cb_rx) = oneshot::channel();
        self.sender
            .send(VerifyCmd::Beacon { request, cb })
            .await
            .map_err(|_| HandlerError::ActorClosedRx)?;

        Ok(cb_rx.await??)
    }
}
