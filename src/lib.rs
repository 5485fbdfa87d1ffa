pub mod beacon;
pub mod cli;
pub mod handler;
pub mod log;
pub mod scheme;
pub mod transport;
pub mod verify;
