// scorpion-api: Async Rust client for the Evertz Scorpion HTTP control API.

pub mod client;
pub mod error;
pub mod model;
pub mod transport;

pub use client::ScorpionClient;
pub use error::Error;
pub use model::{ParamMap, Record};
pub use transport::TransportConfig;
