//! Mail relay client module

mod client;
mod payload;
mod traits;

pub use client::{EmailJsRelay, UnconfiguredRelay, DEFAULT_ENDPOINT};
pub use payload::EmailParams;
pub use traits::{MailRelay, RelayError};

#[cfg(test)]
pub use traits::MockMailRelay;
