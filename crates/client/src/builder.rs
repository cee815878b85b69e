//! Client builder with dependency injection pattern.

use crate::{Client, Transport};
use anyhow::{Context, Result};

/// Builder for constructing a Client with proper validation.
///
/// Runtime and transport are both required; missing either fails `build()`.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime (required).
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the transport (required).
    ///
    /// The transport receives chat messages and renders replies. It talks to
    /// the game only through a [`runtime::BotHandle`].
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("Runtime is required. Use .runtime() to set it.")?;

        let transport = self
            .transport
            .context("Transport is required. Use .transport() to set it.")?;

        Ok(Client { runtime, transport })
    }
}
