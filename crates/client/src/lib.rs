//! Top-level client wiring the arena runtime to a chat transport.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime   (command worker + player store)
//!   └─→ Transport (chat input, reply rendering)
//! ```
//!
//! The transport only sees a [`runtime::BotHandle`]; swapping the console
//! transport for a chat-platform gateway does not touch the runtime.

mod builder;
pub mod config;
pub mod console;
pub mod logging;

pub use builder::ClientBuilder;
pub use config::{BotConfig, ConfigError};

use anyhow::Result;
use async_trait::async_trait;
use runtime::BotHandle;

/// Source of player commands and sink for replies.
#[async_trait]
pub trait Transport: Send {
    /// Serve commands until the input source is exhausted or the user quits.
    async fn run(&mut self, handle: BotHandle) -> Result<()>;
}

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles runtime and transport
/// 2. `Client::run()` hands a runtime handle to the transport
/// 3. When the transport returns, the runtime is shut down and drains
///    any queued commands
pub struct Client {
    runtime: runtime::Runtime,
    transport: Box<dyn Transport>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the transport finishes.
    pub async fn run(self) -> Result<()> {
        let mut transport = self.transport;
        let transport_result = transport.run(self.runtime.handle()).await;

        if let Err(e) = self.runtime.shutdown().await {
            tracing::error!("Runtime shutdown error: {}", e);
        }

        transport_result
    }
}
