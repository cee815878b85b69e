//! Line-oriented console transport.
//!
//! Reads one chat message per line from stdin and prints each reply to
//! stdout. Display names seen on input lines feed a [`NameDirectory`] that
//! later resolves ranking and duel names.
mod parse;
mod render;

pub use parse::{Incoming, ParseError, Request, help_text, parse_line};
pub use render::{render_error, render_reply};

use anyhow::{Context, Result};
use async_trait::async_trait;
use runtime::{BotHandle, NameDirectory};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::Transport;

/// Console transport over any line reader and writer.
pub struct ConsoleTransport<R, W> {
    prefix: String,
    names: NameDirectory,
    reader: R,
    writer: W,
}

impl ConsoleTransport<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Transport bound to the process stdin and stdout.
    pub fn stdio(prefix: impl Into<String>) -> Self {
        Self::new(
            prefix,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
    }
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(prefix: impl Into<String>, reader: R, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            names: NameDirectory::new(),
            reader,
            writer,
        }
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn handle_line(&mut self, handle: &BotHandle, line: &str) -> Result<()> {
        let incoming = match parse_line(line, &self.prefix) {
            Ok(Some(incoming)) => incoming,
            Ok(None) => return Ok(()),
            Err(e) => {
                tracing::debug!(line, "rejected input: {}", e);
                return self.write_message(&format!("❌ {e}")).await;
            }
        };

        if let Some(name) = incoming.display_name {
            self.names.remember(incoming.author.clone(), name);
        }

        let message = match incoming.request {
            Request::Help => help_text(&self.prefix),
            Request::Command(command) => match handle.execute(command).await {
                Ok(reply) => render_reply(&reply, &self.names).await,
                Err(e) => render_error(&e, &self.prefix),
            },
        };
        self.write_message(&message).await
    }

    async fn write_message(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> Transport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn run(&mut self, handle: BotHandle) -> Result<()> {
        tracing::info!(prefix = %self.prefix, "Console transport ready");

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .context("Failed to read console input")?;
            if read == 0 {
                break;
            }
            let current = line.trim_end().to_owned();
            self.handle_line(&handle, &current).await?;
        }

        tracing::info!("Console input closed");
        Ok(())
    }
}
