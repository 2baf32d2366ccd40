//! Wire encoding and transmission.
//!
//! This module defines how an accumulated batch of commands leaves the
//! client: the canonical JSON encoding the remote executor parses, and the
//! transport abstraction that carries the encoded payload over HTTP.
//!
//! # Overview
//!
//! A flushed batch becomes a single payload of the form
//!
//! ```text
//! {"commands":[{"type":"SETBLOCK","x":0,"y":0,"z":0,"blockId":1}, ...]}
//! ```
//!
//! terminated by a newline, because the bridge on the other end parses its
//! input a line at a time. Commands appear in exactly the order they were
//! recorded; the executor applies them in array order and resolves any
//! `{"ref":N}` fields against results produced by earlier commands.
//!
//! # Key Components
//!
//! - [`encode`]: pure batch-to-payload serialization.
//! - [`Transport`]: the seam between the builder and the network. Sends are
//!   asynchronous and complete a [`Delivery`] exactly once.
//! - [`HttpTransport`]: the stock implementation, one HTTP POST per flush on
//!   a background thread.
//! - [`Delivery`]: per-flush receipt. Dropping it keeps the original
//!   fire-and-forget behavior; waiting on it surfaces transmission failures
//!   that were previously silently lost.
//!
//! # See Also
//!
//! - [`builder`](crate::builder): accumulates the batches this module ships.
mod transport;
mod wire;

pub use transport::{Delivery, HttpTransport, Reply, Transport, TransportError};
pub use wire::{WireError, encode};
