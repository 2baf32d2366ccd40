//! Deferred command accumulation.
//!
//! The [`Builder`] is the object callers script against. Every operation
//! call appends one [`Command`](crate::Command) to the current [`Batch`];
//! nothing touches the network until [`Builder::flush`], which serializes
//! the whole batch, hands it to the transport, and starts a fresh batch in
//! the same step.
//!
//! Query operations cannot return a real value, since the command has not
//! run yet. They return a [`Handle`](crate::Handle) instead: a forward
//! reference the executor resolves when it reaches the commands that use it.
//! Handles can be passed wherever a coordinate or block id is expected.
//!
//! # Example
//! ```rust,no_run
//! use blockpost::{Builder, HttpTransport, block};
//!
//! let mut builder = Builder::new(HttpTransport::new("http://localhost:8080/mcpi/testPost"));
//!
//! let ground = builder.get_height(0, 0);
//! builder.set_block(0, ground, 0, block::TORCH);
//! let delivery = builder.flush().unwrap();
//!
//! // Waiting is optional; dropping the receipt is fire-and-forget.
//! delivery.wait().unwrap();
//! ```
//!
//! A builder is a single-session object: all mutation is synchronous on the
//! caller's thread, and two call sites sharing one builder interleave their
//! commands in call order against one handle counter.
use std::mem;

use log::{debug, trace};

use crate::{
    Blocks, Command, Handle, Value,
    handle::HandleAllocator,
    protocol::{self, Delivery, Transport, WireError},
};

/// The ordered commands accumulated since the last flush.
///
/// An explicit owned value rather than a bare list so that flush's swap to a
/// fresh batch is a single observable operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    commands: Vec<Command>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replace this batch with an empty one, returning the accumulated
    /// commands.
    pub fn take(&mut self) -> Batch {
        mem::take(self)
    }
}

/// Records world-editing operations and transmits them as one batch.
pub struct Builder<T: Transport> {
    batch: Batch,
    handles: HandleAllocator,
    transport: T,
}

impl<T: Transport> Builder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            batch: Batch::new(),
            handles: HandleAllocator::new(),
            transport,
        }
    }

    /// The commands recorded since the last flush.
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    fn record(&mut self, command: Command) {
        trace!("recording {command:?}");
        self.batch.push(command);
    }

    fn record_query(&mut self, command: Command) -> Handle {
        let handle = self.handles.mint();
        self.record(command);
        handle
    }

    /// Query the block id at a position. Resolved server-side.
    pub fn get_block(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        z: impl Into<Value>,
    ) -> Handle {
        self.record_query(Command::GetBlock {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        })
    }

    /// Query the block data value at a position. Resolved server-side.
    pub fn get_block_data(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        z: impl Into<Value>,
    ) -> Handle {
        self.record_query(Command::GetBlockData {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        })
    }

    /// Query the block array of a cuboid. Resolved server-side; the handle
    /// is what [`set_blocks`](Self::set_blocks) expects.
    #[allow(clippy::too_many_arguments)]
    pub fn get_blocks(
        &mut self,
        x1: impl Into<Value>,
        y1: impl Into<Value>,
        z1: impl Into<Value>,
        x2: impl Into<Value>,
        y2: impl Into<Value>,
        z2: impl Into<Value>,
    ) -> Handle {
        self.record_query(Command::GetBlocks {
            x1: x1.into(),
            y1: y1.into(),
            z1: z1.into(),
            x2: x2.into(),
            y2: y2.into(),
            z2: z2.into(),
        })
    }

    /// Query the world height at an x,z column. Resolved server-side.
    pub fn get_height(&mut self, x: impl Into<Value>, z: impl Into<Value>) -> Handle {
        self.record_query(Command::GetHeight {
            x: x.into(),
            z: z.into(),
        })
    }

    /// Place one block.
    pub fn set_block(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        z: impl Into<Value>,
        block_id: impl Into<Value>,
    ) {
        self.record(Command::SetBlock {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            block_id: block_id.into(),
        });
    }

    /// Set the data value of one block.
    pub fn set_block_data(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        z: impl Into<Value>,
        block_data: impl Into<Value>,
    ) {
        self.record(Command::SetBlockData {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            block_data: block_data.into(),
        });
    }

    /// Fill a cuboid from a block array, usually a handle from
    /// [`get_blocks`](Self::get_blocks).
    #[allow(clippy::too_many_arguments)]
    pub fn set_blocks(
        &mut self,
        x1: impl Into<Value>,
        y1: impl Into<Value>,
        z1: impl Into<Value>,
        x2: impl Into<Value>,
        y2: impl Into<Value>,
        z2: impl Into<Value>,
        blocks: impl Into<Blocks>,
    ) {
        self.record(Command::SetBlocks {
            x1: x1.into(),
            y1: y1.into(),
            z1: z1.into(),
            x2: x2.into(),
            y2: y2.into(),
            z2: z2.into(),
            blocks: blocks.into(),
        });
    }

    /// Fill a cuboid with a single block type.
    #[allow(clippy::too_many_arguments)]
    pub fn set_all_blocks(
        &mut self,
        x1: impl Into<Value>,
        y1: impl Into<Value>,
        z1: impl Into<Value>,
        x2: impl Into<Value>,
        y2: impl Into<Value>,
        z2: impl Into<Value>,
        block_id: impl Into<Value>,
    ) {
        self.record(Command::SetAllBlocks {
            x1: x1.into(),
            y1: y1.into(),
            z1: z1.into(),
            x2: x2.into(),
            y2: y2.into(),
            z2: z2.into(),
            block_id: block_id.into(),
        });
    }

    /// Serialize the current batch, hand it to the transport, and start a
    /// fresh batch.
    ///
    /// The batch is cleared before the network outcome is known, so the
    /// builder is immediately reusable. The returned [`Delivery`] is the
    /// only record of the in-flight transmission: wait on it for
    /// confirmation, or drop it for fire-and-forget. There is no retry and
    /// no way to retract a payload once handed over.
    pub fn flush(&mut self) -> Result<Delivery, WireError> {
        let payload = protocol::encode(&self.batch)?;
        let batch = self.batch.take();
        debug!("flushing {} commands", batch.len());
        Ok(self.transport.send(payload))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::protocol::Reply;

    // Captures every payload and completes deliveries immediately.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingTransport {
        fn payloads(&self) -> Vec<String> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, payload: String) -> Delivery {
            self.sent.borrow_mut().push(payload);
            let seq = self.sent.borrow().len() as u64;
            Delivery::resolved(Ok(Reply {
                body: String::new(),
                seq,
            }))
        }
    }

    fn builder() -> (Builder<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::default();
        (Builder::new(transport.clone()), transport)
    }

    fn commands_of(payload: &str) -> Vec<serde_json::Value> {
        let parsed: serde_json::Value = serde_json::from_str(payload.trim_end()).unwrap();
        parsed["commands"].as_array().unwrap().clone()
    }

    #[test]
    fn every_call_appends_one_command_in_order() {
        let (mut builder, transport) = builder();

        builder.set_block(0, 0, 0, 1);
        builder.get_block(1, 1, 1);
        builder.set_block_data(2, 2, 2, 7);
        builder.get_height(3, 3);
        builder.flush().unwrap();

        let payloads = transport.payloads();
        assert_eq!(payloads.len(), 1);

        let commands = commands_of(&payloads[0]);
        let kinds: Vec<&str> = commands.iter().map(|c| c["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            vec!["SETBLOCK", "GETBLOCK", "SETBLOCKDATA", "GETHEIGHT"]
        );
    }

    #[test]
    fn flushing_an_empty_batch_is_not_an_error() {
        let (mut builder, transport) = builder();

        builder.flush().unwrap();
        assert_eq!(transport.payloads(), vec!["{\"commands\":[]}\n"]);
    }

    #[test]
    fn flush_clears_the_batch() {
        let (mut builder, transport) = builder();

        builder.set_block(0, 0, 0, 1);
        builder.flush().unwrap();
        assert!(builder.batch().is_empty());

        builder.flush().unwrap();
        let payloads = transport.payloads();
        assert_eq!(payloads.len(), 2);
        assert_eq!(commands_of(&payloads[0]).len(), 1);
        assert_eq!(commands_of(&payloads[1]).len(), 0);
    }

    #[test]
    fn builder_is_usable_immediately_after_flush() {
        let (mut builder, transport) = builder();

        builder.set_block(0, 0, 0, 1);
        builder.flush().unwrap();
        builder.set_block(1, 1, 1, 2);
        builder.flush().unwrap();

        let payloads = transport.payloads();
        assert_eq!(commands_of(&payloads[1]).len(), 1);
        assert_eq!(commands_of(&payloads[1])[0]["blockId"], 2);
    }

    #[test]
    fn query_handles_strictly_increase_across_flushes() {
        let (mut builder, _transport) = builder();

        let a = builder.get_block(0, 0, 0);
        let b = builder.get_height(0, 0);
        builder.flush().unwrap();
        let c = builder.get_blocks(0, 0, 0, 1, 1, 1);
        let d = builder.get_block_data(0, 0, 0);

        assert!(a < b && b < c && c < d);
        assert_eq!(
            vec![a.id(), b.id(), c.id(), d.id()],
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn unreferenced_handle_never_appears_in_the_payload() {
        let (mut builder, transport) = builder();

        builder.set_block(0, 0, 0, 1);
        let _height = builder.get_height(5, 5);
        builder.set_all_blocks(0, 0, 0, 10, 10, 10, 0);
        builder.flush().unwrap();

        let payloads = transport.payloads();
        let commands = commands_of(&payloads[0]);
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0]["type"], "SETBLOCK");
        assert_eq!(commands[0]["blockId"], 1);
        assert_eq!(commands[1]["type"], "GETHEIGHT");
        assert_eq!(commands[2]["type"], "SETALLBLOCKS");
        assert_eq!(commands[2]["blockId"], 0);

        // The GetHeight handle was minted but never passed back in.
        assert!(!payloads[0].contains("ref"), "got {}", payloads[0]);
    }

    #[test]
    fn handle_arguments_serialize_as_refs() {
        let (mut builder, transport) = builder();

        let block = builder.get_block(0, 0, 0);
        builder.set_block(1, 1, 1, block);
        let ground = builder.get_height(2, 2);
        builder.set_block(2, ground, 2, 50);
        builder.flush().unwrap();

        let commands = commands_of(&transport.payloads()[0]);
        assert_eq!(commands[1]["blockId"]["ref"], 0);
        assert_eq!(commands[3]["y"]["ref"], 1);
    }

    #[test]
    fn copy_then_fill_scenario() {
        let (mut builder, transport) = builder();

        let _blocks = builder.get_blocks(0, 0, 0, 5, 5, 5);
        builder.set_all_blocks(0, 0, 0, 5, 5, 5, 0);
        builder.flush().unwrap();

        let payloads = transport.payloads();
        let commands = commands_of(&payloads[0]);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0]["type"], "GETBLOCKS");
        assert_eq!(commands[1]["type"], "SETALLBLOCKS");

        builder.flush().unwrap();
        assert_eq!(commands_of(&transport.payloads()[1]).len(), 0);
    }

    #[test]
    fn set_blocks_accepts_a_literal_array() {
        let (mut builder, transport) = builder();

        builder.set_blocks(0, 0, 0, 1, 0, 0, vec![1, 4]);
        builder.flush().unwrap();

        let commands = commands_of(&transport.payloads()[0]);
        assert_eq!(commands[0]["blocks"], serde_json::json!([1, 4]));
    }

    #[test]
    fn batch_take_swaps_in_an_empty_batch() {
        let mut batch = Batch::new();
        batch.push(Command::GetHeight {
            x: Value::from(0),
            z: Value::from(0),
        });

        let taken = batch.take();
        assert_eq!(taken.len(), 1);
        assert!(batch.is_empty());
    }
}
