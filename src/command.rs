//! World-editing command records.
//!
//! This module defines the [`Command`] enum, one variant per operation the
//! remote executor understands. A command is a pure record of an operation
//! and its arguments; nothing is validated client-side. Out-of-range
//! coordinates or unknown block ids are forwarded as-is and rejected (or not)
//! by the executor.
//!
//! # Overview
//!
//! The supported operations:
//!
//! - `GetBlock`, `GetBlockData`, `GetBlocks`, `GetHeight`: queries whose
//!   results live on the server, represented client-side by a
//!   [`Handle`](crate::Handle).
//! - `SetBlock`, `SetBlockData`, `SetBlocks`, `SetAllBlocks`: writes.
//!
//! Every numeric field is a [`Value`]: either a literal integer or a handle
//! minted by an earlier query. On the wire a literal stays a bare numeral
//! while a handle becomes the reserved wrapper `{"ref":N}`, so the executor
//! never confuses a reference with a coordinate.
//!
//! # Example
//! ```rust
//! use blockpost::{Command, Value};
//!
//! let cmd = Command::SetBlock {
//!     x: Value::from(0),
//!     y: Value::from(64),
//!     z: Value::from(0),
//!     block_id: Value::from(1),
//! };
//! let json = serde_json::to_string(&cmd).unwrap();
//! assert_eq!(json, r#"{"type":"SETBLOCK","x":0,"y":64,"z":0,"blockId":1}"#);
//! ```
use serde::{
    Serialize,
    ser::{SerializeMap, Serializer},
};

use crate::Handle;

/// A numeric command argument: a literal integer or a deferred reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A plain integer, sent as a bare numeral.
    Lit(i64),
    /// A reference to an earlier query's server-side result.
    Ref(Handle),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Lit(value)
    }
}

impl From<Handle> for Value {
    fn from(value: Handle) -> Self {
        Value::Ref(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Lit(n) => serializer.serialize_i64(*n),
            Value::Ref(handle) => serialize_ref(serializer, handle),
        }
    }
}

/// A block-array argument for `SetBlocks`: the usual source is a handle from
/// an earlier `GetBlocks`, but a literal array is accepted too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blocks {
    Array(Vec<i64>),
    Ref(Handle),
}

impl From<Vec<i64>> for Blocks {
    fn from(value: Vec<i64>) -> Self {
        Blocks::Array(value)
    }
}

impl From<Handle> for Blocks {
    fn from(value: Handle) -> Self {
        Blocks::Ref(value)
    }
}

impl Serialize for Blocks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Blocks::Array(blocks) => blocks.serialize(serializer),
            Blocks::Ref(handle) => serialize_ref(serializer, handle),
        }
    }
}

// The reserved wrapper that distinguishes a handle from a literal on the
// wire. Nothing else in a payload serializes as a one-key "ref" map.
fn serialize_ref<S>(serializer: S, handle: &Handle) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("ref", &handle.id())?;
    map.end()
}

/// One recorded world-editing operation awaiting transmission.
///
/// The discriminant serializes first as the `type` field, followed by the
/// variant's fields in declaration order. The tag strings match the dispatch
/// ids the executor keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Command {
    GetBlock {
        x: Value,
        y: Value,
        z: Value,
    },
    GetBlockData {
        x: Value,
        y: Value,
        z: Value,
    },
    GetBlocks {
        x1: Value,
        y1: Value,
        z1: Value,
        x2: Value,
        y2: Value,
        z2: Value,
    },
    #[serde(rename_all = "camelCase")]
    SetBlock {
        x: Value,
        y: Value,
        z: Value,
        block_id: Value,
    },
    #[serde(rename_all = "camelCase")]
    SetBlockData {
        x: Value,
        y: Value,
        z: Value,
        block_data: Value,
    },
    SetBlocks {
        x1: Value,
        y1: Value,
        z1: Value,
        x2: Value,
        y2: Value,
        z2: Value,
        blocks: Blocks,
    },
    #[serde(rename_all = "camelCase")]
    SetAllBlocks {
        x1: Value,
        y1: Value,
        z1: Value,
        x2: Value,
        y2: Value,
        z2: Value,
        block_id: Value,
    },
    GetHeight {
        x: Value,
        z: Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::HandleAllocator;

    fn lit(n: i64) -> Value {
        Value::from(n)
    }

    #[test]
    fn set_block_wire_shape() {
        let cmd = Command::SetBlock {
            x: lit(0),
            y: lit(0),
            z: lit(0),
            block_id: lit(1),
        };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"SETBLOCK","x":0,"y":0,"z":0,"blockId":1}"#
        );
    }

    #[test]
    fn get_height_wire_shape() {
        let cmd = Command::GetHeight { x: lit(5), z: lit(-3) };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"GETHEIGHT","x":5,"z":-3}"#
        );
    }

    #[test]
    fn set_all_blocks_wire_shape() {
        let cmd = Command::SetAllBlocks {
            x1: lit(0),
            y1: lit(0),
            z1: lit(0),
            x2: lit(10),
            y2: lit(10),
            z2: lit(10),
            block_id: lit(0),
        };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"SETALLBLOCKS","x1":0,"y1":0,"z1":0,"x2":10,"y2":10,"z2":10,"blockId":0}"#
        );
    }

    #[test]
    fn handle_field_serializes_as_ref_wrapper() {
        let mut allocator = HandleAllocator::new();
        let handle = allocator.mint();

        let cmd = Command::SetBlock {
            x: lit(1),
            y: lit(2),
            z: lit(3),
            block_id: Value::from(handle),
        };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"SETBLOCK","x":1,"y":2,"z":3,"blockId":{"ref":0}}"#
        );
    }

    #[test]
    fn block_array_serializes_as_json_array() {
        let cmd = Command::SetBlocks {
            x1: lit(0),
            y1: lit(0),
            z1: lit(0),
            x2: lit(1),
            y2: lit(0),
            z2: lit(0),
            blocks: Blocks::from(vec![1, 2]),
        };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"SETBLOCKS","x1":0,"y1":0,"z1":0,"x2":1,"y2":0,"z2":0,"blocks":[1,2]}"#
        );
    }

    #[test]
    fn block_ref_serializes_as_ref_wrapper() {
        let mut allocator = HandleAllocator::new();
        let handle = allocator.mint();

        let cmd = Command::SetBlocks {
            x1: lit(0),
            y1: lit(0),
            z1: lit(0),
            x2: lit(1),
            y2: lit(0),
            z2: lit(0),
            blocks: Blocks::from(handle),
        };

        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.ends_with(r#""blocks":{"ref":0}}"#), "got {json}");
    }

    #[test]
    fn set_block_data_wire_shape() {
        let cmd = Command::SetBlockData {
            x: lit(0),
            y: lit(0),
            z: lit(0),
            block_data: lit(4),
        };

        assert_eq!(
            serde_json::to_string(&cmd).unwrap(),
            r#"{"type":"SETBLOCKDATA","x":0,"y":0,"z":0,"blockData":4}"#
        );
    }
}
