//! Deferred result handles.
//!
//! Query commands (get block, get height, ...) do not produce a value on the
//! client. Instead the [`Builder`](crate::Builder) mints a [`Handle`]: an
//! opaque forward reference to the value the remote executor will hold once
//! it has run the command. Handles can be passed back into later builder
//! calls, where they serialize as a reference instead of a literal.
//!
//! A handle carries no payload and can never be resolved client-side.
//!
//! # Overview
//!
//! - [`Handle`]: opaque identifier for a server-side result.
//! - [`HandleAllocator`]: mints handles, strictly increasing, never reused
//!   for the lifetime of the owning builder.
//!
//! The only way to obtain a `Handle` is from a query call on a builder, so a
//! command can never reference a handle before the command that produces it.

/// An opaque reference to a value a query command will produce on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The raw identifier, as it appears on the wire inside a `ref` wrapper.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Mints [`Handle`]s for one builder: a single counter starting at zero.
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next handle. Handles are strictly increasing and never
    /// reused while the allocator lives.
    pub fn mint(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next += 1;
        handle
    }
}
