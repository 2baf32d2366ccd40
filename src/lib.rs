pub mod block;
pub mod builder;
pub mod command;
pub mod geometry;
pub mod handle;
pub mod protocol;

pub use builder::{Batch, Builder};
pub use command::{Blocks, Command, Value};
pub use handle::Handle;
pub use protocol::{Delivery, HttpTransport, Reply, Transport};
