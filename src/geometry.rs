//! Region convenience helpers.
//!
//! Ordinary callers of the [`Builder`](crate::Builder) API: each helper
//! records a short command sequence and flushes it. `xs`, `ys`, `zs` are
//! extents from the region's origin corner.

use crate::{
    Builder, Handle, block,
    protocol::{Delivery, Transport, WireError},
};

/// Capture a region's blocks and clear it to air. The returned handle is
/// the captured block array, usable with [`paste`].
#[allow(clippy::too_many_arguments)]
pub fn cut<T: Transport>(
    builder: &mut Builder<T>,
    x: i64,
    y: i64,
    z: i64,
    xs: i64,
    ys: i64,
    zs: i64,
) -> Result<(Handle, Delivery), WireError> {
    let blocks = builder.get_blocks(x, y, z, x + xs, y + ys, z + zs);
    builder.set_all_blocks(x, y, z, x + xs, y + ys, z + zs, block::AIR);
    let delivery = builder.flush()?;
    Ok((blocks, delivery))
}

/// Capture a region's blocks without modifying it.
#[allow(clippy::too_many_arguments)]
pub fn copy<T: Transport>(
    builder: &mut Builder<T>,
    x: i64,
    y: i64,
    z: i64,
    xs: i64,
    ys: i64,
    zs: i64,
) -> Result<(Handle, Delivery), WireError> {
    let blocks = builder.get_blocks(x, y, z, x + xs, y + ys, z + zs);
    let delivery = builder.flush()?;
    Ok((blocks, delivery))
}

/// Write a captured block array into a region of the same extents.
#[allow(clippy::too_many_arguments)]
pub fn paste<T: Transport>(
    builder: &mut Builder<T>,
    x: i64,
    y: i64,
    z: i64,
    xs: i64,
    ys: i64,
    zs: i64,
    blocks: Handle,
) -> Result<Delivery, WireError> {
    builder.set_blocks(x, y, z, x + xs, y + ys, z + zs, blocks);
    builder.flush()
}

/// Move a region: cut it at the old origin, paste it at the new one.
/// Flushes twice, once per phase, like the operations it is built from.
#[allow(clippy::too_many_arguments)]
pub fn teleport<T: Transport>(
    builder: &mut Builder<T>,
    x: i64,
    y: i64,
    z: i64,
    xs: i64,
    ys: i64,
    zs: i64,
    xn: i64,
    yn: i64,
    zn: i64,
) -> Result<Delivery, WireError> {
    let (blocks, _cut) = cut(builder, x, y, z, xs, ys, zs)?;
    paste(builder, xn, yn, zn, xs, ys, zs, blocks)
}
