//! The rating engine: pure, stateless, side-effect-free computation shared by
//! every rendering and ranking consumer.
//!
//! Nothing in this module performs I/O, blocks, or holds state between calls.
//! Results depend only on arguments, so any component may call in from any
//! thread without coordination.

pub mod color;
pub mod gauge;
pub mod normalize;
pub mod ranking;
