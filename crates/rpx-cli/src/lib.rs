//! Library components of the `rpx` converter: logging setup and the
//! conversion pipeline.

pub mod logging;
pub mod pipeline;
