//! Public entry point: the codec builder and the unified error type.

mod codec;
mod error;

pub use codec::MotifCodec;
pub use error::CodecError;
