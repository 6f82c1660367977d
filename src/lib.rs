//! Lazy sequence combinators with metadata propagation.
//!
//! Adds `zip`, `zip_with_index`, `take_while`/`take_until`,
//! `skip_while`/`skip_until` and three flavours of `unfold` on top of
//! [`Sequence`], carrying exact size, ordering traits and a parallel hint
//! from inputs to outputs.

pub mod error;
pub mod generator;
pub mod iterators;
pub mod metadata;
pub mod sequence;
pub mod stream_configuration;
pub mod stream_utils;
pub mod streamifier;
pub mod zipped_pair;

// Re-export all combinators at the crate root
pub use stream_utils::*;

pub use error::{SequenceError, SequenceResult};
pub use iterators::SequenceIterator;
pub use metadata::SequenceMetadata;
pub use sequence::Sequence;
pub use stream_configuration::StreamifierConfig;
pub use streamifier::Streamifier;
pub use zipped_pair::ZippedPair;
