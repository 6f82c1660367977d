//! Turns a raw iterator plus what is known about it into a [`Sequence`].

use crate::iterators::SequenceIterator;
use crate::metadata::SequenceMetadata;
use crate::sequence::Sequence;
use crate::stream_configuration::StreamifierConfig;

/// Builder for the lazy sequence object that every combinator returns.
///
/// ```
/// use rs2_streamutils::{Streamifier, SequenceMetadata};
/// use rs2_streamutils::iterators::TakeWhileIterator;
///
/// let seq = Streamifier::new(false)
///     .with_metadata(SequenceMetadata::ordered())
///     .unknown_size()
///     .streamify(TakeWhileIterator::over(1..10, |x: &i32| *x < 4));
/// assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streamifier {
    parallel: bool,
    metadata: SequenceMetadata,
}

impl Streamifier {
    pub fn new(parallel: bool) -> Self {
        Self {
            parallel,
            metadata: SequenceMetadata::ordered(),
        }
    }

    pub fn from_config(config: &StreamifierConfig) -> Self {
        Self {
            parallel: config.parallel,
            metadata: config.metadata,
        }
    }

    /// Replace the whole descriptor, size included.
    pub fn with_metadata(mut self, metadata: SequenceMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn sized(mut self, size: usize) -> Self {
        self.metadata = self.metadata.with_size(size);
        self
    }

    pub fn unknown_size(mut self) -> Self {
        self.metadata = self.metadata.without_size();
        self
    }

    pub fn streamify<I>(self, iter: I) -> Sequence<I>
    where
        I: SequenceIterator,
    {
        log::trace!(
            "Streamifying {} with {:?} (parallel: {})",
            I::NAME,
            self.metadata,
            self.parallel
        );
        Sequence::from_parts(iter, self.metadata, self.parallel, I::NAME)
    }

    /// Sequential, ordered sequence of unknown size.
    pub fn to_sequence<I>(iter: I) -> Sequence<I>
    where
        I: SequenceIterator,
    {
        Streamifier::new(false).unknown_size().streamify(iter)
    }
}

impl Default for Streamifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<StreamifierConfig> for Streamifier {
    fn from(config: StreamifierConfig) -> Self {
        Self::from_config(&config)
    }
}
