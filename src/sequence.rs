//! The lazy sequence object every combinator returns.

use std::iter::{Chain, FusedIterator};
use std::option;

use crate::error::{SequenceError, SequenceResult};
use crate::metadata::SequenceMetadata;

/// A single-pass lazy sequence: an owned iterator plus what is known about
/// it up front and whether it may be evaluated in parallel.
///
/// `Sequence` is both the input and the output of the combinators in
/// [`crate::stream_utils`]. Traversal consumes it; once it reports the end it
/// keeps reporting the end.
///
/// The parallel flag is only a hint for whatever executes the sequence. The
/// sequence itself is pulled from one place at a time.
pub struct Sequence<I: Iterator> {
    iter: I,
    peeked: Option<I::Item>,
    metadata: SequenceMetadata,
    parallel: bool,
    exhausted: bool,
    source: &'static str,
}

impl<I: Iterator> Sequence<I> {
    /// Wrap any iterable. The size is known when the iterator's `size_hint`
    /// is exact; the sequence is marked ordered and sequential.
    pub fn of<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let iter = items.into_iter();
        let metadata = SequenceMetadata::from_size_hint(iter.size_hint());
        Self::from_parts(iter, metadata, false, "Sequence")
    }

    pub(crate) fn from_parts(
        iter: I,
        metadata: SequenceMetadata,
        parallel: bool,
        source: &'static str,
    ) -> Self {
        Self {
            iter,
            peeked: None,
            metadata,
            parallel,
            exhausted: false,
            source,
        }
    }

    /// Replace the descriptor. The caller vouches for what it claims.
    pub fn with_metadata(mut self, metadata: SequenceMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Flag the sequence as eligible for parallel evaluation.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Current descriptor. A known size counts the elements not yet pulled.
    pub fn metadata(&self) -> SequenceMetadata {
        self.metadata
    }

    /// Exact number of remaining elements, if known.
    pub fn exact_size(&self) -> Option<usize> {
        self.metadata.size
    }

    /// Name of the adapter this sequence was built from.
    pub fn source_name(&self) -> &'static str {
        self.source
    }

    /// Look at the next element without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        if self.peeked.is_none() && !self.exhausted {
            match self.iter.next() {
                Some(item) => self.peeked = Some(item),
                None => self.mark_exhausted(),
            }
        }
        self.peeked.as_ref()
    }

    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Strict pull: fails with [`SequenceError::Exhausted`] instead of
    /// returning `None` when no element is left.
    pub fn try_next(&mut self) -> SequenceResult<I::Item> {
        match self.next() {
            Some(item) => Ok(item),
            None => {
                log::warn!("Pull past the end of {}", self.source);
                Err(SequenceError::exhausted(self.source))
            }
        }
    }

    /// Hand the sequence to async code as a `futures` stream.
    pub fn into_stream(self) -> futures::stream::Iter<Self> {
        futures::stream::iter(self)
    }

    /// Unwrap the underlying iterator. An element already buffered by
    /// [`Sequence::peek`] or [`Sequence::has_next`] comes first.
    pub fn into_inner(self) -> Chain<option::IntoIter<I::Item>, I> {
        self.peeked.into_iter().chain(self.iter)
    }

    fn mark_exhausted(&mut self) {
        self.exhausted = true;
        if self.metadata.size.is_some() {
            self.metadata.size = Some(0);
        }
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.peeked.take() {
            Some(item) => Some(item),
            None if self.exhausted => None,
            None => self.iter.next(),
        };
        match item {
            Some(_) => {
                if let Some(size) = self.metadata.size.as_mut() {
                    *size = size.saturating_sub(1);
                }
            }
            None => self.mark_exhausted(),
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        if let Some(size) = self.metadata.size {
            return (size, Some(size));
        }
        let (lower, upper) = self.iter.size_hint();
        let buffered = usize::from(self.peeked.is_some());
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Sequence<I> {}
