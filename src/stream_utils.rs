//! Sequence combinators: indices, zip, take/skip while/until and unfold.
//!
//! Each function works out the metadata and parallel hint of its result from
//! its input sequence(s), wraps the inputs in the matching adapter from
//! [`crate::iterators`] and hands it to a [`Streamifier`]. None of them pulls
//! an element before the returned sequence is traversed, except the
//! supplier-driven [`unfold_supplied`] which computes its seed eagerly.

use crate::generator;
use crate::iterators::{
    SequenceIterator, SkipWhileIterator, TakeWhileIterator, UnfoldIterator, ZippingIterator,
};
use crate::sequence::Sequence;
use crate::streamifier::Streamifier;
use crate::zipped_pair::ZippedPair;

// ================================
// Indexing
// ================================

/// Infinite ascending sequence `0, 1, 2, ...`.
pub fn indices() -> Sequence<impl SequenceIterator<Item = usize>> {
    unfold(0usize, |index: &usize| index.checked_add(1))
}

/// Pair every element with its position, starting at 0.
pub fn zip_with_index<I>(source: Sequence<I>) -> Sequence<impl SequenceIterator<Item = ZippedPair<usize, I::Item>>>
where
    I: Iterator,
{
    zip(indices(), source)
}

// ================================
// Zipping
// ================================

/// Pair up elements of two sequences. Ends with the shorter one.
pub fn zip<L, R>(
    lefts: Sequence<L>,
    rights: Sequence<R>,
) -> Sequence<impl SequenceIterator<Item = ZippedPair<L::Item, R::Item>>>
where
    L: Iterator,
    R: Iterator,
{
    zip_with(lefts, rights, ZippedPair::of)
}

/// Combine elements of two sequences pairwise. Ends with the shorter one.
///
/// The result is sized only if both inputs are, ordered only if both are,
/// never distinct or sorted, and parallel if either input is.
pub fn zip_with<L, R, O, F>(
    lefts: Sequence<L>,
    rights: Sequence<R>,
    combiner: F,
) -> Sequence<impl SequenceIterator<Item = O>>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> O,
{
    let metadata = lefts.metadata().merge(&rights.metadata());
    let parallel = lefts.is_parallel() || rights.is_parallel();

    Streamifier::new(parallel)
        .with_metadata(metadata)
        .streamify(ZippingIterator::over(lefts, rights, combiner))
}

// ================================
// Conditional prefixes
// ================================

/// Elements up to, not including, the first one failing `condition`.
pub fn take_while<I, P>(source: Sequence<I>, condition: P) -> Sequence<impl SequenceIterator<Item = I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let metadata = source.metadata();
    Streamifier::new(source.is_parallel())
        .with_metadata(metadata)
        .unknown_size()
        .streamify(TakeWhileIterator::over(source, condition))
}

/// Elements up to, not including, the first one satisfying `condition`.
pub fn take_until<I, P>(source: Sequence<I>, mut condition: P) -> Sequence<impl SequenceIterator<Item = I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    take_while(source, move |item: &I::Item| !condition(item))
}

/// Everything from the first element failing `condition` onwards.
pub fn skip_while<I, P>(source: Sequence<I>, condition: P) -> Sequence<impl SequenceIterator<Item = I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let metadata = source.metadata();
    Streamifier::new(source.is_parallel())
        .with_metadata(metadata)
        .unknown_size()
        .streamify(SkipWhileIterator::over(source, condition))
}

/// Everything from the first element satisfying `condition` onwards.
pub fn skip_until<I, P>(source: Sequence<I>, mut condition: P) -> Sequence<impl SequenceIterator<Item = I::Item>>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    skip_while(source, move |item: &I::Item| !condition(item))
}

// ================================
// Unfolding
// ================================

/// Values from `supplier` for as long as they are present and satisfy
/// `condition`. The supplier is called once up front for the seed; an absent
/// or rejected seed gives an empty sequence.
pub fn unfold_supplied<T, S, P>(mut supplier: S, mut condition: P) -> Sequence<impl SequenceIterator<Item = T>>
where
    S: FnMut() -> Option<T>,
    P: FnMut(&T) -> bool,
{
    let seed = supplier().filter(|seed| condition(seed));
    if seed.is_none() {
        log::debug!("unfold_supplied: seed absent or rejected, sequence is empty");
    }
    Streamifier::to_sequence(UnfoldIterator::over(seed, generator::supplied(supplier, condition)))
}

/// `seed, transform(seed), transform(transform(seed)), ...` for as long as
/// `condition` holds. An absent or rejected seed gives an empty sequence.
///
/// ```
/// use rs2_streamutils::unfold_iterate;
///
/// let powers: Vec<i32> = unfold_iterate(1, |x: &i32| x * 2, |x: &i32| *x < 100).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn unfold_iterate<T, S, F, P>(seed: S, transform: F, mut condition: P) -> Sequence<impl SequenceIterator<Item = T>>
where
    S: Into<Option<T>>,
    F: FnMut(&T) -> T,
    P: FnMut(&T) -> bool,
{
    let seed: Option<T> = seed.into();
    let seed = seed.filter(|seed| condition(seed));
    if seed.is_none() {
        log::debug!("unfold_iterate: seed absent or rejected, sequence is empty");
    }
    Streamifier::to_sequence(UnfoldIterator::over(seed, generator::iterated(transform, condition)))
}

/// The seed, then each value `generator` derives from the previous one,
/// until it returns `None`. An absent seed gives an empty sequence.
pub fn unfold<T, S, G>(seed: S, generator: G) -> Sequence<impl SequenceIterator<Item = T>>
where
    S: Into<Option<T>>,
    G: FnMut(&T) -> Option<T>,
{
    let seed: Option<T> = seed.into();
    if seed.is_none() {
        log::debug!("unfold: seed absent, sequence is empty");
    }
    Streamifier::to_sequence(UnfoldIterator::over(seed, generator))
}
