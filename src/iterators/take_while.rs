use std::iter::FusedIterator;

use super::SequenceIterator;

/// Forwards elements while the predicate holds.
///
/// The first element that fails the predicate is discarded, not pushed back,
/// and latches the iterator closed: later elements are never looked at, even
/// if they would satisfy the predicate again.
pub struct TakeWhileIterator<I, P> {
    source: I,
    condition: P,
    exhausted: bool,
}

impl<I, P> TakeWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn over(source: I, condition: P) -> Self {
        Self {
            source,
            condition,
            exhausted: false,
        }
    }
}

impl<I, P> Iterator for TakeWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.source.next() {
            Some(item) if (self.condition)(&item) => Some(item),
            _ => {
                self.exhausted = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> SequenceIterator for TakeWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    const NAME: &'static str = "TakeWhileIterator";
}
