use std::iter::FusedIterator;

use super::SequenceIterator;

/// Discards elements while the predicate holds, then forwards the rest.
///
/// The first element that fails the predicate is emitted and ends the
/// skipping phase permanently; every later element is forwarded
/// unconditionally, even one that would match the predicate again.
pub struct SkipWhileIterator<I, P> {
    source: I,
    condition: P,
    skipping: bool,
    exhausted: bool,
}

impl<I, P> SkipWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn over(source: I, condition: P) -> Self {
        Self {
            source,
            condition,
            skipping: true,
            exhausted: false,
        }
    }
}

impl<I, P> Iterator for SkipWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let next = if self.skipping {
            let condition = &mut self.condition;
            let found = self.source.find(|item| !condition(item));
            self.skipping = false;
            found
        } else {
            self.source.next()
        };
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        if self.skipping {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I, P> FusedIterator for SkipWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

impl<I, P> SequenceIterator for SkipWhileIterator<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    const NAME: &'static str = "SkipWhileIterator";
}
