use std::iter::FusedIterator;

use super::SequenceIterator;

/// Pulls one element from each source per step and combines them.
///
/// The shorter source governs: as soon as either side is exhausted the
/// zipped sequence ends, and whatever remains of the longer side is left
/// unconsumed.
pub struct ZippingIterator<L, R, F> {
    lefts: L,
    rights: R,
    combiner: F,
    done: bool,
}

impl<L, R, F> ZippingIterator<L, R, F>
where
    L: Iterator,
    R: Iterator,
{
    pub fn over<O>(lefts: L, rights: R, combiner: F) -> Self
    where
        F: FnMut(L::Item, R::Item) -> O,
    {
        Self {
            lefts,
            rights,
            combiner,
            done: false,
        }
    }
}

impl<L, R, O, F> Iterator for ZippingIterator<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> O,
{
    type Item = O;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // Left first, then right.
        let pair = match self.lefts.next() {
            Some(left) => self.rights.next().map(|right| (left, right)),
            None => None,
        };
        match pair {
            Some((left, right)) => Some((self.combiner)(left, right)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (left_lower, left_upper) = self.lefts.size_hint();
        let (right_lower, right_upper) = self.rights.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(l), None) => Some(l),
            (None, Some(r)) => Some(r),
            (None, None) => None,
        };
        (left_lower.min(right_lower), upper)
    }
}

impl<L, R, O, F> FusedIterator for ZippingIterator<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> O,
{
}

impl<L, R, O, F> SequenceIterator for ZippingIterator<L, R, F>
where
    L: Iterator,
    R: Iterator,
    F: FnMut(L::Item, R::Item) -> O,
{
    const NAME: &'static str = "ZippingIterator";
}
