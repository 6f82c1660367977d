use std::iter::FusedIterator;

use super::SequenceIterator;

/// Emits a seed, then whatever the generator derives from each emitted value,
/// until the generator returns `None`.
///
/// The next value is computed when the current one is emitted, so exactly one
/// value is held ahead. An absent seed yields an empty sequence.
pub struct UnfoldIterator<T, G> {
    current: Option<T>,
    generator: G,
}

impl<T, G> UnfoldIterator<T, G>
where
    G: FnMut(&T) -> Option<T>,
{
    pub fn over(seed: Option<T>, generator: G) -> Self {
        Self {
            current: seed,
            generator,
        }
    }
}

impl<T, G> Iterator for UnfoldIterator<T, G>
where
    G: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current.take()?;
        self.current = (self.generator)(&value);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T, G> FusedIterator for UnfoldIterator<T, G> where G: FnMut(&T) -> Option<T> {}

impl<T, G> SequenceIterator for UnfoldIterator<T, G>
where
    G: FnMut(&T) -> Option<T>,
{
    const NAME: &'static str = "UnfoldIterator";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_comes_first() {
        let values: Vec<_> = UnfoldIterator::over(Some(3), |x: &i32| if *x > 0 { Some(x - 1) } else { None }).collect();
        assert_eq!(values, vec![3, 2, 1, 0]);
    }

    #[test]
    fn absent_seed_is_empty() {
        let mut unfold = UnfoldIterator::over(None, |x: &i32| Some(x + 1));
        assert_eq!(unfold.next(), None);
        assert_eq!(unfold.pull().unwrap_err().adapter(), "UnfoldIterator");
    }

    #[test]
    fn generator_runs_once_per_emitted_element() {
        let mut calls = 0;
        let mut unfold = UnfoldIterator::over(Some(0), |x: &i32| {
            calls += 1;
            Some(x + 1)
        });
        assert_eq!(unfold.next(), Some(0));
        assert_eq!(unfold.next(), Some(1));
        drop(unfold);
        assert_eq!(calls, 2);
    }

    #[test]
    fn never_restarts() {
        let mut unfold = UnfoldIterator::over(Some(1), |_: &i32| None);
        assert_eq!(unfold.next(), Some(1));
        assert_eq!(unfold.next(), None);
        assert_eq!(unfold.next(), None);
    }
}
