//! Iterator adapters behind the combinators.
//!
//! Each adapter exclusively owns the iterator(s) it wraps and keeps the
//! minimal state its algorithm needs. All of them are fused: once they
//! report the end, they keep reporting it.

pub mod skip_while;
pub mod take_while;
pub mod unfold;
pub mod zip;

pub use skip_while::SkipWhileIterator;
pub use take_while::TakeWhileIterator;
pub use unfold::UnfoldIterator;
pub use zip::ZippingIterator;

use crate::error::{SequenceError, SequenceResult};

/// An adapter that can be pulled strictly.
///
/// `Iterator::next` reports the end with `None`; `pull` treats a pull past
/// the end as a programmer error and names the adapter that detected it.
pub trait SequenceIterator: Iterator {
    /// Name reported in [`SequenceError::Exhausted`].
    const NAME: &'static str;

    fn pull(&mut self) -> SequenceResult<Self::Item> {
        self.next().ok_or_else(|| {
            log::warn!("Pull past the end of {}", Self::NAME);
            SequenceError::exhausted(Self::NAME)
        })
    }
}
