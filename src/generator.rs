//! Generators for unfold: turn a "produce next value" function and a
//! continuation predicate into a single next-or-stop function.
//!
//! Every unfold shape ends up as `FnMut(&T) -> Option<T>`: given the value
//! just emitted, return the next one or `None` to stop.

/// Next value from a zero-argument supplier, kept only while `condition`
/// holds. The current value is ignored.
pub fn supplied<T, S, P>(mut supplier: S, mut condition: P) -> impl FnMut(&T) -> Option<T>
where
    S: FnMut() -> Option<T>,
    P: FnMut(&T) -> bool,
{
    move |_current: &T| supplier().filter(|next| condition(next))
}

/// Next value is `transform(current)`, kept only while `condition` holds.
pub fn iterated<T, F, P>(mut transform: F, mut condition: P) -> impl FnMut(&T) -> Option<T>
where
    F: FnMut(&T) -> T,
    P: FnMut(&T) -> bool,
{
    move |current: &T| {
        let next = transform(current);
        if condition(&next) {
            Some(next)
        } else {
            None
        }
    }
}
