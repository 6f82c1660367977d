use rs2_streamutils::iterators::{SkipWhileIterator, TakeWhileIterator, UnfoldIterator, ZippingIterator};
use rs2_streamutils::*;

// ================================
// Strict pulls past the end
// ================================

#[test]
fn test_try_next_past_end_names_adapter() {
    let mut taken = take_while(Sequence::of(vec![1, 2, 3]), |x| *x < 2);
    assert_eq!(taken.try_next(), Ok(1));
    let err = taken.try_next().unwrap_err();
    assert_eq!(err, SequenceError::Exhausted { adapter: "TakeWhileIterator" });
    assert_eq!(err.to_string(), "TakeWhileIterator is exhausted: no element available to pull");
}

#[test]
fn test_each_combinator_reports_its_adapter() {
    assert_eq!(
        zip(Sequence::of(Vec::<u8>::new()), Sequence::of(vec![1])).try_next().unwrap_err().adapter(),
        "ZippingIterator"
    );
    assert_eq!(
        skip_while(Sequence::of(vec![1]), |_| true).try_next().unwrap_err().adapter(),
        "SkipWhileIterator"
    );
    assert_eq!(
        unfold(None::<i32>, |x: &i32| Some(*x)).try_next().unwrap_err().adapter(),
        "UnfoldIterator"
    );
}

#[test]
fn test_has_next_guards_strict_pull() {
    let mut seq = zip_with_index(Sequence::of(vec!["x", "y"]));
    let mut seen = Vec::new();
    while seq.has_next() {
        seen.push(seq.try_next().unwrap().into_tuple());
    }
    assert_eq!(seen, vec![(0, "x"), (1, "y")]);
    assert!(seq.try_next().is_err());
}

#[test]
fn test_adapter_pull_past_end() {
    let mut zip = ZippingIterator::over(0..1, 0..0, |l: i32, r: i32| l + r);
    assert_eq!(zip.pull(), Err(SequenceError::exhausted("ZippingIterator")));
}

// ================================
// No restart after exhaustion
// ================================

fn assert_stays_exhausted<I: Iterator>(mut iter: I) {
    while iter.next().is_some() {}
    for _ in 0..3 {
        assert!(iter.next().is_none());
    }
}

#[test]
fn test_adapters_never_restart() {
    // A source that would yield again after reporting the end.
    fn flaky() -> impl Iterator<Item = i32> {
        let mut calls = 0;
        std::iter::from_fn(move || {
            calls += 1;
            if calls % 3 == 0 { None } else { Some(calls) }
        })
    }

    assert_stays_exhausted(ZippingIterator::over(flaky(), flaky(), |l: i32, r: i32| l + r));
    assert_stays_exhausted(TakeWhileIterator::over(flaky(), |_: &i32| true));
    assert_stays_exhausted(SkipWhileIterator::over(flaky(), |_: &i32| false));
    assert_stays_exhausted(UnfoldIterator::over(Some(0), |x: &i32| if *x < 3 { Some(x + 1) } else { None }));
    assert_stays_exhausted(Sequence::of(flaky()));
}

#[test]
fn test_sequences_never_restart() {
    let mut seq = take_until(Sequence::of(vec![1, 2, 3]), |x| *x == 2);
    assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(seq.next(), None);
    assert!(!seq.has_next());
}

// ================================
// Caller closures fail through
// ================================

#[test]
#[should_panic(expected = "combiner failed")]
fn test_combiner_panic_propagates() {
    let _ = zip_with(Sequence::of(vec![1]), Sequence::of(vec![2]), |_: i32, _: i32| -> i32 {
        panic!("combiner failed")
    })
    .count();
}

#[test]
#[should_panic(expected = "predicate failed")]
fn test_predicate_panic_propagates() {
    let _ = skip_while(Sequence::of(vec![1]), |_| panic!("predicate failed")).count();
}

#[test]
fn test_fallible_items_flow_through() {
    let results: Vec<Result<i32, std::num::ParseIntError>> =
        vec!["1", "2", "x", "3"].into_iter().map(str::parse::<i32>).collect();
    let parsed: Result<Vec<i32>, std::num::ParseIntError> =
        take_while(Sequence::of(results), |r| r.is_ok()).collect();
    assert_eq!(parsed, Ok(vec![1, 2]));
}
