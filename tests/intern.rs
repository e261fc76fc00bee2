//! Integration tests for weft-intern crate.

use std::sync::Barrier;
use weft_intern::{
    CharTable, DEFAULT_INTERN_THRESHOLD, Fragment, InternConfig, InternError, InternTable,
    StaticTable, str_hash_code,
};

// ============================================================================
// Facade
// ============================================================================

#[test]
fn test_intern_idempotent() {
    let table = CharTable::new();
    let text = Fragment::new("hello");
    let a = table.intern(&text);
    let b = table.intern(&Fragment::new("hello"));
    assert!(Fragment::ptr_eq(&a, &b));
    assert_eq!(a, "hello");
}

#[test]
fn test_threshold_boundary() {
    let table = CharTable::new();

    let at_limit = "a".repeat(DEFAULT_INTERN_THRESHOLD);
    let a = table.intern_str(&at_limit);
    let b = table.intern_str(&at_limit);
    assert!(Fragment::ptr_eq(&a, &b));

    let over_limit = "b".repeat(DEFAULT_INTERN_THRESHOLD + 1);
    let c = table.intern(&Fragment::new(&over_limit));
    let d = table.intern(&Fragment::new(&over_limit));
    assert_eq!(c, d);
    assert!(!Fragment::ptr_eq(&c, &d));
    assert_eq!(table.instance_len(), 1);
}

#[test]
fn test_long_range_is_fresh_copy() {
    let table = CharTable::new();
    let body = "c".repeat(50);
    let base = Fragment::new(&format!("({body})"));

    let a = table.intern_range(&base, 1..51);
    let b = table.intern_range(&base, 1..51);
    assert_eq!(a.as_str(), body);
    assert!(!Fragment::ptr_eq(&a, &b));
    assert!(!Fragment::ptr_eq(&a, &base));
    assert_eq!(table.instance_len(), 0);
}

#[test]
fn test_range_delegation() {
    let table = CharTable::new();

    let short = Fragment::new("delegate");
    let whole = table.intern_range(&short, 0..short.len());
    assert!(Fragment::ptr_eq(&whole, &table.intern(&short)));

    let long = Fragment::new(&"d".repeat(64));
    let whole = table.intern_range(&long, 0..long.len());
    assert!(Fragment::ptr_eq(&whole, &long));
}

#[test]
fn test_range_is_independent_copy() {
    let table = CharTable::new();
    let base = Fragment::new("let answer = 42;");
    let ident = table.intern_range(&base, 4..10);
    assert_eq!(ident, "answer");
    assert!(!std::ptr::eq(ident.as_ptr(), base[4..].as_ptr()));
    drop(base);
    assert_eq!(table.intern_str("answer"), "answer");
    assert!(Fragment::ptr_eq(&ident, &table.intern_str("answer")));
}

#[test]
fn test_empty_content() {
    let table = CharTable::new();
    let a = table.intern_str("");
    let b = table.intern_str("");
    let c = table.intern_str_range("abc", 1..1);
    assert!(Fragment::ptr_eq(&a, &b));
    assert!(Fragment::ptr_eq(&a, &c));
    assert!(a.is_empty());
}

// ============================================================================
// Two tiers
// ============================================================================

#[test]
fn test_static_precedence() {
    let table = CharTable::new();
    let before = table.instance_stats();

    let eq = table.intern_str("==");
    let canonical = CharTable::static_interned("==").unwrap();
    assert!(Fragment::ptr_eq(&eq, &canonical));
    assert_eq!(table.instance_stats(), before);
    assert_eq!(table.instance_len(), 0);
}

#[test]
fn test_static_whitespace_ladder() {
    let table = CharTable::new();
    let source = "{\n    return;\n}";
    let indent = table.intern_str_range(source, 1..6);
    assert_eq!(indent, "\n    ");
    assert!(Fragment::ptr_eq(
        &indent,
        &CharTable::static_interned("\n    ").unwrap()
    ));
    assert_eq!(table.instance_len(), 0);
}

#[test]
fn test_static_interned_does_not_insert() {
    assert!(CharTable::static_interned("tests::intern::absent").is_none());
    let table = CharTable::new();
    table.intern_str("tests::intern::absent");
    assert!(CharTable::static_interned("tests::intern::absent").is_none());
}

#[test]
fn test_registration_visibility() {
    CharTable::static_intern("X.Y");

    let first = CharTable::new();
    let second = CharTable::with_config(InternConfig::new().threshold(2));
    assert_eq!(CharTable::static_interned("X.Y").unwrap(), "X.Y");

    let a = first.intern_str("X.Y");
    let b = second.intern_str_range("(X.Y)", 1..4);
    assert!(Fragment::ptr_eq(&a, &CharTable::static_interned("X.Y").unwrap()));
    assert_eq!(b, "X.Y");
    assert_eq!(first.instance_len(), 0);
}

#[test]
fn test_static_intern_ignores_threshold() {
    let long = format!("java.lang.{}", "Long".repeat(12));
    assert!(long.len() > DEFAULT_INTERN_THRESHOLD);
    CharTable::static_intern(&long);
    assert_eq!(CharTable::static_interned(&long).unwrap(), long.as_str());
}

#[test]
fn test_register_all_seeds() {
    StaticTable::global().register_all(["java.lang.Object", "java.lang.String"]);
    let table = CharTable::new();
    let object = table.intern_str("java.lang.Object");
    assert!(Fragment::ptr_eq(
        &object,
        &StaticTable::global().get("java.lang.Object").unwrap()
    ));
}

// ============================================================================
// Collisions
// ============================================================================

#[test]
fn test_collision_chain() {
    let table = InternTable::new();
    let hash = str_hash_code("first");

    let first = table.get_or_insert(hash, "first", 0, 5);
    let second = table.get_or_insert(hash, "[second]", 1, 7);
    let third = table.get_or_insert(hash, "third", 0, 5);

    assert!(Fragment::ptr_eq(&table.lookup(hash, "first", 0, 5).unwrap(), &first));
    assert!(Fragment::ptr_eq(&table.lookup(hash, "second", 0, 6).unwrap(), &second));
    assert!(Fragment::ptr_eq(&table.lookup(hash, "third", 0, 5).unwrap(), &third));
    assert!(table.lookup(hash, "fourth", 0, 6).is_none());

    let stats = table.stats();
    assert_eq!(stats.buckets, 1);
    assert_eq!(stats.fragments, 3);
    assert_eq!(stats.collision_chains, 1);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_convergence() {
    const THREADS: usize = 8;
    let table = CharTable::new();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Fragment> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    table.intern_str("tests::intern::concurrent")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results[1..] {
        assert!(Fragment::ptr_eq(&results[0], result));
    }
    assert_eq!(table.instance_len(), 1);
}

#[test]
fn test_concurrent_static_registration() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);

    let results: Vec<Fragment> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    StaticTable::global().register("tests::intern::shared")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in &results[1..] {
        assert!(Fragment::ptr_eq(&results[0], result));
    }
}

// ============================================================================
// Contract violations
// ============================================================================

#[test]
#[should_panic(expected = "out of bounds")]
fn test_range_past_end_panics() {
    CharTable::new().intern_str_range("abc", 2..4);
}

#[test]
#[should_panic(expected = "greater than end")]
#[allow(clippy::reversed_empty_ranges)]
fn test_reversed_range_panics() {
    let base = Fragment::new("abc");
    CharTable::new().intern_range(&base, 2..1);
}

#[test]
fn test_try_intern_range_reports_boundary() {
    let table = CharTable::new();
    assert_eq!(
        table.try_intern_range("naïve", 0..3),
        Err(InternError::NotCharBoundary { offset: 3 })
    );
    assert_eq!(table.try_intern_range("naïve", 0..4).unwrap(), "naï");
}
