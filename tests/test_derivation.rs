mod support;

use cfg_inspect::{can_derive, Analysis, Derivation, DerivationSearch, SearchLimits};
use test_case::test_case;

use support::grammar;

#[test_case("S->aS|b", "aab" => Derivation::Derived ; "right recursion")]
#[test_case("S->aS|b", "b" => Derivation::Derived ; "single step")]
#[test_case("S->aS|b", "aa" => Derivation::Exhausted ; "missing suffix")]
#[test_case("S->aS|b", "c" => Derivation::Rejected ; "unknown terminal")]
#[test_case("S->aS|b", "aSb" => Derivation::Rejected ; "nonterminal in target")]
#[test_case("S->aS|b", "" => Derivation::Exhausted ; "empty target")]
#[test_case("S->Sa|b", "baa" => Derivation::Derived ; "left recursion")]
#[test_case("S->Sa|b", "bb" => Derivation::Exhausted ; "left recursion mismatch")]
#[test_case("S->aSb|ε", "aabb" => Derivation::Derived ; "balanced")]
#[test_case("S->aSb|ε", "" => Derivation::Derived ; "empty string")]
#[test_case("S->aSb|ε", "abab" => Derivation::Exhausted ; "unbalanced")]
#[test_case("S->AB\nA->a|ε\nB->b", "b" => Derivation::Derived ; "vanishing prefix")]
fn test_search(text: &str, target: &str) -> Derivation {
    let grammar = grammar(text);
    DerivationSearch::new(&grammar, &SearchLimits::default()).search(target)
}

#[test]
fn test_rejected_target_expands_nothing() {
    let analysis = Analysis::new(grammar("S->aS|b"));

    for target in ["c", "ε", "$", "S", "aX"] {
        let (outcome, stats) = analysis.derivation(target);
        assert_eq!(outcome, Derivation::Rejected, "target {:?}", target);
        assert_eq!(stats.expansions, 0);
        assert!(!analysis.derivable(target));
    }
}

#[test]
fn test_can_derive() {
    let grammar = grammar("S->aS|b");
    let limits = SearchLimits::default();

    assert!(can_derive(&grammar, "aab", &limits));
    assert!(!can_derive(&grammar, "c", &limits));
    assert!(!can_derive(&grammar, "ba", &limits));
}

#[test]
fn test_expansion_limit() {
    let grammar = grammar("S->aS|b");
    let limits = SearchLimits {
        max_expansions: 2,
        ..SearchLimits::default()
    };
    let mut search = DerivationSearch::new(&grammar, &limits);

    assert_eq!(search.search("aaab"), Derivation::BoundReached);
    assert_eq!(search.stats().expansions, 2);
}

#[test]
fn test_queue_limit() {
    let grammar = grammar("S->aS|b");
    let limits = SearchLimits {
        max_queue: 1,
        ..SearchLimits::default()
    };
    let mut search = DerivationSearch::new(&grammar, &limits);

    assert_eq!(search.search("aab"), Derivation::BoundReached);
    assert!(search.stats().dropped > 0);
    assert!(search.stats().peak_queue_len <= 1);
}

#[test]
fn test_overlong_successors_do_not_take_queue_slots() {
    let grammar = grammar("S->bbbb|a");
    let limits = SearchLimits {
        max_queue: 1,
        ..SearchLimits::default()
    };
    let mut search = DerivationSearch::new(&grammar, &limits);

    assert_eq!(search.search("a"), Derivation::Derived);
    assert_eq!(search.stats().dropped, 0);
    assert_eq!(search.stats().pruned, 1);
}

#[test]
fn test_length_slack() {
    // The only derivation passes through `AAa`, which is longer than the
    // tight slack allows.
    let grammar = grammar("S->AAa\nA->ε");
    let tight = SearchLimits {
        length_slack_factor: 0,
        length_slack_offset: 1,
        ..SearchLimits::default()
    };
    let mut search = DerivationSearch::new(&grammar, &tight);

    assert_eq!(search.search("a"), Derivation::BoundReached);
    assert_eq!(search.stats().slack_pruned, 1);
    assert!(can_derive(&grammar, "a", &SearchLimits::default()));
}

#[test]
fn test_stats_reset_between_searches() {
    let grammar = grammar("S->aS|b");
    let mut search = DerivationSearch::new(&grammar, &SearchLimits::default());

    search.search("aaab");
    let first = search.stats();
    search.search("aaab");
    assert_eq!(search.stats(), first);
    assert!(first.expansions > 0);
}

#[test]
fn test_unbounded_recursion_terminates() {
    let grammar = grammar("S->SS|a|ε");
    let analysis = Analysis::new(grammar);

    let (outcome, stats) = analysis.derivation("b");
    assert_eq!(outcome, Derivation::Rejected);
    assert_eq!(stats.expansions, 0);

    let (outcome, stats) = analysis.derivation("aaaa");
    assert_eq!(outcome, Derivation::Derived);
    assert!(stats.expansions <= analysis.search_limits().max_expansions);
}
