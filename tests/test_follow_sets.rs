mod support;

use cfg_inspect::{FollowSets, PredictSets, PredictSetsExt, Symbol};

use support::{assert_set, grammar, nt};

#[test]
fn test_simple_follow_sets() {
    let grammar = grammar("S->aA\nA->b|ε");
    let follow = grammar.follow_sets();

    assert_set(&follow.follow_of(nt('S')), "$");
    assert_set(&follow.follow_of(nt('A')), "$");
}

#[test]
fn test_expression_grammar() {
    let grammar = grammar("E->TX\nX->+TX|ε\nT->FY\nY->*FY|ε\nF->(E)|i");
    let follow = grammar.follow_sets();

    assert_set(&follow.follow_of(nt('E')), ")$");
    assert_set(&follow.follow_of(nt('X')), ")$");
    assert_set(&follow.follow_of(nt('T')), "+)$");
    assert_set(&follow.follow_of(nt('Y')), "+)$");
    assert_set(&follow.follow_of(nt('F')), "*+)$");
}

#[test]
fn test_nullable_suffix_propagates() {
    // B is followed by C, which may vanish, so FOLLOW(S) flows into FOLLOW(B).
    let grammar = grammar("S->aBC\nB->b\nC->c|ε");
    let follow = grammar.follow_sets();

    assert_set(&follow.follow_of(nt('B')), "c$");
    assert_set(&follow.follow_of(nt('C')), "$");
}

#[test]
fn test_end_marker_follows_start() {
    let grammar = grammar("S->SaS|b");
    let follow = grammar.follow_sets();

    assert_set(&follow.follow_of(nt('S')), "a$");
}

#[test]
fn test_follow_of_unknown_symbol() {
    let grammar = grammar("S->a");
    let follow = grammar.follow_sets();

    assert!(follow.follow_of(nt('Q')).is_empty());
    assert!(follow.follow_of(Symbol::Terminal('a')).is_empty());
    assert!(follow.get(Symbol::Epsilon).is_none());
}

#[test]
fn test_follow_sets_are_idempotent() {
    let grammar = grammar("S->AB\nA->a|ε\nB->Ab|ε");
    let first = grammar.first_sets();

    let follow = FollowSets::new(&grammar, &first);
    assert_eq!(follow, grammar.follow_sets_with_first(&first));
    for set in follow.predict_sets().values() {
        assert!(!set.has_epsilon());
    }
}
