mod support;

use cfg_inspect::{FirstSets, PredictSets, PredictSetsExt, Symbol};

use support::{assert_set, grammar, nt, t};

#[test]
fn test_simple_first_sets() {
    let grammar = grammar("S->aA\nA->b|ε");
    let first = grammar.first_sets();

    assert_set(&first.first_of(nt('S')), "a");
    assert_set(&first.first_of(nt('A')), "bε");
    assert_eq!(first.predict_sets().len(), 2);
}

#[test]
fn test_nullable_prefix() {
    // S can begin with whatever A or B begins with, and with c.
    let grammar = grammar("S->ABc\nA->a|ε\nB->b|ε");
    let first = grammar.first_sets();

    assert_set(&first.first_of(nt('S')), "abc");
    assert_set(&first.first_of(nt('A')), "aε");
    assert_set(&first.first_of(nt('B')), "bε");
}

#[test]
fn test_nullable_chain() {
    let grammar = grammar("S->AB\nA->ε\nB->A");
    let first = grammar.first_sets();

    assert_set(&first.first_of(nt('S')), "ε");
    assert_set(&first.first_of(nt('B')), "ε");
}

#[test]
fn test_left_recursion() {
    let grammar = grammar("S->Sa|b");
    let first = grammar.first_sets();

    assert_set(&first.first_of(nt('S')), "b");
}

#[test]
fn test_mutual_recursion_converges() {
    let grammar = grammar("S->Ab\nA->Sc|d|ε");
    let first = grammar.first_sets();

    assert_set(&first.first_of(nt('A')), "bdε");
    assert_set(&first.first_of(nt('S')), "bd");
    assert!(first.passes() >= 2);
}

#[test]
fn test_first_of_other_symbols() {
    let grammar = grammar("S->a");
    let first = grammar.first_sets();

    assert_set(&first.first_of(t('a')), "a");
    assert_set(&first.first_of(t('z')), "z");
    assert_set(&first.first_of(Symbol::Epsilon), "ε");
    assert!(first.first_of(Symbol::EndMarker).is_empty());
    assert!(first.first_of(nt('Z')).is_empty());
    assert!(first.get(t('a')).is_none());
}

#[test]
fn test_first_set_for_string() {
    let grammar = grammar("S->AB\nA->a|ε\nB->b|ε");
    let first = grammar.first_sets();

    assert_set(&first.first_set_for_string(&[nt('A'), nt('B')]), "abε");
    assert_set(&first.first_set_for_string(&[nt('A'), t('c')]), "ac");
    assert_set(&first.first_set_for_string(&[]), "ε");
}

#[test]
fn test_terminals_outside_the_grammar() {
    let grammar = grammar("S->a");
    let first = grammar.first_sets();

    let set = first.first_set_for_string(&[t('z'), t('a')]);
    assert_set(&set, "z");
    assert!(set.contains(t('z')));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_unknown_nonterminals_are_skipped() {
    let grammar = grammar("S->Aa\nA->ε");
    let first = grammar.first_sets();

    assert_set(&first.first_set_for_string(&[nt('Q'), t('a')]), "a");
    assert_set(&first.first_set_for_string(&[nt('S'), nt('Q')]), "a");
    assert_set(&first.first_set_for_string(&[nt('A'), nt('Q')]), "ε");
    assert_set(&first.first_set_for_string(&[nt('Q')]), "ε");
}

#[test]
fn test_first_sets_are_idempotent() {
    let grammar = grammar("E->TX\nX->+TX|ε\nT->FY\nY->*FY|ε\nF->(E)|i");

    let first = FirstSets::new(&grammar);
    assert_eq!(first, FirstSets::new(&grammar));
    assert_set(&first.first_of(nt('E')), "(i");
    assert_set(&first.first_of(nt('X')), "+ε");
    assert_set(&first.first_of(nt('Y')), "*ε");
}
