mod support;

use cfg_inspect::{detect_ambiguity, find_conflict, Analysis, PredictSetsExt, Symbol};
use test_case::test_case;

use support::{grammar, nt, t};

#[test_case("S->aA|aB" => true ; "shared leading terminal")]
#[test_case("S->aA|bB" => false ; "distinct leading terminals")]
#[test_case("S->Sa|b" => true ; "left recursion")]
#[test_case("S->A|B\nA->ε\nB->ε" => true ; "two nullable alternatives")]
#[test_case("S->A|b\nA->a|ε" => false ; "one nullable alternative")]
#[test_case("S->Ab|b\nA->a|ε" => true ; "shared through nullable prefix")]
#[test_case("S->aS|b" => false ; "right recursion")]
fn test_detect_ambiguity(text: &str) -> bool {
    let grammar = grammar(text);
    let first = grammar.first_sets();
    detect_ambiguity(&grammar, &first)
}

#[test]
fn test_conflict_names_the_rules() {
    let grammar = grammar("S->c|aA|aB\nA->x\nB->y");
    let first = grammar.first_sets();

    let conflict = find_conflict(&grammar, &first).expect("expected a conflict");
    assert_eq!(conflict.lhs, nt('S'));
    assert_eq!((conflict.first_rule, conflict.second_rule), (1, 2));
    assert_eq!(conflict.shared, vec![t('a')]);
    let rule = grammar.rule(conflict.second_rule).unwrap();
    assert_eq!(rule.to_string(), "S -> aB");
}

#[test]
fn test_conflict_on_nullable_alternatives() {
    let grammar = grammar("S->A|B\nA->ε\nB->ε");
    let first = grammar.first_sets();

    let conflict = find_conflict(&grammar, &first).expect("expected a conflict");
    assert_eq!(conflict.shared, vec![Symbol::Epsilon]);
}

#[test]
fn test_alternatives_of_different_nonterminals_do_not_conflict() {
    let analysis = Analysis::new(grammar("S->aA\nA->a"));

    assert!(!analysis.is_ambiguous());
    assert_eq!(analysis.conflict(), None);
}

#[test]
fn test_left_recursion_terminates() {
    let analysis = Analysis::new(grammar("S->Sa|b"));

    assert!(analysis.is_ambiguous());
    assert_eq!(
        analysis.first_of(nt('S')).iter().collect::<Vec<_>>(),
        vec![t('b')]
    );
}
