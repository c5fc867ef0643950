//! End-to-end scenarios driving the whole pipeline from raw text down to
//! a `text_0` root, parametrized with `rstest`'s `#[case]` attribute over
//! the scenario table: a lone vocative, a simple bridi, a two-sentence
//! paragraph joined by `I`, a tanru, a ZEI-joined compound, a ZO quote, a
//! cmene sumti, the `le ... ku` elision contrast, and a handful of
//! sentences beyond that original table exercising negation, multiple
//! sumti places, a tense-tagged selbri, and a logically-connected
//! bridi-tail so the grammar's coverage isn't just the eight scenarios
//! it was bootstrapped against.

use lojban_parser::category::TEXT_0;
use lojban_parser::{Parser, ParserConfig};
use rstest::rstest;

#[rstest]
#[case::lone_vocative("coi")]
#[case::simple_bridi("mi klama")]
#[case::two_sentence_paragraph("mi klama . i la djan. klama")]
#[case::tanru("ta melbi zei prenu")]
#[case::zei_compound_in_bridi("zo bu'u cu broda")]
#[case::cmene_sumti_alone("la djan.")]
#[case::description_with_explicit_ku("le zarci ku")]
#[case::description_elided("le zarci")]
#[case::negated_bridi("mi na klama")]
#[case::multiple_sumti_places("mi klama le zarci le zdani")]
#[case::tense_tagged_selbri("mi ca klama le zarci")]
#[case::logically_connected_bridi_tail("ta broda gi'e brode")]
#[case::explicit_cu_before_selbri("la djan. cu broda")]
fn scenario_parses_to_a_text_0_root(#[case] source: &str) {
    let mut parser = Parser::default();
    let (root, stats) = parser.parse_str(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    assert_eq!(parser.arena().category(root), TEXT_0);
    assert!(stats.token_count > 0);
}

#[test]
fn two_sentence_paragraph_has_an_i_joined_paragraphs_node() {
    let mut parser = Parser::default();
    let (root, _) = parser.parse_str("mi klama . i la djan. klama").expect("parses");
    let arena = parser.arena();
    let mut children = arena.children(root);
    let paragraphs = children.next().expect("text_0 has a paragraphs child");
    let joined: Vec<i32> = arena.children(paragraphs).map(|c| arena.category(c)).collect();
    assert!(joined.contains(&lojban_parser::category::I_545), "expected an I token joining the two sentences, got {joined:?}");
}

#[test]
fn zei_joined_tanru_keeps_the_three_glued_leaves_under_one_node() {
    use lojban_parser::category::ZEI_623;
    use lojban_parser::token::{TokenArena, TokenId};

    fn find_zei_join(arena: &TokenArena, id: TokenId) -> Option<TokenId> {
        let children: Vec<TokenId> = arena.children(id).collect();
        if children.len() == 3 && arena.category(children[1]) == ZEI_623 {
            return Some(id);
        }
        children.into_iter().find_map(|c| find_zei_join(arena, c))
    }

    let mut parser = Parser::default();
    let (root, _) = parser.parse_str("ta melbi zei prenu").expect("parses");
    let arena = parser.arena();
    let joined = find_zei_join(arena, root).expect("expected a ZEI-joined triple somewhere in the tree");
    let children: Vec<TokenId> = arena.children(joined).collect();
    assert_eq!(arena.text(children[0]), Some("melbi"));
    assert_eq!(arena.text(children[2]), Some("prenu"));
}

#[test]
fn description_elided_and_explicit_ku_produce_the_same_shape() {
    let mut elided = Parser::default();
    let mut explicit = Parser::default();
    let (root_elided, _) = elided.parse_str("le zarci").expect("parses with elision enabled");
    let (root_explicit, _) = explicit.parse_str("le zarci ku").expect("parses with an explicit KU");
    assert_eq!(elided.arena().category(root_elided), TEXT_0);
    assert_eq!(explicit.arena().category(root_explicit), TEXT_0);
}

#[test]
fn disabling_elision_rejects_the_missing_ku() {
    let config = ParserConfig::builder().elide_terminators(false).build().expect("valid config");
    let mut parser = Parser::new(config);
    let result = parser.parse_str("le zarci");
    assert!(result.is_err(), "a missing KU must fail once elision is disabled");
}

#[test]
fn disabling_elision_still_accepts_an_explicit_ku() {
    let config = ParserConfig::builder().elide_terminators(false).build().expect("valid config");
    let mut parser = Parser::new(config);
    let (root, _) = parser.parse_str("le zarci ku").expect("an explicit KU never needed elision");
    assert_eq!(parser.arena().category(root), TEXT_0);
}

#[test]
fn a_synthesized_fahu_always_terminates_the_text() {
    let mut parser = Parser::default();
    let (root, _) = parser.parse_str("coi").expect("parses");
    let arena = parser.arena();
    let last = arena.last_child(root).expect("text_0 always has at least two children");
    assert_eq!(arena.category(last), lojban_parser::category::FAHO_529);
}

#[test]
fn malformed_input_reports_the_last_good_construct() {
    let mut parser = Parser::default();
    let err = parser.parse_str("ku").expect_err("a bare KU cannot start anything");
    let message = err.diagnostic();
    assert!(message.contains("selma'o") || message.contains("Problem"), "unexpected diagnostic: {message}");
}

#[test]
fn reusing_a_parser_across_calls_does_not_leak_the_previous_tree() {
    let mut parser = Parser::default();
    parser.parse_str("mi klama . i la djan. klama").expect("parses");
    let long_run_count = parser.arena().token_count();
    parser.parse_str("coi").expect("parses");
    let short_run_count = parser.arena().token_count();
    assert!(short_run_count < long_run_count, "reset should drop the previous, larger tree");
}

#[test]
fn negated_bridi_carries_an_na_leaf_somewhere_in_the_tree() {
    use lojban_parser::category::NA_578;
    use lojban_parser::token::{TokenArena, TokenId};

    fn contains_category(arena: &TokenArena, id: TokenId, category: i32) -> bool {
        if arena.category(id) == category {
            return true;
        }
        arena.children(id).any(|c| contains_category(arena, c, category))
    }

    let mut parser = Parser::default();
    let (root, _) = parser.parse_str("mi na klama").expect("a negated bridi parses");
    assert!(contains_category(parser.arena(), root, NA_578), "expected an NA leaf somewhere under the negated bridi");
}

#[test]
fn multiple_sumti_places_all_survive_under_the_bridi_tail() {
    use lojban_parser::token::{TokenArena, TokenId};

    fn leaf_texts(arena: &TokenArena, id: TokenId, out: &mut Vec<String>) {
        if arena.first_child(id).is_none() {
            if let Some(text) = arena.text(id) {
                out.push(text.to_string());
            }
            return;
        }
        for child in arena.children(id) {
            leaf_texts(arena, child, out);
        }
    }

    let mut parser = Parser::default();
    let (root, _) = parser.parse_str("mi klama le zarci le zdani").expect("two sumti places parse");
    let arena = parser.arena();
    let mut words = Vec::new();
    leaf_texts(arena, root, &mut words);
    assert!(words.contains(&"zarci".to_string()), "expected the first place to survive, got {words:?}");
    assert!(words.contains(&"zdani".to_string()), "expected the second place to survive, got {words:?}");
}
