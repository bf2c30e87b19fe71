//! Invariant tests for the sentence annotation graph.
//!
//! These verify properties that must hold for every well-formed graph,
//! regardless of how it was assembled: positional indices, one-time links,
//! and the ordering guarantee of terminal gathering.

use proptest::prelude::*;
use sejong::{
    CoreferenceGroup, DepEdge, Entity, EntityTag, Error, Morpheme, PhraseTag, PosTag, RoleEdge,
    RoleTag, Sentence, SyntaxTree, Word,
};
use std::rc::Rc;

fn word(surface: &str, morphemes: &[(&str, PosTag)]) -> Rc<Word> {
    Word::new(
        surface,
        morphemes
            .iter()
            .map(|(s, t)| Morpheme::new(*s, *t).unwrap())
            .collect(),
    )
    .unwrap()
}

fn simple_word(surface: &str) -> Rc<Word> {
    word(surface, &[(surface, PosTag::Nng)])
}

// =============================================================================
// Positional indices
// =============================================================================

mod positions {
    use super::*;

    #[test]
    fn morpheme_ids_match_position_in_word() {
        let w = word(
            "잡았다",
            &[("잡", PosTag::Vv), ("았", PosTag::Ep), ("다", PosTag::Ef)],
        );
        for (i, m) in w.iter().enumerate() {
            assert_eq!(m.id(), Some(i));
            assert!(Rc::ptr_eq(&m.word().unwrap(), &w));
        }
    }

    #[test]
    fn word_ids_match_position_in_sentence() {
        let s = Sentence::new(vec![
            simple_word("경찰은"),
            simple_word("도둑을"),
            simple_word("잡았다"),
        ])
        .unwrap();
        for (i, w) in s.iter().enumerate() {
            assert_eq!(w.id(), Some(i));
        }
    }
}

// =============================================================================
// One-time links
// =============================================================================

mod one_time_links {
    use super::*;

    #[test]
    fn second_phrase_assignment_fails() {
        let w = simple_word("서울");
        let first = SyntaxTree::new(PhraseTag::Np, Some(Rc::clone(&w)), vec![], None).unwrap();

        let second = SyntaxTree::new(PhraseTag::Vp, Some(Rc::clone(&w)), vec![], None);
        assert!(matches!(second, Err(Error::AlreadyLinked { .. })));

        // The first link is untouched by the failed attempt.
        assert!(Rc::ptr_eq(&w.phrase().unwrap(), &first));
    }

    #[test]
    fn second_coref_group_fails() {
        let w = simple_word("철수");
        let entity = Entity::new(
            "철수",
            EntityTag::Person,
            "PS_NAME",
            vec![Rc::clone(&w.morphemes()[0])],
            None,
        )
        .unwrap();

        let group = CoreferenceGroup::new(vec![Rc::clone(&entity)]).unwrap();
        assert!(Rc::ptr_eq(&entity.coref_group().unwrap(), &group));

        assert!(matches!(
            CoreferenceGroup::new(vec![entity]),
            Err(Error::AlreadyLinked { .. })
        ));
    }

    #[test]
    fn word_cannot_join_two_sentences() {
        let shared = simple_word("경찰은");
        let _s1 = Sentence::new(vec![Rc::clone(&shared)]).unwrap();
        assert!(matches!(
            Sentence::new(vec![shared]),
            Err(Error::AlreadyLinked { .. })
        ));
    }
}

// =============================================================================
// Edge registration
// =============================================================================

mod edge_registration {
    use super::*;

    #[test]
    fn edges_visible_from_both_endpoints() {
        let s = Sentence::new(vec![
            simple_word("경찰은"),
            simple_word("도둑을"),
            word("잡았다", &[("잡", PosTag::Vv), ("다", PosTag::Ef)]),
        ])
        .unwrap();

        let root = DepEdge::new(None, Rc::clone(&s[2]), PhraseTag::Vp, None, None);
        let obj = DepEdge::new(
            Some(Rc::clone(&s[2])),
            Rc::clone(&s[1]),
            PhraseTag::Np,
            None,
            None,
        );
        let role = RoleEdge::new(
            Rc::clone(&s[2]),
            Rc::clone(&s[1]),
            RoleTag::Arg1,
            vec![Rc::clone(&s[0])],
            None,
        );
        s.set_dependencies(vec![Rc::clone(&root), Rc::clone(&obj)])
            .unwrap();
        s.set_roles(vec![Rc::clone(&role)]).unwrap();

        assert!(Rc::ptr_eq(&s[2].governor_edge().unwrap(), &root));
        assert!(Rc::ptr_eq(&s[1].governor_edge().unwrap(), &obj));
        assert_eq!(s[2].dependent_edges().len(), 1);
        assert_eq!(s[2].argument_roles().len(), 1);
        assert_eq!(s[1].predicate_roles().len(), 1);
        assert_eq!(role.modifiers().len(), 1);
    }
}

// =============================================================================
// Terminal gathering
// =============================================================================

mod terminal_ordering {
    use super::*;

    fn build_sentence(n: usize) -> (Sentence, Vec<Rc<Word>>) {
        let words: Vec<Rc<Word>> = (0..n).map(|i| simple_word(&format!("어절{i}"))).collect();
        let sentence = Sentence::new(words.clone()).unwrap();
        (sentence, words)
    }

    #[test]
    fn terminals_sorted_in_nested_tree() {
        let (_s, words) = build_sentence(4);

        // Assemble the tree with sentence order scrambled at every level.
        let leaf = |w: &Rc<Word>| {
            SyntaxTree::new(PhraseTag::Np, Some(Rc::clone(w)), vec![], None).unwrap()
        };
        let inner = SyntaxTree::new(
            PhraseTag::Vp,
            None,
            vec![leaf(&words[3]), leaf(&words[1])],
            None,
        )
        .unwrap();
        let root = SyntaxTree::new(
            PhraseTag::S,
            None,
            vec![inner, leaf(&words[2]), leaf(&words[0])],
            None,
        )
        .unwrap();

        let ids: Vec<_> = root.terminals().iter().map(|w| w.id().unwrap()).collect();
        assert_eq!(ids, [0, 1, 2, 3]);
    }

    proptest! {
        /// Terminals come back sorted no matter the shape or child order of
        /// the tree they were gathered from.
        #[test]
        fn terminals_always_sorted(
            order in (2usize..7).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        ) {
            let (_s, words) = build_sentence(order.len());

            // A right-leaning comb over the shuffled word order.
            let mut node =
                SyntaxTree::new(PhraseTag::Np, Some(Rc::clone(&words[order[0]])), vec![], None)
                    .unwrap();
            for &i in &order[1..] {
                node = SyntaxTree::new(
                    PhraseTag::Vp,
                    Some(Rc::clone(&words[i])),
                    vec![node],
                    None,
                )
                .unwrap();
            }

            let ids: Vec<_> = node.terminals().iter().map(|w| w.id().unwrap()).collect();
            let sorted: Vec<_> = (0..order.len()).collect();
            prop_assert_eq!(ids, sorted);
        }
    }
}
