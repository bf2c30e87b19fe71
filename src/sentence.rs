//! The sentence aggregate: ordered words plus derived annotation layers.

use crate::edge::{DepEdge, RoleEdge};
use crate::entity::{CoreferenceGroup, Entity};
use crate::error::{Error, Result};
use crate::morpheme::Morpheme;
use crate::tag::PosTag;
use crate::tree::SyntaxTree;
use crate::word::Word;
use std::cell::RefCell;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

/// The full analysis of one sentence.
///
/// A sentence owns its ordered words (assigning each its position index) and
/// the derived annotation layers an analyzer produces over them: one optional
/// phrase-structure tree, dependency edges, semantic-role edges, named
/// entities, and coreference groups.
///
/// Each derived layer may be installed once, and only while it is still
/// empty; afterwards the whole graph is read-only. The layers hold the strong
/// references, so a sentence keeps its entire annotation graph alive.
///
/// # Example
///
/// ```rust
/// use sejong::{Morpheme, PosTag, Sentence, Word};
///
/// let sentence = Sentence::new(vec![
///     Word::new("하늘이", vec![
///         Morpheme::new("하늘", PosTag::Nng)?,
///         Morpheme::new("이", PosTag::Jks)?,
///     ])?,
///     Word::new("맑다", vec![
///         Morpheme::new("맑", PosTag::Va)?,
///         Morpheme::new("다", PosTag::Ef)?,
///     ])?,
/// ])?;
///
/// assert_eq!(sentence.surface_string(" "), "하늘이 맑다");
/// assert_eq!(sentence[1].id(), Some(1));
/// assert_eq!(sentence.nouns().len(), 1);
/// assert_eq!(sentence.verbs().len(), 1);
/// # Ok::<(), sejong::Error>(())
/// ```
#[derive(Debug)]
pub struct Sentence {
    words: Vec<Rc<Word>>,
    syntax_tree: RefCell<Option<Rc<SyntaxTree>>>,
    dependencies: RefCell<Vec<Rc<DepEdge>>>,
    roles: RefCell<Vec<Rc<RoleEdge>>>,
    entities: RefCell<Vec<Rc<Entity>>>,
    coref_groups: RefCell<Vec<Rc<CoreferenceGroup>>>,
}

impl Sentence {
    /// Create a sentence from its ordered words, assigning each word's
    /// position index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] on an empty word sequence, and
    /// [`Error::AlreadyLinked`] if a word already belongs to a sentence.
    pub fn new(words: Vec<Rc<Word>>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::empty_field("sentence words"));
        }
        for (i, word) in words.iter().enumerate() {
            word.assign_id(i)?;
        }
        Ok(Self {
            words,
            syntax_tree: RefCell::new(None),
            dependencies: RefCell::new(Vec::new()),
            roles: RefCell::new(Vec::new()),
            entities: RefCell::new(Vec::new()),
            coref_groups: RefCell::new(Vec::new()),
        })
    }

    /// The ordered words.
    #[must_use]
    pub fn words(&self) -> &[Rc<Word>] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A sentence always holds at least one word, so this is always false;
    /// provided for container-like symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Word>> {
        self.words.iter()
    }

    // -------------------------------------------------------------------------
    // Derived layers: each installable once, while still empty
    // -------------------------------------------------------------------------

    /// The phrase-structure tree, if installed.
    #[must_use]
    pub fn syntax_tree(&self) -> Option<Rc<SyntaxTree>> {
        self.syntax_tree.borrow().clone()
    }

    /// Install the phrase-structure tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayerFilled`] if a tree is already installed.
    pub fn set_syntax_tree(&self, tree: Rc<SyntaxTree>) -> Result<()> {
        let mut slot = self.syntax_tree.borrow_mut();
        if slot.is_some() {
            return Err(Error::LayerFilled("syntax tree"));
        }
        *slot = Some(tree);
        Ok(())
    }

    /// The dependency edges.
    #[must_use]
    pub fn dependencies(&self) -> Vec<Rc<DepEdge>> {
        self.dependencies.borrow().clone()
    }

    /// Install the dependency edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayerFilled`] if the layer is already populated.
    pub fn set_dependencies(&self, edges: Vec<Rc<DepEdge>>) -> Result<()> {
        let mut slot = self.dependencies.borrow_mut();
        if !slot.is_empty() {
            return Err(Error::LayerFilled("dependency edges"));
        }
        *slot = edges;
        Ok(())
    }

    /// The semantic-role edges.
    #[must_use]
    pub fn roles(&self) -> Vec<Rc<RoleEdge>> {
        self.roles.borrow().clone()
    }

    /// Install the semantic-role edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayerFilled`] if the layer is already populated.
    pub fn set_roles(&self, edges: Vec<Rc<RoleEdge>>) -> Result<()> {
        let mut slot = self.roles.borrow_mut();
        if !slot.is_empty() {
            return Err(Error::LayerFilled("role edges"));
        }
        *slot = edges;
        Ok(())
    }

    /// The named entities.
    #[must_use]
    pub fn entities(&self) -> Vec<Rc<Entity>> {
        self.entities.borrow().clone()
    }

    /// Install the named entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayerFilled`] if the layer is already populated.
    pub fn set_entities(&self, entities: Vec<Rc<Entity>>) -> Result<()> {
        let mut slot = self.entities.borrow_mut();
        if !slot.is_empty() {
            return Err(Error::LayerFilled("entities"));
        }
        *slot = entities;
        Ok(())
    }

    /// The coreference groups.
    #[must_use]
    pub fn coref_groups(&self) -> Vec<Rc<CoreferenceGroup>> {
        self.coref_groups.borrow().clone()
    }

    /// Install the coreference groups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayerFilled`] if the layer is already populated.
    pub fn set_coref_groups(&self, groups: Vec<Rc<CoreferenceGroup>>) -> Result<()> {
        let mut slot = self.coref_groups.borrow_mut();
        if !slot.is_empty() {
            return Err(Error::LayerFilled("coreference groups"));
        }
        *slot = groups;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Lexical-class queries
    // -------------------------------------------------------------------------

    /// Words acting as substantives.
    ///
    /// A word qualifies when its first noun-like morpheme (substantive
    /// category, or an `ETN`/`XSN` suffix) comes after the last
    /// class-changing suffix (`XSV`/`XSA`/`XSM`), so a later derivation
    /// overrides an earlier stem: `공부/NNG+하/XSV+다/EF` is not a noun.
    #[must_use]
    pub fn nouns(&self) -> Vec<Rc<Word>> {
        self.classify(
            |m| m.is_noun() || m.has_tag_one_of(&["ETN", "XSN"]),
            |m| m.has_tag_one_of(&["XSV", "XSA", "XSM"]),
        )
    }

    /// Words acting as predicates.
    #[must_use]
    pub fn verbs(&self) -> Vec<Rc<Word>> {
        self.classify(
            |m| m.is_predicate() || m.tag() == PosTag::Xsv,
            |m| m.has_tag_one_of(&["ETN", "ETM", "XSN", "XSA", "XSM"]),
        )
    }

    /// Words acting as modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Vec<Rc<Word>> {
        self.classify(
            |m| m.is_predicate() || m.has_tag_one_of(&["ETM", "XSA", "XSM"]),
            |m| m.has_tag_one_of(&["ETN", "XSN", "XSV"]),
        )
    }

    /// Keep words whose first inclusion-matching morpheme comes strictly
    /// after their last exclusion-matching morpheme.
    fn classify<I, E>(&self, include: I, exclude: E) -> Vec<Rc<Word>>
    where
        I: Fn(&Morpheme) -> bool,
        E: Fn(&Morpheme) -> bool,
    {
        self.words
            .iter()
            .filter(|word| {
                let inclusion = word.morphemes().iter().position(|m| include(m.as_ref()));
                let exclusion = word.morphemes().iter().rposition(|m| exclude(m.as_ref()));
                match (inclusion, exclusion) {
                    (Some(inc), Some(exc)) => inc > exc,
                    (Some(_), None) => true,
                    (None, _) => false,
                }
            })
            .map(Rc::clone)
            .collect()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Join the word surfaces with the given delimiter.
    #[must_use]
    pub fn surface_string(&self, delimiter: &str) -> String {
        self.words
            .iter()
            .map(|w| w.surface())
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Join every word's morpheme rendering with spaces.
    #[must_use]
    pub fn single_line_string(&self) -> String {
        self.words
            .iter()
            .map(|w| w.single_line_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface_string(" "))
    }
}

impl Index<usize> for Sentence {
    type Output = Rc<Word>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Rc<Word>;
    type IntoIter = std::slice::Iter<'a, Rc<Word>>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::PhraseTag;

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

    fn police_sentence() -> Sentence {
        Sentence::new(vec![
            word("경찰은", &[("경찰", PosTag::Nng), ("은", PosTag::Jx)]),
            word("도둑을", &[("도둑", PosTag::Nng), ("을", PosTag::Jko)]),
            word(
                "잡았다",
                &[("잡", PosTag::Vv), ("았", PosTag::Ep), ("다", PosTag::Ef)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_word_ids_assigned_by_position() {
        let s = police_sentence();
        for (i, w) in s.iter().enumerate() {
            assert_eq!(w.id(), Some(i));
        }
    }

    #[test]
    fn test_empty_sentence_rejected() {
        assert!(matches!(
            Sentence::new(vec![]),
            Err(Error::EmptyField("sentence words"))
        ));
    }

    #[test]
    fn test_word_reuse_rejected() {
        let shared = word("경찰은", &[("경찰", PosTag::Nng), ("은", PosTag::Jx)]);
        let _first = Sentence::new(vec![Rc::clone(&shared)]).unwrap();
        assert!(matches!(
            Sentence::new(vec![shared]),
            Err(Error::AlreadyLinked { .. })
        ));
    }

    #[test]
    fn test_rendering() {
        let s = police_sentence();
        assert_eq!(s.surface_string(" "), "경찰은 도둑을 잡았다");
        assert_eq!(s.surface_string("/"), "경찰은/도둑을/잡았다");
        assert_eq!(
            s.single_line_string(),
            "경찰/NNG+은/JX 도둑/NNG+을/JKO 잡/VV+았/EP+다/EF"
        );
        assert_eq!(s.to_string(), "경찰은 도둑을 잡았다");
    }

    #[test]
    fn test_simple_lexical_classes() {
        let s = police_sentence();

        let nouns = s.nouns();
        let noun_surfaces: Vec<_> = nouns.iter().map(|w| w.surface()).collect();
        assert_eq!(noun_surfaces, ["경찰은", "도둑을"]);

        let verbs = s.verbs();
        let verb_surfaces: Vec<_> = verbs.iter().map(|w| w.surface()).collect();
        assert_eq!(verb_surfaces, ["잡았다"]);

        assert!(s.modifiers().iter().any(|w| w.surface() == "잡았다"));
    }

    #[test]
    fn test_derived_verb_excluded_from_nouns() {
        // 공부하다: noun stem + verbalizing suffix. The XSV suffix comes after
        // the NNG stem, so the word reads as a verb, not a noun.
        let s = Sentence::new(vec![word(
            "공부했다",
            &[
                ("공부", PosTag::Nng),
                ("하", PosTag::Xsv),
                ("었", PosTag::Ep),
                ("다", PosTag::Ef),
            ],
        )])
        .unwrap();

        assert!(s.nouns().is_empty());
        assert_eq!(s.verbs().len(), 1);
    }

    #[test]
    fn test_nominalized_verb_excluded_from_verbs() {
        // 먹기: verb stem + nominalizing ending. The ETN ending comes after
        // the VV stem, so the word reads as a noun, not a verb.
        let s = Sentence::new(vec![word(
            "먹기",
            &[("먹", PosTag::Vv), ("기", PosTag::Etn)],
        )])
        .unwrap();

        assert_eq!(s.nouns().len(), 1);
        assert!(s.verbs().is_empty());
    }

    #[test]
    fn test_derived_modifier() {
        // 건강하게: noun stem + adjectivizing suffix + connective ending.
        let s = Sentence::new(vec![word(
            "건강하게",
            &[
                ("건강", PosTag::Nng),
                ("하", PosTag::Xsa),
                ("게", PosTag::Ec),
            ],
        )])
        .unwrap();

        assert!(s.nouns().is_empty());
        assert_eq!(s.modifiers().len(), 1);
    }

    #[test]
    fn test_layers_set_once_while_empty() {
        let s = police_sentence();

        let tree = SyntaxTree::new(PhraseTag::S, None, vec![], None).unwrap();
        s.set_syntax_tree(Rc::clone(&tree)).unwrap();
        assert!(matches!(
            s.set_syntax_tree(tree),
            Err(Error::LayerFilled("syntax tree"))
        ));

        let edge = DepEdge::new(None, Rc::clone(&s[2]), PhraseTag::Vp, None, None);
        s.set_dependencies(vec![Rc::clone(&edge)]).unwrap();
        assert!(matches!(
            s.set_dependencies(vec![edge]),
            Err(Error::LayerFilled("dependency edges"))
        ));

        // Installing an empty layer leaves it still-default and replaceable.
        s.set_roles(vec![]).unwrap();
        s.set_roles(vec![]).unwrap();
    }

    #[test]
    fn test_equality_compares_words_only() {
        let a = police_sentence();
        let b = police_sentence();
        assert_eq!(a, b);

        let tree = SyntaxTree::new(PhraseTag::S, None, vec![], None).unwrap();
        a.set_syntax_tree(tree).unwrap();
        assert_eq!(a, b, "derived layers do not affect equality");
    }
}
