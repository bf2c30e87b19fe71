//! Words: tokens made of ordered morphemes.

use crate::edge::{DepEdge, RoleEdge};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::morpheme::Morpheme;
use crate::tree::SyntaxTree;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::ops::Index;
use std::rc::{Rc, Weak};

/// A word: a token owning an ordered, fixed sequence of morphemes.
///
/// Construction consumes the morphemes and assigns each its 0-based position
/// and back-reference; the sequence can never change afterwards. The word's
/// own position (`id`) is assigned once when it joins a
/// [`Sentence`](crate::Sentence), and the phrase, dependency, and role layers register
/// their back-references here while the sentence graph is being built.
///
/// Equality compares the surface form and the morpheme sequence.
///
/// # Example
///
/// ```rust
/// use sejong::{Morpheme, PosTag, Word};
///
/// let word = Word::new("집에", vec![
///     Morpheme::new("집", PosTag::Nng)?,
///     Morpheme::new("에", PosTag::Jkb)?,
/// ])?;
/// assert_eq!(word.len(), 2);
/// assert_eq!(word[0].id(), Some(0));
/// assert_eq!(word.single_line_string(), "집/NNG+에/JKB");
/// # Ok::<(), sejong::Error>(())
/// ```
#[derive(Debug)]
pub struct Word {
    surface: String,
    morphemes: Vec<Rc<Morpheme>>,
    id: OnceCell<usize>,
    phrase: OnceCell<Weak<SyntaxTree>>,
    governor_edge: RefCell<Option<Weak<DepEdge>>>,
    dependent_edges: RefCell<Vec<Weak<DepEdge>>>,
    argument_roles: RefCell<Vec<Weak<RoleEdge>>>,
    predicate_roles: RefCell<Vec<Weak<RoleEdge>>>,
}

impl Word {
    /// Create a new word from its surface form and morphemes.
    ///
    /// Each morpheme's position index and word back-reference are set here,
    /// exactly once, by consuming the morpheme values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if the surface form or the morpheme
    /// sequence is empty.
    pub fn new(surface: impl Into<String>, morphemes: Vec<Morpheme>) -> Result<Rc<Self>> {
        let surface = surface.into();
        if surface.is_empty() {
            return Err(Error::empty_field("word surface"));
        }
        if morphemes.is_empty() {
            return Err(Error::empty_field("word morphemes"));
        }
        Ok(Rc::new_cyclic(|me: &Weak<Self>| {
            let morphemes = morphemes
                .into_iter()
                .enumerate()
                .map(|(i, m)| m.into_attached(i, me.clone()))
                .collect();
            Self {
                surface,
                morphemes,
                id: OnceCell::new(),
                phrase: OnceCell::new(),
                governor_edge: RefCell::new(None),
                dependent_edges: RefCell::new(Vec::new()),
                argument_roles: RefCell::new(Vec::new()),
                predicate_roles: RefCell::new(Vec::new()),
            }
        }))
    }

    /// Fix this word's position within its sentence.
    pub(crate) fn assign_id(&self, id: usize) -> Result<()> {
        self.id
            .set(id)
            .map_err(|_| Error::already_linked(format!("word '{}'", self.surface), "sentence"))
    }

    /// Record the phrase node whose terminal this word is.
    pub(crate) fn link_phrase(&self, phrase: Weak<SyntaxTree>) -> Result<()> {
        self.phrase
            .set(phrase)
            .map_err(|_| Error::already_linked(format!("word '{}'", self.surface), "phrase"))
    }

    /// Install the edge governing this word. One governor per word; a second
    /// write is a caller error, resolved by letting the last write win.
    pub(crate) fn replace_governor(&self, edge: Weak<DepEdge>) {
        let mut slot = self.governor_edge.borrow_mut();
        if slot.is_some() {
            log::warn!(
                "word '{}' already had a governing edge; replacing it",
                self.surface
            );
        }
        *slot = Some(edge);
    }

    /// Record an edge this word governs.
    pub(crate) fn push_dependent(&self, edge: Weak<DepEdge>) {
        self.dependent_edges.borrow_mut().push(edge);
    }

    /// Record a role edge in which this word is the predicate.
    pub(crate) fn push_argument_role(&self, edge: Weak<RoleEdge>) {
        self.argument_roles.borrow_mut().push(edge);
    }

    /// Record a role edge in which this word is the argument.
    pub(crate) fn push_predicate_role(&self, edge: Weak<RoleEdge>) {
        self.predicate_roles.borrow_mut().push(edge);
    }

    /// The surface form.
    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The ordered morphemes of this word.
    #[must_use]
    pub fn morphemes(&self) -> &[Rc<Morpheme>] {
        &self.morphemes
    }

    /// Number of morphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// A word always owns at least one morpheme, so this is always false;
    /// provided for container-like symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Iterate over the morphemes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Morpheme>> {
        self.morphemes.iter()
    }

    /// Position of this word within its sentence, once assigned.
    #[must_use]
    pub fn id(&self) -> Option<usize> {
        self.id.get().copied()
    }

    /// The phrase node whose terminal this word is, if any.
    #[must_use]
    pub fn phrase(&self) -> Option<Rc<SyntaxTree>> {
        self.phrase.get().and_then(Weak::upgrade)
    }

    /// The dependency edge governing this word, if any.
    #[must_use]
    pub fn governor_edge(&self) -> Option<Rc<DepEdge>> {
        self.governor_edge.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Dependency edges this word governs, in registration order.
    #[must_use]
    pub fn dependent_edges(&self) -> Vec<Rc<DepEdge>> {
        self.dependent_edges
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Role edges in which this word is the predicate.
    #[must_use]
    pub fn argument_roles(&self) -> Vec<Rc<RoleEdge>> {
        self.argument_roles
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Role edges in which this word is the argument.
    #[must_use]
    pub fn predicate_roles(&self) -> Vec<Rc<RoleEdge>> {
        self.predicate_roles
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Named entities any of this word's morphemes belong to, in first-seen
    /// order without duplicates.
    #[must_use]
    pub fn entities(&self) -> Vec<Rc<Entity>> {
        let mut seen: Vec<Rc<Entity>> = Vec::new();
        for morpheme in &self.morphemes {
            for entity in morpheme.entities() {
                if !seen.iter().any(|e| Rc::ptr_eq(e, &entity)) {
                    seen.push(entity);
                }
            }
        }
        seen
    }

    /// Render as `surface/TAG` per morpheme, joined by `+`.
    #[must_use]
    pub fn single_line_string(&self) -> String {
        self.morphemes
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface && self.morphemes == other.morphemes
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}

impl Index<usize> for Word {
    type Output = Rc<Morpheme>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.morphemes[index]
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Rc<Morpheme>;
    type IntoIter = std::slice::Iter<'a, Rc<Morpheme>>;

    fn into_iter(self) -> Self::IntoIter {
        self.morphemes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::PosTag;

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

    #[test]
    fn test_construction_sets_morpheme_backrefs() {
        let w = word("잡았다", &[("잡", PosTag::Vv), ("았", PosTag::Ep), ("다", PosTag::Ef)]);
        for (i, m) in w.iter().enumerate() {
            assert_eq!(m.id(), Some(i));
            let owner = m.word().expect("morpheme should know its word");
            assert!(Rc::ptr_eq(&owner, &w));
        }
    }

    #[test]
    fn test_construction_rejects_empty() {
        assert!(matches!(
            Word::new("집", vec![]),
            Err(Error::EmptyField("word morphemes"))
        ));
        assert!(matches!(
            Word::new("", vec![Morpheme::new("집", PosTag::Nng).unwrap()]),
            Err(Error::EmptyField("word surface"))
        ));
    }

    #[test]
    fn test_single_line_string() {
        let w = word("경찰은", &[("경찰", PosTag::Nng), ("은", PosTag::Jx)]);
        assert_eq!(w.single_line_string(), "경찰/NNG+은/JX");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = word("먹었다", &[("먹", PosTag::Vv), ("었", PosTag::Ep), ("다", PosTag::Ef)]);
        let b = word("먹었다", &[("먹", PosTag::Vv), ("었", PosTag::Ep), ("다", PosTag::Ef)]);
        let c = word("먹었다", &[("먹", PosTag::Vv), ("었다", PosTag::Ef)]);
        assert_eq!(*a, *b);
        assert_ne!(*a, *c);
    }

    #[test]
    fn test_unlinked_layers_absent() {
        let w = word("서울", &[("서울", PosTag::Nnp)]);
        assert_eq!(w.id(), None);
        assert!(w.phrase().is_none());
        assert!(w.governor_edge().is_none());
        assert!(w.dependent_edges().is_empty());
        assert!(w.argument_roles().is_empty());
        assert!(w.predicate_roles().is_empty());
        assert!(w.entities().is_empty());
    }

    #[test]
    fn test_indexing_and_iteration() {
        let w = word("집에", &[("집", PosTag::Nng), ("에", PosTag::Jkb)]);
        assert_eq!(w[1].surface(), "에");
        let surfaces: Vec<_> = w.iter().map(|m| m.surface()).collect();
        assert_eq!(surfaces, ["집", "에"]);
        assert!(!w.is_empty());
    }
}
