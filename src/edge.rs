//! Directed labeled relations between words.
//!
//! Two edge kinds share the same storage shape (an optional source word, a
//! required destination word, a label):
//!
//! - [`DepEdge`]: the governor → dependent relation of a dependency parse.
//!   An absent governor marks the sentence root.
//! - [`RoleEdge`]: the predicate → argument relation of semantic-role
//!   labeling, with an ordered list of modifier words.
//!
//! Constructing an edge registers it on both endpoint words, so after the
//! sentence graph is built every word can answer "who governs me", "whom do I
//! govern", and "which roles involve me" without consulting the sentence.

use crate::tag::{DepTag, PhraseTag, RoleTag};
use crate::word::Word;
use std::fmt;
use std::rc::Rc;

/// Shared shape of a directed labeled relation between words.
pub trait Edge {
    /// The source word; `None` marks a root/virtual-source relation.
    fn src(&self) -> Option<Rc<Word>>;

    /// The destination word.
    fn dest(&self) -> Rc<Word>;

    /// The rendered label of this edge.
    fn label_string(&self) -> String;

    /// Render as `label('source' → 'destination')`, with `ROOT` standing in
    /// for an absent source.
    fn edge_string(&self) -> String {
        let src = self
            .src()
            .map_or_else(|| "ROOT".to_string(), |w| w.surface().to_string());
        format!(
            "{}('{}' → '{}')",
            self.label_string(),
            src,
            self.dest().surface()
        )
    }
}

// =============================================================================
// Dependency edges
// =============================================================================

/// A dependency edge: governor → dependent, labeled with the dependent's
/// phrase tag and an optional functional tag.
///
/// Equality compares the functional tag and both endpoint words; the phrase
/// tag and the analyzer's original label are excluded.
#[derive(Debug)]
pub struct DepEdge {
    governor: Option<Rc<Word>>,
    dependent: Rc<Word>,
    phrase_tag: PhraseTag,
    dep_tag: Option<DepTag>,
    original_label: Option<String>,
}

impl DepEdge {
    /// Create a dependency edge and register it on its endpoints: the
    /// dependent's governor slot and the governor's dependent list.
    #[must_use]
    pub fn new(
        governor: Option<Rc<Word>>,
        dependent: Rc<Word>,
        phrase_tag: PhraseTag,
        dep_tag: Option<DepTag>,
        original_label: Option<String>,
    ) -> Rc<Self> {
        let edge = Rc::new(Self {
            governor,
            dependent,
            phrase_tag,
            dep_tag,
            original_label,
        });
        edge.dependent.replace_governor(Rc::downgrade(&edge));
        if let Some(governor) = &edge.governor {
            governor.push_dependent(Rc::downgrade(&edge));
        }
        edge
    }

    /// The governing word; `None` for the sentence root.
    #[must_use]
    pub fn governor(&self) -> Option<Rc<Word>> {
        self.governor.clone()
    }

    /// The governed word.
    #[must_use]
    pub fn dependent(&self) -> Rc<Word> {
        Rc::clone(&self.dependent)
    }

    /// The dependent's phrase tag.
    #[must_use]
    pub fn phrase_tag(&self) -> PhraseTag {
        self.phrase_tag
    }

    /// The functional tag, if one was assigned.
    #[must_use]
    pub fn dep_tag(&self) -> Option<DepTag> {
        self.dep_tag
    }

    /// The analyzer's unresolved label string, if one was recorded.
    #[must_use]
    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }
}

impl Edge for DepEdge {
    fn src(&self) -> Option<Rc<Word>> {
        self.governor.clone()
    }

    fn dest(&self) -> Rc<Word> {
        Rc::clone(&self.dependent)
    }

    fn label_string(&self) -> String {
        match self.dep_tag {
            Some(tag) => format!("{}-{}", self.phrase_tag, tag),
            None => self.phrase_tag.to_string(),
        }
    }
}

impl PartialEq for DepEdge {
    fn eq(&self, other: &Self) -> bool {
        self.dep_tag == other.dep_tag
            && self.governor == other.governor
            && self.dependent == other.dependent
    }
}

impl Eq for DepEdge {}

impl fmt::Display for DepEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.edge_string())
    }
}

// =============================================================================
// Semantic-role edges
// =============================================================================

/// A semantic-role edge: predicate → argument, labeled with a [`RoleTag`],
/// plus the ordered modifier words of the argument.
///
/// Equality compares the label and both endpoint words; modifiers and the
/// analyzer's original label are excluded.
#[derive(Debug)]
pub struct RoleEdge {
    predicate: Rc<Word>,
    argument: Rc<Word>,
    label: RoleTag,
    modifiers: Vec<Rc<Word>>,
    original_label: Option<String>,
}

impl RoleEdge {
    /// Create a role edge and register it on its endpoints: the argument's
    /// predicate-role list and the predicate's argument-role list.
    #[must_use]
    pub fn new(
        predicate: Rc<Word>,
        argument: Rc<Word>,
        label: RoleTag,
        modifiers: Vec<Rc<Word>>,
        original_label: Option<String>,
    ) -> Rc<Self> {
        let edge = Rc::new(Self {
            predicate,
            argument,
            label,
            modifiers,
            original_label,
        });
        edge.argument.push_predicate_role(Rc::downgrade(&edge));
        edge.predicate.push_argument_role(Rc::downgrade(&edge));
        edge
    }

    /// The predicate word.
    #[must_use]
    pub fn predicate(&self) -> Rc<Word> {
        Rc::clone(&self.predicate)
    }

    /// The argument word.
    #[must_use]
    pub fn argument(&self) -> Rc<Word> {
        Rc::clone(&self.argument)
    }

    /// The role label.
    #[must_use]
    pub fn label(&self) -> RoleTag {
        self.label
    }

    /// The ordered modifier words of the argument.
    #[must_use]
    pub fn modifiers(&self) -> &[Rc<Word>] {
        &self.modifiers
    }

    /// The analyzer's unresolved label string, if one was recorded.
    #[must_use]
    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }
}

impl Edge for RoleEdge {
    fn src(&self) -> Option<Rc<Word>> {
        Some(Rc::clone(&self.predicate))
    }

    fn dest(&self) -> Rc<Word> {
        Rc::clone(&self.argument)
    }

    fn label_string(&self) -> String {
        self.label.to_string()
    }
}

impl PartialEq for RoleEdge {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.predicate == other.predicate
            && self.argument == other.argument
    }
}

impl Eq for RoleEdge {}

impl fmt::Display for RoleEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.edge_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::Morpheme;
    use crate::tag::PosTag;

    fn word(surface: &str, tag: PosTag) -> Rc<Word> {
        Word::new(surface, vec![Morpheme::new(surface, tag).unwrap()]).unwrap()
    }

    #[test]
    fn test_dep_edge_registers_endpoints() {
        let verb = word("잡았다", PosTag::Vv);
        let noun = word("도둑을", PosTag::Nng);
        let edge = DepEdge::new(
            Some(Rc::clone(&verb)),
            Rc::clone(&noun),
            PhraseTag::Np,
            Some(DepTag::Obj),
            None,
        );

        let governor_edge = noun.governor_edge().expect("dependent gains a governor");
        assert!(Rc::ptr_eq(&governor_edge, &edge));

        let dependents = verb.dependent_edges();
        assert_eq!(dependents.len(), 1);
        assert!(Rc::ptr_eq(&dependents[0], &edge));
    }

    #[test]
    fn test_governor_slot_last_write_wins() {
        let gov1 = word("먹고", PosTag::Vv);
        let gov2 = word("잡았다", PosTag::Vv);
        let dep = word("도둑을", PosTag::Nng);

        let _first = DepEdge::new(Some(gov1), Rc::clone(&dep), PhraseTag::Np, None, None);
        let second = DepEdge::new(Some(gov2), Rc::clone(&dep), PhraseTag::Np, None, None);

        let current = dep.governor_edge().unwrap();
        assert!(Rc::ptr_eq(&current, &second));
    }

    #[test]
    fn test_root_edge_renders_root() {
        let verb = word("잡았다", PosTag::Vv);
        let edge = DepEdge::new(None, Rc::clone(&verb), PhraseTag::Vp, Some(DepTag::Undef), None);
        assert!(edge.governor().is_none());
        assert_eq!(edge.to_string(), "VP-UNDEF('ROOT' → '잡았다')");
    }

    #[test]
    fn test_role_edge_registers_endpoints() {
        let pred = word("잡았다", PosTag::Vv);
        let arg = word("도둑을", PosTag::Nng);
        let edge = RoleEdge::new(Rc::clone(&pred), Rc::clone(&arg), RoleTag::Arg1, vec![], None);

        let preds = arg.predicate_roles();
        assert_eq!(preds.len(), 1);
        assert!(Rc::ptr_eq(&preds[0], &edge));

        let args = pred.argument_roles();
        assert_eq!(args.len(), 1);
        assert!(Rc::ptr_eq(&args[0], &edge));

        assert_eq!(edge.to_string(), "ARG1('잡았다' → '도둑을')");
    }

    #[test]
    fn test_dep_equality_ignores_phrase_tag() {
        let gov_a = word("잡았다", PosTag::Vv);
        let dep_a = word("도둑을", PosTag::Nng);
        let gov_b = word("잡았다", PosTag::Vv);
        let dep_b = word("도둑을", PosTag::Nng);

        let a = DepEdge::new(Some(gov_a), dep_a, PhraseTag::Np, Some(DepTag::Obj), None);
        let b = DepEdge::new(Some(gov_b), dep_b, PhraseTag::Vp, Some(DepTag::Obj), None);
        assert_eq!(*a, *b);

        let dep_c = word("경찰이", PosTag::Nng);
        let c = DepEdge::new(Some(word("잡았다", PosTag::Vv)), dep_c, PhraseTag::Np, Some(DepTag::Obj), None);
        assert_ne!(*a, *c);
    }

    #[test]
    fn test_role_equality_ignores_modifiers() {
        let make = |mods: Vec<Rc<Word>>| {
            RoleEdge::new(
                word("잡았다", PosTag::Vv),
                word("도둑을", PosTag::Nng),
                RoleTag::Arg1,
                mods,
                None,
            )
        };
        let a = make(vec![]);
        let b = make(vec![word("어제", PosTag::Mag)]);
        assert_eq!(*a, *b);

        let c = RoleEdge::new(
            word("잡았다", PosTag::Vv),
            word("도둑을", PosTag::Nng),
            RoleTag::Arg0,
            vec![],
            None,
        );
        assert_ne!(*a, *c);
    }
}
