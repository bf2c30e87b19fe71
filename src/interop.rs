//! Exchange with an external analyzer.
//!
//! An analyzer hands over (and accepts back) a sentence analysis as plain
//! data: every object carries string-named tags, and every link between
//! objects is positional instead of referential.
//!
//! ```text
//! ┌────────────────┬──────────────────────────────────────────────────────┐
//! │ Raw object     │ Links encoded as                                     │
//! ├────────────────┼──────────────────────────────────────────────────────┤
//! │ RawTree        │ terminal = word position in the sentence             │
//! │ RawDepEdge     │ governor / dependent = word positions (governor may  │
//! │                │ be absent for the root)                              │
//! │ RawRoleEdge    │ predicate / argument / modifiers = word positions    │
//! │ RawEntity      │ members = (word position, morpheme position) pairs   │
//! │ RawCorefGroup  │ members = embedded RawEntity values, matched against │
//! │                │ built entities by structural equality                │
//! └────────────────┴──────────────────────────────────────────────────────┘
//! ```
//!
//! [`Sentence::from_raw`] rebuilds the native graph from this form in one
//! pass per layer, words first, so every positional reference resolves
//! against fully-built objects. [`Sentence::to_raw`] is the inverse; it
//! attaches the optional layers only when they are non-empty, and the
//! composition of the two is identity up to structural equality.
//!
//! The raw types derive `serde`, so any self-describing format works as the
//! wire form:
//!
//! ```rust
//! use sejong::{RawMorpheme, RawSentence, RawWord, Sentence};
//!
//! let raw = RawSentence {
//!     words: vec![RawWord {
//!         surface: "맑다".into(),
//!         morphemes: vec![
//!             RawMorpheme { surface: "맑".into(), tag: "VA".into(), ..Default::default() },
//!             RawMorpheme { surface: "다".into(), tag: "EF".into(), ..Default::default() },
//!         ],
//!     }],
//!     ..Default::default()
//! };
//!
//! let sentence = Sentence::from_raw(&raw)?;
//! assert_eq!(sentence.to_raw()?, raw);
//! # Ok::<(), sejong::Error>(())
//! ```

use crate::edge::{DepEdge, RoleEdge};
use crate::entity::{CoreferenceGroup, Entity};
use crate::error::{Error, Result};
use crate::morpheme::Morpheme;
use crate::sentence::Sentence;
use crate::tag::{DepTag, EntityTag, PhraseTag, PosTag, RoleTag};
use crate::tree::SyntaxTree;
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Analyzer-side form of a morpheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMorpheme {
    /// Surface form.
    pub surface: String,
    /// Part-of-speech tag name.
    pub tag: String,
    /// Tag string before resolution, if the analyzer kept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_tag: Option<String>,
    /// Word-sense index, if disambiguation ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_sense: Option<u32>,
}

/// Analyzer-side form of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWord {
    /// Surface form.
    pub surface: String,
    /// Ordered morphemes.
    pub morphemes: Vec<RawMorpheme>,
}

/// Analyzer-side form of a phrase-structure node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTree {
    /// Phrase tag name.
    pub label: String,
    /// Position of the terminal word in the sentence, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<usize>,
    /// Ordered child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawTree>,
    /// Label string before resolution, if the analyzer kept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Analyzer-side form of a dependency edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDepEdge {
    /// Position of the governing word; absent for the root relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governor: Option<usize>,
    /// Position of the governed word.
    pub dependent: usize,
    /// Phrase tag name.
    pub phrase_tag: String,
    /// Functional tag name, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_tag: Option<String>,
    /// Label string before resolution, if the analyzer kept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Analyzer-side form of a semantic-role edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoleEdge {
    /// Position of the predicate word.
    pub predicate: usize,
    /// Position of the argument word.
    pub argument: usize,
    /// Role label name.
    pub label: String,
    /// Positions of the argument's modifier words, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<usize>,
    /// Label string before resolution, if the analyzer kept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Positional reference to one morpheme of one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMorphemeRef {
    /// Position of the word in the sentence.
    pub word: usize,
    /// Position of the morpheme within that word.
    pub morpheme: usize,
}

/// Analyzer-side form of a named entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    /// Surface form of the span.
    pub surface: String,
    /// Coarse entity tag name.
    pub label: String,
    /// Fine-grained label.
    pub fine_label: String,
    /// Ordered member morphemes.
    pub morphemes: Vec<RawMorphemeRef>,
    /// Label string before resolution, if the analyzer kept one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
}

/// Analyzer-side form of a coreference group: the member entities embedded in
/// full, matched against built entities by structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCorefGroup {
    /// Ordered member entities.
    pub entities: Vec<RawEntity>,
}

/// Analyzer-side form of a full sentence analysis.
///
/// The optional layers follow the exchange convention of being attached only
/// when non-empty; [`Sentence::to_raw`] emits `None` for empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSentence {
    /// Ordered words.
    pub words: Vec<RawWord>,
    /// Phrase-structure tree, if parsing ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<RawTree>,
    /// Dependency edges, if dependency parsing ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_edges: Option<Vec<RawDepEdge>>,
    /// Semantic-role edges, if role labeling ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_edges: Option<Vec<RawRoleEdge>>,
    /// Named entities, if entity recognition ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RawEntity>>,
    /// Coreference groups, if coreference resolution ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coref_groups: Option<Vec<RawCorefGroup>>,
}

// =============================================================================
// Raw → native
// =============================================================================

fn word_at(words: &[Rc<Word>], index: usize) -> Result<Rc<Word>> {
    words
        .get(index)
        .cloned()
        .ok_or(Error::WordIndex {
            index,
            len: words.len(),
        })
}

fn morpheme_at(words: &[Rc<Word>], reference: RawMorphemeRef) -> Result<Rc<Morpheme>> {
    let word = word_at(words, reference.word)?;
    word.morphemes()
        .get(reference.morpheme)
        .cloned()
        .ok_or(Error::MorphemeIndex {
            word: reference.word,
            index: reference.morpheme,
        })
}

fn build_tree(raw: &RawTree, words: &[Rc<Word>]) -> Result<Rc<SyntaxTree>> {
    let children = raw
        .children
        .iter()
        .map(|child| build_tree(child, words))
        .collect::<Result<Vec<_>>>()?;
    let terminal = match raw.terminal {
        Some(index) => Some(word_at(words, index)?),
        None => None,
    };
    SyntaxTree::new(
        PhraseTag::from_label(&raw.label)?,
        terminal,
        children,
        raw.original_label.clone(),
    )
}

fn build_entity(raw: &RawEntity, words: &[Rc<Word>]) -> Result<Rc<Entity>> {
    let morphemes = raw
        .morphemes
        .iter()
        .map(|&reference| morpheme_at(words, reference))
        .collect::<Result<Vec<_>>>()?;
    Entity::new(
        raw.surface.clone(),
        EntityTag::from_label(&raw.label)?,
        raw.fine_label.clone(),
        morphemes,
        raw.original_label.clone(),
    )
}

fn match_entity(
    built: &[Rc<Entity>],
    raw: &RawEntity,
    words: &[Rc<Word>],
) -> Result<Rc<Entity>> {
    let label = EntityTag::from_label(&raw.label)?;
    let members = raw
        .morphemes
        .iter()
        .map(|&reference| morpheme_at(words, reference))
        .collect::<Result<Vec<_>>>()?;
    built
        .iter()
        .find(|entity| {
            entity.label() == label
                && entity.fine_label() == raw.fine_label
                && entity.surface() == raw.surface
                && entity.morphemes() == members.as_slice()
        })
        .cloned()
        .ok_or_else(|| Error::UnknownEntity(raw.surface.clone()))
}

impl Sentence {
    /// Rebuild a native sentence graph from its analyzer-side form.
    ///
    /// Layers translate in dependency order: words (with their morphemes)
    /// first, then the tree, the edges, the entities, and finally the
    /// coreference groups, so every positional reference lands on a
    /// fully-built object.
    ///
    /// # Errors
    ///
    /// Fails on unknown tag names, out-of-range positional references, and
    /// coreference members that match no entity, as well as on any native
    /// construction precondition.
    pub fn from_raw(raw: &RawSentence) -> Result<Self> {
        let words = raw
            .words
            .iter()
            .map(|rw| {
                let morphemes = rw
                    .morphemes
                    .iter()
                    .map(|rm| {
                        let mut morpheme =
                            Morpheme::new(rm.surface.clone(), PosTag::from_label(&rm.tag)?);
                        if let Some(original) = &rm.original_tag {
                            morpheme = morpheme.map(|m| m.with_original_tag(original.clone()));
                        }
                        morpheme
                    })
                    .collect::<Result<Vec<_>>>()?;
                Word::new(rw.surface.clone(), morphemes)
            })
            .collect::<Result<Vec<_>>>()?;

        for (word, rw) in words.iter().zip(&raw.words) {
            for (morpheme, rm) in word.morphemes().iter().zip(&rw.morphemes) {
                if let Some(sense) = rm.word_sense {
                    morpheme.set_word_sense(sense)?;
                }
            }
        }

        let sentence = Sentence::new(words)?;

        if let Some(raw_tree) = &raw.tree {
            let tree = build_tree(raw_tree, sentence.words())?;
            sentence.set_syntax_tree(tree)?;
        }

        if let Some(raw_edges) = &raw.dep_edges {
            let edges = raw_edges
                .iter()
                .map(|re| {
                    let governor = match re.governor {
                        Some(index) => Some(word_at(sentence.words(), index)?),
                        None => None,
                    };
                    let dep_tag = match &re.dep_tag {
                        Some(label) => Some(DepTag::from_label(label)?),
                        None => None,
                    };
                    Ok(DepEdge::new(
                        governor,
                        word_at(sentence.words(), re.dependent)?,
                        PhraseTag::from_label(&re.phrase_tag)?,
                        dep_tag,
                        re.original_label.clone(),
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            if !edges.is_empty() {
                sentence.set_dependencies(edges)?;
            }
        }

        if let Some(raw_edges) = &raw.role_edges {
            let edges = raw_edges
                .iter()
                .map(|re| {
                    let modifiers = re
                        .modifiers
                        .iter()
                        .map(|&index| word_at(sentence.words(), index))
                        .collect::<Result<Vec<_>>>()?;
                    Ok(RoleEdge::new(
                        word_at(sentence.words(), re.predicate)?,
                        word_at(sentence.words(), re.argument)?,
                        RoleTag::from_label(&re.label)?,
                        modifiers,
                        re.original_label.clone(),
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            if !edges.is_empty() {
                sentence.set_roles(edges)?;
            }
        }

        if let Some(raw_entities) = &raw.entities {
            let entities = raw_entities
                .iter()
                .map(|re| build_entity(re, sentence.words()))
                .collect::<Result<Vec<_>>>()?;
            if !entities.is_empty() {
                sentence.set_entities(entities)?;
            }
        }

        if let Some(raw_groups) = &raw.coref_groups {
            let built = sentence.entities();
            let groups = raw_groups
                .iter()
                .map(|rg| {
                    let members = rg
                        .entities
                        .iter()
                        .map(|re| match_entity(&built, re, sentence.words()))
                        .collect::<Result<Vec<_>>>()?;
                    CoreferenceGroup::new(members)
                })
                .collect::<Result<Vec<_>>>()?;
            if !groups.is_empty() {
                sentence.set_coref_groups(groups)?;
            }
        }

        log::debug!(
            "rebuilt sentence: {} words, tree={}, {} dependencies, {} roles, {} entities, {} coref groups",
            sentence.len(),
            sentence.syntax_tree().is_some(),
            sentence.dependencies().len(),
            sentence.roles().len(),
            sentence.entities().len(),
            sentence.coref_groups().len(),
        );

        Ok(sentence)
    }

    /// Export this sentence back to its analyzer-side form.
    ///
    /// The optional layers are attached only when non-empty, so a sentence
    /// built from a [`RawSentence`] exports back to an equal value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] if an edge, tree, or entity references a
    /// word that holds no position in this sentence.
    pub fn to_raw(&self) -> Result<RawSentence> {
        let words = self
            .words()
            .iter()
            .map(|word| RawWord {
                surface: word.surface().to_string(),
                morphemes: word
                    .morphemes()
                    .iter()
                    .map(|m| RawMorpheme {
                        surface: m.surface().to_string(),
                        tag: m.tag().as_label().to_string(),
                        original_tag: m.original_tag().map(str::to_string),
                        word_sense: m.word_sense(),
                    })
                    .collect(),
            })
            .collect();

        let tree = match self.syntax_tree() {
            Some(tree) => Some(export_tree(&tree)?),
            None => None,
        };

        let dependencies = self.dependencies();
        let dep_edges = if dependencies.is_empty() {
            None
        } else {
            Some(
                dependencies
                    .iter()
                    .map(|edge| {
                        let governor = match edge.governor() {
                            Some(word) => Some(position_of(&word, "governor word")?),
                            None => None,
                        };
                        Ok(RawDepEdge {
                            governor,
                            dependent: position_of(&edge.dependent(), "dependent word")?,
                            phrase_tag: edge.phrase_tag().as_label().to_string(),
                            dep_tag: edge.dep_tag().map(|t| t.as_label().to_string()),
                            original_label: edge.original_label().map(str::to_string),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        let roles = self.roles();
        let role_edges = if roles.is_empty() {
            None
        } else {
            Some(
                roles
                    .iter()
                    .map(|edge| {
                        Ok(RawRoleEdge {
                            predicate: position_of(&edge.predicate(), "predicate word")?,
                            argument: position_of(&edge.argument(), "argument word")?,
                            label: edge.label().as_label().to_string(),
                            modifiers: edge
                                .modifiers()
                                .iter()
                                .map(|word| position_of(word, "modifier word"))
                                .collect::<Result<Vec<_>>>()?,
                            original_label: edge.original_label().map(str::to_string),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        let built = self.entities();
        let entities = if built.is_empty() {
            None
        } else {
            Some(
                built
                    .iter()
                    .map(|entity| export_entity(entity))
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        let groups = self.coref_groups();
        let coref_groups = if groups.is_empty() {
            None
        } else {
            Some(
                groups
                    .iter()
                    .map(|group| {
                        Ok(RawCorefGroup {
                            entities: group
                                .entities()
                                .iter()
                                .map(|entity| export_entity(entity))
                                .collect::<Result<Vec<_>>>()?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        Ok(RawSentence {
            words,
            tree,
            dep_edges,
            role_edges,
            entities,
            coref_groups,
        })
    }
}

// =============================================================================
// Native → raw helpers
// =============================================================================

fn position_of(word: &Rc<Word>, what: &'static str) -> Result<usize> {
    word.id().ok_or(Error::Detached(what))
}

fn export_tree(tree: &SyntaxTree) -> Result<RawTree> {
    let terminal = match tree.terminal() {
        Some(word) => Some(position_of(&word, "terminal word")?),
        None => None,
    };
    Ok(RawTree {
        label: tree.label().as_label().to_string(),
        terminal,
        children: tree
            .children()
            .iter()
            .map(|child| export_tree(child))
            .collect::<Result<Vec<_>>>()?,
        original_label: tree.original_label().map(str::to_string),
    })
}

fn export_entity(entity: &Entity) -> Result<RawEntity> {
    Ok(RawEntity {
        surface: entity.surface().to_string(),
        label: entity.label().as_label().to_string(),
        fine_label: entity.fine_label().to_string(),
        morphemes: entity
            .morphemes()
            .iter()
            .map(|m| {
                Ok(RawMorphemeRef {
                    word: m
                        .word()
                        .and_then(|w| w.id())
                        .ok_or(Error::Detached("entity morpheme"))?,
                    morpheme: m.id().ok_or(Error::Detached("entity morpheme"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        original_label: entity.original_label().map(str::to_string),
    })
}
