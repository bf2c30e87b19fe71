//! Morphemes: the smallest annotated units.

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::tag::PosTag;
use crate::word::Word;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A morpheme: surface form plus part-of-speech tag.
///
/// Morphemes are built as plain values and attached to exactly one [`Word`],
/// which assigns their position index and back-reference. Entity membership
/// accumulates while the graph is under construction; afterwards the whole
/// object is read-only.
///
/// Equality compares surface and tag only. Position, original tag, and the
/// back-references are deliberately excluded, so structurally identical
/// morphemes from different sentences compare equal.
///
/// # Example
///
/// ```rust
/// use sejong::{Morpheme, PosTag};
///
/// let m = Morpheme::new("먹", PosTag::Vv)?;
/// assert!(m.is_predicate());
/// assert!(m.has_tag("VV"));
/// assert_eq!(m.to_string(), "먹/VV");
/// # Ok::<(), sejong::Error>(())
/// ```
#[derive(Debug)]
pub struct Morpheme {
    surface: String,
    tag: PosTag,
    original_tag: Option<String>,
    id: OnceCell<usize>,
    word: OnceCell<Weak<Word>>,
    word_sense: OnceCell<u32>,
    entities: RefCell<Vec<Weak<Entity>>>,
}

impl Morpheme {
    /// Create a new morpheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if the surface form is empty.
    pub fn new(surface: impl Into<String>, tag: PosTag) -> Result<Self> {
        let surface = surface.into();
        if surface.is_empty() {
            return Err(Error::empty_field("morpheme surface"));
        }
        Ok(Self {
            surface,
            tag,
            original_tag: None,
            id: OnceCell::new(),
            word: OnceCell::new(),
            word_sense: OnceCell::new(),
            entities: RefCell::new(Vec::new()),
        })
    }

    /// Attach the tag string the original analyzer emitted, before it was
    /// resolved against [`PosTag`].
    #[must_use]
    pub fn with_original_tag(mut self, tag: impl Into<String>) -> Self {
        self.original_tag = Some(tag.into());
        self
    }

    /// Wrap this morpheme for ownership by a word, fixing its position.
    ///
    /// Only a [`Word`] constructor calls this; consuming `self` guarantees the
    /// position and back-reference cells have never been written.
    pub(crate) fn into_attached(self, index: usize, word: Weak<Word>) -> Rc<Self> {
        Rc::new(Self {
            id: OnceCell::with_value(index),
            word: OnceCell::with_value(word),
            ..self
        })
    }

    /// Record membership in a named entity.
    pub(crate) fn register_entity(&self, entity: Weak<Entity>) {
        self.entities.borrow_mut().push(entity);
    }

    /// The surface form.
    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The resolved part-of-speech tag.
    #[must_use]
    pub fn tag(&self) -> PosTag {
        self.tag
    }

    /// The analyzer's unresolved tag string, if one was recorded.
    #[must_use]
    pub fn original_tag(&self) -> Option<&str> {
        self.original_tag.as_deref()
    }

    /// Position of this morpheme within its word, once attached.
    #[must_use]
    pub fn id(&self) -> Option<usize> {
        self.id.get().copied()
    }

    /// The word owning this morpheme, once attached.
    #[must_use]
    pub fn word(&self) -> Option<Rc<Word>> {
        self.word.get().and_then(Weak::upgrade)
    }

    /// The word-sense index, if disambiguation results were attached.
    #[must_use]
    pub fn word_sense(&self) -> Option<u32> {
        self.word_sense.get().copied()
    }

    /// Attach a word-sense index. Settable exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLinked`] if a sense was already recorded.
    pub fn set_word_sense(&self, sense: u32) -> Result<()> {
        self.word_sense
            .set(sense)
            .map_err(|_| Error::already_linked(format!("morpheme '{}'", self.surface), "word sense"))
    }

    /// Named entities this morpheme belongs to, in registration order.
    #[must_use]
    pub fn entities(&self) -> Vec<Rc<Entity>> {
        self.entities.borrow().iter().filter_map(Weak::upgrade).collect()
    }

    /// Is this a substantive (체언)?
    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.tag.is_noun()
    }

    /// Is this a predicate (용언)?
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        self.tag.is_predicate()
    }

    /// Is this a modifier (수식언)?
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        self.tag.is_modifier()
    }

    /// Is this a postposition (관계언)?
    #[must_use]
    pub fn is_josa(&self) -> bool {
        self.tag.is_josa()
    }

    /// Does the resolved tag label start with `prefix` (case-sensitive)?
    ///
    /// Lexical classification leans on this: `has_tag("J")` matches every
    /// postposition, `has_tag("ETN")` only the noun-derivational ending.
    #[must_use]
    pub fn has_tag(&self, prefix: &str) -> bool {
        self.tag.as_label().starts_with(prefix)
    }

    /// Does the resolved tag label start with any of the prefixes?
    #[must_use]
    pub fn has_tag_one_of(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.has_tag(p))
    }

    /// Does the analyzer's original tag start with `prefix`, compared
    /// case-insensitively? False when no original tag was recorded.
    #[must_use]
    pub fn has_original_tag(&self, prefix: &str) -> bool {
        match &self.original_tag {
            Some(tag) => tag
                .get(..prefix.len())
                .map_or(false, |head| head.eq_ignore_ascii_case(prefix)),
            None => false,
        }
    }
}

impl PartialEq for Morpheme {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface && self.tag == other.tag
    }
}

impl Eq for Morpheme {}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.tag)
    }
}
