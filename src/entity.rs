//! Named entities and coreference groups.

use crate::error::{Error, Result};
use crate::morpheme::Morpheme;
use crate::tag::EntityTag;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::ops::Index;
use std::rc::{Rc, Weak};

/// A named entity: a span of morphemes denoting a real-world referent.
///
/// Construction registers the entity on every member morpheme, so morphemes
/// (and through them, words) can enumerate the entities they belong to. An
/// entity joins at most one [`CoreferenceGroup`]; that back-reference is a
/// one-time write.
///
/// Equality compares coarse label, fine label, surface, and the member
/// morpheme sequence. Independently constructed entities with the same
/// content compare equal.
#[derive(Debug)]
pub struct Entity {
    surface: String,
    label: EntityTag,
    fine_label: String,
    morphemes: Vec<Rc<Morpheme>>,
    original_label: Option<String>,
    coref_group: OnceCell<Weak<CoreferenceGroup>>,
}

impl Entity {
    /// Create a named entity over already-attached morphemes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] if the surface, the fine label, or the
    /// morpheme sequence is empty.
    pub fn new(
        surface: impl Into<String>,
        label: EntityTag,
        fine_label: impl Into<String>,
        morphemes: Vec<Rc<Morpheme>>,
        original_label: Option<String>,
    ) -> Result<Rc<Self>> {
        let surface = surface.into();
        let fine_label = fine_label.into();
        if surface.is_empty() {
            return Err(Error::empty_field("entity surface"));
        }
        if fine_label.is_empty() {
            return Err(Error::empty_field("entity fine label"));
        }
        if morphemes.is_empty() {
            return Err(Error::empty_field("entity morphemes"));
        }
        let entity = Rc::new_cyclic(|me: &Weak<Self>| {
            for morpheme in &morphemes {
                morpheme.register_entity(me.clone());
            }
            Self {
                surface,
                label,
                fine_label,
                morphemes,
                original_label,
                coref_group: OnceCell::new(),
            }
        });
        Ok(entity)
    }

    /// Record the coreference group this entity belongs to.
    pub(crate) fn link_group(&self, group: Weak<CoreferenceGroup>) -> Result<()> {
        self.coref_group.set(group).map_err(|_| {
            Error::already_linked(format!("entity '{}'", self.surface), "coreference group")
        })
    }

    /// The surface form of the span.
    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The coarse entity classification.
    #[must_use]
    pub fn label(&self) -> EntityTag {
        self.label
    }

    /// The fine-grained label (e.g. `"OG_COMPANY"`).
    #[must_use]
    pub fn fine_label(&self) -> &str {
        &self.fine_label
    }

    /// The ordered member morphemes.
    #[must_use]
    pub fn morphemes(&self) -> &[Rc<Morpheme>] {
        &self.morphemes
    }

    /// Number of member morphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// An entity always spans at least one morpheme, so this is always false;
    /// provided for container-like symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Iterate over the member morphemes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Morpheme>> {
        self.morphemes.iter()
    }

    /// The analyzer's unresolved label string, if one was recorded.
    #[must_use]
    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }

    /// The coreference group this entity belongs to, if any.
    #[must_use]
    pub fn coref_group(&self) -> Option<Rc<CoreferenceGroup>> {
        self.coref_group.get().and_then(Weak::upgrade)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.fine_label == other.fine_label
            && self.surface == other.surface
            && self.morphemes == other.morphemes
    }
}

impl Eq for Entity {}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.fine_label, self.surface)
    }
}

impl Index<usize> for Entity {
    type Output = Rc<Morpheme>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.morphemes[index]
    }
}

impl<'a> IntoIterator for &'a Entity {
    type Item = &'a Rc<Morpheme>;
    type IntoIter = std::slice::Iter<'a, Rc<Morpheme>>;

    fn into_iter(self) -> Self::IntoIter {
        self.morphemes.iter()
    }
}

// =============================================================================
// Coreference groups
// =============================================================================

/// An ordered group of entities judged to refer to the same referent.
///
/// Construction fixes each member's group back-reference; placing an entity
/// into a second group fails.
#[derive(Debug)]
pub struct CoreferenceGroup {
    entities: Vec<Rc<Entity>>,
}

impl CoreferenceGroup {
    /// Create a coreference group over already-built entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLinked`] if any member already belongs to a
    /// group.
    pub fn new(entities: Vec<Rc<Entity>>) -> Result<Rc<Self>> {
        let group = Rc::new(Self { entities });
        for entity in &group.entities {
            entity.link_group(Rc::downgrade(&group))?;
        }
        Ok(group)
    }

    /// The ordered member entities.
    #[must_use]
    pub fn entities(&self) -> &[Rc<Entity>] {
        &self.entities
    }

    /// Number of member entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over the member entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<Entity>> {
        self.entities.iter()
    }
}

impl PartialEq for CoreferenceGroup {
    fn eq(&self, other: &Self) -> bool {
        self.entities == other.entities
    }
}

impl Eq for CoreferenceGroup {}

impl Index<usize> for CoreferenceGroup {
    type Output = Rc<Entity>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entities[index]
    }
}

impl<'a> IntoIterator for &'a CoreferenceGroup {
    type Item = &'a Rc<Entity>;
    type IntoIter = std::slice::Iter<'a, Rc<Entity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::PosTag;
    use crate::word::Word;

    fn entity_over(surface: &str, label: EntityTag, fine: &str) -> Rc<Entity> {
        let word = Word::new(
            format!("{surface}이"),
            vec![
                Morpheme::new(surface, PosTag::Nnp).unwrap(),
                Morpheme::new("이", PosTag::Jks).unwrap(),
            ],
        )
        .unwrap();
        Entity::new(
            surface,
            label,
            fine,
            vec![Rc::clone(&word.morphemes()[0])],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_registers_membership() {
        let word = Word::new(
            "철수가",
            vec![
                Morpheme::new("철수", PosTag::Nnp).unwrap(),
                Morpheme::new("가", PosTag::Jks).unwrap(),
            ],
        )
        .unwrap();
        let member = Rc::clone(&word.morphemes()[0]);
        let entity = Entity::new("철수", EntityTag::Person, "PS_NAME", vec![member], None).unwrap();

        let memberships = word.morphemes()[0].entities();
        assert_eq!(memberships.len(), 1);
        assert!(Rc::ptr_eq(&memberships[0], &entity));
        assert!(word.morphemes()[1].entities().is_empty());

        let word_entities = word.entities();
        assert_eq!(word_entities.len(), 1);
        assert!(Rc::ptr_eq(&word_entities[0], &entity));
    }

    #[test]
    fn test_construction_preconditions() {
        let word = Word::new("철수", vec![Morpheme::new("철수", PosTag::Nnp).unwrap()]).unwrap();
        let m = Rc::clone(&word.morphemes()[0]);

        assert!(matches!(
            Entity::new("", EntityTag::Person, "PS_NAME", vec![Rc::clone(&m)], None),
            Err(Error::EmptyField("entity surface"))
        ));
        assert!(matches!(
            Entity::new("철수", EntityTag::Person, "", vec![Rc::clone(&m)], None),
            Err(Error::EmptyField("entity fine label"))
        ));
        assert!(matches!(
            Entity::new("철수", EntityTag::Person, "PS_NAME", vec![], None),
            Err(Error::EmptyField("entity morphemes"))
        ));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = entity_over("철수", EntityTag::Person, "PS_NAME");
        let b = entity_over("철수", EntityTag::Person, "PS_NAME");
        let c = entity_over("철수", EntityTag::Person, "PS_NICKNAME");
        assert_eq!(*a, *b);
        assert_ne!(*a, *c, "differing fine labels break equality");
    }

    #[test]
    fn test_coref_group_links_members() {
        let e1 = entity_over("철수", EntityTag::Person, "PS_NAME");
        let e2 = entity_over("그", EntityTag::Person, "PS_PRONOUN");
        let group = CoreferenceGroup::new(vec![Rc::clone(&e1), Rc::clone(&e2)]).unwrap();

        assert_eq!(group.len(), 2);
        assert!(Rc::ptr_eq(&e1.coref_group().unwrap(), &group));
        assert!(Rc::ptr_eq(&e2.coref_group().unwrap(), &group));
    }

    #[test]
    fn test_second_group_rejected() {
        let e1 = entity_over("철수", EntityTag::Person, "PS_NAME");
        let e2 = entity_over("그", EntityTag::Person, "PS_PRONOUN");
        let _group = CoreferenceGroup::new(vec![Rc::clone(&e1), Rc::clone(&e2)]).unwrap();

        let second = CoreferenceGroup::new(vec![e1]);
        assert!(matches!(second, Err(Error::AlreadyLinked { .. })));
    }

    #[test]
    fn test_ungrouped_entity() {
        let e = entity_over("서울", EntityTag::Location, "LC_CITY");
        assert!(e.coref_group().is_none());
        assert_eq!(e.to_string(), "LC_CITY(서울)");
    }
}
