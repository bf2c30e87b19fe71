//! Phrase-structure trees.

use crate::error::{Error, Result};
use crate::tag::PhraseTag;
use crate::word::Word;
use once_cell::unsync::OnceCell;
use std::fmt;
use std::ops::Index;
use std::rc::{Rc, Weak};

/// A phrase-structure node: a labeled constituent with ordered children and
/// an optional terminal word.
///
/// Children are built first and handed to their parent's constructor, which
/// fixes each child's parent back-reference; supplying a terminal word fixes
/// that word's phrase back-reference the same way. Both links are one-time
/// writes, so a node can only ever sit under a single parent and a word under
/// a single phrase.
///
/// Equality compares label, terminal, and children; the parent link and the
/// analyzer's original label are excluded.
#[derive(Debug)]
pub struct SyntaxTree {
    label: PhraseTag,
    original_label: Option<String>,
    terminal: Option<Rc<Word>>,
    children: Vec<Rc<SyntaxTree>>,
    parent: OnceCell<Weak<SyntaxTree>>,
}

impl SyntaxTree {
    /// Create a new phrase node over already-built children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLinked`] if a child already has a parent or the
    /// terminal word already belongs to another phrase.
    pub fn new(
        label: PhraseTag,
        terminal: Option<Rc<Word>>,
        children: Vec<Rc<SyntaxTree>>,
        original_label: Option<String>,
    ) -> Result<Rc<Self>> {
        let node = Rc::new(Self {
            label,
            original_label,
            terminal,
            children,
            parent: OnceCell::new(),
        });
        for child in &node.children {
            child
                .parent
                .set(Rc::downgrade(&node))
                .map_err(|_| Error::already_linked(format!("phrase node {}", child.label), "parent"))?;
        }
        if let Some(word) = &node.terminal {
            word.link_phrase(Rc::downgrade(&node))?;
        }
        Ok(node)
    }

    /// The phrase tag of this node.
    #[must_use]
    pub fn label(&self) -> PhraseTag {
        self.label
    }

    /// The analyzer's unresolved label string, if one was recorded.
    #[must_use]
    pub fn original_label(&self) -> Option<&str> {
        self.original_label.as_deref()
    }

    /// The terminal word of this node, if any.
    #[must_use]
    pub fn terminal(&self) -> Option<Rc<Word>> {
        self.terminal.clone()
    }

    /// The ordered child nodes.
    #[must_use]
    pub fn children(&self) -> &[Rc<SyntaxTree>] {
        &self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if this node has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<SyntaxTree>> {
        self.children.iter()
    }

    /// The parent node, if one has been assigned and is still alive.
    #[must_use]
    pub fn parent(&self) -> Option<Rc<SyntaxTree>> {
        self.parent.get().and_then(Weak::upgrade)
    }

    /// True iff no parent has been assigned.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.get().is_none()
    }

    /// True iff this node has at least one child.
    #[must_use]
    pub fn has_non_terminals(&self) -> bool {
        !self.children.is_empty()
    }

    /// Gather every terminal word in this subtree, sorted ascending by the
    /// word's position in its sentence.
    ///
    /// Subtrees get rebuilt and traversed in arbitrary order, so the gather
    /// sorts rather than trusting traversal order.
    #[must_use]
    pub fn terminals(&self) -> Vec<Rc<Word>> {
        let mut gathered: Vec<Rc<Word>> = self
            .children
            .iter()
            .flat_map(|child| child.terminals())
            .collect();
        if let Some(word) = &self.terminal {
            gathered.push(Rc::clone(word));
        }
        gathered.sort_by_key(|w| w.id());
        gathered
    }

    /// Render an indented dump of this subtree, one node per line, starting
    /// at the given depth.
    #[must_use]
    pub fn tree_string(&self, depth: usize) -> String {
        let mut out = "| ".repeat(depth);
        out.push_str(&self.to_string());
        for child in &self.children {
            out.push('\n');
            out.push_str(&child.tree_string(depth + 1));
        }
        out
    }
}

impl PartialEq for SyntaxTree {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.terminal == other.terminal
            && self.children == other.children
    }
}

impl Eq for SyntaxTree {}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.terminal {
            Some(word) => write!(f, "{}-{}", self.label, word),
            None => write!(f, "{}", self.label),
        }
    }
}

impl Index<usize> for SyntaxTree {
    type Output = Rc<SyntaxTree>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.children[index]
    }
}

impl<'a> IntoIterator for &'a SyntaxTree {
    type Item = &'a Rc<SyntaxTree>;
    type IntoIter = std::slice::Iter<'a, Rc<SyntaxTree>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
