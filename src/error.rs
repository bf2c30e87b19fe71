//! Error types for sejong.

use thiserror::Error;

/// Result type for sejong operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sejong operations.
///
/// Every failure is synchronous and signals a caller or integration bug:
/// the annotation graph has no I/O of its own and nothing here is retryable.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required field was missing or empty at construction.
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),

    /// A one-time back-reference was written a second time.
    #[error("{what} is already linked to a {to}")]
    AlreadyLinked {
        /// Short description of the object being linked.
        what: String,
        /// The kind of object it is already linked to.
        to: &'static str,
    },

    /// A derived sentence collection was set while already populated.
    #[error("sentence layer already populated: {0}")]
    LayerFilled(&'static str),

    /// A tag name did not resolve against its closed vocabulary.
    #[error("unknown {category} tag: {label:?}")]
    UnknownTag {
        /// Vocabulary the lookup ran against.
        category: &'static str,
        /// The label that failed to resolve.
        label: String,
    },

    /// A word reference pointed outside the sentence.
    #[error("word reference {index} out of range for sentence of {len} words")]
    WordIndex {
        /// The referenced position.
        index: usize,
        /// Number of words in the sentence.
        len: usize,
    },

    /// A morpheme reference pointed outside its word.
    #[error("morpheme reference {index} out of range in word {word}")]
    MorphemeIndex {
        /// Position of the containing word.
        word: usize,
        /// The referenced morpheme position.
        index: usize,
    },

    /// A coreference member did not match any entity in the sentence.
    #[error("no entity in this sentence matches {0:?}")]
    UnknownEntity(String),

    /// An object that should belong to the sentence has no position in it.
    #[error("{0} is not attached to this sentence")]
    Detached(&'static str),
}

impl Error {
    /// Create an empty-field error.
    pub fn empty_field(field: &'static str) -> Self {
        Error::EmptyField(field)
    }

    /// Create an already-linked error.
    pub fn already_linked(what: impl Into<String>, to: &'static str) -> Self {
        Error::AlreadyLinked {
            what: what.into(),
            to,
        }
    }

    /// Create an unknown-tag error.
    pub fn unknown_tag(category: &'static str, label: impl Into<String>) -> Self {
        Error::UnknownTag {
            category,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::empty_field("word morphemes");
        assert_eq!(err.to_string(), "required field is empty: word morphemes");

        let err = Error::already_linked("word '집에'", "phrase");
        assert_eq!(err.to_string(), "word '집에' is already linked to a phrase");

        let err = Error::unknown_tag("part-of-speech", "QQQ");
        assert_eq!(err.to_string(), "unknown part-of-speech tag: \"QQQ\"");
    }
}
