//! # sejong
//!
//! A layered, cross-referenced annotation graph for one analyzed Korean
//! sentence.
//!
//! External analyzers (taggers, parsers, role labelers, entity and
//! coreference resolvers) produce their results as plain positional data;
//! this crate turns that into a navigable object graph and back.
//!
//! ## Layers
//!
//! | Layer | Types | Produced by |
//! |-------|-------|-------------|
//! | Morphology | [`Morpheme`], [`Word`] | part-of-speech tagging |
//! | Phrase structure | [`SyntaxTree`] | constituency parsing |
//! | Dependencies | [`DepEdge`] | dependency parsing |
//! | Semantic roles | [`RoleEdge`] | role labeling |
//! | Entities | [`Entity`] | named-entity recognition |
//! | Coreference | [`CoreferenceGroup`] | coreference resolution |
//!
//! Every layer cross-references the others: a morpheme knows its word and its
//! entities, a word knows its phrase node and the edges touching it, an
//! entity knows its coreference group. All links are established exactly once
//! while the [`Sentence`] is built; afterwards the graph is read-only, and no
//! mutating operations are exposed.
//!
//! ## Quick Start
//!
//! ```rust
//! use sejong::{Morpheme, PosTag, Sentence, Word};
//!
//! let sentence = Sentence::new(vec![
//!     Word::new("경찰은", vec![
//!         Morpheme::new("경찰", PosTag::Nng)?,
//!         Morpheme::new("은", PosTag::Jx)?,
//!     ])?,
//!     Word::new("도둑을", vec![
//!         Morpheme::new("도둑", PosTag::Nng)?,
//!         Morpheme::new("을", PosTag::Jko)?,
//!     ])?,
//!     Word::new("잡았다", vec![
//!         Morpheme::new("잡", PosTag::Vv)?,
//!         Morpheme::new("았", PosTag::Ep)?,
//!         Morpheme::new("다", PosTag::Ef)?,
//!     ])?,
//! ])?;
//!
//! assert_eq!(sentence.to_string(), "경찰은 도둑을 잡았다");
//! assert_eq!(sentence.nouns().len(), 2);
//! assert_eq!(sentence.verbs().len(), 1);
//! assert_eq!(sentence[2].single_line_string(), "잡/VV+았/EP+다/EF");
//! # Ok::<(), sejong::Error>(())
//! ```
//!
//! ## Exchanging with an analyzer
//!
//! The [`interop`] module defines the analyzer-side form of every layer
//! (plain `serde`-friendly data with positional references) and the two
//! conversions [`Sentence::from_raw`] and [`Sentence::to_raw`], which round-trip.
//!
//! ## Design Philosophy
//!
//! - **Build once, then read-only**: every cross-link is a one-time write
//!   made during construction; a second write is an error, not a mutation.
//! - **Closed vocabularies**: tags are enums resolved by name
//!   ([`tag`]), while string-prefix probes ([`Morpheme::has_tag`]) keep the
//!   conventional lexical-classification idiom working.
//! - **No analysis here**: tokenization, tagging, and parsing live in the
//!   analyzers; this crate only models their output.

#![warn(missing_docs)]

pub mod edge;
pub mod entity;
pub mod error;
pub mod interop;
pub mod morpheme;
pub mod sentence;
pub mod tag;
pub mod tree;
pub mod word;

pub use edge::{DepEdge, Edge, RoleEdge};
pub use entity::{CoreferenceGroup, Entity};
pub use error::{Error, Result};
pub use interop::{
    RawCorefGroup, RawDepEdge, RawEntity, RawMorpheme, RawMorphemeRef, RawRoleEdge, RawSentence,
    RawTree, RawWord,
};
pub use morpheme::Morpheme;
pub use sentence::Sentence;
pub use tag::{DepTag, EntityTag, PhraseTag, PosTag, RoleTag};
pub use tree::SyntaxTree;
pub use word::Word;
