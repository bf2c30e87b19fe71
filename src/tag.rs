//! Tag vocabularies for Korean linguistic annotation.
//!
//! Every annotation layer labels its objects from a closed vocabulary drawn
//! from the Sejong corpus conventions:
//!
//! ```text
//! ┌───────────────┬──────────────────────────┬─────────────────────────────┐
//! │ Vocabulary    │ Labels                   │ Labeled objects             │
//! ├───────────────┼──────────────────────────┼─────────────────────────────┤
//! │ PosTag        │ NNG, VV, JKS, ETM, ...   │ morphemes                   │
//! │ PhraseTag     │ S, NP, VP, DP, ...       │ phrase-structure tree nodes │
//! │ DepTag        │ SBJ, OBJ, MOD, ...       │ dependency edges            │
//! │ RoleTag       │ ARG0, ARGM-LOC, ...      │ semantic-role edges         │
//! │ EntityTag     │ PS, LC, OG, DT, ...      │ named entities (coarse)     │
//! └───────────────┴──────────────────────────┴─────────────────────────────┘
//! ```
//!
//! Analyzers exchange these labels by name, so every vocabulary supports both
//! directions: [`as_label`](PosTag::as_label) renders the conventional string
//! and [`from_label`](PosTag::from_label) resolves one, failing with
//! [`Error::UnknownTag`] on anything outside the vocabulary.
//!
//! Lexical classification code additionally probes tags by *string prefix*
//! (see [`Morpheme::has_tag`](crate::Morpheme::has_tag)); the enums therefore
//! guarantee that `as_label` returns exactly the conventional spelling.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Part-of-speech tags
// =============================================================================

/// Part-of-speech tag of a morpheme (Sejong tagset).
///
/// The first letter encodes the broad class: `N` substantives, `V` predicates,
/// `M` modifiers, `I` interjections, `J` postpositions, `E` endings, `X`
/// affixes and roots, `S` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// General noun (일반명사)
    Nng,
    /// Proper noun (고유명사)
    Nnp,
    /// Bound noun (의존명사)
    Nnb,
    /// Numeral (수사)
    Nr,
    /// Pronoun (대명사)
    Np,
    /// Verb (동사)
    Vv,
    /// Adjective (형용사)
    Va,
    /// Auxiliary predicate (보조용언)
    Vx,
    /// Positive copula "-이다" (긍정지정사)
    Vcp,
    /// Negative copula "아니다" (부정지정사)
    Vcn,
    /// Determiner (관형사)
    Mm,
    /// General adverb (일반부사)
    Mag,
    /// Conjunctive adverb (접속부사)
    Maj,
    /// Interjection (감탄사)
    Ic,
    /// Subject case marker (주격조사)
    Jks,
    /// Complement case marker (보격조사)
    Jkc,
    /// Adnominal case marker (관형격조사)
    Jkg,
    /// Object case marker (목적격조사)
    Jko,
    /// Adverbial case marker (부사격조사)
    Jkb,
    /// Vocative case marker (호격조사)
    Jkv,
    /// Quotative case marker (인용격조사)
    Jkq,
    /// Auxiliary postposition (보조사)
    Jx,
    /// Conjunctive postposition (접속조사)
    Jc,
    /// Pre-final ending (선어말어미)
    Ep,
    /// Final ending (종결어미)
    Ef,
    /// Connective ending (연결어미)
    Ec,
    /// Noun-derivational ending (명사형 전성어미)
    Etn,
    /// Adnominal-derivational ending (관형형 전성어미)
    Etm,
    /// Prefix (체언 접두사)
    Xpn,
    /// Noun-derivational suffix (명사 파생 접미사)
    Xsn,
    /// Verb-derivational suffix (동사 파생 접미사)
    Xsv,
    /// Adjective-derivational suffix (형용사 파생 접미사)
    Xsa,
    /// Adverb-derivational suffix (부사 파생 접미사)
    Xsm,
    /// Root (어근)
    Xr,
    /// Sentence-final punctuation (마침표 따위)
    Sf,
    /// Separating punctuation (쉼표 따위)
    Sp,
    /// Paired symbol (따옴표, 괄호)
    Ss,
    /// Ellipsis (줄임표)
    Se,
    /// Attachment symbol (붙임표)
    So,
    /// Other symbol (기타 기호)
    Sw,
    /// Unanalyzed, guessed noun (명사 추정 범주)
    Nf,
    /// Unanalyzed, guessed predicate (용언 추정 범주)
    Nv,
    /// Unanalyzed (분석 불능)
    Na,
    /// Foreign word (외국어)
    Sl,
    /// Chinese character (한자)
    Sh,
    /// Number (숫자)
    Sn,
}

impl PosTag {
    /// Every tag in the vocabulary, in conventional listing order.
    pub const ALL: &'static [PosTag] = &[
        PosTag::Nng,
        PosTag::Nnp,
        PosTag::Nnb,
        PosTag::Nr,
        PosTag::Np,
        PosTag::Vv,
        PosTag::Va,
        PosTag::Vx,
        PosTag::Vcp,
        PosTag::Vcn,
        PosTag::Mm,
        PosTag::Mag,
        PosTag::Maj,
        PosTag::Ic,
        PosTag::Jks,
        PosTag::Jkc,
        PosTag::Jkg,
        PosTag::Jko,
        PosTag::Jkb,
        PosTag::Jkv,
        PosTag::Jkq,
        PosTag::Jx,
        PosTag::Jc,
        PosTag::Ep,
        PosTag::Ef,
        PosTag::Ec,
        PosTag::Etn,
        PosTag::Etm,
        PosTag::Xpn,
        PosTag::Xsn,
        PosTag::Xsv,
        PosTag::Xsa,
        PosTag::Xsm,
        PosTag::Xr,
        PosTag::Sf,
        PosTag::Sp,
        PosTag::Ss,
        PosTag::Se,
        PosTag::So,
        PosTag::Sw,
        PosTag::Nf,
        PosTag::Nv,
        PosTag::Na,
        PosTag::Sl,
        PosTag::Sh,
        PosTag::Sn,
    ];

    /// Convert to the conventional label string.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            PosTag::Nng => "NNG",
            PosTag::Nnp => "NNP",
            PosTag::Nnb => "NNB",
            PosTag::Nr => "NR",
            PosTag::Np => "NP",
            PosTag::Vv => "VV",
            PosTag::Va => "VA",
            PosTag::Vx => "VX",
            PosTag::Vcp => "VCP",
            PosTag::Vcn => "VCN",
            PosTag::Mm => "MM",
            PosTag::Mag => "MAG",
            PosTag::Maj => "MAJ",
            PosTag::Ic => "IC",
            PosTag::Jks => "JKS",
            PosTag::Jkc => "JKC",
            PosTag::Jkg => "JKG",
            PosTag::Jko => "JKO",
            PosTag::Jkb => "JKB",
            PosTag::Jkv => "JKV",
            PosTag::Jkq => "JKQ",
            PosTag::Jx => "JX",
            PosTag::Jc => "JC",
            PosTag::Ep => "EP",
            PosTag::Ef => "EF",
            PosTag::Ec => "EC",
            PosTag::Etn => "ETN",
            PosTag::Etm => "ETM",
            PosTag::Xpn => "XPN",
            PosTag::Xsn => "XSN",
            PosTag::Xsv => "XSV",
            PosTag::Xsa => "XSA",
            PosTag::Xsm => "XSM",
            PosTag::Xr => "XR",
            PosTag::Sf => "SF",
            PosTag::Sp => "SP",
            PosTag::Ss => "SS",
            PosTag::Se => "SE",
            PosTag::So => "SO",
            PosTag::Sw => "SW",
            PosTag::Nf => "NF",
            PosTag::Nv => "NV",
            PosTag::Na => "NA",
            PosTag::Sl => "SL",
            PosTag::Sh => "SH",
            PosTag::Sn => "SN",
        }
    }

    /// Resolve a label string against the vocabulary.
    pub fn from_label(label: &str) -> Result<Self> {
        PosTag::ALL
            .iter()
            .find(|t| t.as_label().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| Error::unknown_tag("part-of-speech", label))
    }

    /// Is this a substantive (체언: noun, numeral, pronoun)?
    #[must_use]
    pub const fn is_noun(&self) -> bool {
        matches!(
            self,
            PosTag::Nng | PosTag::Nnp | PosTag::Nnb | PosTag::Nr | PosTag::Np
        )
    }

    /// Is this a predicate (용언: verb, adjective, auxiliary, copula)?
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        matches!(
            self,
            PosTag::Vv | PosTag::Va | PosTag::Vx | PosTag::Vcp | PosTag::Vcn
        )
    }

    /// Is this a modifier (수식언: determiner or adverb)?
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(self, PosTag::Mm | PosTag::Mag | PosTag::Maj)
    }

    /// Is this a postposition (관계언: josa)?
    #[must_use]
    pub const fn is_josa(&self) -> bool {
        matches!(
            self,
            PosTag::Jks
                | PosTag::Jkc
                | PosTag::Jkg
                | PosTag::Jko
                | PosTag::Jkb
                | PosTag::Jkv
                | PosTag::Jkq
                | PosTag::Jx
                | PosTag::Jc
        )
    }

    /// Is this a verbal ending (어미)?
    #[must_use]
    pub const fn is_ending(&self) -> bool {
        matches!(
            self,
            PosTag::Ep | PosTag::Ef | PosTag::Ec | PosTag::Etn | PosTag::Etm
        )
    }

    /// Is this an affix or root (접사/어근)?
    #[must_use]
    pub const fn is_affix(&self) -> bool {
        matches!(
            self,
            PosTag::Xpn | PosTag::Xsn | PosTag::Xsv | PosTag::Xsa | PosTag::Xsm | PosTag::Xr
        )
    }

    /// Is this a symbol, foreign-script, or number tag (기호)?
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(
            self,
            PosTag::Sf
                | PosTag::Sp
                | PosTag::Ss
                | PosTag::Se
                | PosTag::So
                | PosTag::Sw
                | PosTag::Sl
                | PosTag::Sh
                | PosTag::Sn
        )
    }

    /// Is this an unanalyzed guess (미분석 범주)?
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, PosTag::Nf | PosTag::Nv | PosTag::Na)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for PosTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PosTag::from_label(s)
    }
}

// =============================================================================
// Phrase tags
// =============================================================================

/// Phrase tag of a syntax-tree node (Sejong treebank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhraseTag {
    /// Sentence (문장)
    S,
    /// Noun phrase (체언 구)
    Np,
    /// Verb phrase (용언 구)
    Vp,
    /// Copula phrase (긍정지정사 구)
    Vnp,
    /// Adverb phrase (부사 구)
    Ap,
    /// Adnominal phrase (관형사 구)
    Dp,
    /// Interjection phrase (감탄사 구)
    Ip,
    /// Pseudo phrase (의사 구)
    X,
    /// Left-attached symbol (왼쪽 부호)
    L,
    /// Right-attached symbol (오른쪽 부호)
    R,
    /// Quotation clause (인용절)
    Q,
}

impl PhraseTag {
    /// Every tag in the vocabulary.
    pub const ALL: &'static [PhraseTag] = &[
        PhraseTag::S,
        PhraseTag::Np,
        PhraseTag::Vp,
        PhraseTag::Vnp,
        PhraseTag::Ap,
        PhraseTag::Dp,
        PhraseTag::Ip,
        PhraseTag::X,
        PhraseTag::L,
        PhraseTag::R,
        PhraseTag::Q,
    ];

    /// Convert to the conventional label string.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            PhraseTag::S => "S",
            PhraseTag::Np => "NP",
            PhraseTag::Vp => "VP",
            PhraseTag::Vnp => "VNP",
            PhraseTag::Ap => "AP",
            PhraseTag::Dp => "DP",
            PhraseTag::Ip => "IP",
            PhraseTag::X => "X",
            PhraseTag::L => "L",
            PhraseTag::R => "R",
            PhraseTag::Q => "Q",
        }
    }

    /// Resolve a label string against the vocabulary.
    pub fn from_label(label: &str) -> Result<Self> {
        PhraseTag::ALL
            .iter()
            .find(|t| t.as_label().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| Error::unknown_tag("phrase", label))
    }
}

impl fmt::Display for PhraseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for PhraseTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PhraseTag::from_label(s)
    }
}

// =============================================================================
// Dependency tags
// =============================================================================

/// Functional tag of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepTag {
    /// Subject (주어)
    Sbj,
    /// Object (목적어)
    Obj,
    /// Complement (보어)
    Cmp,
    /// Adnominal modifier (체언 수식어)
    Mod,
    /// Adverbial modifier (용언 수식어)
    Ajt,
    /// Conjunction (접속)
    Cnj,
    /// Interjection (삽입)
    Int,
    /// Parenthetical (삽입구)
    Prn,
    /// Undefined relation
    Undef,
}

impl DepTag {
    /// Every tag in the vocabulary.
    pub const ALL: &'static [DepTag] = &[
        DepTag::Sbj,
        DepTag::Obj,
        DepTag::Cmp,
        DepTag::Mod,
        DepTag::Ajt,
        DepTag::Cnj,
        DepTag::Int,
        DepTag::Prn,
        DepTag::Undef,
    ];

    /// Convert to the conventional label string.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            DepTag::Sbj => "SBJ",
            DepTag::Obj => "OBJ",
            DepTag::Cmp => "CMP",
            DepTag::Mod => "MOD",
            DepTag::Ajt => "AJT",
            DepTag::Cnj => "CNJ",
            DepTag::Int => "INT",
            DepTag::Prn => "PRN",
            DepTag::Undef => "UNDEF",
        }
    }

    /// Resolve a label string against the vocabulary.
    pub fn from_label(label: &str) -> Result<Self> {
        DepTag::ALL
            .iter()
            .find(|t| t.as_label().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| Error::unknown_tag("dependency", label))
    }
}

impl fmt::Display for DepTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for DepTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DepTag::from_label(s)
    }
}

// =============================================================================
// Semantic-role tags
// =============================================================================

/// Label of a semantic-role edge (PropBank-style numbered arguments plus
/// `ARGM` adjunct subtypes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleTag {
    /// Agent-like argument
    Arg0,
    /// Patient-like argument
    Arg1,
    /// Instrument / benefactive argument
    Arg2,
    /// Starting point argument
    Arg3,
    /// Secondary agency argument
    Arga,
    /// Location adjunct
    #[serde(rename = "ARGM-LOC")]
    ArgmLoc,
    /// Direction adjunct
    #[serde(rename = "ARGM-DIR")]
    ArgmDir,
    /// Condition adjunct
    #[serde(rename = "ARGM-CND")]
    ArgmCnd,
    /// Manner adjunct
    #[serde(rename = "ARGM-MNR")]
    ArgmMnr,
    /// Temporal adjunct
    #[serde(rename = "ARGM-TMP")]
    ArgmTmp,
    /// Extent adjunct
    #[serde(rename = "ARGM-EXT")]
    ArgmExt,
    /// Secondary predication adjunct
    #[serde(rename = "ARGM-PRD")]
    ArgmPrd,
    /// Purpose adjunct
    #[serde(rename = "ARGM-PRP")]
    ArgmPrp,
    /// Cause adjunct
    #[serde(rename = "ARGM-CAU")]
    ArgmCau,
    /// Discourse adjunct
    #[serde(rename = "ARGM-DIS")]
    ArgmDis,
    /// Adverbial adjunct
    #[serde(rename = "ARGM-ADV")]
    ArgmAdv,
    /// Negation adjunct
    #[serde(rename = "ARGM-NEG")]
    ArgmNeg,
    /// Instrument adjunct
    #[serde(rename = "ARGM-INS")]
    ArgmIns,
}

impl RoleTag {
    /// Every tag in the vocabulary.
    pub const ALL: &'static [RoleTag] = &[
        RoleTag::Arg0,
        RoleTag::Arg1,
        RoleTag::Arg2,
        RoleTag::Arg3,
        RoleTag::Arga,
        RoleTag::ArgmLoc,
        RoleTag::ArgmDir,
        RoleTag::ArgmCnd,
        RoleTag::ArgmMnr,
        RoleTag::ArgmTmp,
        RoleTag::ArgmExt,
        RoleTag::ArgmPrd,
        RoleTag::ArgmPrp,
        RoleTag::ArgmCau,
        RoleTag::ArgmDis,
        RoleTag::ArgmAdv,
        RoleTag::ArgmNeg,
        RoleTag::ArgmIns,
    ];

    /// Convert to the conventional label string.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            RoleTag::Arg0 => "ARG0",
            RoleTag::Arg1 => "ARG1",
            RoleTag::Arg2 => "ARG2",
            RoleTag::Arg3 => "ARG3",
            RoleTag::Arga => "ARGA",
            RoleTag::ArgmLoc => "ARGM-LOC",
            RoleTag::ArgmDir => "ARGM-DIR",
            RoleTag::ArgmCnd => "ARGM-CND",
            RoleTag::ArgmMnr => "ARGM-MNR",
            RoleTag::ArgmTmp => "ARGM-TMP",
            RoleTag::ArgmExt => "ARGM-EXT",
            RoleTag::ArgmPrd => "ARGM-PRD",
            RoleTag::ArgmPrp => "ARGM-PRP",
            RoleTag::ArgmCau => "ARGM-CAU",
            RoleTag::ArgmDis => "ARGM-DIS",
            RoleTag::ArgmAdv => "ARGM-ADV",
            RoleTag::ArgmNeg => "ARGM-NEG",
            RoleTag::ArgmIns => "ARGM-INS",
        }
    }

    /// Is this a numbered (core) argument rather than an `ARGM` adjunct?
    #[must_use]
    pub const fn is_core(&self) -> bool {
        matches!(
            self,
            RoleTag::Arg0 | RoleTag::Arg1 | RoleTag::Arg2 | RoleTag::Arg3 | RoleTag::Arga
        )
    }

    /// Resolve a label string against the vocabulary.
    pub fn from_label(label: &str) -> Result<Self> {
        RoleTag::ALL
            .iter()
            .find(|t| t.as_label().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| Error::unknown_tag("semantic-role", label))
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for RoleTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RoleTag::from_label(s)
    }
}

// =============================================================================
// Entity tags
// =============================================================================

/// Coarse classification of a named entity.
///
/// Fine-grained labels are free-form strings whose prefix is one of these
/// codes (e.g. `"OG_COMPANY"`); [`EntityTag::from_label`] accepts either the
/// bare code or such a prefixed fine label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    /// Person (PS)
    #[serde(rename = "PS")]
    Person,
    /// Location (LC)
    #[serde(rename = "LC")]
    Location,
    /// Organization (OG)
    #[serde(rename = "OG")]
    Organization,
    /// Artifact (AF)
    #[serde(rename = "AF")]
    Artifact,
    /// Date (DT)
    #[serde(rename = "DT")]
    Date,
    /// Time (TI)
    #[serde(rename = "TI")]
    Time,
    /// Civilization / culture (CV)
    #[serde(rename = "CV")]
    Civilization,
    /// Animal (AM)
    #[serde(rename = "AM")]
    Animal,
    /// Plant (PT)
    #[serde(rename = "PT")]
    Plant,
    /// Quantity (QT)
    #[serde(rename = "QT")]
    Quantity,
    /// Study field (FD)
    #[serde(rename = "FD")]
    Field,
    /// Theory (TR)
    #[serde(rename = "TR")]
    Theory,
    /// Event (EV)
    #[serde(rename = "EV")]
    Event,
    /// Material (MT)
    #[serde(rename = "MT")]
    Material,
    /// Term (TM)
    #[serde(rename = "TM")]
    Term,
}

impl EntityTag {
    /// Every tag in the vocabulary.
    pub const ALL: &'static [EntityTag] = &[
        EntityTag::Person,
        EntityTag::Location,
        EntityTag::Organization,
        EntityTag::Artifact,
        EntityTag::Date,
        EntityTag::Time,
        EntityTag::Civilization,
        EntityTag::Animal,
        EntityTag::Plant,
        EntityTag::Quantity,
        EntityTag::Field,
        EntityTag::Theory,
        EntityTag::Event,
        EntityTag::Material,
        EntityTag::Term,
    ];

    /// Convert to the conventional two-letter code.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            EntityTag::Person => "PS",
            EntityTag::Location => "LC",
            EntityTag::Organization => "OG",
            EntityTag::Artifact => "AF",
            EntityTag::Date => "DT",
            EntityTag::Time => "TI",
            EntityTag::Civilization => "CV",
            EntityTag::Animal => "AM",
            EntityTag::Plant => "PT",
            EntityTag::Quantity => "QT",
            EntityTag::Field => "FD",
            EntityTag::Theory => "TR",
            EntityTag::Event => "EV",
            EntityTag::Material => "MT",
            EntityTag::Term => "TM",
        }
    }

    /// Resolve a coarse code or a prefixed fine label (`"OG_COMPANY"`).
    pub fn from_label(label: &str) -> Result<Self> {
        let coarse = label.split('_').next().unwrap_or(label);
        EntityTag::ALL
            .iter()
            .find(|t| t.as_label().eq_ignore_ascii_case(coarse))
            .copied()
            .ok_or_else(|| Error::unknown_tag("entity", label))
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl FromStr for EntityTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EntityTag::from_label(s)
    }
}

// =============================================================================
// Tests
// =============================================================================
