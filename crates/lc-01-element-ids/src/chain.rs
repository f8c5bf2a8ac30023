//! # Leveled Identifier Chain
//!
//! Machinery shared by the geometry and readout identifier hierarchies.
//!
//! ```text
//! CryostatID                      level 0   "C:0"
//! └── ChildId<K>                  level 1   "C:0 T:1"
//!     └── ChildId<K'>             level 2   "C:0 T:1 P:2"
//!         └── ...
//! ```
//!
//! Every identifier below the root is a `ChildId<K>`: the parent identifier
//! value plus one more index. `K` is a zero-size marker naming the level
//! (parent type, index type, tag letter). The two hierarchies are just two
//! sets of markers.
//!
//! ## Validity
//!
//! Only the root carries a validity flag. Every index defaults to the maximum
//! value of its type (`IndexValue::INVALID`), meaning "not set". Nothing
//! stops a caller from storing the sentinel as a real index.
//!
//! ## Ordering
//!
//! Identifiers of the same type order lexicographically from the root down:
//! cryostat first, then the next index, and so on. Equality, ordering and
//! hashing ignore the validity flag.
//!
//! ## Level access
//!
//! `id.index_at::<L>()` reads the index at absolute level `L` and
//! `id.rel_index::<UP>()` the one `UP` levels above the identifier itself.
//! Both are resolved at compile time through the `AtLevel` and `AboveLevel`
//! traits: asking a `TPCID` for level 2 does not compile.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Not;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::IdError;

/// Depth of an identifier in its hierarchy (root = 0).
pub type Level = usize;

/// Integer types usable as identifier indices.
pub trait IndexValue:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Reserved "not set" value: the maximum of the type.
    const INVALID: Self;
}

impl IndexValue for u16 {
    const INVALID: Self = u16::MAX;
}

impl IndexValue for u32 {
    const INVALID: Self = u32::MAX;
}

/// Three-way comparison: -1, 0 or +1 when `a` is smaller, equal or larger.
pub fn three_way_comparison<T: Ord>(a: T, b: T) -> i32 {
    match a.cmp(&b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// =============================================================================
// ELEMENT ID TRAIT
// =============================================================================

/// Interface common to every identifier of both hierarchies.
pub trait ElementId:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::Display + FromStr<Err = IdError>
{
    /// Type of this level's own index.
    type Index: IndexValue;

    /// Depth in the hierarchy.
    const LEVEL: Level;

    /// Letter used in the rendered form (`C`, `T`, `P`, ...).
    const TAG: char;

    /// Name of the element this identifier points to.
    const NAME: &'static str;

    fn is_valid(&self) -> bool;

    fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Sets the validity flag of the root of this identifier.
    fn set_validity(&mut self, valid: bool);

    fn mark_valid(&mut self) {
        self.set_validity(true);
    }

    fn mark_invalid(&mut self) {
        self.set_validity(false);
    }

    /// The index of the most specific level of this identifier.
    fn deepest_index(&self) -> &Self::Index;

    fn deepest_index_mut(&mut self) -> &mut Self::Index;

    /// The cryostat this identifier descends from.
    fn root(&self) -> &CryostatID;

    /// Lexicographic three-way comparison: negative, zero or positive.
    fn three_way_cmp(&self, other: &Self) -> i32;

    /// Value marking this level's index as "not set".
    fn invalid_index() -> Self::Index {
        <Self::Index as IndexValue>::INVALID
    }

    /// Builds the identifier from exactly `LEVEL + 1` `<Tag>:<index>` tokens.
    #[doc(hidden)]
    fn from_tokens(tokens: &[&str]) -> Result<Self, String>;

    /// The ancestor (or self) at absolute level `L`.
    fn id_at<const L: Level>(&self) -> &<Self as AtLevel<L>>::Id
    where
        Self: AtLevel<L>,
    {
        <Self as AtLevel<L>>::at_level(self)
    }

    /// The index at absolute level `L`.
    fn index_at<const L: Level>(&self) -> IndexAt<Self, L>
    where
        Self: AtLevel<L>,
    {
        *self.id_at::<L>().deepest_index()
    }

    /// The ancestor `UP` levels above this identifier (`UP = 0` is self).
    fn id_above<const UP: Level>(&self) -> &<Self as AboveLevel<UP>>::Id
    where
        Self: AboveLevel<UP>,
    {
        <Self as AboveLevel<UP>>::above_level(self)
    }

    /// The index `UP` levels above this identifier's own.
    fn rel_index<const UP: Level>(&self) -> RelIndexAt<Self, UP>
    where
        Self: AboveLevel<UP>,
    {
        *self.id_above::<UP>().deepest_index()
    }
}

/// Identifier types that contain a level `L` ancestor (or are at level `L`).
pub trait AtLevel<const L: Level>: ElementId {
    type Id: ElementId;

    fn at_level(&self) -> &Self::Id;
}

/// Identifier types with an ancestor `UP` levels above them.
pub trait AboveLevel<const UP: Level>: ElementId {
    type Id: ElementId;

    fn above_level(&self) -> &Self::Id;
}

/// Type of the index at absolute level `L` of identifier `T`.
pub type IndexAt<T, const L: Level> = <<T as AtLevel<L>>::Id as ElementId>::Index;

/// Type of the index `UP` levels above identifier `T`.
pub type RelIndexAt<T, const UP: Level> = <<T as AboveLevel<UP>>::Id as ElementId>::Index;

/// Parses the rendered form of any identifier.
pub fn parse_id<T: ElementId>(input: &str) -> Result<T, IdError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let expected = T::LEVEL + 1;
    let reason = if tokens.len() != expected {
        format!(
            "{} ID needs {} tokens, found {}",
            T::NAME,
            expected,
            tokens.len()
        )
    } else {
        match T::from_tokens(&tokens) {
            Ok(id) => return Ok(id),
            Err(reason) => reason,
        }
    };
    Err(IdError::Parse {
        input: input.to_string(),
        reason,
    })
}

fn parse_token<I: IndexValue>(token: &str, tag: char) -> Result<I, String> {
    let (token_tag, value) = token
        .split_once(':')
        .ok_or_else(|| format!("token '{}' is not <tag>:<index>", token))?;
    if token_tag.len() != tag.len_utf8() || !token_tag.starts_with(tag) {
        return Err(format!("expected tag '{}', found '{}'", tag, token_tag));
    }
    value
        .parse()
        .map_err(|_| format!("'{}' is not a valid {} index", value, tag))
}

// =============================================================================
// ROOT: CRYOSTAT
// =============================================================================

/// Index type of a cryostat.
pub type CryostatIndex = u32;

/// Identifier of a cryostat, the root of both hierarchies.
///
/// The default value is invalid, with the index set to the sentinel.
#[derive(Debug, Clone, Copy)]
pub struct CryostatID {
    /// Whether this ID points to a valid element.
    pub valid: bool,
    /// Index of the cryostat.
    pub cryostat: CryostatIndex,
}

impl CryostatID {
    /// A valid identifier of cryostat `cryostat`.
    pub const fn new(cryostat: CryostatIndex) -> Self {
        Self {
            valid: true,
            cryostat,
        }
    }

    pub const fn with_validity(cryostat: CryostatIndex, valid: bool) -> Self {
        Self { valid, cryostat }
    }

    pub fn cryostat(&self) -> CryostatIndex {
        self.cryostat
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        self
    }
}

impl Default for CryostatID {
    fn default() -> Self {
        Self::with_validity(CryostatIndex::INVALID, false)
    }
}

impl ElementId for CryostatID {
    type Index = CryostatIndex;

    const LEVEL: Level = 0;
    const TAG: char = 'C';
    const NAME: &'static str = "cryostat";

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn set_validity(&mut self, valid: bool) {
        self.valid = valid;
    }

    fn deepest_index(&self) -> &CryostatIndex {
        &self.cryostat
    }

    fn deepest_index_mut(&mut self) -> &mut CryostatIndex {
        &mut self.cryostat
    }

    fn root(&self) -> &CryostatID {
        self
    }

    fn three_way_cmp(&self, other: &Self) -> i32 {
        three_way_comparison(self.cryostat, other.cryostat)
    }

    fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
        match tokens {
            [token] => Ok(Self::new(parse_token(token, Self::TAG)?)),
            _ => Err(format!("cryostat ID needs 1 token, found {}", tokens.len())),
        }
    }
}

impl AtLevel<0> for CryostatID {
    type Id = CryostatID;

    fn at_level(&self) -> &CryostatID {
        self
    }
}

impl AboveLevel<0> for CryostatID {
    type Id = CryostatID;

    fn above_level(&self) -> &CryostatID {
        self
    }
}

impl PartialEq for CryostatID {
    fn eq(&self, other: &Self) -> bool {
        self.cryostat == other.cryostat
    }
}

impl Eq for CryostatID {}

impl Hash for CryostatID {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cryostat.hash(state);
    }
}

impl PartialOrd for CryostatID {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CryostatID {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cryostat.cmp(&other.cryostat)
    }
}

impl fmt::Display for CryostatID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Self::TAG, self.cryostat)
    }
}

impl FromStr for CryostatID {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, IdError> {
        parse_id(s)
    }
}

impl Not for CryostatID {
    type Output = bool;

    fn not(self) -> bool {
        !self.valid
    }
}

impl From<CryostatID> for bool {
    fn from(id: CryostatID) -> bool {
        id.valid
    }
}

// =============================================================================
// DERIVED LEVELS
// =============================================================================

/// Describes one level below the root.
pub trait ChildLevel: 'static {
    /// Identifier of the level right above.
    type Parent: ElementId;

    /// Type of the index this level adds.
    type Index: IndexValue;

    const TAG: char;

    const NAME: &'static str;
}

/// Identifier of an element one level below `K::Parent`.
pub struct ChildId<K: ChildLevel> {
    /// Identifier of the containing element.
    pub parent: K::Parent,
    /// Index of the element within its parent.
    pub index: K::Index,
}

impl<K: ChildLevel> ChildId<K> {
    /// Extends `parent` with one more index.
    pub fn from_parent(parent: K::Parent, index: K::Index) -> Self {
        Self { parent, index }
    }

    /// The identifier of the containing element.
    pub fn parent_id(&self) -> &K::Parent {
        &self.parent
    }

    pub fn parent_id_mut(&mut self) -> &mut K::Parent {
        &mut self.parent
    }

    /// This level's own index.
    pub fn index(&self) -> K::Index {
        self.index
    }
}

impl<K: ChildLevel> ElementId for ChildId<K> {
    type Index = K::Index;

    const LEVEL: Level = <K::Parent as ElementId>::LEVEL + 1;
    const TAG: char = K::TAG;
    const NAME: &'static str = K::NAME;

    fn is_valid(&self) -> bool {
        self.parent.is_valid()
    }

    fn set_validity(&mut self, valid: bool) {
        self.parent.set_validity(valid);
    }

    fn deepest_index(&self) -> &K::Index {
        &self.index
    }

    fn deepest_index_mut(&mut self) -> &mut K::Index {
        &mut self.index
    }

    fn root(&self) -> &CryostatID {
        self.parent.root()
    }

    fn three_way_cmp(&self, other: &Self) -> i32 {
        match self.parent.three_way_cmp(&other.parent) {
            0 => three_way_comparison(self.index, other.index),
            parent_order => parent_order,
        }
    }

    fn from_tokens(tokens: &[&str]) -> Result<Self, String> {
        let (last, ancestors) = tokens
            .split_last()
            .ok_or_else(|| format!("missing {} token", K::NAME))?;
        let parent = <K::Parent as ElementId>::from_tokens(ancestors)?;
        Ok(Self::from_parent(parent, parse_token(last, K::TAG)?))
    }
}

impl<K: ChildLevel> Clone for ChildId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ChildLevel> Copy for ChildId<K> {}

impl<K: ChildLevel> Default for ChildId<K> {
    fn default() -> Self {
        Self::from_parent(
            <K::Parent as Default>::default(),
            <K::Index as IndexValue>::INVALID,
        )
    }
}

impl<K: ChildLevel> fmt::Debug for ChildId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME)
            .field("parent", &self.parent)
            .field("index", &self.index)
            .finish()
    }
}

impl<K: ChildLevel> fmt::Display for ChildId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.parent, K::TAG, self.index)
    }
}

impl<K: ChildLevel> FromStr for ChildId<K> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, IdError> {
        parse_id(s)
    }
}

impl<K: ChildLevel> PartialEq for ChildId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.index == other.index
    }
}

impl<K: ChildLevel> Eq for ChildId<K> {}

impl<K: ChildLevel> Hash for ChildId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        self.index.hash(state);
    }
}

impl<K: ChildLevel> PartialOrd for ChildId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: ChildLevel> Ord for ChildId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parent
            .cmp(&other.parent)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl<K: ChildLevel> Not for ChildId<K> {
    type Output = bool;

    fn not(self) -> bool {
        self.is_invalid()
    }
}

impl<K: ChildLevel> From<ChildId<K>> for bool {
    fn from(id: ChildId<K>) -> bool {
        id.is_valid()
    }
}

impl<K: ChildLevel> AsRef<CryostatID> for ChildId<K> {
    fn as_ref(&self) -> &CryostatID {
        self.root()
    }
}

// =============================================================================
// SERDE: identifiers travel as their rendered string
// =============================================================================

impl Serialize for CryostatID {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CryostatID {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

impl<K: ChildLevel> Serialize for ChildId<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, K: ChildLevel> Deserialize<'de> for ChildId<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_id(deserializer)
    }
}

fn deserialize_id<'de, T: ElementId, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_id(&text).map_err(de::Error::custom)
}

// =============================================================================
// LEVEL ACCESS IMPLEMENTATIONS
// =============================================================================

/// Implements `AtLevel` and `AboveLevel` for `ChildId<$marker>` at `$level`,
/// walking up through the parent for each listed ancestor level.
macro_rules! level_access {
    ($marker:ty => $level:literal; $($ancestor:literal),+) => {
        const _: () = assert!(
            <$crate::chain::ChildId<$marker> as $crate::chain::ElementId>::LEVEL == $level
        );

        impl $crate::chain::AtLevel<$level> for $crate::chain::ChildId<$marker> {
            type Id = Self;

            fn at_level(&self) -> &Self {
                self
            }
        }

        impl $crate::chain::AboveLevel<0> for $crate::chain::ChildId<$marker> {
            type Id = Self;

            fn above_level(&self) -> &Self {
                self
            }
        }

        $(
            impl $crate::chain::AtLevel<$ancestor> for $crate::chain::ChildId<$marker> {
                type Id = <<$marker as $crate::chain::ChildLevel>::Parent
                    as $crate::chain::AtLevel<$ancestor>>::Id;

                fn at_level(&self) -> &Self::Id {
                    <<$marker as $crate::chain::ChildLevel>::Parent
                        as $crate::chain::AtLevel<$ancestor>>::at_level(&self.parent)
                }
            }

            impl $crate::chain::AboveLevel<{ $level - $ancestor }>
                for $crate::chain::ChildId<$marker>
            {
                type Id = <Self as $crate::chain::AtLevel<$ancestor>>::Id;

                fn above_level(&self) -> &Self::Id {
                    <Self as $crate::chain::AtLevel<$ancestor>>::at_level(self)
                }
            }
        )+
    };
}

pub(crate) use level_access;
