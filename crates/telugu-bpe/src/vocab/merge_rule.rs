//! # Merge Rules

use core::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::types::{Pair, Symbol, TBHashSet, concat_pair};

/// A learned `(left, right) -> merged` rule.
///
/// `merged` is always the concatenation of `left` and `right`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeRule {
    left: Symbol,
    right: Symbol,
    merged: Symbol,
}

impl MergeRule {
    /// Build the rule merging `left` and `right`.
    pub fn new<L: Into<Symbol>, R: Into<Symbol>>(
        left: L,
        right: R,
    ) -> Self {
        let left = left.into();
        let right = right.into();
        let merged = concat_pair(&left, &right);
        Self {
            left,
            right,
            merged,
        }
    }

    /// Build the rule for a pair.
    pub fn from_pair(pair: Pair) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// Parse a persisted ``"{left} {right}" -> merged`` entry.
    ///
    /// The key must hold exactly two non-empty symbols separated by one space,
    /// and `merged` must be their concatenation.
    pub fn parse_entry(
        key: &str,
        merged: &str,
    ) -> Result<Self, String> {
        let mut parts = key.split(' ');
        let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("merge key {key:?} is not two space-separated symbols"));
        };
        if left.is_empty() || right.is_empty() {
            return Err(format!("merge key {key:?} has an empty symbol"));
        }

        let rule = Self::new(left, right);
        if rule.merged != merged {
            return Err(format!(
                "merge {key:?} maps to {merged:?}, expected {:?}",
                rule.merged
            ));
        }
        Ok(rule)
    }

    /// The left symbol.
    pub fn left(&self) -> &Symbol {
        &self.left
    }

    /// The right symbol.
    pub fn right(&self) -> &Symbol {
        &self.right
    }

    /// The merged symbol.
    pub fn merged(&self) -> &Symbol {
        &self.merged
    }

    /// The `(left, right)` pair.
    pub fn pair(&self) -> Pair {
        (self.left.clone(), self.right.clone())
    }

    /// The persisted key, ``"{left} {right}"``.
    pub fn key(&self) -> String {
        format!("{} {}", self.left, self.right)
    }
}

impl fmt::Display for MergeRule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} + {} -> {}", self.left, self.right, self.merged)
    }
}

/// The ordered list of merge rules.
///
/// Rule `i` may consume a symbol only created by an earlier rule;
/// so rules are kept, persisted and replayed in learning order.
///
/// Serialized as a map of ``"{left} {right}"`` keys to merged symbols,
/// in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeList {
    rules: Vec<MergeRule>,
}

impl MergeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
        }
    }

    /// Append a rule.
    pub fn push(
        &mut self,
        rule: MergeRule,
    ) {
        self.rules.push(rule);
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// View the rules, in learning order.
    pub fn as_slice(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Iterate the rules, in learning order.
    pub fn iter(&self) -> core::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }
}

impl From<Vec<MergeRule>> for MergeList {
    fn from(rules: Vec<MergeRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<MergeRule> for MergeList {
    fn from_iter<I: IntoIterator<Item = MergeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MergeList {
    type Item = &'a MergeRule;
    type IntoIter = core::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl Serialize for MergeList {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.key(), rule.merged())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MergeList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MergeListVisitor)
    }
}

/// Reads map entries in document order.
struct MergeListVisitor;

impl<'de> Visitor<'de> for MergeListVisitor {
    type Value = MergeList;

    fn expecting(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("a map of \"left right\" keys to merged symbols")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> Result<MergeList, A::Error> {
        let mut rules = MergeList::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen: TBHashSet<Pair> = TBHashSet::default();

        while let Some((key, merged)) = access.next_entry::<String, String>()? {
            let rule = MergeRule::parse_entry(&key, &merged).map_err(de::Error::custom)?;
            if !seen.insert(rule.pair()) {
                return Err(de::Error::custom(format!("duplicate merge key {key:?}")));
            }
            rules.push(rule);
        }

        Ok(rules)
    }
}
