#![forbid(unsafe_code)]

//! Pure operations over an element's class list.
//!
//! A [`ClassSet`] mirrors a DOM `classList`: tokens in insertion order,
//! each at most once. Retiering produces a new set that the host writes
//! back in one assignment.

use crate::tier::{Tier, TierList};

/// Ordered, duplicate-free class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: Vec<String>,
}

impl ClassSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse a `class` attribute value. Splits on ASCII whitespace; later
    /// repeats of a token are dropped.
    #[must_use]
    pub fn parse(attribute: &str) -> Self {
        let mut set = Self::new();
        for token in attribute.split_ascii_whitespace() {
            set.insert(token);
        }
        set
    }

    /// Append `token` unless already present. Returns whether it was added.
    pub fn insert(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_owned());
        true
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Serialize back to a `class` attribute value.
    #[must_use]
    pub fn to_class_attribute(&self) -> String {
        self.tokens.join(" ")
    }

    /// Position in `tiers` of the first listed tier present in this set.
    ///
    /// Scans in list order, so when several tier labels are present the
    /// smallest listed one wins.
    #[must_use]
    pub fn find_tier(&self, tiers: &TierList) -> Option<usize> {
        tiers.class_names().position(|name| self.contains(name))
    }

    /// Drop every label of `tiers`, then append `tier`'s label.
    ///
    /// Classes outside the list keep their relative order. The result holds
    /// exactly one label from `tiers` when `tier` is listed.
    #[must_use]
    pub fn with_tier(&self, tier: Tier, tiers: &TierList) -> Self {
        let mut tokens: Vec<String> = self
            .tokens
            .iter()
            .filter(|t| !tiers.class_names().any(|name| name == t.as_str()))
            .cloned()
            .collect();
        tokens.push(tier.class_name().to_owned());
        Self { tokens }
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
