#![forbid(unsafe_code)]

//! The font size controller.
//!
//! Holds a bounded index into a [`TierList`] and rewrites the target
//! element's classes whenever the index moves. Stepping past either end of
//! the list is a silent clamp: the index and the element stay as they are.

use crate::class_set::ClassSet;
use crate::tier::{Tier, TierList};

/// Element whose class list the controller reads and rewrites.
pub trait ClassTarget {
    /// Current `class` attribute value.
    fn class_attribute(&self) -> String;

    /// Replace the whole `class` attribute value.
    fn set_class_attribute(&mut self, value: &str);
}

/// In-memory [`ClassTarget`] for native hosts and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    class: String,
    writes: usize,
}

impl MemoryTarget {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            writes: 0,
        }
    }

    /// Number of `set_class_attribute` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn classes(&self) -> ClassSet {
        ClassSet::parse(&self.class)
    }
}

impl ClassTarget for MemoryTarget {
    fn class_attribute(&self) -> String {
        self.class.clone()
    }

    fn set_class_attribute(&mut self, value: &str) {
        value.clone_into(&mut self.class);
        self.writes += 1;
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for &mut T {
    fn class_attribute(&self) -> String {
        (**self).class_attribute()
    }

    fn set_class_attribute(&mut self, value: &str) {
        (**self).set_class_attribute(value);
    }
}

/// Outcome of an increase or decrease request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The index moved and the new tier was applied.
    Moved { from: usize, to: usize },
    /// Already at the boundary; nothing changed.
    Clamped,
}

impl Step {
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Steps the target element through a tier list.
#[derive(Debug)]
pub struct FontSizeController<T> {
    tiers: TierList,
    index: usize,
    target: T,
}

impl<T: ClassTarget> FontSizeController<T> {
    /// Attach to `target`, taking the starting index from the tier it
    /// already carries (see [`detect_index`]). The element is not rewritten
    /// until the first successful step or an explicit [`apply`](Self::apply).
    pub fn new(tiers: TierList, target: T) -> Self {
        let index = detect_index(&tiers, &ClassSet::parse(&target.class_attribute()));
        crate::debug!(index, "font size controller attached");
        Self {
            tiers,
            index,
            target,
        }
    }

    /// Controller over [`TierList::SHIPPED`].
    pub fn shipped(target: T) -> Self {
        Self::new(TierList::SHIPPED, target)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tiers
            .get(self.index)
            .unwrap_or_else(|| self.tiers.default_tier())
    }

    #[must_use]
    pub const fn tiers(&self) -> &TierList {
        &self.tiers
    }

    #[must_use]
    pub fn can_increase(&self) -> bool {
        self.index < self.tiers.last_index()
    }

    #[must_use]
    pub const fn can_decrease(&self) -> bool {
        self.index > 0
    }

    /// Write the current tier to the target, removing any other listed tier.
    pub fn apply(&mut self) {
        let current = ClassSet::parse(&self.target.class_attribute());
        let next = current.with_tier(self.tier(), &self.tiers);
        self.target.set_class_attribute(&next.to_class_attribute());
    }

    pub fn increase(&mut self) -> Step {
        if !self.can_increase() {
            crate::trace!(index = self.index, "font size at maximum");
            return Step::Clamped;
        }
        self.step_to(self.index + 1)
    }

    pub fn decrease(&mut self) -> Step {
        if !self.can_decrease() {
            crate::trace!(index = self.index, "font size at minimum");
            return Step::Clamped;
        }
        self.step_to(self.index - 1)
    }

    fn step_to(&mut self, to: usize) -> Step {
        let from = self.index;
        self.index = to;
        self.apply();
        crate::debug!(from, to, tier = %self.tier(), "font size changed");
        Step::Moved { from, to }
    }

    #[must_use]
    pub const fn target(&self) -> &T {
        &self.target
    }
}

/// Starting index for an element with class list `classes`: the first
/// listed tier it carries, else the list's default.
#[must_use]
pub fn detect_index(tiers: &TierList, classes: &ClassSet) -> usize {
    match classes.find_tier(tiers) {
        Some(index) => index,
        None => {
            crate::info!(
                default = %tiers.default_tier(),
                "no font size class on target, using default"
            );
            tiers.default_index()
        }
    }
}
