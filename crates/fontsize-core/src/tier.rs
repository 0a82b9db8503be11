#![forbid(unsafe_code)]

//! Text size tiers and the ordered list the controller steps through.
//!
//! [`Tier`] names every step of the utility-class text scale the page
//! stylesheet defines. A [`TierList`] is the enabled subset, smallest to
//! largest, plus the tier used when the page starts without one applied.

use std::borrow::Cow;
use std::fmt;

/// One discrete font size step, identified by its utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
    Xl9,
}

impl Tier {
    /// Every tier, smallest first.
    pub const ALL: [Tier; 13] = [
        Tier::Xs,
        Tier::Sm,
        Tier::Base,
        Tier::Lg,
        Tier::Xl,
        Tier::Xl2,
        Tier::Xl3,
        Tier::Xl4,
        Tier::Xl5,
        Tier::Xl6,
        Tier::Xl7,
        Tier::Xl8,
        Tier::Xl9,
    ];

    /// Class label applied to the target element.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Tier::Xs => "text-xs",
            Tier::Sm => "text-sm",
            Tier::Base => "text-base",
            Tier::Lg => "text-lg",
            Tier::Xl => "text-xl",
            Tier::Xl2 => "text-2xl",
            Tier::Xl3 => "text-3xl",
            Tier::Xl4 => "text-4xl",
            Tier::Xl5 => "text-5xl",
            Tier::Xl6 => "text-6xl",
            Tier::Xl7 => "text-7xl",
            Tier::Xl8 => "text-8xl",
            Tier::Xl9 => "text-9xl",
        }
    }

    /// Rendered font size in CSS pixels.
    #[must_use]
    pub const fn px(self) -> u16 {
        match self {
            Tier::Xs => 12,
            Tier::Sm => 14,
            Tier::Base => 16,
            Tier::Lg => 18,
            Tier::Xl => 20,
            Tier::Xl2 => 24,
            Tier::Xl3 => 30,
            Tier::Xl4 => 36,
            Tier::Xl5 => 48,
            Tier::Xl6 => 60,
            Tier::Xl7 => 72,
            Tier::Xl8 => 96,
            Tier::Xl9 => 128,
        }
    }

    /// Reverse of [`Tier::class_name`]. Exact, case-sensitive match.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.class_name() == name)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Reasons a tier list is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierListError {
    /// The list has no tiers.
    Empty,
    /// `tiers[index]` is not strictly larger than `tiers[index - 1]`.
    NotAscending { index: usize },
    /// The default tier does not appear in the list.
    DefaultNotListed(Tier),
}

impl fmt::Display for TierListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tier list is empty"),
            Self::NotAscending { index } => {
                write!(f, "tier at position {index} is not larger than its predecessor")
            }
            Self::DefaultNotListed(tier) => write!(f, "default tier {tier} is not in the list"),
        }
    }
}

impl std::error::Error for TierListError {}

const SHIPPED_TIERS: [Tier; 6] = [
    Tier::Xl,
    Tier::Xl2,
    Tier::Xl3,
    Tier::Xl4,
    Tier::Xl5,
    Tier::Xl6,
];

/// Ordered, duplicate-free tier list with a designated default.
///
/// Invariants: non-empty, strictly increasing by [`Tier::px`], and
/// `default_index < len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierList {
    tiers: Cow<'static, [Tier]>,
    default_index: usize,
}

impl TierList {
    /// The list the page ships with: `text-xl` through `text-6xl`,
    /// defaulting to `text-4xl`.
    pub const SHIPPED: TierList = TierList {
        tiers: Cow::Borrowed(&SHIPPED_TIERS),
        default_index: 3,
    };

    /// Build a list from `tiers` (smallest first) and its `default`.
    pub fn new(tiers: &[Tier], default: Tier) -> Result<Self, TierListError> {
        if tiers.is_empty() {
            return Err(TierListError::Empty);
        }
        if let Some(index) = (1..tiers.len()).find(|&i| tiers[i].px() <= tiers[i - 1].px()) {
            return Err(TierListError::NotAscending { index });
        }
        let default_index = tiers
            .iter()
            .position(|&t| t == default)
            .ok_or(TierListError::DefaultNotListed(default))?;
        Ok(Self {
            tiers: Cow::Owned(tiers.to_vec()),
            default_index,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.tiers.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tier> {
        self.tiers.get(index).copied()
    }

    #[must_use]
    pub fn position(&self, tier: Tier) -> Option<usize> {
        self.tiers.iter().position(|&t| t == tier)
    }

    #[must_use]
    pub const fn default_index(&self) -> usize {
        self.default_index
    }

    #[must_use]
    pub fn default_tier(&self) -> Tier {
        self.tiers[self.default_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.tiers.iter().copied()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Tier::class_name)
    }
}

impl Default for TierList {
    fn default() -> Self {
        Self::SHIPPED
    }
}
