#![forbid(unsafe_code)]

//! WASM binding for the page font size control.
//!
//! Looks up the content region and the two step buttons by id, attaches a
//! [`fontsize_core::FontSizeController`] to the content region, and wires the
//! buttons' `click` events to increase/decrease. The controller itself lives
//! in `fontsize-core`; this crate only owns the DOM lookup and listeners.

use std::fmt;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::FontSizeWeb;

/// Which page element an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// The region whose font size is controlled.
    Target,
    IncreaseButton,
    DecreaseButton,
}

impl ElementRole {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Target => "font size target",
            Self::IncreaseButton => "increase button",
            Self::DecreaseButton => "decrease button",
        }
    }
}

/// Element ids the binding looks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIds {
    pub target: String,
    pub increase: String,
    pub decrease: String,
}

impl PageIds {
    pub const DEFAULT_TARGET: &'static str = "main";
    pub const DEFAULT_INCREASE: &'static str = "increaseFontSizeButton";
    pub const DEFAULT_DECREASE: &'static str = "decreaseFontSizeButton";

    #[must_use]
    pub fn id(&self, role: ElementRole) -> &str {
        match role {
            ElementRole::Target => &self.target,
            ElementRole::IncreaseButton => &self.increase,
            ElementRole::DecreaseButton => &self.decrease,
        }
    }
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            target: Self::DEFAULT_TARGET.to_owned(),
            increase: Self::DEFAULT_INCREASE.to_owned(),
            decrease: Self::DEFAULT_DECREASE.to_owned(),
        }
    }
}

/// Mount failures. Mounting fails fast: a page missing any of the three
/// elements gets no controller and no listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// No `window.document` (e.g. running in a worker).
    NoDocument,
    /// `getElementById` returned nothing for this role's id.
    MissingElement { role: ElementRole, id: String },
    /// The browser rejected a listener registration.
    Listener(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no document available"),
            Self::MissingElement { role, id } => {
                write!(f, "missing {} element #{id}", role.describe())
            }
            Self::Listener(msg) => write!(f, "failed to register click listener: {msg}"),
        }
    }
}

impl std::error::Error for MountError {}

/// Resolve all three roles through `lookup`, failing on the first id that
/// does not resolve. Returns elements as `[target, increase, decrease]`.
pub fn resolve_elements<E>(
    ids: &PageIds,
    mut lookup: impl FnMut(&str) -> Option<E>,
) -> Result<[E; 3], MountError> {
    let mut find = |role: ElementRole| {
        let id = ids.id(role);
        lookup(id).ok_or_else(|| MountError::MissingElement {
            role,
            id: id.to_owned(),
        })
    };
    Ok([
        find(ElementRole::Target)?,
        find(ElementRole::IncreaseButton)?,
        find(ElementRole::DecreaseButton)?,
    ])
}

/// Native builds compile this crate as a stub so `cargo test --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FontSizeWeb;

#[cfg(not(target_arch = "wasm32"))]
impl FontSizeWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
