//! Slide descriptors supplied by the host.

use crate::error::{CarouselError, Result};

/// A single slide: opaque renderable content plus the display name shown on
/// navigation buttons.
///
/// `C` is whatever the host renders for a panel (a component handle, a DOM
/// node id, a string of markup...). The carousel never inspects it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide<C> {
    /// Renderable content for the panel
    pub content: C,
    /// Display name (e.g., "slide2")
    pub name: String,
}

impl<C> Slide<C> {
    /// Create a new slide descriptor.
    pub fn new(content: C, name: impl Into<String>) -> Self {
        Self {
            content,
            name: name.into(),
        }
    }
}

impl Slide<String> {
    /// Create a slide whose content is its own name.
    ///
    /// Handy for hosts that look panels up by name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            content: name.clone(),
            name,
        }
    }

    /// Build named slides in host order.
    ///
    /// Fails on the first entry without a name rather than skipping it, so
    /// slide positions always line up with the host's own list.
    pub fn named_in_order<I>(names: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(position, name)| {
                name.map(Self::named)
                    .ok_or(CarouselError::MissingSlideName { position })
            })
            .collect()
    }
}
