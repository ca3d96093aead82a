//! Domain metadata attached to every injury.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Injury type, free-text description and body-area tag.
///
/// Opaque to the spatial model: carried along with a region and handed back
/// unchanged.
///
/// # Example
///
/// ```
/// use injury_region::InjuryMetadata;
///
/// let meta = InjuryMetadata::new("penetrating")
///     .with_description("entry wound")
///     .with_body_area("left thigh");
/// assert_eq!(meta.body_area, "left thigh");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct InjuryMetadata {
    /// Injury type, e.g. "burn" or "fracture".
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub injury_type: String,

    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,

    /// Body-area tag chosen by the operator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub body_area: String,
}

impl InjuryMetadata {
    /// Metadata with just an injury type.
    #[must_use]
    pub fn new(injury_type: impl Into<String>) -> Self {
        Self {
            injury_type: injury_type.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the body-area tag.
    #[must_use]
    pub fn with_body_area(mut self, body_area: impl Into<String>) -> Self {
        self.body_area = body_area.into();
        self
    }
}
