//! Archive categories and their static configuration.
//!
//! The archive exposes six fixed collections. Each category carries a
//! known identifier count so the trigger controller can draw a random
//! id without consulting the API first. The counts are configuration,
//! not discovered state: one table drives every category instead of a
//! per-category subclass.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Category
// ============================================================================

/// The fixed archive categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Characters (people).
    People,
    /// Species.
    Species,
    /// Planets.
    Planets,
    /// Films.
    Films,
    /// Starships.
    Starships,
    /// Vehicles.
    Vehicles,
}

impl Category {
    /// Returns all archive categories.
    pub fn all() -> &'static [Category] {
        &[
            Self::People,
            Self::Species,
            Self::Planets,
            Self::Films,
            Self::Starships,
            Self::Vehicles,
        ]
    }

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Species => "Species",
            Self::Planets => "Planets",
            Self::Films => "Films",
            Self::Starships => "Starships",
            Self::Vehicles => "Vehicles",
        }
    }

    /// Returns the API path segment for this category.
    ///
    /// This is also the name used on the command line.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Species => "species",
            Self::Planets => "planets",
            Self::Films => "films",
            Self::Starships => "starships",
            Self::Vehicles => "vehicles",
        }
    }

    /// Returns the static configuration for this category.
    pub fn config(&self) -> &'static CategoryConfig {
        let idx = Self::all()
            .iter()
            .position(|c| c == self)
            .unwrap_or_default();
        &CONFIGS[idx]
    }

    /// Looks up a category by its API path segment.
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.api_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_api_name(&s.to_ascii_lowercase())
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Category Configuration
// ============================================================================

/// Static configuration for one archive category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryConfig {
    /// The category this configuration describes.
    pub id: Category,
    /// Inclusive upper bound for random identifier draws.
    ///
    /// Identifier selection is uniform over `[1, max_resource]`.
    pub max_resource: u32,
}

/// Draw bounds per category, indexed in `Category::all()` order.
///
/// The archive's collections are not extended anymore, so the counts
/// are fixed here rather than fetched.
const CONFIGS: [CategoryConfig; 6] = [
    CategoryConfig {
        id: Category::People,
        max_resource: 81,
    },
    CategoryConfig {
        id: Category::Species,
        max_resource: 36,
    },
    CategoryConfig {
        id: Category::Planets,
        max_resource: 59,
    },
    CategoryConfig {
        id: Category::Films,
        max_resource: 5,
    },
    CategoryConfig {
        id: Category::Starships,
        max_resource: 35,
    },
    CategoryConfig {
        id: Category::Vehicles,
        max_resource: 38,
    },
];

// ============================================================================
// Tests
// ============================================================================
