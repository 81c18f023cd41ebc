//! The Character Viewer.
//!
//! Fetches a character record by numeric id from the character API,
//! then probes the declared portrait URL. The probe result gates
//! whether the view carries a portrait at all: the viewer never
//! exposes an unverified image locator.

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::HttpClient;
use crate::error::FetchError;
use crate::probe::{Probe, ProbeResult};

/// Default base URL of the character API; records live at
/// `<base>/<id>.json`.
pub const DEFAULT_CHARACTER_API: &str =
    "https://rawcdn.githack.com/akabab/starwars-api/0.2.1/api/id";

/// Inclusive upper bound for random character draws.
pub const MAX_CHARACTER_ID: u32 = 88;

/// Alternate text recorded when the portrait probe fails.
const PORTRAIT_FAILED_ALT: &str = "Portrait failed to load";

// ============================================================================
// Character Record & View
// ============================================================================

/// The character API response fields the viewer uses.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    /// Character name.
    pub name: String,
    /// Declared portrait image URL.
    pub image: String,
}

/// The rendered character view.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterView {
    /// Character name, written into the heading.
    pub name: String,
    /// Portrait URL; present only when the probe succeeded.
    pub portrait: Option<String>,
    /// Alternate text; present only when the probe failed.
    pub portrait_alt: Option<String>,
}

impl CharacterView {
    /// Builds the view from a record and its portrait probe result.
    ///
    /// Probe success exposes the declared image URL; failure leaves
    /// the view without a portrait and records alternate text.
    pub fn from_probe(record: CharacterRecord, probe: &ProbeResult) -> Self {
        if probe.success {
            Self {
                name: record.name,
                portrait: Some(record.image),
                portrait_alt: None,
            }
        } else {
            warn!(
                name = %record.name,
                status = ?probe.status_code,
                "Portrait probe failed, clearing image"
            );
            Self {
                name: record.name,
                portrait: None,
                portrait_alt: Some(PORTRAIT_FAILED_ALT.to_string()),
            }
        }
    }
}

// ============================================================================
// Character Viewer
// ============================================================================

/// Fetches character records and builds [`CharacterView`]s.
#[derive(Debug, Clone)]
pub struct CharacterViewer {
    http: HttpClient,
    base_url: String,
}

impl CharacterViewer {
    /// Creates a viewer against the public character API.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url: DEFAULT_CHARACTER_API.to_string(),
        })
    }

    /// Overrides the base URL. Used against test servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Draws a random character id, uniform over
    /// `[1, MAX_CHARACTER_ID]` inclusive.
    pub fn draw_id() -> u32 {
        rand::thread_rng().gen_range(1..=MAX_CHARACTER_ID)
    }

    /// Shows a random character.
    pub async fn show_random(&self) -> Result<CharacterView, FetchError> {
        self.show(Self::draw_id()).await
    }

    /// Shows the character with the given id.
    ///
    /// The primary fetch failure propagates; only the portrait probe
    /// has a recovery path.
    pub async fn show(&self, id: u32) -> Result<CharacterView, FetchError> {
        let url = format!("{}/{}.json", self.base_url, id);
        debug!(id, url = %url, "Fetching character");

        let raw = self.http.get_json(&url).await?;
        let record: CharacterRecord =
            serde_json::from_value(raw).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        let probe = Probe::new(&record.image).check(&self.http).await;
        Ok(CharacterView::from_probe(record, &probe))
    }
}

// ============================================================================
// Tests
// ============================================================================
