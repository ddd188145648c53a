//! Release tracks.

use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// A Play Store release track.
///
/// The set is closed; custom tracks are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseTrack {
    /// Alpha testing channel.
    Alpha,
    /// Beta testing channel.
    Beta,
    /// Staged rollout to production.
    Rollout,
    /// Full production release.
    #[default]
    Production,
}

impl ReleaseTrack {
    /// All supported tracks.
    pub const ALL: &'static [ReleaseTrack] = &[
        ReleaseTrack::Alpha,
        ReleaseTrack::Beta,
        ReleaseTrack::Rollout,
        ReleaseTrack::Production,
    ];

    /// Returns the track name as used by the publishing API.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseTrack::Alpha => "alpha",
            ReleaseTrack::Beta => "beta",
            ReleaseTrack::Rollout => "rollout",
            ReleaseTrack::Production => "production",
        }
    }
}

impl std::str::FromStr for ReleaseTrack {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(ReleaseTrack::Alpha),
            "beta" => Ok(ReleaseTrack::Beta),
            "rollout" => Ok(ReleaseTrack::Rollout),
            "production" => Ok(ReleaseTrack::Production),
            _ => Err(ListingError::InvalidTrack {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ReleaseTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
