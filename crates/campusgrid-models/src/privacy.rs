//! Per-student timetable visibility.
//!
//! Every student owns a privacy level stored in the external privacy
//! store. The gate itself is a pure function over the target's level and
//! what is known about the viewer; fetching those inputs (and recording
//! visits afterwards) is the calling service's job.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student's privacy setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    /// Anyone may view the timetable.
    #[default]
    Public,
    /// Only logged-in viewers who are not themselves private may view.
    Mutual,
    /// Only the owner may view.
    Private,
}

impl PrivacyLevel {
    /// Stored representation in the privacy store (0/1/2).
    pub fn as_stored(self) -> u8 {
        match self {
            PrivacyLevel::Public => 0,
            PrivacyLevel::Mutual => 1,
            PrivacyLevel::Private => 2,
        }
    }

    /// Parses the stored representation.
    pub fn from_stored(value: u8) -> Option<Self> {
        match value {
            0 => Some(PrivacyLevel::Public),
            1 => Some(PrivacyLevel::Mutual),
            2 => Some(PrivacyLevel::Private),
            _ => None,
        }
    }
}

/// What the gate needs to know about a present viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerPrivacy {
    /// Whether the viewer is the student whose page is being viewed.
    pub is_owner: bool,
    /// The viewer's own privacy level.
    pub own_level: PrivacyLevel,
}

/// Why a timetable view was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The target only shares their timetable with themselves.
    Private,
    /// The target requires mutual visibility; the viewer is anonymous.
    LoginRequired,
    /// The target requires mutual visibility; the viewer's own level is
    /// private and must be relaxed first.
    ViewerTooRestrictive,
}

impl BlockReason {
    /// User-facing message for the blocked page.
    pub fn message(self) -> &'static str {
        match self {
            BlockReason::Private => "this timetable is only visible to its owner",
            BlockReason::LoginRequired => "log in to view this timetable",
            BlockReason::ViewerTooRestrictive => {
                "relax your own privacy level to view mutually-visible timetables"
            }
        }
    }
}

/// The gate's verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Blocked(BlockReason),
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Decides whether a viewer may see the target student's timetable.
///
/// `viewer` is `None` for anonymous visits. Owners always see their own
/// page, whatever their level.
pub fn evaluate_visibility(target: PrivacyLevel, viewer: Option<&ViewerPrivacy>) -> Visibility {
    match target {
        PrivacyLevel::Public => Visibility::Visible,
        PrivacyLevel::Private => match viewer {
            Some(v) if v.is_owner => Visibility::Visible,
            _ => Visibility::Blocked(BlockReason::Private),
        },
        PrivacyLevel::Mutual => match viewer {
            None => Visibility::Blocked(BlockReason::LoginRequired),
            Some(v) if v.own_level == PrivacyLevel::Private => {
                Visibility::Blocked(BlockReason::ViewerTooRestrictive)
            }
            Some(_) => Visibility::Visible,
        },
    }
}
