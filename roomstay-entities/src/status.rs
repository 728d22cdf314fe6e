use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

pub type ModerationStatusPrimitive = i16;

/// Moderation lifecycle of a listing.
///
/// Every submission starts out as `Pending` and only moderation
/// actions move it to `Approved` or `Hidden`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Hidden   = -1,
    Pending  =  0,
    Approved =  1,
}

impl ModerationStatus {
    pub fn is_browsable(self) -> bool {
        self == Self::Approved
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid moderation status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<i16> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from.to_i16().expect("moderation status primitive")
    }
}
