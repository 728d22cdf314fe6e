use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{contact::*, id::*, status::*, time::*};

/// What kind of accommodation a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ListingKind {
    Pg,
    Flat,
    Hostel,
    Room,
}

/// How many tenants share a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Occupancy {
    Single,
    Double,
    Triple,
    Dorm,
}

/// Which tenants a listing is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetGender {
    Boys,
    Girls,
    Any,
}

/// Whether electricity charges are part of the rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElectricityBilling {
    Included,
    Extra,
}

/// A rental listing.
///
/// The `id` and `created_at` fields are assigned once at creation and
/// never change afterwards. The moderation and lifecycle flags
/// (`status`, `is_available`, `is_verified`, `views`) are only mutated
/// through dedicated operations, independent of the content fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub kind: ListingKind,
    pub for_gender: TargetGender,
    pub occupancy: Occupancy,

    pub city: String,
    pub area: String,
    pub landmark: String,

    /// Monthly rent in whole rupees.
    pub rent: u32,
    /// Security deposit in whole rupees.
    pub deposit: u32,
    pub includes_food: bool,
    pub electricity: ElectricityBilling,

    /// Normalized amenity labels, sorted and free of duplicates.
    pub amenities: Vec<String>,
    /// Ordered photo URLs, never empty after creation.
    pub photos: Vec<String>,

    /// Set when the submitter was authenticated.
    pub owner_id: Option<Id>,
    pub contact: Contact,

    pub status: ModerationStatus,
    pub is_available: bool,
    pub is_verified: bool,
    pub views: u64,
    pub created_at: Date,
}

impl Listing {
    /// Whether the listing shows up in browse results.
    pub fn is_browsable(&self) -> bool {
        self.status.is_browsable() && self.is_available
    }

    /// Ownership is established by the submitter's id or, for
    /// unauthenticated submissions, by the contact phone number.
    pub fn is_owned_by(&self, id: Option<&Id>, phone: Option<&str>) -> bool {
        if let (Some(owner_id), Some(id)) = (self.owner_id.as_ref(), id) {
            if owner_id == id {
                return true;
            }
        }
        if let Some(phone) = phone {
            if !phone.is_empty() && self.contact.phone == phone {
                return true;
            }
        }
        false
    }
}
