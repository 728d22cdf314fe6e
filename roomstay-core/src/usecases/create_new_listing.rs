use super::prelude::*;
use crate::util::validate::Validate;
use url::Url;

/// Shown instead of photos the owner did not supply.
pub const PHOTO_PLACEHOLDER_URL: &str = "https://static.roomstay.in/placeholder-room.jpg";

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title         : String,
    pub description   : String,
    pub kind          : ListingKind,
    pub for_gender    : TargetGender,
    pub occupancy     : Occupancy,
    pub city          : String,
    pub area          : String,
    pub landmark      : String,
    pub rent          : u32,
    pub deposit       : u32,
    pub includes_food : bool,
    pub electricity   : ElectricityBilling,
    pub amenities     : Vec<String>,
    pub photos        : Vec<String>,
    pub owner_id      : Option<Id>,
    pub contact       : Contact,
}

/// Normalizes amenity labels: trimmed, deduplicated, sorted.
pub fn prepare_amenity_list<'a>(amenities: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut amenities: Vec<_> = amenities
        .into_iter()
        .filter_map(|a| match a.trim() {
            a if a.is_empty() => None,
            a => Some(a.to_string()),
        })
        .collect();
    amenities.sort_unstable();
    amenities.dedup();
    amenities
}

fn parse_photo_urls(photos: Vec<String>) -> Result<Vec<String>> {
    if photos.is_empty() {
        return Ok(vec![PHOTO_PLACEHOLDER_URL.to_string()]);
    }
    for photo in &photos {
        Url::parse(photo)?;
    }
    Ok(photos)
}

/// Submission: builds a pending, available, unverified listing with a
/// fresh id and stores it.
pub fn create_new_listing<R: ListingRepo>(repo: &R, new_listing: NewListing) -> Result<Listing> {
    let NewListing {
        title,
        description,
        kind,
        for_gender,
        occupancy,
        city,
        area,
        landmark,
        rent,
        deposit,
        includes_food,
        electricity,
        amenities,
        photos,
        owner_id,
        contact,
    } = new_listing;

    let listing = Listing {
        id: Id::new(),
        title,
        description,
        kind,
        for_gender,
        occupancy,
        city,
        area,
        landmark,
        rent,
        deposit,
        includes_food,
        electricity,
        amenities: prepare_amenity_list(amenities.iter().map(String::as_str)),
        photos: parse_photo_urls(photos)?,
        owner_id,
        contact,
        status: ModerationStatus::default(),
        is_available: true,
        is_verified: false,
        views: 0,
        created_at: today_utc(),
    };
    listing.validate()?;

    repo.create_listing(listing.clone())?;
    log::info!(
        "Created new listing {} in {} / {}",
        listing.id,
        listing.city,
        listing.area
    );
    Ok(listing)
}
