use super::{authorize::authorize_listing_owner, prelude::*, Requester};
use crate::{usecases::prepare_amenity_list, util::validate::Validate};
use url::Url;

/// Partial content update; lifecycle fields are not editable here.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub title         : Option<String>,
    pub description   : Option<String>,
    pub kind          : Option<ListingKind>,
    pub for_gender    : Option<TargetGender>,
    pub occupancy     : Option<Occupancy>,
    pub city          : Option<String>,
    pub area          : Option<String>,
    pub landmark      : Option<String>,
    pub rent          : Option<u32>,
    pub deposit       : Option<u32>,
    pub includes_food : Option<bool>,
    pub electricity   : Option<ElectricityBilling>,
    pub amenities     : Option<Vec<String>>,
    pub photos        : Option<Vec<String>>,
    pub contact       : Option<Contact>,
}

pub fn update_listing<R: ListingRepo>(
    repo: &R,
    requester: &Requester,
    id: &str,
    update: ListingUpdate,
) -> Result<Listing> {
    let mut listing = repo.get_listing(id)?;
    authorize_listing_owner(&listing, requester)?;

    let ListingUpdate {
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
        contact,
    } = update;

    if let Some(title) = title {
        listing.title = title;
    }
    if let Some(description) = description {
        listing.description = description;
    }
    if let Some(kind) = kind {
        listing.kind = kind;
    }
    if let Some(for_gender) = for_gender {
        listing.for_gender = for_gender;
    }
    if let Some(occupancy) = occupancy {
        listing.occupancy = occupancy;
    }
    if let Some(city) = city {
        listing.city = city;
    }
    if let Some(area) = area {
        listing.area = area;
    }
    if let Some(landmark) = landmark {
        listing.landmark = landmark;
    }
    if let Some(rent) = rent {
        listing.rent = rent;
    }
    if let Some(deposit) = deposit {
        listing.deposit = deposit;
    }
    if let Some(includes_food) = includes_food {
        listing.includes_food = includes_food;
    }
    if let Some(electricity) = electricity {
        listing.electricity = electricity;
    }
    if let Some(amenities) = amenities {
        listing.amenities = prepare_amenity_list(amenities.iter().map(String::as_str));
    }
    if let Some(photos) = photos {
        for photo in &photos {
            Url::parse(photo)?;
        }
        listing.photos = photos;
    }
    if let Some(contact) = contact {
        listing.contact = contact;
    }

    listing.validate()?;
    repo.update_listing(&listing)?;
    log::info!("Updated listing {}", listing.id);
    Ok(listing)
}
