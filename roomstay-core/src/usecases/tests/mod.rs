use std::{cell::RefCell, result};

use crate::{
    repositories::{Error as RepoError, ListingRepo},
    usecases::{self, NewListing},
};
use roomstay_entities::{id::Id, listing::Listing, status::ModerationStatus};

use self::builders::Builder;

type RepoResult<T> = result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub listings: RefCell<Vec<Listing>>,
}

impl MockDb {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: RefCell::new(listings),
        }
    }
}

impl ListingRepo for MockDb {
    fn create_listing(&self, listing: Listing) -> RepoResult<()> {
        let mut listings = self.listings.borrow_mut();
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(RepoError::AlreadyExists);
        }
        listings.insert(0, listing);
        Ok(())
    }

    fn get_listing(&self, id: &str) -> RepoResult<Listing> {
        self.listings
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_listings(&self) -> RepoResult<Vec<Listing>> {
        Ok(self.listings.borrow().clone())
    }

    fn count_listings(&self) -> RepoResult<usize> {
        Ok(self.listings.borrow().len())
    }

    fn update_listing(&self, listing: &Listing) -> RepoResult<()> {
        let mut listings = self.listings.borrow_mut();
        let existing = listings
            .iter_mut()
            .find(|l| l.id == listing.id)
            .ok_or(RepoError::NotFound)?;
        *existing = listing.clone();
        Ok(())
    }

    fn review_listings(&self, ids: &[&str], status: ModerationStatus) -> RepoResult<usize> {
        let mut count = 0;
        for listing in self.listings.borrow_mut().iter_mut() {
            if ids.contains(&listing.id.as_str()) {
                listing.status = status;
                count += 1;
            }
        }
        Ok(count)
    }

    fn delete_listing(&self, id: &str) -> RepoResult<()> {
        let mut listings = self.listings.borrow_mut();
        let len_before = listings.len();
        listings.retain(|l| l.id.as_str() != id);
        if listings.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[test]
fn create_new_listing_initializes_lifecycle_fields() {
    let db = MockDb::default();
    let created = usecases::create_new_listing(&db, NewListing::build().finish()).unwrap();

    assert_eq!(ModerationStatus::Pending, created.status);
    assert!(created.is_available);
    assert!(!created.is_verified);
    assert_eq!(0, created.views);
    assert!(created.id.is_valid());
    assert_eq!(1, db.count_listings().unwrap());

    // Not yet approved, so browsing does not see it.
    let browsable = usecases::filter_listings(
        &db.all_listings().unwrap(),
        &usecases::ListingQuery::default(),
    );
    assert!(browsable.is_empty());
}

#[test]
fn create_new_listing_substitutes_photo_placeholder() {
    let db = MockDb::default();
    let created = usecases::create_new_listing(&db, NewListing::build().finish()).unwrap();
    assert_eq!(vec![usecases::PHOTO_PLACEHOLDER_URL.to_string()], created.photos);

    let created = usecases::create_new_listing(
        &db,
        NewListing::build()
            .photos(vec!["https://example.com/a.jpg"])
            .finish(),
    )
    .unwrap();
    assert_eq!(vec!["https://example.com/a.jpg".to_string()], created.photos);
}

#[test]
fn create_new_listing_rejects_invalid_input() {
    let db = MockDb::default();
    assert!(matches!(
        usecases::create_new_listing(&db, NewListing::build().title(" ").finish()),
        Err(usecases::Error::Title)
    ));
    assert!(matches!(
        usecases::create_new_listing(&db, NewListing::build().rent(0).finish()),
        Err(usecases::Error::Rent)
    ));
    assert!(matches!(
        usecases::create_new_listing(&db, NewListing::build().phone("42").finish()),
        Err(usecases::Error::Phone)
    ));
    assert!(matches!(
        usecases::create_new_listing(
            &db,
            NewListing::build().photos(vec!["not a url"]).finish()
        ),
        Err(usecases::Error::Url)
    ));
    assert_eq!(0, db.count_listings().unwrap());
}

#[test]
fn create_new_listing_normalizes_amenities() {
    let db = MockDb::default();
    let created = usecases::create_new_listing(
        &db,
        NewListing::build()
            .amenities(vec!["WiFi", "  AC ", "WiFi", ""])
            .finish(),
    )
    .unwrap();
    assert_eq!(vec!["AC".to_string(), "WiFi".to_string()], created.amenities);
}

#[test]
fn review_moves_submission_into_browse_results() {
    let db = MockDb::default();
    let created = usecases::create_new_listing(&db, NewListing::build().finish()).unwrap();

    let count =
        usecases::review_listings(&db, &[created.id.as_str()], ModerationStatus::Approved)
            .unwrap();
    assert_eq!(1, count);

    let browsable = usecases::filter_listings(
        &db.all_listings().unwrap(),
        &usecases::ListingQuery::default(),
    );
    assert_eq!(1, browsable.len());

    // Hiding takes it out again, independent of availability.
    usecases::review_listings(&db, &[created.id.as_str()], ModerationStatus::Hidden).unwrap();
    let browsable = usecases::filter_listings(
        &db.all_listings().unwrap(),
        &usecases::ListingQuery::default(),
    );
    assert!(browsable.is_empty());
}

#[test]
fn review_skips_unknown_ids() {
    let db = MockDb::with_listings(vec![Listing::build().id("1").finish()]);
    let count =
        usecases::review_listings(&db, &["1", "nope"], ModerationStatus::Approved).unwrap();
    assert_eq!(1, count);
}

#[test]
fn toggles_flip_independently_of_status() {
    let db = MockDb::with_listings(vec![Listing::build()
        .id("1")
        .status(ModerationStatus::Pending)
        .finish()]);

    assert_eq!(false, usecases::toggle_availability(&db, "1").unwrap());
    assert_eq!(true, usecases::toggle_availability(&db, "1").unwrap());
    assert_eq!(true, usecases::toggle_verified(&db, "1").unwrap());

    let listing = db.get_listing("1").unwrap();
    assert_eq!(ModerationStatus::Pending, listing.status);
    assert!(listing.is_available);
    assert!(listing.is_verified);
}

#[test]
fn record_view_is_idempotent_within_a_session() {
    let db = MockDb::with_listings(vec![Listing::build().id("1").finish()]);

    let mut session = usecases::ViewSession::new();
    assert_eq!(1, usecases::record_view(&db, &mut session, "1").unwrap());
    assert_eq!(1, usecases::record_view(&db, &mut session, "1").unwrap());
    assert_eq!(1, db.get_listing("1").unwrap().views);

    // A new session counts again.
    let mut other = usecases::ViewSession::new();
    assert_eq!(2, usecases::record_view(&db, &mut other, "1").unwrap());
}

#[test]
fn update_requires_ownership() {
    let owner_id = Id::new();
    let db = MockDb::with_listings(vec![Listing::build()
        .id("1")
        .owner(Some(owner_id.clone()))
        .phone("9876543210")
        .rent(5000)
        .finish()]);

    let update = usecases::ListingUpdate {
        rent: Some(5500),
        ..Default::default()
    };
    assert!(matches!(
        usecases::update_listing(&db, &usecases::Requester::default(), "1", update.clone()),
        Err(usecases::Error::Forbidden)
    ));
    assert_eq!(5000, db.get_listing("1").unwrap().rent);

    // Either the id or the phone authorizes.
    let by_id = usecases::Requester::with_id(owner_id);
    assert_eq!(
        5500,
        usecases::update_listing(&db, &by_id, "1", update).unwrap().rent
    );
    let by_phone = usecases::Requester::with_phone("9876543210");
    let update = usecases::ListingUpdate {
        title: Some("Renovated room".into()),
        ..Default::default()
    };
    assert_eq!(
        "Renovated room",
        usecases::update_listing(&db, &by_phone, "1", update)
            .unwrap()
            .title
    );
}

#[test]
fn update_does_not_touch_lifecycle_fields() {
    let db = MockDb::with_listings(vec![Listing::build()
        .id("1")
        .phone("9876543210")
        .verified(true)
        .views(7)
        .finish()]);

    let requester = usecases::Requester::with_phone("9876543210");
    let update = usecases::ListingUpdate {
        rent: Some(9000),
        ..Default::default()
    };
    let updated = usecases::update_listing(&db, &requester, "1", update).unwrap();
    assert_eq!(ModerationStatus::Approved, updated.status);
    assert!(updated.is_verified);
    assert_eq!(7, updated.views);
}

#[test]
fn delete_requires_ownership_and_removes_the_record() {
    let db = MockDb::with_listings(vec![Listing::build()
        .id("1")
        .phone("9876543210")
        .finish()]);

    assert!(matches!(
        usecases::delete_listing(&db, &usecases::Requester::with_phone("0"), "1"),
        Err(usecases::Error::Forbidden)
    ));
    assert_eq!(1, db.count_listings().unwrap());

    usecases::delete_listing(&db, &usecases::Requester::with_phone("9876543210"), "1").unwrap();
    assert_eq!(0, db.count_listings().unwrap());
    assert!(matches!(
        db.get_listing("1"),
        Err(crate::repositories::Error::NotFound)
    ));
}

#[test]
fn owned_listings_matches_by_id_or_phone() {
    let owner_id = Id::new();
    let db = MockDb::with_listings(vec![
        Listing::build().id("1").owner(Some(owner_id.clone())).finish(),
        Listing::build().id("2").phone("9876543210").finish(),
        Listing::build().id("3").finish(),
    ]);

    let requester = usecases::Requester {
        id: Some(owner_id),
        phone: Some("9876543210".into()),
    };
    let owned = usecases::owned_listings(&db, &requester).unwrap();
    let ids: Vec<_> = owned.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(vec!["1", "2"], ids);
}
