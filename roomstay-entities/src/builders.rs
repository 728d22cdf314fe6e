pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::listing_builder::*;

pub mod listing_builder {

    use super::*;
    use crate::{contact::*, id::*, listing::*, status::*};

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.listing.title = title.into();
            self
        }
        pub fn kind(mut self, kind: ListingKind) -> Self {
            self.listing.kind = kind;
            self
        }
        pub fn for_gender(mut self, for_gender: TargetGender) -> Self {
            self.listing.for_gender = for_gender;
            self
        }
        pub fn occupancy(mut self, occupancy: Occupancy) -> Self {
            self.listing.occupancy = occupancy;
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.listing.city = city.into();
            self
        }
        pub fn area(mut self, area: &str) -> Self {
            self.listing.area = area.into();
            self
        }
        pub fn rent(mut self, rent: u32) -> Self {
            self.listing.rent = rent;
            self
        }
        pub fn owner(mut self, owner_id: Option<Id>) -> Self {
            self.listing.owner_id = owner_id;
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.listing.contact.phone = phone.into();
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.listing.status = status;
            self
        }
        pub fn available(mut self, is_available: bool) -> Self {
            self.listing.is_available = is_available;
            self
        }
        pub fn verified(mut self, is_verified: bool) -> Self {
            self.listing.is_verified = is_verified;
            self
        }
        pub fn views(mut self, views: u64) -> Self {
            self.listing.views = views;
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> Self::Build {
            Self::Build {
                listing: Listing {
                    id: Id::new(),
                    title: "A room".into(),
                    description: "".into(),
                    kind: ListingKind::Pg,
                    for_gender: TargetGender::Any,
                    occupancy: Occupancy::Single,
                    city: "Delhi".into(),
                    area: "Karol Bagh".into(),
                    landmark: "".into(),
                    rent: 5000,
                    deposit: 0,
                    includes_food: false,
                    electricity: ElectricityBilling::Extra,
                    amenities: vec![],
                    photos: vec!["https://example.com/room.jpg".into()],
                    owner_id: None,
                    contact: Contact {
                        name: "Owner".into(),
                        phone: "9000000000".into(),
                        whatsapp: None,
                    },
                    status: ModerationStatus::Approved,
                    is_available: true,
                    is_verified: false,
                    views: 0,
                    created_at: time::macros::date!(2024 - 01 - 01),
                },
            }
        }
    }
}
