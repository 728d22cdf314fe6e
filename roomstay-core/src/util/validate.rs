use lazy_static::lazy_static;
use regex::Regex;
use roomstay_entities::{contact::Contact, listing::Listing};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

lazy_static! {
    // 10 digits, optionally prefixed with a country code.
    static ref PHONE_REGEX: Regex = Regex::new(r"^(\+\d{1,3})?\d{10}$").expect("phone regex");
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[derive(Debug, Error)]
pub enum ContactInvalidation {
    #[error("Invalid phone nr")]
    Phone,
}

impl Validate for Contact {
    type Error = ContactInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_phone(&self.phone) {
            return Err(Self::Error::Phone);
        }
        if let Some(ref whatsapp) = self.whatsapp {
            if !is_valid_phone(whatsapp) {
                return Err(Self::Error::Phone);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ListingInvalidation {
    #[error("Invalid title")]
    Title,
    #[error("Invalid rent amount")]
    Rent,
    #[error(transparent)]
    Contact(ContactInvalidation),
}

impl Validate for Listing {
    type Error = ListingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.rent == 0 {
            return Err(Self::Error::Rent);
        }
        self.contact.validate().map_err(Self::Error::Contact)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomstay_entities::builders::Builder;

    #[test]
    fn phone_numbers() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+919876543210"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765-43210"));
        assert!(!is_valid_phone("not a number"));
    }

    #[test]
    fn listing_validation() {
        assert!(Listing::build().finish().validate().is_ok());
        assert!(matches!(
            Listing::build().title("  ").finish().validate(),
            Err(ListingInvalidation::Title)
        ));
        assert!(matches!(
            Listing::build().rent(0).finish().validate(),
            Err(ListingInvalidation::Rent)
        ));
        assert!(matches!(
            Listing::build().phone("12").finish().validate(),
            Err(ListingInvalidation::Contact(_))
        ));
    }
}
