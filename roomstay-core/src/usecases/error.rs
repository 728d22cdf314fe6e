use crate::{repositories, util::validate::{ContactInvalidation, ListingInvalidation}};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The rent amount is invalid")]
    Rent,
    #[error("Invalid phone nr")]
    Phone,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid filter value: {0}")]
    FilterValue(String),
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Self::Url
    }
}

impl From<ListingInvalidation> for Error {
    fn from(err: ListingInvalidation) -> Self {
        match err {
            ListingInvalidation::Title => Self::Title,
            ListingInvalidation::Rent => Self::Rent,
            ListingInvalidation::Contact(err) => err.into(),
        }
    }
}

impl From<ContactInvalidation> for Error {
    fn from(err: ContactInvalidation) -> Self {
        match err {
            ContactInvalidation::Phone => Self::Phone,
        }
    }
}
