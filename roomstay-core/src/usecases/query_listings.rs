use super::prelude::*;

/// Sentinel accepted at the boundary, equivalent to an absent filter.
pub const FILTER_ALL: &str = "all";

/// A fully parsed listing filter. `None` never excludes anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub city: Option<String>,
    pub area: Option<String>,
    pub min_budget: Option<u32>,
    pub max_budget: Option<u32>,
    pub kind: Option<ListingKind>,
    pub occupancy: Option<Occupancy>,
    pub for_gender: Option<TargetGender>,
}

/// Raw filter values as the presentation layer hands them over:
/// absent, the `"all"` sentinel, or a concrete value.
#[derive(Debug, Clone, Default)]
pub struct ListingQueryParams {
    pub city: Option<String>,
    pub area: Option<String>,
    pub min_budget: Option<u32>,
    pub max_budget: Option<u32>,
    pub kind: Option<String>,
    pub occupancy: Option<String>,
    pub for_gender: Option<String>,
}

fn strip_sentinel(value: Option<String>) -> Option<String> {
    value.filter(|v| v != FILTER_ALL)
}

fn parse_enum_param<T: std::str::FromStr>(value: Option<String>) -> Result<Option<T>> {
    strip_sentinel(value)
        .map(|v| v.parse().map_err(|_| Error::FilterValue(v)))
        .transpose()
}

impl ListingQuery {
    /// Boundary parsing: absence and `"all"` are treated identically,
    /// so the filter predicate itself never sees the sentinel.
    pub fn from_params(params: ListingQueryParams) -> Result<Self> {
        let ListingQueryParams {
            city,
            area,
            min_budget,
            max_budget,
            kind,
            occupancy,
            for_gender,
        } = params;
        Ok(Self {
            city: strip_sentinel(city),
            area: strip_sentinel(area),
            min_budget,
            max_budget,
            kind: parse_enum_param(kind)?,
            occupancy: parse_enum_param(occupancy)?,
            for_gender: parse_enum_param(for_gender)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        let Self {
            city,
            area,
            min_budget,
            max_budget,
            kind,
            occupancy,
            for_gender,
        } = self;
        city.is_none()
            && area.is_none()
            && min_budget.is_none()
            && max_budget.is_none()
            && kind.is_none()
            && occupancy.is_none()
            && for_gender.is_none()
    }
}

fn matches_query(listing: &Listing, query: &ListingQuery) -> bool {
    if !listing.is_browsable() {
        return false;
    }
    if let Some(ref city) = query.city {
        if listing.city != *city {
            return false;
        }
    }
    if let Some(ref area) = query.area {
        if listing.area != *area {
            return false;
        }
    }
    if let Some(min) = query.min_budget {
        if listing.rent < min {
            return false;
        }
    }
    if let Some(max) = query.max_budget {
        if listing.rent > max {
            return false;
        }
    }
    if let Some(kind) = query.kind {
        if listing.kind != kind {
            return false;
        }
    }
    if let Some(occupancy) = query.occupancy {
        if listing.occupancy != occupancy {
            return false;
        }
    }
    if let Some(for_gender) = query.for_gender {
        if listing.for_gender != for_gender {
            return false;
        }
    }
    true
}

/// The browse filter: approved, available listings matching every
/// specified query field. Order-preserving; the input order (most
/// recent first by convention) is kept as-is.
pub fn filter_listings(listings: &[Listing], query: &ListingQuery) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| matches_query(l, query))
        .cloned()
        .collect()
}

/// Exact-id lookup. A miss is a valid empty result, not an error.
pub fn listing_by_id<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.id.as_str() == id)
}

/// Feed surfaces deliberately keep unavailable listings visible, so
/// this only checks the moderation status, unlike [`filter_listings`].
pub fn approved_listings(listings: &[Listing]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| l.status == ModerationStatus::Approved)
        .cloned()
        .collect()
}

pub fn get_listing<R: ListingRepo>(repo: &R, id: &str) -> Result<Listing> {
    Ok(repo.get_listing(id)?)
}
