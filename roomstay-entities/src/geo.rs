use std::fmt;

/// Mean earth radius used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position in decimal degrees.
///
/// Produced by a device location query and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let res = Self { lat, lng };
        if res.is_valid() {
            Some(res)
        } else {
            None
        }
    }

    /// Great-circle distance between two points (haversine formula).
    ///
    /// Returns `None` if either point carries out-of-range coordinates.
    pub fn distance(p1: GeoPoint, p2: GeoPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let dlat = (p2.lat - p1.lat).to_radians();
        let dlng = (p2.lng - p1.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + p1.lat.to_radians().cos() * p2.lat.to_radians().cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_kilometers(EARTH_RADIUS_KM * c))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}
