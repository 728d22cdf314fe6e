//! Location resolution: turning device coordinates into a city/area
//! selection backed by the gazetteer.

use thiserror::Error;

use crate::{
    entities::geo::GeoPoint,
    gateways::geolocate::{GeolocationError, GeolocationGateway},
    gazetteer::{CityGazetteer, DEFAULT_CITY},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown city: {0}")]
pub struct UnknownCity(pub String);

/// The shared city/area selection read by all presentation surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationContext {
    /// Always a gazetteer key.
    pub city: String,
    /// When set, an area of the current `city`; always cleared when
    /// the city changes.
    pub area: Option<String>,
    pub loading: bool,
    pub error: Option<GeolocationError>,
    pub coordinates: Option<GeoPoint>,
}

/// Handed out by [`LocationResolver::begin_detect`] and required to
/// apply the outcome. A token from before the latest manual city pick
/// no longer matches and its result is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectToken {
    generation: u64,
}

#[derive(Debug)]
pub struct LocationResolver {
    gazetteer: CityGazetteer,
    context: LocationContext,
    generation: u64,
}

impl LocationResolver {
    pub fn new(gazetteer: CityGazetteer, default_city: &str) -> Self {
        debug_assert!(gazetteer.contains(default_city));
        Self {
            context: LocationContext {
                city: default_city.to_string(),
                area: None,
                loading: false,
                error: None,
                coordinates: None,
            },
            gazetteer,
            generation: 0,
        }
    }

    pub fn context(&self) -> &LocationContext {
        &self.context
    }

    pub fn gazetteer(&self) -> &CityGazetteer {
        &self.gazetteer
    }

    /// The areas selectable for the current city.
    pub fn available_areas(&self) -> &[String] {
        self.gazetteer.areas_of(&self.context.city)
    }

    /// Starts a detection. Returns `None` while another detection is
    /// still in flight (re-invocation is a no-op, never a second
    /// concurrent resolution).
    pub fn begin_detect(&mut self) -> Option<DetectToken> {
        if self.context.loading {
            return None;
        }
        self.context.loading = true;
        self.context.error = None;
        Some(DetectToken {
            generation: self.generation,
        })
    }

    /// Applies the outcome of a detection started with `begin_detect`.
    ///
    /// A successful result sets the coordinates, switches to the
    /// nearest gazetteer city and clears the area. A failure keeps the
    /// previous city and records the error kind. Results belonging to
    /// an outdated token only clear the loading flag.
    pub fn complete_detect(
        &mut self,
        token: DetectToken,
        result: Result<GeoPoint, GeolocationError>,
    ) {
        self.context.loading = false;
        if token.generation != self.generation {
            // A manual pick happened while the request was in flight;
            // the manual choice takes precedence.
            return;
        }
        match result {
            Ok(pos) => {
                self.context.coordinates = Some(pos);
                self.context.error = None;
                if let Some(city) = self.gazetteer.nearest_city(pos) {
                    self.context.city = city.name.clone();
                    self.context.area = None;
                }
            }
            Err(err) => {
                self.context.error = Some(err);
            }
        }
    }

    /// Synchronous convenience wrapper around the split-phase API.
    pub fn detect(&mut self, gateway: &dyn GeolocationGateway) {
        let Some(token) = self.begin_detect() else {
            return;
        };
        let result = gateway.current_position();
        self.complete_detect(token, result);
    }

    /// Manual override. Fails without any state change if `name` is
    /// not a gazetteer key; otherwise clears area and error.
    pub fn set_city(&mut self, name: &str) -> Result<(), UnknownCity> {
        if !self.gazetteer.contains(name) {
            return Err(UnknownCity(name.to_string()));
        }
        self.generation += 1;
        self.context.city = name.to_string();
        self.context.area = None;
        self.context.error = None;
        Ok(())
    }

    /// Sets the area without checking membership in the current city's
    /// area list; the UI only offers valid areas.
    pub fn set_area(&mut self, name: impl Into<String>) {
        self.context.area = Some(name.into());
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(CityGazetteer::default(), DEFAULT_CITY)
    }
}
