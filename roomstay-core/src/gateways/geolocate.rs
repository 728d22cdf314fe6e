use crate::entities::geo::GeoPoint;
use thiserror::Error;

/// Why the device position could not be determined.
///
/// All three kinds are recoverable: the location resolver keeps the
/// previous (or default) city and only surfaces the kind for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Location access denied")]
    PermissionDenied,
    #[error("Location request timed out")]
    Timeout,
}

pub trait GeolocationGateway {
    /// Returns the current device position.
    ///
    /// Implementations must not block longer than 10 seconds and
    /// report [`GeolocationError::Timeout`] instead.
    fn current_position(&self) -> Result<GeoPoint, GeolocationError>;
}
