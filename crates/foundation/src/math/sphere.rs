use serde::{Deserialize, Serialize};

use super::Vec3;

/// Geographic coordinates in degrees. Range is not enforced here.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn is_in_range(&self) -> bool {
        self.latitude_deg.is_finite()
            && self.longitude_deg.is_finite()
            && (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }

    pub fn to_sphere(self, radius: f64) -> Vec3 {
        geo_to_sphere(self.latitude_deg, self.longitude_deg, radius)
    }
}

/// Map latitude/longitude (degrees) to a point on a sphere centred at the origin.
///
/// The polar axis is `+y`. Latitude is measured as a polar angle offset by
/// -90°, so (0°, 0°) lands on `-x` and (90°, 0°) lands on `+y`. Any input is
/// accepted; out-of-range angles simply wrap through the trigonometry.
pub fn geo_to_sphere(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Vec3 {
    let lat_rad = latitude_deg.to_radians() - std::f64::consts::FRAC_PI_2;
    let lon_rad = longitude_deg.to_radians();

    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let (sin_lon, cos_lon) = lon_rad.sin_cos();

    Vec3::new(
        radius * sin_lat * cos_lon,
        radius * cos_lat,
        radius * sin_lat * sin_lon,
    )
}
