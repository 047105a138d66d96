use std::{fmt::Display, str::FromStr};

use crate::{
    constants::EARTH_MEAN_RADIUS_M,
    datum,
    utility::dms,
    Error, ParseCoord, ThisOrThat,
};

/// A longitude/latitude pair in decimal degrees. The datum is whatever the
/// producer says it is: positions from a tracking server inside China are
/// usually GCJ-02, the output of [`GeoPoint::gcj02_to_wgs84`] is WGS-84.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lng", alias = "lon"))]
    pub(crate) longitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
}

impl GeoPoint {
    /// Internal-only constructor that doesn't check the bounds of lon/lat
    pub(crate) fn new(longitude: f64, latitude: f64) -> GeoPoint {
        Self {
            longitude,
            latitude,
        }
    }

    /// Tries to create a point from a lon/lat pair. First checks if the
    /// values are valid:
    /// * Longitude must be in range [-180,180]
    /// * Latitude must be in range [-90,90]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either longitude or latitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gcjconvert::GeoPoint;
    ///
    /// let coord = GeoPoint::create(116.3974, 39.9093).unwrap();
    ///
    /// assert_eq!(coord.longitude(), 116.3974);
    /// assert_eq!(coord.latitude(), 39.9093);
    ///
    /// assert!(GeoPoint::create(200.0, 0.0).is_err());
    /// assert!(GeoPoint::create(0.0, -100.0).is_err());
    /// assert!(GeoPoint::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(longitude: f64, latitude: f64) -> Result<GeoPoint, Error> {
        let hd = f64::from(dms::HD);
        let qd = f64::from(dms::QD);

        if !(-hd..=hd).contains(&longitude) {
            Err(Error::InvalidCoord(format!("Longitude {longitude} outside of valid range [-180, 180].")))
        } else if !(-qd..=qd).contains(&latitude) {
            Err(Error::InvalidCoord(format!("Latitude {latitude} outside of valid range [-90, 90].")))
        } else {
            Ok(GeoPoint::new(longitude, latitude))
        }
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns whether the point falls in the area where GCJ-02 offsets apply.
    ///
    /// ```
    /// use gcjconvert::GeoPoint;
    ///
    /// assert!(GeoPoint::create(121.4737, 31.2304).unwrap().in_china());
    /// assert!(!GeoPoint::create(139.6917, 35.6895).unwrap().in_china());
    /// ```
    pub fn in_china(&self) -> bool {
        !datum::out_of_china(self.longitude, self.latitude)
    }

    /// Returns the distance in meters between two [`GeoPoint`]s
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &GeoPoint) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Treats this point as GCJ-02 and converts it to WGS-84.
    ///
    /// # Usage
    ///
    /// ```
    /// use gcjconvert::GeoPoint;
    ///
    /// let gcj02 = GeoPoint::create(116.3974, 39.9093).unwrap();
    /// let wgs84 = gcj02.gcj02_to_wgs84();
    ///
    /// // A few hundred meters apart
    /// let shift = gcj02.haversine(&wgs84);
    /// assert!(shift > 100.0 && shift < 1000.0);
    /// ```
    pub fn gcj02_to_wgs84(&self) -> GeoPoint {
        datum::gcj02_to_wgs84(self.longitude, self.latitude)
    }

    /// Treats this point as WGS-84 and applies the GCJ-02 offset.
    pub fn wgs84_to_gcj02(&self) -> GeoPoint {
        datum::wgs84_to_gcj02(self.longitude, self.latitude)
    }

    /// Parses a point from `"<lon>,<lat>"` or `"<lon> <lat>"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if the text isn't exactly two numbers
    /// or if they are out of range.
    pub fn parse_str(value: &str) -> Result<GeoPoint, Error> {
        Self::from_str(value)
    }
}

impl ParseCoord for GeoPoint {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>();

        if pieces.len() != 2 {
            return Err(Error::InvalidCoord(format!("Expected \"<lon>,<lat>\", got \"{}\"", value.trim())));
        }

        let mut parsed = [0_f64; 2];
        for (idx, piece) in pieces.iter().enumerate() {
            parsed[idx] = piece.parse().map_err(|_| {
                let label = (idx == 0).ternary("Longitude", "Latitude");
                Error::InvalidCoord(format!("{label} \"{piece}\" is not a number"))
            })?;
        }

        GeoPoint::create(parsed[0], parsed[1])
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_coord(s)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(value: GeoPoint) -> Self {
        (value.longitude, value.latitude)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        write!(
            f,
            "{lon},{lat}",
        )
    }
}
