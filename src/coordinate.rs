use std::fmt;
use std::ops::{Index, IndexMut};

/// A geographical position, given as latitude and longitude in degrees.
///
/// Note that the element order is `[latitude, longitude]`, i.e. the order
/// people usually read them aloud in, rather than the `x, y` order of GIS
/// software. Use [`Coordinate::gis`] when your data arrive in the latter.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coordinate(pub [f64; 2]);

impl Index<usize> for Coordinate {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coordinate {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coordinate {
    /// A `Coordinate` from latitude/longitude, in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate([latitude, longitude])
    }

    /// A `Coordinate` from longitude/latitude, in degrees
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> Coordinate {
        Coordinate([latitude, longitude])
    }

    /// A `Coordinate` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> Coordinate {
        Coordinate([f64::NAN, f64::NAN])
    }

    /// A `Coordinate` consisting of 2 `0`s
    #[must_use]
    pub fn origin() -> Coordinate {
        Coordinate([0., 0.])
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Coordinate {
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.0[1]
    }

    /// True if both elements are finite, i.e. neither `NaN` nor infinite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.latitude(), self.longitude())
    }
}

// ----- T E S T S ---------------------------------------------------
