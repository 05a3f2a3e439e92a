//! Weather readings in all three flavours
//!
//! The three types carry the same fields (date, temperature, location) and
//! differ only in what assignment and `==` mean:
//!
//! | type              | assignment          | `==`                              |
//! |-------------------|---------------------|-----------------------------------|
//! | [`WeatherObject`] | aliases             | identity                          |
//! | [`WeatherValue`]  | shallow copy        | none                              |
//! | [`WeatherRecord`] | shallow copy        | field by field, location by identity |
//!
//! In every flavour the location is a [`Handle`], so even a copied reading
//! keeps pointing at the original location.

use chrono::NaiveDate;

use super::{Aggregate, Handle, Location, Semantics};

/// Fields of a weather reading held behind a handle.
///
/// On its own the struct is an ordinary `Clone` value; the reference
/// semantics come from [`WeatherObject`].
#[derive(Debug, Clone)]
pub struct WeatherReading {
    /// Day of the reading
    pub date: NaiveDate,

    /// Temperature in degrees Celsius
    pub temp_c: i32,

    /// Where the reading was taken
    pub loc: Handle<Location>,
}

impl WeatherReading {
    /// Create a reading
    pub fn new(date: NaiveDate, temp_c: i32, loc: Handle<Location>) -> Self {
        Self { date, temp_c, loc }
    }
}

impl Aggregate for WeatherReading {
    const TYPE_NAME: &'static str = "WeatherReading";
    const SEMANTICS: Semantics = Semantics::OwnedByCopy;
}

/// Weather reading with reference semantics.
pub type WeatherObject = Handle<WeatherReading>;

/// Weather reading with value semantics.
///
/// Cloning copies the date and temperature but only aliases the location.
#[derive(Debug, Clone)]
pub struct WeatherValue {
    /// Day of the reading
    pub date: NaiveDate,

    /// Temperature in degrees Celsius
    pub temp_c: i32,

    /// Where the reading was taken
    pub loc: Handle<Location>,
}

impl WeatherValue {
    /// Create a reading
    pub fn new(date: NaiveDate, temp_c: i32, loc: Handle<Location>) -> Self {
        Self { date, temp_c, loc }
    }
}

impl Aggregate for WeatherValue {
    const TYPE_NAME: &'static str = "WeatherValue";
    const SEMANTICS: Semantics = Semantics::OwnedByCopy;
}

/// Immutable weather reading.
///
/// The record's own fields never change after construction. Its location
/// is still a shared handle, so the record is only shallowly immutable:
/// the location's name can change underneath it, and equality compares
/// the location by identity.
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use valref::{Handle, Location, WeatherRecord};
///
/// let date = NaiveDate::from_ymd_opt(2021, 11, 11).unwrap();
/// let mut r = WeatherRecord::new(date, 25, Handle::new(Location::new("Dehli")));
/// r.temp_c = 30;
/// ```
#[derive(Debug, Clone)]
pub struct WeatherRecord {
    date: NaiveDate,
    temp_c: i32,
    loc: Handle<Location>,
}

impl WeatherRecord {
    /// Create a record
    pub fn new(date: NaiveDate, temp_c: i32, loc: Handle<Location>) -> Self {
        Self { date, temp_c, loc }
    }

    /// Day of the reading
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Temperature in degrees Celsius
    pub fn temp_c(&self) -> i32 {
        self.temp_c
    }

    /// Where the reading was taken
    pub fn loc(&self) -> &Handle<Location> {
        &self.loc
    }

    /// A copy of this record on a different day
    #[must_use]
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    /// A copy of this record with a different temperature
    #[must_use]
    pub fn with_temp_c(&self, temp_c: i32) -> Self {
        Self {
            temp_c,
            ..self.clone()
        }
    }

    /// A copy of this record at a different location
    #[must_use]
    pub fn with_loc(&self, loc: Handle<Location>) -> Self {
        Self {
            loc,
            ..self.clone()
        }
    }
}

impl PartialEq for WeatherRecord {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.temp_c == other.temp_c && self.loc == other.loc
    }
}

impl Eq for WeatherRecord {}

impl Aggregate for WeatherRecord {
    const TYPE_NAME: &'static str = "WeatherRecord";
    const SEMANTICS: Semantics = Semantics::ShallowImmutable;
}
