//! Display implementations for aggregates

use std::fmt;

use super::*;

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point2DRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2DRecord {{ x = {}, y = {} }}", self.x(), self.y())
    }
}

impl fmt::Display for WeatherReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reading(f, self.date, self.temp_c, &self.loc)
    }
}

impl fmt::Display for WeatherValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reading(f, self.date, self.temp_c, &self.loc)
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_reading(f, self.date(), self.temp_c(), self.loc())
    }
}

// Handles display the aggregate they reach
impl<T: fmt::Display> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get(|value| write!(f, "{}", value)) {
            Some(result) => result,
            None => write!(f, "<borrowed>"),
        }
    }
}

fn write_reading(
    f: &mut fmt::Formatter<'_>,
    date: chrono::NaiveDate,
    temp_c: i32,
    loc: &Handle<Location>,
) -> fmt::Result {
    write!(f, "{}: {}°C in {}", date.format("%Y-%m-%d"), temp_c, loc)
}
