//! The individual steps of the tour
//!
//! Each step builds its own bindings, compares or mutates them, and returns
//! what it saw. Nothing is shared between steps.

use chrono::NaiveDate;

use super::{Finding, Outcome, Step};
use crate::aggregate::{
    Aggregate, Handle, Location, Person, Point2D, Point2DRecord, WeatherObject, WeatherReading,
    WeatherRecord, WeatherValue,
};

/// Day every weather reading in the tour is taken on.
///
/// The literal is a valid date, so the default never applies;
/// `test_reading_date` pins the value.
fn reading_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 11, 11).unwrap_or_default()
}

/// Integers compare by value.
pub(crate) fn scalar_equality() -> Step {
    let a = 5;
    let b = 5;

    Step::new("scalar_equality", "integers compare by value").with(Finding::comparison(
        "integers",
        None,
        Outcome::Equal,
        a == b,
    ))
}

/// Two people built from the same fields are still two objects.
pub(crate) fn reference_equality() -> Step {
    let jenny1 = Handle::new(Person::new("Jenny", 35));
    let jenny2 = Handle::new(Person::new("Jenny", 35));

    Step::new("reference_equality", "reference aggregates compare by identity").with(
        Finding::comparison(
            "people",
            Some(<Handle<Person>>::SEMANTICS),
            Outcome::NotEqual,
            jenny1 == jenny2,
        ),
    )
}

/// Assigning an integer copies it.
pub(crate) fn scalar_copy() -> Step {
    let x = 5;
    let mut y = x;
    y += 1;

    Step::new("scalar_copy", "assigning a scalar copies it")
        .with(Finding::observation("x", 5, x))
        .with(Finding::observation("y", 6, y))
}

/// Mutating through an alias is visible through the original binding.
pub(crate) fn reference_aliasing() -> Step {
    let p1 = Handle::new(Person::new("Han", 22));
    let p2 = p1.alias();
    p2.update(|p| p.age += 1);

    Step::new("reference_aliasing", "aliases share one allocation")
        .with(Finding::observation("p1.age", 23, p1.get(|p| p.age)))
        .with(Finding::observation("p2.age", 23, p2.get(|p| p.age)))
}

/// Mutating a copied point leaves the original alone.
pub(crate) fn value_copy() -> Step {
    let point1 = Point2D::new(3, 5);
    let mut point3 = point1;
    point3.x += 1;
    point3.y -= 1;

    Step::new("value_copy", "assigning a value aggregate copies its fields")
        .with(Finding::comparison(
            "points' x values",
            Some(Point2D::SEMANTICS),
            Outcome::NotEqual,
            point1.x == point3.x,
        ))
        .with(Finding::observation("point1.x", 3, point1.x))
}

/// Records built from the same coordinates are equal.
pub(crate) fn record_equality() -> Step {
    let point1_r = Point2DRecord::new(3, 5);
    let point2_r = Point2DRecord::new(3, 5);

    Step::new("record_equality", "records compare by their fields").with(Finding::comparison(
        "points",
        Some(Point2DRecord::SEMANTICS),
        Outcome::Equal,
        point1_r == point2_r,
    ))
}

/// "Changing" a record builds a new one.
pub(crate) fn record_with() -> Step {
    let point1_r = Point2DRecord::new(3, 5);
    let moved = point1_r.with_x(4);

    Step::new("record_with", "records change by building a new record")
        .with(Finding::comparison(
            "points (original and copy with x = 4)",
            Some(Point2DRecord::SEMANTICS),
            Outcome::NotEqual,
            point1_r == moved,
        ))
        .with(Finding::observation(
            "point1R",
            Point2DRecord::new(3, 5),
            point1_r,
        ))
}

/// Copying a value aggregate copies its scalars but only aliases its
/// location.
pub(crate) fn weather_shallow_copy() -> Step {
    let dehli = Handle::new(Location::new("Dehli"));
    let weather_s = WeatherValue::new(reading_date(), 25, dehli.alias());

    let mut copy = weather_s.clone();
    copy.temp_c += 5;
    copy.loc.update(|l| l.name = "New Dehli".to_string());

    Step::new(
        "weather_shallow_copy",
        "copies share the locations they refer to",
    )
    .with(Finding::observation("weatherS.temp_c", 25, weather_s.temp_c))
    .with(Finding::observation(
        "weatherS.loc.name",
        "New Dehli",
        weather_s.loc.get(|l| l.name.clone()),
    ))
    .with(Finding::comparison(
        "weather values' locations",
        Some(<Handle<Location>>::SEMANTICS),
        Outcome::Equal,
        weather_s.loc == copy.loc,
    ))
}

/// The same weather fields under each equality.
pub(crate) fn weather_equality() -> Step {
    let tokyo = Handle::new(Location::new("Tokyo"));
    let dehli = Handle::new(Location::new("Dehli"));
    let other_dehli = Handle::new(Location::new("Dehli"));
    let date = reading_date();

    let weather_c1: WeatherObject = Handle::new(WeatherReading::new(date, 25, tokyo.alias()));
    let weather_c2: WeatherObject = Handle::new(WeatherReading::new(date, 25, tokyo.alias()));

    let weather_r1 = WeatherRecord::new(date, 25, dehli.alias());
    let weather_r2 = WeatherRecord::new(date, 25, dehli.alias());
    let weather_r3 = WeatherRecord::new(date, 25, other_dehli);

    Step::new("weather_equality", "one reading, three equalities")
        .with(Finding::comparison(
            "weather objects",
            Some(WeatherObject::SEMANTICS),
            Outcome::NotEqual,
            weather_c1 == weather_c2,
        ))
        .with(Finding::comparison(
            "weather records",
            Some(WeatherRecord::SEMANTICS),
            Outcome::Equal,
            weather_r1 == weather_r2,
        ))
        .with(Finding::comparison(
            "weather records over different locations",
            Some(WeatherRecord::SEMANTICS),
            Outcome::NotEqual,
            weather_r1 == weather_r3,
        ))
}
