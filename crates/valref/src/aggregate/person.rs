//! People: the plain reference aggregate

use super::{Aggregate, Semantics};

/// A person with a name and an age.
///
/// `Person` has no `PartialEq`. It is meant to live behind a
/// [`Handle`](super::Handle), whose `==` compares identity, so two people
/// with the same name and age are still two different people.
///
/// ```compile_fail
/// use valref::Person;
///
/// let same = Person::new("Jenny", 35) == Person::new("Jenny", 35);
/// ```
#[derive(Debug, Clone)]
pub struct Person {
    /// Given name
    pub name: String,

    /// Age in years
    pub age: i32,
}

impl Person {
    /// Create a person
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Aggregate for Person {
    const TYPE_NAME: &'static str = "Person";
    const SEMANTICS: Semantics = Semantics::OwnedByCopy;
}
