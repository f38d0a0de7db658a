use serde::{Deserialize, Serialize};

/// A person record as served by `https://swapi.co/api/people/<id>/`.
///
/// Every scalar is text, including `height` and `mass`, because that is how
/// the API serves them (`"unknown"` is a legal mass). The list fields hold
/// resource URLs in the order the server lists them.
///
/// Nothing in the fetcher checks this shape. Decode into it with
/// [`Fetcher::get_data::<Actor>`](crate::Fetcher::get_data) when the target
/// is known to be a person resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub vehicles: Vec<String>,
    pub starships: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}
