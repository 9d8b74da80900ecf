//! Location area resources: paginated listings and per-area detail.

use serde::Deserialize;

/// A `{name, url}` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location area listing.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area and the Pokemon that can be encountered there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl AreaDetail {
    /// Names of the Pokemon found in this area, in upstream order.
    pub fn pokemon_names(&self) -> Vec<&str> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_with_null_previous() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_pokemon_names() {
        let json = r#"{
            "name": "pastoria-city-area",
            "id": 3,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u1"}, "version_details": []},
                {"pokemon": {"name": "magikarp", "url": "u2"}, "version_details": []}
            ]
        }"#;

        let area: AreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(area.pokemon_names(), vec!["tentacool", "magikarp"]);
    }

    #[test]
    fn test_area_without_encounters() {
        let area: AreaDetail = serde_json::from_str(r#"{"name": "empty-area"}"#).unwrap();
        assert!(area.pokemon_names().is_empty());
    }

    #[test]
    fn test_page_missing_results_is_rejected() {
        let result: Result<LocationAreaPage, _> =
            serde_json::from_str(r#"{"count": 1, "next": null, "previous": null}"#);
        assert!(result.is_err());
    }
}
