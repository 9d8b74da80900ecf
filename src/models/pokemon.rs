//! Per-Pokemon detail record.

use serde::Deserialize;

use crate::models::NamedResource;

/// Detail record of a single Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Upstream reports `null` for some forms; treated as 0.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<u32> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_decodes_detail_fields() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [{"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "types": [{"slot": 1, "type": {"name": "normal", "url": "u"}},
                      {"slot": 2, "type": {"name": "flying", "url": "u"}}]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, 50);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_null_base_experience_defaults_to_zero() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"name": "pikachu-cosplay", "base_experience": null}"#)
                .unwrap();
        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.types.is_empty());
    }
}
