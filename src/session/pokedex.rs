//! Collection of caught Pokemon and the catch-probability arithmetic.

use std::collections::BTreeMap;

use crate::models::Pokemon;

/// Lowest catch rate in percent, however strong the Pokemon.
pub const MIN_CATCH_RATE: u32 = 20;
/// Highest catch rate in percent, however weak the Pokemon.
pub const MAX_CATCH_RATE: u32 = 80;

/// Chance in percent of catching a Pokemon with the given base experience.
///
/// Higher base experience makes a Pokemon harder to catch:
/// `100 - base_experience / 3`, clamped to `[MIN_CATCH_RATE, MAX_CATCH_RATE]`.
pub fn catch_rate(base_experience: u32) -> u32 {
    100u32
        .saturating_sub(base_experience / 3)
        .clamp(MIN_CATCH_RATE, MAX_CATCH_RATE)
}

/// Whether a roll in `0..100` catches a Pokemon with this base experience.
pub fn catch_succeeds(base_experience: u32, roll: u32) -> bool {
    roll <= catch_rate(base_experience)
}

/// Caught Pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    pokemon: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a Pokemon. Returns false if one with that name was already caught.
    pub fn catch(&mut self, pokemon: Pokemon) -> bool {
        if self.pokemon.contains_key(&pokemon.name) {
            return false;
        }
        self.pokemon.insert(pokemon.name.clone(), pokemon);
        true
    }

    pub fn has(&self, name: &str) -> bool {
        self.pokemon.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.pokemon.get(name)
    }

    /// All caught Pokemon, sorted by name.
    pub fn list(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values()
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str, base_experience: u32) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience,
            height: 0,
            weight: 0,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_catch_rate_is_capped() {
        assert_eq!(catch_rate(0), MAX_CATCH_RATE);
        assert_eq!(catch_rate(50), MAX_CATCH_RATE);
        assert_eq!(catch_rate(608), MIN_CATCH_RATE);
        assert_eq!(catch_rate(u32::MAX), MIN_CATCH_RATE);
    }

    #[test]
    fn test_catch_rate_scales_with_experience() {
        // 100 - 112 / 3 = 63
        assert_eq!(catch_rate(112), 63);
        assert!(catch_rate(150) > catch_rate(200));
    }

    #[test]
    fn test_catch_succeeds_boundary() {
        let rate = catch_rate(112);
        assert!(catch_succeeds(112, rate));
        assert!(!catch_succeeds(112, rate + 1));
        assert!(catch_succeeds(112, 0));
        assert!(!catch_succeeds(112, 99));
    }

    #[test]
    fn test_pokedex_catch_once() {
        let mut dex = Pokedex::new();

        assert!(dex.catch(pokemon("pidgey", 50)));
        assert!(!dex.catch(pokemon("pidgey", 50)));
        assert!(dex.has("pidgey"));
        assert_eq!(dex.len(), 1);
    }

    #[test]
    fn test_pokedex_list_sorted() {
        let mut dex = Pokedex::new();
        dex.catch(pokemon("zubat", 49));
        dex.catch(pokemon("abra", 62));

        let names: Vec<&str> = dex.list().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["abra", "zubat"]);
        assert!(dex.get("mew").is_none());
    }
}
