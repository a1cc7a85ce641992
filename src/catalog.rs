//! Flavors and toppings the shop offers
use serde::Deserialize;

use crate::constants::{DEFAULT_FLAVORS, DEFAULT_TOPPINGS};

/// Ordered lists of valid flavors and toppings. Used both to show the menu
/// and to validate what the customer types.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Catalog {
    flavors: Vec<String>,
    toppings: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(
            DEFAULT_FLAVORS.iter().map(|f| f.to_string()).collect(),
            DEFAULT_TOPPINGS.iter().map(|t| t.to_string()).collect(),
        )
    }
}

impl Catalog {
    pub fn new(flavors: Vec<String>, toppings: Vec<String>) -> Catalog {
        Catalog { flavors, toppings }
    }

    pub fn flavors(&self) -> &Vec<String> {
        &self.flavors
    }

    pub fn toppings(&self) -> &Vec<String> {
        &self.toppings
    }

    /// Returns the catalog entry matching `input`, ignoring case and surrounding spaces
    pub fn find_flavor(&self, input: &str) -> Option<&str> {
        find_in(&self.flavors, input)
    }

    pub fn find_topping(&self, input: &str) -> Option<&str> {
        find_in(&self.toppings, input)
    }

    /// Flavors containing `term`, in catalog order
    pub fn search_flavors(&self, term: &str) -> Vec<&str> {
        let term = term.trim().to_lowercase();
        self.flavors
            .iter()
            .filter(|flavor| flavor.to_lowercase().contains(&term))
            .map(|flavor| flavor.as_str())
            .collect()
    }
}

fn find_in<'a>(entries: &'a [String], input: &str) -> Option<&'a str> {
    let wanted = input.trim().to_lowercase();
    entries
        .iter()
        .find(|entry| entry.to_lowercase() == wanted)
        .map(|entry| entry.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_a_flavor_ignoring_case() {
        let catalog = Catalog::default();
        assert_eq!(Some("chocolate chip"), catalog.find_flavor("Chocolate Chip"));
        assert_eq!(Some("mint"), catalog.find_flavor("  MINT "));
    }

    #[test]
    fn should_not_find_a_flavor_outside_the_catalog() {
        let catalog = Catalog::default();
        assert_eq!(None, catalog.find_flavor("pistachio"));
        assert_eq!(None, catalog.find_flavor("chocolate"));
    }

    #[test]
    fn should_find_toppings() {
        let catalog = Catalog::default();
        assert_eq!(Some("nuts"), catalog.find_topping("nuts"));
        assert_eq!(None, catalog.find_topping("fudge"));
    }

    #[test]
    fn should_search_flavors_by_substring_in_catalog_order() {
        let catalog = Catalog::default();
        assert_eq!(vec!["chocolate chip", "cookie dough"], catalog.search_flavors("o"));
        assert_eq!(vec!["strawberry swirl"], catalog.search_flavors("SWIRL"));
    }

    #[test]
    fn should_return_nothing_when_no_flavor_matches() {
        let catalog = Catalog::default();
        assert_eq!(true, catalog.search_flavors("lemon").is_empty());
    }
}
