//! Special sundae combinations, ordered by name instead of scoop by scoop
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{
    cone_type::ConeType,
    errors::ShopError,
    order::{OrderDetails, OrderSpec},
    receipt::title_case,
};

/// One row of the sundae table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SundaeRecipe {
    pub scoop_count: u32,
    pub flavors: Vec<String>,
    pub toppings: Vec<String>,
    pub cone_type: ConeType,
    pub description: String,
}

pub fn default_sundaes() -> BTreeMap<String, SundaeRecipe> {
    let mut sundaes = BTreeMap::new();
    sundaes.insert(
        "banana_split".to_string(),
        SundaeRecipe {
            scoop_count: 3,
            flavors: vec![
                "vanilla".to_string(),
                "chocolate chip".to_string(),
                "strawberry swirl".to_string(),
            ],
            toppings: vec!["nuts".to_string(), "cherry".to_string()],
            cone_type: ConeType::Cake,
            description: "Classic banana split with three flavors and traditional toppings"
                .to_string(),
        },
    );
    sundaes.insert(
        "triple_chocolate".to_string(),
        SundaeRecipe {
            scoop_count: 3,
            flavors: vec!["chocolate chip".to_string(); 3],
            toppings: vec!["sprinkles".to_string()],
            cone_type: ConeType::Waffle,
            description: "Triple scoop of chocolate chip in a waffle cone".to_string(),
        },
    );
    sundaes
}

/// Builds the order for the sundae named exactly `key`
pub fn resolve_sundae(
    sundaes: &BTreeMap<String, SundaeRecipe>,
    key: &str,
) -> Result<OrderSpec, ShopError> {
    let recipe = sundaes
        .get(key)
        .ok_or_else(|| ShopError::InvalidPreset(key.to_string()))?;
    debug!("[SUNDAE] Resolved {}", key);
    Ok(OrderSpec::Preset {
        key: key.to_string(),
        description: recipe.description.clone(),
        details: OrderDetails::new(
            recipe.scoop_count,
            recipe.flavors.clone(),
            recipe.toppings.clone(),
            recipe.cone_type,
        ),
    })
}

/// Turns what the customer typed ("Banana Split") into a table key ("banana_split")
pub fn normalize_sundae_name(input: &str) -> String {
    input.trim().to_lowercase().replace(' ', "_")
}

/// "banana_split" -> "Banana Split"
pub fn display_name(key: &str) -> String {
    title_case(&key.replace('_', " "))
}
