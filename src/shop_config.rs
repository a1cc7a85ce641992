//! Configuration of the shop: prices, catalog and sundae presets.
//! Built once at startup, from `shop.json` when present, and read-only afterwards.
use log::{debug, info};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    catalog::Catalog,
    cone_type::ConeType,
    constants::{
        CAKE_CONE_PRICE, MAX_SCOOPS, MIN_SCOOPS, ORDER_LOG_PATH, SCOOP_PRICE, SUGAR_CONE_PRICE,
        TOPPING_PRICE, WAFFLE_CONE_PRICE,
    },
    errors::ShopError,
    sundae::{default_sundaes, SundaeRecipe},
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PriceTable {
    pub scoop: f64,
    pub topping: f64,
    cones: HashMap<ConeType, f64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let mut cones = HashMap::new();
        cones.insert(ConeType::Cake, CAKE_CONE_PRICE);
        cones.insert(ConeType::Sugar, SUGAR_CONE_PRICE);
        cones.insert(ConeType::Waffle, WAFFLE_CONE_PRICE);
        PriceTable::new(SCOOP_PRICE, TOPPING_PRICE, cones)
    }
}

impl PriceTable {
    pub fn new(scoop: f64, topping: f64, cones: HashMap<ConeType, f64>) -> PriceTable {
        PriceTable {
            scoop,
            topping,
            cones,
        }
    }

    /// Surcharge for serving the ice cream in `cone_type`
    pub fn cone_price(&self, cone_type: ConeType) -> Result<f64, ShopError> {
        self.cones
            .get(&cone_type)
            .copied()
            .ok_or(ShopError::UnknownConeType(cone_type))
    }

    fn validate(&self) -> Result<(), ShopError> {
        check_price("scoop", self.scoop)?;
        check_price("topping", self.topping)?;
        for cone_type in ConeType::values() {
            let price = self.cone_price(cone_type).map_err(|_| {
                ShopError::InvalidConfig(format!("missing price for the {} cone", cone_type.name()))
            })?;
            check_price(cone_type.name(), price)?;
        }
        Ok(())
    }
}

fn check_price(name: &str, price: f64) -> Result<(), ShopError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ShopError::InvalidConfig(format!(
            "price of {} must be a non-negative amount, got {}",
            name, price
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    pub prices: PriceTable,
    pub catalog: Catalog,
    pub sundaes: BTreeMap<String, SundaeRecipe>,
    pub order_log_path: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            prices: PriceTable::default(),
            catalog: Catalog::default(),
            sundaes: default_sundaes(),
            order_log_path: ORDER_LOG_PATH.to_string(),
        }
    }
}

impl ShopConfig {
    pub fn validate(&self) -> Result<(), ShopError> {
        self.prices.validate()?;
        if self.catalog.flavors().is_empty() {
            return Err(ShopError::InvalidConfig("no flavors configured".to_string()));
        }
        if self.catalog.toppings().is_empty() {
            return Err(ShopError::InvalidConfig("no toppings configured".to_string()));
        }
        if self.sundaes.is_empty() {
            return Err(ShopError::InvalidConfig("no sundaes configured".to_string()));
        }
        for (key, recipe) in self.sundaes.iter() {
            self.validate_sundae(key, recipe)?;
        }
        Ok(())
    }

    fn validate_sundae(&self, key: &str, recipe: &SundaeRecipe) -> Result<(), ShopError> {
        let invalid = |reason: String| ShopError::InvalidConfig(format!("sundae {}: {}", key, reason));

        if recipe.description.trim().is_empty() {
            return Err(invalid("missing description".to_string()));
        }
        if !(MIN_SCOOPS..=MAX_SCOOPS).contains(&recipe.scoop_count) {
            return Err(invalid(format!(
                "{} scoops, must be between {} and {}",
                recipe.scoop_count, MIN_SCOOPS, MAX_SCOOPS
            )));
        }
        if recipe.flavors.len() != recipe.scoop_count as usize {
            return Err(invalid(format!(
                "{} flavors for {} scoops",
                recipe.flavors.len(),
                recipe.scoop_count
            )));
        }
        if let Some(flavor) = recipe
            .flavors
            .iter()
            .find(|flavor| self.catalog.find_flavor(flavor).is_none())
        {
            return Err(invalid(format!("unknown flavor {}", flavor)));
        }
        if let Some(topping) = recipe
            .toppings
            .iter()
            .find(|topping| self.catalog.find_topping(topping).is_none())
        {
            return Err(invalid(format!("unknown topping {}", topping)));
        }
        Ok(())
    }
}

fn read_config_from_file<P: AsRef<Path>>(path: P) -> Result<ShopConfig, ShopError> {
    let file = File::open(path).map_err(|err| ShopError::ConfigFileError(err.to_string()))?;
    let reader = BufReader::new(file);
    let config: ShopConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Loads the configuration at `path`, falling back to the built-in defaults when
/// there is no such file. A file that exists but can't be used is an error.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ShopConfig, ShopError> {
    let path = path.as_ref();
    let config = if path.exists() {
        debug!("[CONFIG] Reading configuration from {}", path.display());
        read_config_from_file(path)?
    } else {
        info!(
            "[CONFIG] No configuration at {}, using defaults",
            path.display()
        );
        ShopConfig::default()
    };
    config.validate()?;
    info!(
        "[CONFIG] Loaded {} flavors, {} toppings and {} sundaes",
        config.catalog.flavors().len(),
        config.catalog.toppings().len(),
        config.sundaes.len()
    );
    Ok(config)
}
