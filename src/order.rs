//! Orders placed at the shop, either built scoop by scoop or taken from a sundae preset
use crate::{
    cone_type::ConeType,
    errors::ShopError,
    pricing::{quote, Quote},
    shop_config::PriceTable,
};

/// What goes into an ice cream. Both kinds of order share this record.
///
/// The scoop count and the flavors are validated by whoever builds the order;
/// the record itself does not check that there is one flavor per scoop.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    scoop_count: u32,
    flavors: Vec<String>,
    toppings: Vec<String>,
    cone_type: ConeType,
}

impl OrderDetails {
    pub fn new(
        scoop_count: u32,
        flavors: Vec<String>,
        toppings: Vec<String>,
        cone_type: ConeType,
    ) -> OrderDetails {
        OrderDetails {
            scoop_count,
            flavors,
            toppings,
            cone_type,
        }
    }

    pub fn scoop_count(&self) -> u32 {
        self.scoop_count
    }

    pub fn flavors(&self) -> &Vec<String> {
        &self.flavors
    }

    pub fn toppings(&self) -> &Vec<String> {
        &self.toppings
    }

    pub fn cone_type(&self) -> ConeType {
        self.cone_type
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderSpec {
    Custom(OrderDetails),
    Preset {
        key: String,
        description: String,
        details: OrderDetails,
    },
}

impl OrderSpec {
    pub fn details(&self) -> &OrderDetails {
        match self {
            OrderSpec::Custom(details) => details,
            OrderSpec::Preset { details, .. } => details,
        }
    }

    pub fn quote(&self, prices: &PriceTable) -> Result<Quote, ShopError> {
        quote(self.details(), prices)
    }

    /// Final price of the order, discount included
    pub fn cost(&self, prices: &PriceTable) -> Result<f64, ShopError> {
        Ok(self.quote(prices)?.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> OrderDetails {
        OrderDetails::new(
            2,
            vec!["vanilla".to_string(), "mint".to_string()],
            vec!["nuts".to_string()],
            ConeType::Sugar,
        )
    }

    #[test]
    fn should_expose_the_same_details_for_both_kinds_of_order() {
        let custom = OrderSpec::Custom(details());
        let preset = OrderSpec::Preset {
            key: "house_special".to_string(),
            description: "Two scoops".to_string(),
            details: details(),
        };
        assert_eq!(custom.details(), preset.details());
    }

    #[test]
    fn should_price_both_kinds_of_order_the_same_way() {
        let prices = PriceTable::default();
        let custom = OrderSpec::Custom(details());
        let preset = OrderSpec::Preset {
            key: "house_special".to_string(),
            description: "Two scoops".to_string(),
            details: details(),
        };
        // 2 * 2.50 + 0.50 + 0.75
        assert_eq!(6.25, custom.cost(&prices).unwrap());
        assert_eq!(custom.cost(&prices).unwrap(), preset.cost(&prices).unwrap());
    }
}
