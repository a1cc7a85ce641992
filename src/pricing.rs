//! Cost of an order and the threshold discount
use log::debug;

use crate::{
    constants::{DISCOUNTED_FRACTION, DISCOUNT_THRESHOLD},
    errors::ShopError,
    order::OrderDetails,
    shop_config::PriceTable,
};

/// Result of pricing an order. `discount_applied` comes from the same
/// subtotal comparison that produced `total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub subtotal: f64,
    pub total: f64,
    pub discount_applied: bool,
}

/// scoops * scoop price + toppings * topping price + cone surcharge
pub fn subtotal(details: &OrderDetails, prices: &PriceTable) -> Result<f64, ShopError> {
    let scoop_cost = details.scoop_count() as f64 * prices.scoop;
    let topping_cost = details.toppings().len() as f64 * prices.topping;
    let cone_cost = prices.cone_price(details.cone_type())?;
    Ok(scoop_cost + topping_cost + cone_cost)
}

pub fn apply_discount(subtotal: f64) -> Quote {
    let discount_applied = subtotal > DISCOUNT_THRESHOLD;
    let total = if discount_applied {
        subtotal * DISCOUNTED_FRACTION
    } else {
        subtotal
    };
    Quote {
        subtotal,
        total,
        discount_applied,
    }
}

pub fn quote(details: &OrderDetails, prices: &PriceTable) -> Result<Quote, ShopError> {
    let quote = apply_discount(subtotal(details, prices)?);
    debug!(
        "[PRICING] {} scoops, {} toppings, {} cone: subtotal {} total {}",
        details.scoop_count(),
        details.toppings().len(),
        details.cone_type().name(),
        quote.subtotal,
        quote.total
    );
    Ok(quote)
}
