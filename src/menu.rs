//! Text of the menus shown by the shop
use log::warn;

use crate::{cone_type::ConeType, shop_config::ShopConfig, sundae::display_name};

pub fn render_menu(config: &ShopConfig) -> String {
    let prices = &config.prices;
    let mut menu = String::from("\n=== Welcome to the Ice Cream Shop! ===\n");

    menu.push_str("\nAvailable Flavors:\n");
    for flavor in config.catalog.flavors() {
        menu.push_str(&format!("- {}\n", flavor));
    }

    menu.push_str("\nAvailable Toppings:\n");
    for topping in config.catalog.toppings() {
        menu.push_str(&format!("- {}\n", topping));
    }

    menu.push_str("\nCone Options:\n");
    for cone_type in ConeType::values() {
        match prices.cone_price(cone_type) {
            Ok(price) if price > 0.0 => {
                menu.push_str(&format!("- {} Cone (${:.2} extra)\n", cone_type, price))
            }
            Ok(_) => menu.push_str(&format!("- {} Cone (Free)\n", cone_type)),
            Err(err) => warn!("[MENU] Leaving the {} cone off the menu: {}", cone_type.name(), err),
        }
    }

    menu.push_str("\nPrices:\n");
    menu.push_str(&format!("Scoops: ${:.2} each\n", prices.scoop));
    menu.push_str(&format!("Toppings: ${:.2} each\n", prices.topping));
    menu.push_str("\n10% discount on orders over $10!\n");

    menu.push_str("\nWhat would you like to do?\n");
    menu.push_str("1. Place a regular order\n");
    menu.push_str("2. Order a special sundae\n");
    menu.push_str("3. Search for a flavor\n");
    menu.push_str("4. Exit\n");
    menu
}

pub fn render_cone_options() -> String {
    let mut options = String::from("\nChoose your cone type:\n");
    for (i, cone_type) in ConeType::values().iter().enumerate() {
        options.push_str(&format!("{}. {} Cone\n", i + 1, cone_type));
    }
    options
}

pub fn render_sundae_list(config: &ShopConfig) -> String {
    let mut list = String::from("\nAvailable Sundaes:\n");
    for key in config.sundaes.keys() {
        list.push_str(&format!("- {}\n", display_name(key)));
    }
    list
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::shop_config::PriceTable;

    #[test]
    fn should_show_free_and_extra_cones() {
        let menu = render_menu(&ShopConfig::default());
        assert!(menu.contains("- Cake Cone (Free)\n"));
        assert!(menu.contains("- Sugar Cone ($0.75 extra)\n"));
        assert!(menu.contains("- Waffle Cone ($1.50 extra)\n"));
    }

    #[test]
    fn should_show_prices_and_catalog() {
        let menu = render_menu(&ShopConfig::default());
        assert!(menu.contains("Scoops: $2.50 each\n"));
        assert!(menu.contains("Toppings: $0.50 each\n"));
        assert!(menu.contains("- strawberry swirl\n"));
        assert!(menu.contains("- cherry\n"));
        assert!(menu.contains("4. Exit\n"));
    }

    #[test]
    fn should_leave_unpriced_cones_off_the_menu() {
        let mut cones = HashMap::new();
        cones.insert(ConeType::Cake, 0.0);
        cones.insert(ConeType::Waffle, 1.5);
        let config = ShopConfig {
            prices: PriceTable::new(2.5, 0.5, cones),
            ..ShopConfig::default()
        };
        let menu = render_menu(&config);
        assert!(menu.contains("- Cake Cone (Free)\n- Waffle Cone ($1.50 extra)\n"));
        assert_eq!(false, menu.contains("Sugar Cone"));
    }

    #[test]
    fn should_number_cones_in_menu_order() {
        assert_eq!(
            "\nChoose your cone type:\n1. Cake Cone\n2. Sugar Cone\n3. Waffle Cone\n",
            render_cone_options()
        );
    }

    #[test]
    fn should_list_sundaes_by_display_name() {
        assert_eq!(
            "\nAvailable Sundaes:\n- Banana Split\n- Triple Chocolate\n",
            render_sundae_list(&ShopConfig::default())
        );
    }
}
