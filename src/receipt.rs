//! Receipt shown to the customer and the daily order log
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::{errors::ShopError, order::OrderSpec, pricing::Quote, sundae::display_name};

/// Text printed to the customer once the order is priced
pub fn render_receipt(order: &OrderSpec, quote: &Quote) -> String {
    let details = order.details();
    let mut receipt = String::from("\n=== Your Ice Cream Order ===\n");

    if let OrderSpec::Preset {
        key, description, ..
    } = order
    {
        receipt.push_str(&format!("Special Sundae: {}\n", display_name(key)));
        receipt.push_str(&format!("Description: {}\n", description));
    }

    for (i, flavor) in details.flavors().iter().enumerate() {
        receipt.push_str(&format!("Scoop {}: {}\n", i + 1, title_case(flavor)));
    }

    receipt.push_str(&format!("\nCone: {} Cone\n", details.cone_type()));

    if !details.toppings().is_empty() {
        receipt.push_str("\nToppings:\n");
        for topping in details.toppings() {
            receipt.push_str(&format!("- {}\n", title_case(topping)));
        }
    }

    receipt.push_str(&format!("\nSubtotal: ${:.2}\n", quote.total));
    if quote.discount_applied {
        receipt.push_str("10% discount applied!\n");
    }
    receipt
}

pub fn order_log_line(order: &OrderSpec, quote: &Quote) -> String {
    format!(
        "\nOrder: {} scoops - ${:.2}",
        order.details().scoop_count(),
        quote.total
    )
}

/// Appends the summary line of the order to the log at `path`. The file is
/// created if needed and closed before returning.
pub fn append_to_order_log<P: AsRef<Path>>(
    path: P,
    order: &OrderSpec,
    quote: &Quote,
) -> Result<(), ShopError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    file.write_all(order_log_line(order, quote).as_bytes())?;
    debug!("[RECEIPT] Order appended to {}", path.as_ref().display());
    Ok(())
}

/// Capitalizes the first letter of every word: "chocolate chip" -> "Chocolate Chip"
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;
    use crate::{
        cone_type::ConeType,
        order::OrderDetails,
        pricing::apply_discount,
        sundae::{default_sundaes, resolve_sundae},
    };

    fn custom_order() -> OrderSpec {
        OrderSpec::Custom(OrderDetails::new(
            2,
            vec!["mint".to_string(), "cookie dough".to_string()],
            Vec::new(),
            ConeType::Cake,
        ))
    }

    #[test]
    fn should_title_case_every_word() {
        assert_eq!("Chocolate Chip", title_case("chocolate chip"));
        assert_eq!("Mint", title_case("MINT"));
        assert_eq!("", title_case(""));
    }

    #[test]
    fn should_render_a_custom_order_without_toppings() {
        let receipt = render_receipt(&custom_order(), &apply_discount(5.0));
        let expected = "\n=== Your Ice Cream Order ===\n\
                        Scoop 1: Mint\n\
                        Scoop 2: Cookie Dough\n\
                        \n\
                        Cone: Cake Cone\n\
                        \n\
                        Subtotal: $5.00\n";
        assert_eq!(expected, receipt);
    }

    #[test]
    fn should_render_a_sundae_with_its_name_and_toppings() {
        let order = resolve_sundae(&default_sundaes(), "banana_split").unwrap();
        let receipt = render_receipt(&order, &apply_discount(9.0));
        assert!(receipt.contains("Special Sundae: Banana Split\n"));
        assert!(receipt
            .contains("Description: Classic banana split with three flavors and traditional toppings\n"));
        assert!(receipt.contains("Scoop 3: Strawberry Swirl\n"));
        assert!(receipt.contains("\nToppings:\n- Nuts\n- Cherry\n"));
        assert_eq!(false, receipt.contains("discount"));
    }

    #[test]
    fn should_mention_the_discount_only_when_applied() {
        let receipt = render_receipt(&custom_order(), &apply_discount(10.5));
        assert!(receipt.contains("Subtotal: $9.45\n10% discount applied!\n"));

        let receipt = render_receipt(&custom_order(), &apply_discount(10.0));
        assert!(receipt.contains("Subtotal: $10.00\n"));
        assert_eq!(false, receipt.contains("discount"));
    }

    #[test]
    fn should_append_one_line_per_order() {
        let path = env::temp_dir().join(format!(
            "ice_cream_shop_{}_receipt_log.txt",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        append_to_order_log(&path, &custom_order(), &apply_discount(5.0)).unwrap();
        append_to_order_log(&path, &custom_order(), &apply_discount(10.5)).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            "\nOrder: 2 scoops - $5.00\nOrder: 2 scoops - $9.45",
            contents
        );
    }
}
