//! Interactive session of the shop. Reads the customer's choices line by line,
//! prices the order and prints the receipt.
use log::{debug, error, info};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::{
    cone_type::ConeType,
    constants::{BACK_SENTINEL, DONE_SENTINEL, MAX_SCOOPS, MIN_SCOOPS},
    errors::ShopError,
    menu::{render_cone_options, render_menu, render_sundae_list},
    order::{OrderDetails, OrderSpec},
    receipt::{append_to_order_log, render_receipt},
    shop_config::ShopConfig,
    sundae::{normalize_sundae_name, resolve_sundae},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    RegularOrder,
    SpecialSundae,
    SearchFlavor,
    Exit,
}

/// Whole number typed by the customer. Values too large to represent are kept as
/// numbers (saturated) so they get the out of range message, not "enter a number".
pub fn parse_number(line: &str) -> Result<i64, ShopError> {
    match line.trim().parse::<i64>() {
        Ok(number) => Ok(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ShopError::InvalidInput("Please enter a number.".to_string())),
        },
    }
}

pub fn parse_menu_choice(line: &str) -> Result<MenuOption, ShopError> {
    match parse_number(line)? {
        1 => Ok(MenuOption::RegularOrder),
        2 => Ok(MenuOption::SpecialSundae),
        3 => Ok(MenuOption::SearchFlavor),
        4 => Ok(MenuOption::Exit),
        _ => Err(ShopError::InvalidInput(
            "Please choose a valid option (1-4)".to_string(),
        )),
    }
}

pub fn parse_scoop_count(line: &str) -> Result<u32, ShopError> {
    u32::try_from(parse_number(line)?)
        .ok()
        .filter(|scoops| (MIN_SCOOPS..=MAX_SCOOPS).contains(scoops))
        .ok_or_else(|| {
            ShopError::InvalidInput(format!(
                "Please choose between {} and {} scoops.",
                MIN_SCOOPS, MAX_SCOOPS
            ))
        })
}

pub fn parse_cone_choice(line: &str) -> Result<ConeType, ShopError> {
    u32::try_from(parse_number(line)?)
        .ok()
        .and_then(ConeType::from_choice)
        .ok_or_else(|| ShopError::InvalidInput("Please choose 1, 2, or 3.".to_string()))
}

/// Console front of the shop. Every prompt returns `Ok(None)` once the input is
/// exhausted, which ends the session as if the customer had chosen to exit.
pub struct IceCreamShop<'a, R: BufRead, W: Write> {
    config: &'a ShopConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> IceCreamShop<'a, R, W> {
    pub fn new(config: &'a ShopConfig, input: R, output: W) -> IceCreamShop<'a, R, W> {
        IceCreamShop {
            config,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), ShopError> {
        info!("[SHOP] Open");
        loop {
            let menu = render_menu(self.config);
            self.output.write_all(menu.as_bytes())?;
            let Some(line) = self.prompt("Enter your choice (1-4): ")? else {
                break;
            };

            let option = match parse_menu_choice(&line) {
                Ok(option) => option,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            debug!("[SHOP] Menu option {:?}", option);

            let finished = match option {
                MenuOption::RegularOrder => match self.take_regular_order()? {
                    Some(order) => {
                        self.checkout(&order)?;
                        false
                    }
                    None => true,
                },
                MenuOption::SpecialSundae => self.take_sundae_order()?,
                MenuOption::SearchFlavor => self.search_flavor()?,
                MenuOption::Exit => {
                    writeln!(self.output, "\nThank you for visiting our ice cream shop!")?;
                    true
                }
            };
            if finished {
                break;
            }
        }
        info!("[SHOP] Closed");
        Ok(())
    }

    fn take_regular_order(&mut self) -> Result<Option<OrderSpec>, ShopError> {
        let Some(scoop_count) = self.ask_scoop_count()? else {
            return Ok(None);
        };
        let Some(flavors) = self.ask_flavors(scoop_count)? else {
            return Ok(None);
        };
        let Some(toppings) = self.ask_toppings()? else {
            return Ok(None);
        };
        let Some(cone_type) = self.ask_cone_type()? else {
            return Ok(None);
        };
        Ok(Some(OrderSpec::Custom(OrderDetails::new(
            scoop_count,
            flavors,
            toppings,
            cone_type,
        ))))
    }

    fn ask_scoop_count(&mut self) -> Result<Option<u32>, ShopError> {
        loop {
            let Some(line) = self.prompt("\nHow many scoops would you like? (1-3): ")? else {
                return Ok(None);
            };
            match parse_scoop_count(&line) {
                Ok(scoops) => return Ok(Some(scoops)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn ask_flavors(&mut self, scoop_count: u32) -> Result<Option<Vec<String>>, ShopError> {
        writeln!(self.output, "\nFor each scoop, enter the flavor you'd like:")?;
        let mut flavors = Vec::new();
        for scoop in 1..=scoop_count {
            loop {
                let Some(line) = self.prompt(&format!("Scoop {}: ", scoop))? else {
                    return Ok(None);
                };
                match self.config.catalog.find_flavor(&line) {
                    Some(flavor) => {
                        flavors.push(flavor.to_string());
                        break;
                    }
                    None => writeln!(self.output, "Sorry, that flavor isn't available.")?,
                }
            }
        }
        Ok(Some(flavors))
    }

    fn ask_toppings(&mut self) -> Result<Option<Vec<String>>, ShopError> {
        let mut toppings = Vec::new();
        loop {
            let Some(line) = self.prompt("\nEnter a topping (or 'done' if finished): ")? else {
                return Ok(None);
            };
            if line.trim().eq_ignore_ascii_case(DONE_SENTINEL) {
                return Ok(Some(toppings));
            }
            match self.config.catalog.find_topping(&line) {
                Some(topping) => {
                    writeln!(self.output, "Added {}!", topping)?;
                    toppings.push(topping.to_string());
                }
                None => writeln!(self.output, "Sorry, that topping isn't available.")?,
            }
        }
    }

    fn ask_cone_type(&mut self) -> Result<Option<ConeType>, ShopError> {
        loop {
            self.output.write_all(render_cone_options().as_bytes())?;
            let Some(line) = self.prompt("Enter the number of your choice: ")? else {
                return Ok(None);
            };
            match parse_cone_choice(&line) {
                Ok(cone_type) => return Ok(Some(cone_type)),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Returns true when the input ran out
    fn take_sundae_order(&mut self) -> Result<bool, ShopError> {
        let list = render_sundae_list(self.config);
        self.output.write_all(list.as_bytes())?;
        loop {
            let Some(line) = self.prompt("\nEnter sundae name (or 'back' to return): ")? else {
                return Ok(true);
            };
            if line.trim().eq_ignore_ascii_case(BACK_SENTINEL) {
                return Ok(false);
            }
            match resolve_sundae(&self.config.sundaes, &normalize_sundae_name(&line)) {
                Ok(order) => {
                    self.checkout(&order)?;
                    return Ok(false);
                }
                Err(ShopError::InvalidPreset(name)) => {
                    debug!("[SHOP] Unknown sundae {}", name);
                    writeln!(self.output, "Invalid sundae type. Please try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns true when the input ran out
    fn search_flavor(&mut self) -> Result<bool, ShopError> {
        let Some(term) = self.prompt("\nEnter a flavor to search for: ")? else {
            return Ok(true);
        };
        let matches = self.config.catalog.search_flavors(&term);
        if matches.is_empty() {
            writeln!(self.output, "\nNo matching flavors found. Try another search!")?;
        } else {
            writeln!(self.output, "\nMatching flavors found:")?;
            for flavor in matches {
                writeln!(self.output, "- {}", flavor)?;
            }
        }
        Ok(false)
    }

    fn checkout(&mut self, order: &OrderSpec) -> Result<(), ShopError> {
        let quote = order.quote(&self.config.prices)?;
        self.output
            .write_all(render_receipt(order, &quote).as_bytes())?;
        self.output.flush()?;

        if let Err(err) = append_to_order_log(&self.config.order_log_path, order, &quote) {
            error!(
                "[RECEIPT] Could not append order to {}: {}",
                self.config.order_log_path, err
            );
        }
        info!(
            "[SHOP] Order completed: {} scoops, total {:.2}",
            order.details().scoop_count(),
            quote.total
        );
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, ShopError> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("[SHOP] Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
