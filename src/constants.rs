//! Default configuration of the ice cream shop

/// Price of a single scoop, any flavor
pub const SCOOP_PRICE: f64 = 2.50;

/// Price of a single topping
pub const TOPPING_PRICE: f64 = 0.50;

/// Cake cones are the base option and cost nothing extra
pub const CAKE_CONE_PRICE: f64 = 0.00;

pub const SUGAR_CONE_PRICE: f64 = 0.75;

pub const WAFFLE_CONE_PRICE: f64 = 1.50;

/// Orders whose subtotal is strictly greater than this amount get the discount
pub const DISCOUNT_THRESHOLD: f64 = 10.00;

/// Fraction of the subtotal that is charged when the discount applies (10% off)
pub const DISCOUNTED_FRACTION: f64 = 0.90;

pub const MIN_SCOOPS: u32 = 1;

pub const MAX_SCOOPS: u32 = 3;

/// Word that ends the toppings prompt
pub const DONE_SENTINEL: &str = "done";

/// Word that returns from the sundae prompt to the main menu
pub const BACK_SENTINEL: &str = "back";

/// File where every completed order is appended
pub const ORDER_LOG_PATH: &str = "daily_orders.txt";

/// Optional JSON file overriding prices, catalogs and sundaes
pub const CONFIG_FILE_PATH: &str = "shop.json";

pub const DEFAULT_FLAVORS: [&str; 6] = [
    "vanilla",
    "caramel",
    "mint",
    "chocolate chip",
    "strawberry swirl",
    "cookie dough",
];

pub const DEFAULT_TOPPINGS: [&str; 3] = ["sprinkles", "nuts", "cherry"];
