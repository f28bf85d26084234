//! Order event generator backed by a seedable RNG.

use crate::event::{OrderEvent, TIMESTAMP_FORMAT};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Sample customers an order can be placed by.
pub const CUSTOMER_IDS: [&str; 5] = [
    "customer-001",
    "customer-002",
    "customer-003",
    "customer-004",
    "customer-005",
];

/// Sample products an order can contain.
pub const PRODUCT_IDS: [&str; 5] = [
    "product-001",
    "product-002",
    "product-003",
    "product-004",
    "product-005",
];

/// Minimum number of products in a generated order.
pub const MIN_PRODUCTS: usize = 1;

/// Maximum number of products in a generated order.
pub const MAX_PRODUCTS: usize = 3;

pub const DEFAULT_ORDER_ID_PREFIX: &str = "order-";

/// Generator that produces random order events.
///
/// Customer and product choices come from a seeded random number generator.
/// Order ids combine a prefix with a millisecond clock reading that is forced
/// to be strictly increasing, so ids never collide within one generator even
/// when several orders are built in the same millisecond.
pub struct OrderGenerator {
    /// Random number generator for catalog sampling
    rng: StdRng,
    /// Prefix prepended to every order id
    prefix: String,
    /// Millisecond value used for the previous order id
    last_millis: Option<i64>,
    /// Number of orders generated so far
    generated: u64,
}

impl OrderGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed.
    ///
    /// Catalog choices are reproducible for the same seed; order ids and
    /// timestamps still follow the wall clock.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            prefix: DEFAULT_ORDER_ID_PREFIX.to_string(),
            last_millis: None,
            generated: 0,
        }
    }

    /// Override the order id prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Number of orders generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Build the next order event.
    pub fn next_order(&mut self) -> OrderEvent {
        let now = chrono::Local::now();
        let millis = self.next_millis(now.timestamp_millis());
        let order_id = format!("{}{}", self.prefix, millis);

        let customer_id = CUSTOMER_IDS[self.rng.gen_range(0..CUSTOMER_IDS.len())].to_string();

        let num_products = self.rng.gen_range(MIN_PRODUCTS..=MAX_PRODUCTS);
        let product_ids: Vec<String> = PRODUCT_IDS
            .choose_multiple(&mut self.rng, num_products)
            .map(|id| id.to_string())
            .collect();

        self.generated += 1;

        OrderEvent {
            order_id,
            customer_id,
            product_ids,
            timestamp: now.naive_local().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Return a millisecond value strictly greater than the previous one.
    fn next_millis(&mut self, now_millis: i64) -> i64 {
        let millis = match self.last_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_millis = Some(millis);
        millis
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
