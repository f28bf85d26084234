//! Synthetic order event generator for exercising order-processing consumers.
//!
//! This crate provides the `OrderGenerator`, which builds random `OrderEvent`
//! records from small fixed catalogs of sample customers and products. The
//! generator can be seeded so that catalog choices are reproducible across runs.
//!
//! # Architecture
//!
//! ```text
//! CUSTOMER_IDS / PRODUCT_IDS
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ OrderGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! │  - prefix       │
//! │  - last id      │
//! └────────┬────────┘
//!          │
//!          ▼
//!    OrderEvent { orderId, customerId, productIds, timestamp }
//! ```
//!
//! # Example
//!
//! ```rust
//! use order_generator::{OrderGenerator, CUSTOMER_IDS};
//!
//! let mut generator = OrderGenerator::with_seed(42);
//! let order = generator.next_order();
//! assert!(CUSTOMER_IDS.contains(&order.customer_id.as_str()));
//! println!("{}", order.to_json().unwrap());
//! ```

pub mod event;
pub mod generator;

// Re-exports for convenience
pub use event::OrderEvent;
pub use generator::{
    OrderGenerator, CUSTOMER_IDS, DEFAULT_ORDER_ID_PREFIX, MAX_PRODUCTS, MIN_PRODUCTS,
    PRODUCT_IDS,
};
