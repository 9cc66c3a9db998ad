//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool owned by the caller, no global handle
//! - Rely on DB constraints, handle failures - no check-then-write
//! - Seeding runs in a single transaction

pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use seed::{seed, SeedData, SeedReport};
