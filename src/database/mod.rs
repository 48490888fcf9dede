pub mod connection;
pub mod crud;
pub mod games;
pub mod models;
pub mod players;
pub mod schools;
pub mod setup;
pub mod stats;
pub mod store;
pub mod teams;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use crud::{Entity, Scope};
pub use models::{GameFilter, PlayerFilter, SchoolFilter, StatsFilter, TeamFilter};
pub use store::StatsStore;
