//! PostgreSQL persistence layer: connection pool, migrations, and one
//! repository per aggregate.

pub mod connection;
pub mod migration;
pub mod repositories;
