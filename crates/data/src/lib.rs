//! Static content for the game: the embedded modifier catalog and tuning
//! config, parsed and validated into core types at process start.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
