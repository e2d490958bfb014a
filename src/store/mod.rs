pub mod memory;
pub mod migrations;
pub mod postgres;
pub mod traits;

pub use memory::*;
pub use migrations::*;
pub use postgres::*;
pub use traits::*;
