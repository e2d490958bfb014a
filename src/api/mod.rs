pub mod error;
pub mod named_tag_list_handlers;
pub mod post_handlers;
pub mod query;
pub mod routes;
pub mod state;
pub mod version_handlers;

pub use error::*;
pub use query::*;
pub use routes::*;
pub use state::*;
