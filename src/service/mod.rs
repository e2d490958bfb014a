pub mod id_generator;
pub mod named_tag_list_service;
pub mod post_service;

pub use id_generator::*;
pub use named_tag_list_service::*;
pub use post_service::*;
