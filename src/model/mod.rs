pub mod build;
pub mod common;
pub mod named_tag_list;
pub mod post;

pub use build::*;
pub use common::*;
pub use named_tag_list::*;
pub use post::*;
