//! Documentation index model and payload parser

pub mod model;
pub mod parser;

pub use model::{DocIndex, MemberType, Page};
pub use parser::{parse_index, parse_index_str};
