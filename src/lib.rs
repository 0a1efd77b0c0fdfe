pub mod api;
pub mod ast;
pub mod attribute;
pub mod error;
pub mod merge;
pub mod normalizer;
pub mod parser;
pub mod segmenter;
pub mod serialization;
pub mod utils;

pub use api::{merge, parse, parse_extended, trim, validate};
pub use ast::{Document, Node, ParsedBlock};
pub use error::WppError;
pub use serialization::{serialize, Mode};
