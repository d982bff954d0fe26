pub mod declarations;
pub mod expressions;
pub mod parser;
pub mod statements;

pub use declarations::TypeKeyword;
pub use parser::{parse, Found, ParseError, ParseResult, Parser, DEFAULT_MAX_DEPTH};
