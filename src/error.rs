use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum WppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] ParserError),

    #[error("Target is not W++: expected a sequence of nodes, found {found}")]
    #[diagnostic(
        code(wpp::not_wpp),
        help("Documents are arrays of {{type, name, properties}} objects.")
    )]
    NotWpp { found: String },

    #[error("Unknown serialization mode `{mode}`")]
    #[diagnostic(
        code(wpp::unknown_mode),
        help("Valid modes are `normal`, `line` and `compact`.")
    )]
    UnknownMode { mode: String },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParserError {
    #[error("No groups in this W++")]
    #[diagnostic(
        code(parser::no_groups),
        help("Entity blocks look like `[Type(\"Name\"){{ key(\"value\") }}]`.")
    )]
    NoGroups {
        #[source_code]
        src: NamedSource<String>,
        #[label("no entity block found here")]
        span: SourceSpan,
    },

    #[error("Group {index} is missing a type")]
    #[diagnostic(
        code(parser::no_type),
        help("Start the block with a type clause such as `Person(\"Alice\")`.")
    )]
    NoType {
        #[source_code]
        src: NamedSource<String>,
        #[label("this group has no type clause")]
        span: SourceSpan,
        index: usize,
    },

    #[error("Type of group {index} has multiple names")]
    #[diagnostic(
        code(parser::type_has_multiple_names),
        help("A type clause takes exactly one name; found {count}.")
    )]
    TypeHasMultipleNames {
        #[source_code]
        src: NamedSource<String>,
        #[label("only one name is allowed here")]
        span: SourceSpan,
        index: usize,
        count: usize,
    },

    #[error("Could not parse attribute `{clause}`")]
    #[diagnostic(
        code(parser::bad_attribute),
        help("Attributes look like `name(\"v1\"+\"v2\")` without nested parentheses.")
    )]
    BadAttribute {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `name(values)`")]
        span: SourceSpan,
        clause: String,
    },
}

/// Raised by [`crate::attribute::parse_attribute`] when used outside a parser,
/// where no source location is available.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Could not parse attribute `{clause}`")]
#[diagnostic(code(attribute::bad_attribute))]
pub struct AttributeError {
    pub clause: String,
}
