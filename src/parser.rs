use crate::ast::{Document, Node, ParsedBlock, Properties};
use crate::attribute::{parse_attribute, Attribute};
use crate::error::{ParserError, WppError};
use crate::normalizer::normalize;
use crate::segmenter::{find_blocks, Fragment, Segmenter};
use crate::utils::get_line_and_column;
use miette::NamedSource;

const DEFAULT_SOURCE_NAME: &str = "source.wpp";

/// Parses W++ text into a [`Document`].
///
/// The source is normalized on construction; every span reported in a
/// [`ParserError`] refers to that normalized text.
#[derive(Debug)]
pub struct Parser {
    source: NamedSource<String>,
    text: String,
}

impl Parser {
    pub fn new(source_text: &str) -> Self {
        Self::new_with_name(source_text, DEFAULT_SOURCE_NAME)
    }

    pub fn new_with_name(source_text: &str, name: impl AsRef<str>) -> Self {
        let text = normalize(source_text);
        let source = NamedSource::new(name, text.clone());
        Self { source, text }
    }

    /// Document ::= Fragment { " " Fragment }
    pub fn parse_document(&self) -> Result<Document, WppError> {
        let fragments = Segmenter::new(&self.text).segment();
        if fragments.is_empty() {
            return Err(ParserError::NoGroups {
                src: self.source.clone(),
                span: (0, self.text.len()).into(),
            }
            .into());
        }

        fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| self.parse_fragment(index, fragment))
            .collect()
    }

    /// Fragment ::= [ "[" ] TypeClause "{" { Attribute } "}" [ "]" ]
    fn parse_fragment(&self, index: usize, fragment: &Fragment<'_>) -> Result<Node, WppError> {
        log::debug!("parsing group {index}: {}", fragment.text);
        let text = fragment.text;

        let Some(brace) = text.find('{') else {
            return Err(self.no_type(index, fragment.span()));
        };
        let head = &text[..brace];
        let (type_offset, type_clause) = match head.strip_prefix('[') {
            Some(rest) => (1, rest),
            None => (0, head),
        };
        if type_clause.trim().is_empty() {
            return Err(self.no_type(index, fragment.span()));
        }

        let type_start = fragment.pos_start + type_offset;
        let Attribute { name, values } = self.parse_attribute_at(type_clause, type_start)?;
        if values.len() > 1 {
            return Err(ParserError::TypeHasMultipleNames {
                src: self.source.clone(),
                span: (type_start, type_clause.len()).into(),
                index,
                count: values.len(),
            }
            .into());
        }

        let mut node = Node {
            node_type: Some(name),
            name: values.into_iter().next(),
            properties: Properties::new(),
        };

        let body_start = brace + 1;
        let body_end = text
            .rfind('}')
            .filter(|&end| end >= body_start)
            .unwrap_or(text.len());
        for (offset, clause) in property_clauses(&text[body_start..body_end]) {
            let attribute =
                self.parse_attribute_at(clause, fragment.pos_start + body_start + offset)?;
            log::trace!("  {} = {:?}", attribute.name, attribute.values);
            node.push_values(attribute.name, attribute.values);
        }

        Ok(node)
    }

    fn parse_attribute_at(&self, clause: &str, pos: usize) -> Result<Attribute, WppError> {
        parse_attribute(clause).map_err(|err| {
            ParserError::BadAttribute {
                src: self.source.clone(),
                span: (pos, clause.len()).into(),
                clause: err.clause,
            }
            .into()
        })
    }

    fn no_type(&self, index: usize, span: (usize, usize)) -> WppError {
        ParserError::NoType {
            src: self.source.clone(),
            span: span.into(),
            index,
        }
        .into()
    }
}

/// Cuts a properties body into attribute clauses, each running from a
/// character other than `)`, `,` or whitespace up to and including the next `)`.
/// Returns each clause with its byte offset in `body`.
fn property_clauses(body: &str) -> Vec<(usize, &str)> {
    let bytes = body.as_bytes();
    let mut clauses = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if matches!(bytes[i], b')' | b',') || bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        match body[i..].find(')') {
            Some(rel) => {
                let end = i + rel + 1;
                clauses.push((i, &body[i..end]));
                i = end;
            }
            None => {
                log::debug!("ignoring unterminated attribute text: {:?}", &body[i..]);
                break;
            }
        }
    }

    clauses
}

/// Parses W++ text into a [`Document`].
///
/// # Errors
/// Fails with `NoGroups`, `NoType`, `TypeHasMultipleNames` or `BadAttribute`.
pub fn parse(source_text: &str) -> Result<Document, WppError> {
    Parser::new(source_text).parse_document()
}

/// Separates entity blocks embedded in free text from the text around them.
///
/// Bracketed text without a `{ ... }` body is prose and stays in the
/// appendix. Each block is parsed on its own and the resulting nodes are concatenated
/// in order; the diagnostic source name of a block records the line and
/// column where it starts in `text`. Text outside the blocks becomes the
/// appendix, with runs of blank lines collapsed into one. The appendix is
/// `None` when only whitespace is left.
///
/// # Errors
/// Propagates any error from parsing a block.
pub fn parse_extended(text: &str) -> Result<ParsedBlock, WppError> {
    let blocks = find_blocks(text);

    let mut nodes = Vec::new();
    let mut rest = String::with_capacity(text.len());
    let mut last = 0;
    for range in &blocks {
        rest.push_str(&text[last..range.start]);
        last = range.end;

        let (line, column) = get_line_and_column(text, range.start);
        let name = format!("{DEFAULT_SOURCE_NAME}:{line}:{column}");
        let document = Parser::new_with_name(&text[range.clone()], name)
            .parse_document()
            .inspect_err(|err| log::debug!("block at {line}:{column} failed to parse: {err}"))?;
        nodes.extend(document);
    }
    rest.push_str(&text[last..]);

    let appendix = collapse_blank_lines(&rest);
    Ok(ParsedBlock {
        document: Document::from(nodes),
        appendix: (!appendix.trim().is_empty()).then_some(appendix),
    })
}

fn collapse_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    let mut previous_blank = false;

    for (i, line) in lines.into_iter().enumerate() {
        let blank = line.trim().is_empty();
        if blank && i != last {
            if !previous_blank {
                kept.push("");
            }
            previous_blank = true;
        } else {
            kept.push(line);
            previous_blank = false;
        }
    }

    kept.join("\n")
}
