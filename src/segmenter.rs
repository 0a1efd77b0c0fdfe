use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

/// One entity block cut out of normalized text, with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Fragment<'_> {
    pub fn span(&self) -> (usize, usize) {
        (self.pos_start, self.pos_end - self.pos_start)
    }
}

/// Splits normalized text into `[Type("Name"){ ... }]` shaped fragments by
/// tracking brace depth. Braces inside double-quoted strings are ignored.
pub struct Segmenter<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Segmenter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Returns every complete fragment. Text after the last closing brace is dropped.
    pub fn segment(&mut self) -> Vec<Fragment<'a>> {
        let mut fragments = Vec::new();
        let mut start: Option<usize> = None;
        let mut depth = 0usize;
        let mut in_string = false;

        while let Some((i, c)) = self.advance() {
            if start.is_none() {
                if c.is_whitespace() {
                    continue;
                }
                start = Some(i);
            }

            if c == '\\' {
                self.advance();
                continue;
            }
            if in_string {
                if c == '"' {
                    in_string = false;
                }
                continue;
            }

            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        let pos_start = start.take().unwrap_or(i);
                        let pos_end = self.closing_bracket().unwrap_or(i + 1);
                        fragments.push(Fragment {
                            text: &self.input[pos_start..pos_end],
                            pos_start,
                            pos_end,
                        });
                    }
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            log::debug!("ignoring trailing text without a closing brace: {:?}", &self.input[s..]);
        }
        fragments
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    /// Consumes an optional `]` after a closing brace, skipping whitespace
    /// before it. Returns the end of the fragment when one was found.
    fn closing_bracket(&mut self) -> Option<usize> {
        let mut lookahead = self.chars.clone();
        while lookahead.next_if(|(_, c)| c.is_whitespace()).is_some() {}
        let (j, _) = lookahead.next_if(|&(_, c)| c == ']')?;
        self.chars = lookahead;
        Some(j + 1)
    }
}

/// Locates entity blocks inside free text. A block opens at `[` or `{` and
/// closes at the first `]` or `}` outside quotes, absorbing one directly
/// following `]`. Spans without an unquoted `{` are bracketed prose and are
/// skipped. An unclosed opener ends the scan.
pub fn find_blocks(text: &str) -> Vec<Range<usize>> {
    let mut blocks = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '[' && c != '{' {
            continue;
        }

        let mut has_body = c == '{';
        let mut in_string = false;
        let mut end = None;
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = !in_string,
                '{' if !in_string => has_body = true,
                ']' | '}' if !in_string => {
                    let mut block_end = i + 1;
                    if c == '}' {
                        if let Some(&(j, ']')) = chars.peek() {
                            chars.next();
                            block_end = j + 1;
                        }
                    }
                    end = Some(block_end);
                    break;
                }
                _ => {}
            }
        }

        match end {
            Some(end) if has_body => blocks.push(start..end),
            Some(end) => log::trace!("skipping bracketed prose: {:?}", &text[start..end]),
            None => break,
        }
    }

    blocks
}
