//! Document driver.

use log::warn;

use crate::Options;
use crate::Range;
use crate::lexer::{Lexeme, Lexer};

use super::builder::ListBuilder;
use super::error::Error;
use super::event::ListEvent;
use super::marker::{Token, interpret};

/// Parses a whole document into list events.
///
/// Text outside list blocks and item text become [`ListEvent::Text`]; each
/// block gets its own [`ListBuilder`].
pub struct ListParser<'a> {
    input: &'a [u8],
    lexer: Lexer<'a>,
    options: Options,
}

impl<'a> ListParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::new_with_options(input, Options::default())
    }

    pub fn new_with_options(input: &'a [u8], options: Options) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            options,
        }
    }

    /// Parse all blocks and collect events.
    ///
    /// Markers that would nest deeper than [`Options::max_nesting`] are kept
    /// as text. Grammar errors abort parsing, but the open block is still
    /// closed so `events` stays balanced.
    pub fn parse(&mut self, events: &mut Vec<ListEvent>) -> Result<(), Error> {
        let mut block = None;
        let result = self.parse_lexemes(&mut block, events);
        if let Some(mut builder) = block.take() {
            builder.exit(events);
        }
        result
    }

    fn parse_lexemes(
        &mut self,
        block: &mut Option<ListBuilder>,
        events: &mut Vec<ListEvent>,
    ) -> Result<(), Error> {
        for lexeme in self.lexer.by_ref() {
            match lexeme {
                Lexeme::Text(range) | Lexeme::Unmatched(range) => {
                    events.push(ListEvent::Text(range));
                }
                Lexeme::Enter(span) => {
                    if let Some(mut stale) = block.take() {
                        stale.exit(events);
                    }
                    let token = marker_token(self.input, span)?;
                    let builder = block.insert(ListBuilder::with_options(&self.options));
                    let result = builder.enter(&token, events);
                    truncate(self.input, result, &token, events)?;
                }
                Lexeme::Matched(span) => {
                    let token = marker_token(self.input, span)?;
                    match block.as_mut() {
                        Some(builder) => {
                            let result = builder.advance(&token, events);
                            truncate(self.input, result, &token, events)?;
                        }
                        None => events.push(ListEvent::Text(span)),
                    }
                }
                Lexeme::Exit => {
                    if let Some(mut builder) = block.take() {
                        builder.exit(events);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Interpret a marker lexeme. The span keeps the newline in front of the
/// marker so a demoted marker reproduces its source.
fn marker_token(input: &[u8], span: Range) -> Result<Token, Error> {
    let raw = span.slice(input);
    interpret(raw.strip_prefix(b"\n").unwrap_or(raw), span)
}

/// Keep a marker that hit the nesting limit as literal text.
fn truncate(
    input: &[u8],
    result: Result<(), Error>,
    token: &Token,
    events: &mut Vec<ListEvent>,
) -> Result<(), Error> {
    match result {
        Err(Error::NestingTooDeep { limit }) => {
            warn!(
                "list nesting limit of {limit} reached at offset {}; marker {:?} kept as text",
                token.span.start,
                token.span.to_string_lossy(input).trim_start_matches('\n')
            );
            events.push(ListEvent::Text(token.span));
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::event::{ItemKind, ListKind, is_balanced};

    fn parse(input: &str) -> Vec<ListEvent> {
        parse_with(input, Options::default())
    }

    fn parse_with(input: &str, options: Options) -> Vec<ListEvent> {
        let mut parser = ListParser::new_with_options(input.as_bytes(), options);
        let mut events = Vec::new();
        parser.parse(&mut events).unwrap();
        assert!(is_balanced(&events), "unbalanced: {events:#?}");
        events
    }

    fn text<'a>(input: &'a str, event: &ListEvent) -> &'a str {
        match event {
            ListEvent::Text(range) => std::str::from_utf8(range.slice(input.as_bytes())).unwrap(),
            _ => panic!("Expected Text event, got {event:?}"),
        }
    }

    fn texts<'a>(input: &'a str, events: &[ListEvent]) -> Vec<&'a str> {
        events
            .iter()
            .filter(|e| matches!(e, ListEvent::Text(_)))
            .map(|e| text(input, e))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_plain_text_only() {
        let input = "no lists here";
        let events = parse(input);
        assert_eq!(events.len(), 1);
        assert_eq!(text(input, &events[0]), "no lists here");
    }

    #[test]
    fn test_simple_list() {
        let input = "  * one\n  * two";
        let events = parse(input);
        assert_eq!(events.len(), 12);
        assert_eq!(
            events[0],
            ListEvent::ListOpen {
                kind: ListKind::Unordered,
                start: None,
            }
        );
        assert_eq!(text(input, &events[3]), " one");
        assert_eq!(text(input, &events[8]), " two");
        assert_eq!(
            events[11],
            ListEvent::ListClose {
                kind: ListKind::Unordered,
            }
        );
    }

    #[test]
    fn test_two_blocks_get_fresh_builders() {
        let input = "  - a\n  - b\n\n  - c";
        let events = parse(input);
        let starts: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ListEvent::ListOpen { start, .. } => Some(*start),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![Some(1), Some(1)]);
    }

    #[test]
    fn test_invalid_continuation_is_text() {
        let input = "  * a\n  .. b";
        let events = parse(input);
        assert_eq!(texts(input, &events), vec![" a", "\n  ..", " b"]);
        assert!(!events.contains(&ListEvent::ParagraphOpen));
    }

    #[test]
    fn test_nesting_limit_truncates() {
        let options = Options {
            max_nesting: 2,
            ..Options::default()
        };
        let input = "  * a\n    * b\n      * c";
        let events = parse_with(input, options);
        let levels: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                ListEvent::ItemOpen { level, .. } => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(levels, vec![1, 2]);
        assert!(events.contains(&ListEvent::Text(Range::new(13, 21))));
        assert_eq!(
            text(input, &ListEvent::Text(Range::new(13, 21))),
            "\n      *"
        );
    }

    #[test]
    fn test_zero_nesting_keeps_everything_as_text() {
        let options = Options {
            max_nesting: 0,
            ..Options::default()
        };
        let input = "  * a\n  * b";
        let events = parse_with(input, options);
        assert!(events.iter().all(|e| matches!(e, ListEvent::Text(_))));
        assert_eq!(texts(input, &events).concat(), input);
    }

    #[test]
    fn test_zero_nesting_continuation_is_text() {
        let options = Options {
            max_nesting: 0,
            ..Options::default()
        };
        let input = "  ** a\n  .. b";
        let events = parse_with(input, options);
        assert_eq!(texts(input, &events), vec!["  **", " a", "\n  ..", " b"]);
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_description_list() {
        let input = "  ? term\n  : definition";
        let events = parse(input);
        assert_eq!(
            events[0],
            ListEvent::ListOpen {
                kind: ListKind::Description,
                start: None,
            }
        );
        assert!(events.contains(&ListEvent::ItemOpen {
            kind: ItemKind::Definition,
            level: 1,
            ordinal: None,
            explicit: false,
        }));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, ListEvent::ListOpen { .. }))
                .count(),
            1
        );
    }
}
