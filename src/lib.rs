//! listmark: nested list markup to HTML and LaTeX
//!
//! Lines indented by two spaces (or a tab) per level and starting with a
//! list marker become nested lists:
//!
//! | marker | meaning                                  |
//! |--------|------------------------------------------|
//! | `-`    | ordered item (`-5` sets the number)      |
//! | `*`    | unordered item                           |
//! | `?`    | description term                         |
//! | `:`    | description definition                   |
//! | `--` `**` `::` | item that may hold several paragraphs |
//! | `..`   | next paragraph of the enclosing item     |
//!
//! # Design Principles
//! - Streaming events only, no tree
//! - One pass, no lookahead beyond the current marker
//! - Text events are ranges into the input buffer
//! - Renderers are stateless lookups from event to output

pub mod cursor;
pub mod escape;
pub mod lexer;
pub mod limits;
pub mod list;
pub mod range;
pub mod render;

// Re-export primary types
pub use list::{
    Error, ItemKind, ListBuilder, ListEvent, ListKind, ListParser, MarkerKind, Token, is_balanced,
};
pub use range::Range;
pub use render::{Format, Writer};

/// Parsing options.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Emit `ContentOpen` / `ContentClose` around item content.
    pub wrap_content: bool,
    /// Maximum number of open list levels in one block. Deeper markers
    /// are kept as text.
    pub max_nesting: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap_content: true,
            max_nesting: limits::MAX_LIST_NESTING,
        }
    }
}

/// Parse a document into list events.
///
/// # Example
/// ```
/// use listmark::{ListEvent, ListKind};
///
/// let events = listmark::parse("  * one").unwrap();
/// assert!(matches!(
///     events[0],
///     ListEvent::ListOpen {
///         kind: ListKind::Unordered,
///         start: None,
///     }
/// ));
/// assert!(listmark::is_balanced(&events));
/// ```
pub fn parse(input: &str) -> Result<Vec<ListEvent>, Error> {
    parse_with_options(input, &Options::default())
}

/// Parse a document into list events with options.
pub fn parse_with_options(input: &str, options: &Options) -> Result<Vec<ListEvent>, Error> {
    let mut events = Vec::with_capacity(input.len() / 4);
    ListParser::new_with_options(input.as_bytes(), *options).parse(&mut events)?;
    Ok(events)
}

/// Convert list markup to HTML.
///
/// # Example
/// ```
/// let html = listmark::to_html("  - first\n  - second").unwrap();
/// assert!(html.starts_with("<ol>\n<li class=\"level1\">"));
/// assert!(html.ends_with("</li>\n</ol>\n"));
/// ```
pub fn to_html(input: &str) -> Result<String, Error> {
    to_html_with_options(input, &Options::default())
}

/// Convert list markup to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> Result<String, Error> {
    render_to_string(input, options, Format::Html)
}

/// Convert list markup to HTML, writing into a provided buffer.
///
/// The buffer is cleared first and keeps its allocation. On error it is
/// left empty.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) -> Result<(), Error> {
    out.clear();
    let events = parse(input)?;
    let mut writer = Writer::from_vec(std::mem::take(out));
    Format::Html.render_events(input.as_bytes(), &events, &mut writer);
    *out = writer.into_vec();
    Ok(())
}

/// Convert list markup to LaTeX.
///
/// # Example
/// ```
/// let latex = listmark::to_latex("  * a").unwrap();
/// assert_eq!(latex, "\\begin{itemize}\n\\item  a\n\\end{itemize}\n");
/// ```
pub fn to_latex(input: &str) -> Result<String, Error> {
    to_latex_with_options(input, &Options::default())
}

/// Convert list markup to LaTeX with options.
pub fn to_latex_with_options(input: &str, options: &Options) -> Result<String, Error> {
    render_to_string(input, options, Format::Latex)
}

fn render_to_string(input: &str, options: &Options, format: Format) -> Result<String, Error> {
    let events = parse_with_options(input, options)?;
    let mut writer = Writer::with_capacity_for(input.len());
    format.render_events(input.as_bytes(), &events, &mut writer);
    Ok(writer.into_string())
}
