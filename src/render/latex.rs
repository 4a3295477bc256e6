//! LaTeX renderer.
//!
//! Ordinals are left to `enumerate`; explicit numbers are not rendered.

use super::Writer;
use crate::list::{ItemKind, ListEvent, ListKind};

fn environment(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "enumerate",
        ListKind::Unordered => "itemize",
        ListKind::Description => "description",
    }
}

/// Write the LaTeX for a single event.
pub fn render_event(input: &[u8], event: &ListEvent, writer: &mut Writer) {
    match *event {
        ListEvent::ListOpen { kind, .. } => {
            writer.write_str("\\begin{");
            writer.write_str(environment(kind));
            writer.write_str("}\n");
        }
        ListEvent::ListClose { kind } => {
            writer.write_str("\\end{");
            writer.write_str(environment(kind));
            writer.write_str("}\n");
        }

        ListEvent::ItemOpen { kind, .. } => match kind {
            ItemKind::ListItem => writer.write_str("\\item "),
            ItemKind::Term => writer.write_str("\\item["),
            ItemKind::Definition => {}
        },
        ListEvent::ItemClose { kind } => match kind {
            ItemKind::Term => writer.write_str("] "),
            ItemKind::ListItem | ItemKind::Definition => writer.newline(),
        },

        ListEvent::ContentOpen { .. } | ListEvent::ContentClose { .. } => {}

        ListEvent::ParagraphOpen | ListEvent::ParagraphClose => writer.newline(),

        ListEvent::Text(range) => writer.write_escaped_latex(range.slice(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Range;

    fn render(input: &str, event: ListEvent) -> String {
        let mut writer = Writer::new();
        render_event(input.as_bytes(), &event, &mut writer);
        writer.into_string()
    }

    #[test]
    fn test_environments() {
        let open = ListEvent::ListOpen {
            kind: ListKind::Ordered,
            start: Some(4),
        };
        assert_eq!(render("", open), "\\begin{enumerate}\n");
        let close = ListEvent::ListClose {
            kind: ListKind::Description,
        };
        assert_eq!(render("", close), "\\end{description}\n");
    }

    #[test]
    fn test_term_brackets() {
        let open = ListEvent::ItemOpen {
            kind: ItemKind::Term,
            level: 1,
            ordinal: None,
            explicit: false,
        };
        assert_eq!(render("", open), "\\item[");
        let close = ListEvent::ItemClose {
            kind: ItemKind::Term,
        };
        assert_eq!(render("", close), "] ");
    }

    #[test]
    fn test_definition_has_no_opener() {
        let open = ListEvent::ItemOpen {
            kind: ItemKind::Definition,
            level: 1,
            ordinal: None,
            explicit: false,
        };
        assert_eq!(render("", open), "");
        let close = ListEvent::ItemClose {
            kind: ItemKind::Definition,
        };
        assert_eq!(render("", close), "\n");
    }

    #[test]
    fn test_content_is_silent() {
        let open = |item| ListEvent::ContentOpen { item };
        let close = |item| ListEvent::ContentClose { item };
        assert_eq!(render("", open(ItemKind::ListItem)), "");
        assert_eq!(render("", close(ItemKind::Term)), "");
    }

    #[test]
    fn test_text_escaped() {
        assert_eq!(
            render("x_1 & y", ListEvent::Text(Range::new(0, 7))),
            r"x\_1 \& y"
        );
    }
}
