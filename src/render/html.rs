//! HTML renderer.

use super::Writer;
use crate::list::{ItemKind, ListEvent, ListKind};

/// Write the HTML for a single event.
pub fn render_event(input: &[u8], event: &ListEvent, writer: &mut Writer) {
    match *event {
        ListEvent::ListOpen { kind, start } => match kind {
            ListKind::Ordered => match start {
                Some(n) if n != 1 => {
                    writer.write_str("<ol start=\"");
                    writer.write_u32(n);
                    writer.write_str("\">\n");
                }
                _ => writer.write_str("<ol>\n"),
            },
            ListKind::Unordered => writer.write_str("<ul>\n"),
            ListKind::Description => writer.write_str("<dl>\n"),
        },
        ListEvent::ListClose { kind } => writer.write_str(match kind {
            ListKind::Ordered => "</ol>\n",
            ListKind::Unordered => "</ul>\n",
            ListKind::Description => "</dl>\n",
        }),

        ListEvent::ItemOpen {
            kind,
            level,
            ordinal,
            explicit,
        } => {
            writer.write_str(match kind {
                ItemKind::ListItem => "<li",
                ItemKind::Term => "<dt",
                ItemKind::Definition => "<dd",
            });
            writer.write_str(" class=\"level");
            writer.write_u32(level);
            writer.write_byte(b'"');
            if let (true, Some(n)) = (explicit, ordinal) {
                writer.write_str(" value=\"");
                writer.write_u32(n);
                writer.write_byte(b'"');
            }
            writer.write_byte(b'>');
        }
        ListEvent::ItemClose { kind } => writer.write_str(match kind {
            ItemKind::ListItem => "</li>\n",
            ItemKind::Term => "</dt>\n",
            ItemKind::Definition => "</dd>\n",
        }),

        ListEvent::ContentOpen { item } => writer.write_str(match item {
            ItemKind::ListItem => "<div class=\"li\">\n",
            ItemKind::Term => "<span class=\"dt\">",
            ItemKind::Definition => "<div class=\"dd\">\n",
        }),
        ListEvent::ContentClose { item } => writer.write_str(match item {
            ItemKind::Term => "</span>",
            ItemKind::ListItem | ItemKind::Definition => "\n</div>",
        }),

        ListEvent::ParagraphOpen => writer.write_str("<p>\n"),
        ListEvent::ParagraphClose => writer.write_str("\n</p>"),

        ListEvent::Text(range) => writer.write_escaped_html(range.slice(input)),
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
    fn test_ordered_start() {
        let open = |start| ListEvent::ListOpen {
            kind: ListKind::Ordered,
            start,
        };
        assert_eq!(render("", open(Some(1))), "<ol>\n");
        assert_eq!(render("", open(Some(5))), "<ol start=\"5\">\n");
        assert_eq!(render("", open(None)), "<ol>\n");
    }

    #[test]
    fn test_item_classes() {
        let item = |kind, level| ListEvent::ItemOpen {
            kind,
            level,
            ordinal: None,
            explicit: false,
        };
        assert_eq!(
            render("", item(ItemKind::ListItem, 1)),
            "<li class=\"level1\">"
        );
        assert_eq!(render("", item(ItemKind::Term, 2)), "<dt class=\"level2\">");
        assert_eq!(
            render("", item(ItemKind::Definition, 3)),
            "<dd class=\"level3\">"
        );
    }

    #[test]
    fn test_explicit_value() {
        let item = |explicit| ListEvent::ItemOpen {
            kind: ItemKind::ListItem,
            level: 1,
            ordinal: Some(7),
            explicit,
        };
        assert_eq!(render("", item(false)), "<li class=\"level1\">");
        assert_eq!(render("", item(true)), "<li class=\"level1\" value=\"7\">");
    }

    #[test]
    fn test_content_wrappers() {
        let open = |item| ListEvent::ContentOpen { item };
        let close = |item| ListEvent::ContentClose { item };
        assert_eq!(render("", open(ItemKind::ListItem)), "<div class=\"li\">\n");
        assert_eq!(render("", close(ItemKind::ListItem)), "\n</div>");
        assert_eq!(render("", open(ItemKind::Term)), "<span class=\"dt\">");
        assert_eq!(render("", close(ItemKind::Term)), "</span>");
        assert_eq!(
            render("", open(ItemKind::Definition)),
            "<div class=\"dd\">\n"
        );
    }

    #[test]
    fn test_text_escaped() {
        let text = ListEvent::Text(Range::new(0, 9));
        assert_eq!(render("a <b> & c", text), "a &lt;b&gt; &amp; c");
    }
}
