//! Markdown Rendering
//!
//! pulldown-cmark for notes and AI prose. Raw HTML in the source is shown
//! as text, and links open in a new tab.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(transform_event);
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn transform_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { dest_url, title, .. }) => {
            let title = if title.is_empty() {
                String::new()
            } else {
                format!(r#" title="{}""#, escape_html(&title))
            };
            Event::Html(CowStr::from(format!(
                r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                escape_html(&dest_url),
                title
            )))
        }
        Event::End(TagEnd::Link) => Event::Html(CowStr::from("</a>")),
        other => other,
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("**Llama 3** is\n\n- fast\n- open");
        assert!(html.contains("<strong>Llama 3</strong>"));
        assert!(html.contains("<li>fast</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = render_markdown("[card](https://huggingface.co/x?a=1&b=2)");
        assert!(html.contains(
            r#"<a href="https://huggingface.co/x?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">card</a>"#
        ));
    }
}
