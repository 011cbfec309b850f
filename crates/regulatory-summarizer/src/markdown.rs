use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render a markdown reply to an HTML fragment for the page.
///
/// Sources and pasted text are user supplied: raw HTML is emitted as
/// escaped text, and link or image targets outside http, https, mailto
/// and relative paths are blanked.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_destination(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_safe_destination(&dest) {
        dest
    } else {
        CowStr::Borrowed("")
    }
}

fn is_safe_destination(dest: &str) -> bool {
    // Browsers ignore leading whitespace and control characters before the scheme
    let dest = dest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_control());
    let scheme_end = dest.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if dest[i..].starts_with(':') => {
            let scheme = &dest[..i];
            SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bold_and_lists() {
        let out = to_html("**Recommended Actions:**\n1. Review\n2. Assess\n");
        assert!(out.contains("<strong>Recommended Actions:</strong>"));
        assert!(out.contains("<ol>"));
        assert!(out.contains("<li>Review</li>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let out = to_html("Source: <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn script_links_lose_their_target() {
        let out = to_html("Source: [docs](javascript:alert(document.cookie))");
        assert!(!out.to_lowercase().contains("javascript:"), "html: {out}");
        assert!(out.contains(">docs</a>"));

        let out = to_html("![x](JavaScript:alert(1)) [y](data:text/html,hi) <vbscript:run>");
        assert!(!out.to_lowercase().contains("javascript:"), "html: {out}");
        assert!(!out.contains("data:"), "html: {out}");
        assert!(!out.contains("href=\"vbscript:"), "html: {out}");
    }

    #[test]
    fn web_and_relative_links_are_kept() {
        let out = to_html("[sec](https://www.sec.gov/rules) [mail](mailto:a@b.org) [rel](/api/recent)");
        assert!(out.contains("href=\"https://www.sec.gov/rules\""));
        assert!(out.contains("href=\"mailto:a@b.org\""));
        assert!(out.contains("href=\"/api/recent\""));
    }

    #[test]
    fn destination_scheme_check() {
        assert!(is_safe_destination("HTTPS://example.org"));
        assert!(is_safe_destination("docs/page?x=a:b"));
        assert!(!is_safe_destination(" \tjavascript:alert(1)"));
        assert!(!is_safe_destination("file:///etc/passwd"));
    }
}
