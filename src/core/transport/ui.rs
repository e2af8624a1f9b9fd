//! HTML form UI served by the HTTP transport.
//!
//! One page: a text area, a "Run Agent" button, and a panel showing the last
//! answer. The page is rendered server-side; no scripts.

use crate::domains::tools::RouteResult;

const STYLE: &str = r#"
body {
  font-family: 'Inter', sans-serif;
  background: linear-gradient(to right, #1f1c2c, #928dab);
  color: #f1f1f1;
  margin: 0;
}
main {
  background-color: rgba(0, 0, 0, 0.3);
  border-radius: 12px;
  padding: 2rem;
  max-width: 800px;
  margin: 3rem auto;
  box-shadow: 0 0 20px rgba(0, 0, 0, 0.3);
}
h1 { text-align: center; font-size: 2.5rem; }
label { font-weight: 600; font-size: 1.1rem; }
textarea {
  width: 100%;
  min-height: 120px;
  box-sizing: border-box;
  background-color: rgba(255, 255, 255, 0.1);
  color: #fff;
  border-radius: 10px;
  font-size: 16px;
  padding: 0.6rem;
}
button {
  background: linear-gradient(to right, #7873f5, #4e54c8);
  border: none;
  border-radius: 25px;
  color: white;
  font-weight: 600;
  padding: 0.6rem 2rem;
  margin-top: 10px;
  cursor: pointer;
}
.result { margin-top: 1.5rem; padding: 1rem; border-radius: 10px; white-space: pre-wrap; }
.success { background-color: rgba(33, 195, 84, 0.25); }
.error { background-color: rgba(255, 43, 43, 0.25); }
.tool { font-size: 0.8rem; opacity: 0.7; margin-top: 0.5rem; }
"#;

/// What the result panel shows.
pub enum Panel<'a> {
    /// Nothing submitted yet, or a blank submission.
    Empty,
    /// A routed query.
    Routed(&'a RouteResult),
    /// The form body itself could not be read.
    Invalid(&'a str),
}

/// Escape text for safe inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_panel(panel: &Panel<'_>) -> String {
    match panel {
        Panel::Empty => String::new(),
        Panel::Routed(result) => {
            let class = if result.is_success() { "success" } else { "error" };
            format!(
                r#"<section class="result {}">{}<div class="tool">tool: {}</div></section>"#,
                class,
                escape_html(&result.render()),
                result.handler()
            )
        }
        Panel::Invalid(message) => format!(
            r#"<section class="result error">{}</section>"#,
            escape_html(message)
        ),
    }
}

/// Render the full page, keeping the submitted query in the text area.
pub fn render_page(title: &str, query: &str, panel: Panel<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>🤖 Multi-Tool AI Agent</h1>
<form method="post" action="/">
<label for="user_input">Enter your query:</label>
<textarea id="user_input" name="user_input">{query}</textarea>
<button type="submit">Run Agent</button>
</form>
{panel}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        style = STYLE,
        query = escape_html(query),
        panel = render_panel(&panel),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolKind;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_and_no_panel() {
        let page = render_page("agent", "", Panel::Empty);
        assert!(page.contains(r#"name="user_input""#));
        assert!(page.contains("Run Agent"));
        assert!(!page.contains(r#"class="result"#));
    }

    #[test]
    fn test_success_panel() {
        let result = RouteResult::Success {
            handler: ToolKind::Calculator,
            output: "4".into(),
        };
        let page = render_page("agent", "2+2", Panel::Routed(&result));
        assert!(page.contains(r#"<section class="result success">4"#));
        assert!(page.contains("tool: calculator"));
        assert!(page.contains(">2+2</textarea>"));
    }

    #[test]
    fn test_error_panel_is_escaped() {
        let result = RouteResult::Failure {
            handler: ToolKind::Calculator,
            message: "Error: unexpected '<' at position 1".into(),
        };
        let page = render_page("agent", "1<2", Panel::Routed(&result));
        assert!(page.contains(r#"class="result error""#));
        assert!(page.contains("⚠️ Error: unexpected &#39;&lt;&#39; at position 1"));
    }
}
