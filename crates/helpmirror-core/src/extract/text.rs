//! Body-text rendering of an HTML document.
//!
//! Line structure is preserved: `<br>` becomes a newline segment,
//! block-level elements get a trailing newline segment after their content,
//! then every collected segment is trimmed, empties dropped, and the rest
//! joined with `\n`. Collection starts at `<body>` when the document has
//! one, else at the document root. Script and style text is collected like
//! any other text node.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose content boundary becomes a line boundary.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "ul",
];

/// Render `html` to line-break-preserving plain text.
pub fn body_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let root = doc.tree.root();

    let start = root
        .descendants()
        .find(|n| matches!(n.value(), Node::Element(el) if el.name() == "body"))
        .unwrap_or(root);

    let mut segments: Vec<String> = Vec::new();
    collect(start, &mut segments);

    let parts: Vec<&str> = segments
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    parts.join("\n")
}

fn collect(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(t) => out.push(t.text.to_string()),
            Node::Element(el) => {
                if el.name() == "br" {
                    out.push("\n".to_string());
                    continue;
                }
                collect(child, out);
                if BLOCK_TAGS.contains(&el.name()) {
                    out.push("\n".to_string());
                }
            }
            // Comments, doctypes, PIs contribute no text.
            _ => {}
        }
    }
}
