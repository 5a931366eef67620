//! A small markdown-like to HTML converter.
//!
//! This is not a markdown parser: it is a fixed list of find-and-replace
//! rules applied one after the other over the whole text. The order matters,
//! later rules see the output of earlier ones (e.g. paragraphs are wrapped
//! after headers and list items are turned into tags, links are converted
//! after paragraphs are wrapped).
//!
//! Known limitations, kept as-is:
//!
//! - list items are not wrapped in `<ul>` or `<ol>`;
//! - every line inside a multi-line code block but the first one gets wrapped
//!   in a paragraph;
//! - nothing is escaped: `<` and `>` in the source end up as HTML. Only render
//!   trusted content.

use regex::{Captures, Regex};
use std::sync::LazyLock;

enum Replacement {
    /// A `regex` replacement string, `${1}` being the first group.
    Template(&'static str),
    /// Wrap lines that do not already start with a block-ish tag.
    Paragraph,
}

struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

// `<h`, `<p`, `<u`, `<o`, `<l`: headers, paragraphs, pre, lists.
const BLOCK_TAG_PREFIXES: [&str; 5] = ["<h", "<p", "<u", "<o", "<l"];

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("markdown rule patterns are valid"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Paragraph => self.pattern.replace_all(text, |caps: &Captures| {
                let line = &caps[0];
                if line.is_empty() || BLOCK_TAG_PREFIXES.iter().any(|tag| line.starts_with(tag)) {
                    line.to_owned()
                } else {
                    format!("<p>{line}</p>")
                }
            }),
        }
        .into_owned()
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    use Replacement::{Paragraph, Template};

    vec![
        Rule::new("h1", r"(?mR)^# (.*)$", Template("<h1>${1}</h1>")),
        Rule::new("h2", r"(?mR)^## (.*)$", Template("<h2>${1}</h2>")),
        Rule::new("h3", r"(?mR)^### (.*)$", Template("<h3>${1}</h3>")),
        Rule::new("strong", r"(?R)\*\*(.*?)\*\*", Template("<strong>${1}</strong>")),
        Rule::new("em", r"(?R)\*(.*?)\*", Template("<em>${1}</em>")),
        Rule::new("code block", r"(?s)```(.*?)```", Template("<pre><code>${1}</code></pre>")),
        Rule::new("inline code", r"(?R)`(.*?)`", Template("<code>${1}</code>")),
        Rule::new("ordered list item", r"(?mR)^[0-9]+\. (.*)$", Template("<li>${1}</li>")),
        Rule::new("unordered list item", r"(?mR)^- (.*)$", Template("<li>${1}</li>")),
        Rule::new("paragraph", r"(?mR)^.*$", Paragraph),
        Rule::new("link", r"(?R)\[(.*?)\]\((.*?)\)", Template(r#"<a href="${2}">${1}</a>"#)),
    ]
});

/// Convert `source` to HTML. Never fails: text no rule recognizes is left
/// alone (and ends up in a paragraph).
pub fn render(source: &str) -> String {
    RULES
        .iter()
        .fold(source.to_owned(), |html, rule| rule.apply(&html))
}

/// Rule names in the order they are applied.
pub fn rules() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.name)
}
