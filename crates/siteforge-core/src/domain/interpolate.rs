//! The placeholder-substitution micro language shared by both generation
//! engines.
//!
//! Deliberately a small, explicitly specified interpreter rather than a
//! general templating engine. Two constructs only:
//!
//! - **Scalar placeholders** — `{{key}}` is replaced by the stringified prop
//!   value for `key` in a single, non-recursive pass: a substituted value is
//!   never itself re-scanned for placeholders. Absent or falsy values
//!   (null, `false`, empty string) render as the empty string.
//! - **Each blocks** — `{{#each arrayKey}}...{{/each}}` expands the inner
//!   content once per element of the named array prop, with the inner
//!   `{{field}}` placeholders substituted from that element's fields.
//!   **Nested `#each` is not supported** — this is a documented constraint of
//!   the language, not an accidental gap.
//!
//! The markup is first split into text segments and each-blocks; scalar
//! substitution runs over text segments only, so an each-block's inner
//! placeholders are never clobbered by the scalar pass.

use serde_json::{Map, Value};

const EACH_OPEN: &str = "{{#each ";
const EACH_CLOSE: &str = "{{/each}}";

/// Render a markup template against a prop map.
pub fn render(markup: &str, props: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(markup.len());
    for segment in split_segments(markup) {
        match segment {
            Segment::Text(text) => out.push_str(&substitute(text, props)),
            Segment::Each { key, body } => out.push_str(&expand_each(key, body, props)),
        }
    }
    out
}

/// Stringify a prop value for scalar substitution.
///
/// Null, `false`, and the empty string are falsy and render empty. Arrays
/// and objects render empty too: they are only meaningful inside an
/// each-block.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Single-pass scalar substitution over a text segment.
///
/// Scans left to right for `{{key}}`; everything between the braces (trimmed)
/// is the key. Output text is appended, never re-scanned, so values
/// containing `{{` do not trigger another substitution round.
fn substitute(text: &str, props: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let key = after_open[..close].trim();
                match props.get(key) {
                    Some(value) => out.push_str(&value_to_string(value)),
                    None => {} // absent -> empty string
                }
                rest = &after_open[close + 2..];
            }
            None => {
                // Unterminated placeholder: emit the remainder verbatim.
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn expand_each(key: &str, body: &str, props: &Map<String, Value>) -> String {
    let Some(Value::Array(items)) = props.get(key) else {
        // Missing or non-array prop: the whole block renders empty.
        return String::new();
    };

    let mut out = String::new();
    for item in items {
        match item {
            Value::Object(fields) => out.push_str(&substitute(body, fields)),
            // Scalar elements expose themselves as `{{item}}`.
            other => {
                let mut fields = Map::new();
                fields.insert("item".to_string(), other.clone());
                out.push_str(&substitute(body, &fields));
            }
        }
    }
    out
}

enum Segment<'a> {
    Text(&'a str),
    Each { key: &'a str, body: &'a str },
}

/// Split a markup template into plain text and single-level each-blocks.
///
/// An opener without a matching `{{/each}}` is treated as plain text.
fn split_segments(markup: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = markup;

    while let Some(open) = rest.find(EACH_OPEN) {
        let after_tag = &rest[open + EACH_OPEN.len()..];
        let Some(tag_end) = after_tag.find("}}") else {
            break;
        };
        let key = after_tag[..tag_end].trim();
        let body_start = &after_tag[tag_end + 2..];
        let Some(close) = body_start.find(EACH_CLOSE) else {
            break;
        };

        if open > 0 {
            segments.push(Segment::Text(&rest[..open]));
        }
        segments.push(Segment::Each {
            key,
            body: &body_start[..close],
        });
        rest = &body_start[close + EACH_CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn scalar_substitution_basic() {
        let p = props(json!({"title": "Hello", "count": 3}));
        assert_eq!(render("<h1>{{title}} x{{count}}</h1>", &p), "<h1>Hello x3</h1>");
    }

    #[test]
    fn absent_and_falsy_render_empty() {
        let p = props(json!({"off": false, "none": null, "blank": ""}));
        assert_eq!(render("[{{off}}|{{none}}|{{blank}}|{{missing}}]", &p), "[|||]");
    }

    #[test]
    fn substitution_is_not_recursive() {
        // A substituted value containing placeholder syntax is emitted
        // verbatim, never re-scanned.
        let p = props(json!({"a": "{{b}}", "b": "boom"}));
        assert_eq!(render("{{a}}", &p), "{{b}}");
    }

    #[test]
    fn each_expands_per_element() {
        let p = props(json!({
            "items": [
                {"label": "One", "href": "/one"},
                {"label": "Two", "href": "/two"}
            ]
        }));
        let out = render("<ul>{{#each items}}<li><a href=\"{{href}}\">{{label}}</a></li>{{/each}}</ul>", &p);
        assert_eq!(
            out,
            "<ul><li><a href=\"/one\">One</a></li><li><a href=\"/two\">Two</a></li></ul>"
        );
    }

    #[test]
    fn each_with_missing_prop_renders_empty() {
        let p = props(json!({}));
        assert_eq!(render("a{{#each xs}}<i>{{v}}</i>{{/each}}b", &p), "ab");
    }

    #[test]
    fn each_with_scalar_elements_uses_item_key() {
        let p = props(json!({"tags": ["rust", "web"]}));
        assert_eq!(render("{{#each tags}}#{{item}} {{/each}}", &p), "#rust #web ");
    }

    #[test]
    fn scalar_pass_does_not_clobber_block_fields() {
        // `label` is not an instance prop; it must survive until block
        // expansion rather than being blanked by the scalar pass.
        let p = props(json!({"title": "T", "items": [{"label": "x"}]}));
        let out = render("{{title}}{{#each items}}{{label}}{{/each}}", &p);
        assert_eq!(out, "Tx");
    }

    #[test]
    fn unterminated_placeholder_passes_through() {
        let p = props(json!({"a": "1"}));
        assert_eq!(render("{{a}} and {{broken", &p), "1 and {{broken");
    }

    #[test]
    fn unclosed_each_is_plain_text() {
        let p = props(json!({"xs": [1]}));
        let out = render("{{#each xs}}no close", &p);
        assert!(out.contains("no close"));
    }
}
