//! XML ↔ JSON transcoding over a generic tree.
//!
//! # Design
//! XML is parsed event-by-event into a small element tree, then mapped to a
//! `serde_json::Value`: element names become object keys, repeated sibling
//! elements collapse into arrays, attributes become `@`-prefixed keys, and
//! text alongside children or attributes lands under `#text`. Leaf text is
//! always a JSON string.
//!
//! The reverse direction renders a JSON tree as indented XML elements.
//! Formatting and the attribute-vs-element distinction are not preserved
//! across a round-trip, but the logical tree of named nodes and values is.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Parse an XML document and serialize its logical tree as pretty-printed
/// JSON. Fails with [`ConvertError::Parse`] on malformed XML.
pub fn xml_to_json(xml: &str) -> Result<String, ConvertError> {
    let root = parse_element_tree(xml)?;
    let mut obj = Map::new();
    insert_grouped(&mut obj, &root.name, element_to_value(&root));
    serde_json::to_string_pretty(&Value::Object(obj))
        .map_err(|e| ConvertError::Parse(e.to_string()))
}

/// Parse a JSON document and render it as indented XML.
///
/// A single-key top-level object becomes that element directly; a multi-key
/// object is wrapped in `<root>`. Top-level arrays and scalars have no
/// natural XML root and fail with [`ConvertError::Structural`].
pub fn json_to_xml(json: &str) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ConvertError::Parse(format!("invalid JSON: {e}")))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Array(_) => {
            return Err(ConvertError::Structural(
                "top-level JSON array has no XML root element".to_string(),
            ))
        }
        other => {
            return Err(ConvertError::Structural(format!(
                "top-level JSON {} has no XML root element",
                value_kind(&other)
            )))
        }
    };

    let mut out = String::new();
    if let Some((name, child)) = single_element_root(&map) {
        render_element(&mut out, name, child, 0)?;
        return Ok(out);
    }
    render_element(&mut out, "root", &Value::Object(map), 0)?;
    Ok(out)
}

/// The lone key of `map`, provided its value renders as exactly one element.
/// An array value would repeat the root element, which is not well-formed.
fn single_element_root(map: &Map<String, Value>) -> Option<(&str, &Value)> {
    if map.len() != 1 {
        return None;
    }
    let (name, child) = map.iter().next()?;
    match child {
        Value::Array(_) => None,
        _ => Some((name.as_str(), child)),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// --- XML parsing ---

#[derive(Debug)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }
}

fn parse_element_tree(xml: &str) -> Result<XmlElement, ConvertError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(tag)) => {
                let node = start_element(&tag)?;
                stack.push(node);
            }
            Ok(Event::Empty(tag)) => {
                let node = start_element(&tag)?;
                attach(node, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut root)?;
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(current) = stack.last_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| ConvertError::Parse(format!("invalid XML: {e}")))?;
                    current.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::Parse(format!("invalid XML: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ConvertError::Parse("invalid XML: unclosed element".to_string()));
    }
    root.ok_or_else(|| ConvertError::Parse("invalid XML: no root element".to_string()))
}

fn start_element(tag: &quick_xml::events::BytesStart<'_>) -> Result<XmlElement, ConvertError> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
    let mut node = XmlElement::new(name);
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| ConvertError::Parse(format!("invalid XML attribute: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ConvertError::Parse(format!("invalid XML attribute: {e}")))?
            .into_owned();
        node.attributes.push((key, value));
    }
    Ok(node)
}

fn attach(
    node: XmlElement,
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
) -> Result<(), ConvertError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(ConvertError::Parse(
            "invalid XML: multiple root elements".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}

fn element_to_value(el: &XmlElement) -> Value {
    if el.children.is_empty() && el.attributes.is_empty() {
        return Value::String(el.text.trim().to_string());
    }

    let mut obj = Map::new();
    for (key, value) in &el.attributes {
        obj.insert(format!("@{key}"), Value::String(value.clone()));
    }
    for child in &el.children {
        insert_grouped(&mut obj, &child.name, element_to_value(child));
    }
    let text = el.text.trim();
    if !text.is_empty() {
        obj.insert("#text".to_string(), Value::String(text.to_string()));
    }
    Value::Object(obj)
}

/// Insert `value` under `key`, collapsing repeated keys into an array.
fn insert_grouped(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match obj.get_mut(key) {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

// --- XML rendering ---

fn render_element(
    out: &mut String,
    name: &str,
    value: &Value,
    depth: usize,
) -> Result<(), ConvertError> {
    if !is_valid_element_name(name) {
        return Err(ConvertError::Structural(format!(
            "key {name:?} is not a valid XML element name"
        )));
    }
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            out.push_str(&format!("{indent}<{name}>\n"));
            for (key, child) in map {
                render_element(out, key, child, depth + 1)?;
            }
            out.push_str(&format!("{indent}</{name}>\n"));
        }
        // Arrays render as repeated sibling elements under the same name.
        Value::Array(items) => {
            for item in items {
                render_element(out, name, item, depth)?;
            }
        }
        Value::Null => render_leaf(out, name, "null", depth),
        Value::Bool(b) => render_leaf(out, name, &b.to_string(), depth),
        Value::Number(n) => render_leaf(out, name, &n.to_string(), depth),
        Value::String(s) => render_leaf(out, name, s, depth),
    }
    Ok(())
}

fn render_leaf(out: &mut String, name: &str, text: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}<{name}>{}</{name}>\n", xml_escape(text)));
}

/// Close enough to an XML NCName: a letter or underscore first, then
/// letters, digits, `-`, `.` or `_`. Rejects whitespace and the `@attr` /
/// `#text` keys that `xml_to_json` itself produces — those shapes cannot
/// become well-formed elements.
fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn repeated_siblings_become_array() {
        let json = xml_to_json("<a><b>1</b><b>2</b></a>").unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"]["b"], parse(r#"["1","2"]"#));
    }

    #[test]
    fn single_child_stays_scalar() {
        let json = xml_to_json("<a><b>1</b></a>").unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"]["b"], "1");
    }

    #[test]
    fn attributes_become_prefixed_keys() {
        let json = xml_to_json(r#"<a id="7"><b>x</b></a>"#).unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"]["@id"], "7");
        assert_eq!(tree["a"]["b"], "x");
    }

    #[test]
    fn text_alongside_attributes_lands_under_text_key() {
        let json = xml_to_json(r#"<a lang="en">hello</a>"#).unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"]["@lang"], "en");
        assert_eq!(tree["a"]["#text"], "hello");
    }

    #[test]
    fn self_closing_element_is_empty_string() {
        let json = xml_to_json("<a><b/></a>").unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"]["b"], "");
    }

    #[test]
    fn entities_are_unescaped() {
        let json = xml_to_json("<a>x &amp; y</a>").unwrap();
        let tree = parse(&json);
        assert_eq!(tree["a"], "x & y");
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        let err = xml_to_json("<a><b></a>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn empty_input_is_parse_error() {
        let err = xml_to_json("").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn multiple_roots_is_parse_error() {
        let err = xml_to_json("<a/><b/>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn single_key_object_becomes_root_element() {
        let xml = json_to_xml(r#"{"note":{"to":"A","from":"B"}}"#).unwrap();
        assert!(xml.starts_with("<note>"));
        assert!(xml.contains("<to>A</to>"));
        assert!(xml.contains("<from>B</from>"));
        assert!(xml.trim_end().ends_with("</note>"));
    }

    #[test]
    fn multi_key_object_is_wrapped_in_root() {
        let xml = json_to_xml(r#"{"a":1,"b":2}"#).unwrap();
        assert!(xml.starts_with("<root>"));
        assert!(xml.contains("<a>1</a>"));
        assert!(xml.contains("<b>2</b>"));
    }

    #[test]
    fn array_value_renders_repeated_elements() {
        let xml = json_to_xml(r#"{"a":{"b":["1","2"]}}"#).unwrap();
        assert_eq!(xml.matches("<b>").count(), 2);
        assert!(xml.contains("<b>1</b>"));
        assert!(xml.contains("<b>2</b>"));
    }

    #[test]
    fn single_key_array_is_wrapped_to_stay_well_formed() {
        // {"b": [1,2]} as-is would repeat the root element.
        let xml = json_to_xml(r#"{"b":[1,2]}"#).unwrap();
        assert!(xml.starts_with("<root>"));
        assert_eq!(xml.matches("<b>").count(), 2);
    }

    #[test]
    fn key_with_whitespace_is_structural_error() {
        let err = json_to_xml(r#"{"a b":{"c":"1"}}"#).unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn attribute_and_text_keys_are_structural_errors() {
        // The keys this codec's own XML→JSON direction produces for
        // attributes and mixed text have no element form.
        let json = xml_to_json(r#"<a id="7"><b>x</b></a>"#).unwrap();
        let err = json_to_xml(&json).unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));

        let err = json_to_xml(r##"{"a":{"#text":"hi"}}"##).unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn underscore_and_dotted_names_are_allowed() {
        let xml = json_to_xml(r#"{"_a":{"b.c":"1","d-e":"2"}}"#).unwrap();
        assert!(xml.contains("<b.c>1</b.c>"));
        assert!(xml.contains("<d-e>2</d-e>"));
    }

    #[test]
    fn top_level_array_is_structural_error() {
        let err = json_to_xml("[1,2,3]").unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn top_level_scalar_is_structural_error() {
        let err = json_to_xml("42").unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = json_to_xml("{not json").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn text_content_is_escaped() {
        let xml = json_to_xml(r#"{"a":"x < y & z"}"#).unwrap();
        assert!(xml.contains("<a>x &lt; y &amp; z</a>"));
    }

    #[test]
    fn logical_roundtrip_preserves_tree() {
        let xml = "<order><id>42</id><item>pen</item><item>ink</item></order>";
        let json = xml_to_json(xml).unwrap();
        let back = json_to_xml(&json).unwrap();
        let again = xml_to_json(&back).unwrap();
        assert_eq!(parse(&json), parse(&again));
    }
}
