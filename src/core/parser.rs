use crate::domain::model::{IconDocument, IconElement};
use crate::utils::error::{Result, SvgstoreError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parses one icon file's bytes into an [`IconDocument`].
///
/// The first `<svg>` element in document order is taken as the root; its
/// `viewBox` attribute is captured verbatim and its direct child elements are
/// deep-copied as owned event streams. Top-level text and comment nodes are
/// dropped; everything inside a child element's subtree is kept.
pub fn parse(content: &[u8]) -> Result<IconDocument> {
    let mut reader = Reader::from_reader(content);
    let mut buf = Vec::new();

    let (root, has_children) = loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.local_name().as_ref() == b"svg" => break (e.into_owned(), true),
            Event::Empty(e) if e.local_name().as_ref() == b"svg" => break (e.into_owned(), false),
            Event::Eof => return Err(SvgstoreError::NoRootElement),
            _ => {}
        }
        buf.clear();
    };
    buf.clear();

    let view_box = view_box_of(&root)?;
    let children = if has_children {
        collect_children(&mut reader, &mut buf)?
    } else {
        Vec::new()
    };

    Ok(IconDocument { view_box, children })
}

fn view_box_of(root: &BytesStart<'_>) -> Result<String> {
    for attr in root.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == b"viewBox" {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            return Ok(value.into_owned());
        }
    }
    Ok(String::new())
}

/// Reads events up to the root element's closing tag, grouping each direct
/// child element together with its full subtree.
fn collect_children(
    reader: &mut Reader<&[u8]>,
    buf: &mut Vec<u8>,
) -> Result<Vec<IconElement>> {
    let mut children = Vec::new();
    let mut current: Vec<Event<'static>> = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(buf)? {
            Event::Start(e) => {
                depth += 1;
                current.push(Event::Start(e.into_owned()));
            }
            Event::Empty(e) => {
                if depth == 0 {
                    children.push(IconElement {
                        events: vec![Event::Empty(e.into_owned())],
                    });
                } else {
                    current.push(Event::Empty(e.into_owned()));
                }
            }
            Event::End(e) => {
                if depth == 0 {
                    // Closing tag of the root element.
                    break;
                }
                depth -= 1;
                current.push(Event::End(e.into_owned()));
                if depth == 0 {
                    children.push(IconElement {
                        events: std::mem::take(&mut current),
                    });
                }
            }
            Event::Eof => {
                return Err(SvgstoreError::MalformedXml {
                    message: "unexpected end of document".to_string(),
                })
            }
            other => {
                // Text, CDATA, comments and the like: kept inside a child's
                // subtree, dropped between children.
                if depth > 0 {
                    current.push(other.into_owned());
                }
            }
        }
        buf.clear();
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_icon() {
        let doc = parse(br#"<svg viewBox="0 0 24 24"><path d="M0 0h24"/></svg>"#).unwrap();
        assert_eq!(doc.view_box, "0 0 24 24");
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn test_parse_missing_view_box() {
        let doc = parse(br#"<svg><circle cx="1" cy="1" r="1"/></svg>"#).unwrap();
        assert_eq!(doc.view_box, "");
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn test_parse_no_root_element() {
        assert!(matches!(
            parse(br#"<div><p>not an icon</p></div>"#),
            Err(SvgstoreError::NoRootElement)
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse(br#"<svg viewBox="0 0 1 1"><path"#).is_err());
    }

    #[test]
    fn test_parse_skips_prolog_and_finds_nested_root() {
        let doc = parse(
            br#"<?xml version="1.0"?><wrapper><svg viewBox="0 0 8 8"><rect width="8" height="8"/></svg></wrapper>"#,
        )
        .unwrap();
        assert_eq!(doc.view_box, "0 0 8 8");
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn test_parse_keeps_nested_subtrees_and_drops_loose_text() {
        let doc = parse(
            br#"<svg viewBox="0 0 2 2">
                <g fill="none"><path d="M1 1"/><title>inner text</title></g>
                <circle cx="1" cy="1" r="1"/>
            </svg>"#,
        )
        .unwrap();
        assert_eq!(doc.children.len(), 2);
        // The <g> subtree keeps its nested elements and text.
        assert!(doc.children[0].events.len() > 2);
    }

    #[test]
    fn test_parse_self_closed_root() {
        let doc = parse(br#"<svg viewBox="0 0 1 1"/>"#).unwrap();
        assert_eq!(doc.view_box, "0 0 1 1");
        assert!(doc.children.is_empty());
    }

    #[test]
    fn test_parse_drops_top_level_comments() {
        let doc = parse(br#"<svg viewBox="0 0 4 4"><!-- chrome --><path d="M0 0"/></svg>"#).unwrap();
        assert_eq!(doc.children.len(), 1);
        assert!(matches!(doc.children[0].events[0], Event::Empty(_)));
    }

    #[test]
    fn test_parse_truncated_document() {
        assert!(matches!(
            parse(br#"<svg viewBox="0 0 4 4"><g><path d="M0 0"/>"#),
            Err(SvgstoreError::MalformedXml { .. }) | Err(SvgstoreError::XmlError(_))
        ));
    }
}
