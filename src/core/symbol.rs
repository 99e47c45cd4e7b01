use crate::domain::model::IconDocument;
use crate::utils::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Wraps a parsed icon in a `<symbol>` element and serializes it to a
/// self-contained XML fragment.
///
/// The `viewBox` attribute is emitted even when empty, and children are
/// written back in their original order, unmodified. Identical input yields
/// byte-identical output.
pub fn assemble(id: &str, icon: &IconDocument) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    let mut symbol = BytesStart::new("symbol");
    symbol.push_attribute(("id", id));
    symbol.push_attribute(("viewBox", icon.view_box.as_str()));
    writer.write_event(Event::Start(symbol))?;

    for child in &icon.children {
        for event in &child.events {
            writer.write_event(event.clone())?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("symbol")))?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
