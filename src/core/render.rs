//! Markup helpers for referencing the store from rendered pages.
//!
//! Pure string formatting, no state. The page-lifecycle wiring that decides
//! when to emit these fragments belongs to the hosting environment.

/// Inline reference to symbol `id` from the combined store.
pub fn icon(id: &str) -> String {
    format!(
        r##"<svg class="icon icon-{id}" aria-hidden="true"><use xlink:href="#{id}"></use></svg>"##
    )
}

/// Wraps raw store content in the hidden container injected into a page.
pub fn inject(content: &str) -> String {
    format!(r#"<div class="svgstore" aria-hidden="true" style="display:none;">{content}</div>"#)
}
