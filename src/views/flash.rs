//! Flash message display.

use super::html_escape;
use crate::types::{FlashKind, FlashMessage};

fn style(kind: FlashKind) -> (&'static str, &'static str) {
    match kind {
        FlashKind::Success => ("bg-green-50 border-green-400 text-green-700", "fa-check-circle"),
        FlashKind::Error => ("bg-red-50 border-red-400 text-red-700", "fa-times-circle"),
        FlashKind::Warning => (
            "bg-yellow-50 border-yellow-400 text-yellow-700",
            "fa-exclamation-triangle",
        ),
        FlashKind::Info => ("bg-blue-50 border-blue-400 text-blue-700", "fa-info-circle"),
    }
}

pub fn render_flash(message: &FlashMessage) -> String {
    let (classes, icon) = style(message.kind);
    format!(
        r#"<div class="border-r-4 p-4 mb-4 rounded {classes}" role="alert" data-flash="{kind}"><div class="flex items-center"><i class="fas {icon} ml-2"></i><p class="text-sm">{text}</p></div></div>"#,
        kind = message.kind.as_str(),
        text = html_escape(&message.text),
    )
}

/// Empty string when there is no message.
pub fn render_optional_flash(message: Option<&FlashMessage>) -> String {
    message.map(render_flash).unwrap_or_default()
}
