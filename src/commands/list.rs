use crate::registry::{Category, Registry};
use std::fmt::Write;

/// `--list-commands` 출력
pub fn render(registry: &Registry) -> String {
    let mut out = String::new();
    let mut current: Option<Category> = None;

    for (category, spec) in registry.list_all() {
        if current != Some(category) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "Available {} commands:", category);
            current = Some(category);
        }

        let mut notes = String::new();
        if spec.requires_elevation {
            notes.push_str(" (requires sudo)");
        }
        if spec.is_destructive {
            notes.push_str(" (potentially dangerous)");
        }
        if spec.is_manual_only {
            notes.push_str(" (manual)");
        }

        let _ = writeln!(out, "  {}: {}{}", spec.name, spec.description, notes);
    }

    out
}
