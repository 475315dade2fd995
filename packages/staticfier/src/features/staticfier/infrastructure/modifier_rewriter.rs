//! Modifier list rewrite for an accepted method
//!
//! `final` becomes `static` in place (keeping its leading text); without a
//! `final` the keyword is appended after a single space.

use crate::features::syntax_tree::{Modifier, ModifierKind, ModifierList};

/// Modifier list with exactly one `static` and no `final`
///
/// Returns the list unchanged when it is already static.
pub fn with_static(modifiers: &ModifierList) -> ModifierList {
    if modifiers.has(ModifierKind::Static) {
        return modifiers.clone();
    }

    let items = match modifiers.position(ModifierKind::Final) {
        Some(final_at) => modifiers
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, modifier)| match modifier.kind {
                ModifierKind::Final if i == final_at => Some(Modifier::synthesized(
                    ModifierKind::Static,
                    modifier.prefix.clone(),
                )),
                ModifierKind::Final => None,
                _ => Some(modifier.clone()),
            })
            .collect(),
        None => {
            let mut items = modifiers.items.clone();
            items.push(Modifier::synthesized(ModifierKind::Static, " "));
            items
        }
    };

    ModifierList::new(items, modifiers.span, modifiers.anchor)
}
