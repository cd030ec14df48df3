//! Helpers shared by the variants' `apply` functions.

/// Multi-select toggle: appends a new selection at the end, or removes an
/// existing one. Selection order is what the assembler emits.
pub fn toggle<T: PartialEq>(selection: &mut Vec<T>, item: T) {
    if let Some(index) = selection.iter().position(|existing| *existing == item) {
        selection.remove(index);
    } else {
        selection.push(item);
    }
}

/// Remove a list-editor row; out-of-range indexes are ignored.
pub fn remove_row<T>(rows: &mut Vec<T>, index: usize) {
    if index < rows.len() {
        rows.remove(index);
    }
}
