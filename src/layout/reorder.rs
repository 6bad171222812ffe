//! Drag-and-drop reorder as a pure list move.

use crate::panel::{Panel, PanelId};

/// Moves the panel `moved` into the slot currently held by `target`.
///
/// The moved panel is taken out of its position and reinserted at the
/// target's pre-move index, so everything between the two positions shifts
/// by one slot towards the vacated position. This is a move, not a swap.
///
/// Returns the sequence unchanged when the ids are equal or either is
/// missing.
pub fn reorder(mut panels: Vec<Panel>, moved: PanelId, target: PanelId) -> Vec<Panel> {
    move_by_id(&mut panels, moved, target);
    panels
}

/// In-place form of [`reorder`]. Returns `true` if the sequence changed.
pub(crate) fn move_by_id(panels: &mut Vec<Panel>, moved: PanelId, target: PanelId) -> bool {
    if moved == target {
        return false;
    }
    let from = panels.iter().position(|p| p.id() == moved);
    let to = panels.iter().position(|p| p.id() == target);
    match (from, to) {
        (Some(from), Some(to)) => {
            let panel = panels.remove(from);
            panels.insert(to, panel);
            true
        }
        _ => false,
    }
}
