//! Grid auto-placement for dashboard panels.
//!
//! Panels are placed in order on a grid with a fixed number of columns.
//! Each panel occupies `PanelSize::span()` cells, clamped to the grid
//! width. Placement is sparse and row-major: a cursor starts at the top
//! left, each panel takes the first free slot at or after the cursor, and
//! the cursor then moves to the cell just right of that panel. Earlier gaps
//! are never back-filled, so the visual order follows the layout order.

use ratatui::layout::Rect;

use crate::panel::{Panel, PanelId};

/// Where one panel lands on the grid, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Panel being placed.
    pub id: PanelId,
    /// Leftmost column.
    pub column: u16,
    /// Top row.
    pub row: u16,
    /// Width in columns.
    pub columns: u16,
    /// Height in rows.
    pub rows: u16,
}

impl Placement {
    /// Screen area for this placement given the cell size in terminal
    /// cells.
    pub fn area(&self, cell_width: u16, cell_height: u16) -> Rect {
        Rect::new(
            self.column.saturating_mul(cell_width),
            self.row.saturating_mul(cell_height),
            self.columns.saturating_mul(cell_width),
            self.rows.saturating_mul(cell_height),
        )
    }
}

/// Places `panels` in order on a grid `columns` wide.
///
/// A zero column count is treated as one column.
pub fn place<'a>(panels: impl IntoIterator<Item = &'a Panel>, columns: u16) -> Vec<Placement> {
    let columns = columns.max(1);
    let mut occupied = Occupancy::new(columns);
    let (mut row, mut col) = (0u16, 0u16);
    let mut placements = Vec::new();

    for panel in panels {
        let (span_w, span_h) = panel.size.span();
        let w = span_w.clamp(1, columns);
        let h = span_h.max(1);

        loop {
            if col + w > columns {
                row += 1;
                col = 0;
                continue;
            }
            if occupied.is_free(row, col, w, h) {
                break;
            }
            col += 1;
        }

        occupied.fill(row, col, w, h);
        placements.push(Placement {
            id: panel.id(),
            column: col,
            row,
            columns: w,
            rows: h,
        });
        col += w;
    }

    placements
}

/// Total grid rows used by a set of placements.
pub fn height(placements: &[Placement]) -> u16 {
    placements
        .iter()
        .map(|p| p.row + p.rows)
        .max()
        .unwrap_or(0)
}

struct Occupancy {
    columns: u16,
    rows: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(columns: u16) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    fn is_free(&self, row: u16, col: u16, w: u16, h: u16) -> bool {
        (row..row + h).all(|r| match self.rows.get(r as usize) {
            Some(cells) => cells[col as usize..(col + w) as usize].iter().all(|c| !c),
            None => true,
        })
    }

    fn fill(&mut self, row: u16, col: u16, w: u16, h: u16) {
        let needed = (row + h) as usize;
        if self.rows.len() < needed {
            self.rows.resize(needed, vec![false; self.columns as usize]);
        }
        for r in row..row + h {
            for c in col..col + w {
                self.rows[r as usize][c as usize] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PanelSize, PanelType};

    fn panel(t: PanelType, size: PanelSize) -> Panel {
        let mut p = Panel::new(t);
        p.size = size;
        p
    }

    fn cells(placements: &[Placement]) -> Vec<(u16, u16, u16, u16)> {
        placements
            .iter()
            .map(|p| (p.column, p.row, p.columns, p.rows))
            .collect()
    }

    #[test]
    fn medium_panels_fill_rows_two_at_a_time() {
        let panels = [
            panel(PanelType::KpiSummary, PanelSize::Medium),
            panel(PanelType::AtRiskProjects, PanelSize::Medium),
            panel(PanelType::PaymentRisk, PanelSize::Medium),
        ];
        let placed = place(&panels, 4);
        assert_eq!(
            cells(&placed),
            vec![(0, 0, 2, 1), (2, 0, 2, 1), (0, 1, 2, 1)]
        );
        assert_eq!(height(&placed), 2);
    }

    #[test]
    fn tall_panel_pushes_next_row_right() {
        let panels = [
            panel(PanelType::KpiSummary, PanelSize::Large),
            panel(PanelType::AtRiskProjects, PanelSize::Medium),
            panel(PanelType::PaymentRisk, PanelSize::Medium),
        ];
        let placed = place(&panels, 4);
        assert_eq!(
            cells(&placed),
            vec![(0, 0, 2, 2), (2, 0, 2, 1), (2, 1, 2, 1)]
        );
    }

    #[test]
    fn gaps_are_not_back_filled() {
        let panels = [
            panel(PanelType::KpiSummary, PanelSize::Large),
            panel(PanelType::AtRiskProjects, PanelSize::ExtraLarge),
            panel(PanelType::PaymentRisk, PanelSize::Small),
        ];
        let placed = place(&panels, 4);
        // The extra-large panel cannot fit beside the large one, so it
        // starts below it; the small panel follows it rather than filling
        // the gap at the top right.
        assert_eq!(
            cells(&placed),
            vec![(0, 0, 2, 2), (0, 2, 4, 2), (0, 4, 1, 1)]
        );
    }

    #[test]
    fn spans_are_clamped_to_grid_width() {
        let panels = [panel(PanelType::Financials, PanelSize::ExtraLarge)];
        let placed = place(&panels, 2);
        assert_eq!(cells(&placed), vec![(0, 0, 2, 2)]);
    }

    #[test]
    fn zero_columns_behaves_as_one() {
        let panels = [
            panel(PanelType::KpiSummary, PanelSize::Medium),
            panel(PanelType::TeamLoad, PanelSize::Small),
        ];
        let placed = place(&panels, 0);
        assert_eq!(cells(&placed), vec![(0, 0, 1, 1), (0, 1, 1, 1)]);
    }

    #[test]
    fn placements_keep_panel_ids_in_order() {
        let panels = [
            panel(PanelType::KpiSummary, PanelSize::Small),
            panel(PanelType::TeamLoad, PanelSize::Small),
        ];
        let placed = place(&panels, 4);
        let ids: Vec<PanelId> = placed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![panels[0].id(), panels[1].id()]);
    }

    #[test]
    fn no_two_placements_overlap() {
        let sizes = [
            PanelSize::Large,
            PanelSize::Small,
            PanelSize::ExtraLarge,
            PanelSize::Medium,
            PanelSize::Small,
            PanelSize::Large,
        ];
        let panels: Vec<Panel> = PanelType::ALL
            .into_iter()
            .zip(sizes)
            .map(|(t, s)| panel(t, s))
            .collect();
        let placed = place(&panels, 4);
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                let overlap = a.column < b.column + b.columns
                    && b.column < a.column + a.columns
                    && a.row < b.row + b.rows
                    && b.row < a.row + a.rows;
                assert!(!overlap, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn area_scales_by_cell_size() {
        let p = Placement {
            id: PanelId::new(),
            column: 2,
            row: 1,
            columns: 2,
            rows: 2,
        };
        assert_eq!(p.area(20, 5), Rect::new(40, 5, 40, 10));
    }

    #[test]
    fn empty_input_has_zero_height() {
        let placed = place(std::iter::empty::<&Panel>(), 4);
        assert!(placed.is_empty());
        assert_eq!(height(&placed), 0);
    }
}
