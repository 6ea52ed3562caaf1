use crate::render::{ROUNDS_PENDING, round_cards};
use arena_api::Tournament;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::text::Line;
use tui::widgets::{Paragraph, Widget};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Blank rows between stacked round cards.
const CARD_GAP: u16 = 1;

/// Narrowest column that still fits a full match row; below twice this the
/// grid collapses to a single column.
const MIN_COL_WIDTH: u16 = 48;

/// Horizontal gutter between the two columns.
const COL_GUTTER: u16 = 2;

/// Number of card columns for a given region width (1 or 2).
pub fn column_count(width: u16) -> usize {
    if width >= 2 * MIN_COL_WIDTH + COL_GUTTER { 2 } else { 1 }
}

/// Assign cards to columns, always placing the next card in the currently
/// shortest column so tall early rounds don't leave the second column empty.
pub fn distribute(card_heights: &[u16], columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut assignment: Vec<Vec<usize>> = vec![Vec::new(); columns];
    let mut heights = vec![0u16; columns];
    for (idx, card_height) in card_heights.iter().enumerate() {
        let target = heights
            .iter()
            .enumerate()
            .min_by_key(|(_, h)| **h)
            .map(|(i, _)| i)
            .unwrap_or(0);
        assignment[target].push(idx);
        heights[target] += card_height + CARD_GAP;
    }
    assignment
}

// ---------------------------------------------------------------------------
// RoundsGrid — one card per round, flowed into columns
// ---------------------------------------------------------------------------

pub struct RoundsGrid<'a> {
    pub tournament: Option<&'a Tournament>,
    pub scroll: u16,
}

impl Widget for RoundsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cards = round_cards(self.tournament);
        if cards.is_empty() {
            Paragraph::new(ROUNDS_PENDING)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let columns = column_count(area.width);
        let heights: Vec<u16> = cards.iter().map(|c| c.len() as u16).collect();
        let assignment = distribute(&heights, columns);
        let col_width = area.width / columns as u16;

        for (col_idx, card_indices) in assignment.iter().enumerate() {
            let mut lines: Vec<Line> = Vec::new();
            for &card_idx in card_indices {
                lines.extend(cards[card_idx].iter().cloned());
                for _ in 0..CARD_GAP {
                    lines.push(Line::default());
                }
            }

            let text_width = if columns > 1 {
                col_width.saturating_sub(COL_GUTTER).max(1)
            } else {
                col_width
            };
            let col_area = Rect::new(
                area.x + col_idx as u16 * col_width,
                area.y,
                text_width,
                area.height,
            );
            Paragraph::new(lines)
                .scroll((self.scroll, 0))
                .render(col_area, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
