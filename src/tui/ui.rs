//! Frame rendering: a pure function of terminal dimensions and core state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::config::{STATUS_ACTIVE, STATUS_IDLE};
use crate::core::state::App;

/// Paint one frame: a single status line centered in the drawable area.
///
/// Safe for any terminal size; a zero-width or zero-height frame paints
/// nothing.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let message = if app.worker_active {
        STATUS_ACTIVE
    } else {
        STATUS_IDLE
    };

    let region = centered_line(frame.area(), message.width() as u16);
    if region.width == 0 || region.height == 0 {
        return;
    }
    frame.render_widget(Span::raw(message), region);
}

/// Center a one-line region of `width` cells inside `area`.
///
/// The result always lies within `area`. The region is clamped to at
/// least one cell wide (long messages truncate at the right edge) and
/// collapses to empty only when `area` itself has no cells.
fn centered_line(area: Rect, width: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect {
            x: area.x,
            y: area.y,
            width: 0,
            height: 0,
        };
    }
    let w = width.clamp(1, area.width);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - 1) / 2,
        width: w,
        height: 1,
    }
}
