#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

use ratatui::prelude::Rect;

/// Terminal cells are treated as 8x16 pixel glyphs so the widget can share
/// its breakpoints with the storefront's web layout.
pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
pub const WIDE_BREAKPOINT_PX: u32 = 1024;

pub const PANEL_WIDTH_PX: u32 = 380;
pub const PANEL_HEIGHT_PX: u32 = 600;
pub const PANEL_RIGHT_OFFSET_PX: u32 = 24;
pub const PANEL_BOTTOM_OFFSET_PX: u32 = 96;

pub const TOGGLE_SIZE_PX: u32 = 56;
pub const TOGGLE_OFFSET_PX: u32 = 24;

pub fn columns_to_px(columns: u16) -> u32 {
    return u32::from(columns) * CELL_WIDTH_PX;
}

pub fn px_to_columns(px: u32) -> u16 {
    return u16::try_from(px.div_ceil(CELL_WIDTH_PX)).unwrap_or(u16::MAX);
}

pub fn px_to_rows(px: u32) -> u16 {
    return u16::try_from(px.div_ceil(CELL_HEIGHT_PX)).unwrap_or(u16::MAX);
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    return column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height);
}

/// Number of product cards per row for a viewport width.
pub fn product_grid_columns(width_px: u32) -> usize {
    if width_px < DEFAULT_MOBILE_BREAKPOINT_PX {
        return 1;
    }
    if width_px < WIDE_BREAKPOINT_PX {
        return 2;
    }

    return 3;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetLayout {
    /// The chat takes over the whole viewport.
    FullScreen,
    /// A fixed size panel anchored to the bottom right corner.
    Floating,
}

impl WidgetLayout {
    pub fn for_viewport(width_px: u32, breakpoint_px: u32) -> WidgetLayout {
        if width_px < breakpoint_px {
            return WidgetLayout::FullScreen;
        }

        return WidgetLayout::Floating;
    }

    pub fn panel_rect(&self, viewport: Rect) -> Rect {
        if *self == WidgetLayout::FullScreen {
            return viewport;
        }

        let right_offset = px_to_columns(PANEL_RIGHT_OFFSET_PX);
        let bottom_offset = px_to_rows(PANEL_BOTTOM_OFFSET_PX);
        let width = px_to_columns(PANEL_WIDTH_PX).min(viewport.width);
        let height = px_to_rows(PANEL_HEIGHT_PX).min(viewport.height.saturating_sub(bottom_offset));

        return Rect::new(
            viewport.x + viewport.width.saturating_sub(width + right_offset),
            viewport.y + viewport.height.saturating_sub(height + bottom_offset),
            width,
            height,
        );
    }
}

/// The round "open chat" button in the bottom right corner.
pub fn toggle_button_rect(viewport: Rect) -> Rect {
    let width = px_to_columns(TOGGLE_SIZE_PX).min(viewport.width);
    let height = px_to_rows(TOGGLE_SIZE_PX).min(viewport.height);
    let right_offset = px_to_columns(TOGGLE_OFFSET_PX);
    let bottom_offset = px_to_rows(TOGGLE_OFFSET_PX);

    return Rect::new(
        viewport.x + viewport.width.saturating_sub(width + right_offset),
        viewport.y + viewport.height.saturating_sub(height + bottom_offset),
        width,
        height,
    );
}
