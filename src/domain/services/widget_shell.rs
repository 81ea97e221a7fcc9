#[cfg(test)]
#[path = "widget_shell_test.rs"]
mod tests;

use ratatui::prelude::Rect;

use crate::domain::models::columns_to_px;
use crate::domain::models::rect_contains;
use crate::domain::models::toggle_button_rect;
use crate::domain::models::WidgetLayout;

/// Open/closed state of the chat widget and where it sits on screen.
pub struct WidgetShell {
    breakpoint_px: u32,
    is_open: bool,
    layout: WidgetLayout,
    viewport: Rect,
}

impl WidgetShell {
    pub fn new(breakpoint_px: u32) -> WidgetShell {
        return WidgetShell {
            breakpoint_px,
            is_open: false,
            layout: WidgetLayout::for_viewport(0, breakpoint_px),
            viewport: Rect::default(),
        };
    }

    pub fn is_open(&self) -> bool {
        return self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn layout(&self) -> WidgetLayout {
        return self.layout;
    }

    pub fn viewport(&self) -> Rect {
        return self.viewport;
    }

    pub fn viewport_width_px(&self) -> u32 {
        return columns_to_px(self.viewport.width);
    }

    /// Samples the viewport size. Called for every resize.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.layout = WidgetLayout::for_viewport(self.viewport_width_px(), self.breakpoint_px);
    }

    pub fn panel_rect(&self) -> Rect {
        return self.layout.panel_rect(self.viewport);
    }

    pub fn toggle_rect(&self) -> Rect {
        return toggle_button_rect(self.viewport);
    }

    /// The `[x]` drawn on the panel's top border, right aligned.
    pub fn close_button_rect(&self) -> Rect {
        let panel = self.panel_rect();
        return Rect::new(
            panel.x + panel.width.saturating_sub(4),
            panel.y,
            3.min(panel.width),
            1.min(panel.height),
        );
    }

    /// Applies a mouse press at the given cell. Returns true when the press
    /// opened or closed the widget.
    pub fn handle_mouse_down(&mut self, column: u16, row: u16) -> bool {
        if !self.is_open {
            if rect_contains(self.toggle_rect(), column, row) {
                self.open();
                return true;
            }

            return false;
        }

        if rect_contains(self.close_button_rect(), column, row) {
            self.close();
            return true;
        }

        let inside_panel = rect_contains(self.panel_rect(), column, row);
        let on_toggle = rect_contains(self.toggle_rect(), column, row);
        if !inside_panel && !on_toggle {
            self.close();
            return true;
        }

        return false;
    }
}
