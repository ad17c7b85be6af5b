use tracing::trace;

use crate::format::OverlayFields;
use crate::geom::{Point, Size};
use crate::shell::Shell;
use crate::ui::{menu, overlay_box};

/// Context menu popup state: where it was invoked and which row is
/// highlighted.
#[derive(Clone, Copy, Debug)]
pub struct MenuState {
    pub at: Point,
    pub selected: usize,
}

/// Terminal stand-in for the platform surface. Holds exactly the state a
/// desktop embedding would keep on its side of the [`Shell`] boundary: last
/// tooltip, last pushed fields, the overlay's window position and
/// visibility, and the open menu. Rendering reads this; it never reaches
/// into the controller's internals.
pub struct TermShell {
    tooltip: String,
    fields: OverlayFields,
    overlay_pos: Point,
    overlay_visible: bool,
    work_area: Size,
    menu: Option<MenuState>,
    pointer: Point,
}

impl TermShell {
    /// `terminal` is the full terminal extent; the bottom row is reserved
    /// for the status bar and excluded from the work area, like a desktop
    /// taskbar.
    pub fn new(terminal: Size) -> Self {
        TermShell {
            tooltip: String::new(),
            fields: OverlayFields::default(),
            overlay_pos: Point::default(),
            overlay_visible: false,
            work_area: reserve_status_row(terminal),
            menu: None,
            pointer: Point::default(),
        }
    }

    pub fn resize(&mut self, terminal: Size) {
        self.work_area = reserve_status_row(terminal);
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn fields(&self) -> &OverlayFields {
        &self.fields
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Drawn origin: the window position clamped so the box stays inside
    /// the work area. The unclamped position is kept verbatim, so dragging
    /// past an edge and back behaves like a real window manager.
    pub fn overlay_origin(&self) -> Point {
        let size = overlay_box::size_for(&self.fields);
        Point::new(
            clamp_axis(self.overlay_pos.x, size.width, self.work_area.width),
            clamp_axis(self.overlay_pos.y, size.height, self.work_area.height),
        )
    }

    pub fn overlay_hit(&self, p: Point) -> bool {
        if !self.overlay_visible {
            return false;
        }
        let origin = self.overlay_origin();
        let size = overlay_box::size_for(&self.fields);
        p.x >= origin.x
            && p.x < origin.x + size.width
            && p.y >= origin.y
            && p.y < origin.y + size.height
    }

    /// Remember where the pointer last was; the menu opens there.
    pub fn note_pointer(&mut self, p: Point) {
        self.pointer = p;
    }

    pub fn menu(&self) -> Option<&MenuState> {
        self.menu.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_next(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.selected = (menu.selected + 1) % menu::ITEM_COUNT;
        }
    }

    pub fn menu_prev(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.selected = (menu.selected + menu::ITEM_COUNT - 1) % menu::ITEM_COUNT;
        }
    }

    pub fn menu_selected(&self) -> Option<usize> {
        self.menu.map(|m| m.selected)
    }
}

impl Shell for TermShell {
    fn set_tooltip(&mut self, text: &str) {
        self.tooltip = text.to_string();
    }

    fn show_overlay(&mut self) {
        self.overlay_visible = true;
    }

    fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    fn set_overlay_fields(&mut self, fields: &OverlayFields) {
        self.fields = fields.clone();
    }

    fn move_overlay(&mut self, pos: Point) {
        self.overlay_pos = pos;
    }

    fn raise_overlay(&mut self) {
        // Draw order already keeps the box on top of the panels; a real
        // window embedding re-asserts its z-order here.
        trace!("raise overlay");
    }

    fn show_menu(&mut self) {
        self.menu = Some(MenuState {
            at: self.pointer,
            selected: 0,
        });
    }

    fn overlay_size(&self) -> Size {
        overlay_box::size_for(&self.fields)
    }

    fn work_area(&self) -> Size {
        self.work_area
    }

    fn close(&mut self) {
        self.menu = None;
        self.overlay_visible = false;
    }
}

fn reserve_status_row(terminal: Size) -> Size {
    Size::new(terminal.width, (terminal.height - 1).max(0))
}

fn clamp_axis(pos: i32, extent: i32, limit: i32) -> i32 {
    pos.min(limit - extent).max(0)
}
