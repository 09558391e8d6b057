//! Dashboard state update logic
//!
//! Tick processing, keyboard and mouse input, and terminal resizes.

use super::api::DashboardApi;
use super::renderer::frame_layout;
use super::state::{Dashboard, Deferred, Focus, Modal};

use crate::consts::cli_consts::layout::{resize_debounce, touch_feedback};
use crate::consts::cli_consts::timers::COUNTER_FRAMES_PER_TICK;
use crate::device::apply_device_tier;
use crate::navigation::{Section, Shortcut, resolve_shortcut};
use crate::stats;
use crate::tables::{self, Answer, RowAction, delete_question};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

impl Dashboard {
    /// Advances timers, animations and queued activity by one UI tick.
    pub fn update(&mut self, now: Instant) {
        self.now = now;
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        self.notifications.expire(now);

        for _ in 0..COUNTER_FRAMES_PER_TICK {
            if !stats::animate(&mut self.stats) {
                break;
            }
        }

        for task in self.timers.drain_due(now) {
            self.run_deferred(task);
        }

        if self.live_interval.poll(now) && self.state.active_section == Section::Dashboard {
            let updated = self.update_live_statuses();
            log::debug!("Live update touched {} orders", updated);
        }

        // Observed canvases stay pending after leaving mobile.
        if self.charts.has_observed() {
            let tier = self.tier();
            self.charts.poll_intersections(tier, &self.document);
        }
    }

    fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::RefreshCharts => {
                self.charts.refresh_all();
            }
            Deferred::ApplyOrientation => {
                let tier =
                    apply_device_tier(&mut self.state, &mut self.document, self.viewport.width_px);
                self.charts.set_container_height(tier);
                self.charts.refresh_all();
            }
            Deferred::ClearTouchFeedback => self.interaction.touching = None,
            Deferred::Reinitialize => self.reinitialize(),
        }
    }

    /// Logs the time to the first drawn frame on mobile, once.
    pub fn mark_frame_rendered(&mut self, now: Instant) {
        if self.first_frame_logged {
            return;
        }
        self.first_frame_logged = true;
        if self.state.is_mobile {
            log::info!("FCP: {}", now.duration_since(self.started_at).as_millis());
        }
    }

    /// Records the terminal size without running the resize handling.
    pub fn set_terminal_size(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.viewport = self.measure(cols, rows);
        self.orientation = self.viewport.orientation();
    }

    /// Terminal resized to `cols` x `rows` cells.
    pub fn handle_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        self.now = now;
        self.area = Rect::new(0, 0, cols, rows);
        if !self.resize_attached {
            return;
        }

        let viewport = self.measure(cols, rows);
        self.viewport = viewport;

        let outcome = self
            .layout
            .handle_resize(&mut self.state, &mut self.document, viewport.width_px);
        self.charts.set_container_height(outcome.tier);
        self.timers
            .debounce(now, resize_debounce(), Deferred::RefreshCharts);

        let orientation = viewport.orientation();
        if orientation != self.orientation {
            self.orientation = orientation;
            log::debug!("Orientation changed to {:?}", orientation);
            self.timers
                .debounce(now, resize_debounce(), Deferred::ApplyOrientation);
        }
    }

    /// Navigation through the sidebar, by click, Enter or Alt+digit.
    pub fn navigate(&mut self, section: Section) {
        self.router.handle_navigation(
            &mut self.state,
            &mut self.document,
            &mut self.layout,
            section,
        );
        self.interaction.nav_cursor = section.position() - 1;
        self.interaction.row_cursor = 0;
        self.interaction.filter_input = None;
    }

    /// Handles a key press. Returns true when the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.now = now;

        if self.interaction.modal.is_some() {
            self.handle_modal_key(key);
            return false;
        }
        if self.interaction.filter_input.is_some() {
            self.handle_filter_key(key);
            return false;
        }
        if self.interaction.search_input.is_some() {
            self.handle_search_key(key);
            return false;
        }

        if let Some(shortcut) = resolve_shortcut(&key) {
            match shortcut {
                Shortcut::ToggleSidebar => self.toggle_sidebar(),
                Shortcut::CloseMobileMenu => {
                    if self.state.mobile_menu_open {
                        self.layout
                            .toggle_mobile_menu(&mut self.state, &mut self.document);
                    }
                }
                Shortcut::JumpTo(section) => self.navigate(section),
            }
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => {
                self.interaction.focus = match self.interaction.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(' ') => {
                if self.state.active_section == Section::Settings {
                    self.toggle_setting();
                }
            }
            KeyCode::Char('b') => self.toggle_sidebar(),
            KeyCode::Char('m') => {
                if self.state.is_mobile {
                    self.layout
                        .toggle_mobile_menu(&mut self.state, &mut self.document);
                }
            }
            KeyCode::Char('v') => self.row_action(RowAction::View),
            KeyCode::Char('e') => self.row_action(RowAction::Edit),
            KeyCode::Char('d') => self.row_action(RowAction::Delete),
            KeyCode::Char('/') => {
                if let Some(table) = self.active_table() {
                    self.interaction.filter_input = Some(table.filter.clone());
                }
            }
            KeyCode::Char('f') => self.interaction.search_input = Some(String::new()),
            KeyCode::Char('n') => {
                if self.state.active_section == Section::Products {
                    tables::add_product(&mut self.notifications, now);
                }
            }
            KeyCode::Char('s') => {
                if self.state.active_section == Section::Settings {
                    tables::save_settings(&mut self.notifications, now);
                } else {
                    tables::save_data(&mut self.notifications, now);
                }
            }
            KeyCode::Char('r') => self.refresh_dashboard(),
            KeyCode::Char('x') => {
                self.notifications.dismiss_latest();
            }
            _ => {}
        }
        false
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.interaction.focus {
            Focus::Sidebar => (&mut self.interaction.nav_cursor, Section::ALL.len()),
            Focus::Content => {
                let len = if self.state.active_section == Section::Settings {
                    self.settings.len()
                } else {
                    self.tables
                        .get(&self.state.active_section)
                        .map_or(0, |table| table.visible_len())
                };
                (&mut self.interaction.row_cursor, len)
            }
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn activate(&mut self) {
        match self.interaction.focus {
            Focus::Sidebar => {
                if let Some(section) = Section::from_position(self.interaction.nav_cursor + 1) {
                    self.navigate(section);
                }
            }
            Focus::Content => {
                if self.state.active_section == Section::Settings {
                    self.toggle_setting();
                } else {
                    self.row_action(RowAction::View);
                }
            }
        }
    }

    fn toggle_setting(&mut self) {
        let now = self.now;
        if let Some(setting) = self.settings.get_mut(self.interaction.row_cursor) {
            setting.toggle(&mut self.notifications, now);
        }
    }

    /// Runs an action on the selected row. Deletion first asks for
    /// confirmation through a modal.
    fn row_action(&mut self, action: RowAction) {
        let section = self.state.active_section;
        let now = self.now;
        let Some(table) = self.tables.get_mut(&section) else {
            return;
        };
        let Some(row) = table.visible_index(self.interaction.row_cursor) else {
            return;
        };

        self.interaction.touching = Some((row, action));
        self.timers
            .debounce(now, touch_feedback(), Deferred::ClearTouchFeedback);

        if action == RowAction::Delete {
            let Some(id) = table.row_id(row) else {
                return;
            };
            self.interaction.modal = Some(Modal::ConfirmDelete {
                section,
                row,
                question: delete_question(id),
            });
            return;
        }

        table.handle_action(row, action, &mut Answer(true), &mut self.notifications, now);
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let answer = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('s') | KeyCode::Enter => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return,
        };
        let Some(Modal::ConfirmDelete { section, row, .. }) = self.interaction.modal.take() else {
            return;
        };
        let now = self.now;
        if let Some(table) = self.tables.get_mut(&section) {
            let deleted = table.handle_action(
                row,
                RowAction::Delete,
                &mut Answer(answer),
                &mut self.notifications,
                now,
            );
            if deleted {
                let visible = table.visible_len();
                self.interaction.row_cursor =
                    self.interaction.row_cursor.min(visible.saturating_sub(1));
            }
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let Some(input) = self.interaction.filter_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.interaction.filter_input = None;
                return;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => return,
        }
        let query = input.clone();
        let section = self.state.active_section;
        if let Some(table) = self.tables.get_mut(&section) {
            table.apply_filter(&query);
        }
        self.interaction.row_cursor = 0;
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(input) = self.interaction.search_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.interaction.search_input = None,
            KeyCode::Enter => {
                tables::search(input);
                self.interaction.search_input = None;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
                tables::search(input);
            }
            _ => {}
        }
    }

    /// Mouse input stands in for touch: presses and drags feed the swipe
    /// tracker. A release that ends no swipe is a click on the pressed cell.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        self.now = now;
        let px_per_col = i64::from(self.viewport.width_px) / i64::from(self.area.width.max(1));
        let x = i32::try_from(i64::from(mouse.column) * px_per_col).unwrap_or(i32::MAX);
        let y = i32::from(mouse.row) * self.cell_height_px as i32;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.is_mobile {
                    self.swipe.touch_start(x, y);
                }
                self.pending_click = Some(Position::new(mouse.column, mouse.row));
            }
            MouseEventKind::Drag(MouseButton::Left) => self.swipe.touch_move(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = self.pending_click.take();
                if let Some(swipe) = self.swipe.touch_end(x, y) {
                    self.layout
                        .handle_swipe(&mut self.state, &mut self.document, swipe);
                    return;
                }
                if let Some(position) = pressed {
                    if self.tap_guard.accept(now) {
                        self.handle_click(position);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, position: Position) {
        if self.interaction.modal.is_some() {
            return;
        }
        let layout = frame_layout(self.area, self);

        if let Some(sidebar) = layout.sidebar {
            if sidebar.contains(position) {
                let first_item = sidebar.y + 1;
                if let Some(section) = position
                    .y
                    .checked_sub(first_item)
                    .and_then(|offset| Section::from_position(usize::from(offset) + 1))
                {
                    self.navigate(section);
                }
                return;
            }
        }

        if self.state.mobile_menu_open && self.document.is_overlay_active() {
            self.layout
                .toggle_mobile_menu(&mut self.state, &mut self.document);
        }
    }
}
