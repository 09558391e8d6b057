//! Dashboard state management
//!
//! `DashboardState` is the small record the router and layout coordinator
//! mutate. `Dashboard` owns it together with the page model, the chart
//! provisioner, tables, toasts and timers.

use super::document::Document;
use crate::charts::ChartProvisioner;
use crate::charts::terminal::TerminalChartBackend;
use crate::config::{Config, PreferenceStore};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::consts::cli_consts::timers::live_update_interval;
use crate::device::{Orientation, PinnedWidth, Viewport};
use crate::events::ActivityEvent;
use crate::layout::{LayoutCoordinator, SwipeTracker, TapGuard};
use crate::live_data::LiveDataFeed;
use crate::navigation::{LoggingDataLoader, NavigationRouter, Section};
use crate::notifications::NotificationCenter;
use crate::stats::{StatCard, mock_stats};
use crate::tables::{self, DataTable, RowAction, ToggleSetting};
use crate::timers::{Interval, TimerQueue};

use ratatui::layout::{Position, Rect};
use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

/// Navigation and layout state of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub active_section: Section,
    pub sidebar_collapsed: bool,
    pub mobile_menu_open: bool,
    pub is_mobile: bool,
    pub is_tablet: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_section: Section::Dashboard,
            sidebar_collapsed: false,
            mobile_menu_open: false,
            is_mobile: false,
            is_tablet: false,
        }
    }
}

/// Which pane receives the arrow keys.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// Blocking dialogs drawn above the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    ConfirmDelete {
        section: Section,
        row: usize,
        question: String,
    },
}

/// Work scheduled for a later tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Deferred {
    RefreshCharts,
    ApplyOrientation,
    ClearTouchFeedback,
    Reinitialize,
}

/// Keyboard-driven interaction state.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub focus: Focus,
    pub nav_cursor: usize,
    pub row_cursor: usize,
    /// Text being typed into the section filter, while the filter is open.
    pub filter_input: Option<String>,
    /// Text being typed into the global search, while it is open.
    pub search_input: Option<String>,
    pub modal: Option<Modal>,
    /// Row action currently showing touch feedback.
    pub touching: Option<(usize, RowAction)>,
}

pub struct Dashboard {
    pub state: DashboardState,
    pub document: Document,
    pub layout: LayoutCoordinator,
    pub router: NavigationRouter,
    pub charts: ChartProvisioner,
    pub notifications: NotificationCenter,
    pub tables: BTreeMap<Section, DataTable>,
    pub settings: Vec<ToggleSetting>,
    pub stats: Vec<StatCard>,
    pub interaction: Interaction,

    pub(super) live_feed: Box<dyn LiveDataFeed>,
    pub(super) live_interval: Interval,
    pub(super) live_updates: bool,
    pub(super) timers: TimerQueue<Deferred>,
    pub(super) swipe: SwipeTracker,
    pub(super) tap_guard: TapGuard,
    /// Press waiting for its release to decide between click and swipe.
    pub(super) pending_click: Option<Position>,
    /// Whether terminal resizes are currently handled.
    pub(super) resize_attached: bool,

    pub viewport: Viewport,
    pub(super) orientation: Orientation,
    pub(super) cell_width_px: u32,
    pub(super) cell_height_px: u32,
    pub(super) pinned_width: Option<PinnedWidth>,
    /// Terminal area of the last resize, used for mouse hit testing.
    pub area: Rect,

    pub with_background_color: bool,
    pub activity_logs: VecDeque<ActivityEvent>,
    pub(super) pending_events: VecDeque<ActivityEvent>,

    pub(super) started_at: Instant,
    pub(super) now: Instant,
    pub(super) first_frame_logged: bool,
    pub tick: usize,
}

impl Dashboard {
    pub fn new(
        config: &Config,
        store: Box<dyn PreferenceStore>,
        live_feed: Box<dyn LiveDataFeed>,
        area: Rect,
        now: Instant,
    ) -> Self {
        let pinned_width = config
            .viewport_width_px
            .map(|width_px| PinnedWidth::new(width_px, area.width));
        let viewport = Viewport::from_cells(
            area.width,
            area.height,
            config.cell_width_px,
            config.cell_height_px,
        )
        .pinned(pinned_width, area.width);

        let mut tables = BTreeMap::new();
        tables.insert(Section::Dashboard, tables::recent_orders());
        tables.insert(Section::Products, tables::products());
        tables.insert(Section::Orders, tables::orders());
        tables.insert(Section::Customers, tables::customers());
        tables.insert(Section::Categories, tables::categories());

        Self {
            state: DashboardState::default(),
            document: Document::standard(),
            layout: LayoutCoordinator::new(store),
            router: NavigationRouter::new(Box::new(LoggingDataLoader)),
            charts: ChartProvisioner::new(Box::new(TerminalChartBackend::new(
                config.chart_registry,
            ))),
            notifications: NotificationCenter::default(),
            tables,
            settings: tables::default_settings(),
            stats: mock_stats(),
            interaction: Interaction::default(),
            live_feed,
            live_interval: Interval::new(live_update_interval()),
            live_updates: config.live_updates,
            timers: TimerQueue::default(),
            swipe: SwipeTracker::default(),
            tap_guard: TapGuard::default(),
            pending_click: None,
            resize_attached: false,
            viewport,
            orientation: viewport.orientation(),
            cell_width_px: config.cell_width_px,
            cell_height_px: config.cell_height_px,
            pinned_width,
            area,
            with_background_color: config.with_background_color,
            activity_logs: VecDeque::new(),
            pending_events: VecDeque::new(),
            started_at: now,
            now,
            first_frame_logged: false,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: ActivityEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: ActivityEvent) {
        self.pending_events.push_back(event);
    }

    /// Table shown in the active section, if it has one.
    pub fn active_table(&self) -> Option<&DataTable> {
        self.tables.get(&self.state.active_section)
    }

    pub fn active_table_mut(&mut self) -> Option<&mut DataTable> {
        self.tables.get_mut(&self.state.active_section)
    }

    /// Viewport of a terminal `cols` x `rows` cells.
    pub fn measure(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::from_cells(cols, rows, self.cell_width_px, self.cell_height_px)
            .pinned(self.pinned_width, cols)
    }

    /// Height in terminal rows of a chart container.
    pub fn chart_rows(&self) -> u16 {
        let rows = u32::from(self.charts.container_height_px()) / self.cell_height_px.max(1);
        u16::try_from(rows).unwrap_or(u16::MAX).max(3)
    }

    pub fn is_live_interval_running(&self) -> bool {
        self.live_interval.is_running()
    }

    pub fn is_resize_attached(&self) -> bool {
        self.resize_attached
    }

    pub fn has_pending(&self, task: Deferred) -> bool {
        self.timers.is_pending(&task)
    }
}
