//! Section navigation
//!
//! Exactly one content section is active at a time. The router toggles
//! section visibility, keeps the navigation links and page title in sync and
//! dispatches section data loaders.

use crate::layout::{LayoutCoordinator, LayoutSurface};
use crate::ui::dashboard::state::DashboardState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

#[cfg(test)]
use mockall::automock;

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Dashboard,
    Products,
    Orders,
    Customers,
    Categories,
    Analytics,
    Settings,
}

impl Section {
    /// Sections in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::Products,
        Section::Orders,
        Section::Customers,
        Section::Categories,
        Section::Analytics,
        Section::Settings,
    ];

    /// Identifier of the section's container on the page.
    pub fn container_id(&self) -> String {
        format!("{}-section", self)
    }

    /// Page title shown while the section is active.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Products => "Produtos",
            Section::Orders => "Pedidos",
            Section::Customers => "Clientes",
            Section::Categories => "Categorias",
            Section::Analytics => "Relatórios",
            Section::Settings => "Configurações",
        }
    }

    /// Glyph used by the collapsed sidebar.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "◆",
            Section::Products => "▣",
            Section::Orders => "☰",
            Section::Customers => "☺",
            Section::Categories => "◈",
            Section::Analytics => "▤",
            Section::Settings => "⚙",
        }
    }

    /// Maps a 1-based position to a section.
    pub fn from_position(position: usize) -> Option<Section> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|section| section == self)
            .map_or(1, |index| index + 1)
    }
}

/// Page elements the router mutates.
pub trait SectionHost {
    fn has_section(&self, section: Section) -> bool;
    fn set_section_visible(&mut self, section: Section, visible: bool);
    fn clear_nav_active(&mut self);
    fn set_nav_active(&mut self, section: Section);
    fn set_page_title(&mut self, title: &str);
}

/// Loads the data a section displays. There is no backend: the default
/// loader only records the request.
#[cfg_attr(test, automock)]
pub trait SectionDataLoader {
    fn load(&mut self, section: Section);
}

#[derive(Debug, Default)]
pub struct LoggingDataLoader;

impl SectionDataLoader for LoggingDataLoader {
    fn load(&mut self, section: Section) {
        log::info!("Loading {} data...", section);
    }
}

pub struct NavigationRouter {
    loader: Box<dyn SectionDataLoader>,
}

impl NavigationRouter {
    pub fn new(loader: Box<dyn SectionDataLoader>) -> Self {
        Self { loader }
    }

    /// Shows the named section. Unknown names, or sections without a
    /// container, leave the current section visible; the data loader is
    /// dispatched either way.
    pub fn show_section(
        &mut self,
        state: &mut DashboardState,
        host: &mut dyn SectionHost,
        name: &str,
    ) -> bool {
        let target = Section::from_str(name)
            .ok()
            .filter(|section| host.has_section(*section));

        if let Some(target) = target {
            for section in Section::ALL {
                host.set_section_visible(section, false);
            }
            host.set_section_visible(target, true);
            state.active_section = target;
        }

        self.load_section_data(name);
        target.is_some()
    }

    /// Dispatches the data loader of a section; other names are ignored.
    pub fn load_section_data(&mut self, name: &str) {
        match Section::from_str(name) {
            Ok(
                section @ (Section::Products
                | Section::Orders
                | Section::Customers
                | Section::Categories
                | Section::Analytics),
            ) => self.loader.load(section),
            _ => {}
        }
    }

    /// Navigation through a sidebar link (or its keyboard equivalent).
    pub fn handle_navigation<S>(
        &mut self,
        state: &mut DashboardState,
        host: &mut S,
        layout: &mut LayoutCoordinator,
        section: Section,
    ) where
        S: SectionHost + LayoutSurface,
    {
        host.clear_nav_active();
        host.set_nav_active(section);

        self.show_section(state, host, section.as_ref());
        host.set_page_title(section.title());

        if state.mobile_menu_open {
            layout.toggle_mobile_menu(state, host);
        }
    }
}

/// Global keyboard shortcuts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shortcut {
    ToggleSidebar,
    CloseMobileMenu,
    JumpTo(Section),
}

pub fn resolve_shortcut(key: &KeyEvent) -> Option<Shortcut> {
    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META);
    match key.code {
        KeyCode::Char('m') | KeyCode::Char('M') if command => Some(Shortcut::ToggleSidebar),
        KeyCode::Esc => Some(Shortcut::CloseMobileMenu),
        KeyCode::Char(digit @ '1'..='7') if key.modifiers.contains(KeyModifiers::ALT) => {
            let position = digit.to_digit(10)? as usize;
            Section::from_position(position).map(Shortcut::JumpTo)
        }
        _ => None,
    }
}
