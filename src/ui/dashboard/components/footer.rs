//! Dashboard footer component
//!
//! Renders the key hints for the active section

use super::super::state::Dashboard;
use crate::navigation::Section;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn hints(dashboard: &Dashboard) -> String {
    if dashboard.interaction.modal.is_some() {
        return "[S/Y] Confirmar | [N/Esc] Cancelar".to_string();
    }
    if dashboard.interaction.filter_input.is_some() || dashboard.interaction.search_input.is_some() {
        return "[Enter] Aplicar | [Esc] Fechar".to_string();
    }

    let section = match dashboard.state.active_section {
        Section::Settings => "[Espaço] Alternar | [S] Salvar",
        Section::Products => "[V/E/D] Ver/Editar/Excluir | [/] Filtrar | [N] Novo",
        Section::Analytics => "[R] Atualizar",
        _ => "[V/E/D] Ver/Editar/Excluir | [/] Filtrar",
    };

    if dashboard.state.is_mobile {
        format!("[M] Menu | {} | [Q] Sair", section)
    } else {
        format!(
            "[Tab] Foco | [Alt+1-7] Seções | [B] Menu lateral | {} | [F] Buscar | [Q] Sair",
            section
        )
    }
}

/// Render footer with key hints.
pub fn render_footer(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let footer = Paragraph::new(hints(dashboard))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(footer, area);
}
