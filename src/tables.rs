//! Data tables
//!
//! Row actions (view, edit, delete with confirmation), text filtering,
//! settings toggles and the form actions that only answer with a toast.

use crate::notifications::{NotificationCenter, NotificationKind};
use std::time::Instant;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Statuses the live feed may assign.
    pub const LIVE: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Processing => "Processando",
            OrderStatus::Completed => "Concluído",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Status(OrderStatus),
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Status(status) => status.label(),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<OrderStatus> for Cell {
    fn from(status: OrderStatus) -> Self {
        Cell::Status(status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    pub hidden: bool,
}

impl TableRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            hidden: false,
        }
    }

    /// The row's identifier is the text of its leading cell.
    pub fn id(&self) -> &str {
        self.cells.first().map(Cell::text).unwrap_or_default()
    }

    /// Full row text, lowercased.
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(Cell::text)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    pub fn status_mut(&mut self) -> Option<&mut OrderStatus> {
        self.cells.iter_mut().find_map(|cell| match cell {
            Cell::Status(status) => Some(status),
            Cell::Text(_) => None,
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

/// Asks the user a yes/no question.
#[cfg_attr(test, automock)]
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// A prompt whose answer is already known, such as one collected by a modal.
#[derive(Debug, Copy, Clone)]
pub struct Answer(pub bool);

impl ConfirmPrompt for Answer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

pub fn delete_question(id: &str) -> String {
    format!("Tem certeza que deseja excluir o item {}?", id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub filter: String,
}

impl DataTable {
    pub fn new(title: &str, headers: &[&str], rows: Vec<TableRow>) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            filter: String::new(),
        }
    }

    /// Header text for each cell of a row, as shown by the card layout.
    pub fn labeled_cells<'a>(&'a self, row: &'a TableRow) -> Vec<(&'a str, &'a Cell)> {
        row.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let label = self.headers.get(index).map(String::as_str).unwrap_or("");
                (label, cell)
            })
            .collect()
    }

    /// Hides rows whose text does not contain the query. An empty query
    /// shows everything. Returns the number of visible rows.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        self.filter = query.to_string();
        let needle = query.to_lowercase();
        for row in self.rows.iter_mut() {
            row.hidden = !row.text().contains(&needle);
        }
        self.visible_len()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &TableRow)> {
        self.rows.iter().enumerate().filter(|(_, row)| !row.hidden)
    }

    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }

    /// Index into `rows` of the n-th visible row.
    pub fn visible_index(&self, nth: usize) -> Option<usize> {
        self.visible_rows().nth(nth).map(|(index, _)| index)
    }

    pub fn row_id(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(TableRow::id)
    }

    /// Runs a row action. Returns false when the row does not exist or a
    /// deletion was declined.
    pub fn handle_action(
        &mut self,
        index: usize,
        action: RowAction,
        prompt: &mut dyn ConfirmPrompt,
        notifications: &mut NotificationCenter,
        now: Instant,
    ) -> bool {
        let Some(id) = self.row_id(index).map(str::to_string) else {
            return false;
        };

        match action {
            RowAction::View => {
                notifications.notify(
                    format!("Visualizando item {}", id),
                    NotificationKind::Info,
                    now,
                );
                true
            }
            RowAction::Edit => {
                notifications.notify(format!("Editando item {}", id), NotificationKind::Info, now);
                true
            }
            RowAction::Delete => {
                if !prompt.confirm(&delete_question(&id)) {
                    return false;
                }
                self.rows.remove(index);
                notifications.notify(
                    format!("Item {} excluído com sucesso", id),
                    NotificationKind::Success,
                    now,
                );
                true
            }
        }
    }
}

/// A switch on the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSetting {
    pub label: String,
    pub enabled: bool,
}

impl ToggleSetting {
    pub fn new(label: &str, enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            enabled,
        }
    }

    pub fn toggle(&mut self, notifications: &mut NotificationCenter, now: Instant) {
        self.enabled = !self.enabled;
        let status = if self.enabled { "ativada" } else { "desativada" };
        notifications.notify(
            format!("{} {}", self.label, status),
            NotificationKind::Info,
            now,
        );
    }
}

pub fn default_settings() -> Vec<ToggleSetting> {
    vec![
        ToggleSetting::new("Notificação por e-mail", true),
        ToggleSetting::new("Atualização automática", true),
        ToggleSetting::new("Autenticação em dois fatores", false),
        ToggleSetting::new("Manutenção programada", false),
    ]
}

pub fn add_product(notifications: &mut NotificationCenter, now: Instant) {
    notifications.notify(
        "Abrindo formulário de novo produto",
        NotificationKind::Info,
        now,
    );
}

pub fn save_settings(notifications: &mut NotificationCenter, now: Instant) {
    notifications.notify(
        "Configurações salvas com sucesso!",
        NotificationKind::Success,
        now,
    );
}

pub fn save_data(notifications: &mut NotificationCenter, now: Instant) {
    notifications.notify("Dados salvos com sucesso!", NotificationKind::Success, now);
}

/// Global search has no index behind it yet; the query is only recorded.
pub fn search(query: &str) -> String {
    let query = query.to_lowercase();
    log::debug!("Searching for: {}", query);
    query
}

fn row(cells: Vec<Cell>) -> TableRow {
    TableRow::new(cells)
}

pub fn recent_orders() -> DataTable {
    DataTable::new(
        "Pedidos Recentes",
        &["Pedido", "Cliente", "Produto", "Valor", "Status"],
        vec![
            row(vec!["#1001".into(), "Ana Souza".into(), "Camisa de Time".into(), "R$ 189,90".into(), OrderStatus::Completed.into()]),
            row(vec!["#1002".into(), "Bruno Lima".into(), "Boné Chronic".into(), "R$ 89,90".into(), OrderStatus::Processing.into()]),
            row(vec!["#1003".into(), "Carla Dias".into(), "Moletom Blessed".into(), "R$ 249,90".into(), OrderStatus::Pending.into()]),
            row(vec!["#1004".into(), "Diego Alves".into(), "Bermuda Chronic".into(), "R$ 129,90".into(), OrderStatus::Completed.into()]),
            row(vec!["#1005".into(), "Elisa Rocha".into(), "Tênis Blessed".into(), "R$ 399,90".into(), OrderStatus::Cancelled.into()]),
        ],
    )
}

pub fn products() -> DataTable {
    DataTable::new(
        "Produtos",
        &["ID", "Produto", "Categoria", "Preço", "Estoque"],
        vec![
            row(vec!["P-01".into(), "Camisa de Time Retrô".into(), "Camisas de Time".into(), "R$ 189,90".into(), "42".into()]),
            row(vec!["P-02".into(), "Boné Aba Curva".into(), "Bonés".into(), "R$ 89,90".into(), "87".into()]),
            row(vec!["P-03".into(), "Bermuda Cargo".into(), "Bermudas".into(), "R$ 129,90".into(), "35".into()]),
            row(vec!["P-04".into(), "Camiseta Chronic".into(), "Chronic".into(), "R$ 99,90".into(), "120".into()]),
            row(vec!["P-05".into(), "Moletom Blessed Choice".into(), "Blessed Choice".into(), "R$ 249,90".into(), "18".into()]),
        ],
    )
}

pub fn orders() -> DataTable {
    DataTable::new(
        "Pedidos",
        &["Pedido", "Data", "Cliente", "Total", "Status"],
        vec![
            row(vec!["#1001".into(), "02/09/2024".into(), "Ana Souza".into(), "R$ 189,90".into(), OrderStatus::Completed.into()]),
            row(vec!["#1002".into(), "03/09/2024".into(), "Bruno Lima".into(), "R$ 89,90".into(), OrderStatus::Processing.into()]),
            row(vec!["#1003".into(), "03/09/2024".into(), "Carla Dias".into(), "R$ 249,90".into(), OrderStatus::Pending.into()]),
            row(vec!["#1004".into(), "04/09/2024".into(), "Diego Alves".into(), "R$ 129,90".into(), OrderStatus::Completed.into()]),
            row(vec!["#1005".into(), "05/09/2024".into(), "Elisa Rocha".into(), "R$ 399,90".into(), OrderStatus::Cancelled.into()]),
            row(vec!["#1006".into(), "05/09/2024".into(), "Felipe Nunes".into(), "R$ 279,80".into(), OrderStatus::Pending.into()]),
        ],
    )
}

pub fn customers() -> DataTable {
    DataTable::new(
        "Clientes",
        &["ID", "Nome", "E-mail", "Pedidos", "Total Gasto"],
        vec![
            row(vec!["C-01".into(), "Ana Souza".into(), "ana@email.com".into(), "12".into(), "R$ 2.340,00".into()]),
            row(vec!["C-02".into(), "Bruno Lima".into(), "bruno@email.com".into(), "5".into(), "R$ 780,50".into()]),
            row(vec!["C-03".into(), "Carla Dias".into(), "carla@email.com".into(), "8".into(), "R$ 1.520,90".into()]),
            row(vec!["C-04".into(), "Diego Alves".into(), "diego@email.com".into(), "3".into(), "R$ 410,70".into()]),
        ],
    )
}

pub fn categories() -> DataTable {
    DataTable::new(
        "Categorias",
        &["ID", "Categoria", "Produtos", "Vendas"],
        vec![
            row(vec!["K-01".into(), "Camisas de Time".into(), "48".into(), "40%".into()]),
            row(vec!["K-02".into(), "Bonés".into(), "32".into(), "25%".into()]),
            row(vec!["K-03".into(), "Bermudas".into(), "27".into(), "20%".into()]),
            row(vec!["K-04".into(), "Chronic".into(), "30".into(), "30%".into()]),
            row(vec!["K-05".into(), "Blessed Choice".into(), "19".into(), "15%".into()]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn ids(table: &DataTable) -> Vec<&str> {
        table.rows.iter().map(TableRow::id).collect()
    }

    #[test]
    fn confirmed_delete_removes_only_that_row() {
        let mut table = orders();
        let mut notifications = NotificationCenter::default();
        let mut prompt = MockConfirmPrompt::new();
        prompt
            .expect_confirm()
            .with(eq("Tem certeza que deseja excluir o item #1003?"))
            .times(1)
            .return_const(true);

        assert!(table.handle_action(2, RowAction::Delete, &mut prompt, &mut notifications, Instant::now()));

        assert_eq!(ids(&table), vec!["#1001", "#1002", "#1004", "#1005", "#1006"]);
        let toast = &notifications.toasts()[0];
        assert_eq!(toast.message, "Item #1003 excluído com sucesso");
        assert_eq!(toast.kind, NotificationKind::Success);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut table = orders();
        let before = table.clone();
        let mut notifications = NotificationCenter::default();

        assert!(!table.handle_action(0, RowAction::Delete, &mut Answer(false), &mut notifications, Instant::now()));

        assert_eq!(table, before);
        assert!(notifications.is_empty());
    }

    #[test]
    fn view_and_edit_notify_with_row_id() {
        let mut table = products();
        let mut notifications = NotificationCenter::default();
        let mut prompt = MockConfirmPrompt::new();
        prompt.expect_confirm().never();
        let now = Instant::now();

        table.handle_action(1, RowAction::View, &mut prompt, &mut notifications, now);
        table.handle_action(1, RowAction::Edit, &mut prompt, &mut notifications, now);
        assert!(!table.handle_action(99, RowAction::View, &mut prompt, &mut notifications, now));

        let messages: Vec<&str> = notifications.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Visualizando item P-02", "Editando item P-02"]);
        assert!(notifications.toasts().iter().all(|t| t.kind == NotificationKind::Info));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut table = customers();

        assert_eq!(table.apply_filter("CARLA"), 1);
        assert_eq!(table.visible_rows().next().map(|(_, r)| r.id()), Some("C-03"));

        assert_eq!(table.apply_filter("zzz"), 0);
        assert_eq!(table.rows.len(), 4);

        assert_eq!(table.apply_filter(""), 4);
    }

    #[test]
    fn filter_matches_status_labels() {
        let mut table = orders();
        assert_eq!(table.apply_filter("pendente"), 2);
        assert_eq!(table.visible_index(1), Some(5));
    }

    #[test]
    fn cells_carry_header_labels() {
        let table = recent_orders();
        let labeled = table.labeled_cells(&table.rows[0]);
        assert_eq!(labeled[0].0, "Pedido");
        assert_eq!(labeled[4].0, "Status");
        assert_eq!(labeled[4].1.text(), "Concluído");
    }

    #[test]
    fn toggles_announce_new_state() {
        let mut notifications = NotificationCenter::default();
        let mut setting = ToggleSetting::new("Atualização automática", true);
        let now = Instant::now();

        setting.toggle(&mut notifications, now);
        setting.toggle(&mut notifications, now);

        let messages: Vec<&str> = notifications.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Atualização automática desativada", "Atualização automática ativada"]
        );
    }

    #[test]
    fn form_actions_notify() {
        let mut notifications = NotificationCenter::default();
        let now = Instant::now();
        add_product(&mut notifications, now);
        save_settings(&mut notifications, now);
        save_data(&mut notifications, now);

        let kinds: Vec<NotificationKind> = notifications.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![NotificationKind::Info, NotificationKind::Success, NotificationKind::Success]
        );
        assert_eq!(search("Boné"), "boné");
    }

    #[test]
    fn status_labels() {
        assert_eq!(OrderStatus::Processing.label(), "Processando");
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
        let mut row = recent_orders().rows.remove(1);
        if let Some(status) = row.status_mut() {
            *status = OrderStatus::Completed;
        }
        assert!(row.text().contains("concluído"));
    }
}
