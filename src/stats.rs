//! Summary cards shown above the dashboard charts.

/// Frames a counter takes to reach its target.
pub const COUNTER_STEPS: u32 = 100;

/// Formats an integer with the pt-BR thousands separator.
pub fn format_pt_br(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatKind {
    Sales,
    Revenue,
    Customers,
    Products,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Sales => "Vendas",
            StatKind::Revenue => "Receita",
            StatKind::Customers => "Clientes",
            StatKind::Products => "Produtos",
        }
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, StatKind::Revenue)
    }
}

/// Counts from zero up to a target in [`COUNTER_STEPS`] frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            current: 0.0,
        }
    }

    /// Advances one frame. Returns false once the target is shown.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.current += self.target as f64 / f64::from(COUNTER_STEPS);
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
        }
        true
    }

    pub fn value(&self) -> u64 {
        self.current.floor() as u64
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.target as f64
    }

    pub fn restart(&mut self) {
        self.current = 0.0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub target: u64,
    /// Change against the previous period, in percent.
    pub change_pct: f64,
    pub counter: CounterAnimation,
}

impl StatCard {
    pub fn new(kind: StatKind, target: u64, change_pct: f64) -> Self {
        Self {
            kind,
            target,
            change_pct,
            counter: CounterAnimation::new(target),
        }
    }

    /// The number as currently displayed.
    pub fn display_value(&self) -> String {
        let number = format_pt_br(self.counter.value() as i64);
        if self.kind.is_currency() {
            format!("R$ {}", number)
        } else {
            number
        }
    }

    pub fn display_change(&self) -> String {
        format!("{:+.1}%", self.change_pct)
    }

    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }
}

/// Stand-in figures until a real data source exists.
pub fn mock_stats() -> Vec<StatCard> {
    vec![
        StatCard::new(StatKind::Sales, 1247, 12.5),
        StatCard::new(StatKind::Revenue, 45670, 8.2),
        StatCard::new(StatKind::Customers, 892, 5.1),
        StatCard::new(StatKind::Products, 156, -2.1),
    ]
}

/// Advances every running counter by one frame.
pub fn animate(cards: &mut [StatCard]) -> bool {
    cards
        .iter_mut()
        .fold(false, |running, card| card.counter.step() || running)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pt_br_grouping() {
        assert_eq!(format_pt_br(0), "0");
        assert_eq!(format_pt_br(156), "156");
        assert_eq!(format_pt_br(1247), "1.247");
        assert_eq!(format_pt_br(45670), "45.670");
        assert_eq!(format_pt_br(1_234_567), "1.234.567");
        assert_eq!(format_pt_br(-15000), "-15.000");
    }

    #[test]
    fn counter_reaches_target_in_fixed_steps() {
        let mut counter = CounterAnimation::new(892);
        let mut frames = 0;
        while counter.step() {
            frames += 1;
            assert!(counter.value() <= 892);
        }
        assert_eq!(counter.value(), 892);
        assert!(frames <= COUNTER_STEPS + 1);
        assert!(!counter.step());
    }

    #[test]
    fn revenue_card_shows_currency() {
        let mut cards = mock_stats();
        while animate(&mut cards) {}

        assert_eq!(cards[0].display_value(), "1.247");
        assert_eq!(cards[1].display_value(), "R$ 45.670");
        assert_eq!(cards[1].display_change(), "+8.2%");
        assert!(!cards[3].is_positive());
        assert_eq!(cards[3].display_change(), "-2.1%");
    }

    #[test]
    fn zero_target_is_finished_immediately() {
        let mut counter = CounterAnimation::new(0);
        assert!(counter.is_finished());
        assert!(!counter.step());
        assert_eq!(counter.value(), 0);
    }
}
