//! Selected chart symbol

/// Tracks the symbol shown in the chart panel.
///
/// Until the user picks a symbol, the selection follows the first entry of
/// each fetched symbol list. Once the user has picked one it is never
/// changed by a refresh, even if the symbol drops out of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSelection {
    selected: String,
    user_chosen: bool,
}

impl SymbolSelection {
    pub fn new(default_symbol: impl Into<String>) -> Self {
        Self {
            selected: default_symbol.into(),
            user_chosen: false,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_user_chosen(&self) -> bool {
        self.user_chosen
    }

    /// Applies a freshly fetched symbol list. Returns true when the
    /// selection changed.
    pub fn on_symbols(&mut self, symbols: &[String]) -> bool {
        if self.user_chosen {
            return false;
        }
        match symbols.first() {
            Some(first) if *first != self.selected => {
                self.selected = first.clone();
                true
            }
            _ => false,
        }
    }

    /// Records an explicit user choice. Returns true when the selection changed.
    pub fn select(&mut self, symbol: &str) -> bool {
        self.user_chosen = true;
        if self.selected == symbol {
            return false;
        }
        self.selected = symbol.to_string();
        true
    }

    /// Selects the symbol at `index`, if there is one.
    pub fn select_index(&mut self, symbols: &[String], index: usize) -> bool {
        match symbols.get(index) {
            Some(symbol) => self.select(symbol),
            None => false,
        }
    }

    /// Moves the selection `step` places through `symbols`, wrapping around.
    /// A selection outside the list moves to the first symbol.
    pub fn cycle(&mut self, symbols: &[String], step: isize) -> bool {
        if symbols.is_empty() {
            return false;
        }
        let len = symbols.len() as isize;
        let next = match symbols.iter().position(|s| *s == self.selected) {
            Some(current) => (current as isize + step).rem_euclid(len) as usize,
            None => 0,
        };
        self.select_index(symbols, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_starts_at_default() {
        let selection = SymbolSelection::new("EURUSD");
        assert_eq!(selection.selected(), "EURUSD");
        assert!(!selection.is_user_chosen());
    }

    #[test]
    fn test_snaps_to_first_fetched_symbol() {
        let mut selection = SymbolSelection::new("EURUSD");
        assert!(selection.on_symbols(&symbols(&["GBPUSD", "EURUSD"])));
        assert_eq!(selection.selected(), "GBPUSD");

        // An empty list leaves the selection alone.
        assert!(!selection.on_symbols(&[]));
        assert_eq!(selection.selected(), "GBPUSD");

        // Without a user choice it keeps following the list head.
        assert!(selection.on_symbols(&symbols(&["USDJPY"])));
        assert_eq!(selection.selected(), "USDJPY");
    }

    #[test]
    fn test_user_choice_survives_refreshes() {
        let mut selection = SymbolSelection::new("EURUSD");
        selection.on_symbols(&symbols(&["EURUSD", "GBPUSD", "USDJPY"]));
        assert!(selection.select("USDJPY"));

        for _ in 0..3 {
            assert!(!selection.on_symbols(&symbols(&["EURUSD", "GBPUSD"])));
            assert_eq!(selection.selected(), "USDJPY");
        }
    }

    #[test]
    fn test_reselecting_current_symbol_still_pins_it() {
        let mut selection = SymbolSelection::new("EURUSD");
        assert!(!selection.select("EURUSD"));
        assert!(selection.is_user_chosen());
        assert!(!selection.on_symbols(&symbols(&["GBPUSD"])));
        assert_eq!(selection.selected(), "EURUSD");
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let list = symbols(&["EURUSD", "GBPUSD", "USDJPY"]);
        let mut selection = SymbolSelection::new("EURUSD");

        selection.cycle(&list, -1);
        assert_eq!(selection.selected(), "USDJPY");
        selection.cycle(&list, 1);
        assert_eq!(selection.selected(), "EURUSD");
        selection.cycle(&list, 1);
        assert_eq!(selection.selected(), "GBPUSD");
        assert!(selection.is_user_chosen());
    }

    #[test]
    fn test_cycle_from_unknown_symbol_goes_to_first() {
        let mut selection = SymbolSelection::new("XAUUSD");
        selection.cycle(&symbols(&["EURUSD", "GBPUSD"]), 1);
        assert_eq!(selection.selected(), "EURUSD");
        assert!(!selection.cycle(&[], 1));
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut selection = SymbolSelection::new("EURUSD");
        assert!(!selection.select_index(&symbols(&["EURUSD"]), 4));
        assert!(!selection.is_user_chosen());
    }
}
