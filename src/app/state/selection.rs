use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Item-IDs in Selektionsreihenfolge
    pub selected_item_ids: IndexSet<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_item_ids: IndexSet::new(),
        }
    }

    /// Prüft, ob ein Item selektiert ist.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_item_ids.contains(&id)
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_item_ids.is_empty()
    }
}
