//! Minimales Command-Log für spätere Undo/Redo-Erweiterung.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_haengt_in_reihenfolge_an() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());

        log.record(AppCommand::ResetLineup);
        log.record(AppCommand::RemovePlayer { player_id: 7 });

        assert_eq!(log.len(), 2);
        assert!(!log.is_empty());
        assert!(matches!(
            log.entries().last(),
            Some(AppCommand::RemovePlayer { player_id: 7 })
        ));
    }

    #[test]
    fn test_record_verwirft_am_limit_die_aeltere_haelfte() {
        let mut log = CommandLog::new();
        for id in 0..CommandLog::MAX_ENTRIES as u64 {
            log.record(AppCommand::RemovePlayer { player_id: id });
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(AppCommand::ResetLineup);

        // Die ältere Hälfte ist weg, der neue Eintrag steht hinten
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries().first(),
            Some(AppCommand::RemovePlayer { player_id }) if *player_id == CommandLog::MAX_ENTRIES as u64 / 2
        ));
        assert!(matches!(log.entries().last(), Some(AppCommand::ResetLineup)));
    }
}
