//! Owned application state for the formation builder.
//!
//! Every mutation is a method on [`Board`]; [`Board::apply`] offers the same
//! set as a by-value update for hosts that keep state immutable.

use crate::assignment::AssignmentStore;
use crate::formation::FormationTemplate;
use crate::roster::{Roster, RosterError};

/// A single state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Assign { slot: usize, player: String },
    Clear(usize),
    ResetAll,
    AddPlayer(String),
    RemovePlayer(String),
    SelectFormation(FormationTemplate),
    SelectPlayer(String),
    Deselect,
    TapSlot(usize),
    DropOnSlot { slot: usize, payload: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotView<'a> {
    pub index: usize,
    pub occupant: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    template: FormationTemplate,
    roster: Roster,
    assignments: AssignmentStore,
    selected: Option<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_roster(FormationTemplate::default(), Roster::with_defaults())
    }

    pub fn with_roster(template: FormationTemplate, roster: Roster) -> Self {
        Self {
            template,
            roster,
            assignments: AssignmentStore::new(template.total_slots()),
            selected: None,
        }
    }

    pub fn template(&self) -> FormationTemplate {
        self.template
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn assignments(&self) -> &AssignmentStore {
        &self.assignments
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Put a roster player in `slot`. Unknown players and out-of-range
    /// slots leave the board untouched; returns whether the player was placed.
    pub fn assign(&mut self, slot: usize, player: &str) -> bool {
        if !self.roster.contains(player) {
            log::debug!("ignoring assignment of unknown player {:?}", player);
            return false;
        }
        if !self.assignments.assign(slot, player) {
            log::debug!("ignoring assignment to slot {} of {}", slot, self.assignments.len());
            return false;
        }
        self.selected = None;
        true
    }

    pub fn clear(&mut self, slot: usize) {
        if !self.assignments.clear(slot) {
            log::debug!("ignoring clear of slot {}", slot);
        }
    }

    pub fn reset_all(&mut self) {
        self.assignments.reset_all();
        self.selected = None;
    }

    pub fn add_player(&mut self, name: &str) -> Result<String, RosterError> {
        let added = self.roster.add(name);
        if let Err(e) = &added {
            log::debug!("rejected player: {}", e);
        }
        added
    }

    /// Drop a player from the roster and from any slot they hold.
    pub fn remove_player(&mut self, player: &str) {
        self.assignments.remove_player(player);
        self.roster.remove(player);
        if self.selected.as_deref() == Some(player) {
            self.selected = None;
        }
    }

    /// Switch formation. All slots are recreated empty.
    pub fn select_formation(&mut self, template: FormationTemplate) {
        log::debug!("formation {} -> {}", self.template, template);
        self.template = template;
        self.assignments.resize(template.total_slots());
        self.selected = None;
    }

    pub fn select_player(&mut self, name: &str) {
        if self.roster.contains(name) {
            self.selected = Some(name.to_string());
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Place the selected player, if any, in `slot`.
    pub fn tap_slot(&mut self, slot: usize) {
        if let Some(player) = self.selected.clone() {
            self.assign(slot, &player);
        }
    }

    /// Drag-and-drop transfer carrying a player name as text.
    pub fn drop_on_slot(&mut self, slot: usize, payload: &str) {
        if !payload.is_empty() {
            self.assign(slot, payload);
        }
    }

    /// Roster players not on the pitch, in roster order.
    pub fn bench(&self) -> Vec<&str> {
        self.roster
            .iter()
            .filter(|p| !self.assignments.is_assigned(p))
            .collect()
    }

    pub fn slots(&self) -> Vec<SlotView<'_>> {
        self.assignments
            .iter()
            .enumerate()
            .map(|(index, occupant)| SlotView { index, occupant })
            .collect()
    }

    pub fn export_filename(&self) -> String {
        format!("formation_{}.png", self.template.key())
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Assign { slot, player } => {
                self.assign(slot, &player);
            }
            Action::Clear(slot) => self.clear(slot),
            Action::ResetAll => self.reset_all(),
            Action::AddPlayer(name) => {
                let _ = self.add_player(&name);
            }
            Action::RemovePlayer(name) => self.remove_player(&name),
            Action::SelectFormation(template) => self.select_formation(template),
            Action::SelectPlayer(name) => self.select_player(&name),
            Action::Deselect => self.deselect(),
            Action::TapSlot(slot) => self.tap_slot(slot),
            Action::DropOnSlot { slot, payload } => self.drop_on_slot(slot, &payload),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> Board {
        Board::with_roster(FormationTemplate::Gk321, Roster::from_names(["A", "B"]))
    }

    #[test]
    fn test_reassign_scenario() {
        let mut board = small_board();
        board.assign(0, "A");
        board.assign(3, "A");
        assert_eq!(board.assignments().occupant(0), None);
        assert_eq!(board.assignments().occupant(3), Some("A"));
        assert_eq!(board.bench(), vec!["B"]);
    }

    #[test]
    fn test_unknown_player_ignored() {
        let mut board = small_board();
        assert!(!board.assign(0, "Z"));
        assert_eq!(board.assignments().filled(), 0);
        assert!(!board.assign(42, "A"));
        assert_eq!(board.bench(), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_player_clears_slot() {
        let mut board = small_board();
        board.assign(2, "A");
        board.remove_player("A");
        assert_eq!(board.assignments().occupant(2), None);
        assert!(!board.roster().contains("A"));
        assert_eq!(board.bench(), vec!["B"]);
    }

    #[test]
    fn test_reset_restores_bench() {
        let mut board = small_board();
        board.assign(0, "A");
        board.assign(1, "B");
        assert!(board.bench().is_empty());
        board.reset_all();
        assert_eq!(board.bench(), vec!["A", "B"]);
    }

    #[test]
    fn test_duplicate_add() {
        let mut board = Board::with_roster(
            FormationTemplate::Gk321,
            Roster::from_names(["A", "B", "C"]),
        );
        assert!(board.add_player("C").is_err());
        assert!(board.add_player("   ").is_err());
        assert_eq!(board.roster().len(), 3);
        assert_eq!(board.add_player(" D "), Ok("D".to_string()));
        assert_eq!(board.bench(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_formation_change_resets() {
        let mut board = small_board();
        board.assign(0, "A");
        board.select_player("B");
        board.select_formation(FormationTemplate::Gk331);
        assert_eq!(board.slots().len(), 8);
        assert_eq!(board.assignments().filled(), 0);
        assert_eq!(board.selected(), None);
        assert_eq!(board.export_filename(), "formation_GK-3-3-1.png");
    }

    #[test]
    fn test_tap_to_assign() {
        let mut board = small_board();
        board.tap_slot(1);
        assert_eq!(board.assignments().filled(), 0);

        board.select_player("B");
        assert_eq!(board.selected(), Some("B"));
        board.tap_slot(1);
        assert_eq!(board.assignments().occupant(1), Some("B"));
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_select_unknown_ignored() {
        let mut board = small_board();
        board.select_player("Z");
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_removing_selected_player_deselects() {
        let mut board = small_board();
        board.select_player("A");
        board.remove_player("A");
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_drop_payload() {
        let mut board = small_board();
        board.drop_on_slot(4, "");
        assert_eq!(board.assignments().filled(), 0);
        board.drop_on_slot(4, "A");
        assert_eq!(board.assignments().occupant(4), Some("A"));
    }

    #[test]
    fn test_apply_sequence() {
        let board = [
            Action::AddPlayer("C".to_string()),
            Action::Assign { slot: 0, player: "C".to_string() },
            Action::SelectPlayer("A".to_string()),
            Action::TapSlot(6),
            Action::Clear(0),
        ]
        .into_iter()
        .fold(small_board(), Board::apply);

        assert_eq!(board.assignments().occupant(0), None);
        assert_eq!(board.assignments().occupant(6), Some("A"));
        assert_eq!(board.bench(), vec!["B", "C"]);
    }

    #[test]
    fn test_new_board_defaults() {
        let board = Board::new();
        assert_eq!(board.template(), FormationTemplate::Gk321);
        assert_eq!(board.bench().len(), 13);
        assert_eq!(board.export_filename(), "formation_GK-3-2-1.png");
    }
}
