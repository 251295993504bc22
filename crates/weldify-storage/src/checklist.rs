//! Pre-work safety checklist.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::store::{KeyValueStore, load_json, save_json};

/// Store key holding the checked state.
pub const CHECKLIST_KEY: &str = "weldifySafetyChecklist";

/// Checked flag per item id.
pub type ChecklistState = BTreeMap<String, bool>;

/// One checklist line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Stable identifier (`epi1`, `env3`, ...).
    pub id: &'static str,
    /// What to check.
    pub text: &'static str,
    /// Grouping shown as a section heading.
    pub category: &'static str,
    /// Extra guidance.
    pub details: Option<&'static str>,
}

const fn item(
    id: &'static str,
    category: &'static str,
    text: &'static str,
    details: Option<&'static str>,
) -> ChecklistItem {
    ChecklistItem {
        id,
        text,
        category,
        details,
    }
}

/// The checklist, in display order.
pub static CHECKLIST_ITEMS: [ChecklistItem; 17] = [
    item(
        "epi1",
        "PPE",
        "Welding helmet in good condition with a suitable filter",
        Some("Check the lens is not cracked or scratched and that auto-darkening works (if fitted)."),
    ),
    item(
        "epi2",
        "PPE",
        "Welding gloves without holes or heavy burns",
        Some("They must cover the wrists and part of the forearms."),
    ),
    item(
        "epi3",
        "PPE",
        "Flame-resistant clothing (apron, jacket, trousers) covering all skin",
        Some("Avoid synthetic fabrics that can melt. Do not wear oily or greasy clothing."),
    ),
    item(
        "epi4",
        "PPE",
        "Safety boots with protective toe caps",
        Some("Leather or another resistant material."),
    ),
    item(
        "epi5",
        "PPE",
        "Safety glasses (under the helmet or for grinding)",
        None,
    ),
    item(
        "epi6",
        "PPE",
        "Suitable respiratory protection when welding toxic materials (galvanised, stainless, ...)",
        Some("Consult the material SDS. Make sure the respirator fits well."),
    ),
    item(
        "env1",
        "Environment",
        "Work area free of combustible or flammable materials (at least 10 metres)",
        Some("Includes liquids, rags, paper, wood and similar."),
    ),
    item(
        "env2",
        "Environment",
        "Good natural or forced ventilation to disperse fumes",
        Some("Especially important in confined spaces or with toxic materials."),
    ),
    item(
        "env3",
        "Environment",
        "Suitable fire extinguisher close by and accessible",
        Some("Class ABC is common, but check compatibility."),
    ),
    item(
        "env4",
        "Equipment",
        "Welding machine correctly and safely earthed",
        Some("Earth clamp firmly attached to the workpiece or a clean metal table."),
    ),
    item(
        "env5",
        "Equipment",
        "Welding cables in good condition (no cuts or damaged insulation)",
        Some("Avoid tight coils that can overheat."),
    ),
    item("env6", "Environment", "Adequate lighting of the work area", None),
    item(
        "env7",
        "Environment",
        "Dry floor, free of obstacles to prevent slips and falls",
        None,
    ),
    item(
        "mat1",
        "Material",
        "Material identified and SDS consulted where needed (especially alloys and coatings)",
        Some("Know the specific fume hazards (e.g. chromium VI in stainless, zinc in galvanised)."),
    ),
    item(
        "mat2",
        "Material",
        "Surfaces to be welded are clean (no rust, paint, grease or moisture)",
        Some("Contamination can produce hazardous fumes and weld defects."),
    ),
    item(
        "mat3",
        "Process",
        "Welding procedure (WPS) known and understood (if applicable)",
        None,
    ),
    item(
        "mat4",
        "Equipment",
        "Machine parameters set for the job",
        None,
    ),
];

/// Look up a checklist item by id.
#[must_use]
pub fn checklist_item(id: &str) -> Option<&'static ChecklistItem> {
    CHECKLIST_ITEMS.iter().find(|item| item.id == id)
}

/// Checked state persisted under [`CHECKLIST_KEY`].
pub struct SafetyChecklist<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> SafetyChecklist<'a> {
    /// Open the checklist state in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Current state; nothing checked when none is stored.
    pub fn load(&self) -> Result<ChecklistState, StorageError> {
        Ok(load_json(self.store, CHECKLIST_KEY)?.unwrap_or_default())
    }

    /// Flip one item and return its new checked flag.
    pub fn toggle(&self, id: &str) -> Result<bool, StorageError> {
        if checklist_item(id).is_none() {
            return Err(StorageError::invalid(format!(
                "unknown checklist item '{id}'"
            )));
        }

        let mut state = self.load()?;
        let checked = !state.get(id).copied().unwrap_or(false);
        state.insert(id.to_owned(), checked);
        save_json(self.store, CHECKLIST_KEY, &state)?;

        tracing::debug!(id, checked, "toggled checklist item");
        Ok(checked)
    }

    /// Uncheck everything by removing the stored state.
    pub fn reset(&self) -> Result<(), StorageError> {
        self.store.remove(CHECKLIST_KEY)?;
        tracing::debug!("reset safety checklist");
        Ok(())
    }

    /// Whether every item is checked.
    pub fn is_complete(&self) -> Result<bool, StorageError> {
        Ok(is_complete(&self.load()?))
    }
}

/// Whether every item in [`CHECKLIST_ITEMS`] is checked in `state`.
#[must_use]
pub fn is_complete(state: &ChecklistState) -> bool {
    CHECKLIST_ITEMS
        .iter()
        .all(|item| state.get(item.id).copied().unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MemoryStore;
    use crate::error::StorageErrorKind;

    #[test]
    fn test_item_ids_unique() {
        let ids: HashSet<_> = CHECKLIST_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), CHECKLIST_ITEMS.len());
        assert_eq!(checklist_item("env4").unwrap().category, "Equipment");
        assert!(checklist_item("env8").is_none());
    }

    #[test]
    fn test_toggle_flips() {
        let store = MemoryStore::new();
        let checklist = SafetyChecklist::new(&store);

        assert!(checklist.toggle("epi1").unwrap());
        assert!(!checklist.toggle("epi1").unwrap());
        assert!(checklist.toggle("mat2").unwrap());

        let state = checklist.load().unwrap();
        assert_eq!(state.get("epi1"), Some(&false));
        assert_eq!(state.get("mat2"), Some(&true));
    }

    #[test]
    fn test_toggle_unknown_item() {
        let store = MemoryStore::new();
        let err = SafetyChecklist::new(&store).toggle("nope").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Invalid);
        assert_eq!(store.get(CHECKLIST_KEY).unwrap(), None);
    }

    #[test]
    fn test_complete_after_all_toggled() {
        let store = MemoryStore::new();
        let checklist = SafetyChecklist::new(&store);

        for item in &CHECKLIST_ITEMS[1..] {
            checklist.toggle(item.id).unwrap();
        }
        assert!(!checklist.is_complete().unwrap());

        checklist.toggle("epi1").unwrap();
        assert!(checklist.is_complete().unwrap());
    }

    #[test]
    fn test_reset_removes_key() {
        let store = MemoryStore::new();
        let checklist = SafetyChecklist::new(&store);
        checklist.toggle("env1").unwrap();

        checklist.reset().unwrap();

        assert_eq!(store.get(CHECKLIST_KEY).unwrap(), None);
        assert!(checklist.load().unwrap().is_empty());
    }

    #[test]
    fn test_is_complete_empty_state() {
        assert!(!is_complete(&ChecklistState::new()));
    }
}
