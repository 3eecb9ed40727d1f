use std::collections::BTreeSet;

use crate::scene::Scene;

/// Tracks the active selection.
///
/// `SelectionManager` is responsible for:
/// - Holding the ids of the currently selected top-level shapes
/// - Collapsing, extending and toggling the selection for clicks
/// - Reporting the selection in scene z-order for copy and grouping
///
/// # Selection Model
///
/// - **Active selection**: a set of scene ids; order is never significant on its own
/// - **Z-order view**: [`SelectionManager::ids_in_z_order`] reads the scene to order ids
///   bottom to top, which is what copy/paste and grouping rely on
/// - **Multi-select**: the controller calls `add`/`toggle` instead of `select_only`
///   when the configured modifier is held
///
/// # Design
///
/// The manager stores ids only. Stale ids (shapes removed by undo, cut or
/// load) are dropped with [`SelectionManager::retain_existing`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: BTreeSet<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use sketchpad_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is part of the active selection.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected shapes.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending id order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.selected.iter().copied()
    }

    /// The single selected id, if exactly one shape is selected.
    pub fn single(&self) -> Option<u64> {
        if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    /// Collapses the selection to `id`.
    pub fn select_only(&mut self, id: u64) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Adds `id` to the selection.
    ///
    /// # Returns
    ///
    /// `true` if `id` was not already selected.
    pub fn add(&mut self, id: u64) -> bool {
        self.selected.insert(id)
    }

    /// Flips the selection state of `id`.
    ///
    /// # Returns
    ///
    /// `true` if `id` is selected afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Replaces the selection with `ids`.
    pub fn set<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = u64>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Deselects everything.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Selects every shape in `scene`.
    pub fn select_all(&mut self, scene: &Scene) {
        self.set(scene.iter().map(|o| o.id));
    }

    /// Drops ids that no longer exist in `scene`.
    pub fn retain_existing(&mut self, scene: &Scene) {
        self.selected.retain(|id| scene.contains(*id));
    }

    /// Selected ids ordered bottom to top as they appear in `scene`.
    ///
    /// Ids missing from the scene are skipped.
    pub fn ids_in_z_order(&self, scene: &Scene) -> Vec<u64> {
        scene
            .iter()
            .map(|o| o.id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }
}
