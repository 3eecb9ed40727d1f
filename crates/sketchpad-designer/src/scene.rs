//! Scene: the ordered list of top-level shapes.
//!
//! List order is z-order, last is topmost. Every top-level shape is wrapped in
//! a [`DrawingObject`] carrying a stable id so the controller can refer to
//! shapes without holding borrows. Ids are handed out monotonically and never
//! reused, even across snapshot restores.

use std::collections::BTreeSet;

use sketchpad_core::Point;

use crate::model::{DesignGroup, DesignerShape, Shape};

/// A top-level shape and its id.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub shape: Shape,
}

/// Deep copy of the scene contents, used for undo history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneSnapshot {
    objects: Vec<DrawingObject>,
    groups: BTreeSet<u64>,
}

impl SceneSnapshot {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.objects.iter().map(|o| &o.shape)
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<DrawingObject>,
    /// Ids of top-level groups created or loaded in this scene.
    groups: BTreeSet<u64>,
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            groups: BTreeSet::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    /// Z-index of `id`.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawingObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> {
        self.objects.iter_mut()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.objects.iter().map(|o| &o.shape)
    }

    pub fn ids(&self) -> Vec<u64> {
        self.objects.iter().map(|o| o.id).collect()
    }

    /// Ids of top-level groups.
    pub fn groups(&self) -> &BTreeSet<u64> {
        &self.groups
    }

    /// Appends `shape` on top and returns its id.
    pub fn insert(&mut self, shape: Shape) -> u64 {
        let index = self.objects.len();
        self.insert_at(index, shape)
    }

    fn insert_at(&mut self, index: usize, shape: Shape) -> u64 {
        let id = self.generate_id();
        if shape.is_group() {
            self.groups.insert(id);
        }
        self.objects.insert(index, DrawingObject { id, shape });
        id
    }

    pub fn remove(&mut self, id: u64) -> Option<Shape> {
        let index = self.position(id)?;
        self.groups.remove(&id);
        Some(self.objects.remove(index).shape)
    }

    /// Topmost shape containing `p`, scanning from the top down.
    pub fn top_shape_at(&self, p: Point) -> Option<u64> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.shape.contains_point(p))
            .map(|o| o.id)
    }

    /// Moves the given shapes into a new group, atomically.
    ///
    /// Members keep their relative z-order inside the group, and the group
    /// is appended on top of the scene. Returns `None` and leaves the
    /// scene unchanged if fewer than two distinct ids are given or any id is
    /// unknown.
    pub fn replace(&mut self, member_ids: &[u64]) -> Option<u64> {
        let wanted: BTreeSet<u64> = member_ids.iter().copied().collect();
        if wanted.len() < 2 || !wanted.iter().all(|id| self.contains(*id)) {
            return None;
        }

        let mut members = Vec::with_capacity(wanted.len());
        let mut kept = Vec::with_capacity(self.objects.len() - wanted.len());
        for obj in self.objects.drain(..) {
            if wanted.contains(&obj.id) {
                members.push(obj.shape);
            } else {
                kept.push(obj);
            }
        }
        self.objects = kept;
        for id in &wanted {
            self.groups.remove(id);
        }

        Some(self.insert(Shape::Group(DesignGroup::new(members))))
    }

    /// Inverse of [`Scene::replace`]: the group's members take its slot, in
    /// order, under fresh ids. Returns `None` if `group_id` is not a
    /// top-level group.
    pub fn expand(&mut self, group_id: u64) -> Option<Vec<u64>> {
        let index = self.position(group_id)?;
        if !self.objects[index].shape.is_group() {
            return None;
        }
        let Shape::Group(group) = self.objects.remove(index).shape else {
            return None;
        };
        self.groups.remove(&group_id);

        let ids = group
            .into_shapes()
            .into_iter()
            .enumerate()
            .map(|(offset, shape)| self.insert_at(index + offset, shape))
            .collect();
        Some(ids)
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            objects: self.objects.clone(),
            groups: self.groups.clone(),
        }
    }

    /// Replaces the contents with `snapshot`, ids included.
    pub fn restore(&mut self, snapshot: SceneSnapshot) {
        let max_id = snapshot.objects.iter().map(|o| o.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        self.objects = snapshot.objects;
        self.groups = snapshot.groups;
    }

    /// Discards everything and inserts `shapes` in order under fresh ids.
    pub fn replace_all(&mut self, shapes: Vec<Shape>) -> Vec<u64> {
        self.clear();
        shapes.into_iter().map(|s| self.insert(s)).collect()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.groups.clear();
    }
}
