use crate::components::{Drawable3D, Transform};
use crate::entity::EntityId;
use foundation::handles::Handle;
use foundation::math::{Affine, Vec3};

/// Scene graph container.
///
/// Entities are dense indices with optional components. Parent links are set
/// once at spawn time, so the hierarchy is a forest and never contains cycles.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    transforms: Vec<Option<Transform>>,
    parents: Vec<Option<EntityId>>,
    drawables_3d: Vec<Option<Drawable3D>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index));
        self.next_index += 1;
        let idx = id.index() as usize;
        self.ensure_capacity(idx);
        id
    }

    /// Spawn an entity whose transform is relative to `parent`.
    pub fn spawn_child(&mut self, parent: EntityId) -> EntityId {
        let child = self.spawn();
        self.parents[child.index() as usize] = Some(parent);
        child
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.ensure_capacity(entity.index() as usize);
        self.transforms[entity.index() as usize] = Some(transform);
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms
            .get(entity.index() as usize)
            .and_then(|t| *t)
    }

    pub fn transform_mut(&mut self, entity: EntityId) -> Option<&mut Transform> {
        self.transforms
            .get_mut(entity.index() as usize)
            .and_then(|t| t.as_mut())
    }

    pub fn set_drawable_3d(&mut self, entity: EntityId, drawable: Drawable3D) {
        self.ensure_capacity(entity.index() as usize);
        self.drawables_3d[entity.index() as usize] = Some(drawable);
    }

    pub fn drawable_3d(&self, entity: EntityId) -> Option<Drawable3D> {
        self.drawables_3d
            .get(entity.index() as usize)
            .and_then(|d| *d)
    }

    pub fn parent(&self, entity: EntityId) -> Option<EntityId> {
        self.parents.get(entity.index() as usize).and_then(|p| *p)
    }

    /// Direct children of `parent`, in spawn order.
    pub fn children(&self, parent: EntityId) -> Vec<EntityId> {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Some(parent))
            .map(|(idx, _)| EntityId(Handle::new(idx as u32)))
            .collect()
    }

    /// Local-to-world transform: the entity's own transform composed with
    /// every ancestor's. Missing transforms count as identity.
    pub fn world_affine(&self, entity: EntityId) -> Affine {
        let mut chain = Vec::new();
        let mut cursor = Some(entity);
        while let Some(e) = cursor {
            chain.push(self.transform(e).unwrap_or_else(Transform::identity));
            cursor = self.parent(e);
        }

        chain
            .iter()
            .rev()
            .fold(Affine::IDENTITY, |acc, t| acc.then(&t.local_affine()))
    }

    /// Convert a point expressed in `entity`'s local space to world space,
    /// using the hierarchy as it is right now.
    pub fn local_to_world(&self, entity: EntityId, point: Vec3) -> Vec3 {
        self.world_affine(entity).transform_point(point)
    }

    /// Every drawable with its world-space transform, in entity order.
    pub fn drawables_3d(&self) -> Vec<(EntityId, Affine, Drawable3D)> {
        let mut out = Vec::new();
        for (idx, drawable) in self.drawables_3d.iter().enumerate() {
            let Some(drawable) = drawable else { continue };
            let entity = EntityId(Handle::new(idx as u32));
            if self.transform(entity).is_none() {
                continue;
            }
            out.push((entity, self.world_affine(entity), *drawable));
        }
        out
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.parents.resize(new_len, None);
            self.drawables_3d.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::{Drawable3D, Material, Transform};
    use foundation::math::{Euler, Vec3};

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        let diff = a.distance(b);
        assert!(diff <= eps, "expected {a:?} ~= {b:?} (diff {diff})");
    }

    #[test]
    fn spawn_and_collect_drawables() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        world.set_drawable_3d(entity, Drawable3D::sphere(1.0, 8, Material::color(0xffffff)));

        let drawables = world.drawables_3d();
        assert_eq!(drawables.len(), 1);
        assert_eq!(drawables[0].0, entity);
    }

    #[test]
    fn drawables_without_transform_are_skipped() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_drawable_3d(entity, Drawable3D::sphere(1.0, 8, Material::color(0xffffff)));
        assert!(world.drawables_3d().is_empty());
    }

    #[test]
    fn children_are_listed_in_spawn_order() {
        let mut world = World::new();
        let root = world.spawn();
        let a = world.spawn_child(root);
        let _other = world.spawn();
        let b = world.spawn_child(root);

        assert_eq!(world.children(root), vec![a, b]);
        assert_eq!(world.parent(a), Some(root));
        assert_eq!(world.parent(root), None);
    }

    #[test]
    fn child_inherits_parent_rotation() {
        let mut world = World::new();
        let root = world.spawn();
        world.set_transform(
            root,
            Transform::identity().with_rotation(Euler::new(0.0, std::f64::consts::FRAC_PI_2, 0.0)),
        );
        let child = world.spawn_child(root);
        world.set_transform(child, Transform::translate(Vec3::new(1.0, 0.0, 0.0)));

        let world_pos = world.local_to_world(child, Vec3::ZERO);
        assert_vec_close(world_pos, Vec3::new(0.0, 0.0, -1.0), 1e-12);

        // Rotating the parent afterwards moves the child with it.
        if let Some(t) = world.transform_mut(root) {
            t.rotation.y = 0.0;
        }
        assert_vec_close(world.local_to_world(child, Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn local_to_world_includes_translation() {
        let mut world = World::new();
        let root = world.spawn();
        world.set_transform(root, Transform::translate(Vec3::new(0.0, 5.0, 0.0)));
        assert_vec_close(
            world.local_to_world(root, Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(1.0, 5.0, 0.0),
            1e-12,
        );
    }
}
