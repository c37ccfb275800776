use foundation::math::Affine;
use scene::components::{Material, Shape3D};
use scene::world::World;

use crate::camera::Camera3D;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    Draw3D {
        /// Local-to-world transform of the mesh.
        model: Affine,
        shape: Shape3D,
        material: Material,
    },
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub camera: Camera3D,
    pub view_proj: [[f32; 4]; 4],
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    pub fn collect_3d(world: &World, camera: Camera3D) -> RenderFrame {
        let mut frame = RenderFrame {
            camera,
            view_proj: camera.view_proj_matrix(),
            commands: Vec::new(),
        };
        for (_, model, drawable) in world.drawables_3d() {
            frame.commands.push(RenderCommand::Draw3D {
                model,
                shape: drawable.shape,
                material: drawable.material,
            });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, Renderer};
    use crate::camera::Camera3D;
    use foundation::math::Vec3;
    use scene::components::{Drawable3D, Material, Transform};
    use scene::world::World;

    #[test]
    fn collect_3d_commands_in_world_space() {
        let mut world = World::new();
        let parent = world.spawn();
        world.set_transform(parent, Transform::translate(Vec3::new(0.0, 1.0, 0.0)));
        world.set_drawable_3d(parent, Drawable3D::sphere(1.0, 8, Material::color(0xffffff)));
        let child = world.spawn_child(parent);
        world.set_transform(child, Transform::translate(Vec3::new(2.0, 0.0, 0.0)));
        world.set_drawable_3d(child, Drawable3D::sphere(0.1, 4, Material::color(0x00ff00)));

        let camera = Camera3D::perspective(75.0, 1.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 0.0, 3.0));
        let frame = Renderer::collect_3d(&world, camera);

        assert_eq!(frame.commands.len(), 2);
        let RenderCommand::Draw3D { model, .. } = frame.commands[1];
        assert_eq!(model.translation, Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(frame.view_proj, camera.view_proj_matrix());
    }
}
