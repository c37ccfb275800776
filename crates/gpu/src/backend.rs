use scene::components::TextureId;
use tracing::trace;

use crate::renderer::RenderFrame;
use crate::textures::TextureSource;

/// Background colour the surface is cleared to before each frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor {
    /// `0xRRGGBB`.
    pub rgb: u32,
    pub alpha: f32,
}

impl ClearColor {
    /// White at zero alpha, so the host page shows through around the globe.
    pub fn transparent() -> Self {
        Self {
            rgb: 0xffffff,
            alpha: 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceDescriptor {
    pub width: u32,
    pub height: u32,
    pub clear_color: ClearColor,
}

/// Opaque handle to a drawable surface the host embeds in its UI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceHandle {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

/// The rendering engine the globe drives.
///
/// Texture loading is deferred: `load_texture` hands back an id immediately
/// and the backend decides when (and whether) pixels arrive.
pub trait RenderBackend {
    fn create_surface(&mut self, descriptor: SurfaceDescriptor) -> SurfaceHandle;
    fn load_texture(&mut self, source: &TextureSource) -> TextureId;
    fn render(&mut self, surface: SurfaceHandle, frame: &RenderFrame);
}

/// Backend without a GPU: records what it was asked to do.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    surfaces: Vec<SurfaceDescriptor>,
    textures: Vec<TextureSource>,
    frames_rendered: u64,
    last_frame: Option<RenderFrame>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surfaces(&self) -> &[SurfaceDescriptor] {
        &self.surfaces
    }

    pub fn textures(&self) -> &[TextureSource] {
        &self.textures
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_surface(&mut self, descriptor: SurfaceDescriptor) -> SurfaceHandle {
        let id = self.surfaces.len() as u32;
        self.surfaces.push(descriptor);
        SurfaceHandle {
            id,
            width: descriptor.width,
            height: descriptor.height,
        }
    }

    fn load_texture(&mut self, source: &TextureSource) -> TextureId {
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(source.clone());
        id
    }

    fn render(&mut self, surface: SurfaceHandle, frame: &RenderFrame) {
        self.frames_rendered += 1;
        trace!(
            surface = surface.id,
            commands = frame.commands.len(),
            "headless render"
        );
        self.last_frame = Some(frame.clone());
    }
}
