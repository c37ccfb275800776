/// Handle to a texture owned by the render backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Unlit materials: the surface shows its texture or colour unshaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    BasicTexture { texture: TextureId },
    /// `0xRRGGBB`.
    BasicColor { rgb: u32 },
}

impl Material {
    pub fn texture(texture: TextureId) -> Self {
        Material::BasicTexture { texture }
    }

    pub fn color(rgb: u32) -> Self {
        Material::BasicColor { rgb: rgb & 0x00ff_ffff }
    }
}

#[cfg(test)]
mod tests {
    use super::Material;

    #[test]
    fn color_drops_bits_above_rgb() {
        assert_eq!(Material::color(0xff00_ff00), Material::BasicColor { rgb: 0x00ff00 });
    }
}
