use bevy_ecs::prelude::Component;

/// Which part of a texture a sprite samples from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteRegion {
    /// One square cell of a sprite sheet. The column comes from the entity's
    /// [`AnimationFrame`](crate::components::animation::AnimationFrame) and
    /// the row is selected by a fixed pixel offset.
    SheetFrame { frame_size: u32, row_offset: u32 },
    /// The full texture, used for static tiles.
    WholeTexture,
}

/// Sprite is identified by a texture key in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) and the
/// region of that texture to draw.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub region: SpriteRegion,
}

impl Sprite {
    pub fn sheet(tex_key: impl Into<String>, frame_size: u32, row_offset: u32) -> Self {
        Self {
            tex_key: tex_key.into(),
            region: SpriteRegion::SheetFrame {
                frame_size,
                row_offset,
            },
        }
    }

    pub fn whole(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            region: SpriteRegion::WholeTexture,
        }
    }
}
