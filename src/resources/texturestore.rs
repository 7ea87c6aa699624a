//! Texture store resource.
//!
//! A non-send resource that owns every texture uploaded to the GPU, keyed by
//! string IDs referenced from [`Sprite`](crate::components::sprite::Sprite).
//!
//! Note: raylib textures must be released on the main thread while the
//! window's GL context is still alive. Call [`TextureStore::unload_all`]
//! before the raylib handle is dropped.

use log::info;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key, replacing (and releasing) any
    /// texture previously stored under it.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    /// Release every texture. Returns how many were released.
    pub fn unload_all(&mut self) -> usize {
        let count = self.textures.len();
        for (key, texture) in self.textures.drain() {
            info!("Releasing texture '{}'", key);
            drop(texture);
        }
        count
    }
}
