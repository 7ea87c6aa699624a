//! Game setup.
//!
//! Loads the textures named in [`GameConfig`] into the [`TextureStore`] and
//! spawns the world's entities: the player and, when configured, a static
//! ground tile. Any asset that fails to load aborts setup with an error.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::animation::AnimationFrame;
use crate::components::assetname::AssetName;
use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::stats::Stats;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

pub const PLAYER_TEXTURE: &str = "player";
pub const GROUND_TEXTURE: &str = "ground";

/// Load an image, optionally mirror it horizontally, and upload it.
///
/// The CPU-side image is released as soon as the texture exists.
pub fn load_sprite_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &str,
    flip: bool,
) -> Result<Texture2D, String> {
    let mut image =
        Image::load_image(path).map_err(|e| format!("Failed to load image '{}': {}", path, e))?;
    if flip {
        image.flip_horizontal();
    }
    let texture = rl
        .load_texture_from_image(th, &image)
        .map_err(|e| format!("Failed to create texture from '{}': {}", path, e))?;
    info!(
        "Loaded '{}' ({}x{}){}",
        path,
        texture.width,
        texture.height,
        if flip { " mirrored" } else { "" }
    );
    Ok(texture)
}

/// Components for the keyboard-driven player.
pub fn player_bundle(config: &GameConfig) -> impl Bundle {
    (
        AssetName::new(config.player_name.clone()),
        InputControlled,
        MapPosition::new(0, 0),
        Facing::Right,
        Stats::default().with_movement_speed(config.player_movement_speed),
        AnimationFrame::new(config.player_max_frame),
        Sprite::sheet(
            PLAYER_TEXTURE,
            config.player_frame_size,
            config.player_row_offset,
        ),
        ZIndex::PLAYER,
    )
}

/// Components for the static ground tile.
pub fn ground_bundle() -> impl Bundle {
    (
        AssetName::new("Grass"),
        MapPosition::new(0, 0),
        Facing::Right,
        Sprite::whole(GROUND_TEXTURE),
        ZIndex::MAP,
    )
}

/// Spawn a bundle and report it by its [`AssetName`].
fn spawn_named(world: &mut World, bundle: impl Bundle) -> Entity {
    let entity = world.spawn(bundle).id();
    if let Some(name) = world.get::<AssetName>(entity) {
        info!("Spawned '{}' as {:?}", name.0, entity);
    }
    entity
}

/// Load every configured texture and spawn the world's entities.
///
/// The [`TextureStore`] is inserted before the first load, so on error every
/// texture uploaded so far is still reachable through the world and can be
/// handed to [`release_textures`].
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
) -> Result<(), String> {
    let config = world.resource::<GameConfig>().clone();
    world.insert_non_send_resource(TextureStore::new());

    let player_tex = load_sprite_texture(rl, th, &config.player_sheet, config.player_flip)?;
    world
        .non_send_resource_mut::<TextureStore>()
        .insert(PLAYER_TEXTURE, player_tex);

    if let Some(path) = &config.ground_tile {
        let ground_tex = load_sprite_texture(rl, th, path, false)?;
        world
            .non_send_resource_mut::<TextureStore>()
            .insert(GROUND_TEXTURE, ground_tex);
        spawn_named(world, ground_bundle());
    }

    spawn_named(world, player_bundle(&config));

    Ok(())
}

/// Take the [`TextureStore`] out of the world and release every texture in
/// it. Returns how many were released.
///
/// Must run while the raylib window is still open.
pub fn release_textures(world: &mut World) -> usize {
    match world.remove_non_send_resource::<TextureStore>() {
        Some(mut textures) => textures.unload_all(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_textures_takes_store_out_of_world() {
        let mut world = World::new();
        world.insert_non_send_resource(TextureStore::new());

        assert_eq!(release_textures(&mut world), 0);
        assert!(world.get_non_send_resource::<TextureStore>().is_none());
    }

    #[test]
    fn test_release_textures_without_store_is_noop() {
        let mut world = World::new();
        assert_eq!(release_textures(&mut world), 0);
    }

    #[test]
    fn test_spawn_named_keeps_asset_name() {
        let mut world = World::new();
        let entity = spawn_named(&mut world, ground_bundle());
        assert_eq!(
            world.get::<AssetName>(entity),
            Some(&AssetName::new("Grass"))
        );
    }
}
