//! Rendering.
//!
//! The world is redrawn from scratch every frame: the background is cleared,
//! then every entity with a [`Sprite`] and a [`MapPosition`] is drawn in
//! [`ZIndex`] order. Nothing is carried over between frames.
//!
//! Texture regions are addressed with two helpers:
//! - [`sheet_source_rect`] picks one cell of a sprite sheet from the current
//!   animation frame and a row offset.
//! - [`tile_source_rect`] covers a whole texture.
//!
//! Both mirror the region by negating its width unless the entity faces
//! right; raylib samples a rectangle with negative width flipped
//! horizontally.
use bevy_ecs::prelude::*;
use log::error;
use raylib::prelude::*;

use crate::components::animation::AnimationFrame;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::{Sprite, SpriteRegion};
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;

pub const BACKGROUND: Color = Color::DARKGREEN;

/// Source rectangle for one cell of a sprite sheet.
pub fn sheet_source_rect(frame: u32, frame_size: u32, row_offset: u32, facing: Facing) -> Rectangle {
    let size = frame_size as f32;
    Rectangle {
        x: frame as f32 * size,
        y: row_offset as f32,
        width: size * facing.flip_sign(),
        height: size,
    }
}

/// Source rectangle covering a whole `width` x `height` texture.
pub fn tile_source_rect(width: i32, height: i32, facing: Facing) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: width as f32 * facing.flip_sign(),
        height: height as f32,
    }
}

/// Destination rectangle: the position with the size scaled uniformly.
pub fn dest_rect(position: MapPosition, width: f32, height: f32, scale: f32) -> Rectangle {
    Rectangle {
        x: position.x as f32,
        y: position.y as f32,
        width: width * scale,
        height: height * scale,
    }
}

/// Source and destination rectangles for a sprite. `texture_size` is only
/// read for whole-texture sprites.
pub fn sprite_rects(
    sprite: &Sprite,
    position: MapPosition,
    facing: Facing,
    frame: Option<AnimationFrame>,
    texture_size: (i32, i32),
    scale: f32,
) -> (Rectangle, Rectangle) {
    match sprite.region {
        SpriteRegion::SheetFrame {
            frame_size,
            row_offset,
        } => {
            let current = frame.map(|f| f.current()).unwrap_or(0);
            let size = frame_size as f32;
            (
                sheet_source_rect(current, frame_size, row_offset, facing),
                dest_rect(position, size, size, scale),
            )
        }
        SpriteRegion::WholeTexture => {
            let (w, h) = texture_size;
            (
                tile_source_rect(w, h, facing),
                dest_rect(position, w as f32, h as f32, scale),
            )
        }
    }
}

type DrawItem = (Sprite, MapPosition, Facing, Option<AnimationFrame>, ZIndex);

/// Draw every sprite in the world, lowest [`ZIndex`] first.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let scale = world
        .get_resource::<GameConfig>()
        .map(|c| c.sprite_scale)
        .unwrap_or(1.0);

    let mut to_draw: Vec<DrawItem> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&Facing>,
            Option<&AnimationFrame>,
            &ZIndex,
        )>();
        q.iter(world)
            .map(|(s, p, f, a, z)| (s.clone(), *p, f.copied().unwrap_or_default(), a.copied(), *z))
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    let Some(textures) = world.get_non_send_resource::<TextureStore>() else {
        return;
    };

    for (sprite, pos, facing, frame, _z) in to_draw.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let (src, dest) = sprite_rects(
            sprite,
            *pos,
            *facing,
            *frame,
            (tex.width, tex.height),
            scale,
        );
        d.draw_texture_pro(tex, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
    }
}

/// Clear the window and draw the world. The frame is presented when the
/// draw handle goes out of scope at the end of this system.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        error!("render_system: RaylibHandle is not available");
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        error!("render_system: RaylibThread is not available");
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(BACKGROUND);
        render_pass(world, &mut d);
    }

    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}
