//! Interactive raycast view of a little rigid-body world.
//!
//! ```bash
//! cargo run --release -- assets/sprite.tga
//! ```
//!
//! Keys: `W/S/A/D` move, `←/→` turn, `Z/X` field of view,
//! `E` distance metric, `R` ray-direction model, `F/G` frame resolution,
//! `Q` wireframe overlay, `Esc` quit.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use raybox_rs::{
    assets::{TextureBank, tga},
    phys::{BodyDef, BodyId, BodyKind, PhysicsWorld, Shape},
    render::{
        DebugDraw, Raycaster, RenderConfig, Rgba, StyleRegistry, SurfaceStyle, blit::blit_scaled,
    },
    sim::{DT, POSITION_ITERATIONS, TickAccumulator, VELOCITY_ITERATIONS},
    world::Camera,
};

const BACKGROUND: Rgba = 0xFF_80_80_FF;

const MOVE_SPEED: f32 = 0.1;
const ROTATE_SPEED: f32 = 0.05;
const ANGLE_CHANGE_SPEED: f32 = 0.05;

const MIN_FRAME_SIZE: usize = 64;
const MAX_FRAME_SIZE: usize = 512;

#[derive(Parser, Debug)]
#[command(about = "Raycasting view of a 2-D rigid-body physics world")]
struct Args {
    /// Sprite texture (TGA, 24/32-bit). Required; startup fails without it.
    texture: PathBuf,

    /// Window width in pixels.
    #[arg(long, default_value_t = 512)]
    width: usize,

    /// Window height in pixels.
    #[arg(long, default_value_t = 512)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    /*──────────────── assets (fatal if missing) ─────────────────────*/
    let mut textures = TextureBank::default_with_checker();
    let sprite = tga::load_tga(&args.texture)
        .with_context(|| format!("loading sprite texture `{}`", args.texture.display()))?;
    let sprite_id = textures.insert("SPRITE", sprite)?;

    /*──────────────── scene ─────────────────────────────────────────*/
    let mut world = PhysicsWorld::new(Vec2::new(0.0, -1.0));
    let mut styles = StyleRegistry::new();
    build_scene(&mut world, &mut styles, sprite_id);

    let mut camera = Camera::new(Vec2::new(10.0, 5.0), Vec2::new(-1.0, 0.0));

    /*──────────────── window & render state ─────────────────────────*/
    let mut win = Window::new(
        "Raycast Physics View",
        args.width,
        args.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(60);

    let mut winbuf = vec![BACKGROUND; args.width * args.height];
    let mut raycaster = Raycaster::new();
    let debug_draw = DebugDraw::default();

    let mut cfg = RenderConfig::default();
    let mut debug_view = false;
    let mut frame_size = MAX_FRAME_SIZE;

    let mut ticker = TickAccumulator::new();
    let mut last = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /*──────────── edge-triggered toggles ────────────────────────*/
        if win.is_key_pressed(Key::Q, KeyRepeat::No) {
            debug_view = !debug_view;
        }
        if win.is_key_pressed(Key::E, KeyRepeat::No) {
            cfg.distance = cfg.distance.toggled();
            println!("Distance Mode: {}", cfg.distance);
        }
        if win.is_key_pressed(Key::R, KeyRepeat::No) {
            cfg.ray_dir = cfg.ray_dir.toggled();
            println!("Ray Direction Mode: {}", cfg.ray_dir);
        }
        if win.is_key_pressed(Key::F, KeyRepeat::No) && frame_size > MIN_FRAME_SIZE {
            frame_size /= 2;
            println!("Frame Size: {frame_size}");
        }
        if win.is_key_pressed(Key::G, KeyRepeat::No) && frame_size < MAX_FRAME_SIZE {
            frame_size *= 2;
            println!("Frame Size: {frame_size}");
        }

        /*──────────── fixed ticks ───────────────────────────────────*/
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        for _ in 0..ticker.advance(elapsed) {
            world.step(DT, VELOCITY_ITERATIONS, POSITION_ITERATIONS);

            if win.is_key_down(Key::W) {
                camera.step(MOVE_SPEED);
            }
            if win.is_key_down(Key::S) {
                camera.step(-MOVE_SPEED);
            }
            if win.is_key_down(Key::A) {
                camera.strafe(MOVE_SPEED);
            }
            if win.is_key_down(Key::D) {
                camera.strafe(-MOVE_SPEED);
            }
            if win.is_key_down(Key::Left) {
                camera.turn(-ROTATE_SPEED);
            }
            if win.is_key_down(Key::Right) {
                camera.turn(ROTATE_SPEED);
            }
            if win.is_key_down(Key::Z) {
                cfg.nudge_angle(-ANGLE_CHANGE_SPEED);
            }
            if win.is_key_down(Key::X) {
                cfg.nudge_angle(ANGLE_CHANGE_SPEED);
            }
        }

        /*──────────── draw ──────────────────────────────────────────*/
        if debug_view {
            winbuf.fill(BACKGROUND);
            debug_draw.draw_world(&mut winbuf, args.width, args.height, &world, &camera);
        } else {
            raycaster.begin_frame(frame_size, frame_size);
            raycaster.render_view(&world, &camera, &styles, &textures, &cfg);
            raycaster.end_frame(|fb, fw, fh| {
                blit_scaled(fb, fw, fh, &mut winbuf, args.width, args.height, BACKGROUND);
            });
        }
        win.update_with_buffer(&winbuf, args.width, args.height)?;
    }
    Ok(())
}

/// The demo arena: four tinted walls, a falling sprite ball and one
/// invisible occluder that has collision geometry but no render style.
fn build_scene(world: &mut PhysicsWorld, styles: &mut StyleRegistry, sprite_id: u16) {
    let walls: [(Vec2, Rgba); 4] = [
        (Vec2::new(2.5, 2.5), 0xFF_FF_FF_FF),
        (Vec2::new(7.0, 2.5), 0xFF_FF_C8_C8),
        (Vec2::new(7.0, 7.0), 0xFF_C8_FF_C8),
        (Vec2::new(2.5, 7.0), 0xFF_C8_C8_FF),
    ];
    for (pos, tint) in walls {
        let id = add_static_box(world, pos, Vec2::ONE);
        styles.attach(id, SurfaceStyle::wall(tint));
    }

    // Camera-only occluder: rays hit it, the compositor skips it.
    add_static_box(world, Vec2::new(4.75, 9.0), Vec2::new(0.25, 0.25));

    let ball = world.create_body(
        BodyDef::new(
            BodyKind::Dynamic,
            Vec2::new(2.5, 5.5),
            Shape::Circle { radius: 0.5 },
        ),
    );
    styles.attach(ball, SurfaceStyle::sprite(sprite_id).with_radius(0.5));
}

fn add_static_box(world: &mut PhysicsWorld, center: Vec2, half_extents: Vec2) -> BodyId {
    world.create_body(BodyDef::new(
        BodyKind::Static,
        center,
        Shape::Box { half_extents },
    ))
}
