use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::dot::Dot;
use crate::components::dynamictext::DynamicText;
use crate::components::glow::Glow;
use crate::components::link::Link;
use crate::components::screenposition::ScreenPosition;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::ViewCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::pointer::PointerState;
use crate::resources::session::Session;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

const LINK_COLOR: Color = Color {
    r: 0x00,
    g: 0xff,
    b: 0x00,
    a: 0xff,
};
const BACKGROUND_COLOR: Color = Color {
    r: 0x10,
    g: 0x10,
    b: 0x18,
    a: 0xff,
};
const DEBUG_TEXT_SIZE: i32 = 10;

/// Draw one frame.
///
/// The raylib handle and thread are taken out of the world for the duration
/// of the frame so the drawing scopes can borrow them while the passes below
/// query the ECS world.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<raylib::RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<raylib::RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND_COLOR);

        if let Some(view) = world.get_resource::<ViewCamera>().copied() {
            // BeginMode3D reads the clip planes from rlgl; the aspect comes
            // from the current framebuffer.
            unsafe {
                ffi::rlSetClipPlanes(view.near as f64, view.far as f64);
            }
            let mut d3 = d.begin_mode3D(view.camera);
            render_pass(world, &mut d3);
        }

        render_hud(world, &mut d);
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Dots as shaded spheres, links as lines from their start to the current tip.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let radius = world
        .get_resource::<GameConfig>()
        .map(|config| config.dot_radius)
        .unwrap_or_default();

    let mut links = world.query::<&Link>();
    for link in links.iter(world) {
        d3.draw_line_3D(link.start, link.tip, LINK_COLOR);
    }

    let mut dots = world.query_filtered::<(&WorldPosition, &Glow), With<Dot>>();
    for (position, glow) in dots.iter(world) {
        d3.draw_sphere(position.pos, radius, glow.shaded());
    }
}

/// Screen-space HUD texts.
pub fn render_hud(world: &mut World, d: &mut RaylibDrawHandle) {
    let window_w = world
        .get_resource::<WindowSize>()
        .map(|w| w.w)
        .unwrap_or_default();

    let mut texts = world.query::<(&ScreenPosition, &DynamicText)>();
    for (position, text) in texts.iter(world) {
        let x = position.text_left(window_w, d.measure_text(&text.content, text.font_size));
        d.draw_text(
            &text.content,
            x,
            position.pos.y as i32,
            text.font_size,
            text.color,
        );
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let window = *world.resource::<WindowSize>();

    let state = world
        .get_resource::<GameState>()
        .map(|s| format!("{:?}", s.get()))
        .unwrap_or_default();
    let text = format!(
        "DEBUG MODE (press F11 to toggle) | FPS: {} | State: {}",
        d.get_fps(),
        state
    );
    d.draw_text(&text, 10, window.h - 75, DEBUG_TEXT_SIZE, Color::LIGHTGRAY);

    if let Some(time) = world.get_resource::<WorldTime>() {
        let text = format!(
            "Time: {:.2}s Frame: {} Delta: {:.4}",
            time.elapsed, time.frame_count, time.delta
        );
        d.draw_text(&text, 10, window.h - 60, DEBUG_TEXT_SIZE, Color::LIGHTGRAY);
    }

    if let Some(session) = world.get_resource::<Session>() {
        let text = format!(
            "Dots: {} Targeted: {} Connections: {} Generation: {}",
            session.points().len(),
            session.graph().targeted().len(),
            session.graph().connection_count(),
            session.generation()
        );
        d.draw_text(&text, 10, window.h - 45, DEBUG_TEXT_SIZE, Color::LIGHTGRAY);
    }

    if let Some(pointer) = world.get_resource::<PointerState>() {
        let text = format!(
            "Mouse screen: ({:.1}, {:.1}) NDC: ({:.3}, {:.3}) Aspect: {:.3}",
            pointer.screen.x,
            pointer.screen.y,
            pointer.ndc.x,
            pointer.ndc.y,
            window.aspect()
        );
        d.draw_text(&text, 10, window.h - 30, DEBUG_TEXT_SIZE, Color::LIGHTGRAY);
    }

    // Dot indices next to their projected position.
    let Some(view) = world.get_resource::<ViewCamera>().copied() else {
        return;
    };
    let mut dots = world.query::<(&Dot, &WorldPosition)>();
    for (dot, position) in dots.iter(world) {
        let screen = d.get_world_to_screen(position.pos, view.camera);
        let label = if dot.connected {
            format!("{}*", dot.index)
        } else {
            dot.index.to_string()
        };
        d.draw_text(
            &label,
            screen.x as i32 + 8,
            screen.y as i32 - 8,
            DEBUG_TEXT_SIZE,
            Color::YELLOW,
        );
    }
}
