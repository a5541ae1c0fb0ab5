//! Pointer picking system.
//!
//! Each frame [`update_pointer_state`] casts a ray from the camera through the
//! cursor and tests it against every dot's sphere. The nearest hit inside the
//! camera's clip range becomes [`PointerState::hovered`]; on a left click a
//! [`PointerClickEvent`] carries it to the click observer.

use bevy_ecs::prelude::*;
use raylib::core::collision::get_ray_collision_sphere;
use raylib::prelude::{MouseButton, Ray, Vector3};

use crate::components::dot::Dot;
use crate::components::worldposition::WorldPosition;
use crate::events::pointer::PointerClickEvent;
use crate::resources::camera3d::ViewCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::pointer::PointerState;
use crate::resources::windowsize::WindowSize;

/// Pick the closest hit whose distance lies inside the camera's clip range.
pub fn pick_nearest(
    hits: impl IntoIterator<Item = (Entity, f32)>,
    view: &ViewCamera,
) -> Option<Entity> {
    hits.into_iter()
        .filter(|(_, distance)| view.in_range(*distance))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, _)| entity)
}

/// Distance along `ray` to the sphere around `center`, if it is hit.
pub fn sphere_hit_distance(ray: Ray, center: Vector3, radius: f32) -> Option<f32> {
    let collision = get_ray_collision_sphere(ray, center, radius);
    collision.hit.then_some(collision.distance)
}

/// Refresh [`PointerState`] from raylib and emit click events.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
    window: Res<WindowSize>,
    config: Res<GameConfig>,
    view: Option<Res<ViewCamera>>,
    dots: Query<(Entity, &WorldPosition), With<Dot>>,
    mut commands: Commands,
) {
    let mouse = rl.get_mouse_position();
    pointer.screen = mouse;
    pointer.ndc = window.to_ndc(mouse);

    pointer.hovered = view.as_deref().and_then(|view| {
        let ray = rl.get_screen_to_world_ray(mouse, view.camera);
        let hits = dots.iter().filter_map(|(entity, position)| {
            sphere_hit_distance(ray, position.pos, config.dot_radius)
                .map(|distance| (entity, distance))
        });
        pick_nearest(hits, view)
    });

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.trigger(PointerClickEvent {
            dot: pointer.hovered,
        });
    }
}
