use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use hyperbolic_geometry::CanvasPoint;

#[derive(Resource)]
pub struct ViewportCamera {
    pub focus: Vec2,
    pub zoom: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// Projects the cursor through the camera onto the canvas plane.
pub fn cursor_canvas_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<CanvasPoint> {
    let cursor = window.cursor_position()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    Some(CanvasPoint::new(world.x as f64, world.y as f64))
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        viewport.zoom = (viewport.zoom * (1.0 - scroll_accum * 0.1)).clamp(0.05, 20.0);
    }

    // Right drag pans; screen y points down, canvas y up
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let pan = Vec2::new(-mouse_delta.x, mouse_delta.y) * viewport.zoom;
        viewport.focus += pan;
    }

    // Keyboard movement input
    let mut move_input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }

    if move_input != Vec2::ZERO {
        // Adjust speed, shift = faster, ctrl = slower
        let mut speed = 400.0 * viewport.zoom;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
            speed *= 0.25;
        }
        viewport.focus += move_input.normalize() * speed * time.delta_secs();
    }

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    let target_pos = viewport.focus.extend(camera_transform.translation.z);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);

    let target_scale = Vec3::new(viewport.zoom, viewport.zoom, 1.0);
    camera_transform.scale = camera_transform.scale.lerp(target_scale, lerp_speed);
}
