//! Headless walkthrough of the navigation core.
//!
//! Replays a scripted walk through the demo scene (a tall block and a
//! teleport pad) and logs every proximity transition. Pass a TOML options
//! file to override the defaults; run with `RUST_LOG=info` to see output.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use fpnav::camera::{Camera, PoseTarget};
use fpnav::input::InputEvent;
use fpnav::options::Options;
use fpnav::proximity::{Aabb, ProximityEvent};
use fpnav::session::NavigationSession;
use fpnav::util::FrameClock;
use glam::{Vec2, Vec3};
use web_time::Duration;

const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);
const FRAME: Duration = Duration::from_micros(16_667);

/// One scripted phase: an optional window resize and input events applied
/// up front, then `frames` ticks.
struct Phase {
    name: &'static str,
    resize: Option<(u32, u32)>,
    events: Vec<InputEvent>,
    frames: u32,
}

fn key(code: &str, pressed: bool) -> InputEvent {
    InputEvent::Key {
        code: code.to_owned(),
        pressed,
    }
}

fn scene_volumes() -> Vec<(Option<String>, Aabb)> {
    vec![
        (
            Some("character".to_owned()),
            Aabb::from_center_size(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(2.0)),
        ),
        (
            Some("hotel".to_owned()),
            Aabb::from_center_size(
                Vec3::new(40.0, 37.0, 0.0),
                Vec3::new(35.0, 75.0, 35.0),
            ),
        ),
        (
            Some("teleport".to_owned()),
            Aabb::from_center_size(Vec3::new(23.0, 5.0, 0.0), Vec3::splat(10.0)),
        ),
    ]
}

fn script() -> Vec<Phase> {
    // Pointer travel that turns the view a quarter turn to the right.
    let quarter_turn = VIEWPORT.x * FRAC_PI_2 / 5.0;
    vec![
        Phase {
            name: "settle",
            resize: None,
            events: vec![InputEvent::PointerMoved {
                x: VIEWPORT.x / 2.0,
                y: VIEWPORT.y / 2.0,
            }],
            frames: 10,
        },
        Phase {
            name: "turn towards the pads",
            resize: None,
            events: vec![InputEvent::PointerMoved {
                x: VIEWPORT.x / 2.0 + quarter_turn,
                y: VIEWPORT.y / 2.0,
            }],
            frames: 1,
        },
        Phase {
            name: "strafe onto the teleport lane",
            resize: None,
            events: vec![key("KeyA", true)],
            frames: 36,
        },
        Phase {
            name: "walk forward",
            resize: None,
            events: vec![key("KeyA", false), key("KeyW", true)],
            frames: 30,
        },
        Phase {
            name: "look away",
            resize: None,
            events: vec![
                key("KeyW", false),
                InputEvent::PointerMoved {
                    x: VIEWPORT.x / 2.0 - quarter_turn,
                    y: VIEWPORT.y / 2.0,
                },
            ],
            frames: 10,
        },
        Phase {
            name: "window resized",
            resize: Some((1280, 720)),
            events: Vec::new(),
            frames: 5,
        },
    ]
}

fn describe(session: &NavigationSession, event: &ProximityEvent) -> String {
    let name = |id| {
        session
            .detector()
            .volume(id)
            .and_then(|v| v.label.clone())
            .unwrap_or_else(|| format!("{id:?}"))
    };
    match event {
        ProximityEvent::Entered(hit) => {
            format!("now facing {} at {:.2}", name(hit.volume), hit.distance)
        }
        ProximityEvent::Changed { from, to } => format!(
            "facing {} at {:.2} (was {})",
            name(to.volume),
            to.distance,
            name(*from)
        ),
        ProximityEvent::Cleared { previous } => {
            format!("no longer facing {}", name(*previous))
        }
    }
}

fn run(options: &Options) -> Result<(), fpnav::NavError> {
    let mut session =
        NavigationSession::new(options, VIEWPORT, scene_volumes())?;
    let mut camera =
        Camera::from_options(&options.camera, VIEWPORT.x / VIEWPORT.y);
    camera.set_pose(&session.navigator().pose());
    let mut clock = FrameClock::new();

    for phase in script() {
        log::info!("-- {}", phase.name);
        if let Some((width, height)) = phase.resize {
            session.resize(width as f32, height as f32)?;
            camera.resize(width, height);
        }
        for event in &phase.events {
            session.handle_input(event);
        }
        for _ in 0..phase.frames {
            let dt = clock.record(FRAME);
            let report = session.tick(dt, &mut camera)?;
            if let Some(event) = &report.event {
                log::info!("{}", describe(&session, event));
            }
        }
        log::info!(
            "eye {:.2} looking at {:.2}",
            camera.eye,
            camera.target - camera.eye
        );
    }

    log::info!("walkthrough finished at {:.1} fps", clock.fps());
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
