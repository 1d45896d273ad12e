//! Desktop simulator for the watchface setup screen.
//!
//! Renders the setup tiles in an SDL2 window via `embedded-graphics-simulator`.
//! The watchface subsystem is a logging stand-in and the config is persisted
//! to a file, so the whole setup flow can be exercised without hardware.
//!
//! # Key bindings
//!
//! | Key | Action                       |
//! |-----|------------------------------|
//! | 1   | Setup menu                   |
//! | 2   | Watchface setup              |
//! | Q   | Quit                         |
//!
//! Mouse clicks are forwarded as touch presses, mouse drags as drags.
//!
//! The config file lives in `$WATCHFACE_SIM_DIR`, or in the system temp
//! directory when that is unset.

use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use watchface_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, PageId, TouchEvent, TouchPoint};
use watchface_core::{ConfigStorage, InfoSink, SetupApp, WatchfaceControl};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Environment variable selecting the config directory.
const SIM_DIR_ENV: &str = "WATCHFACE_SIM_DIR";

// ---------------------------------------------------------------------------
// Config storage
// ---------------------------------------------------------------------------

/// Stores each config blob as a file named after its key.
struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    fn from_env() -> io::Result<Self> {
        let dir = std::env::var_os(SIM_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("watchface-simulator"));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl ConfigStorage for FileStorage {
    type Error = io::Error;

    fn read(&mut self, key: &str, buf: &mut [u8]) -> Result<Option<usize>, Self::Error> {
        let mut file = match fs::File::open(self.dir.join(key)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut len = 0;
        while len < buf.len() {
            match file.read(&mut buf[len..])? {
                0 => break,
                n => len += n,
            }
        }
        Ok(Some(len))
    }

    fn write(&mut self, key: &str, data: &[u8]) -> Result<(), Self::Error> {
        fs::write(self.dir.join(key), data)
    }
}

// ---------------------------------------------------------------------------
// Watchface stand-in
// ---------------------------------------------------------------------------

/// Logs every request and fakes a theme install with progress steps.
///
/// The window is only refreshed once per frame, so intermediate progress is
/// visible in the debug log rather than on screen.
#[derive(Default)]
struct SimulatedWatchface {
    antialias: bool,
    show_after_wakeup: bool,
}

impl WatchfaceControl for SimulatedWatchface {
    fn default_theme(&mut self, info: &mut dyn InfoSink) {
        info!("Watchface: default theme");
        info.set_info_label("default theme restored");
    }

    fn decompress_theme(&mut self, info: &mut dyn InfoSink) {
        info!("Watchface: decompress theme");
        info.set_info_label("decompress theme ...");
        for percent in (0..=100).step_by(20) {
            info.report_progress(percent);
        }
        info.set_info_label("theme installed");
    }

    fn reload_and_test(&mut self, info: &mut dyn InfoSink) {
        info!(
            "Watchface: reload (antialias {}, after wakeup {})",
            self.antialias, self.show_after_wakeup
        );
        info.set_info_label("watchface reloaded");
    }

    fn set_antialias(&mut self, enabled: bool) {
        info!("Watchface: antialias {}", enabled);
        self.antialias = enabled;
    }

    fn enable_tile_after_wakeup(&mut self, enabled: bool) {
        info!("Watchface: show after wakeup {}", enabled);
        self.show_after_wakeup = enabled;
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn keycode_to_page(keycode: Keycode) -> Option<PageId> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(PageId::SetupMenu),
        Keycode::Num2 | Keycode::Kp2 => Some(PageId::WatchfaceSetup),
        _ => None,
    }
}

fn touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting watchface setup simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1=Setup menu  2=Watchface setup  Q=Quit");

    let storage = match FileStorage::from_env() {
        Ok(storage) => storage,
        Err(e) => {
            error!("Cannot prepare config directory: {}", e);
            return;
        }
    };
    info!("Config directory: {}", storage.dir.display());

    let size = Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32);
    let mut display = SimulatorDisplay::<Rgb565>::new(size);
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Watchface Setup Simulator", &output_settings);

    let mut app = SetupApp::new(
        storage,
        SimulatedWatchface::default(),
        Rectangle::new(Point::zero(), size),
    );
    let built = app
        .add_tile()
        .and_then(|tile| app.watchface_setup_tile_setup(tile));
    if let Err(e) = built {
        error!("Watchface setup unavailable: {}", e);
    }

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    let _ = app.draw(&mut display);
    window.update(&display);

    let mut mouse_down = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }

                    if let Some(target) = keycode_to_page(keycode) {
                        info!("Navigating to {:?}", target);
                        if !app.navigate_to(target) {
                            warn!("Page {:?} is not available", target);
                        }
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    if let Some(action) =
                        app.handle_touch(TouchEvent::Press(touch_point(point)), &mut display)
                    {
                        info!("Touch → {:?}", action);
                    }
                }

                SimulatorEvent::MouseButtonUp { .. } => mouse_down = false,

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    app.handle_touch(TouchEvent::Drag(touch_point(point)), &mut display);
                }

                _ => {}
            }
        }

        app.update();

        if let Err(e) = app.draw_dirty(&mut display) {
            error!("Draw error: {:?}", e);
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
