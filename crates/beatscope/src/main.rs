mod audio;
mod canvas;
mod error;
mod ui;
mod utils;

use audio::{decode_file, DecodedTrack, Playback, PlaybackTap, Shared};
use beatscope_core::{DrawList, FrameDriver, PointerEvent, Style, Surface, FFT_SIZE, NUM_BINS};
use nannou::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use ui::bindings::{parse_key, Action, VOLUME_STEP};
use ui::help_overlay::HelpOverlay;
use utils::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--audio-info".to_string()) {
        utils::log_audio_info();
        return;
    }

    nannou::app(model).update(update).run();
}

struct Model {
    driver: FrameDriver,
    /// Commands recorded by the last tick, replayed by `view`
    frame: DrawList,
    config: Config,
    track: Option<DecodedTrack>,
    track_path: Option<PathBuf>,
    /// Live playback state, kept to notice the end of the track
    session: Option<Arc<Shared>>,
    help_overlay: HelpOverlay,
}

fn model(app: &App) -> Model {
    let args: Vec<String> = env::args().collect();
    let config = Config::load();
    let (width, height) = config.window_size();

    app.new_window()
        .title("beatscope")
        .size(width, height)
        .resizable(false)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .mouse_exited(mouse_exited)
        .build()
        .expect("failed to open window");

    let mut driver = FrameDriver::new(NUM_BINS, Style::default());
    driver.set_gain(config.volume());

    let mut model = Model {
        driver,
        frame: DrawList::new(width as f32, height as f32),
        config,
        track: None,
        track_path: None,
        session: None,
        help_overlay: HelpOverlay::new(),
    };

    // First positional argument (if any) is the file to open
    let file = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .map(PathBuf::from);
    match file {
        Some(path) => load_track(&mut model, &path),
        None => log::info!("No file given; pass a path or press 'o' to reopen the last file"),
    }

    model
}

/// Decode `path`; on failure the previously loaded track (if any) stays playable
fn load_track(model: &mut Model, path: &Path) {
    match decode_file(path) {
        Ok(track) => {
            model.track = Some(track);
            model.track_path = Some(path.to_path_buf());
            model.config.set_last_file(path);

            if model.config.random_style_on_load() {
                let style = Style::random(&mut rand::rng());
                model.driver.set_style(style);
                log::info!("Style: {}", style.name());
            }
            log::info!("Ready: press Space to play");
        }
        Err(e) => log::error!("Cannot play {:?}: {}", path, e),
    }
}

fn start_playback(model: &mut Model) {
    let Some(track) = model.track.clone() else {
        log::debug!("Play requested before a track was loaded");
        return;
    };

    match Playback::start(track, FFT_SIZE, model.driver.gain()) {
        Ok(playback) => {
            model.session = Some(Arc::clone(playback.shared()));
            model.driver.play(Box::new(PlaybackTap::new(playback, FFT_SIZE)));
        }
        Err(e) => log::error!("Playback did not start: {}", e),
    }
}

fn stop_playback(model: &mut Model) {
    model.driver.stop();
    model.session = None;
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let finished = model.session.as_ref().is_some_and(|s| s.is_finished());
    if finished {
        log::info!("End of track");
        stop_playback(model);
    }

    if let Some(request) = model.driver.pending_tick() {
        if let Some(report) = model.driver.tick(request, &mut model.frame, app.time) {
            if report.is_beat {
                log::trace!("Beat at loudness {:.3}", report.loudness);
            }
        }
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    if model.frame.is_empty() {
        draw.background().color(BLACK);
    }
    canvas::replay(&model.frame, &draw);

    let status = match (&model.track_path, model.driver.is_playing()) {
        (Some(path), true) => format!("Playing {:?} at {:.0}%", path, model.driver.gain() * 100.0),
        (Some(path), false) => format!("Ready: {:?}", path),
        (None, _) => "No track loaded".to_string(),
    };
    model.help_overlay.draw(&draw, &status);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match parse_key(key) {
        Some(Action::Quit) => {
            stop_playback(model);
            app.quit();
        }
        Some(Action::ShowHelp) => model.help_overlay.toggle(),
        Some(Action::TogglePlayback) => {
            if model.driver.is_playing() {
                stop_playback(model);
            } else {
                start_playback(model);
            }
        }
        Some(Action::VolumeUp) => change_volume(model, VOLUME_STEP),
        Some(Action::VolumeDown) => change_volume(model, -VOLUME_STEP),
        Some(Action::ReloadLastFile) => match model.config.last_file.clone() {
            Some(path) => load_track(model, &path),
            None => log::info!("No previous file in config"),
        },
        None => {}
    }
}

fn change_volume(model: &mut Model, delta: f32) {
    model.driver.set_gain(model.driver.gain() + delta);
    model.config.set_volume(model.driver.gain());
    log::info!("Volume: {:.0}%", model.driver.gain() * 100.0);
}

fn surface_position(app: &App, model: &Model) -> beatscope_core::Point {
    canvas::from_nannou(app.mouse.position(), model.frame.size())
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = surface_position(app, model);
    model.driver.handle_pointer(PointerEvent::Down(pos));
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    let pos = canvas::from_nannou(pos, model.frame.size());
    model.driver.handle_pointer(PointerEvent::Move(pos));
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = surface_position(app, model);
    model.driver.handle_pointer(PointerEvent::Up(pos));
}

fn mouse_exited(_app: &App, model: &mut Model) {
    model.driver.handle_pointer(PointerEvent::Leave);
}
