//! Per-frame orchestration.
//!
//! The host calls [`FrameDriver::tick`] once per display refresh with the
//! request returned by the previous tick (or by [`FrameDriver::play`]). Stopping
//! revokes the outstanding request, so a tick already queued by the host does
//! nothing once playback has ended.

use std::num::NonZeroUsize;

use crate::audio::{AudioTap, BeatDetector, FeatureExtractor, SampleFrame};
use crate::draw::{Point, Surface};
use crate::interaction::{InteractionController, InteractionOutcome, PointerEvent};
use crate::renderer::{self, DrawContext};
use crate::scene::{SceneState, Style};

/// Permission to run exactly one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickRequest(u64);

/// Result of a completed tick, mostly for logging and tests
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub loudness: f32,
    pub is_beat: bool,
    pub style: Style,
    pub next: TickRequest,
}

pub struct FrameDriver {
    extractor: FeatureExtractor,
    beat: BeatDetector,
    scene: SceneState,
    interaction: InteractionController,
    frame: SampleFrame,
    tap: Option<Box<dyn AudioTap>>,
    pending: Option<TickRequest>,
    next_request_id: u64,
    gain: f32,
}

impl FrameDriver {
    pub fn new(bins: NonZeroUsize, style: Style) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            beat: BeatDetector::new(),
            scene: SceneState::new(style),
            interaction: InteractionController::new(),
            frame: SampleFrame::new(bins),
            tap: None,
            pending: None,
            next_request_id: 0,
            gain: 1.0,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn is_playing(&self) -> bool {
        self.tap.is_some()
    }

    /// The request the host should pass to the next tick, if any
    pub fn pending_tick(&self) -> Option<TickRequest> {
        self.pending
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Select a style directly, e.g. the random pick when a track loads
    pub fn set_style(&mut self, style: Style) {
        self.scene.active_style = style;
    }

    /// Start a session on `tap`, ending any current one first
    pub fn play(&mut self, mut tap: Box<dyn AudioTap>) -> TickRequest {
        self.stop();
        tap.set_gain(self.gain);
        self.tap = Some(tap);
        self.beat.reset();
        log::info!("Playback started ({})", self.scene.active_style.name());
        self.request_tick()
    }

    /// End the session. Safe to call when nothing is playing.
    pub fn stop(&mut self) {
        self.pending = None;
        match self.tap.take() {
            Some(mut tap) => {
                tap.disconnect();
                log::info!("Playback stopped");
            }
            None => log::debug!("Stop requested with no active session"),
        }
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
        if let Some(tap) = self.tap.as_mut() {
            tap.set_gain(self.gain);
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> InteractionOutcome {
        let outcome = self.interaction.handle(event, &mut self.scene);
        if let InteractionOutcome::StyleCycled(style) = outcome {
            log::info!("Style: {}", style.name());
        }
        outcome
    }

    /// Analyse, update the scene and repaint the whole surface.
    ///
    /// Returns `None` without touching anything if `request` is stale or no
    /// session is active.
    pub fn tick(
        &mut self,
        request: TickRequest,
        surface: &mut dyn Surface,
        elapsed_secs: f32,
    ) -> Option<TickReport> {
        if self.pending != Some(request) {
            return None;
        }
        self.pending = None;
        let tap = self.tap.as_mut()?;

        self.frame.refresh(&mut **tap);
        let features = self.extractor.extract(&self.frame);
        let is_beat = self.beat.update(features.loudness);
        self.scene.advance_hue(features.loudness);

        let (width, height) = surface.size();
        let ctx = DrawContext {
            features,
            is_beat,
            center: Point::new(width / 2.0, height / 2.0) + self.scene.pan_offset,
            hue: self.scene.hue_phase(),
            elapsed_secs,
        };

        surface.clear();
        renderer::for_style(self.scene.active_style).draw(&ctx, surface);

        let loudness = features.loudness;
        let next = self.request_tick();
        Some(TickReport {
            loudness,
            is_beat,
            style: self.scene.active_style,
            next,
        })
    }

    fn request_tick(&mut self) -> TickRequest {
        self.next_request_id += 1;
        let request = TickRequest(self.next_request_id);
        self.pending = Some(request);
        request
    }
}
