use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::controllers::interactive::animation::driver::{AnimationDriver, TickOutcome};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::status::Status;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::control::ControlEvent;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::ScenePresenterPort;
use crate::controllers::interactive::rebuild::scheduler::{RebuildAction, RebuildScheduler};
use crate::core::actions::build_scene::build_scene::build_scene;
use crate::core::params::param_change::ParamEffect;
use crate::core::params::render_params::RenderParams;

/// Owns the canonical params and decides when scenes get built.
///
/// Everything runs on the caller's thread. Time is passed in explicitly, so
/// the caller (normally `run_event_loop`) must call [`poll`](Self::poll)
/// once a deadline from [`next_deadline`](Self::next_deadline) has passed.
pub struct InteractiveController {
    params: RenderParams,
    scheduler: RebuildScheduler,
    animation: AnimationDriver,
    presenter_port: Arc<dyn ScenePresenterPort>,
    generation: u64,
    status: Option<Status>,
}

impl InteractiveController {
    pub fn new(params: RenderParams, presenter_port: Arc<dyn ScenePresenterPort>) -> Self {
        Self::with_scheduler(params, RebuildScheduler::new(), presenter_port)
    }

    pub fn with_scheduler(
        params: RenderParams,
        scheduler: RebuildScheduler,
        presenter_port: Arc<dyn ScenePresenterPort>,
    ) -> Self {
        Self {
            params,
            scheduler,
            animation: AnimationDriver::new(),
            presenter_port,
            generation: 0,
            status: None,
        }
    }

    #[must_use]
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub fn rebuild_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Generation of the most recent build, successful or not.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Earliest time [`poll`](Self::poll) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scheduler.next_deadline(), self.animation.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Builds and publishes the scene at `params.depth` right away.
    pub fn render_now(&mut self) {
        self.publish_build(self.params.depth, None);
    }

    pub fn handle(&mut self, event: ControlEvent, now: Instant) -> Result<ControlFlow<()>, ControllerError> {
        match event {
            ControlEvent::Change(change) => {
                let effect = self.params.apply(change).inspect_err(|err| {
                    warn!(%err, "param change rejected");
                })?;

                match effect {
                    ParamEffect::Rebuild => self.request_rebuild(now),
                    ParamEffect::Retime => {
                        let interval = self.tick_interval();
                        self.animation.set_interval(now, interval);
                    }
                    ParamEffect::Silent => {}
                }
            }
            ControlEvent::TogglePlay if self.animation.is_running() => self.stop_animation(),
            ControlEvent::TogglePlay | ControlEvent::Play => {
                if !self.animation.is_running() {
                    self.start_animation(now);
                }
            }
            ControlEvent::Pause => {
                if self.animation.is_running() {
                    self.stop_animation();
                }
            }
            ControlEvent::ResetParams => {
                self.params = RenderParams::default();
                let interval = self.tick_interval();
                self.animation.set_interval(now, interval);
                self.request_rebuild(now);
            }
            ControlEvent::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Fires whichever timers are due at `now`.
    pub fn poll(&mut self, now: Instant) {
        if self.scheduler.poll(now) {
            debug!(depth = self.params.depth, "debounced rebuild fired");
            self.publish_build(self.params.depth, None);
        }

        let Some(outcome) = self
            .animation
            .tick(now, self.params.depth, self.params.loop_animation)
        else {
            return;
        };

        match outcome {
            TickOutcome::Frame { level, fps, finished } => {
                debug!(level, fps, "animation tick");
                self.publish_build(level, Some(fps));

                if finished {
                    info!("animation finished");
                    self.publish_cleared_status();
                }
            }
            TickOutcome::Stopped => {
                info!(depth = self.params.depth, "animation stopped at lowered depth");
                self.publish_cleared_status();
            }
        }
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.params.speed_ms))
    }

    fn request_rebuild(&mut self, now: Instant) {
        match self.scheduler.request(now, self.animation.is_running()) {
            RebuildAction::Armed { deadline } => {
                debug!(delay_ms = deadline.duration_since(now).as_millis() as u64, "rebuild armed");
            }
            RebuildAction::Suppressed => debug!("rebuild suppressed while animating"),
        }
    }

    fn start_animation(&mut self, now: Instant) {
        self.scheduler.cancel();
        let interval = self.tick_interval();
        self.animation.start(now, interval);

        info!(
            depth = self.params.depth,
            speed_ms = self.params.speed_ms,
            looping = self.params.loop_animation,
            "animation started"
        );
    }

    fn stop_animation(&mut self) {
        self.animation.stop();
        info!("animation stopped");

        self.publish_cleared_status();
    }

    fn publish_cleared_status(&mut self) {
        let status = self.status.map_or_else(
            || Status {
                depth: self.params.depth,
                item_count: self.params.item_count(),
                fps: None,
            },
            Status::without_fps,
        );

        self.status = Some(status);
        self.presenter_port.present(RenderEvent::Status(status));
    }

    fn publish_build(&mut self, level: u32, fps: Option<f64>) {
        self.generation += 1;
        let generation = self.generation;

        let start = Instant::now();
        match build_scene(&self.params, level) {
            Ok(scene) => {
                let status = Status {
                    depth: level,
                    item_count: scene.item_count,
                    fps,
                };
                self.status = Some(status);

                self.presenter_port.present(RenderEvent::Frame(FrameData {
                    generation,
                    scene,
                    status,
                    build_duration: start.elapsed(),
                }));
            }
            Err(err) => {
                warn!(generation, %err, "scene build failed");

                self.presenter_port.present(RenderEvent::Error(RenderError {
                    generation,
                    message: err.to_string(),
                }));
            }
        }
    }
}
