use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::telemetry::Telemetry;
use crate::controllers::interactive::errors::frame_driver::FrameDriverError;
use crate::controllers::interactive::ports::display_surface::{DisplaySurface, Presentation};
use crate::controllers::interactive::ports::telemetry_sink::TelemetrySink;
use crate::core::actions::render_frame::backend::ComputeBackend;
use crate::core::data::frame_stats::FrameStats;
use crate::core::data::viewport::Viewport;
use crate::core::view::controller::ViewportController;
use crate::core::view::input_event::InputEvent;
use crate::core::view::pan_hold::PanHoldState;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Presented {
        frame_number: u64,
        render_duration: Duration,
    },
    /// Rendered, but the surface refused the frame. Stats are untouched.
    Dropped { frame_number: u64 },
    SkippedEmptySurface,
}

/// Single-stepped render loop.
///
/// Input is applied between ticks only, so a frame always renders one
/// consistent viewport snapshot.
pub struct FrameDriver<B, D, T> {
    backend: B,
    display: D,
    telemetry: T,
    controller: ViewportController,
    pan_hold: PanHoldState,
    stats: FrameStats,
    frame_number: u64,
}

impl<B, D, T> FrameDriver<B, D, T>
where
    B: ComputeBackend,
    D: DisplaySurface,
    T: TelemetrySink,
{
    /// `start_time` is the clock reading, in seconds, that opens the first
    /// fps window.
    pub fn new(
        backend: B,
        display: D,
        telemetry: T,
        controller: ViewportController,
        start_time: f64,
    ) -> Self {
        let surface = display.surface_size();
        log::info!(
            "frame driver using {} backend, surface {}x{}",
            backend.name(),
            surface.width,
            surface.height
        );

        Self {
            backend,
            display,
            telemetry,
            controller,
            pan_hold: PanHoldState::default(),
            stats: FrameStats::new(start_time),
            frame_number: 0,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        log::trace!("input event {:?}", event);

        match event {
            InputEvent::PanHold(state) => self.pan_hold = state,
            other => self
                .controller
                .apply(other, self.display.surface_size()),
        }
    }

    /// Runs one frame: held pan, render, present, stats.
    pub fn tick(&mut self, now: f64) -> Result<TickOutcome, FrameDriverError<D::Error>> {
        self.controller.pan_hold_step(self.pan_hold);

        let surface = self.display.surface_size();
        if surface.is_empty() {
            log::trace!("surface is empty, skipping frame");
            return Ok(TickOutcome::SkippedEmptySurface);
        }

        let start = Instant::now();
        let pixel_buffer = self.backend.render(surface, self.controller.viewport())?;
        let render_duration = start.elapsed();

        self.frame_number += 1;
        let frame_number = self.frame_number;

        log::trace!(
            "frame {} rendered {}x{} in {:?}",
            frame_number,
            surface.width,
            surface.height,
            render_duration
        );

        let presentation = self
            .display
            .present(FrameData {
                frame_number,
                pixel_buffer,
                render_duration,
            })
            .map_err(FrameDriverError::Display)?;

        if presentation == Presentation::Dropped {
            log::debug!("frame {} dropped by display surface", frame_number);
            return Ok(TickOutcome::Dropped { frame_number });
        }

        let fps_refreshed = self.stats.record_frame(now);
        self.telemetry.publish(Telemetry::from_viewport(
            self.controller.viewport(),
            frame_number,
            self.stats.fps(),
            fps_refreshed,
        ));

        Ok(TickOutcome::Presented {
            frame_number,
            render_duration,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    #[must_use]
    pub fn pan_hold(&self) -> PanHoldState {
        self.pan_hold
    }

    #[must_use]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    #[must_use]
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn into_parts(self) -> (B, D, T) {
        (self.backend, self.display, self.telemetry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::backend::SequentialBackend;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::screen_point::ScreenPoint;
    use crate::core::data::surface_size::SurfaceSize;
    use crate::core::view::settings::ViewSettings;
    use crate::core::view::zoom_factor::ZoomFactor;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug)]
    struct SurfaceGone;

    impl fmt::Display for SurfaceGone {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "surface gone")
        }
    }

    impl Error for SurfaceGone {}

    struct InMemorySurface {
        size: SurfaceSize,
        frames: Vec<FrameData>,
        fail: bool,
        drop_frames: bool,
    }

    impl InMemorySurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: SurfaceSize::new(width, height),
                frames: Vec::new(),
                fail: false,
                drop_frames: false,
            }
        }
    }

    impl DisplaySurface for InMemorySurface {
        type Error = SurfaceGone;

        fn surface_size(&self) -> SurfaceSize {
            self.size
        }

        fn present(&mut self, frame: FrameData) -> Result<Presentation, Self::Error> {
            if self.fail {
                return Err(SurfaceGone);
            }
            if self.drop_frames {
                return Ok(Presentation::Dropped);
            }
            self.frames.push(frame);
            Ok(Presentation::Shown)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        published: Vec<Telemetry>,
    }

    impl TelemetrySink for RecordingSink {
        fn publish(&mut self, telemetry: Telemetry) {
            self.published.push(telemetry);
        }
    }

    fn driver(
        width: u32,
        height: u32,
    ) -> FrameDriver<SequentialBackend, InMemorySurface, RecordingSink> {
        FrameDriver::new(
            SequentialBackend,
            InMemorySurface::new(width, height),
            RecordingSink::default(),
            ViewportController::new(ViewSettings::default()),
            0.0,
        )
    }

    #[test_log::test]
    fn tick_presents_full_frame_and_publishes_telemetry() {
        let mut driver = driver(8, 6);

        let outcome = driver.tick(0.016).unwrap();

        assert!(matches!(
            outcome,
            TickOutcome::Presented { frame_number: 1, .. }
        ));
        let frame = &driver.display().frames[0];
        assert_eq!(frame.frame_number, 1);
        assert_eq!(frame.pixel_buffer.surface(), SurfaceSize::new(8, 6));

        let telemetry = driver.telemetry().published[0];
        assert_eq!(telemetry.scale, 1.0);
        assert_eq!(telemetry.center, Complex::new(-0.5, 0.0));
        assert_eq!(telemetry.max_iterations, 2000);
        assert_eq!(telemetry.fps, 0);
    }

    #[test]
    fn default_view_centre_pixel_is_black() {
        // odd size puts a pixel centre exactly on the surface centre
        let mut driver = driver(9, 7);

        driver.tick(0.0).unwrap();

        let frame = &driver.display().frames[0];
        assert_eq!(
            frame.pixel_buffer.pixel(Point { x: 4, y: 3 }).unwrap(),
            Colour::BLACK
        );
    }

    #[test_log::test]
    fn empty_surface_skips_frame_without_touching_stats() {
        let mut driver = driver(0, 600);

        let outcome = driver.tick(5.0).unwrap();

        assert_eq!(outcome, TickOutcome::SkippedEmptySurface);
        assert!(driver.display().frames.is_empty());
        assert!(driver.telemetry().published.is_empty());
        assert_eq!(driver.stats().frame_count(), 0);
        assert_eq!(driver.stats().last_timestamp(), 0.0);
    }

    #[test_log::test]
    fn empty_surface_still_applies_held_pan() {
        let mut driver = driver(0, 600);
        let right = PanHoldState {
            right: true,
            ..PanHoldState::default()
        };

        driver.handle_event(InputEvent::PanHold(right));
        let outcome = driver.tick(1.5).unwrap();

        assert_eq!(outcome, TickOutcome::SkippedEmptySurface);
        let expected = -0.5 + ViewSettings::default().base_pan_speed / 1.0;
        assert!((driver.viewport().center().real - expected).abs() < 1e-15);
        assert_eq!(driver.viewport().center().imag, 0.0);
        assert_eq!(driver.stats().frame_count(), 0);
        assert!(driver.display().frames.is_empty());
        assert!(driver.telemetry().published.is_empty());
    }

    #[test_log::test]
    fn dropped_frame_is_not_counted_or_published() {
        let mut driver = driver(4, 4);
        driver.display_mut().drop_frames = true;

        let outcome = driver.tick(0.5).unwrap();

        assert_eq!(outcome, TickOutcome::Dropped { frame_number: 1 });
        assert_eq!(driver.stats().frame_count(), 0);
        assert!(driver.telemetry().published.is_empty());

        driver.display_mut().drop_frames = false;
        driver.tick(0.6).unwrap();

        assert_eq!(driver.stats().frame_count(), 1);
        assert_eq!(driver.telemetry().published[0].frame_number, 2);
    }

    #[test]
    fn fps_is_reported_after_one_second_window() {
        let mut driver = driver(4, 4);

        for i in 0..10 {
            driver.tick(f64::from(i) * 0.1).unwrap();
        }
        driver.tick(1.0).unwrap();

        let last = driver.telemetry().published.last().copied().unwrap();
        assert_eq!(last.fps, 11);
        assert!(last.fps_refreshed);
        assert_eq!(last.frame_number, 11);
        assert_eq!(driver.stats().frame_count(), 0);
    }

    #[test]
    fn events_between_ticks_change_next_frame() {
        let mut driver = driver(16, 16);

        driver.handle_event(InputEvent::ZoomAtCenter {
            factor: ZoomFactor::IN,
        });
        driver.tick(0.0).unwrap();

        let telemetry = driver.telemetry().published[0];
        assert_eq!(telemetry.scale, 1.1);
        assert_eq!(telemetry.max_iterations, 518);
    }

    #[test]
    fn zoom_at_point_uses_display_surface_size() {
        let mut driver = driver(200, 100);
        let point = ScreenPoint::new(150.0, 25.0);

        driver.handle_event(InputEvent::ZoomAtPoint {
            point,
            factor: ZoomFactor::new(2.0).unwrap(),
        });

        // uv = (1.0, 0.5); anchor = (0.5, 0.5); center = anchor - uv / 2
        assert_eq!(driver.viewport().center(), Complex::new(0.0, 0.25));
    }

    #[test]
    fn held_pan_applies_once_per_tick_until_released() {
        let mut driver = driver(4, 4);
        let right = PanHoldState {
            right: true,
            ..PanHoldState::default()
        };

        driver.handle_event(InputEvent::PanHold(right));
        driver.tick(0.0).unwrap();
        driver.tick(0.1).unwrap();
        driver.handle_event(InputEvent::PanHold(PanHoldState::default()));
        driver.tick(0.2).unwrap();

        let center = driver.viewport().center();
        assert!((center.real - (-0.5 + 2.0 * 0.02)).abs() < 1e-15);
        assert_eq!(driver.pan_hold(), PanHoldState::default());
    }

    #[test]
    fn reset_event_restores_default_viewport() {
        let mut driver = driver(10, 10);

        driver.handle_event(InputEvent::PanDelta { dx: 3.0, dy: -2.0 });
        driver.handle_event(InputEvent::ZoomAtCenter {
            factor: ZoomFactor::OUT,
        });
        driver.handle_event(InputEvent::Reset);

        assert_eq!(*driver.viewport(), Viewport::default());
    }

    #[test]
    fn present_failure_is_reported_as_display_error() {
        let mut driver = driver(4, 4);
        driver.display_mut().fail = true;

        let result = driver.tick(0.0);

        assert!(matches!(result, Err(FrameDriverError::Display(SurfaceGone))));
        assert!(driver.telemetry().published.is_empty());
    }
}
