use crate::controllers::interactive::data::telemetry::Telemetry;
use crate::controllers::interactive::ports::telemetry_sink::TelemetrySink;

/// Sends telemetry to the `log` facade: every frame at `debug`, and one
/// `info` line per closed fps window.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetrySink {
    windows_reported: u64,
}

impl LogTelemetrySink {
    #[must_use]
    pub fn windows_reported(&self) -> u64 {
        self.windows_reported
    }
}

impl TelemetrySink for LogTelemetrySink {
    fn publish(&mut self, telemetry: Telemetry) {
        log::debug!(
            "frame {}: center=({}, {}) scale={:e} iterations={}",
            telemetry.frame_number,
            telemetry.center.real,
            telemetry.center.imag,
            telemetry.scale,
            telemetry.max_iterations
        );

        if telemetry.fps_refreshed {
            self.windows_reported += 1;
            log::info!(
                "{} fps at scale {:e} ({} iterations)",
                telemetry.fps,
                telemetry.scale,
                telemetry.max_iterations
            );
        }
    }
}
