use crate::controllers::interactive::data::telemetry::Telemetry;
use crate::controllers::interactive::ports::telemetry_sink::TelemetrySink;

/// Keeps the most recent telemetry for an overlay to read.
#[derive(Debug, Default, Clone, Copy)]
pub struct LatestTelemetry {
    latest: Option<Telemetry>,
}

impl LatestTelemetry {
    #[must_use]
    pub fn latest(&self) -> Option<Telemetry> {
        self.latest
    }
}

impl TelemetrySink for LatestTelemetry {
    fn publish(&mut self, telemetry: Telemetry) {
        self.latest = Some(telemetry);
    }
}
