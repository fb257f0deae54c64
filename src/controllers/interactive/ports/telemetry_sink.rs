use crate::controllers::interactive::data::telemetry::Telemetry;

/// Write-only receiver for per-frame readouts.
pub trait TelemetrySink {
    fn publish(&mut self, telemetry: Telemetry);
}

/// Fans telemetry out to two sinks.
impl<A: TelemetrySink, B: TelemetrySink> TelemetrySink for (A, B) {
    fn publish(&mut self, telemetry: Telemetry) {
        self.0.publish(telemetry);
        self.1.publish(telemetry);
    }
}
