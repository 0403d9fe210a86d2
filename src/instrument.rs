//!
//! Timing of the lexing phases.
//!

use std::time::Instant;

///
/// Run `work` once, inside a span named `name`,
/// and report how long it took.
///
/// The result of `work`, errors included, is passed through untouched.
///
pub fn report_duration<T>(name: &str, work: impl FnOnce() -> T) -> T {
    let span = tracing::info_span!("report_duration", phase = name);
    let _entered = span.enter();

    let start = Instant::now();
    let result = work();
    tracing::debug!(elapsed = ?start.elapsed(), "{name} done");

    result
}
