//! Weekly schedule report rendering.
//!
//! Formats a genome against its shift templates as a plain-text weekly
//! report: one ruled block per shift with day, slot count, kind tag, and
//! the assigned leader names. Writing the report anywhere (file, stdout)
//! is the caller's business.

use std::fmt::Write;

use crate::ga::Genome;
use crate::models::Shift;

const RULE_WIDTH: usize = 75;

/// Renders a genome as a weekly per-shift text report.
///
/// `genome.assignments` must be parallel to `shifts`.
pub fn render(shifts: &[Shift], genome: &Genome) -> String {
    let mut out = String::new();

    for (shift, assigned) in shifts.iter().zip(genome.assignments()) {
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        let _ = writeln!(
            out,
            "|{}\t| {}\t| Slots: {}\t| Type: {}",
            shift.name,
            shift.day.name(),
            shift.slots,
            shift.kind
        );
        let _ = writeln!(out, "|Assigned: {}", assigned.join(", "));
    }

    out
}
