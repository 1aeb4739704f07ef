use std::fmt::Write;

use super::verify::RtpCheck;

/// Comma separated multipliers, truncated after `max` entries.
pub fn format_multiplier_list(multipliers: &[f64], max: usize) -> String {
    let shown = multipliers.len().min(max);
    let mut out = String::with_capacity(shown.saturating_mul(8));
    for (idx, multiplier) in multipliers[..shown].iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", multiplier);
    }
    let hidden = multipliers.len() - shown;
    if hidden > 0 {
        let _ = write!(out, ",..(+{})", hidden);
    }
    out
}

/// One line summary of an RTP check, e.g. `dice target=95.00% actual=95.00% ok`.
pub fn format_rtp_check(check: &RtpCheck) -> String {
    let mut out = String::with_capacity(48);
    let _ = write!(
        out,
        "{} target={:.2}% actual={:.2}% {}",
        check.game,
        check.target * 100.0,
        check.actual * 100.0,
        if check.within_tolerance { "ok" } else { "FAIL" }
    );
    out
}
