// ============================================================================
// COOLDOWN - Ventana mínima entre dos envíos del formulario de contacto
// ============================================================================

use std::rc::Rc;
use thiserror::Error;

/// Reloj en milisegundos desde epoch (inyectable para tests)
pub type Clock = Rc<dyn Fn() -> f64>;

/// Reloj del navegador (`Date.now()`)
pub fn browser_clock() -> Clock {
    Rc::new(js_sys::Date::now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cooldown active, {remaining_secs}s remaining")]
pub struct CooldownActive {
    pub remaining_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    duration_ms: f64,
}

impl Cooldown {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(f64::from(minutes) * 60_000.0)
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// `Ok` si se puede enviar. Sin envío previo siempre se puede.
    /// Un timestamp en el futuro cuenta como "recién enviado".
    pub fn check(&self, last_sent_ms: Option<f64>, now_ms: f64) -> Result<(), CooldownActive> {
        let Some(last) = last_sent_ms else {
            return Ok(());
        };
        let elapsed = (now_ms - last).max(0.0);
        if elapsed >= self.duration_ms {
            return Ok(());
        }
        let remaining_secs = ((self.duration_ms - elapsed) / 1000.0).ceil() as u64;
        Err(CooldownActive { remaining_secs })
    }

    pub fn remaining_secs(&self, last_sent_ms: Option<f64>, now_ms: f64) -> u64 {
        match self.check(last_sent_ms, now_ms) {
            Ok(()) => 0,
            Err(active) => active.remaining_secs,
        }
    }
}

/// Formato `m:ss`
pub fn format_remaining(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Timestamp guardado en storage. Valores corruptos se ignoran.
pub fn parse_timestamp(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|ms| ms.is_finite() && *ms >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEN_MINUTES: f64 = 600_000.0;

    #[test]
    fn first_submission_is_allowed() {
        assert_eq!(Cooldown::new(TEN_MINUTES).check(None, 1_000.0), Ok(()));
    }

    #[test]
    fn rejects_inside_the_window_with_remaining_seconds() {
        let cooldown = Cooldown::from_minutes(10);
        let last = 1_700_000_000_000.0;
        let result = cooldown.check(Some(last), last + 60_000.0);
        assert_eq!(result, Err(CooldownActive { remaining_secs: 540 }));
    }

    #[test]
    fn partial_seconds_round_up() {
        let cooldown = Cooldown::new(10_000.0);
        assert_eq!(cooldown.remaining_secs(Some(0.0), 500.0), 10);
        assert_eq!(cooldown.remaining_secs(Some(0.0), 9_001.0), 1);
    }

    #[test]
    fn allows_exactly_at_the_boundary() {
        let cooldown = Cooldown::new(TEN_MINUTES);
        assert_eq!(cooldown.check(Some(5_000.0), 5_000.0 + TEN_MINUTES), Ok(()));
    }

    #[test]
    fn future_timestamp_is_capped_to_full_window() {
        let cooldown = Cooldown::new(TEN_MINUTES);
        assert_eq!(cooldown.remaining_secs(Some(10_000_000.0), 0.0), 600);
    }

    #[test]
    fn remaining_time_formats_as_minutes_seconds() {
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(9), "0:09");
        assert_eq!(format_remaining(600), "10:00");
        assert_eq!(format_remaining(245), "4:05");
    }

    #[test]
    fn corrupt_timestamps_are_ignored() {
        assert_eq!(parse_timestamp("1700000000000"), Some(1_700_000_000_000.0));
        assert_eq!(parse_timestamp(" 42 "), Some(42.0));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("NaN"), None);
        assert_eq!(parse_timestamp("-5"), None);
    }

    proptest! {
        #[test]
        fn inside_window_is_rejected_with_correct_remaining(
            minutes in 1u32..60,
            elapsed in 0.0f64..1.0,
        ) {
            let cooldown = Cooldown::from_minutes(minutes);
            let elapsed_ms = elapsed * cooldown.duration_ms();
            let expected = (cooldown.duration_ms() - elapsed_ms) / 1000.0;
            let err = cooldown.check(Some(0.0), elapsed_ms).unwrap_err();
            prop_assert!((err.remaining_secs as f64 - expected).abs() <= 1.0);
        }

        #[test]
        fn at_or_past_window_is_allowed(minutes in 0u32..60, extra in 0.0f64..1e9) {
            let cooldown = Cooldown::from_minutes(minutes);
            prop_assert!(cooldown.check(Some(1_000.0), 1_000.0 + cooldown.duration_ms() + extra).is_ok());
        }
    }
}
