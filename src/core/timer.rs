//! Named stopwatches owned by a single logger

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const AUTO_LABEL_PREFIX: &str = "timer_";

#[derive(Debug, Default)]
pub struct TimerRegistry {
    started: HashMap<String, Instant>,
    /// Auto-generated labels still running, oldest first
    sequence: Vec<String>,
    next_id: usize,
}

impl TimerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer now. Returns the label it was stored under.
    pub fn start(&mut self, label: Option<&str>) -> String {
        self.start_at(label, Instant::now())
    }

    pub fn start_at(&mut self, label: Option<&str>, at: Instant) -> String {
        let label = match label {
            Some(label) => label.to_string(),
            None => {
                let mut label = format!("{}{}", AUTO_LABEL_PREFIX, self.next_id);
                self.next_id += 1;
                // explicit timers may already hold an auto-style name
                while self.started.contains_key(&label) {
                    label = format!("{}{}", AUTO_LABEL_PREFIX, self.next_id);
                    self.next_id += 1;
                }
                self.sequence.push(label.clone());
                label
            }
        };

        self.started.insert(label.clone(), at);
        label
    }

    /// Stop a timer. Without a label the latest auto-labelled timer is used.
    /// Unknown labels yield `None` and leave the registry untouched.
    pub fn end(&mut self, label: Option<&str>) -> Option<(String, Duration)> {
        self.end_at(label, Instant::now())
    }

    pub fn end_at(&mut self, label: Option<&str>, at: Instant) -> Option<(String, Duration)> {
        let label = match label {
            Some(label) => label.to_string(),
            None => self.sequence.last()?.clone(),
        };

        let started = self.started.remove(&label)?;
        self.sequence.retain(|pending| pending != &label);
        Some((label, at.saturating_duration_since(started)))
    }

    pub fn is_running(&self, label: &str) -> bool {
        self.started.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

/// Human-readable elapsed time: `250ms` below a second, `1.50s` above
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_labels_are_sequential() {
        let mut timers = TimerRegistry::new();
        assert_eq!(timers.start(None), "timer_0");
        assert_eq!(timers.start(None), "timer_1");
        assert_eq!(timers.start(Some("named")), "named");
        assert_eq!(timers.start(None), "timer_2");
        assert_eq!(timers.len(), 4);
    }

    #[test]
    fn test_end_unknown_is_none() {
        let mut timers = TimerRegistry::new();
        assert!(timers.end(Some("custom")).is_none());
        assert!(timers.end(None).is_none());
    }

    #[test]
    fn test_end_measures_and_removes() {
        let mut timers = TimerRegistry::new();
        let start = Instant::now();
        timers.start_at(Some("load"), start);

        let (label, elapsed) = timers
            .end_at(Some("load"), start + Duration::from_millis(250))
            .expect("timer was running");
        assert_eq!(label, "load");
        assert_eq!(elapsed, Duration::from_millis(250));
        assert!(!timers.is_running("load"));
        assert!(timers.end(Some("load")).is_none());
    }

    #[test]
    fn test_end_without_label_takes_latest_auto_timer() {
        let mut timers = TimerRegistry::new();
        timers.start(None);
        timers.start(None);
        timers.start(Some("named"));

        assert_eq!(timers.end(None).map(|(l, _)| l).as_deref(), Some("timer_1"));
        assert_eq!(timers.end(None).map(|(l, _)| l).as_deref(), Some("timer_0"));
        assert!(timers.end(None).is_none());
        assert!(timers.is_running("named"));
    }

    #[test]
    fn test_explicit_end_of_auto_timer_drops_it_from_sequence() {
        let mut timers = TimerRegistry::new();
        timers.start(None);
        timers.start(None);

        assert!(timers.end(Some("timer_1")).is_some());
        assert_eq!(timers.end(None).map(|(l, _)| l).as_deref(), Some("timer_0"));
        assert!(timers.is_empty());
    }

    #[test]
    fn test_auto_label_skips_running_explicit_name() {
        let mut timers = TimerRegistry::new();
        let start = Instant::now();
        timers.start_at(Some("timer_0"), start);

        assert_eq!(timers.start(None), "timer_1");
        assert_eq!(timers.len(), 2);

        let (label, elapsed) = timers
            .end_at(Some("timer_0"), start + Duration::from_millis(40))
            .expect("explicit timer kept");
        assert_eq!(label, "timer_0");
        assert_eq!(elapsed, Duration::from_millis(40));
        assert_eq!(timers.end(None).map(|(l, _)| l).as_deref(), Some("timer_1"));
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(0)), "0ms");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "999ms");
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.50s");
    }
}
