// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for a taxonomy run
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub terms_total: usize,
    pub terms_processed: usize,
    pub terms_failed: usize,
    pub terms_blank: usize,
    pub fragments_extracted: usize,
    pub duration_secs: f64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that made it into the output, blank ones included.
    pub fn lines_written(&self) -> usize {
        self.terms_processed + self.terms_failed + self.terms_blank
    }

    pub fn terms_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.lines_written() as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let searched = self.terms_processed + self.terms_failed;
        if searched == 0 {
            return 0.0;
        }
        (self.terms_processed as f64 / searched as f64) * 100.0
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    terms_total: usize,
    terms_processed: AtomicUsize,
    terms_failed: AtomicUsize,
    terms_blank: AtomicUsize,
    fragments_extracted: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_terms: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_terms as u64)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            terms_total: total_terms,
            terms_processed: AtomicUsize::new(0),
            terms_failed: AtomicUsize::new(0),
            terms_blank: AtomicUsize::new(0),
            fragments_extracted: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_processed(&self, fragments: usize) {
        self.terms_processed.fetch_add(1, Ordering::SeqCst);
        self.fragments_extracted
            .fetch_add(fragments, Ordering::SeqCst);
        self.advance();
    }

    pub fn inc_failed(&self) {
        self.terms_failed.fetch_add(1, Ordering::SeqCst);
        self.advance();
    }

    pub fn inc_blank(&self) {
        self.terms_blank.fetch_add(1, Ordering::SeqCst);
        self.advance();
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_with_message("Search complete");
        }
    }

    pub fn abandon(&self, message: String) {
        self.bar.abandon_with_message(message);
    }

    pub fn get_stats(&self) -> RunStats {
        RunStats {
            terms_total: self.terms_total,
            terms_processed: self.terms_processed.load(Ordering::SeqCst),
            terms_failed: self.terms_failed.load(Ordering::SeqCst),
            terms_blank: self.terms_blank.load(Ordering::SeqCst),
            fragments_extracted: self.fragments_extracted.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn advance(&self) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "Fragments: {} | Failed: {}",
            self.fragments_extracted.load(Ordering::SeqCst),
            self.terms_failed.load(Ordering::SeqCst)
        ));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .map(|style| style.progress_chars("█▓▒░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_calculations() {
        let stats = RunStats {
            terms_total: 110,
            terms_processed: 90,
            terms_failed: 10,
            terms_blank: 10,
            fragments_extracted: 900,
            duration_secs: 10.0,
        };

        assert_eq!(stats.lines_written(), 110);
        assert_eq!(stats.terms_per_second(), 11.0);
        assert_eq!(stats.success_rate(), 90.0);
    }

    #[test]
    fn test_run_stats_zero_duration() {
        let stats = RunStats::new();
        assert_eq!(stats.terms_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::new(4, false);

        tracker.inc_processed(3);
        tracker.inc_processed(2);
        tracker.inc_failed();
        tracker.inc_blank();

        let stats = tracker.get_stats();
        assert_eq!(stats.terms_total, 4);
        assert_eq!(stats.terms_processed, 2);
        assert_eq!(stats.terms_failed, 1);
        assert_eq!(stats.terms_blank, 1);
        assert_eq!(stats.fragments_extracted, 5);
        assert_eq!(stats.lines_written(), 4);
    }
}
