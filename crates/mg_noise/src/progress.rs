use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe progress tracker for parallel map generation.
/// Counts finished rows with a lock-free atomic counter.
#[derive(Debug, Default)]
pub struct GenerationProgress {
    rows_done: AtomicUsize,
    total_rows: AtomicUsize,
}

impl GenerationProgress {
    /// Create a tracker expecting `total_rows` rows.
    pub fn new(total_rows: usize) -> Self {
        Self {
            rows_done: AtomicUsize::new(0),
            total_rows: AtomicUsize::new(total_rows),
        }
    }

    /// Record finished rows.
    /// Safe to call from multiple threads concurrently.
    pub fn increment(&self, rows: usize) {
        self.rows_done.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn rows_done(&self) -> usize {
        self.rows_done.load(Ordering::Relaxed)
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows.load(Ordering::Relaxed)
    }

    /// Progress fraction (0.0 to 1.0).
    pub fn fraction(&self) -> f32 {
        let total = self.total_rows();
        if total == 0 {
            return 0.0;
        }
        (self.rows_done() as f32 / total as f32).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.total_rows() > 0 && self.rows_done() >= self.total_rows()
    }

    /// Zero the counter and expect `total_rows` rows.
    pub fn reset(&self, total_rows: usize) {
        self.rows_done.store(0, Ordering::Relaxed);
        self.total_rows.store(total_rows, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn progress_tracking() {
        let progress = GenerationProgress::new(100);

        progress.increment(50);
        assert_eq!(progress.rows_done(), 50);
        assert!((progress.fraction() - 0.5).abs() < 0.001);
        assert!(!progress.is_complete());

        progress.increment(50);
        assert!((progress.fraction() - 1.0).abs() < 0.001);
        assert!(progress.is_complete());
    }

    #[test]
    fn empty_job_reports_zero() {
        let progress = GenerationProgress::new(0);
        assert_eq!(progress.fraction(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn reset_clears_counter() {
        let progress = GenerationProgress::new(10);
        progress.increment(7);
        progress.reset(20);
        assert_eq!(progress.rows_done(), 0);
        assert_eq!(progress.total_rows(), 20);
    }

    #[test]
    fn concurrent_increments_are_counted() {
        let progress = Arc::new(GenerationProgress::new(800));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let progress = Arc::clone(&progress);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        progress.increment(1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(progress.rows_done(), 800);
        assert!(progress.is_complete());
    }
}
