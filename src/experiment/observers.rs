//! Observer pattern for experiment pipelines
//!
//! Observers allow composable progress reporting during a run without
//! coupling the driver loop to a specific frontend.

use indicatif::{ProgressBar, ProgressStyle};

use crate::Result;

/// Hooks invoked by the pipeline as a run progresses.
///
/// All hooks default to no-ops, so observers implement only what they need.
pub trait Observer {
    /// Called once before the first experiment.
    fn on_run_start(&mut self, _total_experiments: usize) -> Result<()> {
        Ok(())
    }

    /// Called before each experiment starts.
    fn on_experiment_start(&mut self, _experiment: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each experiment completes.
    fn on_experiment_end(&mut self, _experiment: usize) -> Result<()> {
        Ok(())
    }

    /// Called once after the last experiment.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Progress bar observer - shows run progress on the terminal
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self { progress_bar: None }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_experiments: usize) -> Result<()> {
        let pb = ProgressBar::new(total_experiments as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} experiments")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_experiment_end(&mut self, _experiment: usize) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts hook invocations, standing in for a real frontend.
    struct CountingObserver {
        starts: usize,
        ends: usize,
        run_started: bool,
        run_ended: bool,
    }

    impl Observer for CountingObserver {
        fn on_run_start(&mut self, _total_experiments: usize) -> Result<()> {
            self.run_started = true;
            Ok(())
        }

        fn on_experiment_start(&mut self, _experiment: usize) -> Result<()> {
            self.starts += 1;
            Ok(())
        }

        fn on_experiment_end(&mut self, _experiment: usize) -> Result<()> {
            self.ends += 1;
            Ok(())
        }

        fn on_run_end(&mut self) -> Result<()> {
            self.run_ended = true;
            Ok(())
        }
    }

    #[test]
    fn default_hooks_are_no_ops() {
        struct Silent;
        impl Observer for Silent {}

        let mut observer = Silent;
        assert!(observer.on_run_start(10).is_ok());
        assert!(observer.on_experiment_start(0).is_ok());
        assert!(observer.on_experiment_end(0).is_ok());
        assert!(observer.on_run_end().is_ok());
    }

    #[test]
    fn counting_observer_sees_every_hook() {
        let mut observer = CountingObserver {
            starts: 0,
            ends: 0,
            run_started: false,
            run_ended: false,
        };

        observer.on_run_start(2).unwrap();
        for experiment in 0..2 {
            observer.on_experiment_start(experiment).unwrap();
            observer.on_experiment_end(experiment).unwrap();
        }
        observer.on_run_end().unwrap();

        assert!(observer.run_started && observer.run_ended);
        assert_eq!(observer.starts, 2);
        assert_eq!(observer.ends, 2);
    }
}
