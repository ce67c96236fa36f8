//! Progress reporting for directory fetches

use atlas_application::ports::progress::{Phase, ProgressNotifier};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports fetch progress with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: Phase) -> &'static str {
        match phase {
            Phase::Collection => "Fetching countries",
            Phase::Detail => "Looking up country",
            Phase::Borders => "Resolving borders",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: Phase, total_lookups: usize) {
        let phase_name = Self::phase_display_name(phase);

        let pb = self.multi.add(ProgressBar::new(total_lookups as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase_name.to_string());
        pb.set_message("Starting...");

        *self.phase_bar.lock().unwrap() = Some(pb);
    }

    fn on_lookup_complete(&self, _phase: Phase, label: &str, success: bool) {
        if let Some(pb) = self.phase_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: Phase) {
        if let Some(pb) = self.phase_bar.lock().unwrap().take() {
            let phase_name = Self::phase_display_name(phase);
            pb.finish_with_message(format!("{} done", phase_name.green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Plays better with `-v` log output, where redrawing bars and log lines
/// fight over the terminal.
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: Phase, total_lookups: usize) {
        let phase_name = ProgressReporter::phase_display_name(phase);
        println!(
            "{} {} ({} lookups)",
            "->".cyan(),
            phase_name.bold(),
            total_lookups
        );
    }

    fn on_lookup_complete(&self, _phase: Phase, label: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), label);
        } else {
            println!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_phase_complete(&self, _phase: Phase) {
        println!();
    }
}
