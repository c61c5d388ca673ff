//! Progress reporting for evaluation runs

use arena_application::ports::progress::ProgressNotifier;
use arena_domain::{ResultSource, Stage};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during an evaluation with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn stage_display_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Generation => "Stage 1: Generation",
            Stage::Judging => "Stage 2: Judging",
        }
    }

    fn stage_short_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Generation => "Stage 1",
            Stage::Judging => "Stage 2",
        }
    }

    fn status_line(model_label: &str, source: ResultSource) -> String {
        match source {
            ResultSource::Live => format!("{} {}", "v".green(), model_label),
            ResultSource::Fallback => format!("{} {} (fallback)", "!".yellow(), model_label),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_model_complete(&self, _stage: Stage, model_label: &str, source: ResultSource) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::status_line(model_label, source));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", Self::stage_short_name(stage).green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        eprintln!(
            "{} {} ({} models)",
            "->".cyan(),
            ProgressReporter::stage_display_name(stage).bold(),
            total_tasks
        );
    }

    fn on_model_complete(&self, _stage: Stage, model_label: &str, source: ResultSource) {
        eprintln!("  {}", ProgressReporter::status_line(model_label, source));
    }

    fn on_stage_complete(&self, _stage: Stage) {
        eprintln!();
    }
}
