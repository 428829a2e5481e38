//! Progress reporting module

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the files of one language
#[derive(Debug)]
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start a bar for `total_files` files of `language`
    pub fn init_files(&mut self, total_files: u64, language: &str) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::with_template(
            "[{elapsed_precise}] {prefix} {bar:40.cyan/blue} {pos}/{len} files {msg}",
        )
        .map(|style| style.progress_chars("##-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        pb.set_prefix(language.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {}", filename));
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
