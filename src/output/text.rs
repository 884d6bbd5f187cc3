use std::io::Write as IoWrite;

use crate::error::Result;
use crate::validator::{ValidationIssue, ValidationResult, ValidationStatus, ValidationSummary};

use super::{OutputFormatter, SeverityFilter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
    severity: SeverityFilter,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose: 0,
            quiet: false,
            severity: SeverityFilter::All,
        }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn with_severity(mut self, severity: SeverityFilter) -> Self {
        self.severity = severity;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: ValidationStatus) -> &'static str {
        match status {
            ValidationStatus::Pass => "✓",
            ValidationStatus::Warn => "⚠",
            ValidationStatus::Fail => "✗",
        }
    }

    fn colorize(&self, text: &str, status: ValidationStatus) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = match status {
            ValidationStatus::Pass => ansi::GREEN,
            ValidationStatus::Warn => ansi::YELLOW,
            ValidationStatus::Fail => ansi::RED,
        };
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &ValidationResult, output: &mut Vec<u8>) {
        let icon = Self::status_icon(result.status);
        let status = self.colorize(
            &result.status.as_str().to_uppercase(),
            result.status,
        );

        writeln!(
            output,
            "{icon} {status}: {} (score {}, {} errors, {} warnings, {} info)",
            result.path.display(),
            result.quality_score,
            result.error_count,
            result.warning_count,
            result.info_count,
        )
        .ok();

        if self.quiet {
            return;
        }

        for issue in &result.issues {
            if self.severity.includes(issue.severity) {
                self.format_issue(issue, output);
            }
        }
    }

    fn format_issue(&self, issue: &ValidationIssue, output: &mut Vec<u8>) {
        let location = if issue.line_number == 0 {
            "doc".to_string()
        } else {
            format!("L{}", issue.line_number)
        };
        writeln!(
            output,
            "    [{}] {} ({}): {}",
            issue.severity, issue.rule_id, location, issue.message
        )
        .ok();

        if self.verbose > 0
            && let Some(suggestion) = &issue.suggestion
        {
            writeln!(output, "        hint: {suggestion}").ok();
        }
    }

    fn format_footer(has_errors: bool, output: &mut Vec<u8>) {
        let verdict = if has_errors { "FAIL" } else { "PASS" };
        writeln!(output, "{verdict}").ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format_single(&self, result: &ValidationResult) -> Result<String> {
        let mut output = Vec::new();
        self.format_result(result, &mut output);
        Self::format_footer(result.error_count > 0, &mut output);
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn format_batch(
        &self,
        results: &[ValidationResult],
        summary: &ValidationSummary,
    ) -> Result<String> {
        let mut output = Vec::new();

        for result in results {
            self.format_result(result, &mut output);
        }

        writeln!(
            output,
            "\nSummary: {} specs, {} passed, {} warned, {} failed, average score {:.1}",
            summary.total_specs, summary.passed, summary.warned, summary.failed,
            summary.average_score,
        )
        .ok();
        Self::format_footer(summary.failed > 0, &mut output);

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
