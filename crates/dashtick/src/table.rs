use dashtick_core::RefreshInterval;

/// Box-drawn table of interval options, current selection marked with `*`.
pub struct TableFormatter {
    marker_width: usize,
    interval_width: usize,
    duration_width: usize,
    label_width: usize,
}

impl TableFormatter {
    pub fn new(options: &[RefreshInterval]) -> Self {
        let label_width = options
            .iter()
            .map(|o| o.label_key().len())
            .max()
            .unwrap_or(24)
            .clamp(9, 40); // Between "Label key" header min and reasonable terminal width max

        Self {
            marker_width: 1,
            interval_width: 11,
            duration_width: 10,
            label_width,
        }
    }

    pub fn print_table(&self, options: &[RefreshInterval], selected: RefreshInterval) {
        self.print_header();
        for option in options {
            self.print_row(*option, *option == selected);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
    }

    fn print_footer(&self) {
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn print_row(&self, option: RefreshInterval, is_selected: bool) {
        println!(
            "│ {:<width_marker$} │ {:<width_interval$} │ {:<width_duration$} │ {:<width_label$} │",
            if is_selected { "*" } else { "" },
            option.as_str(),
            format_duration(option),
            truncate(&option.label_key(), self.label_width),
            width_marker = self.marker_width,
            width_interval = self.interval_width,
            width_duration = self.duration_width,
            width_label = self.label_width,
        );
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_marker$} │ {:<width_interval$} │ {:<width_duration$} │ {:<width_label$} │",
            "",
            "Interval",
            "Period",
            "Label key",
            width_marker = self.marker_width,
            width_interval = self.interval_width,
            width_duration = self.duration_width,
            width_label = self.label_width,
        )
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        format!(
            "{left}{}{middle}{}{middle}{}{middle}{}{right}",
            "─".repeat(self.marker_width + 2),
            "─".repeat(self.interval_width + 2),
            "─".repeat(self.duration_width + 2),
            "─".repeat(self.label_width + 2),
        )
    }
}

/// Human-readable refresh period: `10s`, `5m`, `1h`, or `off`.
pub fn format_duration(interval: RefreshInterval) -> String {
    let Some(duration) = interval.duration() else {
        return "off".to_string();
    };

    let secs = duration.as_secs();
    if secs >= 3600 && secs % 3600 == 0 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
