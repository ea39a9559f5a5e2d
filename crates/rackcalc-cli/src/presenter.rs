//! CLI result presenters.
//!
//! The text report lists the same figures, in the same order, as the
//! interactive form: per-rack limits, RU totals, utilization, the capacity
//! warning, the rack count summary, the even-distribution suggestion and,
//! on request, the per-rack list.

use rackcalc_core::constants::MAX_RACK_TOTAL;
use rackcalc_core::{EvenSpread, RackError, RackInputs, RackLayout};

use crate::output::{format_number, format_percent, format_ru, render_json};
use crate::ui;

/// Trait for presenting a computed layout to the user.
pub trait ResultPresenter {
    /// Render the layout to a string, as it would be written to a file.
    fn render(&self, inputs: &RackInputs, layout: &RackLayout) -> Result<String, RackError>;

    /// Present a layout on stdout.
    fn present_layout(&self, inputs: &RackInputs, layout: &RackLayout);
}

/// One line of the text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Header(String),
    Text(String),
    Warning(String),
}

impl ReportLine {
    /// Uncolored rendering, used for files and `NO_COLOR`.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Header(text) => format!("=== {text} ==="),
            Self::Text(text) => text.clone(),
            Self::Warning(text) => format!("[WARN] {text}"),
        }
    }
}

/// Warning text when the servers need more RU than the racks hold.
#[must_use]
pub fn capacity_warning(inputs: &RackInputs, layout: &RackLayout) -> Option<String> {
    layout.capacity_exceeded.then(|| {
        format!(
            "Not enough RU available: you need {} RU but only have {} RU across {} racks.",
            format_ru(layout.total_ru_needed),
            format_ru(layout.ru_available_total),
            format_number(inputs.rack_total),
        )
    })
}

/// The even-distribution suggestion as a report line.
#[must_use]
pub fn suggestion_line(layout: &RackLayout) -> ReportLine {
    match layout.even_spread {
        EvenSpread::Feasible {
            servers_for_even_distribution,
            additional_servers_needed,
        } => {
            let detail = if additional_servers_needed > 0 {
                format!("add {} more", format_number(additional_servers_needed))
            } else {
                "already even".to_string()
            };
            ReportLine::Text(format!(
                "To evenly distribute servers across all racks: {} servers total ({detail}).",
                format_number(servers_for_even_distribution)
            ))
        }
        EvenSpread::ExceedsCapacity => ReportLine::Warning(
            "Cannot evenly distribute more servers without exceeding rack RU limits.".to_string(),
        ),
        EvenSpread::NotComputed => ReportLine::Text(
            "Enter a server RU, rack total and RU per rack above zero to get a suggestion."
                .to_string(),
        ),
    }
}

/// Build the full text report.
#[must_use]
pub fn report_lines(
    inputs: &RackInputs,
    layout: &RackLayout,
    show_distribution: bool,
) -> Vec<ReportLine> {
    let mut lines = vec![
        ReportLine::Header("Rack Layout".to_string()),
        ReportLine::Text(format!(
            "Max Servers Per Rack: {}",
            format_number(layout.max_servers_per_rack)
        )),
        ReportLine::Text(format!(
            "Base Servers Per Rack: {}",
            format_number(layout.base_servers_per_rack)
        )),
        ReportLine::Text(format!(
            "Extra Distribution: {}",
            format_number(layout.extra_distribution)
        )),
        ReportLine::Text(format!(
            "Rack RU Available: {}",
            format_ru(layout.ru_available_total)
        )),
        ReportLine::Text(format!(
            "Rack RU Needed: {}",
            format_ru(layout.total_ru_needed)
        )),
        ReportLine::Text(format!(
            "RU Utilization: {}",
            format_percent(layout.ru_utilization)
        )),
    ];

    if layout.rack_limit_exceeded {
        lines.push(ReportLine::Warning(format!(
            "Rack total {} is above the supported maximum of {}; nothing was laid out.",
            format_number(inputs.rack_total),
            format_number(MAX_RACK_TOTAL)
        )));
    }
    if let Some(warning) = capacity_warning(inputs, layout) {
        lines.push(ReportLine::Warning(warning));
    }

    lines.push(ReportLine::Header("Rack Count Summary".to_string()));
    if layout.rack_summary.is_empty() {
        lines.push(ReportLine::Text("No racks.".to_string()));
    }
    for (count, racks) in &layout.rack_summary {
        lines.push(ReportLine::Text(format!(
            "Racks with {} servers: {racks}",
            format_number(*count)
        )));
    }

    lines.push(ReportLine::Header(
        "Even Distribution Suggestion".to_string(),
    ));
    lines.push(suggestion_line(layout));

    if show_distribution {
        lines.push(ReportLine::Header("Server Distribution".to_string()));
        for (rack, count) in layout.racks() {
            lines.push(ReportLine::Text(format!(
                "Rack {rack}: {} servers",
                format_number(count)
            )));
        }
    }

    lines
}

/// Space-separated per-rack counts, for quiet mode.
#[must_use]
pub fn distribution_line(layout: &RackLayout) -> String {
    layout
        .distribution
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text report presenter.
pub struct CLIResultPresenter {
    show_distribution: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(show_distribution: bool, quiet: bool) -> Self {
        Self {
            show_distribution,
            quiet,
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn render(&self, inputs: &RackInputs, layout: &RackLayout) -> Result<String, RackError> {
        if self.quiet {
            return Ok(distribution_line(layout));
        }
        Ok(report_lines(inputs, layout, self.show_distribution)
            .iter()
            .map(ReportLine::plain)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn present_layout(&self, inputs: &RackInputs, layout: &RackLayout) {
        if self.quiet {
            println!("{}", distribution_line(layout));
            return;
        }

        for line in report_lines(inputs, layout, self.show_distribution) {
            match line {
                ReportLine::Header(text) => ui::print_header(&text),
                ReportLine::Text(text) => ui::print_line(&text),
                ReportLine::Warning(text) => ui::print_warning(&text),
            }
        }
    }
}

/// JSON presenter.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn render(&self, inputs: &RackInputs, layout: &RackLayout) -> Result<String, RackError> {
        render_json(inputs, layout).map_err(|e| RackError::Io(e.into()))
    }

    fn present_layout(&self, inputs: &RackInputs, layout: &RackLayout) {
        match self.render(inputs, layout) {
            Ok(json) => println!("{json}"),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (RackInputs, RackLayout) {
        let inputs = RackInputs::new(10, 2.0, 3, 10.0);
        let layout = inputs.layout();
        (inputs, layout)
    }

    fn plain(lines: &[ReportLine]) -> Vec<String> {
        lines.iter().map(ReportLine::plain).collect()
    }

    #[test]
    fn report_lists_figures_in_order() {
        let (inputs, layout) = sample();
        let lines = plain(&report_lines(&inputs, &layout, false));
        assert_eq!(lines[0], "=== Rack Layout ===");
        assert_eq!(lines[1], "Max Servers Per Rack: 5");
        assert_eq!(lines[2], "Base Servers Per Rack: 3");
        assert_eq!(lines[3], "Extra Distribution: 1");
        assert_eq!(lines[4], "Rack RU Available: 30");
        assert_eq!(lines[5], "Rack RU Needed: 20");
        assert_eq!(lines[6], "RU Utilization: 66.7%");
        assert!(lines.contains(&"Racks with 3 servers: 2".to_string()));
        assert!(lines.contains(&"Racks with 4 servers: 1".to_string()));
        assert!(lines.contains(
            &"To evenly distribute servers across all racks: 12 servers total (add 2 more)."
                .to_string()
        ));
        assert!(!lines.iter().any(|l| l.starts_with("Rack 1:")));
    }

    #[test]
    fn report_includes_distribution_on_request() {
        let (inputs, layout) = sample();
        let lines = plain(&report_lines(&inputs, &layout, true));
        assert!(lines.contains(&"=== Server Distribution ===".to_string()));
        assert!(lines.contains(&"Rack 1: 4 servers".to_string()));
        assert!(lines.contains(&"Rack 3: 3 servers".to_string()));
    }

    #[test]
    fn capacity_warning_when_exceeded() {
        let inputs = RackInputs::new(100, 5.0, 2, 10.0);
        let layout = inputs.layout();
        let warning = capacity_warning(&inputs, &layout).unwrap();
        assert_eq!(
            warning,
            "Not enough RU available: you need 500 RU but only have 20 RU across 2 racks."
        );
        let lines = report_lines(&inputs, &layout, false);
        assert!(lines.contains(&ReportLine::Warning(warning)));
        assert!(matches!(suggestion_line(&layout), ReportLine::Warning(_)));
    }

    #[test]
    fn no_capacity_warning_within_limits() {
        let (inputs, layout) = sample();
        assert!(capacity_warning(&inputs, &layout).is_none());
    }

    #[test]
    fn already_even_suggestion() {
        let layout = RackInputs::new(9, 1.0, 3, 10.0).layout();
        assert_eq!(
            suggestion_line(&layout).plain(),
            "To evenly distribute servers across all racks: 9 servers total (already even)."
        );
    }

    #[test]
    fn invalid_inputs_report_zeros() {
        let inputs = RackInputs::new(0, 0.0, 5, 10.0);
        let layout = inputs.layout();
        let lines = plain(&report_lines(&inputs, &layout, true));
        assert_eq!(lines[1], "Max Servers Per Rack: 0");
        assert_eq!(lines[6], "RU Utilization: 0.0%");
        assert!(lines.contains(&"No racks.".to_string()));
        assert!(matches!(suggestion_line(&layout), ReportLine::Text(_)));
    }

    #[test]
    fn quiet_render_is_distribution_only() {
        let (inputs, layout) = sample();
        let presenter = CLIResultPresenter::new(false, true);
        assert_eq!(presenter.render(&inputs, &layout).unwrap(), "4 3 3");
    }

    #[test]
    fn text_render_is_plain() {
        let (inputs, layout) = sample();
        let presenter = CLIResultPresenter::new(true, false);
        let text = presenter.render(&inputs, &layout).unwrap();
        assert!(text.starts_with("=== Rack Layout ==="));
        assert!(text.contains("Rack 2: 3 servers"));
    }

    #[test]
    fn json_render_parses() {
        let (inputs, layout) = sample();
        let text = JsonResultPresenter.render(&inputs, &layout).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["layout"]["max_servers_per_rack"], 5);
    }

    #[test]
    fn presenters_do_not_panic() {
        let (inputs, layout) = sample();
        CLIResultPresenter::new(true, false).present_layout(&inputs, &layout);
        CLIResultPresenter::new(false, true).present_layout(&inputs, &layout);
        JsonResultPresenter.present_layout(&inputs, &layout);
    }

    #[test]
    fn rack_limit_is_reported() {
        let inputs = RackInputs::new(1, 1.0, i64::MAX, 1.0);
        let layout = inputs.layout();
        let lines = report_lines(&inputs, &layout, true);
        assert!(lines.contains(&ReportLine::Warning(
            "Rack total 9,223,372,036,854,775,807 is above the supported maximum of 1,000,000; nothing was laid out."
                .to_string()
        )));
        assert!(!lines.iter().any(|l| l.plain().starts_with("Rack 1:")));
    }
}
