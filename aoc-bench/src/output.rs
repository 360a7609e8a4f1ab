//! Report assembly: the summary table and the optional graph panels

use aoc_harness::{Column, Options, RunReport, TimingSample, COLUMNS};
use aoc_report::chart::{render, BarScale};
use aoc_report::table::{
    maybe_plain, write_data_row, write_edge_row, CellStyle, EdgeTemplate, RowTemplate,
};
use aoc_report::width::{Grouping, WidthCalculator};
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

const GROUP_NAMES: [&str; 3] = ["", "Solutions", "Timing (μs)"];
const HEADER_NAMES: [&str; COLUMNS] =
    ["AoC 2022", "Part 1", "Part 2", "Parse", "Part 1", "Part 2", "Total"];

fn group_styles() -> [CellStyle; 3] {
    let caption = Style::new().bold().italic();
    [None, Some(caption), Some(caption)]
}

fn header_styles() -> [CellStyle; COLUMNS] {
    [
        Some(Style::new().yellow().bold()),
        Some(Style::new().red().bold()),
        Some(Style::new().green().bold()),
        Some(Style::new().cyan().bold()),
        Some(Style::new().red().bold()),
        Some(Style::new().green().bold()),
        Some(Style::new().yellow().bold()),
    ]
}

fn content_styles() -> [CellStyle; COLUMNS] {
    [
        Some(Style::new().yellow()),
        Some(Style::new().red()),
        Some(Style::new().green()),
        Some(Style::new().cyan().dimmed()),
        Some(Style::new().red().dimmed()),
        Some(Style::new().green().dimmed()),
        Some(Style::new().yellow().dimmed()),
    ]
}

fn summary_styles() -> [CellStyle; 5] {
    [
        Some(Style::new().bold().italic()),
        Some(Style::new().cyan()),
        Some(Style::new().red()),
        Some(Style::new().green()),
        Some(Style::new().yellow()),
    ]
}

/// Print the bordered report table.
///
/// Widths are computed over every cell that will be shown (captions,
/// headers, all content rows, the summary) before a single row prints, so
/// the borders always line up. In single-day mode only that day's row is
/// printed and the summary block is omitted.
pub fn print_report(
    out: &mut dyn Write,
    options: &Options,
    report: &RunReport,
    use_color: bool,
) -> io::Result<()> {
    let summary_cells = [
        "Summary".to_string(),
        options.format_timing(report.summary.parsing),
        options.format_timing(report.summary.part1),
        options.format_timing(report.summary.part2),
        options.format_timing(report.summary.total()),
    ];

    let rows: Vec<[String; COLUMNS]> = if options.visual {
        visual_rows(options, report)
    } else {
        report.rows.iter().map(|row| row.cells().clone()).collect()
    };

    let groups = Grouping::new(&[1, 2, 4], COLUMNS);
    let flat = Grouping::new(&[1; COLUMNS], COLUMNS);
    let summary = Grouping::new(&[3, 1, 1, 1, 1], COLUMNS);

    let content_mask = options.content_mask();
    let mut calc = WidthCalculator::new(&HEADER_NAMES, &content_mask);
    calc.update(&groups, &GROUP_NAMES);
    for row in &rows {
        calc.update(&flat, row);
    }
    calc.update(&summary, &summary_cells);

    let group_widths = calc.get(&groups, &options.group_mask());
    let content_widths = calc.get(&flat, &content_mask);
    let summary_widths = calc.get(&summary, &options.summary_mask());

    write_edge_row(out, &EdgeTemplate::new("  ╭─┬─╮"), &group_widths)?;
    write_data_row(
        out,
        &RowTemplate::new(" ^│^│^│"),
        &GROUP_NAMES,
        &group_widths,
        &maybe_plain(use_color, group_styles()),
    )?;
    write_edge_row(out, &EdgeTemplate::new("╭─┼─┬─┼─┬─┬─┬─┤"), &content_widths)?;
    write_data_row(
        out,
        &RowTemplate::new("│^│^│^│^│^│^│^│"),
        &HEADER_NAMES,
        &content_widths,
        &maybe_plain(use_color, header_styles()),
    )?;
    write_edge_row(out, &EdgeTemplate::new("├─┼─┼─┼─┼─┼─┼─┤"), &content_widths)?;

    let content_template = RowTemplate::new("│^│<│<│>│>│>│>│");
    let styles = maybe_plain(use_color, content_styles());
    if let Some(single) = options.single {
        write_data_row(out, &content_template, &rows[single], &content_widths, &styles)?;
    } else {
        for row in &rows {
            write_data_row(out, &content_template, row, &content_widths, &styles)?;
        }
        if options.timing {
            write_edge_row(out, &EdgeTemplate::new("├─┴─┴─┼─┼─┼─┼─┤"), &content_widths)?;
            write_data_row(
                out,
                &RowTemplate::new("│^│>│>│>│>│"),
                &summary_cells,
                &summary_widths,
                &maybe_plain(use_color, summary_styles()),
            )?;
            return write_edge_row(out, &EdgeTemplate::new("╰─┴─┴─┴─┴─╯"), &summary_widths);
        }
    }
    write_edge_row(out, &EdgeTemplate::new("╰─┴─┴─┴─┴─┴─┴─╯"), &content_widths)
}

/// Content rows with every timing cell replaced by a quantized bar.
///
/// Each timing column gets its own scale over all tasks; the summary row
/// stays numeric.
fn visual_rows(options: &Options, report: &RunReport) -> Vec<[String; COLUMNS]> {
    let mut scales = [BarScale::new(); 4];
    for timing in &report.timings {
        scales[0].add_sample(timing.parsing);
        scales[1].add_sample(timing.part1);
        scales[2].add_sample(timing.part2);
        scales[3].add_sample(timing.total());
    }

    let width = options.bar_width();
    report
        .rows
        .iter()
        .zip(&report.timings)
        .map(|(row, timing)| {
            let mut cells = row.cells().clone();
            cells[Column::ParseTime as usize] = render(&scales[0].length_for(timing.parsing, width));
            cells[Column::Part1Time as usize] = render(&scales[1].length_for(timing.part1, width));
            cells[Column::Part2Time as usize] = render(&scales[2].length_for(timing.part2, width));
            cells[Column::TotalTime as usize] =
                render(&scales[3].length_for(timing.total(), width));
            cells
        })
        .collect()
}

/// Print the per-phase bar chart panels.
///
/// An overall panel compares every phase of every task on one shared
/// scale; the phase panels that follow each rescale to their own maximum.
pub fn graph_output(
    out: &mut dyn Write,
    options: &Options,
    report: &RunReport,
    use_color: bool,
) -> io::Result<()> {
    let width = options.graph_width();

    let mut overall = BarScale::new();
    for timing in &report.timings {
        overall.add_sample(timing.parsing);
        overall.add_sample(timing.part1);
        overall.add_sample(timing.part2);
    }

    let parse_style = Style::new().cyan().dimmed();
    let part1_style = Style::new().red().dimmed();
    let part2_style = Style::new().green().dimmed();
    let total_style = Style::new().yellow().dimmed();

    writeln!(out)?;
    panel_header(out, "Overall Statistics", width)?;
    for (timing, row) in report.timings.iter().zip(&report.rows) {
        bar_row(out, &row[Column::Day], &overall, timing.parsing, width, parse_style, use_color)?;
        if options.part1 {
            bar_row(out, "", &overall, timing.part1, width, part1_style, use_color)?;
        }
        if options.part2 {
            bar_row(out, "", &overall, timing.part2, width, part2_style, use_color)?;
        }
    }
    panel_footer(out, width)?;

    phase_panel(out, "Parse", width, report, |timing| timing.parsing, parse_style, use_color)?;
    if options.part1 {
        phase_panel(out, "Part 1", width, report, |timing| timing.part1, part1_style, use_color)?;
    }
    if options.part2 {
        phase_panel(out, "Part 2", width, report, |timing| timing.part2, part2_style, use_color)?;
    }
    phase_panel(out, "Total", width, report, |timing| timing.total(), total_style, use_color)
}

/// One panel over a single phase, scaled to that phase's own maximum.
fn phase_panel(
    out: &mut dyn Write,
    title: &str,
    width: usize,
    report: &RunReport,
    phase: impl Fn(&TimingSample) -> f64,
    style: Style,
    use_color: bool,
) -> io::Result<()> {
    let mut scale = BarScale::new();
    for timing in &report.timings {
        scale.add_sample(phase(timing));
    }

    panel_header(out, title, width)?;
    for (timing, row) in report.timings.iter().zip(&report.rows) {
        bar_row(out, &row[Column::Day], &scale, phase(timing), width, style, use_color)?;
    }
    panel_footer(out, width)
}

fn panel_header(out: &mut dyn Write, title: &str, width: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:<6} {:^title_width$}", "", title, title_width = width + 2)?;
    writeln!(out, "{:<6} ╭{:─^bar_width$}╮", "", "", bar_width = width + 2)
}

fn panel_footer(out: &mut dyn Write, width: usize) -> io::Result<()> {
    writeln!(out, "{:<6} ╰{:─^bar_width$}╯", "", "", bar_width = width + 2)
}

fn bar_row(
    out: &mut dyn Write,
    label: &str,
    scale: &BarScale,
    value: f64,
    width: usize,
    style: Style,
    use_color: bool,
) -> io::Result<()> {
    let bar = render(&scale.length_for(value, width));
    if use_color {
        writeln!(out, "{label:<6} │ {} │", bar.style(style))
    } else {
        writeln!(out, "{label:<6} │ {bar} │")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::ReportRow;

    fn sample_row(day: &str, answers: [&str; 2], timing: TimingSample, options: &Options) -> ReportRow {
        let mut row = ReportRow::default();
        row[Column::Day] = day.to_string();
        row[Column::Part1Answer] = answers[0].to_string();
        row[Column::Part2Answer] = answers[1].to_string();
        row[Column::ParseTime] = options.format_timing(timing.parsing);
        row[Column::Part1Time] = options.format_timing(timing.part1);
        row[Column::Part2Time] = options.format_timing(timing.part2);
        row[Column::TotalTime] = options.format_timing(timing.total());
        row
    }

    fn sample_report(options: &Options) -> RunReport {
        let first = TimingSample { parsing: 1.0, part1: 2.0, part2: 3.0 };
        let second = TimingSample { parsing: 2.0, part1: 4.0, part2: 6.0 };
        let mut summary = first;
        summary += second;
        RunReport {
            summary,
            timings: vec![first, second],
            rows: vec![
                sample_row("Day 01", ["1", "2"], first, options),
                sample_row("Day 02", ["345", "67"], second, options),
            ],
        }
    }

    fn table_lines(options: &Options) -> Vec<String> {
        let report = sample_report(options);
        let mut out = Vec::new();
        print_report(&mut out, options, &report, false).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_full_table_shape() {
        let lines = table_lines(&Options::default());
        // Caption, header and their rules, two content rows, summary block.
        assert_eq!(lines.len(), 10);
        assert!(lines[1].contains("Solutions"));
        assert!(lines[1].contains("Timing (μs)"));
        assert!(lines[3].contains("AoC 2022"));
        assert!(lines[5].contains("Day 01"));
        assert!(lines[6].contains("Day 02"));
        assert!(lines[8].contains("Summary"));

        let width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width, "ragged line: {line}");
        }
    }

    #[test]
    fn test_summary_totals_formatted() {
        let lines = table_lines(&Options::default());
        let summary = &lines[8];
        assert!(summary.contains("3.00"));
        assert!(summary.contains("6.00"));
        assert!(summary.contains("9.00"));
        assert!(summary.contains("18.00"));
    }

    #[test]
    fn test_single_day_omits_summary() {
        let options = Options {
            single: Some(1),
            ..Options::default()
        };
        let lines = table_lines(&options);
        assert_eq!(lines.len(), 7);
        assert!(lines[5].contains("Day 02"));
        assert!(!lines.iter().any(|line| line.contains("Day 01")));
        assert!(!lines.iter().any(|line| line.contains("Summary")));
    }

    #[test]
    fn test_no_timing_hides_timing_columns() {
        let options = Options {
            timing: false,
            ..Options::default()
        };
        let lines = table_lines(&options);
        assert_eq!(lines.len(), 8);
        assert!(!lines.iter().any(|line| line.contains("Timing (μs)")));
        assert!(!lines.iter().any(|line| line.contains("Summary")));
        assert!(lines[3].contains("AoC 2022"));
        assert!(lines[5].contains("Day 01"));
        assert!(lines[6].contains("Day 02"));

        let width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width, "ragged line: {line}");
        }
    }

    #[test]
    fn test_visual_mode_substitutes_bars() {
        let options = Options {
            visual: true,
            ..Options::default()
        };
        let lines = table_lines(&options);
        // Day 02 holds the maximum of every timing column: full bars at
        // the default width of eight.
        assert!(lines[6].contains("████████"));
        assert!(!lines[6].contains("2.00"));
        // The summary row stays numeric.
        assert!(lines[8].contains("18.00"));
    }

    #[test]
    fn test_graph_panels() {
        let options = Options {
            graphs: true,
            ..Options::default()
        };
        let report = sample_report(&options);
        let mut out = Vec::new();
        graph_output(&mut out, &options, &report, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Overall Statistics"));
        for title in ["Parse", "Part 1", "Part 2", "Total"] {
            assert!(text.contains(title), "missing panel {title}");
        }
        // Day 02's part 2 dominates the shared scale: one full-width bar.
        let full_bar = "█".repeat(options.graph_width());
        assert!(text.contains(&full_bar));
    }

    #[test]
    fn test_graph_part_suppression_drops_panel() {
        let options = Options {
            graphs: true,
            part2: false,
            ..Options::default()
        };
        let report = sample_report(&options);
        let mut out = Vec::new();
        graph_output(&mut out, &options, &report, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("Part 2"));
        assert!(text.contains("Part 1"));
    }
}
