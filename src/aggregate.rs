//! Superlative aggregation over the derived war table.
//!
//! For each reportable column this computes the statistic kinds its
//! [`ColumnSpec`] declares. Extrema are tie-inclusive: every player whose
//! exact value equals the extremum is listed, sorted alphabetically. An
//! extremum of 0 keeps the value but drops the names, so quiet nights do not
//! announce "Most Fortresses Destroyed: 0 (everyone)". Means are computed
//! over defined values only and never attributed to players. A statistic
//! with no defined values (empty roster, or KDR when nobody died) is
//! omitted rather than reported as 0.

use itertools::Itertools;

use crate::{
    columns::{COLUMNS, ColumnSpec, StatColumn, StatKind},
    derive::WarRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub caption: String,
    pub value: String,
    pub players: Vec<String>,
}

impl StatLine {
    pub fn render(&self) -> String {
        if self.players.is_empty() {
            format!("{}: {}", self.caption, self.value)
        } else {
            format!("{}: {} ({})", self.caption, self.value, self.players.iter().join(", "))
        }
    }
}

#[derive(Debug)]
pub struct ColumnSummary {
    pub spec: &'static ColumnSpec,
    pub lines: Vec<StatLine>,
}

impl ColumnSummary {
    pub fn field_name(&self) -> String {
        format!("{} {}", self.spec.glyph, self.spec.column.label())
    }

    pub fn field_value(&self) -> String {
        self.lines.iter().map(StatLine::render).join("\n")
    }
}

pub fn summarize(records: &[WarRecord]) -> Vec<ColumnSummary> {
    COLUMNS
        .iter()
        .filter_map(|spec| {
            let lines = column_lines(records, spec);
            (!lines.is_empty()).then_some(ColumnSummary { spec, lines })
        })
        .collect()
}

/// Rows for the console table: one per computed statistic.
pub fn summary_rows(summaries: &[ColumnSummary]) -> Vec<Vec<String>> {
    summaries
        .iter()
        .flat_map(|summary| {
            summary.lines.iter().map(|line| {
                vec![
                    summary.spec.column.label().to_string(),
                    line.caption.clone(),
                    line.value.clone(),
                    line.players.iter().join(", "),
                ]
            })
        })
        .collect()
}

fn column_lines(records: &[WarRecord], spec: &ColumnSpec) -> Vec<StatLine> {
    spec.stats
        .iter()
        .filter_map(|&(kind, adjective)| {
            let caption = format!("{adjective}{}", spec.verb);
            match kind {
                StatKind::Mean => mean(records, spec.column).map(|value| StatLine {
                    caption,
                    value: format_stat(value),
                    players: Vec::new(),
                }),
                StatKind::Max | StatKind::Min => {
                    let extreme = extremum(records, spec.column, kind)?;
                    let players = if extreme == 0.0 {
                        Vec::new()
                    } else {
                        players_at(records, spec.column, extreme)
                    };
                    Some(StatLine {
                        caption,
                        value: format_stat(extreme),
                        players,
                    })
                }
            }
        })
        .collect()
}

fn extremum(records: &[WarRecord], column: StatColumn, kind: StatKind) -> Option<f64> {
    let values = records.iter().filter_map(|record| column.value(record));
    match kind {
        StatKind::Max => values.reduce(f64::max),
        StatKind::Min => values.reduce(f64::min),
        StatKind::Mean => None,
    }
}

fn mean(records: &[WarRecord], column: StatColumn) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(value) = column.value(record) {
            sum += value;
            count += 1;
        }
    }
    (count > 0).then(|| sum / count as f64)
}

fn players_at(records: &[WarRecord], column: StatColumn, value: f64) -> Vec<String> {
    records
        .iter()
        .filter(|record| column.value(record) == Some(value))
        .map(|record| record.stats.player.clone())
        .sorted()
        .collect()
}

/// Display rounding only: comparisons upstream always use exact values.
fn format_stat(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}
