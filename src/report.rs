//! Report assembly: run metadata, outcome phrasing, and the webhook payload.
//!
//! Builds the three-embed message (war summary, per-column stats, earned
//! achievements) the webhook expects. Delivery lives in [`crate::webhook`];
//! this module only produces the payload and its console rendering.

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{achievements::AchievementResult, aggregate::ColumnSummary, error::ReportError};

pub const SUMMARY_COLOR: u32 = 6_591_981;
pub const STATS_COLOR: u32 = 3_978_097;
pub const ACHIEVEMENTS_COLOR: u32 = 9_662_683;

pub const WAR_DATE_FORMAT: &str = "%d/%m/%Y";
const DISPLAY_DATE_FORMAT: &str = "%A, %B %d, %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl FromStr for Outcome {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            "tie" => Ok(Outcome::Tie),
            other => Err(ReportError::Config(format!(
                "Unrecognized outcome '{other}' (expected win, loss, or tie)"
            ))),
        }
    }
}

impl Outcome {
    pub fn phrase(self) -> &'static str {
        match self {
            Outcome::Win => ":trophy: Victory :trophy:",
            Outcome::Loss => ":broken_heart: Defeat :broken_heart:",
            Outcome::Tie => ":shrug: Stalemate :shrug:",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WarMeta {
    pub date: NaiveDate,
    pub node: String,
    pub outcome: Outcome,
}

impl WarMeta {
    pub fn new(date: &str, node: &str, outcome: &str) -> Result<Self, ReportError> {
        let date = NaiveDate::parse_from_str(date, WAR_DATE_FORMAT).map_err(|_| {
            ReportError::Config(format!("Failed to parse '{date}' as a dd/mm/yyyy date"))
        })?;
        Ok(WarMeta {
            date,
            node: node.to_string(),
            outcome: outcome.parse()?,
        })
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

pub fn build_payload(
    meta: &WarMeta,
    attendance: usize,
    summaries: &[ColumnSummary],
    achievements: &[AchievementResult],
) -> WebhookPayload {
    let summary_fields = vec![
        EmbedField {
            name: "Date".to_string(),
            value: meta.display_date(),
        },
        EmbedField {
            name: "Attendance Count".to_string(),
            value: attendance.to_string(),
        },
        EmbedField {
            name: "Node Name".to_string(),
            value: meta.node.clone(),
        },
        EmbedField {
            name: "Outcome".to_string(),
            value: meta.outcome.phrase().to_string(),
        },
    ];

    let stat_fields = summaries
        .iter()
        .map(|summary| EmbedField {
            name: summary.field_name(),
            value: summary.field_value(),
        })
        .collect();

    let achievement_fields = achievements
        .iter()
        .map(|result| EmbedField {
            name: result.field_name(attendance),
            value: result.field_value(),
        })
        .collect();

    WebhookPayload {
        content: "@everyone".to_string(),
        embeds: vec![
            Embed {
                title: ":information_source: Node War Summary".to_string(),
                color: SUMMARY_COLOR,
                fields: summary_fields,
            },
            Embed {
                title: ":bar_chart: Stats".to_string(),
                color: STATS_COLOR,
                fields: stat_fields,
            },
            Embed {
                title: ":military_medal: Achievements".to_string(),
                color: ACHIEVEMENTS_COLOR,
                fields: achievement_fields,
            },
        ],
    }
}

/// Plain-text rendering for the no-webhook and delivery-failure paths.
pub fn render_console(payload: &WebhookPayload) -> String {
    let mut output = String::new();
    for embed in &payload.embeds {
        let _ = writeln!(output, "{}", embed.title);
        let _ = writeln!(output, "{}", "-".repeat(embed.title.chars().count()));
        for field in &embed.fields {
            let _ = writeln!(output, "{}", field.name);
            for line in field.value.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }
        let _ = writeln!(output);
    }
    output
}
