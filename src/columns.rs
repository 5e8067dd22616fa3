//! The fixed table of reportable columns.
//!
//! Eleven raw counters plus the two derived columns, each with the statistic
//! kinds it reports, the adjective per kind, a verb suffix for phrasing, and
//! the chat glyph shortcode. This table is configuration, not data: the war
//! export schema is hand-authored and does not change per run.

use crate::derive::WarRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Max,
    Min,
    Mean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatColumn {
    Fortress,
    CommandPost,
    Gate,
    Help,
    Mount,
    PlacedObject,
    GuildMaster,
    Officer,
    Member,
    Deaths,
    SiegeWeapons,
    Total,
    Kdr,
}

impl StatColumn {
    /// Value of this column for one record; `None` when the column is
    /// undefined for that record (KDR of a deathless player).
    pub fn value(self, record: &WarRecord) -> Option<f64> {
        Some(match self {
            StatColumn::Fortress => record.stats.fortress as f64,
            StatColumn::CommandPost => record.stats.command_post as f64,
            StatColumn::Gate => record.stats.gate as f64,
            StatColumn::Help => record.stats.help as f64,
            StatColumn::Mount => record.stats.mount as f64,
            StatColumn::PlacedObject => record.stats.placed_object as f64,
            StatColumn::GuildMaster => record.stats.guild_master as f64,
            StatColumn::Officer => record.stats.officer as f64,
            StatColumn::Member => record.stats.member as f64,
            StatColumn::Deaths => record.stats.deaths as f64,
            StatColumn::SiegeWeapons => record.stats.siege_weapons as f64,
            StatColumn::Total => record.total as f64,
            StatColumn::Kdr => return record.kdr,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            StatColumn::Fortress => "Fortress",
            StatColumn::CommandPost => "Command Post",
            StatColumn::Gate => "Gate",
            StatColumn::Help => "Help",
            StatColumn::Mount => "Mount",
            StatColumn::PlacedObject => "Placed Object",
            StatColumn::GuildMaster => "Guild Master",
            StatColumn::Officer => "Officer",
            StatColumn::Member => "Member",
            StatColumn::Deaths => "Deaths",
            StatColumn::SiegeWeapons => "Siege Weapons",
            StatColumn::Total => "Total",
            StatColumn::Kdr => "KDR",
        }
    }
}

#[derive(Debug)]
pub struct ColumnSpec {
    pub column: StatColumn,
    pub stats: &'static [(StatKind, &'static str)],
    pub verb: &'static str,
    pub glyph: &'static str,
}

const MOST: (StatKind, &str) = (StatKind::Max, "Most");
const LEAST: (StatKind, &str) = (StatKind::Min, "Least");
const AVERAGE: (StatKind, &str) = (StatKind::Mean, "Average");

pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        column: StatColumn::Fortress,
        stats: &[MOST],
        verb: " Destroyed",
        glyph: ":european_castle:",
    },
    ColumnSpec {
        column: StatColumn::CommandPost,
        stats: &[MOST],
        verb: " Destroyed",
        glyph: ":japanese_castle:",
    },
    ColumnSpec {
        column: StatColumn::Gate,
        stats: &[MOST],
        verb: " Destroyed",
        glyph: ":shinto_shrine:",
    },
    ColumnSpec {
        column: StatColumn::Help,
        stats: &[MOST, LEAST],
        verb: "",
        glyph: ":handshake:",
    },
    ColumnSpec {
        column: StatColumn::Mount,
        stats: &[MOST, LEAST],
        verb: " Kills",
        glyph: ":horse:",
    },
    ColumnSpec {
        column: StatColumn::PlacedObject,
        stats: &[MOST],
        verb: " Destroyed",
        glyph: ":hammer:",
    },
    ColumnSpec {
        column: StatColumn::GuildMaster,
        stats: &[MOST, LEAST],
        verb: " Kills",
        glyph: ":prince:",
    },
    ColumnSpec {
        column: StatColumn::Officer,
        stats: &[MOST, LEAST],
        verb: " Kills",
        glyph: ":cop:",
    },
    ColumnSpec {
        column: StatColumn::Member,
        stats: &[MOST, LEAST],
        verb: " Kills",
        glyph: ":man_with_gua_pi_mao:",
    },
    ColumnSpec {
        column: StatColumn::Deaths,
        stats: &[MOST, LEAST, AVERAGE],
        verb: "",
        glyph: ":skull_crossbones:",
    },
    ColumnSpec {
        column: StatColumn::SiegeWeapons,
        stats: &[MOST, LEAST],
        verb: " Kills",
        glyph: ":bomb:",
    },
    ColumnSpec {
        column: StatColumn::Total,
        stats: &[MOST, LEAST, AVERAGE],
        verb: " Kills",
        glyph: ":knife:",
    },
    ColumnSpec {
        column: StatColumn::Kdr,
        stats: &[
            (StatKind::Max, "Highest"),
            (StatKind::Min, "Lowest"),
            AVERAGE,
        ],
        verb: "",
        glyph: ":crossed_swords:",
    },
];
