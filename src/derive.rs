//! Derived columns: Total kills and kill/death ratio.
//!
//! Total counts the four kill-type columns (Guild Master, Officer, Member,
//! Siege Weapons). KDR is Total divided by Deaths and is undefined when a
//! player never died; undefined values are excluded from every aggregate
//! rather than coerced to 0 or infinity.

use crate::roster::PlayerRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct WarRecord {
    pub stats: PlayerRecord,
    pub total: i64,
    pub kdr: Option<f64>,
}

impl WarRecord {
    pub fn from_stats(stats: PlayerRecord) -> Self {
        let total = stats.guild_master + stats.officer + stats.member + stats.siege_weapons;
        let kdr = (stats.deaths > 0).then(|| total as f64 / stats.deaths as f64);
        WarRecord { stats, total, kdr }
    }
}

pub fn derive_records(records: Vec<PlayerRecord>) -> Vec<WarRecord> {
    records.into_iter().map(WarRecord::from_stats).collect()
}
