//! Roster loading: parses a war-attendance CSV into [`PlayerRecord`] rows.
//!
//! The export format is fixed: the first column is the player name, the next
//! eleven are integer counters in a known order. Extra trailing columns are
//! ignored. A header with fewer than twelve columns or a non-integer stat
//! field aborts the load.

use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use crate::{error::ReportError, io_utils};

pub const STAT_FIELDS: usize = 11;
pub const MIN_COLUMNS: usize = STAT_FIELDS + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub player: String,
    pub fortress: i64,
    pub command_post: i64,
    pub gate: i64,
    pub help: i64,
    pub mount: i64,
    pub placed_object: i64,
    pub guild_master: i64,
    pub officer: i64,
    pub member: i64,
    pub deaths: i64,
    pub siege_weapons: i64,
}

pub fn load_roster(
    path: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
) -> Result<Vec<PlayerRecord>> {
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    read_roster(&mut reader, encoding).with_context(|| format!("Loading roster from {path:?}"))
}

pub fn read_roster<R>(
    reader: &mut csv::Reader<R>,
    encoding: &'static Encoding,
) -> Result<Vec<PlayerRecord>>
where
    R: Read,
{
    let headers = io_utils::reader_headers(reader, encoding)?;
    if headers.len() < MIN_COLUMNS {
        return Err(ReportError::Schema {
            found: headers.len(),
            expected: MIN_COLUMNS,
        }
        .into());
    }

    let mut records = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)?;
        records.push(parse_row(&headers, &decoded, row_idx + 2)?);
    }
    Ok(records)
}

fn parse_row(headers: &[String], fields: &[String], row: usize) -> Result<PlayerRecord> {
    let mut stats = [0i64; STAT_FIELDS];
    for (offset, slot) in stats.iter_mut().enumerate() {
        let idx = offset + 1;
        let raw = fields.get(idx).map(String::as_str).unwrap_or("");
        *slot = raw.trim().parse().map_err(|_| ReportError::Parse {
            row,
            column: headers
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("#{idx}")),
            value: raw.to_string(),
        })?;
    }
    let [
        fortress,
        command_post,
        gate,
        help,
        mount,
        placed_object,
        guild_master,
        officer,
        member,
        deaths,
        siege_weapons,
    ] = stats;
    Ok(PlayerRecord {
        player: fields.first().cloned().unwrap_or_default(),
        fortress,
        command_post,
        gate,
        help,
        mount,
        placed_object,
        guild_master,
        officer,
        member,
        deaths,
        siege_weapons,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use encoding_rs::UTF_8;

    use super::*;

    const HEADER: &str = "Player,Fortress,Command Post,Gate,Help,Mount,Placed Object,Guild Master,Officer,Member,Deaths,Siege Weapons";

    fn roster_from(text: &str) -> Result<Vec<PlayerRecord>> {
        let mut reader = crate::io_utils::open_csv_reader(Cursor::new(text.to_string()), b',');
        read_roster(&mut reader, UTF_8)
    }

    #[test]
    fn reads_rows_in_file_order() {
        let text = format!("{HEADER}\nAleka,1,0,0,5,0,0,10,5,5,2,3\nBirgit,0,0,0,5,0,0,0,0,0,2,0\n");
        let records = roster_from(&text).expect("roster");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, "Aleka");
        assert_eq!(records[0].guild_master, 10);
        assert_eq!(records[1].player, "Birgit");
        assert_eq!(records[1].deaths, 2);
    }

    #[test]
    fn rejects_headers_with_too_few_columns() {
        let err = roster_from("Player,Fortress,Gate\nAleka,1,2\n").expect_err("schema error");
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::Schema { found, expected }) => {
                assert_eq!(*found, 3);
                assert_eq!(*expected, MIN_COLUMNS);
            }
            other => panic!("Expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_names_row_and_column() {
        let text = format!("{HEADER}\nAleka,1,0,0,five,0,0,10,5,5,2,3\n");
        let err = roster_from(&text).expect_err("parse error");
        match err.downcast_ref::<ReportError>() {
            Some(ReportError::Parse { row, column, value }) => {
                assert_eq!(*row, 2);
                assert_eq!(column, "Help");
                assert_eq!(value, "five");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn columns_beyond_the_twelfth_are_ignored() {
        let text = format!("{HEADER},Notes\nAleka,1,0,0,5,0,0,10,5,5,2,3,benched early\n");
        let records = roster_from(&text).expect("roster");
        assert_eq!(records[0].siege_weapons, 3);
    }

    #[test]
    fn duplicate_names_coexist_as_distinct_rows() {
        let text = format!("{HEADER}\nAleka,1,0,0,5,0,0,10,5,5,2,3\nAleka,0,0,0,0,0,0,0,0,0,1,0\n");
        let records = roster_from(&text).expect("roster");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player, records[1].player);
        assert_ne!(records[0], records[1]);
    }
}
