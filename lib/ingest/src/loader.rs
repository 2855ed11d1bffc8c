use crate::error::{Error, Result};
use csv::StringRecord;
use scoutx_core::{Player, Roster};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

// Column positions in the FBref standard-stats export. The file carries a
// one-line preamble above the header row, so the first two records are
// skipped before data starts.
const COL_PLAYER: usize = 1;
const COL_POS: usize = 3;
const COL_SQUAD: usize = 4;
const COL_AGE: usize = 5;
const COL_MIN: usize = 9;
const COL_GLS: usize = 11;
const COL_AST: usize = 12;
const COL_PRGC: usize = 23;
const COL_PRGP: usize = 24;
const COL_PRGR: usize = 25;
const COL_GLS_PER_90: usize = 26;
const COL_AST_PER_90: usize = 27;
const COL_NPXG_XAG_PER_90: usize = 35;

const HEADER_RECORDS: usize = 2;

/// Players below this many minutes carry too little signal to compare.
const MIN_MINUTES: u32 = 100;

/// Load the midfielder roster from an FBref CSV export.
///
/// Keeps rows whose position contains "MF" and whose playing time is at
/// least [`MIN_MINUTES`]. Rows with unparseable numeric fields are skipped.
/// Progressive per-90 rates are derived from season totals and minutes;
/// player ids are assigned 1..=N over the rows that survive.
///
/// There is no fallback data source: a missing file is an error, never a
/// silent substitution.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingData(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut players = Vec::new();
    let mut scanned = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        if line < HEADER_RECORDS {
            continue;
        }
        scanned += 1;

        let Some(mut player) = parse_row(&record) else {
            debug!(line = line + 1, "skipping row with missing or unparseable fields");
            continue;
        };
        if !player.position.contains("MF") {
            continue;
        }
        if player.minutes_played < MIN_MINUTES {
            continue;
        }
        player.player_id = players.len() as u32 + 1;
        players.push(player);
    }

    let teams: HashSet<&str> = players.iter().map(|p| p.team.as_str()).collect();
    info!(
        "Loaded {} midfielders from {} rows ({} teams represented)",
        players.len(),
        scanned,
        teams.len()
    );

    Ok(Roster::new(players))
}

/// Parse one data row into a [`Player`] with a placeholder id.
///
/// Returns `None` when the name is empty or any numeric field fails to
/// parse, mirroring a drop-missing-values pass.
fn parse_row(record: &StringRecord) -> Option<Player> {
    let name = field(record, COL_PLAYER)?;
    if name.is_empty() {
        return None;
    }
    let position = field(record, COL_POS)?.to_string();
    let team = field(record, COL_SQUAD)?.to_string();

    let age = numeric(record, COL_AGE)? as u32;
    let minutes_played = numeric(record, COL_MIN)? as u32;
    let goals = numeric(record, COL_GLS)? as u32;
    let assists = numeric(record, COL_AST)? as u32;
    let progressive_carries = numeric(record, COL_PRGC)?;
    let progressive_passes = numeric(record, COL_PRGP)?;
    let progressive_receives = numeric(record, COL_PRGR)?;
    let goals_per_90 = numeric(record, COL_GLS_PER_90)?;
    let assists_per_90 = numeric(record, COL_AST_PER_90)?;
    let npxg_plus_xag_per_90 = numeric(record, COL_NPXG_XAG_PER_90)?;

    let minutes = minutes_played as f32;
    Some(Player {
        player_id: 0,
        name: name.to_string(),
        team,
        position,
        age,
        goals,
        assists,
        minutes_played,
        goals_per_90,
        assists_per_90,
        npxg_plus_xag_per_90,
        progressive_carries_per_90: per_90(progressive_carries, minutes),
        progressive_passes_per_90: per_90(progressive_passes, minutes),
        progressive_receives_per_90: per_90(progressive_receives, minutes),
        total_contributions: goals + assists,
    })
}

fn field<'r>(record: &'r StringRecord, index: usize) -> Option<&'r str> {
    record.get(index).map(str::trim)
}

/// Parse a numeric field, tolerating thousands separators ("1,234").
fn numeric(record: &StringRecord, index: usize) -> Option<f32> {
    let raw = field(record, index)?;
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', "").parse().ok()
}

fn per_90(total: f32, minutes: f32) -> f32 {
    total / minutes * 90.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COLUMNS: usize = 37;

    struct Row<'a> {
        name: &'a str,
        pos: &'a str,
        squad: &'a str,
        age: &'a str,
        min: &'a str,
        gls: &'a str,
        ast: &'a str,
        prgc: &'a str,
        prgp: &'a str,
        prgr: &'a str,
        gls90: &'a str,
        ast90: &'a str,
        npxg_xag90: &'a str,
    }

    fn csv_line(row: &Row) -> String {
        let mut fields = vec!["0"; COLUMNS];
        fields[COL_PLAYER] = row.name;
        fields[COL_POS] = row.pos;
        fields[COL_SQUAD] = row.squad;
        fields[COL_AGE] = row.age;
        fields[COL_MIN] = row.min;
        fields[COL_GLS] = row.gls;
        fields[COL_AST] = row.ast;
        fields[COL_PRGC] = row.prgc;
        fields[COL_PRGP] = row.prgp;
        fields[COL_PRGR] = row.prgr;
        fields[COL_GLS_PER_90] = row.gls90;
        fields[COL_AST_PER_90] = row.ast90;
        fields[COL_NPXG_XAG_PER_90] = row.npxg_xag90;
        fields
            .into_iter()
            .map(|f| if f.contains(',') { format!("\"{f}\"") } else { f.to_string() })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn write_fixture(lines: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "preamble line").unwrap();
        writeln!(file, "Rk,Player,Nation,Pos,Squad,Age,...").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn midfielder<'a>(name: &'a str, squad: &'a str, min: &'a str) -> Row<'a> {
        Row {
            name,
            pos: "MF",
            squad,
            age: "25",
            min,
            gls: "6",
            ast: "4",
            prgc: "90",
            prgp: "180",
            prgr: "45",
            gls90: "0.30",
            ast90: "0.20",
            npxg_xag90: "0.55",
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_roster("/nonexistent/players.csv").unwrap_err();
        assert!(matches!(err, Error::MissingData(_)));
    }

    #[test]
    fn test_keeps_midfielders_only() {
        let file = write_fixture(&[
            csv_line(&midfielder("Rodri", "Manchester City", "1800")),
            csv_line(&Row {
                pos: "FW",
                ..midfielder("Erling Haaland", "Manchester City", "1800")
            }),
            csv_line(&Row {
                pos: "MF,FW",
                ..midfielder("Phil Foden", "Manchester City", "1800")
            }),
        ]);
        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().name, "Rodri");
        assert_eq!(roster.get(1).unwrap().name, "Phil Foden");
    }

    #[test]
    fn test_filters_low_minutes() {
        let file = write_fixture(&[
            csv_line(&midfielder("Rodri", "Manchester City", "1800")),
            csv_line(&midfielder("Bench Player", "Luton Town", "99")),
            csv_line(&midfielder("Exactly Enough", "Brentford", "100")),
        ]);
        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.find("Bench Player").is_none());
        assert!(roster.find("Exactly Enough").is_some());
    }

    #[test]
    fn test_skips_unparseable_rows() {
        let file = write_fixture(&[
            csv_line(&midfielder("Rodri", "Manchester City", "1800")),
            csv_line(&Row {
                min: "n/a",
                ..midfielder("Broken Row", "Burnley", "n/a")
            }),
        ]);
        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_derives_progressive_rates_and_contributions() {
        let file = write_fixture(&[
            csv_line(&midfielder("Rodri", "Manchester City", "1800")),
            csv_line(&midfielder("Declan Rice", "Arsenal", "900")),
        ]);
        let roster = load_roster(file.path()).unwrap();

        let rodri = roster.get(0).unwrap();
        // 90 carries over 1800 minutes is 4.5 per 90.
        assert!((rodri.progressive_carries_per_90 - 4.5).abs() < 1e-6);
        assert!((rodri.progressive_passes_per_90 - 9.0).abs() < 1e-6);
        assert!((rodri.progressive_receives_per_90 - 2.25).abs() < 1e-6);
        assert_eq!(rodri.total_contributions, 10);

        // Same season totals over half the minutes doubles the rates.
        let rice = roster.get(1).unwrap();
        assert!((rice.progressive_carries_per_90 - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_assigns_sequential_ids() {
        let file = write_fixture(&[
            csv_line(&midfielder("Rodri", "Manchester City", "1800")),
            csv_line(&Row {
                pos: "GK",
                ..midfielder("Ederson", "Manchester City", "1800")
            }),
            csv_line(&midfielder("Declan Rice", "Arsenal", "1700")),
        ]);
        let roster = load_roster(file.path()).unwrap();
        let ids: Vec<u32> = roster.players().iter().map(|p| p.player_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_parses_thousands_separators() {
        let quoted = {
            let mut fields = vec!["0".to_string(); COLUMNS];
            fields[COL_PLAYER] = "Rodri".to_string();
            fields[COL_POS] = "MF".to_string();
            fields[COL_SQUAD] = "Manchester City".to_string();
            fields[COL_AGE] = "27".to_string();
            fields[COL_MIN] = "\"2,745\"".to_string();
            fields[COL_GLS] = "8".to_string();
            fields[COL_AST] = "9".to_string();
            fields[COL_PRGC] = "61".to_string();
            fields[COL_PRGP] = "305".to_string();
            fields[COL_PRGR] = "30".to_string();
            fields[COL_GLS_PER_90] = "0.26".to_string();
            fields[COL_AST_PER_90] = "0.30".to_string();
            fields[COL_NPXG_XAG_PER_90] = "0.45".to_string();
            fields.join(",")
        };
        let file = write_fixture(&[
            quoted,
            csv_line(&midfielder("Declan Rice", "Arsenal", "1700")),
        ]);
        let roster = load_roster(file.path()).unwrap();
        assert_eq!(roster.get(0).unwrap().minutes_played, 2745);
    }
}
