use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::{
    connection::Database,
    helpers::{format_date, parse_date, parse_datetime, parse_status, to_i64},
    models::{DailyCheckIn, RecordedResponse},
};

const CHECK_IN_COLUMNS: &str = "id, timestamp, date, responses, percentage, resonance, status";

fn row_to_check_in(row: &Row) -> Result<DailyCheckIn> {
    let timestamp: String = row.get("timestamp")?;
    let date: String = row.get("date")?;
    let responses: String = row.get("responses")?;
    let status: String = row.get("status")?;

    let responses: Vec<RecordedResponse> =
        serde_json::from_str(&responses).context("failed to decode stored responses")?;

    Ok(DailyCheckIn {
        id: row.get("id")?,
        timestamp: parse_datetime(&timestamp, "timestamp")?,
        date: parse_date(&date, "date")?,
        responses,
        percentage: row.get("percentage")?,
        resonance: row.get("resonance")?,
        status: parse_status(&status)?,
    })
}

impl Database {
    /// Store a check-in, replacing any record for the same date, then keep
    /// only the `retention` most recent records (never fewer than one).
    /// Non-finite answers or scores are refused.
    pub async fn save_daily_check_in(&self, check_in: &DailyCheckIn, retention: usize) -> Result<()> {
        if let Some(bad) = check_in.responses.iter().find(|r| !r.value.is_finite()) {
            bail!(
                "answer for '{}' is not a finite number ({})",
                bad.question_id,
                bad.value
            );
        }
        if !check_in.percentage.is_finite() || !check_in.resonance.is_finite() {
            bail!("check-in score is not a finite number");
        }

        let retention = retention.max(1);
        let record = check_in.clone();
        self.execute(move |conn| {
            let responses = serde_json::to_string(&record.responses)
                .context("failed to encode responses")?;
            let date = format_date(record.date);

            let tx = conn.transaction()?;

            tx.execute("DELETE FROM check_ins WHERE date = ?1", params![date])?;

            tx.execute(
                "INSERT INTO check_ins (id, timestamp, date, responses, percentage, resonance, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    record.id,
                    record.timestamp.to_rfc3339(),
                    date,
                    responses,
                    record.percentage,
                    record.resonance,
                    record.status.as_str(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .with_context(|| "failed to insert check-in")?;

            // Keep the newest `retention` dates.
            tx.execute(
                "DELETE FROM check_ins
                 WHERE id NOT IN (
                     SELECT id FROM check_ins ORDER BY date DESC, timestamp DESC LIMIT ?1
                 )",
                params![to_i64(retention)?],
            )
            .with_context(|| "failed to prune check-in history")?;

            tx.commit()?;
            Ok(())
        })
        .await
    }

    pub async fn get_check_in_for_date(&self, date: NaiveDate) -> Result<Option<DailyCheckIn>> {
        let date = format_date(date);
        self.execute(move |conn| {
            let query = format!("SELECT {CHECK_IN_COLUMNS} FROM check_ins WHERE date = ?1");
            let mut stmt = conn.prepare(&query)?;
            let check_in = stmt
                .query_row(params![date], |row| Ok(row_to_check_in(row)))
                .optional()?
                .transpose()?;
            Ok(check_in)
        })
        .await
    }

    /// Check-ins ordered newest first.
    pub async fn list_check_ins(&self, limit: Option<usize>) -> Result<Vec<DailyCheckIn>> {
        let limit = match limit {
            Some(limit) => to_i64(limit)?,
            None => -1,
        };
        self.execute(move |conn| {
            let query = format!(
                "SELECT {CHECK_IN_COLUMNS} FROM check_ins
                 ORDER BY date DESC, timestamp DESC
                 LIMIT ?1"
            );
            let mut stmt = conn.prepare(&query)?;

            let mut rows = stmt.query(params![limit])?;
            let mut check_ins = Vec::new();
            while let Some(row) = rows.next()? {
                check_ins.push(row_to_check_in(row)?);
            }

            Ok(check_ins)
        })
        .await
    }

    pub async fn count_check_ins(&self) -> Result<usize> {
        self.execute(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM check_ins", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
        .await
    }
}
