use super::{DEFAULT_EXCLUSIONS, RelevanceFilter, since_boundary};

use anyhow::Result;
use chrono::{DateTime, FixedOffset};

use crate::models::{BookkeepingType, TransactionRecord};
use crate::types::Monetary;

fn at(timestamp: &str) -> Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(timestamp)?)
}

fn create_record(description: &str, bookkeeping_type: BookkeepingType, recorded_at: &str) -> Result<TransactionRecord> {
    Ok(TransactionRecord {
        description: description.to_string(),
        bookkeeping_type,
        amount: Monetary::from_scaled(10000),
        recorded_at: at(recorded_at)?
    })
}

fn descriptions(records: &[TransactionRecord]) -> Vec<&str> {
    records.iter().map(|record| record.description.as_str()).collect()
}

#[test]
fn test_recency_stops_at_first_record_not_after_boundary() -> Result<()> {
    let boundary = at("2024-05-13T00:00:00-07:00")?;
    let records = vec![
        create_record("Wednesday", BookkeepingType::Debit, "2024-05-15T12:00:00-07:00")?,
        create_record("Monday", BookkeepingType::Debit, "2024-05-13T08:00:00-07:00")?,
        create_record("Last Friday", BookkeepingType::Debit, "2024-05-10T12:00:00-07:00")?,
        create_record("Out Of Order", BookkeepingType::Debit, "2024-05-15T18:00:00-07:00")?,
    ];

    let result = since_boundary(&records, &boundary);

    assert_eq!(descriptions(&result), vec!["Wednesday", "Monday"]);

    Ok(())
}

#[test]
fn test_recency_excludes_record_exactly_at_boundary() -> Result<()> {
    let boundary = at("2024-05-13T00:00:00-07:00")?;
    let records = vec![
        create_record("Tuesday", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?,
        create_record("Midnight", BookkeepingType::Debit, "2024-05-13T00:00:00-07:00")?,
    ];

    assert_eq!(descriptions(&since_boundary(&records, &boundary)), vec!["Tuesday"]);

    Ok(())
}

#[test]
fn test_recency_compares_instants_across_offsets() -> Result<()> {
    let boundary = at("2024-05-13T00:00:00-07:00")?;
    // 06:30 UTC on Monday is still Sunday evening at -07:00
    let records = vec![create_record("Sunday Night", BookkeepingType::Debit, "2024-05-13T06:30:00Z")?];

    assert!(since_boundary(&records, &boundary).is_empty());

    Ok(())
}

#[test]
fn test_recency_handles_empty_input() -> Result<()> {
    let boundary = at("2024-05-13T00:00:00-07:00")?;

    assert!(since_boundary(&[], &boundary).is_empty());

    Ok(())
}

#[test]
fn test_relevance_excludes_credits_regardless_of_description() -> Result<()> {
    let filter = RelevanceFilter::new();

    assert!(!filter.is_relevant(&create_record("Coffee Shop", BookkeepingType::Credit, "2024-05-14T12:00:00-07:00")?));
    assert!(!filter.is_relevant(&create_record("Coffee Shop", BookkeepingType::Other, "2024-05-14T12:00:00-07:00")?));

    Ok(())
}

#[test]
fn test_relevance_excludes_known_non_purchase_debits() -> Result<()> {
    let filter = RelevanceFilter::new();

    assert!(!filter.is_relevant(&create_record("Vanguard Buy", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?));
    assert!(!filter.is_relevant(&create_record("ACH Discover E Payment 1234", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?));
    assert!(filter.is_relevant(&create_record("Coffee Shop", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?));

    Ok(())
}

#[test]
fn test_relevance_matching_is_case_sensitive() -> Result<()> {
    let filter = RelevanceFilter::new();

    assert!(filter.is_relevant(&create_record("vanguard coffee", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?));

    Ok(())
}

#[test]
fn test_relevance_accepts_additional_exclusions() -> Result<()> {
    let filter = RelevanceFilter::new().with_exclusion("Rent");
    let records = vec![
        create_record("Monthly Rent", BookkeepingType::Debit, "2024-05-15T12:00:00-07:00")?,
        create_record("Grocer", BookkeepingType::Debit, "2024-05-14T12:00:00-07:00")?,
        create_record("Vanguard Buy", BookkeepingType::Debit, "2024-05-14T11:00:00-07:00")?,
        create_record("Bakery", BookkeepingType::Debit, "2024-05-14T10:00:00-07:00")?,
    ];

    assert_eq!(filter.exclusions().len(), DEFAULT_EXCLUSIONS.len() + 1);
    assert_eq!(descriptions(&filter.apply(&records)), vec!["Grocer", "Bakery"]);

    Ok(())
}
