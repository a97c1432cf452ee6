//! Pretty output formatting.

use humanbench_core::maintenance::{MaintenanceFlag, MaintenanceStatus};
use humanbench_core::ranks::RankTier;

use crate::commands::personality::PersonalitySeed;
use crate::loader::{CollectionStatus, LoadReport};

/// Format a freshly written maintenance flag.
pub fn format_maintenance_flag(flag: &MaintenanceFlag) -> String {
    let state = if flag.enabled { "ENABLED" } else { "DISABLED" };
    let mut output = format!("Maintenance mode {}\n  Message: {}", state, flag.message);
    if flag.enabled {
        output.push_str("\n\nThe app is now in maintenance mode.");
        output.push_str("\nUsers will see the maintenance page on app routes.");
        output.push_str("\nThe landing page remains accessible.");
    } else {
        output.push_str("\n\nThe app is now available to users.");
        output.push_str("\nUsers can access all app routes normally.");
    }
    output
}

/// Format the result of a status read.
pub fn format_maintenance_status(status: &MaintenanceStatus) -> String {
    match status {
        MaintenanceStatus::NotConfigured => {
            "No maintenance settings found.\nThe app is currently available to users.".to_string()
        }
        MaintenanceStatus::Configured(flag) => {
            let updated = flag
                .updated_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "Unknown".to_string());
            format!(
                "Current maintenance status\n  Enabled: {}\n  Message: {}\n  Last updated: {}",
                if flag.enabled { "Yes" } else { "No" },
                status.message().unwrap_or("No message set"),
                updated
            )
        }
    }
}

/// Format a bulk load summary.
pub fn format_load_report(what: &str, report: &LoadReport) -> String {
    format!(
        "Seeded {} {} in {} batch{}",
        report.len(),
        what,
        report.chunks,
        if report.chunks == 1 { "" } else { "es" }
    )
}

/// Format one tier as `order. name (min-max) - color`.
pub fn format_rank(tier: &RankTier) -> String {
    format!(
        "{}. {} ({}-{}) - {}",
        tier.order, tier.name, tier.min_global_score, tier.max_global_score, tier.color
    )
}

/// Format the stored ladder.
pub fn format_ranks(tiers: &[RankTier]) -> String {
    if tiers.is_empty() {
        return "No ranks found.".to_string();
    }
    let mut output = format!("RANKS ({})\n", tiers.len());
    output.push_str(&"-".repeat(40));
    for tier in tiers {
        output.push_str(&format!("\n  {}", format_rank(tier)));
    }
    output
}

/// Format a personality seed summary.
pub fn format_personality_seed(seed: &PersonalitySeed) -> String {
    let traits: Vec<&str> = seed.scale.traits.iter().map(|t| t.as_str()).collect();
    format!(
        "Personality quiz data ready\n  Scale: {} points ({})\n  Questions: {} ({} per trait)\n  Aggregates: {} traits, {} responses",
        seed.scale.scale.len(),
        traits.join(", "),
        seed.questions.len(),
        seed.scale.questions_per_trait,
        seed.aggregates.counts.len(),
        seed.aggregates.responses
    )
}

/// Format collection counts as an aligned table.
pub fn format_collection_status(statuses: &[CollectionStatus]) -> String {
    let width = statuses
        .iter()
        .map(|s| s.collection.len())
        .max()
        .unwrap_or(0);
    let mut output = format!("COLLECTIONS ({})\n", statuses.len());
    output.push_str(&"-".repeat(40));
    for status in statuses {
        output.push_str(&format!(
            "\n  {:<width$}  {}",
            status.collection,
            status.count,
            width = width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use humanbench_core::ranks::default_ranks;
    use humanbench_core::storage::DocumentPath;

    #[test]
    fn test_format_rank_line() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let tiers = default_ranks(now);

        assert_eq!(format_rank(&tiers[0]), "1. Rookie (0-999) - #6B7280");
        assert_eq!(format_rank(&tiers[9]), "10. Legend (9000-999999) - #DC2626");
    }

    #[test]
    fn test_format_ranks_empty() {
        assert_eq!(format_ranks(&[]), "No ranks found.");
    }

    #[test]
    fn test_format_maintenance_status_not_configured() {
        let output = format_maintenance_status(&MaintenanceStatus::NotConfigured);
        assert!(output.starts_with("No maintenance settings found."));
    }

    #[test]
    fn test_format_maintenance_status_configured() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let status = MaintenanceStatus::Configured(MaintenanceFlag::enabled("Back soon", now));

        let output = format_maintenance_status(&status);

        assert!(output.contains("Enabled: Yes"));
        assert!(output.contains("Message: Back soon"));
        assert!(output.contains("Last updated: 2025-01-01T00:00:00+00:00"));
    }

    #[test]
    fn test_format_load_report_pluralizes() {
        let one = LoadReport {
            written: vec![DocumentPath::new("decision_trials", "a")],
            chunks: 1,
        };
        assert_eq!(
            format_load_report("decision trials", &one),
            "Seeded 1 decision trials in 1 batch"
        );

        let two = LoadReport {
            written: Vec::new(),
            chunks: 2,
        };
        assert_eq!(format_load_report("questions", &two), "Seeded 0 questions in 2 batches");
    }

    #[test]
    fn test_format_collection_status_aligns_counts() {
        let output = format_collection_status(&[
            CollectionStatus {
                collection: "ranks".to_string(),
                count: 10,
            },
            CollectionStatus {
                collection: "web_settings".to_string(),
                count: 1,
            },
        ]);

        assert!(output.contains("\n  ranks         10"));
        assert!(output.contains("\n  web_settings  1"));
    }
}
