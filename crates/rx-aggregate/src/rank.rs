//! Deterministic ordering of aggregated drug statistics.

use std::collections::BTreeMap;

use rx_model::{DrugStat, RankedEntry};

/// Produce the ranked report order: descending by total cost, ties broken
/// by drug name descending.
///
/// Pure function of the completed statistics map. The comparator reverses
/// the natural `(total_cost, drug_name)` tuple order, so it is a total
/// order and the output is fully deterministic. Costs compare by exact
/// decimal equality.
pub fn rank(stats: BTreeMap<String, DrugStat>) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = stats
        .into_iter()
        .map(|(drug_name, stat)| RankedEntry {
            drug_name,
            prescriber_count: stat.prescriber_count,
            total_cost: stat.total_cost,
        })
        .collect();
    entries.sort_by(|a, b| {
        (b.total_cost, b.drug_name.as_str()).cmp(&(a.total_cost, a.drug_name.as_str()))
    });
    entries
}
