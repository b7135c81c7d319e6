//! Per-drug accumulation state.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use rx_model::{ClaimRecord, DrugStat};

/// Running per-drug statistics with prescriber de-duplication.
///
/// The ledger owns two maps keyed by drug name: the statistics themselves
/// and one set of prescriber ids per drug. The sets exist only so
/// `prescriber_count` stays exact under repeated prescribers; they are
/// dropped when the ledger is consumed and never appear in the report.
#[derive(Debug, Default)]
pub struct DrugLedger {
    stats: BTreeMap<String, DrugStat>,
    prescribers: BTreeMap<String, BTreeSet<String>>,
}

impl DrugLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one validated record into the running statistics.
    ///
    /// The first record for a drug creates its entry with one prescriber
    /// and the record's cost. Every later record adds its cost exactly;
    /// a prescriber id already seen for the drug leaves
    /// `prescriber_count` unchanged.
    pub fn accumulate(&mut self, record: ClaimRecord) {
        let ClaimRecord {
            prescriber_id,
            drug_name,
            drug_cost,
        } = record;
        let seen = self.prescribers.entry(drug_name.clone()).or_default();
        seen.insert(prescriber_id);
        let stat = self.stats.entry(drug_name).or_insert_with(|| DrugStat {
            prescriber_count: 0,
            total_cost: Decimal::ZERO,
        });
        stat.prescriber_count = seen.len();
        stat.total_cost += drug_cost;
    }

    /// Number of distinct drug names accumulated so far.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn get(&self, drug_name: &str) -> Option<&DrugStat> {
        self.stats.get(drug_name)
    }

    /// Exact sum of every per-drug total.
    pub fn grand_total(&self) -> Decimal {
        self.stats.values().map(|stat| stat.total_cost).sum()
    }

    /// Consume the ledger, keeping the statistics and dropping the
    /// prescriber sets.
    pub fn into_stats(self) -> BTreeMap<String, DrugStat> {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, drug: &str, cost: &str) -> ClaimRecord {
        ClaimRecord {
            prescriber_id: id.to_string(),
            drug_name: drug.to_string(),
            drug_cost: cost.parse().expect("decimal cost"),
        }
    }

    #[test]
    fn first_record_creates_entry() {
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "100.50"));
        let stat = ledger.get("AMBIEN").expect("entry exists");
        assert_eq!(stat.prescriber_count, 1);
        assert_eq!(stat.total_cost.to_string(), "100.50");
    }

    #[test]
    fn distinct_prescribers_are_counted() {
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "100.50"));
        ledger.accumulate(claim("2", "AMBIEN", "30.00"));
        let stat = ledger.get("AMBIEN").expect("entry exists");
        assert_eq!(stat.prescriber_count, 2);
        assert_eq!(stat.total_cost.to_string(), "130.50");
    }

    #[test]
    fn repeated_prescriber_adds_cost_but_not_count() {
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "10.50"));
        ledger.accumulate(claim("2", "AMBIEN", "5.25"));
        ledger.accumulate(claim("1", "AMBIEN", "3.00"));
        let stat = ledger.get("AMBIEN").expect("entry exists");
        assert_eq!(stat.prescriber_count, 2);
        assert_eq!(stat.total_cost.to_string(), "18.75");
    }

    #[test]
    fn same_prescriber_counts_once_per_drug() {
        // The same id prescribing two drugs is one prescriber in each set.
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "1.00"));
        ledger.accumulate(claim("1", "CHLORPROMAZINE", "2.00"));
        assert_eq!(ledger.get("AMBIEN").unwrap().prescriber_count, 1);
        assert_eq!(ledger.get("CHLORPROMAZINE").unwrap().prescriber_count, 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn fractional_additions_do_not_drift() {
        // 0.10 added one hundred times is exactly 10.00 in decimal.
        let mut ledger = DrugLedger::new();
        for index in 0..100 {
            ledger.accumulate(claim(&index.to_string(), "AMBIEN", "0.10"));
        }
        let stat = ledger.get("AMBIEN").expect("entry exists");
        assert_eq!(stat.total_cost.to_string(), "10.00");
        assert_eq!(stat.prescriber_count, 100);
    }

    #[test]
    fn grand_total_sums_all_drugs() {
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "10.50"));
        ledger.accumulate(claim("2", "CHLORPROMAZINE", "0.25"));
        assert_eq!(ledger.grand_total().to_string(), "10.75");
    }

    #[test]
    fn into_stats_keeps_every_drug() {
        let mut ledger = DrugLedger::new();
        ledger.accumulate(claim("1", "AMBIEN", "1.00"));
        ledger.accumulate(claim("2", "CHLORPROMAZINE", "2.00"));
        let stats = ledger.into_stats();
        assert_eq!(stats.len(), 2);
        assert!(stats.contains_key("AMBIEN"));
        assert!(stats.contains_key("CHLORPROMAZINE"));
    }
}
