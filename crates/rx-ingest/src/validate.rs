//! Record validation for raw prescription lines.

use rust_decimal::Decimal;

use rx_model::{ClaimRecord, FIELDS_PER_RECORD, RejectReason};

const ID_INDEX: usize = 0;
const DRUG_NAME_INDEX: usize = 3;
const DRUG_COST_INDEX: usize = 4;

/// Decide whether one split input line is a well-formed record.
///
/// A well-formed record has exactly [`FIELDS_PER_RECORD`] fields, and its
/// `id` and `drug_cost` fields each parse as a non-negative decimal number
/// (integer or fractional; zero is accepted). The prescriber name and drug
/// name fields are opaque and receive no further validation.
///
/// No side effects: the caller decides what to do with a reject.
pub fn validate_record(fields: &[String]) -> Result<ClaimRecord, RejectReason> {
    if fields.len() != FIELDS_PER_RECORD {
        return Err(RejectReason::FieldCount {
            found: fields.len(),
        });
    }
    let id = fields[ID_INDEX].trim();
    let id_value: Decimal = id.parse().map_err(|_| RejectReason::InvalidId)?;
    if id_value < Decimal::ZERO {
        return Err(RejectReason::NegativeId);
    }
    let cost: Decimal = fields[DRUG_COST_INDEX]
        .trim()
        .parse()
        .map_err(|_| RejectReason::InvalidCost)?;
    if cost < Decimal::ZERO {
        return Err(RejectReason::NegativeCost);
    }
    Ok(ClaimRecord {
        prescriber_id: id.to_string(),
        drug_name: fields[DRUG_NAME_INDEX].clone(),
        drug_cost: cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn accepts_well_formed_record() {
        let record = validate_record(&fields(&["1000000001", "Smith", "John", "AMBIEN", "100.50"]))
            .expect("valid record");
        assert_eq!(record.prescriber_id, "1000000001");
        assert_eq!(record.drug_name, "AMBIEN");
        assert_eq!(record.drug_cost.to_string(), "100.50");
    }

    #[test]
    fn accepts_zero_id_and_zero_cost() {
        let record =
            validate_record(&fields(&["0", "Smith", "John", "AMBIEN", "0"])).expect("zero values");
        assert_eq!(record.drug_cost, Decimal::ZERO);
    }

    #[test]
    fn accepts_fractional_id() {
        // The id check is numeric, not integral.
        assert!(validate_record(&fields(&["10.5", "Smith", "John", "AMBIEN", "1"])).is_ok());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            validate_record(&fields(&["1", "Smith", "John", "AMBIEN"])),
            Err(RejectReason::FieldCount { found: 4 })
        );
        assert_eq!(
            validate_record(&fields(&["1", "Smith", "John", "AMBIEN", "1.0", "extra"])),
            Err(RejectReason::FieldCount { found: 6 })
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert_eq!(
            validate_record(&fields(&["id", "Smith", "John", "AMBIEN", "1.0"])),
            Err(RejectReason::InvalidId)
        );
    }

    #[test]
    fn rejects_negative_id() {
        assert_eq!(
            validate_record(&fields(&["-1", "Smith", "John", "AMBIEN", "1.0"])),
            Err(RejectReason::NegativeId)
        );
    }

    #[test]
    fn rejects_non_numeric_cost() {
        assert_eq!(
            validate_record(&fields(&["1", "Smith", "John", "AMBIEN", "free"])),
            Err(RejectReason::InvalidCost)
        );
    }

    #[test]
    fn rejects_scientific_notation_cost() {
        assert_eq!(
            validate_record(&fields(&["1", "Smith", "John", "AMBIEN", "1e3"])),
            Err(RejectReason::InvalidCost)
        );
    }

    #[test]
    fn rejects_negative_cost() {
        assert_eq!(
            validate_record(&fields(&["1", "Smith", "John", "AMBIEN", "-0.01"])),
            Err(RejectReason::NegativeCost)
        );
    }

    #[test]
    fn rejects_header_line() {
        // A header row fails the numeric checks and is skipped like any
        // other malformed line.
        assert_eq!(
            validate_record(&fields(&[
                "id",
                "prescriber_last_name",
                "prescriber_first_name",
                "drug_name",
                "drug_cost",
            ])),
            Err(RejectReason::InvalidId)
        );
    }

    #[test]
    fn accepts_empty_name_fields() {
        // Name fields are opaque; emptiness is not checked.
        assert!(validate_record(&fields(&["1", "", "", "AMBIEN", "1.0"])).is_ok());
    }

    #[test]
    fn trims_numeric_fields_before_parsing() {
        let record = validate_record(&fields(&[" 1 ", "Smith", "John", "AMBIEN", " 2.50 "]))
            .expect("whitespace around numbers");
        assert_eq!(record.prescriber_id, "1");
        assert_eq!(record.drug_cost.to_string(), "2.50");
    }
}
