use crate::domain::model::{Condition, PropertyRecord, PropertyType, ValuationResult};
use crate::utils::error::{Result, ValuadorError};

// Fixed band around the suggested price, centered on the price itself.
const RANGE_LOW_FACTOR: f64 = 0.92;
const RANGE_HIGH_FACTOR: f64 = 1.08;

fn type_factor(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::House => 1.05,
        PropertyType::Land => 0.85,
        PropertyType::Apartment => 1.0,
    }
}

fn condition_factor(condition: Condition) -> f64 {
    match condition {
        Condition::Low => 0.9,
        Condition::High => 1.1,
        Condition::Medium => 1.0,
    }
}

/// Computes the suggested price and its band from a normalized record.
///
/// Requires the area and at least 2 positive comparables; anything less
/// fails with [`ValuadorError::InsufficientData`] and produces no partial
/// result.
pub fn compute(record: &PropertyRecord) -> Result<ValuationResult> {
    let comps = record.positive_comparables();
    if record.area_m2 == 0.0 || record.area_m2.is_nan() || comps.len() < 2 {
        return Err(ValuadorError::InsufficientData);
    }

    let average_comparable = comps.iter().sum::<f64>() / comps.len() as f64;
    let suggested_price =
        average_comparable * type_factor(record.property_type) * condition_factor(record.condition);

    Ok(ValuationResult {
        average_comparable,
        suggested_price,
        range_low: suggested_price * RANGE_LOW_FACTOR,
        range_high: suggested_price * RANGE_HIGH_FACTOR,
    })
}

/// Formats an amount in the es-MX / MXN style the tool renders everywhere:
/// `$` prefix, comma-grouped thousands, no fractional digits. NaN renders
/// as `-`.
pub fn format_money(value: f64) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    if value < 0.0 && rounded > 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn type_noun(property_type: PropertyType) -> &'static str {
    property_type.as_keyword()
}

fn condition_phrase(condition: Condition) -> &'static str {
    match condition {
        Condition::High => "en excelente estado",
        Condition::Medium => "en estado normal",
        Condition::Low => "que requiere reforma",
    }
}

/// Renders the advice sentence shown under the results.
pub fn advisory_text(record: &PropertyRecord, result: &ValuationResult) -> String {
    format!(
        "Este rango considera un {} {}, basado en tus comparables. \
         Si quieres vender rápido, acércate al rango bajo ({}). \
         Si puedes esperar y la demanda es alta, puedes acercarte al rango alto ({}).",
        type_noun(record.property_type),
        condition_phrase(record.condition),
        format_money(result.range_low),
        format_money(result.range_high),
    )
}

/// Renders the one-line result summary.
pub fn summary_text(record: &PropertyRecord, result: &ValuationResult) -> String {
    let name = if record.name.is_empty() {
        "Esta propiedad"
    } else {
        &record.name
    };
    format!(
        "{} con {} m² tiene un precio sugerido de {} basado en los comparables que ingresaste.",
        name,
        record.area_m2,
        format_money(result.suggested_price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Condition, PropertyType};

    fn record(
        area_m2: f64,
        property_type: PropertyType,
        condition: Condition,
        comparables: [f64; 3],
    ) -> PropertyRecord {
        PropertyRecord {
            name: String::new(),
            area_m2,
            property_type,
            condition,
            comparables,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_apartment_medium_baseline() {
        let r = record(
            100.0,
            PropertyType::Apartment,
            Condition::Medium,
            [1_000_000.0, 1_100_000.0, 0.0],
        );
        let result = compute(&r).unwrap();
        assert_close(result.average_comparable, 1_050_000.0);
        assert_close(result.suggested_price, 1_050_000.0);
        assert_close(result.range_low, 966_000.0);
        assert_close(result.range_high, 1_134_000.0);
    }

    #[test]
    fn test_house_factor() {
        let r = record(
            100.0,
            PropertyType::House,
            Condition::Medium,
            [1_000_000.0, 1_100_000.0, 0.0],
        );
        let result = compute(&r).unwrap();
        assert_close(result.suggested_price, 1_102_500.0);
    }

    #[test]
    fn test_land_low_factors_multiply() {
        let r = record(
            100.0,
            PropertyType::Land,
            Condition::Low,
            [1_000_000.0, 1_100_000.0, 0.0],
        );
        let result = compute(&r).unwrap();
        assert_close(result.suggested_price, 1_050_000.0 * 0.85 * 0.9);
    }

    #[test]
    fn test_non_positive_comparable_is_excluded_from_average() {
        let r = record(
            100.0,
            PropertyType::Apartment,
            Condition::Medium,
            [0.0, 500_000.0, 500_000.0],
        );
        let result = compute(&r).unwrap();
        assert_close(result.average_comparable, 500_000.0);
    }

    #[test]
    fn test_missing_area_fails() {
        let r = record(
            0.0,
            PropertyType::Apartment,
            Condition::Medium,
            [1.0, 2.0, 3.0],
        );
        assert!(matches!(
            compute(&r),
            Err(ValuadorError::InsufficientData)
        ));
    }

    #[test]
    fn test_single_comparable_fails() {
        let r = record(
            50.0,
            PropertyType::Apartment,
            Condition::Medium,
            [10.0, 0.0, 0.0],
        );
        assert!(matches!(
            compute(&r),
            Err(ValuadorError::InsufficientData)
        ));
    }

    #[test]
    fn test_two_comparables_suffice() {
        let r = record(
            50.0,
            PropertyType::Apartment,
            Condition::Medium,
            [10.0, 20.0, 0.0],
        );
        assert!(compute(&r).is_ok());
    }

    #[test]
    fn test_range_ordering_and_ratio() {
        let r = record(
            80.0,
            PropertyType::House,
            Condition::High,
            [900_000.0, 950_000.0, 1_000_000.0],
        );
        let result = compute(&r).unwrap();
        assert!(result.range_low < result.suggested_price);
        assert!(result.suggested_price < result.range_high);
        assert_close(result.range_high / result.range_low, 1.08 / 0.92);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1_050_000.0), "$1,050,000");
        assert_eq!(format_money(966_000.0), "$966,000");
        assert_eq!(format_money(500.4), "$500");
        assert_eq!(format_money(500.5), "$501");
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(f64::NAN), "-");
    }

    #[test]
    fn test_advisory_text_exact_sentence() {
        let r = record(
            100.0,
            PropertyType::Apartment,
            Condition::Medium,
            [1_000_000.0, 1_100_000.0, 0.0],
        );
        let result = compute(&r).unwrap();
        assert_eq!(
            advisory_text(&r, &result),
            "Este rango considera un departamento en estado normal, basado en tus comparables. \
             Si quieres vender rápido, acércate al rango bajo ($966,000). \
             Si puedes esperar y la demanda es alta, puedes acercarte al rango alto ($1,134,000)."
        );
    }

    #[test]
    fn test_summary_text_uses_placeholder_name() {
        let r = record(
            100.0,
            PropertyType::Apartment,
            Condition::Medium,
            [1_000_000.0, 1_100_000.0, 0.0],
        );
        let result = compute(&r).unwrap();
        assert_eq!(
            summary_text(&r, &result),
            "Esta propiedad con 100 m² tiene un precio sugerido de $1,050,000 \
             basado en los comparables que ingresaste."
        );

        let named = PropertyRecord {
            name: "Depto Roma".to_string(),
            ..r
        };
        assert!(summary_text(&named, &result).starts_with("Depto Roma con 100 m²"));
    }
}
