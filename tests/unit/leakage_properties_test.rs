use proptest::prelude::*;

use leakage_calculator::calculator::{CalculationInput, LeakageCalculator};
use leakage_calculator::core::AppError;

/// Property-based tests for the leakage formulas
///
/// Validates, for every valid input:
/// - zero MRR leaks nothing
/// - chargebacks are 0.3% of MRR and identical under both processors
/// - the alternative never carries tax overhead
/// - the alternative recovers 20% of failed-payment loss
/// - totals are the sum of their components
/// - identical inputs give identical outputs

fn processor() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["stripe", "paypal", "paddle", "lemon", "Stripe", "LEMON"])
}

fn tolerance(mrr: f64) -> f64 {
    1e-9 * mrr.max(1.0)
}

proptest! {
    #[test]
    fn test_zero_mrr_leaks_nothing(
        processor in processor(),
        international in 0.0f64..=100.0,
        eu in 0.0f64..=100.0,
        failed in 0.0f64..=100.0
    ) {
        let calculator = LeakageCalculator::default();
        let report = calculator
            .compute(&CalculationInput::new(0.0, processor, international, eu, failed))
            .unwrap()
            .rounded();

        for breakdown in [report.current, report.alternative] {
            prop_assert_eq!(breakdown.payment_fees, 0.0);
            prop_assert_eq!(breakdown.fx_fees, 0.0);
            prop_assert_eq!(breakdown.failed_payments, 0.0);
            prop_assert_eq!(breakdown.tax_overhead, 0.0);
            prop_assert_eq!(breakdown.chargebacks, 0.0);
            prop_assert_eq!(breakdown.total, 0.0);
        }
        prop_assert_eq!(report.savings.total, 0.0);
        prop_assert_eq!(report.savings.percentage, 0.0);
        prop_assert_eq!(report.savings.annual, 0.0);
    }

    #[test]
    fn test_chargebacks_are_processor_independent(
        mrr in 0.0f64..10_000_000.0,
        processor in processor(),
        international in 0.0f64..=100.0,
        eu in 0.0f64..=100.0,
        failed in 0.0f64..=100.0
    ) {
        let calculator = LeakageCalculator::default();
        let report = calculator
            .compute(&CalculationInput::new(mrr, processor, international, eu, failed))
            .unwrap();

        prop_assert!((report.current.chargebacks - mrr * 0.003).abs() <= tolerance(mrr));
        prop_assert_eq!(report.alternative.chargebacks, report.current.chargebacks);
    }

    #[test]
    fn test_alternative_shape(
        mrr in 0.0f64..10_000_000.0,
        processor in processor(),
        international in 0.0f64..=100.0,
        eu in 0.0f64..=100.0,
        failed in 0.0f64..=100.0
    ) {
        let calculator = LeakageCalculator::default();
        let report = calculator
            .compute(&CalculationInput::new(mrr, processor, international, eu, failed))
            .unwrap();

        prop_assert_eq!(report.alternative.tax_overhead, 0.0);
        prop_assert!(
            (report.alternative.failed_payments - report.current.failed_payments * 0.8).abs()
                <= tolerance(mrr)
        );
    }

    #[test]
    fn test_totals_and_savings_are_consistent(
        mrr in 0.0f64..10_000_000.0,
        processor in processor(),
        international in 0.0f64..=100.0,
        eu in 0.0f64..=100.0,
        failed in 0.0f64..=100.0
    ) {
        let calculator = LeakageCalculator::default();
        let report = calculator
            .compute(&CalculationInput::new(mrr, processor, international, eu, failed))
            .unwrap();

        for breakdown in [report.current, report.alternative] {
            let sum = breakdown.payment_fees
                + breakdown.fx_fees
                + breakdown.failed_payments
                + breakdown.tax_overhead
                + breakdown.chargebacks;
            prop_assert!((breakdown.total - sum).abs() <= tolerance(mrr));
        }

        let expected = report.current.total - report.alternative.total;
        prop_assert!((report.savings.total - expected).abs() <= tolerance(mrr));
        prop_assert!((report.savings.annual - expected * 12.0).abs() <= 12.0 * tolerance(mrr));
    }

    #[test]
    fn test_identical_inputs_identical_outputs(
        mrr in 0.0f64..10_000_000.0,
        processor in processor(),
        international in 0.0f64..=100.0,
        eu in 0.0f64..=100.0,
        failed in 0.0f64..=100.0
    ) {
        let calculator = LeakageCalculator::default();
        let input = CalculationInput::new(mrr, processor, international, eu, failed);

        let first = calculator.compute(&input).unwrap().rounded();
        let second = calculator.compute(&input).unwrap().rounded();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_processors_never_compute(
        name in "[a-z]{1,12}",
        mrr in 0.0f64..1_000_000.0
    ) {
        let calculator = LeakageCalculator::default();
        prop_assume!(!calculator.rates().contains(&name));

        let result = calculator.compute(&CalculationInput::new(mrr, &name, 10.0, 10.0, 1.0));
        let is_unknown_processor = matches!(result, Err(AppError::UnknownProcessor { .. }));
        prop_assert!(is_unknown_processor);
    }
}
