//! Property-based tests for formula invariants.
//!
//! These verify relationships that should hold across the whole input
//! domain, not just at the documented reference points:
//! - GST exclusive/inclusive round-trips recover the net amount
//! - Mortgage totals stay self-consistent
//! - SIP at zero rate never grows
//! - Slab tax is continuous and monotone in income

use calcsuite_formulas::gst::{self, GstInput, GstTreatment};
use calcsuite_formulas::mortgage::{self, MortgageInput};
use calcsuite_formulas::paycheck::TaxRegime;
use calcsuite_formulas::percentage;
use calcsuite_formulas::sip::{self, SipInput};
use proptest::prelude::*;

proptest! {
    #[test]
    fn gst_round_trip_recovers_net(
        amount in 1.0_f64..1_000_000.0,
        rate in 0.0_f64..28.0,
    ) {
        // Tax an exclusive base, then treat the total as inclusive: the
        // extracted net must be the original base. Work on the
        // unrounded total to keep the property exact to fp tolerance.
        let exclusive = gst::breakdown(&GstInput {
            amount,
            rate_pct: rate,
            treatment: GstTreatment::Exclusive,
        }).unwrap();
        let total = amount * (1.0 + rate / 100.0);
        let inclusive = gst::breakdown(&GstInput {
            amount: total,
            rate_pct: rate,
            treatment: GstTreatment::Inclusive,
        }).unwrap();
        // Results are rounded to cents, so compare at cent precision.
        prop_assert!((inclusive.net_amount - (amount * 100.0).round() / 100.0).abs() <= 0.011);
        prop_assert!((exclusive.total_amount - (total * 100.0).round() / 100.0).abs() <= 0.011);
    }

    #[test]
    fn mortgage_identities_hold(
        home_price in 50_000.0_f64..2_000_000.0,
        down_fraction in 0.0_f64..1.0,
        rate in 0.0_f64..15.0,
        years in 1_u32..40,
    ) {
        let down_payment = (home_price * down_fraction).min(home_price);
        let result = mortgage::amortize(&MortgageInput {
            home_price,
            down_payment,
            annual_rate_pct: rate,
            years,
        }).unwrap();

        let n = f64::from(years * 12);
        // payment × n ≈ total payment (both sides rounded independently).
        prop_assert!((result.monthly_payment * n - result.total_payment).abs() <= n / 2.0 + 1.0);
        // Interest is never negative and totals always cover principal.
        prop_assert!(result.total_interest >= -1.0);
        prop_assert!(result.total_payment >= result.principal - 1.0);
    }

    #[test]
    fn sip_zero_rate_never_compounds(
        monthly in 1.0_f64..100_000.0,
        years in 1_u32..40,
    ) {
        let result = sip::project(&SipInput {
            monthly_investment: monthly,
            annual_return_pct: 0.0,
            years,
        }).unwrap();
        prop_assert_eq!(result.future_value, (monthly * f64::from(years * 12)).round());
        prop_assert_eq!(result.returns, 0.0);
    }

    #[test]
    fn sip_positive_rate_always_beats_invested(
        monthly in 1.0_f64..100_000.0,
        rate in 0.5_f64..30.0,
        years in 1_u32..40,
    ) {
        let result = sip::project(&SipInput {
            monthly_investment: monthly,
            annual_return_pct: rate,
            years,
        }).unwrap();
        prop_assert!(result.future_value >= result.invested);
    }

    #[test]
    fn slab_tax_is_monotone_and_continuous(income in 0.0_f64..5_000_000.0) {
        for regime in [TaxRegime::New, TaxRegime::Old] {
            let here = regime.slab_tax(income);
            let just_above = regime.slab_tax(income + 1.0);
            // Monotone: more income never means less slab tax.
            prop_assert!(just_above >= here);
            // Continuous: one rupee more moves tax by at most the top
            // marginal rate.
            prop_assert!(just_above - here <= 0.30 + 1e-9);
        }
    }

    #[test]
    fn percent_round_trips(value in -1_000.0_f64..1_000.0, pct in 0.0_f64..100.0) {
        let up = percentage::increase_by(value, pct);
        let expected = value * (1.0 + pct / 100.0);
        prop_assert!((up - expected).abs() < 1e-9);
        if value != 0.0 {
            // what_percent inverts percent_of.
            let part = percentage::percent_of(pct, value);
            let recovered = percentage::what_percent(part, value).unwrap();
            prop_assert!((recovered - pct).abs() < 1e-6);
        }
    }
}
