use crate::enums::{InstanceTenancy, OfferingClass, OfferingType, ReservedDuration};
use crate::instance_types::InstanceTypeSpec;
use crate::products::ProductDescription;
use crate::types::RecurringCharge;

const DEDICATED_PREMIUM: f64 = 1.1;
// Share of the term paid up front by a Partial Upfront offering.
const PARTIAL_UPFRONT_SHARE: f64 = 0.5;
// Deferring payment costs a little more than paying everything up front.
const PARTIAL_UPFRONT_MARKUP: f64 = 1.02;
const NO_UPFRONT_MARKUP: f64 = 1.05;

/// Price terms of one offering.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTerms {
    pub fixed_price: f64,
    pub usage_price: f64,
    pub recurring_charges: Vec<RecurringCharge>,
}

/// Effective hourly rate of a reservation relative to on-demand.
fn reserved_discount(class: OfferingClass, duration: ReservedDuration) -> f64 {
    match (class, duration) {
        (OfferingClass::Standard, ReservedDuration::OneYear) => 0.6,
        (OfferingClass::Standard, ReservedDuration::ThreeYear) => 0.4,
        (OfferingClass::Convertible, ReservedDuration::OneYear) => 0.7,
        (OfferingClass::Convertible, ReservedDuration::ThreeYear) => 0.5,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn price_terms(
    spec: &InstanceTypeSpec,
    product: ProductDescription,
    tenancy: InstanceTenancy,
    class: OfferingClass,
    offering_type: OfferingType,
    duration: ReservedDuration,
) -> PriceTerms {
    let mut hourly = spec.on_demand_hourly * product.license_multiplier();
    if tenancy == InstanceTenancy::Dedicated {
        hourly *= DEDICATED_PREMIUM;
    }
    hourly *= reserved_discount(class, duration);
    let hours = duration.hours() as f64;
    let term_total = hourly * hours;

    match offering_type {
        OfferingType::AllUpfront => PriceTerms {
            fixed_price: round_to(term_total, 2),
            usage_price: 0.0,
            recurring_charges: Vec::new(),
        },
        OfferingType::PartialUpfront => {
            let term_total = term_total * PARTIAL_UPFRONT_MARKUP;
            let upfront = term_total * PARTIAL_UPFRONT_SHARE;
            let recurring_hourly = (term_total - upfront) / hours;
            PriceTerms {
                fixed_price: round_to(upfront, 2),
                usage_price: 0.0,
                recurring_charges: vec![RecurringCharge::hourly(round_to(recurring_hourly, 4))],
            }
        }
        OfferingType::NoUpfront => PriceTerms {
            fixed_price: 0.0,
            usage_price: 0.0,
            recurring_charges: vec![RecurringCharge::hourly(round_to(
                hourly * NO_UPFRONT_MARKUP,
                4,
            ))],
        },
    }
}
