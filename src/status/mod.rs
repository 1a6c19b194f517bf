//! Payment status derivation for tenants and rent months

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{Payment, PaymentStatus, RentMonth, Tenant};
use crate::utils::format::format_date;

/// Derived rent status for one tenant and one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentStatus {
    /// The derived payment status
    pub status: PaymentStatus,
    /// Whether the unpaid state comes from the new-tenant grace rule
    pub new_tenant: bool,
}

impl RentStatus {
    /// Display label for a dashboard card or history row
    pub fn label(&self, payment: Option<&Payment>) -> String {
        match self.status {
            PaymentStatus::Paid => match payment.and_then(|payment| payment.paid_date) {
                Some(date) => format!("Paid on {}", format_date(date)),
                None => "Paid".to_string(),
            },
            PaymentStatus::Overdue => "Rent Overdue".to_string(),
            PaymentStatus::Unpaid if self.new_tenant => "Rent Unpaid (New Tenant)".to_string(),
            PaymentStatus::Unpaid => "Rent Unpaid".to_string(),
        }
    }
}

/// One month of a tenant's payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthStatus {
    /// The month evaluated
    pub month: RentMonth,
    /// Status derived for that month
    pub status: RentStatus,
    /// The effective payment row, if any
    pub payment: Option<Payment>,
}

/// Derive the payment status for a tenant and rent month
///
/// `payment` must be the effective payment for that tenant and month, see
/// [`effective_payment`]. `today` anchors the overdue rules. Rules, in
/// order: no tenant is Unpaid (vacancy display), a payment with a paid
/// date is Paid, a tenant who joined this month after the due day is
/// Unpaid for the whole month (grace, never escalates), a finished month
/// is Overdue, the current month is Overdue once `today` passes the due
/// day, and everything else (future months included) is Unpaid.
pub fn derive_status(
    tenant: Option<&Tenant>,
    payment: Option<&Payment>,
    month: RentMonth,
    today: NaiveDate,
    due_day: u32,
) -> RentStatus {
    let tenant = match tenant {
        Some(tenant) => tenant,
        None => {
            return RentStatus {
                status: PaymentStatus::Unpaid,
                new_tenant: false,
            }
        }
    };

    if payment.is_some_and(|payment| payment.paid_date.is_some()) {
        return RentStatus {
            status: PaymentStatus::Paid,
            new_tenant: false,
        };
    }

    if month.contains(tenant.join_date) && tenant.join_date.day() > due_day {
        return RentStatus {
            status: PaymentStatus::Unpaid,
            new_tenant: true,
        };
    }

    let current = RentMonth::of(today);
    if month < current || (month == current && today.day() > due_day) {
        return RentStatus {
            status: PaymentStatus::Overdue,
            new_tenant: false,
        };
    }

    RentStatus {
        status: PaymentStatus::Unpaid,
        new_tenant: false,
    }
}

/// Select the payment row that settles a tenant's month
///
/// Re-records insert fresh rows, so several rows can cover one month. The
/// row with the latest paid date wins; rows without a paid date sort last.
/// Exact ties fall back to creation time, then id.
pub fn effective_payment<'a>(
    payments: &'a [Payment],
    tenant_id: &str,
    month: RentMonth,
) -> Option<&'a Payment> {
    payments
        .iter()
        .filter(|payment| payment.tenant_id == tenant_id && payment.rent_month() == month)
        .max_by(|a, b| {
            a.paid_date
                .cmp(&b.paid_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        })
}

/// Month-by-month history for a tenant, newest month first
///
/// Covers every month from the tenant's join month through the current
/// one. A join date in the future yields an empty history.
pub fn payment_history(
    tenant: &Tenant,
    payments: &[Payment],
    due_day: u32,
    today: NaiveDate,
) -> Vec<MonthStatus> {
    let mut history: Vec<MonthStatus> = RentMonth::of(tenant.join_date)
        .through(RentMonth::of(today))
        .into_iter()
        .map(|month| {
            let payment = effective_payment(payments, &tenant.id, month);
            let status = derive_status(Some(tenant), payment, month, today, due_day);
            MonthStatus {
                month,
                status,
                payment: payment.cloned(),
            }
        })
        .collect();
    history.reverse();
    history
}
