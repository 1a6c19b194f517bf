//! Dashboard views: houses joined with tenants and payment status

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::status::{derive_status, effective_payment, RentStatus};
use crate::types::{House, Payment, PaymentStatus, RentMonth, Tenant};

/// One dashboard card: a house resolved against tenants and payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseView {
    pub house: House,
    /// Occupying tenant, if any
    pub tenant: Option<Tenant>,
    /// Effective payment for the evaluated month, if any
    pub payment: Option<Payment>,
    /// Status derived for the evaluated month
    pub status: RentStatus,
}

impl HouseView {
    /// Display label for the card's status line
    pub fn status_label(&self) -> String {
        self.status.label(self.payment.as_ref())
    }

    /// Whether a rent reminder is appropriate for this house
    ///
    /// True for an occupied house whose rent is still due once `today` is
    /// past the due day. Paid and vacant houses never qualify.
    pub fn can_send_reminder(&self, today: NaiveDate, due_day: u32) -> bool {
        self.tenant.is_some() && self.status.status.is_due() && today.day() > due_day
    }
}

/// Status dimension of a dashboard filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Pass every house
    #[default]
    All,
    /// Pass houses whose derived status matches
    Only(PaymentStatus),
}

/// Dashboard filter: free-text tenant search combined with a status pick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Case-insensitive substring match on the tenant name; empty passes all
    pub search_term: String,
    pub status: StatusFilter,
}

impl ViewFilter {
    /// Whether a resolved house passes both filter dimensions
    pub fn matches(&self, view: &HouseView) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty() {
            match &view.tenant {
                Some(tenant) => {
                    if !tenant.name.to_lowercase().contains(&term) {
                        return false;
                    }
                }
                // A name search never matches a vacant house
                None => return false,
            }
        }

        match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => view.status.status == status,
        }
    }
}

/// Resolve every house against the tenant roster and payment rows for the
/// month `today` falls in
pub fn build_house_views(
    houses: &[House],
    tenants: &[Tenant],
    payments: &[Payment],
    due_day: u32,
    today: NaiveDate,
) -> Vec<HouseView> {
    let month = RentMonth::of(today);
    houses
        .iter()
        .map(|house| {
            let tenant = house
                .current_tenant_id
                .as_ref()
                .and_then(|tenant_id| tenants.iter().find(|tenant| &tenant.id == tenant_id));
            let payment = tenant.and_then(|tenant| effective_payment(payments, &tenant.id, month));
            let status = derive_status(tenant, payment, month, today, due_day);
            HouseView {
                house: house.clone(),
                tenant: tenant.cloned(),
                payment: payment.cloned(),
                status,
            }
        })
        .collect()
}

/// Apply a dashboard filter to resolved houses
pub fn filter_house_views(views: &[HouseView], filter: &ViewFilter) -> Vec<HouseView> {
    views
        .iter()
        .filter(|view| filter.matches(view))
        .cloned()
        .collect()
}

/// Tenants not currently occupying any house
pub fn unassigned_tenants(tenants: &[Tenant], houses: &[House]) -> Vec<Tenant> {
    tenants
        .iter()
        .filter(|tenant| {
            !houses
                .iter()
                .any(|house| house.current_tenant_id.as_deref() == Some(tenant.id.as_str()))
        })
        .cloned()
        .collect()
}

/// Occupied houses whose rent for the evaluated month is still due
pub fn rent_due_views(views: &[HouseView]) -> Vec<HouseView> {
    views
        .iter()
        .filter(|view| view.tenant.is_some() && view.status.status.is_due())
        .cloned()
        .collect()
}

/// Total monthly rent across the occupants of the given houses
///
/// Vacant entries contribute nothing. Feed it a due list to price a
/// collection round before recording it.
pub fn total_monthly_rent(views: &[HouseView]) -> BigDecimal {
    views
        .iter()
        .filter_map(|view| view.tenant.as_ref())
        .map(|tenant| &tenant.rent_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    const DUE_DAY: u32 = 5;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn house(id: &str, number: &str, tenant_id: Option<&str>) -> House {
        let mut house = House::new(id.to_string(), number.to_string());
        house.current_tenant_id = tenant_id.map(str::to_string);
        house
    }

    fn tenant(id: &str, name: &str) -> Tenant {
        let now = chrono::Utc::now().naive_utc();
        Tenant {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: Some("9876543210".to_string()),
            work_info: "Shop owner".to_string(),
            rent_amount: BigDecimal::from(3000),
            join_date: date(2023, 6, 1),
            id_proof: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn paid_row(tenant_id: &str, month: u32, year: i32, paid: NaiveDate) -> Payment {
        let now = chrono::Utc::now().naive_utc();
        Payment {
            id: format!("pay-{}", tenant_id),
            tenant_id: tenant_id.to_string(),
            house_id: None,
            month,
            year,
            paid_date: Some(paid),
            amount_paid: BigDecimal::from(3000),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_views() -> Vec<HouseView> {
        let houses = vec![
            house("H3", "3", Some("t1")),
            house("H4", "4", Some("t2")),
            house("H5", "5", None),
        ];
        let tenants = vec![tenant("t1", "Anita Rao"), tenant("t2", "Vikram Shetty")];
        let payments = vec![paid_row("t1", 3, 2024, date(2024, 3, 2))];
        build_house_views(&houses, &tenants, &payments, DUE_DAY, date(2024, 3, 10))
    }

    #[test]
    fn test_views_resolve_tenant_and_status() {
        let views = sample_views();
        assert_eq!(views.len(), 3);

        assert_eq!(views[0].tenant.as_ref().unwrap().id, "t1");
        assert_eq!(views[0].status.status, PaymentStatus::Paid);
        assert_eq!(views[0].status_label(), "Paid on 02 Mar 2024");

        assert_eq!(views[1].status.status, PaymentStatus::Overdue);

        assert!(views[2].tenant.is_none());
        assert_eq!(views[2].status.status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_search_is_case_insensitive_and_skips_vacant() {
        let views = sample_views();
        let filter = ViewFilter {
            search_term: "aNiTa".to_string(),
            status: StatusFilter::All,
        };

        let filtered = filter_house_views(&views, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].house.id, "H3");
    }

    #[test]
    fn test_search_and_status_compose() {
        let views = sample_views();
        let filter = ViewFilter {
            search_term: "anita".to_string(),
            status: StatusFilter::Only(PaymentStatus::Overdue),
        };
        assert!(filter_house_views(&views, &filter).is_empty());

        let filter = ViewFilter {
            search_term: String::new(),
            status: StatusFilter::Only(PaymentStatus::Overdue),
        };
        let filtered = filter_house_views(&views, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].house.id, "H4");
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let views = sample_views();
        assert_eq!(filter_house_views(&views, &ViewFilter::default()).len(), 3);
    }

    #[test]
    fn test_unassigned_tenants() {
        let houses = vec![house("H3", "3", Some("t1")), house("H5", "5", None)];
        let tenants = vec![tenant("t1", "Anita Rao"), tenant("t3", "Ravi Kumar")];

        let unassigned = unassigned_tenants(&tenants, &houses);
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].id, "t3");
    }

    #[test]
    fn test_rent_due_skips_paid_and_vacant() {
        let views = sample_views();
        let due = rent_due_views(&views);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].house.id, "H4");
    }

    #[test]
    fn test_reminder_gate_skips_paid_and_vacant() {
        let views = sample_views();
        let today = date(2024, 3, 10);

        assert!(!views[0].can_send_reminder(today, DUE_DAY));
        assert!(views[1].can_send_reminder(today, DUE_DAY));
        assert!(!views[2].can_send_reminder(today, DUE_DAY));
    }

    #[test]
    fn test_reminder_gate_waits_for_due_day() {
        let houses = vec![house("H3", "3", Some("t1"))];
        let tenants = vec![tenant("t1", "Anita Rao")];

        // Rent not yet late on the 3rd, so no reminder either
        let today = date(2024, 3, 3);
        let views = build_house_views(&houses, &tenants, &[], DUE_DAY, today);
        assert_eq!(views[0].status.status, PaymentStatus::Unpaid);
        assert!(!views[0].can_send_reminder(today, DUE_DAY));

        let today = date(2024, 3, 10);
        let views = build_house_views(&houses, &tenants, &[], DUE_DAY, today);
        assert_eq!(views[0].status.status, PaymentStatus::Overdue);
        assert!(views[0].can_send_reminder(today, DUE_DAY));
    }

    #[test]
    fn test_total_monthly_rent_skips_vacant_houses() {
        let views = sample_views();
        assert_eq!(total_monthly_rent(&views), BigDecimal::from(6000));

        let due = rent_due_views(&views);
        assert_eq!(total_monthly_rent(&due), BigDecimal::from(3000));

        assert_eq!(total_monthly_rent(&[]), BigDecimal::from(0));
    }
}
