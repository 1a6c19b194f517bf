//! Main rent ledger that coordinates houses, tenants, and payments

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use tracing::info;

use crate::dashboard::{self, HouseView, ViewFilter};
use crate::status::{self, MonthStatus, RentStatus};
use crate::traits::*;
use crate::types::*;
use crate::utils::format;

/// Rent ledger session holding the working copy of houses, tenants, and
/// payments on top of a storage backend
///
/// Mutations go to the store first; the working copy only changes for
/// records the store confirmed. Reads never touch the store, so queries
/// stay synchronous and cheap.
pub struct RentLedger<S: RentalStore> {
    pub(crate) store: S,
    pub(crate) config: RentalConfig,
    pub(crate) houses: Vec<House>,
    pub(crate) tenants: Vec<Tenant>,
    pub(crate) payments: Vec<Payment>,
    pub(crate) tenant_validator: Box<dyn TenantValidator>,
    pub(crate) payment_validator: Box<dyn PaymentValidator>,
}

impl<S: RentalStore> RentLedger<S> {
    /// Create a ledger with the given store and configuration
    pub fn new(store: S, config: RentalConfig) -> Self {
        Self {
            store,
            config,
            houses: Vec::new(),
            tenants: Vec::new(),
            payments: Vec::new(),
            tenant_validator: Box::new(DefaultTenantValidator),
            payment_validator: Box::new(DefaultPaymentValidator),
        }
    }

    /// Create a ledger with custom validators
    pub fn with_validators(
        store: S,
        config: RentalConfig,
        tenant_validator: Box<dyn TenantValidator>,
        payment_validator: Box<dyn PaymentValidator>,
    ) -> Self {
        Self {
            store,
            config,
            houses: Vec::new(),
            tenants: Vec::new(),
            payments: Vec::new(),
            tenant_validator,
            payment_validator,
        }
    }

    /// Hydrate the session from the store
    ///
    /// Replaces the working copy wholesale. Call it once at startup and
    /// again whenever a full refresh is wanted.
    pub async fn load(&mut self) -> RentalResult<()> {
        self.houses = self.store.list_houses().await?;
        self.tenants = self.store.list_tenants().await?;
        self.payments = self.store.list_payments().await?;
        info!(
            "Session loaded: {} houses, {} tenants, {} payments",
            self.houses.len(),
            self.tenants.len(),
            self.payments.len()
        );
        Ok(())
    }

    /// Configuration in effect for this ledger
    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    /// Houses in the working copy
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// Tenants in the working copy
    pub fn tenants(&self) -> &[Tenant] {
        &self.tenants
    }

    /// Payment rows in the working copy
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Find a house by ID
    pub fn find_house(&self, house_id: &str) -> Option<&House> {
        self.houses.iter().find(|house| house.id == house_id)
    }

    /// Find a tenant by ID
    pub fn find_tenant(&self, tenant_id: &str) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id == tenant_id)
    }

    /// The house a tenant currently occupies, if any
    pub fn house_of_tenant(&self, tenant_id: &str) -> Option<&House> {
        self.houses
            .iter()
            .find(|house| house.current_tenant_id.as_deref() == Some(tenant_id))
    }

    /// Resolve every house for the month `today` falls in
    pub fn house_views(&self, today: NaiveDate) -> Vec<HouseView> {
        dashboard::build_house_views(
            &self.houses,
            &self.tenants,
            &self.payments,
            self.config.rent_due_day,
            today,
        )
    }

    /// Resolve and filter houses for the dashboard
    pub fn filtered_house_views(&self, filter: &ViewFilter, today: NaiveDate) -> Vec<HouseView> {
        let views = self.house_views(today);
        dashboard::filter_house_views(&views, filter)
    }

    /// Tenants not occupying any house
    pub fn unassigned_tenants(&self) -> Vec<Tenant> {
        dashboard::unassigned_tenants(&self.tenants, &self.houses)
    }

    /// Occupied houses with rent still due for the month `today` falls in
    pub fn houses_with_rent_due(&self, today: NaiveDate) -> Vec<HouseView> {
        dashboard::rent_due_views(&self.house_views(today))
    }

    /// Total rent outstanding across those houses
    pub fn rent_due_total(&self, today: NaiveDate) -> BigDecimal {
        dashboard::total_monthly_rent(&self.houses_with_rent_due(today))
    }

    /// Derived status for one tenant in the month `today` falls in
    pub fn tenant_status(&self, tenant_id: &str, today: NaiveDate) -> RentalResult<RentStatus> {
        let tenant = self
            .find_tenant(tenant_id)
            .ok_or_else(|| RentalError::TenantNotFound(tenant_id.to_string()))?;
        let month = RentMonth::of(today);
        let payment = status::effective_payment(&self.payments, &tenant.id, month);
        Ok(status::derive_status(
            Some(tenant),
            payment,
            month,
            today,
            self.config.rent_due_day,
        ))
    }

    /// Payment rows for a tenant, in store order
    pub fn payments_for_tenant(&self, tenant_id: &str) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.tenant_id == tenant_id)
            .collect()
    }

    /// Month-by-month history for a tenant, newest month first
    pub fn payment_history(
        &self,
        tenant_id: &str,
        today: NaiveDate,
    ) -> RentalResult<Vec<MonthStatus>> {
        let tenant = self
            .find_tenant(tenant_id)
            .ok_or_else(|| RentalError::TenantNotFound(tenant_id.to_string()))?;
        Ok(status::payment_history(
            tenant,
            &self.payments,
            self.config.rent_due_day,
            today,
        ))
    }

    /// Compose the rent reminder message for a tenant, due in the month
    /// `today` falls in
    pub fn reminder_message(&self, tenant_id: &str, today: NaiveDate) -> RentalResult<String> {
        let tenant = self
            .find_tenant(tenant_id)
            .ok_or_else(|| RentalError::TenantNotFound(tenant_id.to_string()))?;
        let due_date = RentMonth::of(today).due_date(self.config.rent_due_day);
        Ok(format::reminder_message(
            &tenant.name,
            &tenant.rent_amount,
            due_date,
            &self.config.currency_symbol,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_store::MemoryStore;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_ledger_basic_operations() {
        let store = MemoryStore::with_default_houses();
        let mut ledger = RentLedger::new(store, RentalConfig::default());
        ledger.load().await.unwrap();

        assert_eq!(ledger.houses().len(), 6);
        assert!(ledger.tenants().is_empty());

        // Move a tenant in
        let tenant = ledger
            .add_tenant(NewTenant {
                name: "Anita Rao".to_string(),
                email: "anita@example.com".to_string(),
                phone: Some("9876543210".to_string()),
                work_info: "Nurse".to_string(),
                rent_amount: BigDecimal::from(3500),
                join_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                id_proof: true,
            })
            .await
            .unwrap();

        let house = ledger.assign_tenant("H3", &tenant.id).await.unwrap();
        assert_eq!(house.current_tenant_id.as_deref(), Some(tenant.id.as_str()));

        // Record March rent and check the derived status
        let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let payment = ledger
            .record_payment(PaymentInput {
                tenant_id: tenant.id.clone(),
                month: 3,
                year: 2024,
                amount_paid: BigDecimal::from(3500),
                paid_date: today,
            })
            .await
            .unwrap();

        assert_eq!(payment.house_id.as_deref(), Some("H3"));

        let status = ledger.tenant_status(&tenant.id, today).unwrap();
        assert_eq!(status.status, PaymentStatus::Paid);
    }
}
