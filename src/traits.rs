//! Traits for storage abstraction and extensibility

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::collections::HashSet;

use crate::types::*;

/// Persistence abstraction for the rental system
///
/// This trait allows the rental core to work with any storage backend
/// (PostgreSQL, a hosted REST service, in-memory, etc.) by implementing
/// these methods. Houses form a fixed roster, so there is no create call
/// for them; seeding the roster is the backend's concern.
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// List every house in the roster
    async fn list_houses(&self) -> RentalResult<Vec<House>>;

    /// List all tenants
    async fn list_tenants(&self) -> RentalResult<Vec<Tenant>>;

    /// List all payment rows
    async fn list_payments(&self) -> RentalResult<Vec<Payment>>;

    /// Create a tenant, returning the stored row with identity assigned
    async fn create_tenant(&mut self, tenant: &NewTenant) -> RentalResult<Tenant>;

    /// Delete a tenant; fails while other records still reference it
    async fn delete_tenant(&mut self, tenant_id: &str) -> RentalResult<()>;

    /// Set or clear a house's occupant, returning the updated house
    async fn update_house_occupant(
        &mut self,
        house_id: &str,
        tenant_id: Option<&str>,
    ) -> RentalResult<House>;

    /// Insert a single payment row, returning the stored row
    async fn create_payment(&mut self, payment: &NewPayment) -> RentalResult<Payment>;

    /// Insert a batch of payment rows, returning the rows actually created
    ///
    /// An empty batch returns an empty list. On partial success the
    /// returned list is the created subset; it is never an error for some
    /// entries to be missing from it.
    async fn create_payments(&mut self, payments: &[NewPayment]) -> RentalResult<Vec<Payment>>;
}

/// Trait for implementing custom tenant validation rules
pub trait TenantValidator: Send + Sync {
    /// Validate tenant input before it is sent to the store
    fn validate_tenant(&self, tenant: &NewTenant) -> RentalResult<()>;
}

/// Trait for implementing custom payment validation rules
pub trait PaymentValidator: Send + Sync {
    /// Validate a payment row before it is sent to the store
    fn validate_payment(&self, payment: &NewPayment) -> RentalResult<()>;

    /// Validate a bulk submission before it is sent to the store
    fn validate_batch(&self, entries: &[BulkPaymentEntry]) -> RentalResult<()>;
}

/// Default tenant validator with basic rules
pub struct DefaultTenantValidator;

impl TenantValidator for DefaultTenantValidator {
    fn validate_tenant(&self, tenant: &NewTenant) -> RentalResult<()> {
        if tenant.name.trim().is_empty() {
            return Err(RentalError::Validation(
                "Tenant name cannot be empty".to_string(),
            ));
        }

        if tenant.email.trim().is_empty() {
            return Err(RentalError::Validation(
                "Tenant email cannot be empty".to_string(),
            ));
        }

        if tenant.rent_amount <= BigDecimal::from(0) {
            return Err(RentalError::Validation(
                "Rent amount must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default payment validator with basic rules
pub struct DefaultPaymentValidator;

impl PaymentValidator for DefaultPaymentValidator {
    fn validate_payment(&self, payment: &NewPayment) -> RentalResult<()> {
        if payment.tenant_id.trim().is_empty() {
            return Err(RentalError::Validation(
                "Payment must reference a tenant".to_string(),
            ));
        }

        if payment.amount_paid <= BigDecimal::from(0) {
            return Err(RentalError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }

        if !(1..=12).contains(&payment.month) {
            return Err(RentalError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                payment.month
            )));
        }

        if !(2000..=2100).contains(&payment.year) {
            return Err(RentalError::Validation(format!(
                "Year must be between 2000 and 2100, got {}",
                payment.year
            )));
        }

        if payment.paid_date.is_none() {
            return Err(RentalError::Validation(
                "Recorded payment must carry a paid date".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_batch(&self, entries: &[BulkPaymentEntry]) -> RentalResult<()> {
        let mut seen = HashSet::new();
        for entry in entries {
            self.validate_payment(&entry.to_new_payment())?;

            if !seen.insert((entry.tenant_id.clone(), entry.month, entry.year)) {
                return Err(RentalError::Validation(format!(
                    "Duplicate payment entry for tenant {} in {}/{}",
                    entry.tenant_id, entry.month, entry.year
                )));
            }
        }
        Ok(())
    }
}
