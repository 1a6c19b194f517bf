//! Payment recording operations

use std::collections::HashSet;
use tracing::{info, warn};

use crate::ledger::RentLedger;
use crate::traits::RentalStore;
use crate::types::*;

impl<S: RentalStore> RentLedger<S> {
    /// Record one rent payment
    ///
    /// The tenant's current house, if any, is stamped onto the row. On
    /// success the confirmed row replaces any older session rows for the
    /// same tenant and month; the store keeps the historical rows.
    pub async fn record_payment(&mut self, input: PaymentInput) -> RentalResult<Payment> {
        let house_id = match self.find_tenant(&input.tenant_id) {
            Some(tenant) => self.house_of_tenant(&tenant.id).map(|house| house.id.clone()),
            None => return Err(RentalError::TenantNotFound(input.tenant_id)),
        };

        let row = NewPayment {
            tenant_id: input.tenant_id,
            house_id,
            month: input.month,
            year: input.year,
            paid_date: Some(input.paid_date),
            amount_paid: input.amount_paid,
        };
        self.payment_validator.validate_payment(&row)?;

        let created = self.store.create_payment(&row).await?;
        info!(
            "Recorded payment for tenant {} covering {}/{}",
            created.tenant_id, created.month, created.year
        );
        self.absorb_payment(created.clone());
        Ok(created)
    }

    /// Record a batch of payments in one store submission
    ///
    /// An empty batch is a no-op. Entries are validated as a set before
    /// anything is sent. The store settles every entry and returns the
    /// rows it created; one reconciliation pass applies those to the
    /// session, and entries with no created row are reported through
    /// [`RentalError::PartialBatch`] together with the rows that did make
    /// it. When the whole call fails the session is left untouched.
    pub async fn record_payments(
        &mut self,
        entries: Vec<BulkPaymentEntry>,
    ) -> RentalResult<Vec<Payment>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        self.payment_validator.validate_batch(&entries)?;
        for entry in &entries {
            if self.find_tenant(&entry.tenant_id).is_none() {
                return Err(RentalError::TenantNotFound(entry.tenant_id.clone()));
            }
            if let Some(house_id) = &entry.house_id {
                if self.find_house(house_id).is_none() {
                    return Err(RentalError::HouseNotFound(house_id.clone()));
                }
            }
        }

        let rows: Vec<NewPayment> = entries.iter().map(BulkPaymentEntry::to_new_payment).collect();
        let created = self.store.create_payments(&rows).await?;

        // Reconcile by (tenant, month, year): entries without a created row failed
        let mut created_keys = HashSet::new();
        for payment in &created {
            created_keys.insert((payment.tenant_id.clone(), payment.month, payment.year));
            self.absorb_payment(payment.clone());
        }

        let failed: Vec<BulkPaymentEntry> = entries
            .into_iter()
            .filter(|entry| {
                !created_keys.contains(&(entry.tenant_id.clone(), entry.month, entry.year))
            })
            .collect();

        if !failed.is_empty() {
            warn!(
                "Bulk payment partially failed: {} recorded, {} failed",
                created.len(),
                failed.len()
            );
            return Err(RentalError::PartialBatch(BatchFailure {
                recorded: created,
                failed,
            }));
        }

        info!("Recorded {} bulk payments", created.len());
        Ok(created)
    }

    /// Replace session rows for the payment's tenant and month with the
    /// confirmed row
    pub(crate) fn absorb_payment(&mut self, payment: Payment) {
        self.payments.retain(|row| {
            !(row.tenant_id == payment.tenant_id
                && row.month == payment.month
                && row.year == payment.year)
        });
        self.payments.insert(0, payment);
    }
}
