//! In-memory store implementation for testing and development

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::traits::RentalStore;
use crate::types::*;

/// In-memory store implementation for testing and development
///
/// Listings come back the way a hosted backend orders them: houses by id,
/// tenants and payments newest first. The house to tenant reference is
/// enforced on deletion with the backend's foreign key wording, and
/// deleting a tenant cascades to its payment rows. `reject_payments_for`
/// and `reject_delete_of` inject failures so partial-success paths can be
/// exercised.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    houses: Arc<RwLock<HashMap<String, House>>>,
    tenants: Arc<RwLock<HashMap<String, Tenant>>>,
    payments: Arc<RwLock<HashMap<String, Payment>>>,
    rejected_payment_tenants: Arc<RwLock<HashSet<String>>>,
    rejected_deletes: Arc<RwLock<HashSet<String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            houses: Arc::new(RwLock::new(HashMap::new())),
            tenants: Arc::new(RwLock::new(HashMap::new())),
            payments: Arc::new(RwLock::new(HashMap::new())),
            rejected_payment_tenants: Arc::new(RwLock::new(HashSet::new())),
            rejected_deletes: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Create a store seeded with the standard house roster
    pub fn with_default_houses() -> Self {
        let store = Self::new();
        for number in ["3", "4", "5", "6", "8", "9"] {
            store.insert_house(House::new(format!("H{}", number), number.to_string()));
        }
        store
    }

    /// Add a house to the roster
    pub fn insert_house(&self, house: House) {
        self.houses.write().unwrap().insert(house.id.clone(), house);
    }

    /// Make payment inserts fail for a tenant
    pub fn reject_payments_for(&self, tenant_id: &str) {
        self.rejected_payment_tenants
            .write()
            .unwrap()
            .insert(tenant_id.to_string());
    }

    /// Make deletion fail for a tenant, as an uncleared reference would
    pub fn reject_delete_of(&self, tenant_id: &str) {
        self.rejected_deletes
            .write()
            .unwrap()
            .insert(tenant_id.to_string());
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.houses.write().unwrap().clear();
        self.tenants.write().unwrap().clear();
        self.payments.write().unwrap().clear();
        self.rejected_payment_tenants.write().unwrap().clear();
        self.rejected_deletes.write().unwrap().clear();
    }

    fn accepts_payment_for(&self, tenant_id: &str) -> bool {
        !self
            .rejected_payment_tenants
            .read()
            .unwrap()
            .contains(tenant_id)
            && self.tenants.read().unwrap().contains_key(tenant_id)
    }

    fn insert_payment_row(&self, payment: &NewPayment) -> Payment {
        let now = chrono::Utc::now().naive_utc();
        let stored = Payment {
            id: Uuid::new_v4().to_string(),
            tenant_id: payment.tenant_id.clone(),
            house_id: payment.house_id.clone(),
            month: payment.month,
            year: payment.year,
            paid_date: payment.paid_date,
            amount_paid: payment.amount_paid.clone(),
            created_at: now,
            updated_at: now,
        };
        self.payments
            .write()
            .unwrap()
            .insert(stored.id.clone(), stored.clone());
        stored
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RentalStore for MemoryStore {
    async fn list_houses(&self) -> RentalResult<Vec<House>> {
        let mut houses: Vec<House> = self.houses.read().unwrap().values().cloned().collect();
        houses.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(houses)
    }

    async fn list_tenants(&self) -> RentalResult<Vec<Tenant>> {
        let mut tenants: Vec<Tenant> = self.tenants.read().unwrap().values().cloned().collect();
        tenants.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(tenants)
    }

    async fn list_payments(&self) -> RentalResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self.payments.read().unwrap().values().cloned().collect();
        payments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(payments)
    }

    async fn create_tenant(&mut self, tenant: &NewTenant) -> RentalResult<Tenant> {
        let now = chrono::Utc::now().naive_utc();
        let stored = Tenant {
            id: Uuid::new_v4().to_string(),
            name: tenant.name.clone(),
            email: tenant.email.clone(),
            phone: tenant.phone.clone(),
            work_info: tenant.work_info.clone(),
            rent_amount: tenant.rent_amount.clone(),
            join_date: tenant.join_date,
            id_proof: tenant.id_proof,
            created_at: now,
            updated_at: now,
        };
        self.tenants
            .write()
            .unwrap()
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete_tenant(&mut self, tenant_id: &str) -> RentalResult<()> {
        if self.rejected_deletes.read().unwrap().contains(tenant_id) {
            return Err(RentalError::Store(
                "update or delete on table \"tenants\" violates foreign key constraint \"payments_tenant_id_fkey\" on table \"payments\"".to_string(),
            ));
        }

        let referenced = self
            .houses
            .read()
            .unwrap()
            .values()
            .any(|house| house.current_tenant_id.as_deref() == Some(tenant_id));
        if referenced {
            return Err(RentalError::Store(
                "update or delete on table \"tenants\" violates foreign key constraint \"houses_current_tenant_id_fkey\" on table \"houses\"".to_string(),
            ));
        }

        if self.tenants.write().unwrap().remove(tenant_id).is_none() {
            return Err(RentalError::TenantNotFound(tenant_id.to_string()));
        }

        // Payment rows cascade with their tenant
        self.payments
            .write()
            .unwrap()
            .retain(|_, payment| payment.tenant_id != tenant_id);

        Ok(())
    }

    async fn update_house_occupant(
        &mut self,
        house_id: &str,
        tenant_id: Option<&str>,
    ) -> RentalResult<House> {
        if let Some(tenant_id) = tenant_id {
            if !self.tenants.read().unwrap().contains_key(tenant_id) {
                return Err(RentalError::Store(format!(
                    "insert or update on table \"houses\" violates foreign key constraint: tenant {} does not exist",
                    tenant_id
                )));
            }
        }

        let mut houses = self.houses.write().unwrap();
        let house = houses
            .get_mut(house_id)
            .ok_or_else(|| RentalError::HouseNotFound(house_id.to_string()))?;
        house.current_tenant_id = tenant_id.map(str::to_string);
        house.updated_at = chrono::Utc::now().naive_utc();
        Ok(house.clone())
    }

    async fn create_payment(&mut self, payment: &NewPayment) -> RentalResult<Payment> {
        if self
            .rejected_payment_tenants
            .read()
            .unwrap()
            .contains(&payment.tenant_id)
        {
            return Err(RentalError::Store(format!(
                "payment insert rejected for tenant {}",
                payment.tenant_id
            )));
        }

        if !self.tenants.read().unwrap().contains_key(&payment.tenant_id) {
            return Err(RentalError::Store(format!(
                "insert or update on table \"payments\" violates foreign key constraint: tenant {} does not exist",
                payment.tenant_id
            )));
        }

        Ok(self.insert_payment_row(payment))
    }

    async fn create_payments(&mut self, payments: &[NewPayment]) -> RentalResult<Vec<Payment>> {
        // Rows the backend refuses are simply absent from the result
        let mut created = Vec::new();
        for payment in payments {
            if !self.accepts_payment_for(&payment.tenant_id) {
                continue;
            }
            created.push(self.insert_payment_row(payment));
        }
        Ok(created)
    }
}
