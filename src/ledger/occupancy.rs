//! Tenant roster and house occupancy operations

use tracing::{debug, info, warn};

use crate::ledger::RentLedger;
use crate::traits::RentalStore;
use crate::types::*;

impl<S: RentalStore> RentLedger<S> {
    /// Create a tenant and add it to the session roster
    pub async fn add_tenant(&mut self, tenant: NewTenant) -> RentalResult<Tenant> {
        // Validate before anything reaches the store
        self.tenant_validator.validate_tenant(&tenant)?;

        let created = self.store.create_tenant(&tenant).await?;
        info!("Created tenant {} ({})", created.name, created.id);

        // Stores list tenants newest first
        self.tenants.insert(0, created.clone());
        Ok(created)
    }

    /// Create a tenant and assign it to a vacant house in one flow
    ///
    /// The vacancy check runs before the tenant row is created. If
    /// assignment fails after creation, the tenant stays on the roster
    /// unassigned.
    pub async fn add_tenant_to_house(
        &mut self,
        tenant: NewTenant,
        house_id: &str,
    ) -> RentalResult<(Tenant, House)> {
        let house = self
            .find_house(house_id)
            .ok_or_else(|| RentalError::HouseNotFound(house_id.to_string()))?;
        if let Some(existing) = &house.current_tenant_id {
            return Err(RentalError::Conflict(format!(
                "House {} is already occupied by tenant {}",
                house_id, existing
            )));
        }

        let created = self.add_tenant(tenant).await?;
        let house = self.assign_tenant(house_id, &created.id).await?;
        Ok((created, house))
    }

    /// Assign an existing tenant to a house
    ///
    /// A house keeps at most one tenant and a tenant at most one house;
    /// violating either side is a conflict. Re-assigning a tenant to the
    /// house it already occupies changes nothing and succeeds.
    pub async fn assign_tenant(&mut self, house_id: &str, tenant_id: &str) -> RentalResult<House> {
        let house = self
            .find_house(house_id)
            .ok_or_else(|| RentalError::HouseNotFound(house_id.to_string()))?;
        if self.find_tenant(tenant_id).is_none() {
            return Err(RentalError::TenantNotFound(tenant_id.to_string()));
        }

        match house.current_tenant_id.as_deref() {
            Some(current) if current == tenant_id => return Ok(house.clone()),
            Some(current) => {
                return Err(RentalError::Conflict(format!(
                    "House {} is already occupied by tenant {}",
                    house_id, current
                )));
            }
            None => {}
        }

        if let Some(occupied) = self.house_of_tenant(tenant_id) {
            return Err(RentalError::Conflict(format!(
                "Tenant {} already occupies house {}",
                tenant_id, occupied.id
            )));
        }

        let updated = self.store.update_house_occupant(house_id, Some(tenant_id)).await?;
        info!("Assigned tenant {} to house {}", tenant_id, house_id);
        self.replace_house(updated.clone());
        Ok(updated)
    }

    /// Clear a house's occupant; the tenant stays on the roster
    ///
    /// Clearing an already vacant house changes nothing and succeeds.
    pub async fn remove_tenant(&mut self, house_id: &str) -> RentalResult<House> {
        let house = self
            .find_house(house_id)
            .ok_or_else(|| RentalError::HouseNotFound(house_id.to_string()))?;
        if house.is_vacant() {
            return Ok(house.clone());
        }

        let updated = self.store.update_house_occupant(house_id, None).await?;
        info!("Cleared house {}", house_id);
        self.replace_house(updated.clone());
        Ok(updated)
    }

    /// Delete a tenant, clearing its house assignment first
    ///
    /// The store owns the cascade to the tenant's payment rows. When the
    /// house was already vacated but the deletion itself fails, the error
    /// reports that partial state instead of pretending nothing happened.
    pub async fn delete_tenant(&mut self, tenant_id: &str) -> RentalResult<()> {
        if self.find_tenant(tenant_id).is_none() {
            return Err(RentalError::TenantNotFound(tenant_id.to_string()));
        }

        let occupied = self.house_of_tenant(tenant_id).map(|house| house.id.clone());

        if let Some(house_id) = &occupied {
            let updated = self.store.update_house_occupant(house_id, None).await?;
            self.replace_house(updated);
            debug!("Cleared house {} ahead of deleting tenant {}", house_id, tenant_id);
        }

        if let Err(source) = self.store.delete_tenant(tenant_id).await {
            if let Some(house_id) = occupied {
                warn!(
                    "Deleting tenant {} failed after house {} was vacated: {}",
                    tenant_id, house_id, source
                );
                return Err(RentalError::IncompleteDelete {
                    house_id,
                    reason: source.to_string(),
                });
            }
            return Err(source);
        }

        self.tenants.retain(|tenant| tenant.id != tenant_id);
        self.payments.retain(|payment| payment.tenant_id != tenant_id);
        info!("Deleted tenant {}", tenant_id);
        Ok(())
    }

    pub(crate) fn replace_house(&mut self, updated: House) {
        if let Some(slot) = self.houses.iter_mut().find(|house| house.id == updated.id) {
            *slot = updated;
        }
    }
}
