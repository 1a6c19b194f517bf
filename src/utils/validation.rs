//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> RentalResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(RentalError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a month number is a calendar month
pub fn validate_month(month: u32) -> RentalResult<()> {
    if !(1..=12).contains(&month) {
        return Err(RentalError::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )));
    }

    Ok(())
}

/// Validate that a year is within the supported range
pub fn validate_year(year: i32) -> RentalResult<()> {
    if !(2000..=2100).contains(&year) {
        return Err(RentalError::Validation(format!(
            "Year must be between 2000 and 2100, got {}",
            year
        )));
    }

    Ok(())
}

/// Validate that an entity ID is usable as a key
pub fn validate_entity_id(id: &str) -> RentalResult<()> {
    if id.trim().is_empty() {
        return Err(RentalError::Validation("ID cannot be empty".to_string()));
    }

    if id.len() > 50 {
        return Err(RentalError::Validation(
            "ID cannot exceed 50 characters".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, dashes, underscores)
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(RentalError::Validation(
            "ID can only contain alphanumeric characters, dashes, and underscores".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a person name is usable
pub fn validate_person_name(name: &str) -> RentalResult<()> {
    if name.trim().is_empty() {
        return Err(RentalError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }

    if name.len() > 100 {
        return Err(RentalError::Validation(
            "Name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an email address has a local part and a domain
pub fn validate_email(email: &str) -> RentalResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(RentalError::Validation(format!(
            "Email address '{}' is not valid",
            email
        ))),
    }
}

/// Enhanced tenant validator with detailed checks
pub struct EnhancedTenantValidator;

impl TenantValidator for EnhancedTenantValidator {
    fn validate_tenant(&self, tenant: &NewTenant) -> RentalResult<()> {
        validate_person_name(&tenant.name)?;
        validate_email(&tenant.email)?;
        validate_positive_amount(&tenant.rent_amount)?;

        // Phone is optional, but a provided one has to look like a number
        if let Some(phone) = &tenant.phone {
            if !phone
                .chars()
                .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
            {
                return Err(RentalError::Validation(
                    "Phone number can only contain digits, spaces, dashes, and a plus sign"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Enhanced payment validator with detailed checks
pub struct EnhancedPaymentValidator;

impl PaymentValidator for EnhancedPaymentValidator {
    fn validate_payment(&self, payment: &NewPayment) -> RentalResult<()> {
        validate_entity_id(&payment.tenant_id)?;
        validate_positive_amount(&payment.amount_paid)?;
        validate_month(payment.month)?;
        validate_year(payment.year)?;

        if payment.paid_date.is_none() {
            return Err(RentalError::Validation(
                "Recorded payment must carry a paid date".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_batch(&self, entries: &[BulkPaymentEntry]) -> RentalResult<()> {
        // Two entries for the same tenant and month would race for the same
        // slot during reconciliation
        let mut seen = std::collections::HashSet::new();
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
