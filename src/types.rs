//! Core types and data structures for the rental management system

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Payment status for a tenant in a given rent month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// A payment with a paid date exists for the month
    Paid,
    /// No payment yet, and the due day has not passed
    Unpaid,
    /// No payment, and the month's due day is behind us
    Overdue,
}

impl PaymentStatus {
    /// Whether rent is still owed for the month (Unpaid or Overdue)
    pub fn is_due(&self) -> bool {
        matches!(self, PaymentStatus::Unpaid | PaymentStatus::Overdue)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// A calendar month in a specific year, the unit rent is tracked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RentMonth {
    year: i32,
    month: u32,
}

impl RentMonth {
    /// Create a rent month, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> RentalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(RentalError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The rent month a calendar date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is within 1..=12")
    }

    /// Whether the given date falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// All months from this one through `end`, inclusive; empty when `end` is earlier
    pub fn through(self, end: RentMonth) -> Vec<RentMonth> {
        let mut months = Vec::new();
        let mut current = self;
        while current <= end {
            months.push(current);
            current = current.next();
        }
        months
    }

    /// The rent due date in this month, clamping the configured day to the
    /// month's length (day 31 in April resolves to April 30)
    pub fn due_date(&self, day: u32) -> NaiveDate {
        let clamped = day.min(self.last_day());
        NaiveDate::from_ymd_opt(self.year, self.month, clamped)
            .expect("day is clamped to month length")
    }

    fn last_day(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .expect("first day of a month has a predecessor")
            .day()
    }
}

impl std::fmt::Display for RentMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

/// External configuration inputs for rent tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalConfig {
    /// Day of the month rent falls due (1-31, clamped to month length)
    pub rent_due_day: u32,
    /// Symbol prefixed to formatted amounts
    pub currency_symbol: String,
}

impl RentalConfig {
    /// Create a configuration, rejecting due days outside 1..=31
    pub fn new(rent_due_day: u32, currency_symbol: String) -> RentalResult<Self> {
        if !(1..=31).contains(&rent_due_day) {
            return Err(RentalError::Validation(format!(
                "Rent due day must be between 1 and 31, got {}",
                rent_due_day
            )));
        }
        Ok(Self {
            rent_due_day,
            currency_symbol,
        })
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            rent_due_day: 5,
            currency_symbol: "₹".to_string(),
        }
    }
}

/// A rental unit in the fixed property roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Unique identifier, e.g. "H3"
    pub id: String,
    /// Display number, e.g. "3"
    pub house_number: String,
    /// Occupying tenant, if any
    pub current_tenant_id: Option<String>,
    /// When the house row was created
    pub created_at: NaiveDateTime,
    /// When the house row was last updated
    pub updated_at: NaiveDateTime,
}

impl House {
    /// Create a vacant house
    pub fn new(id: String, house_number: String) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            house_number,
            current_tenant_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.current_tenant_id.is_none()
    }
}

/// A person renting (or eligible to rent) a house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier assigned by the store
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number, if one was collected
    pub phone: Option<String>,
    /// Free-form occupation notes
    pub work_info: String,
    /// Monthly rent owed
    pub rent_amount: BigDecimal,
    /// Date the tenancy started
    pub join_date: NaiveDate,
    /// Whether an identity proof document was collected
    pub id_proof: bool,
    /// When the tenant row was created
    pub created_at: NaiveDateTime,
    /// When the tenant row was last updated
    pub updated_at: NaiveDateTime,
}

/// Input shape for creating a tenant; the store assigns identity and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub work_info: String,
    pub rent_amount: BigDecimal,
    pub join_date: NaiveDate,
    pub id_proof: bool,
}

/// A recorded rent payment row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier assigned by the store
    pub id: String,
    /// Tenant the payment belongs to
    pub tenant_id: String,
    /// House occupied at the time of payment, if any
    pub house_id: Option<String>,
    /// Rent month, 1-12
    pub month: u32,
    /// Rent year
    pub year: i32,
    /// Date the payment was made; absent rows are placeholders
    pub paid_date: Option<NaiveDate>,
    /// Amount actually paid
    pub amount_paid: BigDecimal,
    /// When the payment row was created
    pub created_at: NaiveDateTime,
    /// When the payment row was last updated
    pub updated_at: NaiveDateTime,
}

impl Payment {
    /// The rent month this payment covers
    pub fn rent_month(&self) -> RentMonth {
        RentMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// Input shape for inserting a payment row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPayment {
    pub tenant_id: String,
    pub house_id: Option<String>,
    pub month: u32,
    pub year: i32,
    pub paid_date: Option<NaiveDate>,
    pub amount_paid: BigDecimal,
}

/// Caller-facing input for recording a single payment; the ledger resolves
/// the tenant's current house itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInput {
    pub tenant_id: String,
    pub month: u32,
    pub year: i32,
    pub amount_paid: BigDecimal,
    pub paid_date: NaiveDate,
}

/// One entry of a bulk payment submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkPaymentEntry {
    pub house_id: Option<String>,
    pub tenant_id: String,
    pub amount_paid: BigDecimal,
    pub month: u32,
    pub year: i32,
    pub paid_date: NaiveDate,
}

impl BulkPaymentEntry {
    /// The row shape submitted to the store for this entry
    pub fn to_new_payment(&self) -> NewPayment {
        NewPayment {
            tenant_id: self.tenant_id.clone(),
            house_id: self.house_id.clone(),
            month: self.month,
            year: self.year,
            paid_date: Some(self.paid_date),
            amount_paid: self.amount_paid.clone(),
        }
    }
}

/// Outcome detail of a bulk payment submission that did not fully succeed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Rows the store confirmed
    pub recorded: Vec<Payment>,
    /// Entries the store did not create
    pub failed: Vec<BulkPaymentEntry>,
}

/// Errors that can occur in the rental system
#[derive(Debug, thiserror::Error)]
pub enum RentalError {
    #[error("Store error: {0}")]
    Store(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Tenant not found: {0}")]
    TenantNotFound(String),
    #[error("House not found: {0}")]
    HouseNotFound(String),
    #[error("Recorded {} payments, {} failed", .0.recorded.len(), .0.failed.len())]
    PartialBatch(BatchFailure),
    #[error("Tenant deletion incomplete: house {house_id} was vacated but the tenant remains: {reason}")]
    IncompleteDelete { house_id: String, reason: String },
}

impl RentalError {
    /// Remediation hint for recognizable store failures, suitable for
    /// surfacing next to the error message
    pub fn hint(&self) -> Option<&'static str> {
        let message = match self {
            RentalError::Store(message) => message.as_str(),
            RentalError::IncompleteDelete { reason, .. } => reason.as_str(),
            _ => return None,
        };
        if message.contains("violates foreign key constraint") {
            Some("Other records still reference this one. Clear the tenant's house assignment and payment rows, then retry the deletion.")
        } else if ["Forbidden", "Unauthorized", "401", "403"]
            .iter()
            .any(|marker| message.contains(marker))
        {
            Some("The store rejected the request as unauthorized. Check the service credentials and access policies.")
        } else if message.contains("Failed to fetch") || message.contains("NetworkError") {
            Some("The store could not be reached. Check connectivity and the service URL.")
        } else {
            None
        }
    }
}

/// Result type for rental operations
pub type RentalResult<T> = Result<T, RentalError>;
