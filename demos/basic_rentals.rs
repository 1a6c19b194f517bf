//! Basic rental ledger usage example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use rental_core::utils::{format, MemoryStore};
use rental_core::{
    BulkPaymentEntry, NewTenant, PaymentInput, PaymentStatus, RentLedger, RentalConfig,
    StatusFilter, ViewFilter,
};

fn new_tenant(name: &str, email: &str, rent: i64, join: NaiveDate) -> NewTenant {
    NewTenant {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some("+91 98765 43210".to_string()),
        work_info: "Shop owner".to_string(),
        rent_amount: BigDecimal::from(rent),
        join_date: join,
        id_proof: true,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    rental_core::init_tracing();

    println!("🏠 Rental Core - Basic Rentals Example\n");

    // Create a new ledger over the in-memory store and its default houses
    let store = MemoryStore::with_default_houses();
    let mut ledger = RentLedger::new(store, RentalConfig::default());
    ledger.load().await?;

    let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();

    // 1. The house portfolio
    println!("📋 Houses in the portfolio:");
    for house in ledger.houses() {
        println!("  ✓ House {} ({})", house.house_number, house.id);
    }
    println!();

    // 2. Move tenants in
    println!("👥 Moving tenants in...\n");

    let (anita, house) = ledger
        .add_tenant_to_house(
            new_tenant(
                "Anita Rao",
                "anita.rao@example.com",
                3500,
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ),
            "H3",
        )
        .await?;
    println!("  ✓ {} moved into house {}", anita.name, house.house_number);

    let (ravi, house) = ledger
        .add_tenant_to_house(
            new_tenant(
                "Ravi Kumar",
                "ravi.kumar@example.com",
                2800,
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            ),
            "H4",
        )
        .await?;
    println!("  ✓ {} moved into house {}", ravi.name, house.house_number);

    // Meera joined after this month's due day, so she gets the
    // new-tenant grace until April
    let (meera, house) = ledger
        .add_tenant_to_house(
            new_tenant(
                "Meera Joshi",
                "meera.joshi@example.com",
                3100,
                NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            ),
            "H5",
        )
        .await?;
    println!("  ✓ {} moved into house {}", meera.name, house.house_number);

    // Vikram is registered but not housed yet
    let vikram = ledger
        .add_tenant(new_tenant(
            "Vikram Shah",
            "vikram.shah@example.com",
            4200,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ))
        .await?;
    println!("  ✓ {} registered (no house yet)", vikram.name);

    println!("\n  Waiting list:");
    for tenant in ledger.unassigned_tenants() {
        println!("    - {}", tenant.name);
    }
    println!();

    // 3. Record a single rent payment
    println!("💰 Recording Anita's March rent...");
    let payment = ledger
        .record_payment(PaymentInput {
            tenant_id: anita.id.clone(),
            amount_paid: BigDecimal::from(3500),
            month: 3,
            year: 2024,
            paid_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        })
        .await?;
    println!(
        "  ✓ Recorded ₹{} for {}/{}\n",
        payment.amount_paid, payment.month, payment.year
    );

    // 4. The dashboard for March 12
    println!("📊 Dashboard as of March 12, 2024:");
    for view in ledger.house_views(today) {
        match &view.tenant {
            Some(tenant) => println!(
                "  House {}: {} - {}",
                view.house.house_number,
                tenant.name,
                view.status_label()
            ),
            None => println!("  House {}: Vacant", view.house.house_number),
        }
    }
    println!();

    // 5. Send a reminder to the tenant who is overdue. Reminders only
    // unlock once the month's due day has passed.
    let view = ledger
        .house_views(today)
        .into_iter()
        .find(|view| view.house.id == "H4")
        .unwrap();
    if view.can_send_reminder(today, ledger.config().rent_due_day) {
        println!("📨 Reminder for Ravi:\n");
        let message = ledger.reminder_message(&ravi.id, today)?;
        for line in message.lines() {
            println!("  | {}", line);
        }
        println!();
    }

    // 6. Settle everyone still owing March in one batch
    println!("💰 Bulk-recording the remaining March rents...");
    println!(
        "  Total due: {}",
        format::format_amount(&ledger.rent_due_total(today), &ledger.config().currency_symbol)
    );
    let entries: Vec<BulkPaymentEntry> = ledger
        .houses_with_rent_due(today)
        .iter()
        .filter_map(|view| view.tenant.as_ref().map(|tenant| (view, tenant)))
        .map(|(view, tenant)| BulkPaymentEntry {
            tenant_id: tenant.id.clone(),
            house_id: Some(view.house.id.clone()),
            amount_paid: tenant.rent_amount.clone(),
            month: 3,
            year: 2024,
            paid_date: today,
        })
        .collect();

    let recorded = ledger.record_payments(entries).await?;
    println!("  ✓ Recorded {} payments in one batch\n", recorded.len());

    // 7. Filter the dashboard
    println!("🔍 Searching for \"anita\":");
    let filter = ViewFilter {
        search_term: "anita".to_string(),
        status: StatusFilter::All,
    };
    for view in ledger.filtered_house_views(&filter, today) {
        println!(
            "  House {}: {}",
            view.house.house_number,
            view.status_label()
        );
    }

    println!("\n🔍 Houses still overdue:");
    let filter = ViewFilter {
        search_term: String::new(),
        status: StatusFilter::Only(PaymentStatus::Overdue),
    };
    let overdue = ledger.filtered_house_views(&filter, today);
    if overdue.is_empty() {
        println!("  ✅ None");
    } else {
        for view in &overdue {
            println!("  House {}", view.house.house_number);
        }
    }
    println!();

    // 8. Anita's month-by-month history
    println!("📈 Payment history for Anita:");
    for row in ledger.payment_history(&anita.id, today)? {
        println!("  {}: {}", row.month, row.status.label(row.payment.as_ref()));
    }
    println!();

    // 9. Tenants move out
    println!("🚪 Ravi moves out of house 4...");
    let house = ledger.remove_tenant("H4").await?;
    println!(
        "  ✓ House {} is now {}",
        house.house_number,
        if house.is_vacant() { "vacant" } else { "occupied" }
    );

    println!("🗑️  Removing Vikram from the roster...");
    ledger.delete_tenant(&vikram.id).await?;
    println!("  ✓ {} tenants remain", ledger.tenants().len());

    println!("\n🎉 Example completed successfully!");
    Ok(())
}
