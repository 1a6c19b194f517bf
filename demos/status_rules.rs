//! Payment status derivation examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use rental_core::utils::format::{format_amount, format_date, reminder_message};
use rental_core::{
    derive_status, effective_payment, payment_history, Payment, RentMonth, RentalConfig, Tenant,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_tenant(join_date: NaiveDate) -> Tenant {
    let now = chrono::Utc::now().naive_utc();
    Tenant {
        id: "t1".to_string(),
        name: "Anita Rao".to_string(),
        email: "anita.rao@example.com".to_string(),
        phone: Some("+91 98765 43210".to_string()),
        work_info: "Shop owner".to_string(),
        rent_amount: BigDecimal::from(3500),
        join_date,
        id_proof: true,
        created_at: now,
        updated_at: now,
    }
}

fn payment_row(id: &str, month: u32, year: i32, paid_date: Option<NaiveDate>) -> Payment {
    let now = chrono::Utc::now().naive_utc();
    Payment {
        id: id.to_string(),
        tenant_id: "t1".to_string(),
        house_id: Some("H3".to_string()),
        month,
        year,
        paid_date,
        amount_paid: BigDecimal::from(3500),
        created_at: now,
        updated_at: now,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📅 Rental Core - Status Rule Examples\n");

    let config = RentalConfig::default();
    let due_day = config.rent_due_day;

    // 1. Due dates clamp to the month length
    println!("🗓️  Due dates for a rent due day of {}:", due_day);
    for (year, month) in [(2024, 3), (2024, 4), (2024, 2), (2023, 2)] {
        let rent_month = RentMonth::new(year, month)?;
        println!(
            "  {}: due {}",
            rent_month,
            format_date(rent_month.due_date(31))
        );
    }
    println!("  (shown with due day 31 to make the clamping visible)\n");

    // 2. Status changes as the month progresses
    let tenant = sample_tenant(date(2023, 11, 2));
    let march = RentMonth::new(2024, 3)?;

    println!("⏳ March 2024 without a payment, seen on different days:");
    for today in [date(2024, 3, 3), date(2024, 3, 5), date(2024, 3, 6), date(2024, 4, 1)] {
        let status = derive_status(Some(&tenant), None, march, today, due_day);
        println!("  {}: {}", format_date(today), status.label(None));
    }
    println!();

    // 3. A paid month stays paid
    let paid = payment_row("p1", 3, 2024, Some(date(2024, 3, 2)));
    let status = derive_status(Some(&tenant), Some(&paid), march, date(2024, 4, 20), due_day);
    println!("✅ With a payment dated 02 Mar 2024:");
    println!("  {}\n", status.label(Some(&paid)));

    // 4. New tenants get the rest of their join month
    let newcomer = sample_tenant(date(2024, 3, 10));
    let status = derive_status(Some(&newcomer), None, march, date(2024, 3, 25), due_day);
    println!("🆕 Joined 10 Mar 2024, evaluated on 25 Mar 2024:");
    println!("  {}", status.label(None));

    let april = RentMonth::new(2024, 4)?;
    let status = derive_status(Some(&newcomer), None, april, date(2024, 4, 10), due_day);
    println!("  April 2024 on 10 Apr 2024: {}\n", status.label(None));

    // 5. Several rows for one month: the dated row settles it
    let rows = vec![
        payment_row("p2", 3, 2024, None),
        payment_row("p3", 3, 2024, Some(date(2024, 3, 4))),
    ];
    println!("🔁 Placeholder row and dated row for the same month:");
    match effective_payment(&rows, "t1", march) {
        Some(payment) => println!(
            "  Effective row: {} (paid {})",
            payment.id,
            payment
                .paid_date
                .map(format_date)
                .unwrap_or_else(|| "never".to_string())
        ),
        None => println!("  No payment rows"),
    }
    println!();

    // 6. Month-by-month history, newest first
    let tenant = sample_tenant(date(2024, 1, 15));
    let payments = vec![payment_row("p4", 2, 2024, Some(date(2024, 2, 4)))];
    println!("📈 History for a tenant who joined 15 Jan 2024 and paid February:");
    for row in payment_history(&tenant, &payments, due_day, date(2024, 3, 10)) {
        println!("  {}: {}", row.month, row.status.label(row.payment.as_ref()));
    }
    println!();

    // 7. The reminder message
    let due = march.due_date(due_day);
    println!("📨 Reminder composed for Anita:");
    println!(
        "  Amount {} due {}\n",
        format_amount(&tenant.rent_amount, &config.currency_symbol),
        format_date(due)
    );
    for line in reminder_message(
        &tenant.name,
        &tenant.rent_amount,
        due,
        &config.currency_symbol,
    )
    .lines()
    {
        println!("  | {}", line);
    }

    println!("\n🎉 Status rule examples completed successfully!");
    Ok(())
}
