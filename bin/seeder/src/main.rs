use chrono::{Duration, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use eyre::{eyre, Report};
use parkpay_primitives::models::entities::booking::{Booking, NewBooking};
use parkpay_primitives::models::entities::enum_types::{BookingStatus, PaymentStatus};
use parkpay_primitives::models::entities::payment::{NewPayment, Payment};
use parkpay_primitives::models::entities::user::{NewUser, User};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

fn establish_connection() -> Result<PgConnection, Report> {
    let database_url = env::var("DATABASE_URL").map_err(|_| eyre!("DATABASE_URL must be set"))?;
    PgConnection::establish(&database_url).map_err(|e| eyre!("Error connecting to database: {}", e))
}

fn main() -> Result<(), Report> {
    dotenv().ok();
    println!("Seeding database...");

    let mut conn = establish_connection()?;

    // 1. Clean DB
    clean_db(&mut conn)?;

    // 2. Seed users
    let driver_id = seed_user(&mut conn, "driver", "driver@parkpay.local")?;
    let visitor_id = seed_user(&mut conn, "visitor", "visitor@parkpay.local")?;

    // 3. Seed bookings
    let upcoming = seed_booking(&mut conn, driver_id, "A-01", "MH12AB1234", 2)?;
    let active = seed_booking(&mut conn, visitor_id, "B-07", "KA05XY9876", 0)?;

    // 4. Seed payments awaiting a UPI transaction id
    seed_payment(&mut conn, upcoming, dec!(40.00))?;
    seed_payment(&mut conn, active, dec!(120.50))?;

    println!("Database seeded successfully!");
    Ok(())
}

fn clean_db(conn: &mut PgConnection) -> Result<(), Report> {
    use diesel::sql_query;
    println!("Cleaning database...");
    sql_query("TRUNCATE users, bookings, payments RESTART IDENTITY CASCADE").execute(conn)?;
    Ok(())
}

fn seed_user(conn: &mut PgConnection, u_username: &str, u_email: &str) -> Result<i64, Report> {
    use parkpay_primitives::schema::users;

    let new_user = NewUser {
        username: u_username.to_string(),
        email: u_email.to_string(),
    };

    let user: User = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)?;

    println!("Created user {} (id {})", user.username, user.id);
    Ok(user.id)
}

fn seed_booking(
    conn: &mut PgConnection,
    u_id: i64,
    slot: &str,
    vehicle: &str,
    starts_in_hours: i64,
) -> Result<i64, Report> {
    use parkpay_primitives::schema::bookings;

    let start_time = Utc::now() + Duration::hours(starts_in_hours);
    let status = if starts_in_hours == 0 {
        BookingStatus::Active
    } else {
        BookingStatus::Upcoming
    };

    let new_booking = NewBooking {
        user_id: u_id,
        slot_number: slot.to_string(),
        vehicle_number: vehicle.to_string(),
        start_time,
        end_time: start_time + Duration::hours(3),
        status,
    };

    let booking: Booking = diesel::insert_into(bookings::table)
        .values(&new_booking)
        .returning(Booking::as_returning())
        .get_result(conn)?;

    println!("Created {} booking {} for slot {}", status, booking.id, slot);
    Ok(booking.id)
}

fn seed_payment(conn: &mut PgConnection, b_id: i64, amt: Decimal) -> Result<(), Report> {
    use parkpay_primitives::schema::payments;

    let new_payment = NewPayment {
        booking_id: b_id,
        amount: amt,
        status: PaymentStatus::Pending,
    };

    let payment: Payment = diesel::insert_into(payments::table)
        .values(&new_payment)
        .returning(Payment::as_returning())
        .get_result(conn)?;

    println!(
        "Created payment {} of {} for booking {}",
        payment.id, payment.amount, b_id
    );
    Ok(())
}
