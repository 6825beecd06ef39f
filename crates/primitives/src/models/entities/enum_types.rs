use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    DbEnum,
    Display,
    ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::BookingStatus"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;

        matches!(
            (self, next),
            (Upcoming, Active) | (Upcoming, Cancelled) | (Active, Completed) | (Active, Cancelled)
        )
    }
}

/// Lifecycle of a UPI payment.
///
/// A payment starts `Pending` and stays there after the payer submits a
/// transaction id; an operator then moves it through review.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    DbEnum,
    Display,
    ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentStatus"]
pub enum PaymentStatus {
    #[default]
    Pending,
    UnderReview,
    Confirmed,
    Failed,
}

impl PaymentStatus {
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;

        matches!(
            (self, next),
            (Pending, UnderReview)
                | (Pending, Confirmed)
                | (Pending, Failed)
                | (UnderReview, Confirmed)
                | (UnderReview, Failed)
        )
    }
}
