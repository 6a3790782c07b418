//! Reservation model and lifecycle types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

/// Reservation lifecycle status.
///
/// Lifecycle: booked is the only initial state; checked_out, cancelled and
/// no_show are terminal. Every action validates against the transition table
/// before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Booked,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Booked => "booked",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no_show",
        }
    }

    /// Transition table for the reservation lifecycle.
    pub fn can_transition_to(&self, to: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, to),
            (Booked, CheckedIn) | (Booked, Cancelled) | (Booked, NoShow) | (CheckedIn, CheckedOut)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::CheckedOut | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "booked" => Ok(ReservationStatus::Booked),
            "checked_in" => Ok(ReservationStatus::CheckedIn),
            "checked_out" => Ok(ReservationStatus::CheckedOut),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            "no_show" => Ok(ReservationStatus::NoShow),
            _ => Err(format!("Invalid reservation status: {}", s)),
        }
    }
}

// SQLx conversion (stored as text; unknown values rejected at decode)
impl sqlx::Type<Postgres> for ReservationStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ReservationStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ReservationStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <String as Encode<Postgres>>::encode(self.as_str().to_string(), buf)
    }
}

/// Reservation model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: ReservationStatus,
    #[schema(value_type = String, example = "100.00")]
    pub base_price: Decimal,
    #[schema(value_type = String, example = "0.00")]
    pub discount: Decimal,
    #[schema(value_type = String, example = "100.00")]
    pub final_price: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reservation enriched with room number and guest name for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReservationDetails {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub guest_id: i32,
    pub guest_name: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: ReservationStatus,
    #[schema(value_type = String)]
    pub base_price: Decimal,
    #[schema(value_type = String)]
    pub discount: Decimal,
    #[schema(value_type = String)]
    pub final_price: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create reservation request.
///
/// No status field: a new reservation is always created as booked, whatever
/// the caller might wish. Pricing is copied from the room at creation time.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Discount applied to the room's base price, defaults to 0
    #[schema(value_type = Option<String>)]
    pub discount: Option<Decimal>,
    pub notes: Option<String>,
}

impl CreateReservation {
    /// Check-out must be strictly after check-in.
    pub fn validate_dates(&self) -> Result<(), String> {
        if self.check_out_date <= self.check_in_date {
            return Err(format!(
                "check_out_date ({}) must be strictly after check_in_date ({})",
                self.check_out_date, self.check_in_date
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ReservationStatus::{self, *};

    const ALL: [ReservationStatus; 5] = [Booked, CheckedIn, CheckedOut, Cancelled, NoShow];

    #[test]
    fn transition_table_is_exhaustive() {
        for from in ALL {
            for to in ALL {
                let allowed = matches!(
                    (from, to),
                    (Booked, CheckedIn)
                        | (Booked, Cancelled)
                        | (Booked, NoShow)
                        | (CheckedIn, CheckedOut)
                );
                assert_eq!(
                    from.can_transition_to(to),
                    allowed,
                    "unexpected verdict for {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn terminal_states_allow_no_transitions() {
        for from in [CheckedOut, Cancelled, NoShow] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(!from.can_transition_to(to));
            }
        }
        assert!(!Booked.is_terminal());
        assert!(!CheckedIn.is_terminal());
    }

    #[test]
    fn status_round_trips_through_slug() {
        for s in ALL {
            assert_eq!(s.as_str().parse::<ReservationStatus>().unwrap(), s);
        }
        assert!("pending".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn date_validation_rejects_inverted_and_zero_night_stays() {
        use chrono::NaiveDate;

        let mk = |check_in: &str, check_out: &str| super::CreateReservation {
            room_id: 1,
            guest_id: 1,
            check_in_date: check_in.parse::<NaiveDate>().unwrap(),
            check_out_date: check_out.parse::<NaiveDate>().unwrap(),
            discount: None,
            notes: None,
        };

        assert!(mk("2025-03-01", "2025-03-03").validate_dates().is_ok());
        assert!(mk("2025-03-05", "2025-03-01").validate_dates().is_err());
        assert!(mk("2025-03-01", "2025-03-01").validate_dates().is_err());
    }
}
