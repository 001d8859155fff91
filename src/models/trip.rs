use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ItineraryError;

pub const MAX_TRIP_DAYS: i64 = 30;

/// Body of `POST /api/generate-itinerary`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TripRequest {
    pub fn day_count(&self) -> Result<DayCount, ItineraryError> {
        DayCount::between(self.start_date, self.end_date)
    }
}

/// Inclusive number of days in a trip, always within `1..=MAX_TRIP_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount(u32);

impl DayCount {
    pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ItineraryError> {
        let days = (end_date - start_date).num_days() + 1;

        if days < 1 {
            return Err(ItineraryError::InvalidDateRange);
        }
        if days > MAX_TRIP_DAYS {
            return Err(ItineraryError::TripTooLong);
        }

        Ok(Self(days as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}
