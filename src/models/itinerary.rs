use serde::{Deserialize, Serialize};

/// A single recommendation: a place to eat or something to do.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MealOrActivity {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DayPlan {
    #[serde(rename = "dayNumber")]
    pub day_number: u32,
    pub breakfast: MealOrActivity,
    pub lunch: MealOrActivity,
    pub dinner: MealOrActivity,
    pub activity: MealOrActivity,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub description: String,
}

/// Generated trip plan: one hotel plus a plan for every day of the trip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ItineraryResponse {
    pub hotel: Hotel,
    pub days: Vec<DayPlan>,
}

impl ItineraryResponse {
    /// True when there are exactly `expected` days numbered 1..=expected in order.
    pub fn has_sequential_days(&self, expected: u32) -> bool {
        self.days.len() == expected as usize
            && self
                .days
                .iter()
                .zip(1..)
                .all(|(day, number)| day.day_number == number)
    }
}
