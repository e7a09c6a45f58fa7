use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateLotDto {
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub capacity: i32,
    /// Hourly rate in minor currency units (cents).
    pub hourly_rate_cents: i64,
}

/// Partial lot update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateLotDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    pub capacity: Option<i32>,
    pub hourly_rate_cents: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetCapacityDto {
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LotDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub capacity: i32,
    pub hourly_rate_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LotAvailabilityDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub capacity: i32,
    pub hourly_rate_cents: i64,
    pub available_spots: u64,
    pub occupied_spots: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpotStatusDto {
    Available,
    Occupied,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpotOccupantDto {
    pub booking_id: i32,
    pub user_id: i32,
    pub username: String,
    pub check_in_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpotDto {
    pub spot_id: i32,
    pub spot_number: i32,
    pub status: SpotStatusDto,
    pub occupant: Option<SpotOccupantDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LotDetailsDto {
    pub lot: LotDto,
    pub spots: Vec<SpotDto>,
}
