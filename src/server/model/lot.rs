//! Parking lot domain models and parameters.
//!
//! A lot owns exactly `capacity` spot rows. Parameter types here are validated by
//! `LotService` before anything is written.

use chrono::{DateTime, Utc};

use crate::{
    model::lot::{CreateLotDto, LotAvailabilityDto, LotDetailsDto, LotDto, UpdateLotDto},
    server::model::spot::SpotDetails,
};

/// Parking lot definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub pincode: String,
    /// Number of spot rows owned by the lot.
    pub capacity: i32,
    /// Price per started hour in cents.
    pub hourly_rate_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Lot {
    pub fn from_entity(entity: entity::lot::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            pincode: entity.pincode,
            capacity: entity.capacity,
            hourly_rate_cents: entity.hourly_rate_cents,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LotDto {
        LotDto {
            id: self.id,
            name: self.name,
            address: self.address,
            pincode: self.pincode,
            capacity: self.capacity,
            hourly_rate_cents: self.hourly_rate_cents,
            created_at: self.created_at,
        }
    }
}

/// Lot with its current spot counts.
#[derive(Debug, Clone, PartialEq)]
pub struct LotAvailability {
    pub lot: Lot,
    pub available_spots: u64,
    pub occupied_spots: u64,
}

impl LotAvailability {
    pub fn into_dto(self) -> LotAvailabilityDto {
        LotAvailabilityDto {
            id: self.lot.id,
            name: self.lot.name,
            address: self.lot.address,
            pincode: self.lot.pincode,
            capacity: self.lot.capacity,
            hourly_rate_cents: self.lot.hourly_rate_cents,
            available_spots: self.available_spots,
            occupied_spots: self.occupied_spots,
        }
    }
}

/// Lot with every spot and the booking occupying it.
#[derive(Debug, Clone, PartialEq)]
pub struct LotDetails {
    pub lot: Lot,
    /// Spots ordered by spot number.
    pub spots: Vec<SpotDetails>,
}

impl LotDetails {
    pub fn into_dto(self) -> LotDetailsDto {
        LotDetailsDto {
            lot: self.lot.into_dto(),
            spots: self.spots.into_iter().map(SpotDetails::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLotParams {
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub capacity: i32,
    pub hourly_rate_cents: i64,
}

impl CreateLotParams {
    pub fn from_dto(dto: CreateLotDto) -> Self {
        Self {
            name: dto.name,
            address: dto.address,
            pincode: dto.pincode,
            capacity: dto.capacity,
            hourly_rate_cents: dto.hourly_rate_cents,
        }
    }
}

/// Partial lot update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateLotParams {
    pub id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub pincode: Option<String>,
    /// Routed through the same grow/shrink rules as a direct capacity change.
    pub capacity: Option<i32>,
    pub hourly_rate_cents: Option<i64>,
}

impl UpdateLotParams {
    pub fn from_dto(id: i32, dto: UpdateLotDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
            pincode: dto.pincode,
            capacity: dto.capacity,
            hourly_rate_cents: dto.hourly_rate_cents,
        }
    }
}
