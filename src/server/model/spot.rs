//! Spot domain models.

use chrono::{DateTime, Utc};
use entity::spot::SpotStatus;

use crate::model::lot::{SpotDto, SpotOccupantDto, SpotStatusDto};

/// A single parking slot within a lot.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: i32,
    pub lot_id: i32,
    /// 1-based position within the lot.
    pub spot_number: i32,
    pub status: SpotStatus,
}

impl Spot {
    pub fn from_entity(entity: entity::spot::Model) -> Self {
        Self {
            id: entity.id,
            lot_id: entity.lot_id,
            spot_number: entity.spot_number,
            status: entity.status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SpotStatus::Available
    }
}

/// The active booking holding an Occupied spot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotOccupant {
    pub booking_id: i32,
    pub user_id: i32,
    pub username: String,
    pub check_in_time: DateTime<Utc>,
}

/// Spot together with its current occupant, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDetails {
    pub spot: Spot,
    pub occupant: Option<SpotOccupant>,
}

impl SpotDetails {
    pub fn into_dto(self) -> SpotDto {
        SpotDto {
            spot_id: self.spot.id,
            spot_number: self.spot.spot_number,
            status: match self.spot.status {
                SpotStatus::Available => SpotStatusDto::Available,
                SpotStatus::Occupied => SpotStatusDto::Occupied,
            },
            occupant: self.occupant.map(|o| SpotOccupantDto {
                booking_id: o.booking_id,
                user_id: o.user_id,
                username: o.username,
                check_in_time: o.check_in_time,
            }),
        }
    }
}
