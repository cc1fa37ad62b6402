use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::villas::models::Villa;

/// Response DTO for a villa (read shape, timestamps excluded)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillaResponseDto {
    pub id: i64,
    pub name: String,
    pub detail: String,
    pub occupants: i32,
    pub square_meters: i32,
    pub rate: f64,
    pub amenity: String,
    pub image_url: String,
}

impl From<Villa> for VillaResponseDto {
    fn from(v: Villa) -> Self {
        Self {
            id: v.id,
            name: v.name,
            detail: v.detail,
            occupants: v.occupants,
            square_meters: v.square_meters,
            rate: v.rate,
            amenity: v.amenity,
            image_url: v.image_url,
        }
    }
}

/// Request DTO for creating a villa (no id, no timestamps)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVillaDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Detail must not exceed 2000 characters"))]
    pub detail: String,

    #[validate(range(min = 1, message = "Occupants must be at least 1"))]
    pub occupants: i32,

    #[validate(range(min = 1, message = "Square meters must be at least 1"))]
    pub square_meters: i32,

    #[validate(range(min = 0.0, message = "Rate must not be negative"))]
    pub rate: f64,

    #[validate(length(max = 255, message = "Amenity must not exceed 255 characters"))]
    pub amenity: String,

    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: String,
}

/// Request DTO for a full or partial update (id plus all mutable fields).
/// Unknown fields are rejected so a patch cannot introduce keys the shape
/// does not have.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateVillaDto {
    pub id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Detail must not exceed 2000 characters"))]
    pub detail: String,

    #[validate(range(min = 1, message = "Occupants must be at least 1"))]
    pub occupants: i32,

    #[validate(range(min = 1, message = "Square meters must be at least 1"))]
    pub square_meters: i32,

    #[validate(range(min = 0.0, message = "Rate must not be negative"))]
    pub rate: f64,

    #[validate(length(max = 255, message = "Amenity must not exceed 255 characters"))]
    pub amenity: String,

    #[validate(length(max = 500, message = "Image URL must not exceed 500 characters"))]
    pub image_url: String,
}

impl From<Villa> for UpdateVillaDto {
    fn from(v: Villa) -> Self {
        Self {
            id: v.id,
            name: v.name,
            detail: v.detail,
            occupants: v.occupants,
            square_meters: v.square_meters,
            rate: v.rate,
            amenity: v.amenity,
            image_url: v.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateVillaDto {
        CreateVillaDto {
            name: "Villa Azul".to_string(),
            detail: "Sea-facing villa".to_string(),
            occupants: 4,
            square_meters: 60,
            rate: 180.0,
            amenity: "pool".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn valid_create_dto_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let mut dto = valid_create();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn zero_occupants_fails_validation() {
        let mut dto = valid_create();
        dto.occupants = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn negative_rate_fails_validation() {
        let mut dto = valid_create();
        dto.rate = -1.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_dto_round_trips_through_entity_fields() {
        let villa = Villa {
            id: 7,
            name: "Villa Real".to_string(),
            detail: "d".to_string(),
            occupants: 5,
            square_meters: 50,
            rate: 200.0,
            amenity: String::new(),
            image_url: String::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let dto = UpdateVillaDto::from(villa.clone());
        assert_eq!(dto.id, villa.id);
        assert_eq!(dto.name, villa.name);
        assert_eq!(dto.square_meters, villa.square_meters);
        assert!(dto.validate().is_ok());
    }
}
