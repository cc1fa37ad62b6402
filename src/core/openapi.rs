use utoipa::{Modify, OpenApi};

use crate::features::villas::{dtos as villa_dtos, handlers as villa_handlers};
use crate::shared::patch::PatchOp;
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        villa_handlers::list_villas,
        villa_handlers::get_villa,
        villa_handlers::create_villa,
        villa_handlers::update_villa,
        villa_handlers::patch_villa,
        villa_handlers::delete_villa,
    ),
    components(schemas(
        villa_dtos::VillaResponseDto,
        villa_dtos::CreateVillaDto,
        villa_dtos::UpdateVillaDto,
        PatchOp,
        ApiResponse<villa_dtos::VillaResponseDto>,
        ApiResponse<Vec<villa_dtos::VillaResponseDto>>,
        Meta,
    )),
    tags(
        (name = "villas", description = "Villa catalog CRUD endpoints")
    ),
    info(
        title = "Villa API",
        version = "0.1.0",
        description = "CRUD API for the villa catalog",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
