//! Villa catalog feature: CRUD over a single `villas` table.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/villas` | List all villas |
//! | GET | `/api/villas/{id}` | Get a villa by id |
//! | POST | `/api/villas` | Create a villa |
//! | PUT | `/api/villas/{id}` | Fully overwrite a villa |
//! | PATCH | `/api/villas/{id}` | Apply field-level patch operations |
//! | DELETE | `/api/villas/{id}` | Delete a villa |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::VillaService;
