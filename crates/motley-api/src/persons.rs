//! Handlers for `/persons` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/persons` | All records |
//! | `GET`  | `/persons/{id}` | 404 if not found |
//! | `GET`  | `/persons/color/{name}` | Unknown names match nothing |
//! | `POST` | `/persons` | Body: a `NewPerson`; 400 on invalid color code |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use motley_core::{person::NewPerson, store::PersonStore};

use crate::{
  error::ApiError,
  service::{PersonRecord, PersonService},
};

/// `GET /persons`
pub async fn list<S>(
  State(service): State<PersonService<S>>,
) -> Result<Json<Vec<PersonRecord>>, ApiError>
where
  S: PersonStore,
{
  let records = service.list_all().await?;
  Ok(Json(records))
}

/// `GET /persons/{id}`
pub async fn get_one<S>(
  State(service): State<PersonService<S>>,
  Path(id): Path<i64>,
) -> Result<Json<PersonRecord>, ApiError>
where
  S: PersonStore,
{
  let record = service
    .get(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(record))
}

/// `GET /persons/color/{name}`
pub async fn by_color<S>(
  State(service): State<PersonService<S>>,
  Path(name): Path<String>,
) -> Result<Json<Vec<PersonRecord>>, ApiError>
where
  S: PersonStore,
{
  let records = service.list_by_color_name(&name).await?;
  Ok(Json(records))
}

/// `POST /persons` — body: a JSON [`NewPerson`]
pub async fn create<S>(
  State(service): State<PersonService<S>>,
  Json(body): Json<NewPerson>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PersonStore,
{
  let record = service.create(body).await?;
  Ok((StatusCode::CREATED, Json(record)))
}
