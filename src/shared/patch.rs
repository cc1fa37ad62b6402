use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// A single field-level mutation applied to a flat JSON object before a
/// partial update is persisted.
///
/// Only top-level paths are supported (`"/name"` or `"name"`); the shapes
/// patched here have no nested fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Overwrite an existing field. Fails if the field is not present.
    Replace { path: String, value: Value },
    /// Set a field, inserting it if absent.
    Add { path: String, value: Value },
    /// Delete a field. Fails if the field is not present.
    Remove { path: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("Patch target is not an object")]
    NotAnObject,

    #[error("Invalid patch path '{0}': only top-level fields are supported")]
    InvalidPath(String),

    #[error("Patch path '{0}' does not exist")]
    MissingField(String),
}

impl PatchOp {
    fn path(&self) -> &str {
        match self {
            PatchOp::Replace { path, .. } => path,
            PatchOp::Add { path, .. } => path,
            PatchOp::Remove { path } => path,
        }
    }

    /// The field this operation targets: the path with its leading slash
    /// stripped. Nested or empty paths are rejected.
    pub fn field(&self) -> Result<&str, PatchError> {
        let path = self.path();
        let name = path.strip_prefix('/').unwrap_or(path);
        if name.is_empty() || name.contains('/') {
            return Err(PatchError::InvalidPath(path.to_string()));
        }
        Ok(name)
    }
}

/// Apply a sequence of patch operations to an in-memory JSON object.
///
/// Operations are applied in order; the first failing operation aborts the
/// whole patch and the target is left in whatever state the preceding
/// operations produced, so callers should patch a disposable copy.
pub fn apply(target: &mut Value, ops: &[PatchOp]) -> Result<(), PatchError> {
    for op in ops {
        let field = op.field()?;
        let object = target.as_object_mut().ok_or(PatchError::NotAnObject)?;

        match op {
            PatchOp::Replace { value, .. } => {
                if !object.contains_key(field) {
                    return Err(PatchError::MissingField(op.path().to_string()));
                }
                object.insert(field.to_string(), value.clone());
            }
            PatchOp::Add { value, .. } => {
                object.insert(field.to_string(), value.clone());
            }
            PatchOp::Remove { .. } => {
                if object.remove(field).is_none() {
                    return Err(PatchError::MissingField(op.path().to_string()));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replace_overwrites_existing_field() {
        let mut target = json!({"name": "Villa Real", "occupants": 5});

        apply(
            &mut target,
            &[PatchOp::Replace {
                path: "/name".to_string(),
                value: json!("Villa Azul"),
            }],
        )
        .unwrap();

        assert_eq!(target, json!({"name": "Villa Azul", "occupants": 5}));
    }

    #[test]
    fn replace_missing_field_fails() {
        let mut target = json!({"name": "Villa Real"});

        let err = apply(
            &mut target,
            &[PatchOp::Replace {
                path: "/color".to_string(),
                value: json!("blue"),
            }],
        )
        .unwrap_err();

        assert_eq!(err, PatchError::MissingField("/color".to_string()));
    }

    #[test]
    fn add_inserts_or_overwrites() {
        let mut target = json!({"name": "Villa Real"});

        apply(
            &mut target,
            &[
                PatchOp::Add {
                    path: "/occupants".to_string(),
                    value: json!(3),
                },
                PatchOp::Add {
                    path: "/name".to_string(),
                    value: json!("Villa Azul"),
                },
            ],
        )
        .unwrap();

        assert_eq!(target, json!({"name": "Villa Azul", "occupants": 3}));
    }

    #[test]
    fn remove_deletes_field() {
        let mut target = json!({"name": "Villa Real", "amenity": "pool"});

        apply(
            &mut target,
            &[PatchOp::Remove {
                path: "/amenity".to_string(),
            }],
        )
        .unwrap();

        assert_eq!(target, json!({"name": "Villa Real"}));
    }

    #[test]
    fn remove_missing_field_fails() {
        let mut target = json!({"name": "Villa Real"});

        let err = apply(
            &mut target,
            &[PatchOp::Remove {
                path: "/amenity".to_string(),
            }],
        )
        .unwrap_err();

        assert_eq!(err, PatchError::MissingField("/amenity".to_string()));
    }

    #[test]
    fn nested_path_is_rejected() {
        let mut target = json!({"name": "Villa Real"});

        let err = apply(
            &mut target,
            &[PatchOp::Replace {
                path: "/details/text".to_string(),
                value: json!("x"),
            }],
        )
        .unwrap_err();

        assert_eq!(err, PatchError::InvalidPath("/details/text".to_string()));
    }

    #[test]
    fn path_without_leading_slash_is_accepted() {
        let mut target = json!({"occupants": 5});

        apply(
            &mut target,
            &[PatchOp::Replace {
                path: "occupants".to_string(),
                value: json!(8),
            }],
        )
        .unwrap();

        assert_eq!(target, json!({"occupants": 8}));
    }

    #[test]
    fn ops_deserialize_from_json_patch_notation() {
        let ops: Vec<PatchOp> = serde_json::from_value(json!([
            {"op": "replace", "path": "/name", "value": "Villa Azul"},
            {"op": "add", "path": "/amenity", "value": "pool"},
            {"op": "remove", "path": "/image_url"}
        ]))
        .unwrap();

        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], PatchOp::Replace { .. }));
        assert!(matches!(ops[1], PatchOp::Add { .. }));
        assert!(matches!(ops[2], PatchOp::Remove { .. }));
    }
}
