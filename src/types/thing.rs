use serde::Serialize;

use crate::types::error::AppError;

const SCOPE: &str = "thing";

/// The permitted attributes of a thing submitted through the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThingParams {
    pub name: Option<String>,
}

impl ThingParams {
    /// Reads `thing[name]` out of decoded form pairs. At least one `thing[...]`
    /// field must be present; every field other than `name` is dropped.
    pub fn from_form(pairs: &[(String, String)]) -> Result<Self, AppError> {
        let mut scoped = pairs
            .iter()
            .filter_map(|(key, value)| scoped_field(key).map(|field| (field, value)))
            .peekable();

        if scoped.peek().is_none() {
            return Err(AppError::BadRequest(format!(
                "param is missing or the value is empty: {}",
                SCOPE
            )));
        }

        let name = scoped
            .filter(|(field, _)| *field == "name")
            .map(|(_, value)| value.clone())
            .last();

        Ok(ThingParams { name })
    }
}

fn scoped_field(key: &str) -> Option<&str> {
    key.strip_prefix(SCOPE)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

/// A thing as the views see it.
#[derive(Serialize)]
pub struct ThingView {
    pub id: i32,
    pub name: Option<String>,
    pub created_at: String,
}

impl From<entity::thing::Model> for ThingView {
    fn from(model: entity::thing::Model) -> Self {
        ThingView {
            id: model.id,
            name: model.name,
            created_at: model.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}
