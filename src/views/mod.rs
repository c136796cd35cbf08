use handlebars::{Handlebars, TemplateError};
use serde_json::json;

use crate::types::{
    error::AppError,
    thing::{ThingParams, ThingView},
};

const THINGS_INDEX: &str = "things/index";
const THINGS_NEW: &str = "things/new";

/// Templates compiled once at startup and shared by every worker.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_partial("header", include_str!("../../templates/header.hbs"))?;
        registry.register_partial("footer", include_str!("../../templates/footer.hbs"))?;
        registry.register_template_string(
            THINGS_INDEX,
            include_str!("../../templates/things/index.hbs"),
        )?;
        registry.register_template_string(
            THINGS_NEW,
            include_str!("../../templates/things/new.hbs"),
        )?;
        Ok(Self { registry })
    }

    pub fn things_index(&self, things: &[ThingView]) -> Result<String, AppError> {
        self.render(THINGS_INDEX, &json!({ "title": "Things", "things": things }))
    }

    pub fn things_new(&self, thing: &ThingParams, errors: &[String]) -> Result<String, AppError> {
        self.render(
            THINGS_NEW,
            &json!({ "title": "New thing", "thing": thing, "errors": errors }),
        )
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> Result<String, AppError> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::Internal(e.to_string()))
    }
}
