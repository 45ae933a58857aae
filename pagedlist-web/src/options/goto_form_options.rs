use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ajax::AjaxOptions;

/// Settings for the "Go to page" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoToFormOptions {
    pub label_format: String,
    pub submit_button_format: String,
    pub input_field_name: String,
    pub input_field_type: String,
    /// Extra attributes written onto the `<form>` element
    pub extra_form_attrs: BTreeMap<String, String>,
}

impl Default for GoToFormOptions {
    fn default() -> Self {
        Self::with_input_field_name("page")
    }
}

impl GoToFormOptions {
    pub fn with_input_field_name(input_field_name: impl Into<String>) -> Self {
        Self {
            label_format: "Go to page:".to_string(),
            submit_button_format: "Go".to_string(),
            input_field_name: input_field_name.into(),
            input_field_type: "number".to_string(),
            extra_form_attrs: BTreeMap::new(),
        }
    }

    /// Submit the form asynchronously using the given AJAX settings
    pub fn enable_unobtrusive_ajax_replacing(mut self, ajax_options: AjaxOptions) -> Self {
        self.extra_form_attrs
            .extend(ajax_options.to_unobtrusive_html_attributes());
        self
    }

    /// Default form that GETs the chosen page into `element_id`
    pub fn unobtrusive_ajax_target(element_id: &str) -> Self {
        Self::default().enable_unobtrusive_ajax_replacing(AjaxOptions::replace_target(element_id))
    }
}
