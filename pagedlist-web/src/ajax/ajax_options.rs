use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where the response of an asynchronous request is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InsertionMode {
    #[default]
    #[serde(rename = "replace")]
    Replace,
    #[serde(rename = "before")]
    InsertBefore,
    #[serde(rename = "after")]
    InsertAfter,
}

impl InsertionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertionMode::Replace => "replace",
            InsertionMode::InsertBefore => "before",
            InsertionMode::InsertAfter => "after",
        }
    }
}

/// Progressive-enhancement settings for links and forms
///
/// Rendered as `data-ajax-*` attributes understood by unobtrusive AJAX
/// client scripts; the markup stays fully functional without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AjaxOptions {
    /// HTTP request method, e.g. `GET` or `POST`
    pub http_method: Option<String>,
    /// URL to request instead of the element's own href/action
    pub url: Option<String>,
    pub insertion_mode: InsertionMode,
    /// Id of the element receiving the response
    pub update_target_id: Option<String>,
    /// Milliseconds for showing or hiding the loading element
    pub loading_element_duration: Option<u32>,
    /// Id of the element displayed while the request is in flight
    pub loading_element_id: Option<String>,
    /// Confirmation prompt shown before the request is sent
    pub confirm: Option<String>,
    pub on_begin: Option<String>,
    pub on_success: Option<String>,
    pub on_failure: Option<String>,
    pub on_complete: Option<String>,
}

impl AjaxOptions {
    /// GET the target into `element_id`, replacing its content
    ///
    /// A leading `#` on `element_id` is ignored.
    pub fn replace_target(element_id: &str) -> Self {
        Self {
            http_method: Some("GET".to_string()),
            insertion_mode: InsertionMode::Replace,
            update_target_id: Some(element_id.trim_start_matches('#').to_string()),
            ..Self::default()
        }
    }

    /// Attributes to attach to an anchor or form; empty settings are omitted
    pub fn to_unobtrusive_html_attributes(&self) -> BTreeMap<String, String> {
        let mut attributes = BTreeMap::new();
        attributes.insert("data-ajax".to_string(), "true".to_string());

        insert_if_specified(&mut attributes, "data-ajax-url", self.url.as_deref());
        insert_if_specified(&mut attributes, "data-ajax-method", self.http_method.as_deref());
        insert_if_specified(&mut attributes, "data-ajax-confirm", self.confirm.as_deref());

        // Events
        insert_if_specified(&mut attributes, "data-ajax-begin", self.on_begin.as_deref());
        insert_if_specified(&mut attributes, "data-ajax-complete", self.on_complete.as_deref());
        insert_if_specified(&mut attributes, "data-ajax-failure", self.on_failure.as_deref());
        insert_if_specified(&mut attributes, "data-ajax-success", self.on_success.as_deref());

        if let Some(loading_element_id) = self.loading_element_id.as_deref().filter(|id| !id.is_empty()) {
            attributes.insert("data-ajax-loading".to_string(), format!("#{loading_element_id}"));

            if let Some(duration) = self.loading_element_duration.filter(|duration| *duration > 0) {
                attributes.insert("data-ajax-loading-duration".to_string(), duration.to_string());
            }
        }

        if let Some(update_target_id) = self.update_target_id.as_deref().filter(|id| !id.is_empty()) {
            attributes.insert("data-ajax-update".to_string(), format!("#{update_target_id}"));
            attributes.insert("data-ajax-mode".to_string(), self.insertion_mode.as_str().to_string());
        }

        attributes
    }
}

fn insert_if_specified(attributes: &mut BTreeMap<String, String>, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        attributes.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_only_flag_ajax() {
        let attributes = AjaxOptions::default().to_unobtrusive_html_attributes();
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes["data-ajax"], "true");
    }

    #[test]
    fn test_replace_target_strips_hash() {
        let attributes = AjaxOptions::replace_target("#tracks").to_unobtrusive_html_attributes();

        assert_eq!(attributes["data-ajax-method"], "GET");
        assert_eq!(attributes["data-ajax-update"], "#tracks");
        assert_eq!(attributes["data-ajax-mode"], "replace");
        assert_eq!(attributes.len(), 4);
    }

    #[test]
    fn test_all_settings() {
        let options = AjaxOptions {
            http_method: Some("POST".to_string()),
            url: Some("/tracks/partial".to_string()),
            insertion_mode: InsertionMode::InsertAfter,
            update_target_id: Some("list".to_string()),
            loading_element_duration: Some(250),
            loading_element_id: Some("spinner".to_string()),
            confirm: Some("Load more?".to_string()),
            on_begin: Some("onBegin".to_string()),
            on_success: Some("onSuccess".to_string()),
            on_failure: Some("onFailure".to_string()),
            on_complete: Some("onComplete".to_string()),
        };
        let attributes = options.to_unobtrusive_html_attributes();

        assert_eq!(attributes["data-ajax-url"], "/tracks/partial");
        assert_eq!(attributes["data-ajax-confirm"], "Load more?");
        assert_eq!(attributes["data-ajax-loading"], "#spinner");
        assert_eq!(attributes["data-ajax-loading-duration"], "250");
        assert_eq!(attributes["data-ajax-mode"], "after");
        assert_eq!(attributes["data-ajax-begin"], "onBegin");
        assert_eq!(attributes["data-ajax-complete"], "onComplete");
        assert_eq!(attributes["data-ajax-failure"], "onFailure");
        assert_eq!(attributes["data-ajax-success"], "onSuccess");
        assert_eq!(attributes.len(), 12);
    }

    #[test]
    fn test_empty_values_and_orphan_settings_are_omitted() {
        let options = AjaxOptions {
            confirm: Some(String::new()),
            loading_element_duration: Some(300),
            insertion_mode: InsertionMode::InsertBefore,
            ..AjaxOptions::default()
        };
        let attributes = options.to_unobtrusive_html_attributes();

        assert!(!attributes.contains_key("data-ajax-confirm"));
        assert!(!attributes.contains_key("data-ajax-loading-duration"));
        assert!(!attributes.contains_key("data-ajax-mode"));
    }

    #[test]
    fn test_zero_loading_duration_is_omitted() {
        let options = AjaxOptions {
            loading_element_id: Some("spinner".to_string()),
            loading_element_duration: Some(0),
            ..AjaxOptions::default()
        };
        let attributes = options.to_unobtrusive_html_attributes();

        assert_eq!(attributes["data-ajax-loading"], "#spinner");
        assert!(!attributes.contains_key("data-ajax-loading-duration"));
    }

    #[test]
    fn test_deserialize_insertion_mode() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let options: AjaxOptions = serde_json::from_str(r#"{"insertion_mode": "before", "update_target_id": "x"}"#)?;
        assert_eq!(options.insertion_mode, InsertionMode::InsertBefore);
        assert_eq!(options.http_method, None);
        Ok(())
    }
}
