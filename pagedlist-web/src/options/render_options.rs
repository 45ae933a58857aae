use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::display_mode::DisplayMode;
use crate::ajax::{unobtrusive_link_transform, AjaxOptions};
use crate::html::HtmlElement;

/// Custom label for an individual page link, given its page number
pub type PageLabel = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Hook combining a list item and its anchor into the rendered list item
///
/// The list item arrives with its classes already set and without children.
pub type LinkTransform = Arc<dyn Fn(HtmlElement, HtmlElement) -> HtmlElement + Send + Sync>;

/// Settings controlling which pager controls are rendered and how
///
/// The defaults render every navigation link and no descriptive text.
/// Callable fields are not part of the serialized configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Always render, never render, or render only when there is more than one page
    pub display: DisplayMode,
    /// `IfNeeded` renders the link only when page 1 is outside the page-number window
    pub display_link_to_first_page: DisplayMode,
    /// `IfNeeded` renders the link only when the last page is outside the page-number window
    pub display_link_to_last_page: DisplayMode,
    /// `IfNeeded` renders the link only when there is a previous page
    pub display_link_to_previous_page: DisplayMode,
    /// `IfNeeded` renders the link only when there is a next page
    pub display_link_to_next_page: DisplayMode,
    pub display_link_to_individual_pages: bool,
    /// "Page X of Y." text
    pub display_page_count_and_current_location: bool,
    /// "Showing items A through B of N." text
    pub display_item_slice_and_total: bool,
    /// Cap on page-number links, `None` shows all of them
    pub maximum_page_numbers_to_display: Option<usize>,
    pub display_ellipses_when_not_showing_all_page_numbers: bool,
    pub ellipses_format: String,
    pub link_to_first_page_format: String,
    pub link_to_previous_page_format: String,
    pub link_to_individual_page_format: String,
    pub link_to_next_page_format: String,
    pub link_to_last_page_format: String,
    pub page_count_and_current_location_format: String,
    pub item_slice_and_total_format: String,
    #[serde(skip)]
    pub function_to_display_each_page_number: Option<PageLabel>,
    pub class_to_apply_to_first_list_item_in_pager: Option<String>,
    pub class_to_apply_to_last_list_item_in_pager: Option<String>,
    pub container_div_classes: Vec<String>,
    pub ul_element_classes: Vec<String>,
    pub li_element_classes: Vec<String>,
    #[serde(skip)]
    pub function_to_transform_each_page_link: Option<LinkTransform>,
    pub delimiter_between_page_numbers: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            display: DisplayMode::Always,
            display_link_to_first_page: DisplayMode::IfNeeded,
            display_link_to_last_page: DisplayMode::IfNeeded,
            display_link_to_previous_page: DisplayMode::IfNeeded,
            display_link_to_next_page: DisplayMode::IfNeeded,
            display_link_to_individual_pages: true,
            display_page_count_and_current_location: false,
            display_item_slice_and_total: false,
            maximum_page_numbers_to_display: Some(10),
            display_ellipses_when_not_showing_all_page_numbers: true,
            ellipses_format: "&#8230;".to_string(),
            link_to_first_page_format: "&laquo;&laquo;".to_string(),
            link_to_previous_page_format: "&laquo;".to_string(),
            link_to_individual_page_format: "{0}".to_string(),
            link_to_next_page_format: "&raquo;".to_string(),
            link_to_last_page_format: "&raquo;&raquo;".to_string(),
            page_count_and_current_location_format: "Page {0} of {1}.".to_string(),
            item_slice_and_total_format: "Showing items {0} through {1} of {2}.".to_string(),
            function_to_display_each_page_number: None,
            class_to_apply_to_first_list_item_in_pager: None,
            class_to_apply_to_last_list_item_in_pager: None,
            container_div_classes: vec!["pagination-container".to_string()],
            ul_element_classes: vec!["pagination".to_string()],
            li_element_classes: Vec::new(),
            function_to_transform_each_page_link: None,
            delimiter_between_page_numbers: String::new(),
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("display", &self.display)
            .field("display_link_to_first_page", &self.display_link_to_first_page)
            .field("display_link_to_last_page", &self.display_link_to_last_page)
            .field("display_link_to_previous_page", &self.display_link_to_previous_page)
            .field("display_link_to_next_page", &self.display_link_to_next_page)
            .field("display_link_to_individual_pages", &self.display_link_to_individual_pages)
            .field("maximum_page_numbers_to_display", &self.maximum_page_numbers_to_display)
            .field(
                "has_page_label",
                &self.function_to_display_each_page_number.is_some(),
            )
            .field(
                "has_link_transform",
                &self.function_to_transform_each_page_link.is_some(),
            )
            .finish_non_exhaustive()
    }
}

impl RenderOptions {
    /// Page-number cap, never below 1
    pub fn page_number_cap(&self) -> Option<usize> {
        self.maximum_page_numbers_to_display.map(|cap| cap.max(1))
    }

    /// Replace page links asynchronously using the given AJAX settings
    ///
    /// Disabled and active links are left alone.
    pub fn enable_unobtrusive_ajax_replacing(mut self, ajax_options: AjaxOptions) -> Self {
        self.function_to_transform_each_page_link = Some(unobtrusive_link_transform(&ajax_options));
        self
    }

    /// Default options whose links GET the target page into `element_id`
    ///
    /// A leading `#` on `element_id` is ignored.
    pub fn unobtrusive_ajax_target(element_id: &str) -> Self {
        Self::default().enable_unobtrusive_ajax_replacing(AjaxOptions::replace_target(element_id))
    }

    /// Previous, page numbers and next
    pub fn classic() -> Self {
        Self {
            display_link_to_first_page: DisplayMode::Never,
            display_link_to_last_page: DisplayMode::Never,
            display_link_to_previous_page: DisplayMode::Always,
            display_link_to_next_page: DisplayMode::Always,
            ..Self::default()
        }
    }

    /// Classic plus links to the first and last pages
    pub fn classic_plus_first_and_last() -> Self {
        Self {
            display_link_to_first_page: DisplayMode::Always,
            display_link_to_last_page: DisplayMode::Always,
            display_link_to_previous_page: DisplayMode::Always,
            display_link_to_next_page: DisplayMode::Always,
            ..Self::default()
        }
    }

    /// Only the previous and next links
    pub fn minimal() -> Self {
        Self {
            display_link_to_first_page: DisplayMode::Never,
            display_link_to_last_page: DisplayMode::Never,
            display_link_to_previous_page: DisplayMode::Always,
            display_link_to_next_page: DisplayMode::Always,
            display_link_to_individual_pages: false,
            ..Self::default()
        }
    }

    pub fn minimal_with_page_count_text() -> Self {
        Self {
            display_page_count_and_current_location: true,
            ..Self::minimal()
        }
    }

    pub fn minimal_with_item_count_text() -> Self {
        Self {
            display_item_slice_and_total: true,
            ..Self::minimal()
        }
    }

    /// Only the links to individual pages
    pub fn page_numbers_only() -> Self {
        Self {
            display_link_to_first_page: DisplayMode::Never,
            display_link_to_last_page: DisplayMode::Never,
            display_link_to_previous_page: DisplayMode::Never,
            display_link_to_next_page: DisplayMode::Never,
            display_ellipses_when_not_showing_all_page_numbers: false,
            ..Self::default()
        }
    }

    /// Previous and next around at most five page numbers
    pub fn only_show_five_pages_at_a_time() -> Self {
        Self {
            maximum_page_numbers_to_display: Some(5),
            ..Self::classic()
        }
    }

    /// Bootstrap 2 basic pager
    pub fn twitter_bootstrap_pager() -> Self {
        Self {
            ul_element_classes: vec!["pager".to_string()],
            link_to_previous_page_format: "Previous".to_string(),
            link_to_next_page_format: "Next".to_string(),
            ..Self::minimal()
        }
    }

    /// Bootstrap 2 basic pager with the links pushed to either side
    pub fn twitter_bootstrap_pager_aligned() -> Self {
        Self {
            ul_element_classes: vec!["pager".to_string()],
            class_to_apply_to_first_list_item_in_pager: Some("previous".to_string()),
            class_to_apply_to_last_list_item_in_pager: Some("next".to_string()),
            link_to_previous_page_format: "&larr; Older".to_string(),
            link_to_next_page_format: "Newer &rarr;".to_string(),
            ..Self::minimal()
        }
    }
}
