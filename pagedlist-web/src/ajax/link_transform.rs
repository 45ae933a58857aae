use std::sync::Arc;

use crate::html::HtmlElement;
use crate::options::LinkTransform;

use super::ajax_options::AjaxOptions;

/// Link transform attaching AJAX attributes to every navigable page link
///
/// Anchors inside list items marked `disabled` or `active` are left as they
/// are; they do not navigate anywhere.
pub fn unobtrusive_link_transform(ajax_options: &AjaxOptions) -> LinkTransform {
    let attributes = ajax_options.to_unobtrusive_html_attributes();

    Arc::new(move |list_item: HtmlElement, mut link: HtmlElement| {
        if !list_item.has_class("disabled") && !list_item.has_class("active") {
            link.extend_attrs(attributes.iter().map(|(name, value)| (name.as_str(), value.as_str())));
        }
        list_item.with_child(link)
    })
}
