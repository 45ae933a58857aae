use pagedlist_core::PagedListInfo;

use crate::html::HtmlElement;
use crate::options::GoToFormOptions;

/// Build a "Go to page" form pre-filled with the current page number
pub fn build_goto_form<L>(paged_list: &L, form_action: &str, options: &GoToFormOptions) -> HtmlElement
where
    L: PagedListInfo + ?Sized,
{
    let mut form = HtmlElement::new("form")
        .with_classes(["PagedList-goToPage"])
        .with_attr("action", form_action)
        .with_attr("method", "get");
    form.extend_attrs(&options.extra_form_attrs);

    let label = HtmlElement::new("label")
        .with_attr("for", options.input_field_name.as_str())
        .with_text(options.label_format.as_str());

    let input = HtmlElement::new("input")
        .with_attr("type", options.input_field_type.as_str())
        .with_attr("name", options.input_field_name.as_str())
        .with_attr("value", paged_list.page_number().to_string());

    let submit = HtmlElement::new("input")
        .with_attr("type", "submit")
        .with_attr("value", options.submit_button_format.as_str());

    let fieldset = HtmlElement::new("fieldset")
        .with_child(label)
        .with_child(input)
        .with_child(submit);

    form.with_child(fieldset)
}

/// Render the "Go to page" form to markup, see [`build_goto_form`]
pub fn render_goto_form<L>(paged_list: &L, form_action: &str, options: &GoToFormOptions) -> String
where
    L: PagedListInfo + ?Sized,
{
    build_goto_form(paged_list, form_action, options).render()
}
