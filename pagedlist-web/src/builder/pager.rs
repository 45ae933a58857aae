use pagedlist_core::PagedListInfo;
use tracing::{debug, trace};

use super::window::PageNumberWindow;
use crate::html::HtmlElement;
use crate::options::RenderOptions;
use crate::utils::fill_template;

/// Build the paging control for a paged result as an element tree
///
/// `page_url` maps a page number to its URL and is only called for links that
/// lead somewhere. Returns `None` when the display mode suppresses the pager
/// or when no list items would be rendered.
pub fn build_pager<L, F>(paged_list: &L, page_url: F, options: &RenderOptions) -> Option<HtmlElement>
where
    L: PagedListInfo + ?Sized,
    F: Fn(usize) -> String,
{
    let page_count = paged_list.page_count();
    if !options.display.shows(page_count > 1) {
        debug!(page_count, display = ?options.display, "pager suppressed by display mode");
        return None;
    }

    let window = PageNumberWindow::compute(paged_list.page_number(), page_count, options.page_number_cap());
    trace!(first = window.first, last = window.last, page_count, "page number window");

    let pager = Pager {
        paged_list,
        page_url: &page_url,
        options,
    };
    let mut list_items = Vec::new();

    if options.display_link_to_first_page.shows(window.first > 1) {
        list_items.push(pager.first());
    }

    if options.display_link_to_previous_page.shows(!paged_list.is_first_page()) {
        list_items.push(pager.previous());
    }

    if options.display_page_count_and_current_location {
        list_items.push(pager.page_count_and_location_text());
    }

    if options.display_item_slice_and_total {
        list_items.push(pager.item_slice_and_total_text());
    }

    if options.display_link_to_individual_pages {
        let ellipses = options.display_ellipses_when_not_showing_all_page_numbers;

        if ellipses && window.first > 1 {
            list_items.push(pager.ellipses());
        }

        for target_page_number in window.pages() {
            if target_page_number > window.first && !options.delimiter_between_page_numbers.is_empty() {
                list_items.push(HtmlElement::new("li").with_text(options.delimiter_between_page_numbers.as_str()));
            }
            list_items.push(pager.page(target_page_number));
        }

        if ellipses && window.last < page_count {
            list_items.push(pager.ellipses());
        }
    }

    if options.display_link_to_next_page.shows(!paged_list.is_last_page()) {
        list_items.push(pager.next());
    }

    if options.display_link_to_last_page.shows(window.last < page_count) {
        list_items.push(pager.last());
    }

    if list_items.is_empty() {
        debug!(page_count, "pager has no list items");
        return None;
    }

    if let Some(class) = options.class_to_apply_to_first_list_item_in_pager.as_deref() {
        if let Some(first) = list_items.first_mut() {
            first.add_classes([class]);
        }
    }
    if let Some(class) = options.class_to_apply_to_last_list_item_in_pager.as_deref() {
        if let Some(last) = list_items.last_mut() {
            last.add_classes([class]);
        }
    }

    let mut ul = HtmlElement::new("ul").with_classes(&options.ul_element_classes);
    for mut list_item in list_items {
        list_item.add_classes(&options.li_element_classes);
        ul = ul.with_child(list_item);
    }

    Some(
        HtmlElement::new("div")
            .with_classes(&options.container_div_classes)
            .with_child(ul),
    )
}

/// Render the paging control to markup, see [`build_pager`]
pub fn render_pager<L, F>(paged_list: &L, page_url: F, options: &RenderOptions) -> Option<String>
where
    L: PagedListInfo + ?Sized,
    F: Fn(usize) -> String,
{
    build_pager(paged_list, page_url, options).map(|pager| pager.render())
}

struct Pager<'a, L: ?Sized, F> {
    paged_list: &'a L,
    page_url: &'a F,
    options: &'a RenderOptions,
}

impl<L, F> Pager<'_, L, F>
where
    L: PagedListInfo + ?Sized,
    F: Fn(usize) -> String,
{
    fn wrap_in_list_item(&self, link: HtmlElement, classes: &[&str]) -> HtmlElement {
        let list_item = HtmlElement::new("li").with_classes(classes);
        match &self.options.function_to_transform_each_page_link {
            Some(transform) => transform(list_item, link),
            None => list_item.with_child(link),
        }
    }

    fn navigation_link(&self, format: &str, target_page_number: usize) -> HtmlElement {
        HtmlElement::new("a").with_raw(fill_template(format, &[target_page_number]))
    }

    fn first(&self) -> HtmlElement {
        let target_page_number = 1;
        let first = self.navigation_link(&self.options.link_to_first_page_format, target_page_number);

        if self.paged_list.is_first_page() {
            return self.wrap_in_list_item(first, &["PagedList-skipToFirst", "disabled"]);
        }

        let first = first.with_attr("href", (self.page_url)(target_page_number));
        self.wrap_in_list_item(first, &["PagedList-skipToFirst"])
    }

    fn previous(&self) -> HtmlElement {
        // Past the end, step back onto the last existing page.
        let target_page_number = self
            .paged_list
            .page_number()
            .saturating_sub(1)
            .min(self.paged_list.page_count())
            .max(1);
        let previous = self
            .navigation_link(&self.options.link_to_previous_page_format, target_page_number)
            .with_attr("rel", "prev");

        if !self.paged_list.has_previous_page() {
            return self.wrap_in_list_item(previous, &["PagedList-skipToPrevious", "disabled"]);
        }

        let previous = previous.with_attr("href", (self.page_url)(target_page_number));
        self.wrap_in_list_item(previous, &["PagedList-skipToPrevious"])
    }

    fn page(&self, target_page_number: usize) -> HtmlElement {
        let label = match &self.options.function_to_display_each_page_number {
            Some(page_label) => page_label(target_page_number),
            None => fill_template(&self.options.link_to_individual_page_format, &[target_page_number]),
        };
        let page = HtmlElement::new("a").with_text(label);

        if self.paged_list.page_number() == target_page_number {
            return self.wrap_in_list_item(page, &["active"]);
        }

        let page = page.with_attr("href", (self.page_url)(target_page_number));
        self.wrap_in_list_item(page, &[])
    }

    fn next(&self) -> HtmlElement {
        let target_page_number = self.paged_list.page_number().saturating_add(1);
        let next = self
            .navigation_link(&self.options.link_to_next_page_format, target_page_number)
            .with_attr("rel", "next");

        if !self.paged_list.has_next_page() {
            return self.wrap_in_list_item(next, &["PagedList-skipToNext", "disabled"]);
        }

        let next = next.with_attr("href", (self.page_url)(target_page_number));
        self.wrap_in_list_item(next, &["PagedList-skipToNext"])
    }

    fn last(&self) -> HtmlElement {
        let target_page_number = self.paged_list.page_count();
        let last = self.navigation_link(&self.options.link_to_last_page_format, target_page_number);

        if self.paged_list.is_last_page() {
            return self.wrap_in_list_item(last, &["PagedList-skipToLast", "disabled"]);
        }

        let last = last.with_attr("href", (self.page_url)(target_page_number));
        self.wrap_in_list_item(last, &["PagedList-skipToLast"])
    }

    fn page_count_and_location_text(&self) -> HtmlElement {
        let text = fill_template(
            &self.options.page_count_and_current_location_format,
            &[self.paged_list.page_number(), self.paged_list.page_count()],
        );
        let text = HtmlElement::new("a").with_text(text);
        self.wrap_in_list_item(text, &["PagedList-pageCountAndLocation", "disabled"])
    }

    fn item_slice_and_total_text(&self) -> HtmlElement {
        let text = fill_template(
            &self.options.item_slice_and_total_format,
            &[
                self.paged_list.first_item_on_page(),
                self.paged_list.last_item_on_page(),
                self.paged_list.total_item_count(),
            ],
        );
        let text = HtmlElement::new("a").with_text(text);
        self.wrap_in_list_item(text, &["PagedList-pageCountAndLocation", "disabled"])
    }

    fn ellipses(&self) -> HtmlElement {
        let ellipses = HtmlElement::new("a").with_raw(self.options.ellipses_format.as_str());
        self.wrap_in_list_item(ellipses, &["PagedList-ellipses", "disabled"])
    }
}
