//! In-memory data source: count is the length, windowed fetch is a sub-slice.

use super::count_items::CountItems;
use super::fetch_window::FetchWindow;
use super::pagination::PageWindow;

impl<T> CountItems for [T] {
    fn count_items(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.len())
    }
}

impl<T: Clone> FetchWindow<T> for [T] {
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self[window.clamp_to(self.len())].to_vec())
    }
}

impl<T> CountItems for Vec<T> {
    fn count_items(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        self.as_slice().count_items()
    }
}

impl<T: Clone> FetchWindow<T> for Vec<T> {
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>> {
        self.as_slice().fetch_window(window)
    }
}
