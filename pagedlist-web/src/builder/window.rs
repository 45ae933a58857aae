/// Inclusive range of page numbers that get their own link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumberWindow {
    pub first: usize,
    pub last: usize,
}

impl PageNumberWindow {
    /// Window over `1..=page_count`, or `cap` pages centered on `page_number`
    ///
    /// The window starts `cap / 2` pages before the current page (rounding
    /// down), never before page 1, and is shifted left so it never ends past
    /// `page_count`. A cap of zero is treated as one.
    pub fn compute(page_number: usize, page_count: usize, cap: Option<usize>) -> Self {
        match cap.map(|cap| cap.max(1)) {
            Some(cap) if page_count > cap => {
                let mut first = page_number.saturating_sub(cap / 2).max(1);
                if first.saturating_add(cap - 1) > page_count {
                    first = page_count - cap + 1;
                }
                Self {
                    first,
                    last: first + cap - 1,
                }
            }
            _ => Self {
                first: 1,
                last: page_count,
            },
        }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }
}
