// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Pagination state machine: `1 <= current <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    current: u32,
    total: u32,
}

impl Default for PagerState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PagerState {
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn in_range(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }

    /// Moves to `page`. Out-of-range requests are no-ops and return false;
    /// the caller triggers a load only on true.
    pub fn go_to(&mut self, page: u32) -> bool {
        if !self.in_range(page) {
            return false;
        }
        self.current = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.current < self.total && self.go_to(self.current + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.current > 1 && self.go_to(self.current - 1)
    }

    /// Adopts server pagination metadata, clamping the cursor when the
    /// collection shrank underneath it. A total of 0 is a single empty page.
    pub fn sync(&mut self, current: u32, total: u32) {
        self.total = total.max(1);
        self.current = current.clamp(1, self.total);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripEntry {
    Page(u32),
    Ellipsis,
}

/// Renders the bounded page-number strip: first page, last page, the
/// current page with up to two neighbors on each side, and one ellipsis per
/// gap. The result is strictly increasing with no adjacent ellipses.
pub fn page_strip(current: u32, total: u32) -> Vec<PageStripEntry> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut strip = Vec::new();
    for page in 1..=total {
        let visible =
            total <= 7 || page == 1 || page == total || page.abs_diff(current) <= 2;
        if visible {
            strip.push(PageStripEntry::Page(page));
        } else if strip.last() != Some(&PageStripEntry::Ellipsis) {
            strip.push(PageStripEntry::Ellipsis);
        }
    }
    strip
}
