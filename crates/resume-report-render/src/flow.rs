use crate::backend::RenderBackend;
use crate::error::RenderError;

/// Bottom reserve and restart height for one content section.
///
/// Long-running text sections keep a larger reserve so overflow is caught
/// item-by-item or line-by-line rather than once per block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakPolicy {
    /// Space kept free above the bottom edge while this section draws.
    pub bottom_reserve: f32,
    /// Cursor height content restarts at after a break.
    pub restart_y: f32,
}

/// Owns the vertical cursor and current page index.
///
/// No other component writes the cursor; sections request advances and
/// space checks here. Page breaks are monotonic: the page index never
/// decreases and content never lands on an earlier page retroactively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageFlow {
    y: f32,
    page_index: usize,
    page_height: f32,
}

impl PageFlow {
    /// Start on the first page with the cursor at `start_y`.
    pub fn new(page_height: f32, start_y: f32) -> Self {
        Self {
            y: start_y,
            page_index: 0,
            page_height,
        }
    }

    /// Current cursor height on the current page.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current page, 0-based.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Pages produced so far.
    pub fn page_count(&self) -> usize {
        self.page_index + 1
    }

    /// Break to a new page unless `required` height fits above the
    /// section's bottom reserve. At most one break per call; with
    /// `required = 0` a repeated call never breaks again.
    pub fn ensure_space<B>(
        &mut self,
        backend: &mut B,
        required: f32,
        policy: &BreakPolicy,
    ) -> Result<(), RenderError>
    where
        B: RenderBackend + ?Sized,
    {
        if self.y + required > self.page_height - policy.bottom_reserve {
            backend.new_page()?;
            self.page_index += 1;
            self.y = policy.restart_y;
            log::debug!("page break onto page {}", self.page_index + 1);
        }
        Ok(())
    }

    /// Move the cursor down unconditionally. Never breaks.
    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }
}
