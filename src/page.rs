//! Dashboard page model.
//!
//! The page is the crate's view of the host document: the render targets
//! charts can draw into, addressed by their well-known element ids, and the
//! list of style resources appended to the page head. Hosts construct one,
//! hand it to the render calls, and serve whatever ends up in it.

use serde::{Deserialize, Serialize};

/// Element id of the macros doughnut target.
pub const MACROS_CHART_ID: &str = "macrosChart";

/// Element id of the weekly trend target.
pub const WEEKLY_CHART_ID: &str = "weeklyChart";

/// A chart slot on the page, with the pixel size backends render at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderTarget {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// One block of style rules appended to the page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleResource {
    pub content: String,
}

/// The dashboard page: chart targets plus appended head styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPage {
    targets: Vec<RenderTarget>,
    head_styles: Vec<StyleResource>,
}

impl DashboardPage {
    /// An empty page with no targets and no styles.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            head_styles: Vec::new(),
        }
    }

    /// A page carrying both standard dashboard chart targets.
    pub fn with_default_targets() -> Self {
        let mut page = Self::new();
        page.add_target(RenderTarget::new(MACROS_CHART_ID, 480, 480));
        page.add_target(RenderTarget::new(WEEKLY_CHART_ID, 640, 320));
        page
    }

    pub fn add_target(&mut self, target: RenderTarget) {
        self.targets.push(target);
    }

    /// Remove a target by id, returning it when present.
    pub fn remove_target(&mut self, id: &str) -> Option<RenderTarget> {
        let index = self.targets.iter().position(|target| target.id == id)?;
        Some(self.targets.remove(index))
    }

    /// Look up a target by its element id.
    pub fn target(&self, id: &str) -> Option<&RenderTarget> {
        self.targets.iter().find(|target| target.id == id)
    }

    /// Append a style resource to the page head.
    pub fn append_style(&mut self, content: impl Into<String>) {
        self.head_styles.push(StyleResource {
            content: content.into(),
        });
    }

    /// Style resources in the order they were appended.
    pub fn head_styles(&self) -> &[StyleResource] {
        &self.head_styles
    }
}

impl Default for DashboardPage {
    /// Defaults to the standard dashboard layout.
    fn default() -> Self {
        Self::with_default_targets()
    }
}
