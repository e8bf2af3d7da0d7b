use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::widgets::sidebar::model::{
    DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH,
    NARROW_SIDEBAR_WIDTH,
};

/// Persisted shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ShellConfig {
    sidebar_width: u32,
    logo_image: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            logo_image: None,
        }
    }
}

impl ShellConfig {
    pub(crate) fn sidebar_width(&self) -> u32 {
        self.sidebar_width
    }

    pub(crate) fn set_sidebar_width(&mut self, width: u32) {
        self.sidebar_width = width;
    }

    pub(crate) fn logo_image(&self) -> Option<&Path> {
        self.logo_image.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn set_logo_image(&mut self, path: Option<PathBuf>) {
        self.logo_image = path;
    }

    /// Return a copy whose width satisfies the sidebar width bounds.
    pub(crate) fn normalized(&self) -> Self {
        Self {
            sidebar_width: normalize_sidebar_width(self.sidebar_width),
            logo_image: self.logo_image.clone(),
        }
    }
}

/// Snap widths below the minimum to narrow mode and clamp the rest.
pub(crate) fn normalize_sidebar_width(width: u32) -> u32 {
    if width < MIN_SIDEBAR_WIDTH {
        NARROW_SIDEBAR_WIDTH
    } else {
        width.min(MAX_SIDEBAR_WIDTH)
    }
}
