//! Storage key names.

use std::fmt;

/// Keys the application stores values under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Favorites,
    CommercialFonts,
    Theme,
    Layout,
    PageMode,
    Settings,
    History,
    DismissedTips,
    LastRunVersion,
}

impl StorageKey {
    pub const ALL: [StorageKey; 9] = [
        Self::Favorites,
        Self::CommercialFonts,
        Self::Theme,
        Self::Layout,
        Self::PageMode,
        Self::Settings,
        Self::History,
        Self::DismissedTips,
        Self::LastRunVersion,
    ];

    /// The key string written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorites => "font-viewer-favorites",
            Self::CommercialFonts => "commercialFonts",
            Self::Theme => "font-viewer-theme",
            Self::Layout => "font-viewer-layout",
            Self::PageMode => "pageMode",
            Self::Settings => "font-viewer-settings",
            Self::History => "font-viewer-history",
            Self::DismissedTips => "font-viewer-dismissed-tips",
            Self::LastRunVersion => "font-viewer-last-version",
        }
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
