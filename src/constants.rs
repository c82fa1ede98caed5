//! Application-wide constants
//!
//! Single source of truth for storage locations and the built-in
//! default army list.

/// Storage location constants
pub mod storage {
    /// Directory under the platform data dir holding application state
    pub const APP_DIR: &str = "company-commander";

    /// File name of the persisted army list document
    pub const FILENAME: &str = "army_list.json";
}

/// Built-in default list seeded on first use
pub mod defaults {
    /// Name of the list created when no stored document exists
    pub const LIST_NAME: &str = "default";

    /// Nationality of the default list
    pub const NATIONALITY: &str = "Britain";

    /// Theater selector of the default list
    pub const THEATER_SELECTOR: &str = "1944 - Normandy";
}
