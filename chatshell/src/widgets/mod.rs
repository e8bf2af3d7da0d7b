pub(crate) mod config;
pub(crate) mod logo;
pub(crate) mod sessions;
pub(crate) mod sidebar;
