pub(crate) mod config;
pub(crate) mod sessions;
pub(crate) mod sidebar;
pub(crate) mod window;
