/// Binary and directory name used for config and session storage
pub(crate) const APP_NAME: &str = "creaturegen";

/// Catalog file read from the working directory when none is configured
pub(crate) const DEFAULT_CATALOG: &str = "creature_types.txt";

/// Number of history entries kept per session unless configured otherwise
pub(crate) const DEFAULT_HISTORY_CAP: usize = 50;

/// Session used when `--session` is not given
pub(crate) const DEFAULT_SESSION: &str = "default";
