//! Fixed controller constants.

/// TCP port the vManage REST interface listens on.
pub const VMANAGE_PORT: u16 = 8443;

/// Per-request timeout for controller calls, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;
