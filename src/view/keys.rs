//! Message keys looked up by the welcome screen

pub const WELCOME: &str = "welcome";
pub const INTRO: &str = "message1";
pub const SESSION_START: &str = "session.start";
pub const SESSION_END: &str = "session.end";
pub const STATUS_ACTIVE: &str = "status.active";
pub const STATUS_INACTIVE: &str = "status.inactive";
/// Takes a `{{language}}` argument
pub const LANGUAGE_STATUS: &str = "languageStatus";
pub const LOADING: &str = "loading";

/// Every key the screen can display
pub const ALL: [&str; 8] = [
    WELCOME,
    INTRO,
    SESSION_START,
    SESSION_END,
    STATUS_ACTIVE,
    STATUS_INACTIVE,
    LANGUAGE_STATUS,
    LOADING,
];
