pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Fixed values used by the terminal dashboard, grouped by functional area.

    // =============================================================================
    // UI LOOP CONFIGURATION
    // =============================================================================

    /// The maximum number of entries to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the event loop waits for input before redrawing (milliseconds)
    pub const TICK_RATE_MS: u64 = 100;

    /// How long the splash screen stays up unless a key is pressed (seconds)
    pub const SPLASH_DURATION_SECS: u64 = 2;

    // =============================================================================
    // BRANDING
    // =============================================================================

    pub mod branding {
        /// Product name shown in the header.
        pub const PRODUCT_NAME: &str = "VISTA";

        pub const TAGLINE: &str = "Sentiment Intelligence";

        pub const PLATFORM_BADGE: &str = "Government Analytics Platform";

        /// Timestamp of the dataset snapshot shown in the header.
        pub const LAST_UPDATED: &str = "2024-03-15 14:30 UTC";

        pub const DASHBOARD_TITLE: &str = "Sentiment Intelligence Dashboard";

        pub const FRAMEWORK_LINE: &str =
            "VISTA Framework • Voice • Interpretation • Storyline • Trajectory • Alignment";

        /// Summary badges shown next to the dashboard title.
        pub const SUMMARY_BADGES: [&str; 2] = ["1.2M+ Posts Analyzed", "8 Platforms"];

        pub const FOOTER_NOTICE: &str =
            "© 2024 VISTA Sentiment Intelligence Framework • Government Analytics Platform";
    }

    // =============================================================================
    // CONFIGURATION FILES
    // =============================================================================

    /// Directory under the home directory holding the configuration file
    pub const CONFIG_DIR: &str = ".vista";

    pub const CONFIG_FILE: &str = "config.json";

    // =============================================================================
    // SNAPSHOT DEFAULTS
    // =============================================================================

    /// Default off-screen buffer size for `vista snapshot`
    pub const SNAPSHOT_WIDTH: u16 = 140;
    pub const SNAPSHOT_HEIGHT: u16 = 48;
}
