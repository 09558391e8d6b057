pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all fixed constants for the admin dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of entries to keep in the activity log panel.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying log records into the activity panel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DEVICE BREAKPOINTS
    // =============================================================================

    /// Device tier breakpoints, in CSS pixels.
    pub mod breakpoints {
        /// Widths up to and including this value are classified as mobile.
        pub const MOBILE_MAX_WIDTH_PX: u32 = 768;

        /// Widths above mobile and up to this value are classified as tablet.
        pub const TABLET_MAX_WIDTH_PX: u32 = 1024;

        /// Default width of one terminal cell, in pixels.
        pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

        /// Default height of one terminal cell, in pixels.
        pub const DEFAULT_CELL_HEIGHT_PX: u32 = 16;
    }

    // =============================================================================
    // LAYOUT CONFIGURATION
    // =============================================================================

    pub mod layout {
        use std::time::Duration;

        /// Storage key of the persisted sidebar preference.
        pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

        /// Minimum horizontal drag, in pixels, recognised as a swipe.
        pub const SWIPE_THRESHOLD_PX: i32 = 50;

        /// Sidebar width in columns while expanded.
        pub const SIDEBAR_EXPANDED_COLS: u16 = 24;

        /// Sidebar width in columns while collapsed (icons only).
        pub const SIDEBAR_COLLAPSED_COLS: u16 = 6;

        /// Delay before the "touching" feedback marker is removed (milliseconds)
        pub const TOUCH_FEEDBACK_MS: u64 = 150;

        /// Two taps closer than this are treated as a double tap (milliseconds)
        pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

        /// Debounce applied to chart refresh after resize and orientation change (milliseconds)
        pub const RESIZE_DEBOUNCE_MS: u64 = 100;

        pub const fn touch_feedback() -> Duration {
            Duration::from_millis(TOUCH_FEEDBACK_MS)
        }

        pub const fn double_tap_window() -> Duration {
            Duration::from_millis(DOUBLE_TAP_WINDOW_MS)
        }

        pub const fn resize_debounce() -> Duration {
            Duration::from_millis(RESIZE_DEBOUNCE_MS)
        }
    }

    // =============================================================================
    // CHART CONFIGURATION
    // =============================================================================

    /// Chart container heights per device tier, in pixels.
    pub mod charts {
        pub const MOBILE_CONTAINER_HEIGHT_PX: u16 = 180;
        pub const TABLET_CONTAINER_HEIGHT_PX: u16 = 220;
        pub const DESKTOP_CONTAINER_HEIGHT_PX: u16 = 300;
    }

    // =============================================================================
    // NOTIFICATIONS & TIMERS
    // =============================================================================

    pub mod timers {
        use std::time::Duration;

        /// Lifetime of a toast notification (milliseconds)
        pub const NOTIFICATION_TTL_MS: u64 = 5000;

        /// Interval of the simulated live order updates (seconds)
        pub const LIVE_UPDATE_INTERVAL_SECS: u64 = 30;

        /// Probability that a row with a status badge changes on each live update.
        pub const LIVE_UPDATE_PROBABILITY: f64 = 0.05;

        /// Delay between cleanup and re-initialisation on a full refresh (milliseconds)
        pub const REFRESH_DELAY_MS: u64 = 100;

        /// UI poll interval of the event loop (milliseconds)
        pub const UI_TICK_MS: u64 = 100;

        /// Counter animation frames advanced per UI tick.
        pub const COUNTER_FRAMES_PER_TICK: usize = 6;

        /// How long the splash screen stays up unless a key is pressed (seconds)
        pub const SPLASH_SECS: u64 = 2;

        pub const fn notification_ttl() -> Duration {
            Duration::from_millis(NOTIFICATION_TTL_MS)
        }

        pub const fn live_update_interval() -> Duration {
            Duration::from_secs(LIVE_UPDATE_INTERVAL_SECS)
        }

        pub const fn refresh_delay() -> Duration {
            Duration::from_millis(REFRESH_DELAY_MS)
        }

        pub const fn ui_tick() -> Duration {
            Duration::from_millis(UI_TICK_MS)
        }
    }
}
