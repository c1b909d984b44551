//! Red/Blue Ball - a page that remembers your color
//!
//! Core modules:
//! - `store`: Cookie-style key/value persistence (browser, in-memory, disabled)
//! - `choice`: Picks or recalls the color and tallies visits
//! - `render`: Pure page-update plan plus the DOM adapter that applies it
//! - `page`: One-shot page-load orchestration

pub mod choice;
pub mod page;
pub mod render;
pub mod store;

pub use choice::{
    Choice, ChoiceState, RandomSource, get_or_assign_choice, parse_leading_int, seeded_source,
};
pub use page::{PageLoad, start};
pub use render::{BallSpec, UiUpdate, plan_page, render_ball, render_labels};
pub use store::{CookieSource, CookieStore, Expiry, MemoryStore, NullStore, Store};

/// Page configuration constants
pub mod consts {
    /// Storage key holding the remembered color
    pub const COLOR_KEY: &str = "color";
    /// Storage key holding the red tally
    pub const RED_COUNT_KEY: &str = "redCount";
    /// Storage key holding the blue tally
    pub const BLUE_COUNT_KEY: &str = "blueCount";
    /// Lifetime of every entry the tracker writes
    pub const CHOICE_EXPIRY_DAYS: i64 = 365;

    /// Milliseconds in one day
    pub const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

    /// Container that receives the SVG ball
    pub const BALL_SELECTOR: &str = "#ball";
    pub const RED_COUNT_SELECTOR: &str = "#redCount";
    pub const BLUE_COUNT_SELECTOR: &str = "#blueCount";
    pub const PREVIOUS_COLOR_SELECTOR: &str = "#previousColor";

    /// Ball geometry (SVG user units)
    pub const BALL_SIZE: u32 = 100;
    pub const BALL_CENTER: u32 = 50;
    pub const BALL_RADIUS: u32 = 50;
}
