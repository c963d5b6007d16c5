// Widget configuration: palette, defaults, and audio/visual tuning.
// Read-only to the core; the core receives these as plain values.

/// Slice fill palette, cycled per slice index.
pub const COLORS: &[&str] = &[
    "#ef476f", "#f78c6b", "#ffd166", "#83d483", "#06d6a0", "#0cb0a9", "#118ab2", "#073b4c",
];

/// Initial textarea contents before the user types anything.
pub const DEFAULT_CHOICES: &[&str] = &[
    "Pizza", "Tacos", "Sushi", "Burgers", "Ramen", "Falafel", "Curry",
];

// Wheel geometry (viewBox units; the rim is the unit circle)
pub const VIEWBOX: &str = "-1.1 -1.1 2.2 2.2";
pub const CENTER_RADIUS: f64 = 0.25;
pub const LABEL_OFFSET_X: f64 = -0.905;
pub const LABEL_OFFSET_Y: f64 = 0.025;
pub const PEG_RING_RADIUS: f64 = 0.96;
pub const PEG_RADIUS: f64 = 0.012;

/// Fixed pointer flapper at the left rim (SVG polygon points).
pub const POINTER_POINTS: &str = "-1.1,-0.05 -1.1,0.05 -0.95,0";

// Decorative pegs
pub const MIN_PEG_COUNT: usize = 35;

// Tick cue
pub const TICK_VOLUME: f32 = 0.4;
pub const TICK_FREQ_HZ: f32 = 2200.0;
pub const TICK_DURATION_SEC: f64 = 0.03;

// Demo mode (idle color cycling)
pub const DEMO_SHUFFLE_INTERVAL_MS: u64 = 250;
pub const DEMO_RESUME_DELAY_MS: u64 = 30_000;
