//! Signal vocabulary - the fixed set of light/sound cues
//!
//! Every user-visible cue the device emits is defined here as a named
//! constant, so behavioral parity with the deployed firmware is auditable in
//! one place. The mapping to state transitions:
//!
//! | Event | Cue |
//! |---|---|
//! | waiting for config / fetch failed | steady yellow |
//! | countdown | red/green alternating, 500 ms phases, 3 rounds |
//! | measurement start | 1000 Hz tone, 500 ms |
//! | measurement end | steady blue + 1500 Hz tone, 500 ms |
//! | uploading | steady purple |
//!
//! These are presentation-only side effects - nothing in the state machine
//! reads them back.

/// RGB color sent to the LED driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel, 0-255
    pub r: u8,
    /// Green channel, 0-255
    pub g: u8,
    /// Blue channel, 0-255
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Steady yellow: waiting for config, or a fetch just failed
pub const WARNING: Rgb = Rgb::new(255, 255, 0);

/// Countdown "hold" phase
pub const COUNTDOWN_HOLD: Rgb = Rgb::new(255, 0, 0);

/// Countdown "go" phase
pub const COUNTDOWN_GO: Rgb = Rgb::new(0, 255, 0);

/// Measurement complete
pub const COMPLETE: Rgb = Rgb::new(0, 0, 255);

/// Upload in progress
pub const UPLOADING: Rgb = Rgb::new(128, 0, 128);

/// Duration of each countdown color phase in milliseconds
pub const COUNTDOWN_PHASE_MS: u32 = 500;

/// Number of red/green rounds before the start tone
pub const COUNTDOWN_ROUNDS: u32 = 3;

/// Tone marking the start of a measurement
pub const START_TONE_HZ: u16 = 1000;

/// Tone marking the end of a measurement
pub const END_TONE_HZ: u16 = 1500;

/// Duration of both tones in milliseconds
pub const TONE_MS: u32 = 500;

/// Delay before re-attempting a failed config fetch, in milliseconds
pub const FETCH_RETRY_DELAY_MS: u32 = 5000;
