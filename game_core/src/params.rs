/// Game tuning parameters for Pongdemonium
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_SPEED: f32 = 1000.0; // pixels per second
    pub const PADDLE_INSET: f32 = 25.0; // distance from the side edge to the paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 400.0; // per axis, launch is diagonal
    pub const BALL_VELOCITY_CAP: f32 = 800.0;
    pub const BALL_SPEED_UP: f32 = 1.1; // multiply vx on paddle hit

    // Score
    pub const WIN_SCORE: u32 = 10;
    pub const SECOND_BALL_SCORE: u32 = 3;
    pub const SECOND_BALL_DELAY_FRAMES: u32 = 60; // ~1 second

    // Screens
    pub const TITLE_FRAMES: u32 = 90; // ~1.5 seconds

    // Timing
    pub const TARGET_FPS: u32 = 60;
    pub const MAX_FRAME_TIME: f32 = 0.1; // clamp to prevent tunnelling after a stall
}
