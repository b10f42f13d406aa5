/// Game tuning parameters for Volley2D
///
/// All values are per tick: speeds are pixels per tick, gravity is pixels per tick².
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const WINDOW_WIDTH: f32 = 1080.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    pub const GROUND_FRACTION: f32 = 0.8; // Ground level = 576

    // Physics
    pub const GRAVITY: f32 = 0.004;

    // Agents
    pub const AGENT_RADIUS: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 0.3;
    pub const OPPONENT_SPEED: f32 = 0.3;
    pub const JUMP_IMPULSE: f32 = -1.2; // Negative = up

    // Ball
    pub const BALL_RADIUS: f32 = 20.0;
    pub const SERVE_HEIGHT: f32 = 400.0;
    pub const HIT_POWER: f32 = 1.8;
    pub const HIT_HORIZONTAL_SCALE: f32 = 0.6;
    pub const HIT_VELOCITY_TRANSFER: f32 = 0.2; // Share of agent velocity passed to ball

    // Net (anchored to the bottom of the window, centered on the court)
    pub const NET_WIDTH: f32 = 1.0;
    pub const NET_HEIGHT: f32 = 380.0;

    // Opponent prediction
    pub const REST_LANDING_OFFSET: f32 = 25.0;
    pub const LEAD_LANDING_OFFSET: f32 = 10.0;
    pub const JUMP_THRESHOLD: f32 = 5.0;
    pub const PREDICTION_MAX_STEPS: u32 = 100_000;
}
