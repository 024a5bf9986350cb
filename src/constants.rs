// Viewport dimensions (pixels)
pub const VIEWPORT_WIDTH: i32 = 512;
pub const VIEWPORT_HEIGHT: i32 = 380;

// Vertical physics constants (pixels/second)
pub const GRAVITY: f32 = 1000.0;
pub const JUMP_VELOCITY: f32 = -600.0;

// Obstacle constants
pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_VELOCITY: f32 = -200.0; // negative = leftward
pub const SPAWN_GAP_MIN: f32 = 300.0;
pub const SPAWN_GAP_MAX: f32 = 350.0;
pub const FINISH_LINE_OFFSET: f32 = 200.0;

// Collision rectangles are shrunk by this much on every side to avoid
// hits against transparent sprite margins.
pub const COLLISION_PAD: f32 = 50.0;

// Sprite sheet layout
pub const PLAYER_SHEET_COLUMNS: f32 = 6.0;
pub const PLAYER_MAX_FRAME: u32 = 5;
pub const OBSTACLE_SHEET_GRID: f32 = 8.0;
pub const OBSTACLE_MAX_FRAME: u32 = 7;

// Player animation: 12 frames per second while grounded
pub const PLAYER_FRAME_TIME: f32 = 1.0 / 12.0;

// Parallax scroll speeds, back to front (pixels/second)
pub const PARALLAX_SPEEDS: [f32; 3] = [20.0, 40.0, 80.0];

// Layers are drawn twice side by side at this scale for seamless tiling
pub const PARALLAX_SCALE: f32 = 2.0;
