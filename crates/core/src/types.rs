use slotmap::new_key_type;

new_key_type! {
    pub struct EnemyId;
    pub struct CollectibleId;
    pub struct TimerId;
}

/// Grid cell coordinate. Signed so that out-of-bounds neighbours can be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// World-space position in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned bounding box anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn square(pos: Vec2, size: f32) -> Self {
        Self { x: pos.x, y: pos.y, w: size, h: size }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Directional keys held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn held(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |direction| self.is_pressed(*direction))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnemyKind {
    Chaser,
    Patroller,
    Stationary,
    Wanderer,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] =
        [EnemyKind::Chaser, EnemyKind::Patroller, EnemyKind::Stationary, EnemyKind::Wanderer];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectibleKind {
    Health,
    Speed,
    Score,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] =
        [CollectibleKind::Health, CollectibleKind::Speed, CollectibleKind::Score];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Start,
    Playing,
    Paused,
    GameOver,
}

/// What a single call to `LevelSession::tick` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not in `Playing`; nothing moved.
    Idle,
    Advanced,
    LevelUp { level: u32 },
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadyStarted,
    NotRunning,
    UnknownEnemy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    LevelStarted { level: u32, rooms: usize, enemies: usize, collectibles: usize },
    LevelUp { level: u32 },
    CollectiblePicked { kind: CollectibleKind },
    SpeedBoostExpired,
    PlayerHit { damage: i32, health: i32 },
    EnemyRespawned { kind: EnemyKind },
    EnemyDefeated { kind: EnemyKind },
    Paused,
    Resumed,
    GameOver { level: u32, score: u32 },
    RunRestarted { run: u64 },
}
