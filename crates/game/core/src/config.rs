/// Balance constants for characters, encounters, and the rating ladder.
///
/// Every number the rules depend on lives here so that combat, progression,
/// and rating code never carry bare literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== character creation =====
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_GOLD: i64 = 100;
    pub const STARTING_CHAPTER: u32 = 1;
    pub const STARTING_RATING: i32 = 1000;

    // ===== progression =====
    /// Experience required to leave a level is `level * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u32 = 100;
    pub const LEVEL_UP_HEALTH: i32 = 20;
    pub const LEVEL_UP_DAMAGE: i32 = 5;

    // ===== story encounters =====
    pub const ENEMY_BASE_HEALTH: i32 = 50;
    pub const ENEMY_HEALTH_PER_CHAPTER: i32 = 25;
    pub const ENEMY_BASE_DAMAGE: i32 = 10;
    pub const ENEMY_DAMAGE_PER_CHAPTER: i32 = 6;
    pub const STORY_BASE_XP: u32 = 50;
    pub const STORY_XP_PER_CHAPTER: u32 = 15;

    // ===== duels =====
    /// Each duel hit lands in `[damage - DUEL_VARIANCE, damage + DUEL_VARIANCE]`.
    pub const DUEL_VARIANCE: i32 = 5;

    // ===== rating =====
    pub const K_FACTOR: f64 = 32.0;
    pub const RATING_SCALE: f64 = 400.0;
    /// Number of entries shown on the global ranking.
    pub const LEADERBOARD_SIZE: usize = 10;
}
