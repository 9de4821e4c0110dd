use std::ops::RangeInclusive;

/// Dice every player holds in their cup for a round.
pub const DICE_PER_PLAYER: u32 = 5;
pub const FACE_COUNT: usize = 6;
pub const FACES: RangeInclusive<u32> = 1..=6;

/// Chance that a single hidden die shows any particular face.
pub const FACE_PROBABILITY: f64 = 1.0 / 6.0;

/// Total dice in play for a round, or `None` if it does not fit in a `u32`.
pub fn pool_size(player_count: u32) -> Option<u32> {
    player_count.checked_mul(DICE_PER_PLAYER)
}

pub fn is_valid_face(face: u32) -> bool {
    FACES.contains(&face)
}

/// Zero-based slot for a face value in a per-face table.
pub fn face_index(face: u32) -> Option<usize> {
    if is_valid_face(face) {
        Some((face - 1) as usize)
    } else {
        None
    }
}
