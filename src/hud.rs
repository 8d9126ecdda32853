//! Score and life HUD bookkeeping
//!
//! The core computes what the HUD shows - digit cells, blink phases,
//! icon counts - and the renderer draws it. Score and life are clamped
//! to their presentable ranges here.

use glam::Vec2;

use crate::consts::*;

/// Split the score into five decimal digits, most significant first
pub fn score_digits(score: u32) -> [u8; SCORE_DIGITS] {
    let mut digits = [0u8; SCORE_DIGITS];
    let mut remainder = score.min(SCORE_MAX);
    let mut divisor = 10_000;
    for digit in &mut digits {
        *digit = (remainder / divisor) as u8;
        remainder %= divisor;
        divisor /= 10;
    }
    digits
}

/// Source cell of one digit in the number sheet (32x64 cells in a row)
pub fn digit_src(digit: u8) -> (Vec2, Vec2) {
    (Vec2::new(32.0 * digit as f32, 0.0), Vec2::new(32.0, 64.0))
}

/// Whether the blinking confirm prompt is visible this frame
pub fn prompt_visible(frame: u32) -> bool {
    frame % BLINK_PERIOD >= BLINK_PERIOD / 2
}

/// Whether the player model shows through the damage flicker
pub fn player_visible(hit_timer: u32) -> bool {
    hit_timer % FLICKER_PERIOD < FLICKER_PERIOD / 2
}

/// Life icon count, clamped for presentation
pub fn life_icons(life: i32) -> u32 {
    life.clamp(0, START_LIVES) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_digits_pad_with_leading_zeros() {
        assert_eq!(score_digits(0), [0, 0, 0, 0, 0]);
        assert_eq!(score_digits(7), [0, 0, 0, 0, 7]);
        assert_eq!(score_digits(42), [0, 0, 0, 4, 2]);
        assert_eq!(score_digits(100), [0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_score_is_clamped_for_presentation() {
        assert_eq!(score_digits(12345), [0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_digit_src_walks_the_sheet() {
        let (offset, size) = digit_src(3);
        assert_eq!(offset, Vec2::new(96.0, 0.0));
        assert_eq!(size, Vec2::new(32.0, 64.0));
    }

    #[test]
    fn test_prompt_blinks_on_the_second_half_of_the_period() {
        assert!(!prompt_visible(0));
        assert!(!prompt_visible(19));
        assert!(prompt_visible(20));
        assert!(prompt_visible(39));
        assert!(!prompt_visible(40));
    }

    #[test]
    fn test_damage_flicker_alternates_two_on_two_off() {
        assert!(player_visible(0));
        assert!(player_visible(60));
        assert!(player_visible(57));
        assert!(!player_visible(58));
        assert!(!player_visible(59));
    }

    #[test]
    fn test_life_icons_clamp_both_ends() {
        assert_eq!(life_icons(-2), 0);
        assert_eq!(life_icons(0), 0);
        assert_eq!(life_icons(2), 2);
        assert_eq!(life_icons(3), 3);
        assert_eq!(life_icons(9), 3);
    }
}
