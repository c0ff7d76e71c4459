/// Search parameters derived from a skill rating: how deep the alpha-beta
/// search looks and how often the engine plays a uniformly random move
/// instead of searching at all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SkillProfile {
    pub search_depth: u8,
    pub random_chance: f64,
}

/// The fixed five-tier rating-to-parameters table. Tier breaks sit at 1000,
/// 1300, 1600, and 1900.
pub fn profile_for_rating(rating: i32) -> SkillProfile {
    if rating < 1000 {
        SkillProfile {
            search_depth: 1,
            random_chance: 0.40,
        }
    } else if rating < 1300 {
        SkillProfile {
            search_depth: 2,
            random_chance: 0.30,
        }
    } else if rating < 1600 {
        SkillProfile {
            search_depth: 3,
            random_chance: 0.20,
        }
    } else if rating < 1900 {
        SkillProfile {
            search_depth: 4,
            random_chance: 0.10,
        }
    } else {
        SkillProfile {
            search_depth: 5,
            random_chance: 0.05,
        }
    }
}
