//! The fixed achievement list and its evaluator.
//!
//! Each achievement is a named predicate over a single player's derived
//! record. Predicates are independent and not mutually exclusive; a player
//! can earn several in one war. Achievements nobody earned are dropped
//! before reporting.

use itertools::Itertools;

use crate::derive::WarRecord;

#[derive(Debug)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub earned: fn(&WarRecord) -> bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Look Ma I Helped!",
        description: "Get a help, kill and death",
        earned: |r| r.stats.help > 1 && r.total > 1 && r.stats.deaths > 1,
    },
    Achievement {
        title: "Big Game Hunter",
        description: "Kill 20 Guild Masters",
        earned: |r| r.stats.guild_master >= 20,
    },
    Achievement {
        title: "I Didn't Choose The Support Life",
        description: "Get 20 Help",
        earned: |r| r.stats.help >= 20,
    },
    Achievement {
        title: "Glass Cannon",
        description: "Get 50 kills, 50 deaths",
        earned: |r| r.total >= 50 && r.stats.deaths >= 50,
    },
    Achievement {
        title: "Who Are You Fighting?",
        description: "Get more Mount kills than Player kills",
        earned: |r| r.stats.mount > r.total,
    },
    Achievement {
        title: "I Like Big Guns",
        description: "Get 20 Siege Weapon kills",
        earned: |r| r.stats.siege_weapons >= 20,
    },
    Achievement {
        title: "Wet Sponge :sweat_drops:",
        description: "Get 20+ Deaths without a Kill",
        earned: |r| r.stats.deaths >= 20 && r.total == 0,
    },
    Achievement {
        title: "Wrecking Ball",
        description: "Destroy a Fort and 5 Placed Objects",
        earned: |r| r.stats.fortress >= 1 && r.stats.command_post >= 1 && r.stats.placed_object >= 5,
    },
    Achievement {
        title: "Gate Crasher",
        description: "Destroy a Gate",
        earned: |r| r.stats.gate >= 1,
    },
    Achievement {
        title: "Boogeyman :ghost:",
        description: "Destroy a Fort and Placed Object, Kill a Mount, Guild Master, Officer, Member, and Kill with Siege Weapons",
        earned: |r| {
            r.stats.fortress >= 1
                && r.stats.command_post >= 1
                && r.stats.placed_object >= 1
                && r.stats.mount >= 1
                && r.stats.guild_master >= 1
                && r.stats.officer >= 1
                && r.stats.member >= 1
                && r.stats.siege_weapons >= 1
        },
    },
    Achievement {
        title: "Double Double",
        description: "Get 10 Help, 10 Kills",
        earned: |r| r.stats.help >= 10 && r.total >= 10,
    },
    Achievement {
        title: ":fire: Super Hot :fire:",
        description: "Get 100 Kills",
        earned: |r| r.total >= 100,
    },
    Achievement {
        title: "I'm Having A Bad Day",
        description: "Get 100 Deaths",
        earned: |r| r.stats.deaths >= 100,
    },
];

#[derive(Debug)]
pub struct AchievementResult {
    pub achievement: &'static Achievement,
    pub earned_by: Vec<String>,
}

impl AchievementResult {
    pub fn field_name(&self, attendance: usize) -> String {
        format!(
            "{} ({}/{})",
            self.achievement.title,
            self.earned_by.len(),
            attendance
        )
    }

    pub fn field_value(&self) -> String {
        format!(
            "*{}*\n{}",
            self.achievement.description,
            self.earned_by.iter().join(", ")
        )
    }
}

pub fn evaluate(records: &[WarRecord]) -> Vec<AchievementResult> {
    ACHIEVEMENTS
        .iter()
        .filter_map(|achievement| {
            let earned_by = records
                .iter()
                .filter(|record| (achievement.earned)(record))
                .map(|record| record.stats.player.clone())
                .sorted()
                .collect::<Vec<_>>();
            (!earned_by.is_empty()).then_some(AchievementResult {
                achievement,
                earned_by,
            })
        })
        .collect()
}

/// Rows for the console table: one per earned achievement.
pub fn achievement_rows(results: &[AchievementResult], attendance: usize) -> Vec<Vec<String>> {
    results
        .iter()
        .map(|result| {
            vec![
                result.achievement.title.to_string(),
                format!("{}/{attendance}", result.earned_by.len()),
                result.earned_by.iter().join(", "),
            ]
        })
        .collect()
}
