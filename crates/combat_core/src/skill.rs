//! Declarative skill records with tick-counted cooldowns.
//!
//! A skill cannot trigger while `time_remain > 0`; triggering re-arms the
//! full cooldown at trigger time, not at effect expiry. Trigger dispatch is
//! explicit in each unit's own update logic — skills carry no callbacks.

use crate::projectile::ProjKind;

/// Which input a skill is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Q,
    E,
    Primary,
}

/// Optional projectile loadout a skill spawns when triggered.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileLoadout {
    pub kind: ProjKind,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct Skill {
    /// Display only.
    pub name: &'static str,
    /// Display only.
    pub description: String,
    pub kind: SkillKind,
    /// Full cooldown in ticks.
    pub time_total: u32,
    /// Ticks until the skill can trigger again; 0 means ready.
    pub time_remain: u32,
    pub projectile: Option<ProjectileLoadout>,
}

impl Skill {
    pub fn new(name: &'static str, description: String, kind: SkillKind, time_total: u32) -> Self {
        Self {
            name,
            description,
            kind,
            time_total,
            time_remain: 0,
            projectile: None,
        }
    }

    pub fn with_projectile(mut self, kind: ProjKind, count: u32) -> Self {
        self.projectile = Some(ProjectileLoadout { kind, count });
        self
    }

    #[inline]
    pub fn ready(&self) -> bool {
        self.time_remain == 0
    }

    /// Count the cooldown down by one tick; no-op when already ready.
    #[inline]
    pub fn tick(&mut self) {
        if self.time_remain > 0 {
            self.time_remain -= 1;
        }
    }

    /// Re-arm the full cooldown. Called at the moment the skill triggers.
    #[inline]
    pub fn arm(&mut self) {
        self.time_remain = self.time_total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_is_monotonic_until_armed() {
        let mut s = Skill::new("test", String::new(), SkillKind::Q, 4);
        assert!(s.ready());
        s.arm();
        let mut last = s.time_remain;
        while s.time_remain > 0 {
            s.tick();
            assert!(s.time_remain < last);
            last = s.time_remain;
        }
        assert!(s.ready());
        s.tick();
        assert!(s.ready());
    }

    #[test]
    fn arm_resets_to_total() {
        let mut s = Skill::new("test", String::new(), SkillKind::Primary, 3);
        s.arm();
        s.tick();
        s.arm();
        assert_eq!(s.time_remain, 3);
    }
}
