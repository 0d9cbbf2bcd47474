//! Per-unit stat snapshot and the timed effects that mutate it.
//!
//! `Status` is recomputed every tick from base stats; each active effect then
//! folds its modifier in attachment order. Nothing outside
//! [`ActiveEffect::influence`] may mutate a status snapshot.

use crate::PlayerId;

/// Immutable per-archetype stats a unit is spawned with.
#[derive(Debug, Clone, Copy)]
pub struct BaseStats {
    pub max_health: f32,
    /// Forward speed in world units per second.
    pub speed: f32,
    pub damage_scale: f32,
    pub armor: f32,
}

/// Effective stats for one tick. Never persisted across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Status {
    pub speed_scale: f32,
    pub damage_scale: f32,
    pub armor_scale: f32,
    pub invisible: bool,
}

impl Status {
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            speed_scale: 1.0,
            damage_scale: base.damage_scale,
            armor_scale: 1.0 + base.armor,
            invisible: false,
        }
    }
}

/// How re-applying an effect of the same identity behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackPolicy {
    /// Reset the remaining duration of the existing instance.
    Refresh,
    /// Attach an independent instance.
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectKind {
    /// Target cannot be hit by projectiles or melee sweeps.
    Invisible,
    Haste { factor: f32 },
    Slow { factor: f32 },
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Invisible => "invisible",
            EffectKind::Haste { .. } => "haste",
            EffectKind::Slow { .. } => "slow",
        }
    }

    fn influence(&self, status: &mut Status) {
        match *self {
            EffectKind::Invisible => status.invisible = true,
            EffectKind::Haste { factor } => status.speed_scale *= factor,
            EffectKind::Slow { factor } => status.speed_scale *= factor,
        }
    }

    fn stack_policy(&self) -> StackPolicy {
        match self {
            EffectKind::Invisible | EffectKind::Slow { .. } => StackPolicy::Refresh,
            EffectKind::Haste { .. } => StackPolicy::Stack,
        }
    }
}

/// One timed effect attached to a unit.
#[derive(Debug, Clone, Copy)]
pub struct ActiveEffect {
    /// Player credited for anything this effect causes.
    pub src_player: PlayerId,
    remain: u32,
    pub kind: EffectKind,
}

impl ActiveEffect {
    pub fn new(src_player: PlayerId, duration_ticks: u32, kind: EffectKind) -> Self {
        Self {
            src_player,
            remain: duration_ticks,
            kind,
        }
    }

    /// Fold this effect's modifier into `status`. Called exactly once per
    /// tick per active effect during recomputation.
    pub fn influence(&self, status: &mut Status) {
        self.kind.influence(status);
    }

    /// Ticks left; 0 means expiring this tick.
    pub fn tick_remain(&self) -> u32 {
        self.remain
    }

    /// Decrement by exactly one. Must not be called when already 0.
    pub fn tick_pass(&mut self) {
        debug_assert!(self.remain > 0, "tick_pass on expired effect");
        self.remain -= 1;
    }

    pub fn should_remove(&self) -> bool {
        self.remain == 0
    }
}

/// Attach `new` to `effects` honoring the per-kind stack policy.
pub fn apply_effect(effects: &mut Vec<ActiveEffect>, new: ActiveEffect) {
    if new.kind.stack_policy() == StackPolicy::Refresh
        && let Some(existing) = effects
            .iter_mut()
            .find(|e| std::mem::discriminant(&e.kind) == std::mem::discriminant(&new.kind))
    {
        existing.remain = new.remain;
        existing.src_player = new.src_player;
        existing.kind = new.kind;
        return;
    }
    effects.push(new);
}

/// Recompute the per-tick status snapshot: base stats, then every active
/// effect in attachment order (later effects fold after earlier ones).
pub fn recompute(base: &BaseStats, effects: &[ActiveEffect]) -> Status {
    let mut status = Status::from_base(base);
    for e in effects {
        e.influence(&mut status);
    }
    status
}

/// End-of-tick effect bookkeeping: count one tick down on everything still
/// running, then drop whatever reports itself removable.
pub fn tick_effects(effects: &mut Vec<ActiveEffect>) {
    for e in effects.iter_mut() {
        if e.tick_remain() > 0 {
            e.tick_pass();
        }
    }
    effects.retain(|e| !e.should_remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: PlayerId = PlayerId(1);

    fn base() -> BaseStats {
        BaseStats {
            max_health: 50.0,
            speed: 10.0,
            damage_scale: 1.0,
            armor: 0.0,
        }
    }

    #[test]
    fn remain_reaches_zero_after_exact_ticks() {
        let mut e = ActiveEffect::new(P, 3, EffectKind::Invisible);
        e.tick_pass();
        e.tick_pass();
        assert_eq!(e.tick_remain(), 1);
        assert!(!e.should_remove());
        e.tick_pass();
        assert_eq!(e.tick_remain(), 0);
        assert!(e.should_remove());
    }

    #[test]
    fn effects_fold_in_attachment_order() {
        let effects = vec![
            ActiveEffect::new(P, 10, EffectKind::Haste { factor: 2.0 }),
            ActiveEffect::new(P, 10, EffectKind::Slow { factor: 0.5 }),
        ];
        let st = recompute(&base(), &effects);
        assert!((st.speed_scale - 1.0).abs() < 1e-6);
        assert!(!st.invisible);
    }

    #[test]
    fn invisible_refreshes_instead_of_stacking() {
        let mut effects = Vec::new();
        apply_effect(&mut effects, ActiveEffect::new(P, 5, EffectKind::Invisible));
        apply_effect(&mut effects, ActiveEffect::new(P, 9, EffectKind::Invisible));
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].tick_remain(), 9);
    }

    #[test]
    fn haste_stacks_multiplicatively() {
        let mut effects = Vec::new();
        apply_effect(
            &mut effects,
            ActiveEffect::new(P, 5, EffectKind::Haste { factor: 2.0 }),
        );
        apply_effect(
            &mut effects,
            ActiveEffect::new(P, 5, EffectKind::Haste { factor: 3.0 }),
        );
        assert_eq!(effects.len(), 2);
        let st = recompute(&base(), &effects);
        assert!((st.speed_scale - 6.0).abs() < 1e-6);
    }

    #[test]
    fn tick_effects_prunes_expired() {
        let mut effects = vec![ActiveEffect::new(P, 1, EffectKind::Invisible)];
        tick_effects(&mut effects);
        assert!(effects.is_empty());
    }
}
