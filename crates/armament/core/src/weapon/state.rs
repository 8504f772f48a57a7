//! Ammunition state of a single craft weapon slot.

use tracing::{debug, trace};

use super::projectile::ShotDescriptor;
use crate::env::{RngOracle, WeaponRules};

/// Readiness of a weapon as seen by the rest of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponStatus {
    /// Installed, enabled and not waiting for ammunition.
    Ready,
    /// Below capacity and expecting further rearm cycles.
    Rearming,
    /// Administratively unusable (e.g., damaged mount), whatever the ammo level.
    Disabled,
}

/// A craft weapon installed in a slot: its ammunition and readiness flags.
///
/// The weapon borrows its [`WeaponRules`]; the rules outlive every slot they
/// are installed in.
///
/// # Invariants
///
/// - `0 <= ammo <= rules.ammo_max` (every write goes through [`Self::set_ammo`])
/// - `disabled` masks `rearming` in [`Self::status`] but never overwrites it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CraftWeapon<'r> {
    rules: &'r WeaponRules,
    ammo: i32,
    rearming: bool,
    disabled: bool,
}

impl<'r> CraftWeapon<'r> {
    /// Installs a weapon of the given type with `ammo` rounds (clamped to capacity).
    pub fn new(rules: &'r WeaponRules, ammo: i32) -> Self {
        let mut weapon = Self {
            rules,
            ammo: 0,
            rearming: false,
            disabled: false,
        };
        weapon.set_ammo(ammo);
        weapon
    }

    pub fn rules(&self) -> &'r WeaponRules {
        self.rules
    }

    pub fn ammo(&self) -> i32 {
        self.ammo
    }

    /// Sets the ammo count, clamped into `[0, ammo_max]`.
    ///
    /// Returns `false` when the request was negative, meaning the weapon ran
    /// out of ammo; callers use it to suppress firing.
    pub fn set_ammo(&mut self, ammo: i32) -> bool {
        if ammo < 0 {
            self.ammo = 0;
            return false;
        }
        self.ammo = ammo.min(self.rules.ammo_max);
        true
    }

    /// Current readiness. A disabled weapon is reported as such regardless of
    /// its stored rearming flag.
    pub fn status(&self) -> WeaponStatus {
        if self.disabled {
            WeaponStatus::Disabled
        } else if self.rearming {
            WeaponStatus::Rearming
        } else {
            WeaponStatus::Ready
        }
    }

    /// Whether the weapon is actively rearming. Always `false` while disabled.
    pub fn is_rearming(&self) -> bool {
        self.status() == WeaponStatus::Rearming
    }

    /// Changes whether this weapon needs rearming (for example, when it runs dry).
    pub fn set_rearming(&mut self, rearming: bool) {
        self.rearming = rearming;
    }

    /// Stored flag, ignoring the disabled mask.
    pub(crate) fn stored_rearming(&self) -> bool {
        self.rearming
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the weapon. The stored rearming flag is left as is;
    /// the next rearm cycle recomputes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Runs one rearm cycle.
    ///
    /// * `available` - clips on hand
    /// * `clip_size` - rounds per clip; `0` (or less) means the weapon is not
    ///   clip based and simply gains `rearm_rate` rounds
    /// * `rng` - drawn at most once, only when statistical bullet saving
    ///   applies to the clip that overflows capacity
    ///
    /// Returns the number of clips to debit from storage. With bullet saving
    /// this can be one less than the clips actually loaded.
    pub fn rearm<R>(&mut self, available: i32, clip_size: i32, rng: &mut R) -> i32
    where
        R: RngOracle + ?Sized,
    {
        let rules = self.rules;
        let mut ammo_used = rules.rearm_rate;
        let mut clips_saved = 0;

        if clip_size > 0 {
            // +(clip_size - 1) rounds the capacity-limited amount up to whole clips
            let room = (rules.ammo_max - self.ammo).saturating_add(clip_size - 1);
            let needed = rules.rearm_rate.min(room) / clip_size;
            ammo_used = needed.min(available.max(0)) * clip_size;

            if clip_size > 1 && rules.statistical_bullet_saving {
                // ammo_used may exceed the free room by up to clip_size - 1
                let overused_ammo = ammo_used - (rules.ammo_max - self.ammo);
                if overused_ammo > 0 && rng.range(0, clip_size - 1) < overused_ammo {
                    clips_saved = 1;
                    debug!(
                        weapon = %rules.id,
                        overused_ammo,
                        clip_size,
                        "Partially used clip returned to storage"
                    );
                }
            }
        }

        self.set_ammo(self.ammo.saturating_add(ammo_used));
        self.rearming = self.ammo < rules.ammo_max;

        let clips_used = if clip_size <= 0 {
            0
        } else {
            ammo_used / clip_size - clips_saved
        };

        trace!(
            weapon = %rules.id,
            available,
            clip_size,
            ammo_used,
            clips_used,
            ammo = self.ammo,
            rearming = self.rearming,
            "Rearm cycle"
        );

        clips_used
    }

    /// Builds the outgoing shot. Ammo is not consumed here.
    pub fn fire(&self) -> ShotDescriptor<'r> {
        let rules = self.rules;
        let damage_source = if rules.unified_damage_formula {
            rules.clip_item.as_ref().or(rules.launcher_item.as_ref())
        } else {
            None
        };

        ShotDescriptor {
            projectile_type: rules.projectile_type,
            speed: rules.projectile_speed,
            accuracy: rules.accuracy,
            damage: rules.damage,
            range: rules.range,
            shield_damage_modifier: rules.shield_damage_modifier,
            damage_source,
        }
    }

    /// How many clips' worth of ammo is loaded.
    ///
    /// Divides by the clip item's size when it has a positive one, otherwise
    /// by `rearm_rate`. A weapon with neither reports `0`.
    pub fn clips_loaded(&self) -> i32 {
        let divisor = match &self.rules.clip_item {
            Some(clip) if clip.clip_size > 0 => clip.clip_size,
            _ => self.rules.rearm_rate,
        };
        if divisor <= 0 {
            return 0;
        }
        self.ammo / divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemRules, PcgRng, ProjectileKind};
    use crate::test_utils::SequenceRng;

    fn rules(ammo_max: i32, rearm_rate: i32) -> WeaponRules {
        WeaponRules {
            id: "STR_TEST_WEAPON".into(),
            ammo_max,
            rearm_rate,
            ..WeaponRules::default()
        }
    }

    fn saving_rules(ammo_max: i32, rearm_rate: i32) -> WeaponRules {
        WeaponRules {
            statistical_bullet_saving: true,
            ..rules(ammo_max, rearm_rate)
        }
    }

    // ===== set_ammo =====

    #[test]
    fn negative_ammo_empties_and_reports_failure() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 30);
        for request in [-1, -30, i32::MIN] {
            assert!(!weapon.set_ammo(request));
            assert_eq!(weapon.ammo(), 0);
        }
    }

    #[test]
    fn excess_ammo_clamps_to_capacity() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        for request in [61, 1000, i32::MAX] {
            assert!(weapon.set_ammo(request));
            assert_eq!(weapon.ammo(), 60);
        }
    }

    #[test]
    fn in_range_ammo_is_exact() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        assert!(weapon.set_ammo(0));
        assert_eq!(weapon.ammo(), 0);
        assert!(weapon.set_ammo(37));
        assert_eq!(weapon.ammo(), 37);
    }

    #[test]
    fn set_ammo_leaves_flags_alone() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 10);
        weapon.set_rearming(true);
        weapon.set_disabled(true);
        weapon.set_ammo(-5);
        assert!(weapon.is_disabled());
        weapon.set_disabled(false);
        assert!(weapon.is_rearming());
    }

    #[test]
    fn constructor_clamps_initial_ammo() {
        let rules = rules(60, 20);
        assert_eq!(CraftWeapon::new(&rules, 90).ammo(), 60);
        assert_eq!(CraftWeapon::new(&rules, -4).ammo(), 0);
        assert_eq!(CraftWeapon::new(&rules, 25).status(), WeaponStatus::Ready);
    }

    // ===== readiness =====

    #[test]
    fn disabled_masks_rearming_without_clearing_it() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        weapon.set_rearming(true);
        assert_eq!(weapon.status(), WeaponStatus::Rearming);

        weapon.set_disabled(true);
        assert!(!weapon.is_rearming());
        assert_eq!(weapon.status(), WeaponStatus::Disabled);

        weapon.set_disabled(false);
        assert!(weapon.is_rearming());
    }

    #[test]
    fn disabled_weapon_never_reports_rearming() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        weapon.set_disabled(true);
        for flag in [false, true] {
            weapon.set_rearming(flag);
            assert!(!weapon.is_rearming());
        }
    }

    // ===== rearm =====

    #[test]
    fn non_clip_weapon_gains_rearm_rate() {
        let rules = saving_rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(0, 0, &mut rng), 0);
        assert_eq!(weapon.ammo(), 20);
        assert!(weapon.is_rearming());

        assert_eq!(weapon.rearm(99, 0, &mut rng), 0);
        assert_eq!(weapon.rearm(99, -3, &mut rng), 0);
        assert_eq!(weapon.ammo(), 60);
        assert!(!weapon.is_rearming());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn non_clip_weapon_clamps_at_capacity() {
        let rules = rules(50, 20);
        let mut weapon = CraftWeapon::new(&rules, 45);
        let mut rng = SequenceRng::empty();
        assert_eq!(weapon.rearm(0, 0, &mut rng), 0);
        assert_eq!(weapon.ammo(), 50);
        assert_eq!(weapon.status(), WeaponStatus::Ready);
    }

    #[test]
    fn clip_weapon_loads_whole_clips() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(5, 10, &mut rng), 2);
        assert_eq!(weapon.ammo(), 20);
        assert!(weapon.is_rearming());
    }

    #[test]
    fn never_uses_more_clips_than_available() {
        let rules = rules(100, 50);
        let mut weapon = CraftWeapon::new(&rules, 0);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(3, 10, &mut rng), 3);
        assert_eq!(weapon.ammo(), 30);

        assert_eq!(weapon.rearm(1, 10, &mut rng), 1);
        assert_eq!(weapon.ammo(), 40);
    }

    #[test]
    fn no_clips_available_keeps_rearming() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 10);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(0, 10, &mut rng), 0);
        assert_eq!(weapon.ammo(), 10);
        assert!(weapon.is_rearming());
    }

    #[test]
    fn rounds_last_clip_up_to_fill_capacity() {
        // 5 rounds short of a 10-round clip still loads one clip.
        let rules = rules(55, 20);
        let mut weapon = CraftWeapon::new(&rules, 50);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(5, 10, &mut rng), 1);
        assert_eq!(weapon.ammo(), 55);
        assert!(!weapon.is_rearming());
    }

    #[test]
    fn full_weapon_needs_nothing() {
        let rules = saving_rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 60);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(5, 10, &mut rng), 0);
        assert_eq!(weapon.ammo(), 60);
        assert!(!weapon.is_rearming());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn bullet_saving_returns_one_clip_on_low_draw() {
        let rules = saving_rules(55, 20);
        let mut weapon = CraftWeapon::new(&rules, 40);
        let mut rng = SequenceRng::new([4]);

        assert_eq!(weapon.rearm(5, 10, &mut rng), 1);
        assert_eq!(weapon.ammo(), 55);
        assert!(!weapon.is_rearming());
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn bullet_saving_consumes_all_clips_on_high_draw() {
        let rules = saving_rules(55, 20);
        let mut weapon = CraftWeapon::new(&rules, 40);
        let mut rng = SequenceRng::new([5]);

        assert_eq!(weapon.rearm(5, 10, &mut rng), 2);
        assert_eq!(weapon.ammo(), 55);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn bullet_saving_skips_draw_without_overflow() {
        let rules = saving_rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        let mut rng = SequenceRng::empty();

        assert_eq!(weapon.rearm(5, 10, &mut rng), 2);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn bullet_saving_requires_flag_and_multi_round_clips() {
        let disabled_feature = rules(55, 20);
        let mut weapon = CraftWeapon::new(&disabled_feature, 40);
        let mut rng = SequenceRng::empty();
        assert_eq!(weapon.rearm(5, 10, &mut rng), 2);
        assert_eq!(rng.draws(), 0);

        // Single-round clips can never overflow capacity.
        let single = saving_rules(5, 3);
        let mut weapon = CraftWeapon::new(&single, 4);
        assert_eq!(weapon.rearm(5, 1, &mut rng), 1);
        assert_eq!(weapon.ammo(), 5);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn bullet_saving_saves_at_most_one_clip() {
        let rules = saving_rules(100, 100);
        let mut weapon = CraftWeapon::new(&rules, 75);
        let mut rng = PcgRng::new(3);

        // Needs 3 clips of 10 for 25 rounds; at most one comes back.
        for _ in 0..32 {
            weapon.set_ammo(75);
            let used = weapon.rearm(10, 10, &mut rng);
            assert!((2..=3).contains(&used), "used {used} clips");
            assert_eq!(weapon.ammo(), 100);
        }
    }

    #[test]
    fn bullet_saving_near_i32_max_does_not_overflow() {
        let rules = saving_rules(i32::MAX - 5, 1000);

        // One free round, one clip of 100 loaded: 99 rounds overused.
        let mut weapon = CraftWeapon::new(&rules, i32::MAX - 6);
        assert_eq!(weapon.rearm(5, 100, &mut SequenceRng::new([98])), 0);
        assert_eq!(weapon.ammo(), i32::MAX - 5);
        assert!(!weapon.is_rearming());

        let mut weapon = CraftWeapon::new(&rules, i32::MAX - 6);
        assert_eq!(weapon.rearm(5, 100, &mut SequenceRng::new([99])), 1);
        assert_eq!(weapon.ammo(), i32::MAX - 5);
    }

    #[test]
    fn same_seed_reproduces_saving_outcomes() {
        let rules = saving_rules(55, 20);
        let run = |seed| {
            let mut rng = PcgRng::new(seed);
            (0..20)
                .map(|_| {
                    let mut weapon = CraftWeapon::new(&rules, 40);
                    weapon.rearm(5, 10, &mut rng)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn works_through_trait_objects() {
        let rules = saving_rules(55, 20);
        let mut weapon = CraftWeapon::new(&rules, 40);
        let mut scripted = SequenceRng::new([0]);
        let rng: &mut dyn RngOracle = &mut scripted;

        assert_eq!(weapon.rearm(5, 10, rng), 1);
    }

    #[test]
    fn rearm_recomputes_flag_even_while_disabled() {
        let rules = rules(60, 20);
        let mut weapon = CraftWeapon::new(&rules, 0);
        let mut rng = SequenceRng::empty();
        weapon.set_disabled(true);

        weapon.rearm(5, 10, &mut rng);
        assert!(!weapon.is_rearming());

        weapon.set_disabled(false);
        assert!(weapon.is_rearming());
    }

    // ===== fire =====

    fn armed_rules(unified: bool) -> WeaponRules {
        WeaponRules {
            id: "STR_AVALANCHE".into(),
            ammo_max: 3,
            rearm_rate: 1,
            projectile_type: ProjectileKind::AvalancheMissile,
            projectile_speed: 8,
            accuracy: 80,
            damage: 100,
            range: 60,
            shield_damage_modifier: 50,
            unified_damage_formula: unified,
            clip_item: Some(ItemRules::new("STR_AVALANCHE_MISSILES", 1)),
            launcher_item: Some(ItemRules::new("STR_AVALANCHE_LAUNCHER", 0)),
            ..WeaponRules::default()
        }
    }

    #[test]
    fn fire_copies_firing_parameters() {
        let rules = armed_rules(false);
        let weapon = CraftWeapon::new(&rules, 3);
        let shot = weapon.fire();

        assert_eq!(shot.projectile_type, ProjectileKind::AvalancheMissile);
        assert_eq!(shot.speed, 8);
        assert_eq!(shot.accuracy, 80);
        assert_eq!(shot.damage, 100);
        assert_eq!(shot.range, 60);
        assert_eq!(shot.shield_damage_modifier, 50);
        assert!(shot.damage_source.is_none());
        assert_eq!(weapon.ammo(), 3);
    }

    #[test]
    fn unified_damage_prefers_clip_then_launcher() {
        let rules = armed_rules(true);
        let shot = CraftWeapon::new(&rules, 3).fire();
        assert_eq!(
            shot.damage_source.map(|item| item.id.as_str()),
            Some("STR_AVALANCHE_MISSILES")
        );

        let launcher_only = WeaponRules {
            clip_item: None,
            ..armed_rules(true)
        };
        let shot = CraftWeapon::new(&launcher_only, 3).fire();
        assert_eq!(
            shot.damage_source.map(|item| item.id.as_str()),
            Some("STR_AVALANCHE_LAUNCHER")
        );

        let bare = WeaponRules {
            clip_item: None,
            launcher_item: None,
            ..armed_rules(true)
        };
        assert!(CraftWeapon::new(&bare, 3).fire().damage_source.is_none());
    }

    // ===== clips_loaded =====

    #[test]
    fn clips_loaded_prefers_clip_item_size() {
        let rules = WeaponRules {
            clip_item: Some(ItemRules::new("STR_ROUNDS_X15", 15)),
            ..rules(60, 20)
        };
        assert_eq!(CraftWeapon::new(&rules, 40).clips_loaded(), 2);
    }

    #[test]
    fn clips_loaded_falls_back_to_rearm_rate() {
        let not_a_clip = WeaponRules {
            clip_item: Some(ItemRules::new("STR_NOT_A_CLIP", 0)),
            ..rules(60, 20)
        };
        assert_eq!(CraftWeapon::new(&not_a_clip, 59).clips_loaded(), 2);

        let no_clip = rules(60, 20);
        assert_eq!(CraftWeapon::new(&no_clip, 60).clips_loaded(), 3);
    }

    #[test]
    fn clips_loaded_without_divisor_is_zero() {
        let rules = rules(60, 0);
        assert_eq!(CraftWeapon::new(&rules, 30).clips_loaded(), 0);
    }
}
