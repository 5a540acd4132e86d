/// Outcome of one target eligibility query.
///
/// Exactly one value is produced per query. Everything except
/// [`TargetSpellResult::ValidTarget`] names the rule that stopped the cast, so
/// a UI can show it as a tooltip and an AI can discard the candidate.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetSpellResult {
    ValidTarget,

    // ===== units =====
    UnitNotInExpectedCombat,
    UnitDead,
    UnitNotDead,
    CursingOrAttackingOwn,
    EnchantingOrHealingEnemy,
    RaisingEnemy,
    UnitInvalidMagicRealmLifeformType,
    NoSpellEffectIdsDefined,
    AlreadyHasAllPossibleSpellEffects,
    TooMuchExperience,
    Immune,
    TooHighResistance,
    Undamaged,
    PermanentlyDamaged,
    UnhealableLifeformType,
    NoRangedAttack,
    InvalidRangedAttackType,
    NoAmmunition,
    TerrainImpassable,
    PlanarSeal,
    InvalidMapFeature,
    NothingToDispel,

    // ===== visibility =====
    CannotSeeTarget,
    Invisible,

    // ===== cities and locations =====
    NoCityHere,
    CityAlreadyHasBuilding,
    CantCreateBuildingsInOutposts,
    ProtectedAgainstSpellRealm,
    WizardHasDeathBooks,
    InvalidTileType,
    EnemiesHere,
    CellFull,
    UnownedNode,

    // ===== wizards and spells =====
    OverlandEnchantmentsOnly,
    AttackingOwnWizard,
    WizardNotMet,
    WizardBanishedOrDefeated,
    NotAWizard,
    NoSpellBeingCast,
    InsufficientMana,
}

impl TargetSpellResult {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::ValidTarget)
    }
}
