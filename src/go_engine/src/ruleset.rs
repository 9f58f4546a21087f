// Copyright 2024 Karl Sundequist Blomdahl <karl.sundequist.blomdahl@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// How repeated positions are forbidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KoRule {
    /// Forbids only the immediate recapture.
    Simple,
    /// Forbids any repeat of a prior stone configuration, regardless of
    /// side to move.
    PositionalSuperko,
    /// Forbids any repeat of a prior (stone configuration, side to move)
    /// pair.
    SituationalSuperko
}

/// Whether a move that would leave the moving side's own group with zero
/// liberties is permitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SuicideRule {
    Allowed,
    Disallowed
}

/// Carried through for downstream scorers; not interpreted by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    Area,
    Territory
}

/// Carried through for downstream scorers; not interpreted by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaxRule {
    None,
    Seki,
    All
}

/// A compensation a handicapped white player receives, carried through for
/// downstream scorers; not interpreted by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WhiteHandicapBonusRule {
    NoBonus,
    BonusN,
    BonusNMinus1
}

/// Whether the first pass of the game grants a one-time half-point "button"
/// that is consumed, and forgets all ko-forbidden history, the first time
/// either side passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FirstPassBonusRule {
    None,
    Bonus
}

/// The full set of rule knobs a `Board` is parameterised over. `Ruleset` is
/// plain data: it has no behaviour of its own, it only configures how
/// `Board::legality` and `Board::play` resolve ko/suicide, and it carries a
/// few fields (`scoring_rule`, `tax_rule`, `white_handicap_bonus_rule`) that
/// exist purely for a downstream scorer this crate does not implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ruleset {
    pub ko_rule: KoRule,
    pub suicide_rule: SuicideRule,
    pub scoring_rule: ScoringRule,
    pub tax_rule: TaxRule,
    pub white_handicap_bonus_rule: WhiteHandicapBonusRule,
    pub first_pass_bonus_rule: FirstPassBonusRule
}

impl Ruleset {
    /// Positional superko, suicide allowed, area scoring. The ruleset used
    /// by the end-to-end scenarios of spec.md §8.
    pub const TROMP_TAYLOR: Ruleset = Ruleset {
        ko_rule: KoRule::PositionalSuperko,
        suicide_rule: SuicideRule::Allowed,
        scoring_rule: ScoringRule::Area,
        tax_rule: TaxRule::None,
        white_handicap_bonus_rule: WhiteHandicapBonusRule::NoBonus,
        first_pass_bonus_rule: FirstPassBonusRule::None
    };

    pub const CHINESE: Ruleset = Ruleset {
        ko_rule: KoRule::Simple,
        suicide_rule: SuicideRule::Disallowed,
        scoring_rule: ScoringRule::Area,
        tax_rule: TaxRule::None,
        white_handicap_bonus_rule: WhiteHandicapBonusRule::BonusN,
        first_pass_bonus_rule: FirstPassBonusRule::None
    };

    pub const JAPANESE: Ruleset = Ruleset {
        ko_rule: KoRule::Simple,
        suicide_rule: SuicideRule::Disallowed,
        scoring_rule: ScoringRule::Territory,
        tax_rule: TaxRule::None,
        white_handicap_bonus_rule: WhiteHandicapBonusRule::NoBonus,
        first_pass_bonus_rule: FirstPassBonusRule::None
    };

    pub const AGA: Ruleset = Ruleset {
        ko_rule: KoRule::SituationalSuperko,
        suicide_rule: SuicideRule::Disallowed,
        scoring_rule: ScoringRule::Area,
        tax_rule: TaxRule::None,
        white_handicap_bonus_rule: WhiteHandicapBonusRule::BonusNMinus1,
        first_pass_bonus_rule: FirstPassBonusRule::None
    };

    pub const NEW_ZEALAND: Ruleset = Ruleset {
        ko_rule: KoRule::SituationalSuperko,
        suicide_rule: SuicideRule::Allowed,
        scoring_rule: ScoringRule::Area,
        tax_rule: TaxRule::None,
        white_handicap_bonus_rule: WhiteHandicapBonusRule::NoBonus,
        first_pass_bonus_rule: FirstPassBonusRule::None
    };
}

impl Default for Ruleset {
    /// Tromp-Taylor is the ruleset used throughout spec.md §8's end-to-end
    /// scenarios, and the least surprising default for a data-generation
    /// pipeline that has not been told otherwise.
    fn default() -> Self {
        Ruleset::TROMP_TAYLOR
    }
}
