//! Per-BitNode balance multipliers.
//!
//! Each BitNode shifts the difficulty of different parts of the game to
//! push the player toward a particular strategy. The table is a record of
//! named `f64` multipliers: every field is `1.0` unless a BitNode overrides
//! it, with the exception of [`BitNodeMultipliers::staneks_gift_extra_size`],
//! which is additive and defaults to `0.0`.
//!
//! Overrides are declared per BitNode as `(Multiplier, value)` lists and
//! merged over the default record. BitNode 12 is the only computed table:
//! it scales with the player's Source-File 12 level.
//!
//! ```
//! use bitnode_logic::bitnode::SourceFiles;
//! use bitnode_logic::multipliers::BitNodeMultipliers;
//!
//! let mults = BitNodeMultipliers::for_bitnode(8, &SourceFiles::default());
//! assert_eq!(mults.crime_money, 0.0);
//! assert_eq!(mults.hacking_level_multiplier, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::bitnode::{resolve_bitnode, BitNode, SourceFiles};
use crate::constants::{factions, recursion};
use crate::player::PlayerStats;

/// The full multiplier record for one BitNode.
///
/// Serialized field names match the save-file keys (`HackingLevelMultiplier`
/// and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BitNodeMultipliers {
    /// How quickly hacking level (not experience) scales.
    pub hacking_level_multiplier: f64,
    /// How quickly strength level scales.
    pub strength_level_multiplier: f64,
    /// How quickly defense level scales.
    pub defense_level_multiplier: f64,
    /// How quickly dexterity level scales.
    pub dexterity_level_multiplier: f64,
    /// How quickly agility level scales.
    pub agility_level_multiplier: f64,
    /// How quickly charisma level scales.
    pub charisma_level_multiplier: f64,
    /// Growth percentage per cycle when growing a server.
    pub server_growth_rate: f64,
    /// Maximum money a server can grow to.
    pub server_max_money: f64,
    /// Money a server starts with.
    pub server_starting_money: f64,
    /// Initial security level of a server.
    pub server_starting_security: f64,
    /// Security removed per weaken.
    pub server_weaken_rate: f64,
    /// Cost of upgrading home computer RAM.
    pub home_computer_ram_cost: f64,
    /// Cost of purchasing a server.
    pub purchased_server_cost: f64,
    /// Softcap on purchased server cost growth.
    pub purchased_server_softcap: f64,
    /// Maximum number of purchased servers.
    pub purchased_server_limit: f64,
    /// Maximum RAM of a purchased server.
    pub purchased_server_max_ram: f64,
    /// Money earned working a company job.
    pub company_work_money: f64,
    /// Money earned from crimes.
    pub crime_money: f64,
    /// Hacknet Node production (hash rate for Hacknet Servers).
    pub hacknet_node_money: f64,
    /// Money stolen by a hack run from the terminal.
    pub manual_hack_money: f64,
    /// Money removed from a server by a script hack.
    pub script_hack_money: f64,
    /// Money actually gained by a script hack.
    pub script_hack_money_gain: f64,
    /// Money rewarded by coding contracts.
    pub coding_contract_money: f64,
    /// Experience from classes and gym training.
    pub class_gym_exp_gain: f64,
    /// Experience from company work.
    pub company_work_exp_gain: f64,
    /// Experience from crimes.
    pub crime_exp_gain: f64,
    /// Experience from faction work.
    pub faction_work_exp_gain: f64,
    /// Experience from hacking servers.
    pub hack_exp_gain: f64,
    /// Reputation gained passively from faction membership.
    pub faction_passive_rep_gain: f64,
    /// Reputation gained from faction work.
    pub faction_work_rep_gain: f64,
    /// Favor required before donating to a faction.
    pub rep_to_donate_to_faction: f64,
    /// Base money cost of augmentations.
    pub augmentation_money_cost: f64,
    /// Base reputation cost of augmentations.
    pub augmentation_rep_cost: f64,
    /// Money from infiltration.
    pub infiltration_money: f64,
    /// Reputation from selling infiltration intel.
    pub infiltration_rep: f64,
    /// Cost of 4S Market Data.
    pub four_sigma_market_data_cost: f64,
    /// Cost of the 4S Market Data TIX API.
    pub four_sigma_market_data_api_cost: f64,
    /// Valuation of player corporations.
    pub corporation_valuation: f64,
    /// Softcap on corporation dividends.
    pub corporation_soft_cap: f64,
    /// Rank gained in Bladeburner.
    pub bladeburner_rank: f64,
    /// Cost of Bladeburner skill levels.
    pub bladeburner_skill_cost: f64,
    /// Softcap on gang earnings.
    pub gang_softcap: f64,
    /// Share of unique augmentations offered by gangs.
    pub gang_unique_augs: f64,
    /// Augmentations needed for a Daedalus invitation.
    pub daedalus_augs_requirement: f64,
    /// Power of Stanek's Gift.
    pub staneks_gift_power_multiplier: f64,
    /// Extra size of Stanek's Gift (additive; defaults to 0).
    pub staneks_gift_extra_size: f64,
    /// Hacking level required to backdoor the world daemon.
    pub world_daemon_difficulty: f64,
}

impl Default for BitNodeMultipliers {
    fn default() -> Self {
        Self {
            hacking_level_multiplier: 1.0,
            strength_level_multiplier: 1.0,
            defense_level_multiplier: 1.0,
            dexterity_level_multiplier: 1.0,
            agility_level_multiplier: 1.0,
            charisma_level_multiplier: 1.0,
            server_growth_rate: 1.0,
            server_max_money: 1.0,
            server_starting_money: 1.0,
            server_starting_security: 1.0,
            server_weaken_rate: 1.0,
            home_computer_ram_cost: 1.0,
            purchased_server_cost: 1.0,
            purchased_server_softcap: 1.0,
            purchased_server_limit: 1.0,
            purchased_server_max_ram: 1.0,
            company_work_money: 1.0,
            crime_money: 1.0,
            hacknet_node_money: 1.0,
            manual_hack_money: 1.0,
            script_hack_money: 1.0,
            script_hack_money_gain: 1.0,
            coding_contract_money: 1.0,
            class_gym_exp_gain: 1.0,
            company_work_exp_gain: 1.0,
            crime_exp_gain: 1.0,
            faction_work_exp_gain: 1.0,
            hack_exp_gain: 1.0,
            faction_passive_rep_gain: 1.0,
            faction_work_rep_gain: 1.0,
            rep_to_donate_to_faction: 1.0,
            augmentation_money_cost: 1.0,
            augmentation_rep_cost: 1.0,
            infiltration_money: 1.0,
            infiltration_rep: 1.0,
            four_sigma_market_data_cost: 1.0,
            four_sigma_market_data_api_cost: 1.0,
            corporation_valuation: 1.0,
            corporation_soft_cap: 1.0,
            bladeburner_rank: 1.0,
            bladeburner_skill_cost: 1.0,
            gang_softcap: 1.0,
            gang_unique_augs: 1.0,
            daedalus_augs_requirement: 1.0,
            staneks_gift_power_multiplier: 1.0,
            staneks_gift_extra_size: 0.0,
            world_daemon_difficulty: 1.0,
        }
    }
}

/// Names a single field of [`BitNodeMultipliers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    HackingLevelMultiplier,
    StrengthLevelMultiplier,
    DefenseLevelMultiplier,
    DexterityLevelMultiplier,
    AgilityLevelMultiplier,
    CharismaLevelMultiplier,
    ServerGrowthRate,
    ServerMaxMoney,
    ServerStartingMoney,
    ServerStartingSecurity,
    ServerWeakenRate,
    HomeComputerRamCost,
    PurchasedServerCost,
    PurchasedServerSoftcap,
    PurchasedServerLimit,
    PurchasedServerMaxRam,
    CompanyWorkMoney,
    CrimeMoney,
    HacknetNodeMoney,
    ManualHackMoney,
    ScriptHackMoney,
    ScriptHackMoneyGain,
    CodingContractMoney,
    ClassGymExpGain,
    CompanyWorkExpGain,
    CrimeExpGain,
    FactionWorkExpGain,
    HackExpGain,
    FactionPassiveRepGain,
    FactionWorkRepGain,
    RepToDonateToFaction,
    AugmentationMoneyCost,
    AugmentationRepCost,
    InfiltrationMoney,
    InfiltrationRep,
    FourSigmaMarketDataCost,
    FourSigmaMarketDataApiCost,
    CorporationValuation,
    CorporationSoftCap,
    BladeburnerRank,
    BladeburnerSkillCost,
    GangSoftcap,
    GangUniqueAugs,
    DaedalusAugsRequirement,
    StaneksGiftPowerMultiplier,
    StaneksGiftExtraSize,
    WorldDaemonDifficulty,
}

impl Multiplier {
    /// Every multiplier, in record order.
    pub const ALL: [Multiplier; 47] = [
        Multiplier::HackingLevelMultiplier,
        Multiplier::StrengthLevelMultiplier,
        Multiplier::DefenseLevelMultiplier,
        Multiplier::DexterityLevelMultiplier,
        Multiplier::AgilityLevelMultiplier,
        Multiplier::CharismaLevelMultiplier,
        Multiplier::ServerGrowthRate,
        Multiplier::ServerMaxMoney,
        Multiplier::ServerStartingMoney,
        Multiplier::ServerStartingSecurity,
        Multiplier::ServerWeakenRate,
        Multiplier::HomeComputerRamCost,
        Multiplier::PurchasedServerCost,
        Multiplier::PurchasedServerSoftcap,
        Multiplier::PurchasedServerLimit,
        Multiplier::PurchasedServerMaxRam,
        Multiplier::CompanyWorkMoney,
        Multiplier::CrimeMoney,
        Multiplier::HacknetNodeMoney,
        Multiplier::ManualHackMoney,
        Multiplier::ScriptHackMoney,
        Multiplier::ScriptHackMoneyGain,
        Multiplier::CodingContractMoney,
        Multiplier::ClassGymExpGain,
        Multiplier::CompanyWorkExpGain,
        Multiplier::CrimeExpGain,
        Multiplier::FactionWorkExpGain,
        Multiplier::HackExpGain,
        Multiplier::FactionPassiveRepGain,
        Multiplier::FactionWorkRepGain,
        Multiplier::RepToDonateToFaction,
        Multiplier::AugmentationMoneyCost,
        Multiplier::AugmentationRepCost,
        Multiplier::InfiltrationMoney,
        Multiplier::InfiltrationRep,
        Multiplier::FourSigmaMarketDataCost,
        Multiplier::FourSigmaMarketDataApiCost,
        Multiplier::CorporationValuation,
        Multiplier::CorporationSoftCap,
        Multiplier::BladeburnerRank,
        Multiplier::BladeburnerSkillCost,
        Multiplier::GangSoftcap,
        Multiplier::GangUniqueAugs,
        Multiplier::DaedalusAugsRequirement,
        Multiplier::StaneksGiftPowerMultiplier,
        Multiplier::StaneksGiftExtraSize,
        Multiplier::WorldDaemonDifficulty,
    ];

    /// Save-file key for this multiplier.
    pub fn name(self) -> &'static str {
        match self {
            Multiplier::HackingLevelMultiplier => "HackingLevelMultiplier",
            Multiplier::StrengthLevelMultiplier => "StrengthLevelMultiplier",
            Multiplier::DefenseLevelMultiplier => "DefenseLevelMultiplier",
            Multiplier::DexterityLevelMultiplier => "DexterityLevelMultiplier",
            Multiplier::AgilityLevelMultiplier => "AgilityLevelMultiplier",
            Multiplier::CharismaLevelMultiplier => "CharismaLevelMultiplier",
            Multiplier::ServerGrowthRate => "ServerGrowthRate",
            Multiplier::ServerMaxMoney => "ServerMaxMoney",
            Multiplier::ServerStartingMoney => "ServerStartingMoney",
            Multiplier::ServerStartingSecurity => "ServerStartingSecurity",
            Multiplier::ServerWeakenRate => "ServerWeakenRate",
            Multiplier::HomeComputerRamCost => "HomeComputerRamCost",
            Multiplier::PurchasedServerCost => "PurchasedServerCost",
            Multiplier::PurchasedServerSoftcap => "PurchasedServerSoftcap",
            Multiplier::PurchasedServerLimit => "PurchasedServerLimit",
            Multiplier::PurchasedServerMaxRam => "PurchasedServerMaxRam",
            Multiplier::CompanyWorkMoney => "CompanyWorkMoney",
            Multiplier::CrimeMoney => "CrimeMoney",
            Multiplier::HacknetNodeMoney => "HacknetNodeMoney",
            Multiplier::ManualHackMoney => "ManualHackMoney",
            Multiplier::ScriptHackMoney => "ScriptHackMoney",
            Multiplier::ScriptHackMoneyGain => "ScriptHackMoneyGain",
            Multiplier::CodingContractMoney => "CodingContractMoney",
            Multiplier::ClassGymExpGain => "ClassGymExpGain",
            Multiplier::CompanyWorkExpGain => "CompanyWorkExpGain",
            Multiplier::CrimeExpGain => "CrimeExpGain",
            Multiplier::FactionWorkExpGain => "FactionWorkExpGain",
            Multiplier::HackExpGain => "HackExpGain",
            Multiplier::FactionPassiveRepGain => "FactionPassiveRepGain",
            Multiplier::FactionWorkRepGain => "FactionWorkRepGain",
            Multiplier::RepToDonateToFaction => "RepToDonateToFaction",
            Multiplier::AugmentationMoneyCost => "AugmentationMoneyCost",
            Multiplier::AugmentationRepCost => "AugmentationRepCost",
            Multiplier::InfiltrationMoney => "InfiltrationMoney",
            Multiplier::InfiltrationRep => "InfiltrationRep",
            Multiplier::FourSigmaMarketDataCost => "FourSigmaMarketDataCost",
            Multiplier::FourSigmaMarketDataApiCost => "FourSigmaMarketDataApiCost",
            Multiplier::CorporationValuation => "CorporationValuation",
            Multiplier::CorporationSoftCap => "CorporationSoftCap",
            Multiplier::BladeburnerRank => "BladeburnerRank",
            Multiplier::BladeburnerSkillCost => "BladeburnerSkillCost",
            Multiplier::GangSoftcap => "GangSoftcap",
            Multiplier::GangUniqueAugs => "GangUniqueAugs",
            Multiplier::DaedalusAugsRequirement => "DaedalusAugsRequirement",
            Multiplier::StaneksGiftPowerMultiplier => "StaneksGiftPowerMultiplier",
            Multiplier::StaneksGiftExtraSize => "StaneksGiftExtraSize",
            Multiplier::WorldDaemonDifficulty => "WorldDaemonDifficulty",
        }
    }
}

impl BitNodeMultipliers {
    /// Read one multiplier by name.
    pub fn get(&self, m: Multiplier) -> f64 {
        match m {
            Multiplier::HackingLevelMultiplier => self.hacking_level_multiplier,
            Multiplier::StrengthLevelMultiplier => self.strength_level_multiplier,
            Multiplier::DefenseLevelMultiplier => self.defense_level_multiplier,
            Multiplier::DexterityLevelMultiplier => self.dexterity_level_multiplier,
            Multiplier::AgilityLevelMultiplier => self.agility_level_multiplier,
            Multiplier::CharismaLevelMultiplier => self.charisma_level_multiplier,
            Multiplier::ServerGrowthRate => self.server_growth_rate,
            Multiplier::ServerMaxMoney => self.server_max_money,
            Multiplier::ServerStartingMoney => self.server_starting_money,
            Multiplier::ServerStartingSecurity => self.server_starting_security,
            Multiplier::ServerWeakenRate => self.server_weaken_rate,
            Multiplier::HomeComputerRamCost => self.home_computer_ram_cost,
            Multiplier::PurchasedServerCost => self.purchased_server_cost,
            Multiplier::PurchasedServerSoftcap => self.purchased_server_softcap,
            Multiplier::PurchasedServerLimit => self.purchased_server_limit,
            Multiplier::PurchasedServerMaxRam => self.purchased_server_max_ram,
            Multiplier::CompanyWorkMoney => self.company_work_money,
            Multiplier::CrimeMoney => self.crime_money,
            Multiplier::HacknetNodeMoney => self.hacknet_node_money,
            Multiplier::ManualHackMoney => self.manual_hack_money,
            Multiplier::ScriptHackMoney => self.script_hack_money,
            Multiplier::ScriptHackMoneyGain => self.script_hack_money_gain,
            Multiplier::CodingContractMoney => self.coding_contract_money,
            Multiplier::ClassGymExpGain => self.class_gym_exp_gain,
            Multiplier::CompanyWorkExpGain => self.company_work_exp_gain,
            Multiplier::CrimeExpGain => self.crime_exp_gain,
            Multiplier::FactionWorkExpGain => self.faction_work_exp_gain,
            Multiplier::HackExpGain => self.hack_exp_gain,
            Multiplier::FactionPassiveRepGain => self.faction_passive_rep_gain,
            Multiplier::FactionWorkRepGain => self.faction_work_rep_gain,
            Multiplier::RepToDonateToFaction => self.rep_to_donate_to_faction,
            Multiplier::AugmentationMoneyCost => self.augmentation_money_cost,
            Multiplier::AugmentationRepCost => self.augmentation_rep_cost,
            Multiplier::InfiltrationMoney => self.infiltration_money,
            Multiplier::InfiltrationRep => self.infiltration_rep,
            Multiplier::FourSigmaMarketDataCost => self.four_sigma_market_data_cost,
            Multiplier::FourSigmaMarketDataApiCost => self.four_sigma_market_data_api_cost,
            Multiplier::CorporationValuation => self.corporation_valuation,
            Multiplier::CorporationSoftCap => self.corporation_soft_cap,
            Multiplier::BladeburnerRank => self.bladeburner_rank,
            Multiplier::BladeburnerSkillCost => self.bladeburner_skill_cost,
            Multiplier::GangSoftcap => self.gang_softcap,
            Multiplier::GangUniqueAugs => self.gang_unique_augs,
            Multiplier::DaedalusAugsRequirement => self.daedalus_augs_requirement,
            Multiplier::StaneksGiftPowerMultiplier => self.staneks_gift_power_multiplier,
            Multiplier::StaneksGiftExtraSize => self.staneks_gift_extra_size,
            Multiplier::WorldDaemonDifficulty => self.world_daemon_difficulty,
        }
    }

    /// Overwrite one multiplier by name.
    pub fn set(&mut self, m: Multiplier, value: f64) {
        match m {
            Multiplier::HackingLevelMultiplier => self.hacking_level_multiplier = value,
            Multiplier::StrengthLevelMultiplier => self.strength_level_multiplier = value,
            Multiplier::DefenseLevelMultiplier => self.defense_level_multiplier = value,
            Multiplier::DexterityLevelMultiplier => self.dexterity_level_multiplier = value,
            Multiplier::AgilityLevelMultiplier => self.agility_level_multiplier = value,
            Multiplier::CharismaLevelMultiplier => self.charisma_level_multiplier = value,
            Multiplier::ServerGrowthRate => self.server_growth_rate = value,
            Multiplier::ServerMaxMoney => self.server_max_money = value,
            Multiplier::ServerStartingMoney => self.server_starting_money = value,
            Multiplier::ServerStartingSecurity => self.server_starting_security = value,
            Multiplier::ServerWeakenRate => self.server_weaken_rate = value,
            Multiplier::HomeComputerRamCost => self.home_computer_ram_cost = value,
            Multiplier::PurchasedServerCost => self.purchased_server_cost = value,
            Multiplier::PurchasedServerSoftcap => self.purchased_server_softcap = value,
            Multiplier::PurchasedServerLimit => self.purchased_server_limit = value,
            Multiplier::PurchasedServerMaxRam => self.purchased_server_max_ram = value,
            Multiplier::CompanyWorkMoney => self.company_work_money = value,
            Multiplier::CrimeMoney => self.crime_money = value,
            Multiplier::HacknetNodeMoney => self.hacknet_node_money = value,
            Multiplier::ManualHackMoney => self.manual_hack_money = value,
            Multiplier::ScriptHackMoney => self.script_hack_money = value,
            Multiplier::ScriptHackMoneyGain => self.script_hack_money_gain = value,
            Multiplier::CodingContractMoney => self.coding_contract_money = value,
            Multiplier::ClassGymExpGain => self.class_gym_exp_gain = value,
            Multiplier::CompanyWorkExpGain => self.company_work_exp_gain = value,
            Multiplier::CrimeExpGain => self.crime_exp_gain = value,
            Multiplier::FactionWorkExpGain => self.faction_work_exp_gain = value,
            Multiplier::HackExpGain => self.hack_exp_gain = value,
            Multiplier::FactionPassiveRepGain => self.faction_passive_rep_gain = value,
            Multiplier::FactionWorkRepGain => self.faction_work_rep_gain = value,
            Multiplier::RepToDonateToFaction => self.rep_to_donate_to_faction = value,
            Multiplier::AugmentationMoneyCost => self.augmentation_money_cost = value,
            Multiplier::AugmentationRepCost => self.augmentation_rep_cost = value,
            Multiplier::InfiltrationMoney => self.infiltration_money = value,
            Multiplier::InfiltrationRep => self.infiltration_rep = value,
            Multiplier::FourSigmaMarketDataCost => self.four_sigma_market_data_cost = value,
            Multiplier::FourSigmaMarketDataApiCost => self.four_sigma_market_data_api_cost = value,
            Multiplier::CorporationValuation => self.corporation_valuation = value,
            Multiplier::CorporationSoftCap => self.corporation_soft_cap = value,
            Multiplier::BladeburnerRank => self.bladeburner_rank = value,
            Multiplier::BladeburnerSkillCost => self.bladeburner_skill_cost = value,
            Multiplier::GangSoftcap => self.gang_softcap = value,
            Multiplier::GangUniqueAugs => self.gang_unique_augs = value,
            Multiplier::DaedalusAugsRequirement => self.daedalus_augs_requirement = value,
            Multiplier::StaneksGiftPowerMultiplier => self.staneks_gift_power_multiplier = value,
            Multiplier::StaneksGiftExtraSize => self.staneks_gift_extra_size = value,
            Multiplier::WorldDaemonDifficulty => self.world_daemon_difficulty = value,
        }
    }

    /// Multiplier table for BitNode `n`.
    ///
    /// `source_files` only matters for BitNode 12. An unknown `n` logs a
    /// warning and yields the default table rather than failing.
    pub fn for_bitnode(n: u8, source_files: &SourceFiles) -> Self {
        let mut mults = Self::default();
        match BitNode::from_number(n) {
            Some(BitNode::TheRecursion) => {
                mults.apply_recursion(source_files.level_of(BitNode::TheRecursion.number()));
            }
            Some(node) => mults.apply(overrides(node)),
            None => log::warn!("BitNode {n} is invalid, using default multipliers"),
        }
        mults
    }

    /// Multiplier table for the player's BitNode, or for `requested` when
    /// it is given and non-zero.
    pub fn for_player(player: &PlayerStats, requested: Option<u8>) -> Self {
        let n = resolve_bitnode(requested, player.bitnode);
        Self::for_bitnode(n, &player.source_files)
    }

    /// Fields that differ from the default table, in record order.
    pub fn overridden(&self) -> Vec<(Multiplier, f64)> {
        let base = Self::default();
        Multiplier::ALL
            .iter()
            .filter(|&&m| self.get(m) != base.get(m))
            .map(|&m| (m, self.get(m)))
            .collect()
    }

    /// Augmentations required for a Daedalus invitation under this table.
    pub fn daedalus_augs_required(&self) -> u32 {
        (factions::DAEDALUS_BASE_AUGS as f64 * self.daedalus_augs_requirement).round() as u32
    }

    fn apply(&mut self, overrides: &[(Multiplier, f64)]) {
        for &(m, value) in overrides {
            self.set(m, value);
        }
    }

    /// BitNode 12: most gains shrink and most costs grow by 2% per
    /// Source-File 12 level, compounding.
    fn apply_recursion(&mut self, sf12_level: u32) {
        let inc = recursion::SF12_GROWTH.powf(sf12_level as f64);
        let dec = 1.0 / inc;

        self.daedalus_augs_requirement = inc.min(recursion::DAEDALUS_REQUIREMENT_CAP);

        for &m in RECURSION_DECREASED {
            self.set(m, dec);
        }
        for &m in RECURSION_INCREASED {
            self.set(m, inc);
        }

        // Does not scale, otherwise security could start above 300.
        self.server_starting_security = recursion::STARTING_SECURITY;
        self.gang_softcap = recursion::SOFTCAP;
        self.corporation_soft_cap = recursion::SOFTCAP;
    }
}

const RECURSION_DECREASED: &[Multiplier] = &[
    Multiplier::HackingLevelMultiplier,
    Multiplier::StrengthLevelMultiplier,
    Multiplier::DefenseLevelMultiplier,
    Multiplier::DexterityLevelMultiplier,
    Multiplier::AgilityLevelMultiplier,
    Multiplier::CharismaLevelMultiplier,
    Multiplier::ServerMaxMoney,
    Multiplier::ServerStartingMoney,
    Multiplier::ServerGrowthRate,
    Multiplier::ServerWeakenRate,
    Multiplier::PurchasedServerLimit,
    Multiplier::PurchasedServerMaxRam,
    Multiplier::ManualHackMoney,
    Multiplier::ScriptHackMoney,
    Multiplier::CompanyWorkMoney,
    Multiplier::CrimeMoney,
    Multiplier::HacknetNodeMoney,
    Multiplier::CodingContractMoney,
    Multiplier::CompanyWorkExpGain,
    Multiplier::ClassGymExpGain,
    Multiplier::FactionWorkExpGain,
    Multiplier::HackExpGain,
    Multiplier::CrimeExpGain,
    Multiplier::FactionWorkRepGain,
    Multiplier::FactionPassiveRepGain,
    Multiplier::InfiltrationMoney,
    Multiplier::InfiltrationRep,
    Multiplier::CorporationValuation,
    Multiplier::BladeburnerRank,
    Multiplier::GangUniqueAugs,
];

const RECURSION_INCREASED: &[Multiplier] = &[
    Multiplier::HomeComputerRamCost,
    Multiplier::PurchasedServerCost,
    Multiplier::PurchasedServerSoftcap,
    Multiplier::RepToDonateToFaction,
    Multiplier::AugmentationRepCost,
    Multiplier::AugmentationMoneyCost,
    Multiplier::FourSigmaMarketDataCost,
    Multiplier::FourSigmaMarketDataApiCost,
    Multiplier::BladeburnerSkillCost,
    Multiplier::StaneksGiftPowerMultiplier,
    Multiplier::StaneksGiftExtraSize,
    Multiplier::WorldDaemonDifficulty,
];

/// Declarative overrides for every fixed-value BitNode.
fn overrides(node: BitNode) -> &'static [(Multiplier, f64)] {
    match node {
        // Every multiplier is 1.
        BitNode::SourceGenesis => &[],
        BitNode::RiseOfTheUnderworld => RISE_OF_THE_UNDERWORLD,
        BitNode::Corporatocracy => CORPORATOCRACY,
        BitNode::TheSingularity => THE_SINGULARITY,
        BitNode::ArtificialIntelligence => ARTIFICIAL_INTELLIGENCE,
        BitNode::Bladeburners => BLADEBURNERS,
        BitNode::Bladeburners2079 => BLADEBURNERS_2079,
        BitNode::GhostOfWallStreet => GHOST_OF_WALL_STREET,
        BitNode::Hacktocracy => HACKTOCRACY,
        BitNode::DigitalCarbon => DIGITAL_CARBON,
        BitNode::TheBigCrash => THE_BIG_CRASH,
        // Computed from the Source-File level, see `apply_recursion`.
        BitNode::TheRecursion => &[],
        BitNode::TheyreLunatics => THEYRE_LUNATICS,
    }
}

use Multiplier as M;

const RISE_OF_THE_UNDERWORLD: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.8),
    (M::ServerGrowthRate, 0.8),
    (M::ServerMaxMoney, 0.2),
    (M::ServerStartingMoney, 0.4),
    (M::CrimeMoney, 3.0),
    (M::InfiltrationMoney, 3.0),
    (M::FactionWorkRepGain, 0.5),
    (M::FactionPassiveRepGain, 0.0),
    (M::StaneksGiftPowerMultiplier, 2.0),
    (M::StaneksGiftExtraSize, -6.0),
    (M::PurchasedServerSoftcap, 1.3),
    (M::CorporationSoftCap, 0.9),
    (M::WorldDaemonDifficulty, 5.0),
];

const CORPORATOCRACY: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.8),
    (M::RepToDonateToFaction, 0.5),
    (M::AugmentationRepCost, 3.0),
    (M::AugmentationMoneyCost, 3.0),
    (M::ServerMaxMoney, 0.2),
    (M::ServerStartingMoney, 0.2),
    (M::ServerGrowthRate, 0.2),
    (M::ScriptHackMoney, 0.2),
    (M::CompanyWorkMoney, 0.25),
    (M::CrimeMoney, 0.25),
    (M::HacknetNodeMoney, 0.25),
    (M::HomeComputerRamCost, 1.5),
    (M::PurchasedServerCost, 2.0),
    (M::StaneksGiftPowerMultiplier, 0.75),
    (M::StaneksGiftExtraSize, -2.0),
    (M::PurchasedServerSoftcap, 1.3),
    (M::GangSoftcap, 0.9),
    (M::WorldDaemonDifficulty, 2.0),
    (M::GangUniqueAugs, 0.5),
];

const THE_SINGULARITY: &[(Multiplier, f64)] = &[
    (M::ServerMaxMoney, 0.15),
    (M::ServerStartingMoney, 0.75),
    (M::ScriptHackMoney, 0.2),
    (M::CompanyWorkMoney, 0.1),
    (M::CrimeMoney, 0.2),
    (M::HacknetNodeMoney, 0.05),
    (M::CompanyWorkExpGain, 0.5),
    (M::ClassGymExpGain, 0.5),
    (M::FactionWorkExpGain, 0.5),
    (M::HackExpGain, 0.4),
    (M::CrimeExpGain, 0.5),
    (M::FactionWorkRepGain, 0.75),
    (M::StaneksGiftPowerMultiplier, 1.5),
    (M::StaneksGiftExtraSize, 0.0),
    (M::PurchasedServerSoftcap, 1.2),
    (M::WorldDaemonDifficulty, 3.0),
    (M::GangUniqueAugs, 0.5),
];

const ARTIFICIAL_INTELLIGENCE: &[(Multiplier, f64)] = &[
    (M::ServerMaxMoney, 2.0),
    (M::ServerStartingSecurity, 2.0),
    (M::ServerStartingMoney, 0.5),
    (M::ScriptHackMoney, 0.15),
    (M::HacknetNodeMoney, 0.2),
    (M::CrimeMoney, 0.5),
    (M::InfiltrationRep, 1.5),
    (M::InfiltrationMoney, 1.5),
    (M::AugmentationMoneyCost, 2.0),
    (M::HackExpGain, 0.5),
    (M::CorporationValuation, 0.5),
    (M::StaneksGiftPowerMultiplier, 1.3),
    (M::StaneksGiftExtraSize, 0.0),
    (M::PurchasedServerSoftcap, 1.2),
    (M::WorldDaemonDifficulty, 1.5),
    (M::GangUniqueAugs, 0.5),
];

const BLADEBURNERS: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.35),
    (M::ServerMaxMoney, 0.4),
    (M::ServerStartingMoney, 0.5),
    (M::ServerStartingSecurity, 1.5),
    (M::ScriptHackMoney, 0.75),
    (M::CompanyWorkMoney, 0.5),
    (M::CrimeMoney, 0.75),
    (M::InfiltrationMoney, 0.75),
    (M::CorporationValuation, 0.2),
    (M::HacknetNodeMoney, 0.2),
    (M::HackExpGain, 0.25),
    // 35 augmentations
    (M::DaedalusAugsRequirement, 1.166),
    (M::PurchasedServerSoftcap, 2.0),
    (M::StaneksGiftPowerMultiplier, 0.5),
    (M::StaneksGiftExtraSize, 2.0),
    (M::GangSoftcap, 0.7),
    (M::CorporationSoftCap, 0.9),
    (M::WorldDaemonDifficulty, 2.0),
    (M::GangUniqueAugs, 0.2),
];

const BLADEBURNERS_2079: &[(Multiplier, f64)] = &[
    (M::BladeburnerRank, 0.6),
    (M::BladeburnerSkillCost, 2.0),
    (M::AugmentationMoneyCost, 3.0),
    (M::HackingLevelMultiplier, 0.35),
    (M::ServerMaxMoney, 0.4),
    (M::ServerStartingMoney, 0.5),
    (M::ServerStartingSecurity, 1.5),
    (M::ScriptHackMoney, 0.5),
    (M::CompanyWorkMoney, 0.5),
    (M::CrimeMoney, 0.75),
    (M::InfiltrationMoney, 0.75),
    (M::CorporationValuation, 0.2),
    (M::HacknetNodeMoney, 0.2),
    (M::HackExpGain, 0.25),
    (M::FourSigmaMarketDataCost, 2.0),
    (M::FourSigmaMarketDataApiCost, 2.0),
    // 35 augmentations
    (M::DaedalusAugsRequirement, 1.166),
    (M::PurchasedServerSoftcap, 2.0),
    (M::StaneksGiftPowerMultiplier, 0.9),
    (M::StaneksGiftExtraSize, -1.0),
    (M::GangSoftcap, 0.7),
    (M::CorporationSoftCap, 0.9),
    (M::WorldDaemonDifficulty, 2.0),
    (M::GangUniqueAugs, 0.2),
];

const GHOST_OF_WALL_STREET: &[(Multiplier, f64)] = &[
    (M::ScriptHackMoney, 0.3),
    (M::ScriptHackMoneyGain, 0.0),
    (M::ManualHackMoney, 0.0),
    (M::CompanyWorkMoney, 0.0),
    (M::CrimeMoney, 0.0),
    (M::HacknetNodeMoney, 0.0),
    (M::InfiltrationMoney, 0.0),
    (M::RepToDonateToFaction, 0.0),
    (M::CorporationValuation, 0.0),
    (M::CodingContractMoney, 0.0),
    (M::StaneksGiftExtraSize, -7.0),
    (M::PurchasedServerSoftcap, 4.0),
    (M::GangSoftcap, 0.0),
    (M::CorporationSoftCap, 0.0),
    (M::GangUniqueAugs, 0.0),
];

const HACKTOCRACY: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.5),
    (M::StrengthLevelMultiplier, 0.45),
    (M::DefenseLevelMultiplier, 0.45),
    (M::DexterityLevelMultiplier, 0.45),
    (M::AgilityLevelMultiplier, 0.45),
    (M::CharismaLevelMultiplier, 0.45),
    (M::PurchasedServerLimit, 0.0),
    (M::HomeComputerRamCost, 5.0),
    (M::CrimeMoney, 0.5),
    (M::ScriptHackMoney, 0.1),
    (M::HackExpGain, 0.05),
    (M::ServerStartingMoney, 0.1),
    (M::ServerMaxMoney, 0.1),
    (M::ServerStartingSecurity, 2.5),
    (M::CorporationValuation, 0.5),
    (M::FourSigmaMarketDataCost, 5.0),
    (M::FourSigmaMarketDataApiCost, 4.0),
    (M::BladeburnerRank, 0.9),
    (M::BladeburnerSkillCost, 1.2),
    (M::StaneksGiftPowerMultiplier, 0.5),
    (M::StaneksGiftExtraSize, 2.0),
    (M::GangSoftcap, 0.8),
    (M::CorporationSoftCap, 0.7),
    (M::WorldDaemonDifficulty, 2.0),
    (M::GangUniqueAugs, 0.25),
];

const DIGITAL_CARBON: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.35),
    (M::StrengthLevelMultiplier, 0.4),
    (M::DefenseLevelMultiplier, 0.4),
    (M::DexterityLevelMultiplier, 0.4),
    (M::AgilityLevelMultiplier, 0.4),
    (M::CharismaLevelMultiplier, 0.4),
    (M::CompanyWorkMoney, 0.5),
    (M::CrimeMoney, 0.5),
    (M::HacknetNodeMoney, 0.5),
    (M::ManualHackMoney, 0.5),
    (M::ScriptHackMoney, 0.5),
    (M::CodingContractMoney, 0.5),
    (M::InfiltrationMoney, 0.5),
    (M::CorporationValuation, 0.5),
    (M::AugmentationMoneyCost, 5.0),
    (M::AugmentationRepCost, 2.0),
    (M::HomeComputerRamCost, 1.5),
    (M::PurchasedServerCost, 5.0),
    (M::PurchasedServerLimit, 0.6),
    (M::PurchasedServerMaxRam, 0.5),
    (M::BladeburnerRank, 0.8),
    (M::StaneksGiftPowerMultiplier, 0.75),
    (M::StaneksGiftExtraSize, -3.0),
    (M::PurchasedServerSoftcap, 1.1),
    (M::GangSoftcap, 0.9),
    (M::CorporationSoftCap, 0.9),
    (M::WorldDaemonDifficulty, 2.0),
    (M::GangUniqueAugs, 0.25),
];

const THE_BIG_CRASH: &[(Multiplier, f64)] = &[
    (M::HackingLevelMultiplier, 0.6),
    (M::HackExpGain, 0.5),
    (M::ServerMaxMoney, 0.1),
    (M::ServerStartingMoney, 0.1),
    (M::ServerGrowthRate, 0.2),
    (M::ServerWeakenRate, 2.0),
    (M::CrimeMoney, 3.0),
    (M::CompanyWorkMoney, 0.5),
    (M::HacknetNodeMoney, 0.1),
    (M::AugmentationMoneyCost, 2.0),
    (M::InfiltrationMoney, 2.5),
    (M::InfiltrationRep, 2.5),
    (M::CorporationValuation, 0.1),
    (M::CodingContractMoney, 0.25),
    (M::FourSigmaMarketDataCost, 4.0),
    (M::FourSigmaMarketDataApiCost, 4.0),
    (M::PurchasedServerSoftcap, 2.0),
    (M::CorporationSoftCap, 0.9),
    (M::WorldDaemonDifficulty, 1.5),
    (M::GangUniqueAugs, 0.75),
];

const THEYRE_LUNATICS: &[(Multiplier, f64)] = &[
    (M::PurchasedServerSoftcap, 1.6),
    (M::HackingLevelMultiplier, 0.25),
    (M::StrengthLevelMultiplier, 0.7),
    (M::DefenseLevelMultiplier, 0.7),
    (M::DexterityLevelMultiplier, 0.7),
    (M::AgilityLevelMultiplier, 0.7),
    (M::ServerMaxMoney, 0.45),
    (M::ServerStartingMoney, 0.75),
    (M::ServerStartingSecurity, 3.0),
    (M::ScriptHackMoney, 0.2),
    (M::CompanyWorkMoney, 0.4),
    (M::CrimeMoney, 0.4),
    (M::HacknetNodeMoney, 0.4),
    (M::CodingContractMoney, 0.4),
    (M::CompanyWorkExpGain, 0.5),
    (M::ClassGymExpGain, 0.5),
    (M::FactionWorkExpGain, 0.5),
    (M::HackExpGain, 0.1),
    (M::CrimeExpGain, 0.5),
    (M::FactionWorkRepGain, 0.6),
    (M::FourSigmaMarketDataCost, 10.0),
    (M::FourSigmaMarketDataApiCost, 10.0),
    (M::CorporationValuation, 0.001),
    (M::BladeburnerRank, 0.45),
    (M::BladeburnerSkillCost, 2.0),
    (M::StaneksGiftPowerMultiplier, 2.0),
    (M::StaneksGiftExtraSize, 1.0),
    (M::GangSoftcap, 0.3),
    (M::CorporationSoftCap, 0.3),
    (M::WorldDaemonDifficulty, 3.0),
    (M::GangUniqueAugs, 0.1),
];
