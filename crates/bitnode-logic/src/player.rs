//! Player stats snapshot and job qualification.
//!
//! [`PlayerStats`] is a read-only view of the parts of the player that the
//! career logic consults: skill levels, where they work, and which BitNode
//! run they are in. Nothing in this crate mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bitnode::SourceFiles;
use crate::catalog::{Company, Position, PositionCatalog};

/// Skill levels and employment of the player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub hacking: u32,
    pub strength: u32,
    pub defense: u32,
    pub dexterity: u32,
    pub agility: u32,
    pub charisma: u32,
    /// Current BitNode number; `None` for saves that predate BitNodes.
    pub bitnode: Option<u8>,
    pub source_files: SourceFiles,
    /// Company the player is currently working for.
    pub current_company: Option<String>,
    /// Position name held at each company the player has joined.
    pub jobs: BTreeMap<String, String>,
}

impl PlayerStats {
    /// Does the player meet `position`'s requirements at `company`?
    ///
    /// Stat requirements include the company's offset; reputation is the
    /// player's reputation with that company.
    pub fn is_qualified(&self, company: &Company, position: &Position) -> bool {
        let req = position
            .requirements
            .with_offset(company.job_stat_req_offset);
        self.hacking >= req.hacking
            && self.strength >= req.strength
            && self.defense >= req.defense
            && self.dexterity >= req.dexterity
            && self.agility >= req.agility
            && self.charisma >= req.charisma
            && company.reputation >= req.reputation
    }

    /// Position currently held at `company`, if any.
    pub fn job_at<'a>(
        &self,
        catalog: &'a PositionCatalog,
        company: &Company,
    ) -> Option<&'a Position> {
        self.jobs
            .get(&company.name)
            .and_then(|name| catalog.by_name(name))
    }

    /// Whether `company` is the employer the player is working for right now.
    pub fn works_for(&self, company: &Company) -> bool {
        self.current_company.as_deref() == Some(company.name.as_str())
    }
}
