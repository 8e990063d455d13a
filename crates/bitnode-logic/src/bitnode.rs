//! BitNode identifiers and Source-File levels.
//!
//! A BitNode is the game mode a run takes place in. Each one has a number
//! (1–13), a display name, and a multiplier table (see
//! [`crate::multipliers`]). Completing a BitNode grants a Source-File for
//! it; some tables scale with the Source-File level the player holds.
//!
//! ```
//! use bitnode_logic::bitnode::{resolve_bitnode, BitNode};
//!
//! assert_eq!(resolve_bitnode(None, Some(5)), 5);
//! assert_eq!(BitNode::from_number(5), Some(BitNode::ArtificialIntelligence));
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BITNODE;

/// Every BitNode with a defined multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum BitNode {
    SourceGenesis = 1,
    RiseOfTheUnderworld = 2,
    Corporatocracy = 3,
    TheSingularity = 4,
    ArtificialIntelligence = 5,
    Bladeburners = 6,
    Bladeburners2079 = 7,
    GhostOfWallStreet = 8,
    Hacktocracy = 9,
    DigitalCarbon = 10,
    TheBigCrash = 11,
    TheRecursion = 12,
    TheyreLunatics = 13,
}

impl BitNode {
    /// All BitNodes in numeric order.
    pub const ALL: [BitNode; 13] = [
        BitNode::SourceGenesis,
        BitNode::RiseOfTheUnderworld,
        BitNode::Corporatocracy,
        BitNode::TheSingularity,
        BitNode::ArtificialIntelligence,
        BitNode::Bladeburners,
        BitNode::Bladeburners2079,
        BitNode::GhostOfWallStreet,
        BitNode::Hacktocracy,
        BitNode::DigitalCarbon,
        BitNode::TheBigCrash,
        BitNode::TheRecursion,
        BitNode::TheyreLunatics,
    ];

    /// Look up a BitNode by number. Returns `None` outside 1–13.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.number() == n)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            BitNode::SourceGenesis => "Source Genesis",
            BitNode::RiseOfTheUnderworld => "Rise of the Underworld",
            BitNode::Corporatocracy => "Corporatocracy",
            BitNode::TheSingularity => "The Singularity",
            BitNode::ArtificialIntelligence => "Artificial Intelligence",
            BitNode::Bladeburners => "Bladeburners",
            BitNode::Bladeburners2079 => "Bladeburners 2079",
            BitNode::GhostOfWallStreet => "Ghost of Wall Street",
            BitNode::Hacktocracy => "Hacktocracy",
            BitNode::DigitalCarbon => "Digital Carbon",
            BitNode::TheBigCrash => "The Big Crash",
            BitNode::TheRecursion => "The Recursion",
            BitNode::TheyreLunatics => "They're lunatics",
        }
    }
}

/// Pick the BitNode number a multiplier lookup should use.
///
/// An explicit non-zero request wins. Otherwise the player's current
/// BitNode is used, and a player with no recorded BitNode is treated as
/// being in BitNode 1. A recorded value is passed through unvalidated, so
/// a corrupt save still reaches the unknown-key path of the table lookup.
pub fn resolve_bitnode(requested: Option<u8>, current: Option<u8>) -> u8 {
    match requested {
        Some(n) if n != 0 => n,
        _ => current.unwrap_or(DEFAULT_BITNODE),
    }
}

/// One owned Source-File.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// BitNode number this Source-File was earned in.
    pub n: u8,
    pub level: u32,
}

/// The Source-Files a player owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceFiles(pub Vec<SourceFile>);

impl SourceFiles {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self(files)
    }

    /// Level held for BitNode `n`, or 0 if not owned.
    ///
    /// Save files occasionally list a Source-File twice; the last entry wins.
    pub fn level_of(&self, n: u8) -> u32 {
        self.0
            .iter()
            .rev()
            .find(|sf| sf.n == n)
            .map_or(0, |sf| sf.level)
    }
}
