//! # Readout Identifiers
//!
//! ```text
//! Cryostat (C) ── TPC set (S) ── Readout plane (R)
//! ```
//!
//! The cryostat is the same `CryostatID` used by the geometry hierarchy.
//! Channels are plain integers and live outside this family.

use crate::chain::{level_access, ChildId, ChildLevel, CryostatID, Level};

/// Hierarchy depth of each readout element.
pub mod level {
    use super::Level;

    pub const CRYOSTAT: Level = 0;
    pub const TPCSET: Level = 1;
    pub const READOUT_PLANE: Level = 2;
    pub const CHANNEL: Level = 3;
    pub const N_LEVELS: Level = 4;
}

/// TPC sets are few: 16 bits are plenty.
pub type TPCsetIndex = u16;
pub type ROPIndex = u32;

/// Group of TPCs sharing readout channels.
pub struct TPCsetLevel;

impl ChildLevel for TPCsetLevel {
    type Parent = CryostatID;
    type Index = TPCsetIndex;

    const TAG: char = 'S';
    const NAME: &'static str = "TPC set";
}

/// Group of wires sharing readout channels within a TPC set.
pub struct RopLevel;

impl ChildLevel for RopLevel {
    type Parent = TPCsetID;
    type Index = ROPIndex;

    const TAG: char = 'R';
    const NAME: &'static str = "readout plane";
}

/// Identifier of a TPC set.
pub type TPCsetID = ChildId<TPCsetLevel>;

/// Identifier of a readout plane.
pub type ROPID = ChildId<RopLevel>;

level_access!(TPCsetLevel => 1; 0);
level_access!(RopLevel => 2; 0, 1);

impl TPCsetID {
    pub fn new(cryostat: u32, tpcset: TPCsetIndex) -> Self {
        Self::from_parent(CryostatID::new(cryostat), tpcset)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat
    }

    pub fn tpcset(&self) -> TPCsetIndex {
        self.index
    }
}

impl ROPID {
    pub fn new(cryostat: u32, tpcset: TPCsetIndex, rop: ROPIndex) -> Self {
        Self::from_parent(TPCsetID::new(cryostat, tpcset), rop)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        self.parent.cryostat_id()
    }

    pub fn tpcset_id(&self) -> &TPCsetID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat()
    }

    pub fn tpcset(&self) -> TPCsetIndex {
        self.parent.index
    }

    pub fn rop(&self) -> ROPIndex {
        self.index
    }
}

impl AsRef<TPCsetID> for ROPID {
    fn as_ref(&self) -> &TPCsetID {
        self.tpcset_id()
    }
}
