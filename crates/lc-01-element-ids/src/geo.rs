//! # Geometry Identifiers
//!
//! ```text
//! Cryostat (C) ─┬─ OpDet (O)
//!               └─ TPC (T) ── Plane (P) ── Wire (W)
//! ```
//!
//! `WireID::new(1, 5, 2, 9)` renders as `"C:1 T:5 P:2 W:9"`.

use crate::chain::{level_access, ChildId, ChildLevel, CryostatID, Level};

/// Hierarchy depth of each geometry element.
pub mod level {
    use super::Level;

    pub const CRYOSTAT: Level = 0;
    pub const OPDET: Level = 1;
    pub const TPC: Level = 1;
    pub const PLANE: Level = 2;
    pub const WIRE: Level = 3;
    pub const N_LEVELS: Level = 4;
}

pub type OpDetIndex = u32;
pub type TpcIndex = u32;
pub type PlaneIndex = u32;
pub type WireIndex = u32;

/// Optical detector within a cryostat.
pub struct OpDetLevel;

impl ChildLevel for OpDetLevel {
    type Parent = CryostatID;
    type Index = OpDetIndex;

    const TAG: char = 'O';
    const NAME: &'static str = "optical detector";
}

/// TPC within a cryostat.
pub struct TpcLevel;

impl ChildLevel for TpcLevel {
    type Parent = CryostatID;
    type Index = TpcIndex;

    const TAG: char = 'T';
    const NAME: &'static str = "TPC";
}

/// Wire plane within a TPC.
pub struct PlaneLevel;

impl ChildLevel for PlaneLevel {
    type Parent = TPCID;
    type Index = PlaneIndex;

    const TAG: char = 'P';
    const NAME: &'static str = "plane";
}

/// Wire within a plane.
pub struct WireLevel;

impl ChildLevel for WireLevel {
    type Parent = PlaneID;
    type Index = WireIndex;

    const TAG: char = 'W';
    const NAME: &'static str = "wire";
}

/// Identifier of an optical detector.
pub type OpDetID = ChildId<OpDetLevel>;

/// Identifier of a TPC.
pub type TPCID = ChildId<TpcLevel>;

/// Identifier of a wire plane.
pub type PlaneID = ChildId<PlaneLevel>;

/// Identifier of a wire.
pub type WireID = ChildId<WireLevel>;

level_access!(OpDetLevel => 1; 0);
level_access!(TpcLevel => 1; 0);
level_access!(PlaneLevel => 2; 0, 1);
level_access!(WireLevel => 3; 0, 1, 2);

impl OpDetID {
    pub fn new(cryostat: u32, opdet: OpDetIndex) -> Self {
        Self::from_parent(CryostatID::new(cryostat), opdet)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat
    }

    pub fn opdet(&self) -> OpDetIndex {
        self.index
    }
}

impl TPCID {
    pub fn new(cryostat: u32, tpc: TpcIndex) -> Self {
        Self::from_parent(CryostatID::new(cryostat), tpc)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat
    }

    pub fn tpc(&self) -> TpcIndex {
        self.index
    }
}

impl PlaneID {
    pub fn new(cryostat: u32, tpc: TpcIndex, plane: PlaneIndex) -> Self {
        Self::from_parent(TPCID::new(cryostat, tpc), plane)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        self.parent.cryostat_id()
    }

    pub fn tpc_id(&self) -> &TPCID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat()
    }

    pub fn tpc(&self) -> TpcIndex {
        self.parent.index
    }

    pub fn plane(&self) -> PlaneIndex {
        self.index
    }
}

impl WireID {
    pub fn new(cryostat: u32, tpc: TpcIndex, plane: PlaneIndex, wire: WireIndex) -> Self {
        Self::from_parent(PlaneID::new(cryostat, tpc, plane), wire)
    }

    pub fn cryostat_id(&self) -> &CryostatID {
        self.parent.cryostat_id()
    }

    pub fn tpc_id(&self) -> &TPCID {
        self.parent.tpc_id()
    }

    pub fn plane_id(&self) -> &PlaneID {
        &self.parent
    }

    pub fn cryostat(&self) -> u32 {
        self.parent.cryostat()
    }

    pub fn tpc(&self) -> TpcIndex {
        self.parent.tpc()
    }

    pub fn plane(&self) -> PlaneIndex {
        self.parent.index
    }

    pub fn wire(&self) -> WireIndex {
        self.index
    }
}

impl AsRef<TPCID> for PlaneID {
    fn as_ref(&self) -> &TPCID {
        self.tpc_id()
    }
}

impl AsRef<TPCID> for WireID {
    fn as_ref(&self) -> &TPCID {
        self.tpc_id()
    }
}

impl AsRef<PlaneID> for WireID {
    fn as_ref(&self) -> &PlaneID {
        self.plane_id()
    }
}
