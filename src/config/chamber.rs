// src/config/chamber.rs
//
// How each chamber is named on the site. Every place that needs "Senate",
// "S" or "SENATE" goes through this table instead of branching on the enum.

use crate::model::Chamber;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChamberInfo {
    pub chamber: Chamber,
    /// `Chamber=` value on the listing pages.
    pub site_name: &'static str,
    /// Bill number prefix (SB / HB).
    pub bill_abbr: &'static str,
    /// Token used in bill history lines.
    pub history_token: &'static str,
}

pub const CHAMBERS: [ChamberInfo; 2] = [
    ChamberInfo {
        chamber: Chamber::Upper,
        site_name: "Senate",
        bill_abbr: "S",
        history_token: "SENATE",
    },
    ChamberInfo {
        chamber: Chamber::Lower,
        site_name: "House",
        bill_abbr: "H",
        history_token: "HOUSE",
    },
];

impl Chamber {
    pub fn info(self) -> &'static ChamberInfo {
        match self {
            Chamber::Upper => &CHAMBERS[0],
            Chamber::Lower => &CHAMBERS[1],
        }
    }

    pub fn site_name(self) -> &'static str {
        self.info().site_name
    }

    pub fn bill_abbr(self) -> &'static str {
        self.info().bill_abbr
    }

    /// History lines only ever carry SENATE or HOUSE; anything that is not
    /// the Senate token is treated as the House.
    pub fn from_history_token(token: &str) -> Chamber {
        CHAMBERS
            .iter()
            .find(|c| c.history_token == token)
            .map(|c| c.chamber)
            .unwrap_or(Chamber::Lower)
    }
}
