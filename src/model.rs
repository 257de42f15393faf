// src/model.rs
//
// Normalized legislative records.
//
// Bills and votes are built once by the page specs through append-only
// `add_*` calls, then handed to a sink by reference. Sub-records (actions,
// sponsors, versions, votes) are plain values owned by their bill.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::consts::PASSAGE_STAGE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    Upper,
    Lower,
}

impl Chamber {
    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::Upper => "upper",
            Chamber::Lower => "lower",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorRole {
    Primary,
    Cosponsor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub role: SponsorRole,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub actor: Chamber,
    pub text: String,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub session: String,
    pub chamber: Chamber,
    pub identifier: String,
    pub title: String,
    pub sources: Vec<String>,
    pub sponsors: Vec<Sponsor>,
    pub actions: Vec<Action>,
    pub versions: Vec<Version>,
    pub votes: Vec<Vote>,
}

impl Bill {
    pub fn new(
        session: impl Into<String>,
        chamber: Chamber,
        identifier: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            chamber,
            identifier: identifier.into(),
            title: title.into(),
            sources: Vec::new(),
            sponsors: Vec::new(),
            actions: Vec::new(),
            versions: Vec::new(),
            votes: Vec::new(),
        }
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        self.sources.push(url.into());
    }

    pub fn add_sponsor(&mut self, role: SponsorRole, name: impl Into<String>) {
        self.sponsors.push(Sponsor { role, name: name.into() });
    }

    pub fn add_action(&mut self, actor: Chamber, text: impl Into<String>, date: NaiveDate) {
        self.actions.push(Action { actor, text: text.into(), date });
    }

    pub fn add_version(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.versions.push(Version { name: name.into(), url: url.into() });
    }

    pub fn add_vote(&mut self, vote: Vote) {
        self.votes.push(vote);
    }

    pub fn primary_sponsor(&self) -> Option<&str> {
        self.sponsors
            .iter()
            .find(|s| s.role == SponsorRole::Primary)
            .map(|s| s.name.as_str())
    }

    pub fn cosponsors(&self) -> impl Iterator<Item = &str> {
        self.sponsors
            .iter()
            .filter(|s| s.role == SponsorRole::Cosponsor)
            .map(|s| s.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub chamber: Chamber,
    pub passage_stage: String,
    pub motion: String,
    pub date: NaiveDate,
    pub yes_count: u32,
    pub no_count: u32,
    pub other_count: u32,
    pub yes_voters: BTreeSet<String>,
    pub no_voters: BTreeSet<String>,
    pub other_voters: BTreeSet<String>,
    pub sources: Vec<String>,
}

impl Vote {
    pub fn new(
        chamber: Chamber,
        motion: impl Into<String>,
        date: NaiveDate,
        yes_count: u32,
        no_count: u32,
        other_count: u32,
    ) -> Self {
        Self {
            chamber,
            passage_stage: s!(PASSAGE_STAGE),
            motion: motion.into(),
            date,
            yes_count,
            no_count,
            other_count,
            yes_voters: BTreeSet::new(),
            no_voters: BTreeSet::new(),
            other_voters: BTreeSet::new(),
            sources: Vec::new(),
        }
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        self.sources.push(url.into());
    }

    pub fn yes(&mut self, name: impl Into<String>) {
        self.yes_voters.insert(name.into());
    }

    pub fn no(&mut self, name: impl Into<String>) {
        self.no_voters.insert(name.into());
    }

    pub fn other(&mut self, name: impl Into<String>) {
        self.other_voters.insert(name.into());
    }

    /// True when every voter set holds exactly as many names as its printed tally.
    /// Source pages are not always self-consistent; callers only log a mismatch.
    pub fn tallies_consistent(&self) -> bool {
        self.yes_voters.len() == self.yes_count as usize
            && self.no_voters.len() == self.no_count as usize
            && self.other_voters.len() == self.other_count as usize
    }
}
