// src/config/consts.rs

// Site
pub const LISTING_TEMPLATE: &str = "http://www.flsenate.gov/Session/index.cfm\
    ?Mode=Bills&BI_Mode=ViewBySubject&Letter={letter}&Year={year}&Chamber={chamber}";
pub const DEFAULT_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Link markers (substring of href)
pub const BILL_LINK_MARKER: &str = "BillNum=";
pub const VERSION_LINK_MARKER: &str = "billtext/html";
pub const HOUSE_VOTE_LINK_MARKER: &str = "votes/html/h";

// Vote page labels
pub const MOTION_LABELS: [&str; 3] = ["Amendment Number", "Reading Number", "Floor Actions"];
pub const DATE_LABEL: &str = "Date:";
pub const YEAS_LABEL: &str = "Yeas";
pub const NAYS_LABEL: &str = "Nays";
pub const NOT_VOTING_LABEL: &str = "Not Voting";
pub const TALLY_SEP: &str = " - ";

// Placeholder: the vote pages never say which passage stage a roll call belongs to.
pub const PASSAGE_STAGE: &str = "never";

// Date formats
pub const HISTORY_DATE_FMT: &str = "%m/%d/%y";
pub const VOTE_DATE_FMT: &str = "%m/%d/%Y";
