use serde::{Deserialize, Serialize};

/// `GET /player/{username}/games/archives`
///
/// One URL per month with games, oldest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMonthlyArchives {
    pub archives: Vec<String>,
}

impl PlayerMonthlyArchives {
    /// Months of the archive URLs that could be parsed, in archive order.
    pub fn months(&self) -> impl Iterator<Item = ArchiveMonth> + '_ {
        self.archives
            .iter()
            .filter_map(|url| ArchiveMonth::from_url(url))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchiveMonth {
    pub year: i32,
    pub month: u32,
}

impl ArchiveMonth {
    /// Parse `.../games/{YYYY}/{MM}`.
    pub fn from_url(url: &str) -> Option<Self> {
        let mut segments = url.trim_end_matches('/').rsplit('/');
        let month = segments.next()?.parse::<u32>().ok()?;
        let year = segments.next()?.parse::<i32>().ok()?;
        if segments.next()? != "games" || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Zero-padded month as the games endpoint expects it.
    pub fn month_string(&self) -> String {
        format!("{:02}", self.month)
    }
}

impl std::fmt::Display for ArchiveMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{:02}", self.year, self.month)
    }
}
