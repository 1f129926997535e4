use crate::{database::FormatTag, RomDatabase, E};

/// One row of the ROM database table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub hash: String,
    pub name: String,
    pub supported: &'static str,
    pub region: String,
    pub formats: String,
    pub master_quest: &'static str,
}

/// ROM database table, or the reason it cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Rows(Vec<ListingRow>),
    Unavailable(String),
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl From<&RomDatabase> for Listing {
    fn from(db: &RomDatabase) -> Self {
        let mut rows: Vec<ListingRow> = db
            .iter()
            .map(|(hash, entry)| ListingRow {
                hash: hash.clone(),
                name: entry.name.clone(),
                supported: yes_no(entry.supported),
                region: entry.region.clone(),
                formats: entry
                    .formats
                    .iter()
                    .map(FormatTag::as_str)
                    .collect::<Vec<&str>>()
                    .join(", "),
                master_quest: yes_no(entry.master_quest),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.hash.cmp(&b.hash)));
        Listing::Rows(rows)
    }
}

impl From<Result<RomDatabase, E>> for Listing {
    fn from(fetched: Result<RomDatabase, E>) -> Self {
        match fetched {
            Ok(db) => Listing::from(&db),
            Err(err) => Listing::Unavailable(err.to_string()),
        }
    }
}
