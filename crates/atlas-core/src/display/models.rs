//! Display implementations for domain models.
//!
//! Every record renders as a markdown header with its identifier and name,
//! followed by a metadata list. Absent optional fields are left out.

use std::fmt;

use crate::models::{Continent, Country, Region};

fn optional_line(f: &mut fmt::Formatter<'_>, label: &str, value: &Option<String>) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "- {label}: {value}"),
        None => Ok(()),
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.continent_id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Code: {}", self.continent_code)?;
        writeln!(f)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.country_id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Code: {}", self.country_code)?;
        writeln!(f, "- Continent: {}", self.continent_id)?;
        optional_line(f, "Wikipedia", &self.wikipedia_link)?;
        optional_line(f, "Keywords", &self.keywords)?;
        writeln!(f)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.region_id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Code: {}", self.region_code)?;
        writeln!(f, "- Local code: {}", self.local_code)?;
        writeln!(f, "- Continent: {}", self.continent_id)?;
        writeln!(f, "- Country: {}", self.country_id)?;
        optional_line(f, "Wikipedia", &self.wikipedia_link)?;
        optional_line(f, "Keywords", &self.keywords)?;
        writeln!(f)
    }
}
