//! Command-line argument wrappers and command handlers
//!
//! Every subcommand parses into a clap `Args` struct that converts into a
//! core parameter or model type via `From`, keeping clap derives out of
//! `atlas-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params / Models → Engine
//! ```
//!
//! [`Cli`] runs the converted request against the engine and renders the
//! markdown result. Rejected saves and unknown identifiers print an
//! `Error:` status line instead of failing the process.

use anyhow::{Context, Result};
use atlas_core::{
    display::{CreateResult, OperationStatus, Records, UpdateResult},
    models::{Continent, Country, Entity, Region},
    params::{Id, SearchContinents, SearchCountries, SearchParams, SearchRegions},
    AtlasError, Engine,
};
use clap::{Args, Subcommand};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Shared arguments
// ============================================================================

/// Identify a record by its ID
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the record")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Optional text columns shared by countries and regions
///
/// An empty value clears the column.
#[derive(Args)]
pub struct OptionalFieldArgs {
    #[arg(long, help = "Link to the Wikipedia article")]
    pub wikipedia_link: Option<String>,
    #[arg(long, help = "Comma-separated search keywords")]
    pub keywords: Option<String>,
}

// ============================================================================
// Continents
// ============================================================================

#[derive(Args)]
pub struct SearchContinentsArgs {
    #[arg(short, long, help = "Exact continent code, such as AF")]
    pub code: Option<String>,
    #[arg(short, long, help = "Exact continent name")]
    pub name: Option<String>,
}

impl From<SearchContinentsArgs> for SearchContinents {
    fn from(val: SearchContinentsArgs) -> Self {
        SearchContinents {
            continent_code: val.code,
            name: val.name,
        }
    }
}

#[derive(Args)]
pub struct ContinentArgs {
    /// Continent code, such as AF
    pub code: String,
    /// Continent name
    pub name: String,
}

impl From<ContinentArgs> for Continent {
    fn from(val: ContinentArgs) -> Self {
        Continent::new(val.code, val.name)
    }
}

/// Overwrite every field of an existing continent
#[derive(Args)]
pub struct UpdateContinentArgs {
    #[arg(help = "Unique identifier of the continent to update")]
    pub id: u64,
    #[command(flatten)]
    pub fields: ContinentArgs,
}

impl From<UpdateContinentArgs> for Continent {
    fn from(val: UpdateContinentArgs) -> Self {
        Continent::from(val.fields).with_id(val.id)
    }
}

#[derive(Subcommand)]
pub enum ContinentCommands {
    /// Search continents; without filters every continent is listed
    #[command(alias = "s")]
    Search(SearchContinentsArgs),
    /// Show one continent
    Show(IdArgs),
    /// Create a continent under a new ID
    #[command(alias = "c")]
    Create(ContinentArgs),
    /// Overwrite an existing continent
    #[command(alias = "u")]
    Update(UpdateContinentArgs),
}

// ============================================================================
// Countries
// ============================================================================

#[derive(Args)]
pub struct SearchCountriesArgs {
    #[arg(short, long, help = "Exact country code, such as DZ")]
    pub code: Option<String>,
    #[arg(short, long, help = "Exact country name")]
    pub name: Option<String>,
}

impl From<SearchCountriesArgs> for SearchCountries {
    fn from(val: SearchCountriesArgs) -> Self {
        SearchCountries {
            country_code: val.code,
            name: val.name,
        }
    }
}

#[derive(Args)]
pub struct CountryArgs {
    /// Country code, such as DZ
    pub code: String,
    /// Country name
    pub name: String,
    #[arg(long, help = "ID of the continent this country belongs to")]
    pub continent_id: u64,
    #[command(flatten)]
    pub optional: OptionalFieldArgs,
}

impl From<CountryArgs> for Country {
    fn from(val: CountryArgs) -> Self {
        Country {
            wikipedia_link: val.optional.wikipedia_link,
            keywords: val.optional.keywords,
            ..Country::new(val.code, val.name, val.continent_id)
        }
    }
}

/// Overwrite every field of an existing country
#[derive(Args)]
pub struct UpdateCountryArgs {
    #[arg(help = "Unique identifier of the country to update")]
    pub id: u64,
    #[command(flatten)]
    pub fields: CountryArgs,
}

impl From<UpdateCountryArgs> for Country {
    fn from(val: UpdateCountryArgs) -> Self {
        Country::from(val.fields).with_id(val.id)
    }
}

#[derive(Subcommand)]
pub enum CountryCommands {
    /// Search countries; without filters every country is listed
    #[command(alias = "s")]
    Search(SearchCountriesArgs),
    /// Show one country
    Show(IdArgs),
    /// Create a country under a new ID
    #[command(alias = "c")]
    Create(CountryArgs),
    /// Overwrite an existing country
    #[command(alias = "u")]
    Update(UpdateCountryArgs),
}

// ============================================================================
// Regions
// ============================================================================

#[derive(Args)]
pub struct SearchRegionsArgs {
    #[arg(short, long, help = "Exact region code, such as DZ-01")]
    pub code: Option<String>,
    #[arg(short, long, help = "Exact code within the country")]
    pub local_code: Option<String>,
    #[arg(short, long, help = "Exact region name")]
    pub name: Option<String>,
}

impl From<SearchRegionsArgs> for SearchRegions {
    fn from(val: SearchRegionsArgs) -> Self {
        SearchRegions {
            region_code: val.code,
            local_code: val.local_code,
            name: val.name,
        }
    }
}

#[derive(Args)]
pub struct RegionArgs {
    /// Region code, such as DZ-01
    pub code: String,
    /// Code within the country, such as 01
    pub local_code: String,
    /// Region name
    pub name: String,
    #[arg(long, help = "ID of the continent this region belongs to")]
    pub continent_id: u64,
    #[arg(long, help = "ID of the country this region belongs to")]
    pub country_id: u64,
    #[command(flatten)]
    pub optional: OptionalFieldArgs,
}

impl From<RegionArgs> for Region {
    fn from(val: RegionArgs) -> Self {
        Region {
            wikipedia_link: val.optional.wikipedia_link,
            keywords: val.optional.keywords,
            ..Region::new(
                val.code,
                val.local_code,
                val.name,
                val.continent_id,
                val.country_id,
            )
        }
    }
}

/// Overwrite every field of an existing region
#[derive(Args)]
pub struct UpdateRegionArgs {
    #[arg(help = "Unique identifier of the region to update")]
    pub id: u64,
    #[command(flatten)]
    pub fields: RegionArgs,
}

impl From<UpdateRegionArgs> for Region {
    fn from(val: UpdateRegionArgs) -> Self {
        Region::from(val.fields).with_id(val.id)
    }
}

#[derive(Subcommand)]
pub enum RegionCommands {
    /// Search regions; without filters every region is listed
    #[command(alias = "s")]
    Search(SearchRegionsArgs),
    /// Show one region
    Show(IdArgs),
    /// Create a region under a new ID
    #[command(alias = "c")]
    Create(RegionArgs),
    /// Overwrite an existing region
    #[command(alias = "u")]
    Update(UpdateRegionArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

/// Runs parsed commands against an engine and renders their output.
pub struct Cli {
    engine: Engine,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(engine: Engine, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    pub async fn handle_continent_command(&self, command: ContinentCommands) -> Result<()> {
        match command {
            ContinentCommands::Search(args) => self.search(&SearchContinents::from(args)).await,
            ContinentCommands::Show(args) => self.show::<Continent>(&args.into()).await,
            ContinentCommands::Create(args) => self.create(Continent::from(args)).await,
            ContinentCommands::Update(args) => self.update(Continent::from(args)).await,
        }
    }

    pub async fn handle_country_command(&self, command: CountryCommands) -> Result<()> {
        match command {
            CountryCommands::Search(args) => self.search(&SearchCountries::from(args)).await,
            CountryCommands::Show(args) => self.show::<Country>(&args.into()).await,
            CountryCommands::Create(args) => self.create(Country::from(args)).await,
            CountryCommands::Update(args) => self.update(Country::from(args)).await,
        }
    }

    pub async fn handle_region_command(&self, command: RegionCommands) -> Result<()> {
        match command {
            RegionCommands::Search(args) => self.search(&SearchRegions::from(args)).await,
            RegionCommands::Show(args) => self.show::<Region>(&args.into()).await,
            RegionCommands::Create(args) => self.create(Region::from(args)).await,
            RegionCommands::Update(args) => self.update(Region::from(args)).await,
        }
    }

    pub async fn search<P: SearchParams>(&self, params: &P) -> Result<()> {
        let records = self
            .engine
            .search(params)
            .await
            .context("Failed to search records")?;
        debug!("Search returned {} records", records.len());
        self.renderer.render(Records(records))
    }

    async fn show<E: Entity>(&self, params: &Id) -> Result<()> {
        match self.engine.load::<E>(params).await {
            Ok(record) => self.renderer.render(record),
            Err(err) => self.report(err, "Failed to load record"),
        }
    }

    async fn create<E: Entity>(&self, record: E) -> Result<()> {
        match self.engine.save_new(record).await {
            Ok(saved) => self.renderer.render(CreateResult::new(saved)),
            Err(err) => self.report(err, "Failed to create record"),
        }
    }

    async fn update<E: Entity>(&self, record: E) -> Result<()> {
        match self.engine.save(record).await {
            Ok(saved) => self.renderer.render(UpdateResult::new(saved)),
            Err(err) => self.report(err, "Failed to update record"),
        }
    }

    /// Prints rejections as a status line; anything else aborts the command.
    fn report(&self, err: AtlasError, context: &'static str) -> Result<()> {
        if err.is_rejection() {
            self.renderer.render(OperationStatus::failure(err.to_string()))
        } else {
            Err(err).context(context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_args_keep_optional_fields() {
        let country = Country::from(CountryArgs {
            code: "DZ".to_string(),
            name: "Algeria".to_string(),
            continent_id: 1,
            optional: OptionalFieldArgs {
                wikipedia_link: Some(String::new()),
                keywords: Some("desert".to_string()),
            },
        });

        assert_eq!(country.country_id, 0);
        assert_eq!(country.wikipedia_link.as_deref(), Some(""));
        assert_eq!(country.keywords.as_deref(), Some("desert"));
    }

    #[test]
    fn test_update_args_carry_id() {
        let region = Region::from(UpdateRegionArgs {
            id: 4,
            fields: RegionArgs {
                code: "DZ-01".to_string(),
                local_code: "01".to_string(),
                name: "Adrar".to_string(),
                continent_id: 1,
                country_id: 1,
                optional: OptionalFieldArgs {
                    wikipedia_link: None,
                    keywords: None,
                },
            },
        });

        assert_eq!(region.id(), 4);
        assert_eq!(region.local_code, "01");
    }

    #[test]
    fn test_search_args_map_to_fields() {
        let params = SearchRegions::from(SearchRegionsArgs {
            code: None,
            local_code: Some("01".to_string()),
            name: None,
        });
        assert_eq!(params.local_code.as_deref(), Some("01"));
        assert_eq!(params.region_code, None);
    }
}
