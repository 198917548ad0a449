//! `spreadcal_cli` v1:
//! `spreadsheet-calendar` command-line front end.
//!
//! - `cli`      : clap argument model
//! - `config`   : locale defaulting and request resolution
//! - `listing`  : country/region listings
//! - `pipeline` : build, classify and export
pub mod cli;
pub mod config;
pub mod listing;
pub mod pipeline;

pub use cli::Cli;
pub use config::{EnumCliAction, SpecResolveContext, resolve_action, resolve_request};
pub use pipeline::{build_sheets, run_request};

use spreadcal_core::Result;

/// Execute one invocation; returns the lines to print on stdout.
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let ctx = SpecResolveContext::from_env();
    match resolve_action(cli, &ctx)? {
        EnumCliAction::ListCountries => Ok(listing::list_country_lines()),
        EnumCliAction::ListRegions(country) => Ok(listing::list_region_lines(country)),
        EnumCliAction::Generate(request) => {
            run_request(&request)?;
            Ok(vec![])
        }
    }
}
