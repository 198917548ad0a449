//! Built-in country tables.

mod au;
mod ca;
mod de;
mod fr;
mod gb;
mod ie;
mod nz;
mod us;

use crate::spec::SpecCountry;

/// Supported countries, sorted by code.
pub(crate) static COUNTRIES: &[SpecCountry] = &[
    au::AUSTRALIA,
    ca::CANADA,
    de::GERMANY,
    fr::FRANCE,
    gb::UNITED_KINGDOM,
    ie::IRELAND,
    nz::NEW_ZEALAND,
    us::UNITED_STATES,
];
