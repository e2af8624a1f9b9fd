//! Fixed-template tools standing in for future integrations.

pub mod company_lookup;
pub mod web_search;

pub use company_lookup::CompanyLookupTool;
pub use web_search::WebSearchTool;
