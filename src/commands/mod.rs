pub mod companies;
pub mod config;
pub mod context;
pub mod init;
pub mod render;

pub use companies::{CompanyListing, list_companies, run_companies, run_companies_impl};
pub use config::run_config;
pub use context::{CommandContext, Diagnostics, load_config, select_dataset};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{build_report, run_render, run_render_impl};
