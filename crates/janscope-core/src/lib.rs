pub mod app_config;
pub mod comparison;
pub mod config;
pub mod format;
pub mod marketplace;
pub mod products;
pub mod session;

pub use app_config::{AppConfig, Environment};
pub use comparison::{
    assemble_row, assemble_rows, compose_listing, resolve_display_name, ComparisonRow,
    ListingDisplay, MarketplaceSlot, OutboundLink, Thumbnail, NO_IMAGE, NO_PRODUCT_NAME,
    THUMBNAIL_SIZE_PX,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_amount, format_price_range, PriceRangeDisplay, NO_DATA};
pub use marketplace::{Marketplace, MarketplaceProfile, NumberLocale};
pub use products::{PerMarketplace, PriceInfo, ProductRecord};
pub use session::{CompletionOutcome, ProductSearch, SearchSession, SearchTicket};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
