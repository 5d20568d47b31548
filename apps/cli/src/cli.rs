use clap::{Args, Parser, Subcommand};
use homestead_core::documents::DocumentType;
use homestead_core::properties::PropertyType;
use homestead_core::users::UserRole;
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "homestead")]
#[command(about = "Real-estate marketplace toolkit: ROI calculator, listings and assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute investment returns for a rental property
    Roi(RoiArgs),

    /// Browse listings
    #[command(subcommand)]
    Properties(PropertyCommands),

    /// Browse documents attached to listings
    #[command(subcommand)]
    Documents(DocumentCommands),

    /// Ask the marketplace assistant a question
    Chat {
        /// Answer as if signed in with this role (buyer or seller)
        #[arg(long)]
        role: Option<UserRole>,

        /// Message to send
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
}

/// Scenario overrides; anything omitted keeps the calculator's seed value.
#[derive(Args, Debug, Default)]
pub struct RoiArgs {
    /// Purchase price
    #[arg(long)]
    pub property_value: Option<Decimal>,

    /// Cash put down at purchase
    #[arg(long, conflicts_with = "down_payment_pct")]
    pub down_payment: Option<Decimal>,

    /// Cash put down, as a percentage of the purchase price
    #[arg(long)]
    pub down_payment_pct: Option<Decimal>,

    /// Borrowed amount, if it does not follow from the down payment (0 for all-cash)
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub interest_rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub term_years: Option<u32>,

    /// Monthly rental income
    #[arg(long)]
    pub rent: Option<Decimal>,

    /// Monthly property tax
    #[arg(long)]
    pub property_tax: Option<Decimal>,

    /// Monthly insurance
    #[arg(long)]
    pub insurance: Option<Decimal>,

    /// Monthly maintenance
    #[arg(long)]
    pub maintenance: Option<Decimal>,

    /// Monthly utilities
    #[arg(long)]
    pub utilities: Option<Decimal>,

    /// Monthly property management fee
    #[arg(long)]
    pub management: Option<Decimal>,

    /// Any other monthly expense
    #[arg(long)]
    pub other_expenses: Option<Decimal>,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Search listings; omitted filters match everything
    Search {
        /// City, neighbourhood or state (substring match)
        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        min_price: Option<Decimal>,

        #[arg(long)]
        max_price: Option<Decimal>,

        /// Minimum number of bedrooms
        #[arg(long)]
        bedrooms: Option<u32>,

        /// house, apartment, condo, townhouse or land
        #[arg(long = "type")]
        property_type: Option<PropertyType>,
    },

    /// Show one listing with its documents
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    /// List documents, optionally for a single listing
    List {
        #[arg(long)]
        property: Option<String>,

        /// Only documents of this type
        #[arg(long = "type")]
        document_type: Option<DocumentType>,
    },
}
