/// Decimal precision used when displaying money and percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Months per year, used to annualise monthly figures
pub const MONTHS_PER_YEAR: u32 = 12;

/// Placeholder shown when a ratio is not applicable
pub const NOT_APPLICABLE_LABEL: &str = "N/A";

/// Id handed out by the demo sign-in flow
pub const DEMO_USER_ID: &str = "123";

/// Url stored for documents that were registered without an uploaded file
pub const PLACEHOLDER_DOCUMENT_URL: &str = "#";

/// Image used for listings created without photos
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Highest annual interest rate, in percent, the calculator accepts
pub const MAX_INTEREST_RATE_PCT: u32 = 100;
