use std::fmt::Write as _;

use anyhow::{bail, Context};
use homestead_core::calculator::{
    ExpenseCategory, InvestmentResult, InvestmentScenario, ScenarioSession, ScenarioUpdate,
};
use homestead_core::chat::MessageSender;
use homestead_core::documents::Document;
use homestead_core::properties::{Property, PropertySearchFilters};
use homestead_core::users::{NewUser, UserRole};
use homestead_core::utils::DisplayFormatter;
use serde::Serialize;

use crate::cli::{Cli, Commands, DocumentCommands, PropertyCommands, RoiArgs};
use crate::AppState;

/// Executes one parsed command and returns what should be printed.
pub fn run(cli: Cli, state: &AppState) -> anyhow::Result<String> {
    let json = cli.json;
    match cli.command {
        Commands::Roi(args) => run_roi(args, state, json),
        Commands::Properties(PropertyCommands::Search {
            location,
            min_price,
            max_price,
            bedrooms,
            property_type,
        }) => {
            let filters = PropertySearchFilters {
                location,
                min_price,
                max_price,
                min_bedrooms: bedrooms,
                property_type,
            };
            let properties = state.property_service.search_properties(&filters)?;
            tracing::info!("Search matched {} listing(s)", properties.len());
            if json {
                return to_json(&properties);
            }
            Ok(render_property_list(&properties, &state.formatter))
        }
        Commands::Properties(PropertyCommands::Show { id }) => {
            let property = state.property_service.get_property(&id)?;
            let documents = state.document_service.documents_for_property(&id)?;
            if json {
                return to_json(&PropertyDetail {
                    property: &property,
                    documents: &documents,
                });
            }
            Ok(render_property_detail(&property, &documents, &state.formatter))
        }
        Commands::Documents(DocumentCommands::List {
            property,
            document_type,
        }) => {
            let documents = match property {
                Some(property_id) => state.document_service.documents_for_property(&property_id)?,
                None => state.document_service.get_documents()?,
            };
            let documents: Vec<Document> = documents
                .into_iter()
                .filter(|doc| document_type.map_or(true, |t| doc.document_type == t))
                .collect();
            if json {
                return to_json(&documents);
            }
            Ok(render_document_list(&documents))
        }
        Commands::Chat { role, message } => run_chat(role, message.join(" "), state, json),
    }
}

fn run_roi(args: RoiArgs, state: &AppState, json: bool) -> anyhow::Result<String> {
    let mut session = ScenarioSession::new(state.event_sink.clone())?;
    let updates = scenario_updates(&args);
    if !updates.is_empty() {
        session
            .apply_all(updates)
            .context("Scenario rejected; nothing was recalculated")?;
    }

    if json {
        return to_json(&RoiReport {
            scenario: session.scenario(),
            result: session.result(),
        });
    }
    Ok(render_roi(session.scenario(), session.result(), &state.formatter))
}

/// Property value goes first so a percentage down payment sees the new price.
pub(crate) fn scenario_updates(args: &RoiArgs) -> Vec<ScenarioUpdate> {
    let mut updates = Vec::new();
    if let Some(value) = args.property_value {
        updates.push(ScenarioUpdate::PropertyValue(value));
    }
    if let Some(value) = args.down_payment {
        updates.push(ScenarioUpdate::DownPayment(value));
    }
    if let Some(pct) = args.down_payment_pct {
        updates.push(ScenarioUpdate::DownPaymentPercent(pct));
    }
    if let Some(value) = args.loan_amount {
        updates.push(ScenarioUpdate::LoanAmount(Some(value)));
    }
    if let Some(value) = args.interest_rate {
        updates.push(ScenarioUpdate::InterestRate(value));
    }
    if let Some(years) = args.term_years {
        updates.push(ScenarioUpdate::LoanTermYears(years));
    }
    if let Some(value) = args.rent {
        updates.push(ScenarioUpdate::MonthlyRentalIncome(value));
    }

    let expenses = [
        (ExpenseCategory::PropertyTax, args.property_tax),
        (ExpenseCategory::Insurance, args.insurance),
        (ExpenseCategory::Maintenance, args.maintenance),
        (ExpenseCategory::Utilities, args.utilities),
        (ExpenseCategory::PropertyManagement, args.management),
        (ExpenseCategory::Other, args.other_expenses),
    ];
    for (category, amount) in expenses {
        if let Some(amount) = amount {
            updates.push(ScenarioUpdate::Expense(category, amount));
        }
    }
    updates
}

fn run_chat(
    role: Option<UserRole>,
    message: String,
    state: &AppState,
    json: bool,
) -> anyhow::Result<String> {
    if let Some(role) = role {
        state.auth_service.register(NewUser {
            name: format!("Demo {}", role.as_str()),
            email: format!("{}@homestead.local", role.as_str()),
            password: "demo".to_string(),
            role,
        })?;
    }

    if state.chat_service.send_message(&message)?.is_none() {
        bail!("Nothing to send: the message is blank");
    }
    let transcript = state.chat_service.messages()?;
    if json {
        return to_json(&transcript);
    }

    let mut out = String::new();
    for entry in transcript {
        let who = match entry.sender {
            MessageSender::User => "you",
            MessageSender::Bot => "assistant",
        };
        let _ = writeln!(out, "{:>9}: {}", who, entry.message);
    }
    Ok(out)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoiReport<'a> {
    scenario: &'a InvestmentScenario,
    result: &'a InvestmentResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertyDetail<'a> {
    property: &'a Property,
    documents: &'a [Document],
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn render_roi(
    scenario: &InvestmentScenario,
    result: &InvestmentResult,
    fmt: &DisplayFormatter,
) -> String {
    let mut out = String::new();
    let rows = [
        ("Property value", fmt.currency(scenario.property_value)),
        ("Down payment", fmt.currency(scenario.down_payment)),
        ("Loan amount", fmt.currency(result.loan_amount)),
        ("Interest rate", fmt.percent(Some(scenario.interest_rate))),
        ("Loan term", format!("{} years", scenario.loan_term_years)),
        ("Monthly rent", fmt.currency(scenario.monthly_rental_income)),
        ("Monthly expenses", fmt.currency(result.total_monthly_expenses)),
        ("Mortgage payment", fmt.currency(result.monthly_mortgage_payment)),
        ("Monthly cash flow", fmt.currency(result.monthly_cash_flow)),
        ("Annual cash flow", fmt.currency(result.annual_cash_flow)),
        ("Cash-on-cash return", fmt.percent(result.cash_on_cash_return_pct)),
        ("Cap rate", fmt.percent(result.cap_rate_pct)),
        ("Break-even", fmt.months(result.break_even_months)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<20} {}", label, value);
    }
    out
}

fn render_property_list(properties: &[Property], fmt: &DisplayFormatter) -> String {
    if properties.is_empty() {
        return "No listings match.\n".to_string();
    }
    let mut out = String::new();
    for property in properties {
        let _ = writeln!(
            out,
            "[{}] {} | {} | {} | {} bd / {} ba | {}",
            property.id,
            property.title,
            property.location,
            fmt.currency(property.price),
            property.bedrooms,
            property.bathrooms,
            property.property_type.as_str(),
        );
    }
    out
}

fn render_property_detail(
    property: &Property,
    documents: &[Document],
    fmt: &DisplayFormatter,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", property.title, property.property_type.as_str());
    let _ = writeln!(out, "{}", property.address);
    let _ = writeln!(out, "Price: {}", fmt.currency(property.price));
    let _ = writeln!(
        out,
        "{} bd / {} ba / {} sq ft",
        property.bedrooms, property.bathrooms, property.square_footage
    );
    let _ = writeln!(out, "Seller: {}", property.seller_name);
    if !property.features.is_empty() {
        let _ = writeln!(out, "Features: {}", property.features.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", property.description);
    let _ = writeln!(out);
    let _ = write!(out, "{}", render_document_list(documents));
    out
}

fn render_document_list(documents: &[Document]) -> String {
    if documents.is_empty() {
        return "No documents.\n".to_string();
    }
    let mut out = String::new();
    for doc in documents {
        let lock = if doc.is_secure { " (secure)" } else { "" };
        let _ = writeln!(
            out,
            "{} [{}]{} uploaded {}",
            doc.name,
            doc.document_type.as_str(),
            lock,
            doc.uploaded_at.format("%Y-%m-%d"),
        );
    }
    out
}
