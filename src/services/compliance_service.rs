//! Compliance Service - check and insight workflows without HTTP layer

use crate::domain::{
    ComplianceRecord, ComplianceRepository, DomainError, InsightGenerator, NewComplianceRecord,
    Supplier, SupplierRepository,
};

pub const ANALYZED_MESSAGE: &str = "Compliance data analyzed";
pub const NO_RECORDS_MESSAGE: &str = "No compliance records found for this supplier.";

/// Result of a compliance check that reached the insight service
#[derive(Debug, Clone)]
pub struct ComplianceCheckOutcome {
    pub record: ComplianceRecord,
    pub insights: String,
}

/// Insights for one supplier. `insights` is either the generated text or
/// [`NO_RECORDS_MESSAGE`].
#[derive(Debug, Clone)]
pub struct SupplierInsights {
    pub supplier: Supplier,
    pub insights: String,
}

/// Render a measurement the way the prompts show it: whole numbers keep
/// `.0`, and exponents carry a sign and at least two digits (`1e+16`, `1e-05`).
pub fn format_result(value: f64) -> String {
    let debug = format!("{:?}", value);
    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Prompt for a single fresh measurement
pub fn analysis_prompt(metric: &str, result: f64) -> String {
    let result = format_result(result);
    format!(
        r#"Analyze this supplier compliance data:
Metric: {metric}
Result: {result}

Provide insights and recommendations in the following JSON format:
{{
    "status": "analyzed",
    "risk_level": "low/medium/high",
    "insights": ["insight 1", "insight 2"],
    "recommendations": ["recommendation 1", "recommendation 2"]
}}"#
    )
}

/// One line per record, in the order given
pub fn history_summary(records: &[ComplianceRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "Metric: {}, Result: {}, Date: {}",
                r.metric,
                format_result(r.result),
                r.date_recorded
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for a supplier's whole compliance history
pub fn history_prompt(supplier: &Supplier, summary: &str) -> String {
    format!(
        r#"Analyze this supplier's compliance history and provide insights in JSON format:

Supplier: {name}
Country: {country}
Compliance History:
{summary}

Provide analysis in the following JSON format:
{{
    "overall_assessment": "brief overall assessment",
    "key_insights": ["insight 1", "insight 2"],
    "recommendations": ["recommendation 1", "recommendation 2"],
    "risk_factors": ["risk 1", "risk 2"],
    "suggested_actions": ["action 1", "action 2"]
}}"#,
        name = supplier.name,
        country = supplier.country,
    )
}

/// Record a measurement and analyze it.
///
/// The record is committed as "Pending Analysis" before the insight service is
/// called. If generation fails the row is left in that state.
pub async fn check_compliance(
    suppliers: &dyn SupplierRepository,
    records: &dyn ComplianceRepository,
    generator: &dyn InsightGenerator,
    input: NewComplianceRecord,
) -> Result<ComplianceCheckOutcome, DomainError> {
    if suppliers.find_by_id(input.supplier_id).await?.is_none() {
        return Err(DomainError::supplier_not_found());
    }

    let prompt = analysis_prompt(&input.metric, input.result);
    let pending = records.create_pending(input).await?;
    tracing::info!(
        record_id = pending.id,
        supplier_id = pending.supplier_id,
        metric = %pending.metric,
        "Compliance record stored, requesting analysis"
    );

    let insights = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                record_id = pending.id,
                provider = generator.provider_name(),
                "Analysis failed, record left pending: {}",
                e
            );
            return Err(e);
        }
    };

    let record = records.mark_analyzed(pending.id, insights.clone()).await?;

    Ok(ComplianceCheckOutcome { record, insights })
}

/// Summarize a supplier's full history through the insight service.
///
/// Suppliers without records get [`NO_RECORDS_MESSAGE`] and no downstream call.
pub async fn supplier_insights(
    suppliers: &dyn SupplierRepository,
    records: &dyn ComplianceRepository,
    generator: &dyn InsightGenerator,
    supplier_id: i32,
) -> Result<SupplierInsights, DomainError> {
    let supplier = suppliers
        .find_by_id(supplier_id)
        .await?
        .ok_or_else(DomainError::supplier_not_found)?;

    let history = records.find_by_supplier(supplier_id).await?;
    if history.is_empty() {
        return Ok(SupplierInsights {
            supplier,
            insights: NO_RECORDS_MESSAGE.to_string(),
        });
    }

    let prompt = history_prompt(&supplier, &history_summary(&history));
    tracing::debug!(supplier_id, records = history.len(), "Requesting history insights");
    let insights = generator.generate(&prompt).await?;

    Ok(SupplierInsights { supplier, insights })
}
