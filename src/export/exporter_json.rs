//! JSON export of a weekly plan.

use serde::Serialize;

use crate::export::types::ExportError;
use crate::plan::generator::PlanRequest;
use crate::plan::types::Schedule;

#[derive(Serialize)]
struct PlanDocument<'a> {
    #[serde(flatten)]
    request: &'a PlanRequest,
    schedule: &'a Schedule,
    mindset_tip: &'a str,
}

/// Export a plan and its inputs as pretty-printed JSON.
pub fn export_json(
    request: &PlanRequest,
    schedule: &Schedule,
    tip: &str,
) -> Result<String, ExportError> {
    let document = PlanDocument {
        request,
        schedule,
        mindset_tip: tip,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
