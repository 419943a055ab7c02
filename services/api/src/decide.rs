use crate::infra::clock_for;
use crate::routes::DecisionResponse;
use chrono::NaiveDate;
use clap::Args;
use loan_decision::config::AppConfig;
use loan_decision::decision::{Decision, DecisionEngine, DecisionRequest};
use loan_decision::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Customer personal identification code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long)]
    pub(crate) period: i32,
    /// Date ages are measured against (defaults to APP_EVALUATION_DATE, then today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let DecideArgs {
        personal_code,
        amount,
        period,
        today,
    } = args;

    let config = AppConfig::load()?;
    let clock = clock_for(today.or(config.decision.evaluation_date));
    let engine = DecisionEngine::default();

    let request = DecisionRequest {
        personal_code,
        loan_amount: amount,
        loan_period: period,
    };
    let decision = engine.decide_with_clock(&request, clock.as_ref());

    render_decision(&request, &decision);
    Ok(())
}

fn render_decision(request: &DecisionRequest, decision: &Decision) {
    println!(
        "Requested {} for {} months -> {}",
        request.loan_amount,
        request.loan_period,
        decision.summary()
    );

    match serde_json::to_string_pretty(&DecisionResponse::from(decision)) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Response payload unavailable: {err}"),
    }
}
