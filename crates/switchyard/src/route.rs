// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchyard route` and `switchyard demo` command implementations.

use std::fmt::Write as _;
use std::process::ExitCode;

use serde::Serialize;
use switchyard_config::SwitchyardConfig;
use switchyard_core::{DecisionLevel, SwitchyardError};
use switchyard_router::{ModelRouter, RouteOutcome, RoutingStats};

/// Prompts routed by `switchyard demo`, from trivial to expert.
pub const DEMO_PROMPTS: &[&str] = &[
    "What is the capital of France?",
    "Write a Python function to implement quicksort algorithm with detailed comments",
    "Write a short story about a robot learning to feel emotions",
    "Analyze the time complexity of this algorithm and suggest optimizations: [complex algorithm code]",
    "Translate this technical document from English to Spanish: [long technical text]",
];

const PROMPT_PREVIEW_CHARS: usize = 100;

/// One routed prompt in a report.
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RouteOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Structured output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub routes: Vec<RouteEntry>,
    pub stats: RoutingStats,
}

impl RouteReport {
    fn failures(&self) -> usize {
        self.routes.iter().filter(|r| r.error.is_some()).count()
    }
}

/// Route every prompt through `router`. A failed prompt does not stop the
/// others.
pub fn route_all<S: AsRef<str>>(router: &ModelRouter, prompts: &[S]) -> RouteReport {
    let routes = prompts
        .iter()
        .map(|prompt| {
            let prompt = prompt.as_ref();
            match router.route(prompt) {
                Ok(outcome) => RouteEntry {
                    prompt: prompt.to_string(),
                    outcome: Some(outcome),
                    error: None,
                },
                Err(e) => RouteEntry {
                    prompt: prompt.to_string(),
                    outcome: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();
    RouteReport {
        routes,
        stats: router.get_routing_stats(),
    }
}

/// Run the `switchyard route` command.
pub fn run_route(
    config: &SwitchyardConfig,
    prompts: &[String],
    json: bool,
    use_color: bool,
) -> Result<ExitCode, SwitchyardError> {
    let router = ModelRouter::new(config)?;
    let report = route_all(&router, prompts);
    print_report(&report, json, use_color)
}

/// Run the `switchyard demo` command.
pub fn run_demo(
    config: &SwitchyardConfig,
    json: bool,
    use_color: bool,
) -> Result<ExitCode, SwitchyardError> {
    let router = ModelRouter::new(config)?;
    let report = route_all(&router, DEMO_PROMPTS);
    print_report(&report, json, use_color)
}

fn print_report(
    report: &RouteReport,
    json: bool,
    use_color: bool,
) -> Result<ExitCode, SwitchyardError> {
    if json {
        let out = serde_json::to_string_pretty(report)
            .map_err(|e| SwitchyardError::Internal(format!("failed to serialize report: {e}")))?;
        println!("{out}");
    } else {
        print!("{}", render_report(report, use_color));
    }

    Ok(if report.failures() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Human-readable report: one block per prompt, then the statistics.
pub fn render_report(report: &RouteReport, use_color: bool) -> String {
    let mut out = String::new();
    for entry in &report.routes {
        out.push('\n');
        let _ = writeln!(out, "  Prompt:   {}", preview(&entry.prompt));
        match (&entry.outcome, &entry.error) {
            (Some(outcome), _) => render_outcome(&mut out, outcome, use_color),
            (None, Some(error)) => {
                if use_color {
                    use colored::Colorize;
                    let _ = writeln!(out, "  {}    {}", "Error:".red().bold(), error.red());
                } else {
                    let _ = writeln!(out, "  Error:    {error}");
                }
            }
            (None, None) => {}
        }
    }
    out.push('\n');
    out.push_str(&render_stats(&report.stats));
    out
}

fn render_outcome(out: &mut String, outcome: &RouteOutcome, use_color: bool) {
    let model = format!(
        "{} ({}, {})",
        outcome.selected_model,
        outcome.model.name(),
        outcome.model.model_id()
    );
    let level = outcome.routing_decision.to_string();

    if use_color {
        use colored::Colorize;
        let level = match outcome.routing_decision {
            DecisionLevel::Low => level.green(),
            DecisionLevel::Medium => level.yellow(),
            DecisionLevel::High => level.red(),
        };
        let _ = writeln!(out, "  Model:    {}", model.green().bold());
        let _ = writeln!(out, "  Level:    {level}");
    } else {
        let _ = writeln!(out, "  Model:    {model}");
        let _ = writeln!(out, "  Level:    {level}");
    }

    let requirements = &outcome.requirements;
    let capabilities = requirements
        .capabilities()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  Needs:    {capabilities}");
    let _ = writeln!(
        out,
        "            complexity {}, ~{} tokens, priority {}",
        requirements.complexity(),
        requirements.estimated_tokens(),
        requirements.priority()
    );
    let _ = writeln!(out, "  Reason:   {}", outcome.reason);
}

/// Routing statistics block.
pub fn render_stats(stats: &RoutingStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  routing stats");
    let _ = writeln!(out, "  {}", "-".repeat(35));
    let _ = writeln!(out, "    Total routes:  {}", stats.total_routes);
    let _ = writeln!(out, "    By level:      {}", counts(&stats.decision_distribution));
    let _ = writeln!(out, "    By model:      {}", counts(&stats.model_usage));
    let _ = writeln!(out, "    Mean tokens:   {:.1}", stats.mean_estimated_tokens);
    out
}

fn counts<K: std::fmt::Display>(map: &std::collections::BTreeMap<K, usize>) -> String {
    if map.is_empty() {
        return "-".to_string();
    }
    map.iter()
        .map(|(k, n)| format!("{k} {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The first 100 characters of `prompt`, with `...` when cut.
fn preview(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(PROMPT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use switchyard_core::Priority;
    use switchyard_test_utils::fixtures::{empty_router, fast_and_expert_router};

    use super::*;

    #[test]
    fn report_keeps_going_after_a_failure() {
        let router = fast_and_expert_router(Priority::Cost);
        let report = route_all(&router, &["", "Write a function to reverse a string"]);
        assert_eq!(report.routes.len(), 2);
        assert!(report.routes[0].error.is_some());
        assert_eq!(
            report.routes[1].outcome.as_ref().unwrap().selected_model,
            "fast"
        );
        assert_eq!(report.stats.total_routes, 1);
        assert_eq!(report.failures(), 1);
    }

    #[test]
    fn plain_rendering_lists_model_level_and_reason() {
        let router = fast_and_expert_router(Priority::Cost);
        let report = route_all(&router, &["Write a function to reverse a string"]);
        let text = render_report(&report, false);
        assert!(text.contains("  Model:    fast (Fast, fast-1)"));
        assert!(text.contains("  Level:    low"));
        assert!(text.contains("  Needs:    code_generation"));
        assert!(text.contains("ranked by cost per token"));
        assert!(text.contains("    Total routes:  1"));
        assert!(text.contains("    By model:      fast 1"));
    }

    #[test]
    fn failures_render_as_errors() {
        let report = route_all(&empty_router(), &["Tell me a story"]);
        let text = render_report(&report, false);
        assert!(text.contains("  Error:    no eligible model"));
        assert!(text.contains("    By level:      -"));
    }

    #[test]
    fn json_report_omits_empty_fields() {
        let router = fast_and_expert_router(Priority::Cost);
        let report = route_all(&router, &["Tell me a joke", "   "]);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["routes"][0].get("error").is_none());
        assert_eq!(json["routes"][0]["outcome"]["routing_decision"], "low");
        assert!(json["routes"][1].get("outcome").is_none());
        assert_eq!(json["stats"]["total_routes"], 1);
    }

    #[test]
    fn long_prompts_are_previewed() {
        let long = "x".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PROMPT_PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn demo_routes_every_sample_with_defaults() {
        let router = ModelRouter::new(&SwitchyardConfig::default()).unwrap();
        let report = route_all(&router, DEMO_PROMPTS);
        assert_eq!(report.failures(), 0);
        assert_eq!(report.stats.total_routes, DEMO_PROMPTS.len());
    }
}
