pub mod scenarios;

use serde::Serialize;

use crate::models::GeoPoint;
use crate::services::loop_generator::generate_loop;

pub use scenarios::default_scenarios;

/// A loop request to evaluate
#[derive(Debug, Clone, Serialize)]
pub struct EvalScenario {
    pub name: String,
    pub start: GeoPoint,
    pub distance_km: f64,
}

/// Outcome of generating one scenario's loop
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: EvalScenario,
    pub achieved_km: Option<f64>,
    pub deviation_pct: Option<f64>,
    pub within_tolerance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn evaluate_scenario(scenario: &EvalScenario, tolerance_pct: f64) -> ScenarioResult {
    match generate_loop(scenario.start, scenario.distance_km) {
        Ok(route) => ScenarioResult {
            scenario: scenario.clone(),
            achieved_km: Some(route.achieved_distance_km.as_km()),
            deviation_pct: Some(route.deviation_pct()),
            within_tolerance: route.within_tolerance(tolerance_pct),
            error: None,
        },
        Err(e) => ScenarioResult {
            scenario: scenario.clone(),
            achieved_km: None,
            deviation_pct: None,
            within_tolerance: false,
            error: Some(e.to_string()),
        },
    }
}

/// Format the full evaluation report
pub fn format_report(results: &[ScenarioResult], tolerance_pct: f64) -> String {
    let mut report = format!(
        "=== Loop Length Evaluation (tolerance ±{:.0}%) ===\n",
        tolerance_pct * 100.0
    );

    for result in results {
        let line = match (result.achieved_km, result.deviation_pct, &result.error) {
            (Some(achieved), Some(deviation), _) => format!(
                "{:<28} target {:>9.3}km  achieved {:>9.3}km  {:>+6.2}%  {}\n",
                result.scenario.name,
                result.scenario.distance_km,
                achieved,
                deviation * 100.0,
                if result.within_tolerance { "ok" } else { "OUT" },
            ),
            (_, _, Some(error)) => format!("{:<28} FAILED: {}\n", result.scenario.name, error),
            _ => format!("{:<28} (no result)\n", result.scenario.name),
        };
        report.push_str(&line);
    }

    let passed = results.iter().filter(|r| r.within_tolerance).count();
    report.push_str(&format!("\n{}/{} within tolerance\n", passed, results.len()));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DISTANCE_TOLERANCE_PCT;

    #[test]
    fn default_scenarios_are_all_valid() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 12);
        assert!(scenarios.iter().all(|s| s.distance_km > 0.0));
    }

    #[test]
    fn city_scale_scenarios_pass_default_tolerance() {
        for scenario in default_scenarios()
            .iter()
            .filter(|s| s.distance_km <= 50.0)
        {
            let result = evaluate_scenario(scenario, DEFAULT_DISTANCE_TOLERANCE_PCT);
            assert!(
                result.within_tolerance,
                "{}: deviation {:?}, error {:?}",
                scenario.name, result.deviation_pct, result.error
            );
        }
    }

    #[test]
    fn report_lists_every_scenario() {
        let results: Vec<ScenarioResult> = default_scenarios()
            .iter()
            .map(|s| evaluate_scenario(s, DEFAULT_DISTANCE_TOLERANCE_PCT))
            .collect();
        let report = format_report(&results, DEFAULT_DISTANCE_TOLERANCE_PCT);

        assert!(report.contains("tolerance ±10%"));
        for result in &results {
            assert!(report.contains(&result.scenario.name));
        }
    }

    #[test]
    fn failures_are_reported_not_hidden() {
        let pole = EvalScenario {
            name: "pole".to_string(),
            start: GeoPoint::new(90.0, 0.0).unwrap(),
            distance_km: 5.0,
        };
        let result = evaluate_scenario(&pole, DEFAULT_DISTANCE_TOLERANCE_PCT);
        assert!(!result.within_tolerance);
        assert!(result.error.is_some());
        assert!(format_report(&[result], 0.1).contains("pole"));
    }
}
