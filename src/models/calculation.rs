use crate::utils::formatting::{format_money, format_pay_point};
use serde::Serialize;
use std::fmt;

/// Which minimum pay-point guarantee, if any, raised the pay point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinRule {
    None,
    /// 0.5 floor for any assignment
    Minimum,
    /// 0.7 floor when the assignment spans the whole lunch period
    ThroughLunch,
}

impl MinRule {
    /// Floor value guaranteed by this rule.
    pub fn floor(&self) -> Option<f64> {
        match self {
            MinRule::None => None,
            MinRule::Minimum => Some(0.5),
            MinRule::ThroughLunch => Some(0.7),
        }
    }

    pub fn is_applied(&self) -> bool {
        !matches!(self, MinRule::None)
    }
}

impl fmt::Display for MinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinRule::None => write!(f, "None"),
            MinRule::Minimum => write!(f, "0.5 - Minimum for any assignment"),
            MinRule::ThroughLunch => write!(f, "0.7 - Working through lunch period"),
        }
    }
}

/// Breakdown of one pay calculation. Built fresh for each request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Work start after clipping to the school day
    pub start: String,
    /// Work end after clipping to the school day
    pub end: String,
    pub total_minutes: i64,
    pub recess_minutes: i64,
    pub lunch_minutes: i64,
    pub instructional_minutes: i64,
    /// instructional / 300, before any floor
    pub raw_pay_point: f64,
    pub pay_point: f64,
    pub base_rate: f64,
    pub pay_rate: f64,
    pub min_rule_applied: MinRule,
}

impl CalculationResult {
    /// Pay rate rounded to cents.
    pub fn pay_rate_display(&self) -> String {
        format_money(self.pay_rate)
    }

    pub fn pay_point_display(&self) -> String {
        format_pay_point(self.pay_point)
    }

    /// e.g. `320 mins ÷ 300 = 1.0667`
    pub fn point_explanation(&self) -> String {
        format!(
            "{} mins ÷ 300 = {:.4}",
            self.instructional_minutes, self.raw_pay_point
        )
    }

    /// e.g. `$286.38 × 1.0667 = $305.47`
    pub fn rate_explanation(&self) -> String {
        format!(
            "${} × {} = ${}",
            format_money(self.base_rate),
            self.pay_point_display(),
            self.pay_rate_display()
        )
    }
}
