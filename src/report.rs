use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{FinancialProfile, Improvement, ScoreBreakdown};
use crate::rating::rating;
use crate::savings::estimate_savings;
use crate::score::{area_rollup, compute_score};

pub fn build_report(
    label: Option<&str>,
    generated_on: NaiveDate,
    profile: &FinancialProfile,
    improvements: &[Improvement],
) -> String {
    let breakdown = compute_score(profile);
    let savings = estimate_savings(profile);

    let mut output = String::new();
    let label = label.unwrap_or("this profile");

    let _ = writeln!(output, "# Financial Health Report");
    let _ = writeln!(output, "Generated for {} on {}", label, generated_on);
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "**Score:** {:.0} / {:.0} ({:.1}%, {})",
        breakdown.total,
        breakdown.max,
        breakdown.percent,
        rating(breakdown.percent)
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Areas");
    let _ = writeln!(output, "| Area | Score | Max | % |");
    let _ = writeln!(output, "|------|------:|----:|--:|");
    for area in area_rollup(&breakdown) {
        let _ = writeln!(
            output,
            "| {} | {:.1} | {:.0} | {:.0} |",
            area.area, area.score, area.max, area.percent
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Parts");
    write_parts(&mut output, &breakdown);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Where To Improve");
    if improvements.is_empty() {
        let _ = writeln!(output, "Nothing to improve.");
    } else {
        for improvement in improvements {
            let _ = write!(
                output,
                "- {} ({:.1} points missing)",
                improvement.area, improvement.lost
            );
            match &improvement.tip {
                Some(tip) => {
                    let _ = writeln!(output, ": {} {} ({})", tip.icon, tip.text, tip.boost);
                }
                None => {
                    let _ = writeln!(output);
                }
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Potential Savings");
    let _ = writeln!(output, "- Short-term debt interest: {:.0} kr/year", savings.debt_interest);
    let _ = writeln!(output, "- Better mortgage rate: {:.0} kr/year", savings.mortgage_rate);
    let _ = writeln!(
        output,
        "- Missing emergency buffer: {:.0} kr/year",
        savings.buffer_opportunity
    );
    let _ = writeln!(output, "- Savings below target: {:.0} kr/year", savings.savings_gap);
    let _ = writeln!(output, "- **Total:** {:.0} kr/year", savings.total);
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "_Illustrative estimate, not financial advice. Premium could unlock about {:.0} kr/year._",
        savings.premium_upsell
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Not Scored");
    let _ = writeln!(
        output,
        "These fields are recorded but do not affect the score: {}.",
        FinancialProfile::unscored_fields().join(", ")
    );

    output
}

fn write_parts(output: &mut String, breakdown: &ScoreBreakdown) {
    for part in &breakdown.parts {
        let _ = writeln!(
            output,
            "- {} ({}): {:.1} / {:.0}",
            part.label, part.area, part.score, part.max
        );
    }
}
