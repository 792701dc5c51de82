//! Built-in improvement tips, fifteen per area.

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use crate::models::{Area, TipSuggestion};

/// A single suggestion with a rough, hand-written indication of the gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub text: &'static str,
    pub boost: &'static str,
}

#[derive(Debug)]
pub struct TipGroup {
    pub area: Area,
    pub icon: &'static str,
    pub title: &'static str,
    pub tips: &'static [Tip],
}

const fn tip(text: &'static str, boost: &'static str) -> Tip {
    Tip { text, boost }
}

static CATALOG: [TipGroup; 5] = [
    TipGroup {
        area: Area::IncomeJob,
        icon: "💼",
        title: "Income & job",
        tips: &[
            tip("Ask for a salary review backed by market data for your role.", "+10-30 points"),
            tip(
                "Go through your fixed costs line by line and cancel what you no longer use.",
                "+15-40 points",
            ),
            tip(
                "Renegotiate your phone, internet and electricity contracts once a year.",
                "+5-15 points",
            ),
            tip("Move to a cheaper insurance provider with the same coverage.", "+5-15 points"),
            tip(
                "Check that your tax card matches your actual income and deductions.",
                "+5-10 points",
            ),
            tip(
                "Look into a permanent position if you are on a fixed-term contract.",
                "+10-15 points",
            ),
            tip("Build a side income that does not depend on your main employer.", "+10-25 points"),
            tip(
                "Take a course or certification that strengthens your position at work.",
                "+5-15 points",
            ),
            tip(
                "Set up automatic transfers so fixed costs leave right after payday.",
                "+5-10 points",
            ),
            tip(
                "Compare your rent or housing costs with similar homes in your area.",
                "+10-30 points",
            ),
            tip(
                "Cut transport costs by commuting by bike or public transport part of the week.",
                "+5-15 points",
            ),
            tip("Join an unemployment insurance fund if you have not already.", "+5-10 points"),
            tip(
                "Sell items you no longer use and put the money towards fixed costs.",
                "+5-10 points",
            ),
            tip("Share subscriptions such as streaming within the household.", "+2-5 points"),
            tip("Keep a monthly budget review in the calendar and stick to it.", "+5-15 points"),
        ],
    },
    TipGroup {
        area: Area::Debt,
        icon: "💳",
        title: "Debt",
        tips: &[
            tip("Pay off the loan with the highest interest rate first.", "+20-50 points"),
            tip("Consolidate expensive consumer loans into one cheaper loan.", "+15-40 points"),
            tip("Close credit cards you do not use.", "+5-15 points"),
            tip("Avoid buy-now-pay-later for everyday purchases.", "+5-20 points"),
            tip("Set up a fixed extra monthly payment on your short-term debt.", "+15-35 points"),
            tip(
                "Ask your bank whether they can lower the interest on your overdraft.",
                "+5-15 points",
            ),
            tip("Use windfalls such as tax refunds to pay down debt.", "+10-30 points"),
            tip(
                "Stop using the overdraft as a buffer and build a real buffer instead.",
                "+10-25 points",
            ),
            tip("List all debts with balance, rate and payment in one overview.", "+5-10 points"),
            tip("Negotiate a repayment plan if you are behind on any payment.", "+10-30 points"),
            tip("Refinance car financing if rates have dropped since you signed.", "+5-20 points"),
            tip(
                "Avoid taking on new consumer loans until existing ones are paid off.",
                "+10-25 points",
            ),
            tip("Move small debts to zero by paying them off one at a time.", "+5-20 points"),
            tip("Automate debt payments so they are never late.", "+5-10 points"),
            tip("Check your credit record for errors once a year.", "+2-5 points"),
        ],
    },
    TipGroup {
        area: Area::Savings,
        icon: "🐷",
        title: "Savings",
        tips: &[
            tip("Build an emergency buffer covering three months of fixed costs.", "+20-50 points"),
            tip("Set up an automatic transfer to savings on payday.", "+15-30 points"),
            tip("Raise your savings rate by one percentage point every quarter.", "+10-25 points"),
            tip("Keep the buffer in a separate account you do not see every day.", "+5-15 points"),
            tip("Put half of every pay rise straight into savings.", "+10-20 points"),
            tip("Round up card purchases and move the difference to savings.", "+5-10 points"),
            tip("Choose a savings account with a competitive interest rate.", "+2-5 points"),
            tip("Aim for a savings rate of at least 10 percent of net income.", "+15-40 points"),
            tip("Set a concrete savings goal with an amount and a date.", "+5-15 points"),
            tip(
                "Try a month with no non-essential spending and save the difference.",
                "+5-20 points",
            ),
            tip("Refill the buffer before anything else after using it.", "+10-20 points"),
            tip("Review your pension contributions alongside your savings.", "+5-10 points"),
            tip("Save bonuses and holiday pay instead of spending them.", "+10-25 points"),
            tip("Keep one account for bills and another for spending money.", "+5-10 points"),
            tip("Track your net worth every six months.", "+2-5 points"),
        ],
    },
    TipGroup {
        area: Area::Housing,
        icon: "🏠",
        title: "Housing",
        tips: &[
            tip(
                "Make extra repayments to bring your loan-to-value below 70 percent.",
                "+10-30 points",
            ),
            tip("Get your home valued again if prices in your area have risen.", "+5-20 points"),
            tip("Compare your mortgage rate with offers from other banks.", "+5-15 points"),
            tip(
                "Consider a loan with repayments instead of an interest-only loan.",
                "+10-25 points",
            ),
            tip("Pay off expensive bank loans on the home before mortgage debt.", "+10-20 points"),
            tip("Keep up maintenance so the home holds its value.", "+5-10 points"),
            tip("Check whether a remortgage would lower your total cost.", "+5-15 points"),
            tip("Energy-proof your home to lower running costs.", "+5-10 points"),
            tip("Avoid borrowing against home equity for consumption.", "+10-20 points"),
            tip(
                "Put part of your savings towards the mortgage once your buffer is full.",
                "+5-20 points",
            ),
            tip("Review your property tax assessment for mistakes.", "+2-5 points"),
            tip("Plan larger renovations with savings rather than new loans.", "+5-15 points"),
            tip("Lock a fixed rate if you cannot absorb higher payments.", "+5-10 points"),
            tip("Shorten the remaining term when your budget allows it.", "+5-15 points"),
            tip("Talk to your bank about the loan before rates change.", "+2-5 points"),
        ],
    },
    TipGroup {
        area: Area::Insurance,
        icon: "🛡️",
        title: "Insurance",
        tips: &[
            tip("Take out home contents insurance if you do not have it.", "+33 points"),
            tip("Add accident insurance that covers leisure time.", "+33 points"),
            tip("Check whether your life insurance covers your family's needs.", "+33 points"),
            tip(
                "Look up which insurance comes with your job or union membership.",
                "+10-33 points",
            ),
            tip("Review the sum insured on your contents policy every year.", "+5-10 points"),
            tip("Gather all policies with one provider for a discount.", "+5-10 points"),
            tip("Raise the deductible on policies you rarely claim on.", "+2-5 points"),
            tip(
                "Make sure beneficiaries on life and pension policies are current.",
                "+5-10 points",
            ),
            tip("Drop overlapping policies such as double travel cover.", "+2-5 points"),
            tip("Consider critical illness cover if you have dependants.", "+5-10 points"),
            tip("Look into income protection if you are the main earner.", "+5-10 points"),
            tip("Check the accident policy covers the sports you actually do.", "+5-10 points"),
            tip("Ask for a full insurance review once a year.", "+5-15 points"),
            tip("Document valuables with photos and receipts.", "+2-5 points"),
            tip("Adjust life insurance cover when your mortgage changes.", "+5-10 points"),
        ],
    },
];

pub fn catalog() -> &'static [TipGroup] {
    &CATALOG
}

pub fn group(area: Area) -> &'static TipGroup {
    &CATALOG[usize::from(area.id() - 1)]
}

/// Picks one tip for the area with the given id (1-5).
pub fn pick_tip(area_id: u8) -> Option<TipSuggestion> {
    pick_tip_with(area_id, &mut rand::thread_rng())
}

pub fn pick_tip_with(area_id: u8, rng: &mut dyn RngCore) -> Option<TipSuggestion> {
    let Some(area) = Area::from_id(area_id) else {
        debug!(area_id, "no tips for unknown area");
        return None;
    };

    let group = group(area);
    let tip = group.tips.choose(rng)?;
    Some(TipSuggestion {
        area,
        icon: group.icon,
        title: group.title,
        text: tip.text,
        boost: tip.boost,
    })
}
