//! Views over a flattened fact list: grouping by reporting context,
//! classification into financial statements, text search and column sorting.

use crate::fact::Fact;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::str::{Chars, FromStr};

/// Facts sharing a reporting context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextGroup {
    /// Context reference shared by every fact in the group
    pub context_ref: String,

    /// Facts in document order
    pub facts: Vec<Fact>,
}

/// Groups facts by context reference.
///
/// Groups appear in order of first appearance of their context; facts keep
/// document order within a group. Facts with no context form a group keyed
/// by the empty string.
pub fn group_by_context(facts: &[Fact]) -> Vec<ContextGroup> {
    let mut groups: Vec<ContextGroup> = Vec::new();
    for fact in facts {
        match groups
            .iter_mut()
            .find(|g| g.context_ref == fact.context_ref)
        {
            Some(group) => group.facts.push(fact.clone()),
            None => groups.push(ContextGroup {
                context_ref: fact.context_ref.clone(),
                facts: vec![fact.clone()],
            }),
        }
    }
    groups
}

/// Financial statement a concept is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatementCategory {
    /// Balance sheet
    BalanceSheet,

    /// Income statement
    IncomeStatement,

    /// Cash flow statement
    CashFlow,
}

impl StatementCategory {
    /// Returns all statement categories.
    pub const fn all() -> [Self; 3] {
        [Self::BalanceSheet, Self::IncomeStatement, Self::CashFlow]
    }

    /// Keywords whose presence in a concept tag marks it as belonging here.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::BalanceSheet => &["Assets", "Liabilities", "Equity", "Inventory", "Receivables"],
            Self::IncomeStatement => &["Revenue", "Expenses", "Income", "Profit", "Loss"],
            Self::CashFlow => &["CashFlow", "Operating", "Investing", "Financing"],
        }
    }

    /// Returns true if the concept contains one of this category's keywords.
    ///
    /// Matching is case-sensitive, and a concept may fall into several
    /// categories ("ProfitLoss" is income, "LiabilitiesAndStockholdersEquity"
    /// is balance sheet).
    pub fn matches(&self, concept: &str) -> bool {
        self.keywords().iter().any(|k| concept.contains(k))
    }

    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            Self::CashFlow => "Cash Flow",
        }
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "balancesheet" => Ok(Self::BalanceSheet),
            "incomestatement" => Ok(Self::IncomeStatement),
            "cashflow" => Ok(Self::CashFlow),
            _ => Err(format!(
                "unknown statement category: {s} (expected one of: {})",
                Self::all().map(|c| c.name()).join(", ")
            )),
        }
    }
}

/// Keeps only facts of the given category, dropping groups left empty.
pub fn filter_by_category(groups: &[ContextGroup], category: StatementCategory) -> Vec<ContextGroup> {
    groups
        .iter()
        .filter_map(|group| {
            let facts: Vec<Fact> = group
                .facts
                .iter()
                .filter(|f| category.matches(&f.concept))
                .cloned()
                .collect();
            (!facts.is_empty()).then(|| ContextGroup {
                context_ref: group.context_ref.clone(),
                facts,
            })
        })
        .collect()
}

/// Case-insensitive search over concept, value, unit and decimals.
pub fn search<'a>(facts: &'a [Fact], term: &str) -> Vec<&'a Fact> {
    let term = term.to_lowercase();
    facts
        .iter()
        .filter(|f| {
            [&f.concept, &f.value_text, &f.unit_ref, &f.decimals]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// Displayed fact column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactColumn {
    /// Concept tag
    Concept,

    /// Raw value text
    Value,

    /// Unit reference
    Unit,

    /// Decimals attribute
    Decimals,
}

impl FactColumn {
    /// Returns the column's text for a fact.
    pub fn text<'a>(&self, fact: &'a Fact) -> &'a str {
        match self {
            Self::Concept => &fact.concept,
            Self::Value => &fact.value_text,
            Self::Unit => &fact.unit_ref,
            Self::Decimals => &fact.decimals,
        }
    }

    /// Lowercase column name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Concept => "concept",
            Self::Value => "value",
            Self::Unit => "unit",
            Self::Decimals => "decimals",
        }
    }
}

impl fmt::Display for FactColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concept" => Ok(Self::Concept),
            "value" => Ok(Self::Value),
            "unit" => Ok(Self::Unit),
            "decimals" => Ok(Self::Decimals),
            _ => Err(format!("unknown fact column: {s}")),
        }
    }
}

/// Sorts facts by one column, keeping document order between equal cells.
///
/// Cells compare with [`natural_cmp`], so "9" sorts before "10" and case is
/// ignored.
pub fn sort_facts(facts: &mut [Fact], column: FactColumn) {
    facts.sort_by(|a, b| natural_cmp(column.text(a), column.text(b)));
}

/// Case-insensitive ordering that compares runs of ASCII digits by value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = cmp_digits(&digit_run(&mut a), &digit_run(&mut b));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                a.next();
                b.next();
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn digit_run(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
