//! Deploy and destroy planning (Functional Core).
//!
//! The live table is compared against [`TableConfig`]. A missing table is
//! created with its index, a table without the index gets it added, and a
//! table whose index is keyed on another attribute is refused: DynamoDB
//! cannot rekey an index in place.

use super::config::{IndexConfig, TableConfig};
use super::error::{DynamodbError, Result};

/// What DynamoDB reports about an existing table.
#[derive(Debug, Clone)]
pub struct TableState {
    /// `ACTIVE` table status.
    pub active: bool,
    pub indexes: Vec<IndexState>,
}

/// What DynamoDB reports about one secondary index.
#[derive(Debug, Clone)]
pub struct IndexState {
    pub name: String,
    /// Attribute of the `HASH` key element, when reported.
    pub partition_key: Option<String>,
    /// `ACTIVE` index status.
    pub active: bool,
}

impl TableState {
    /// The table and all of its indexes accept traffic.
    pub fn is_ready(&self) -> bool {
        self.active && self.indexes.iter().all(|index| index.active)
    }

    fn index(&self, name: &str) -> Option<&IndexState> {
        self.indexes.iter().find(|index| index.name == name)
    }
}

/// A change to apply, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    CreateTable { config: TableConfig },
    AddIndex { table_name: String, index: IndexConfig },
    DeleteTable { table_name: String },
    UpToDate { table_name: String },
    AlreadyGone { table_name: String },
}

impl Plan {
    /// Nothing would be sent to DynamoDB.
    pub fn is_noop(&self) -> bool {
        matches!(self, Plan::UpToDate { .. } | Plan::AlreadyGone { .. })
    }

    /// Confirmation prompt and its default answer.
    pub fn prompt(&self) -> (&'static str, bool) {
        match self {
            Plan::DeleteTable { .. } => (
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            ),
            _ => ("Apply these changes?", true),
        }
    }
}

/// One line of a rendered plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine {
    Add(String),
    Change(String),
    Remove(String),
    Keep(String),
    Detail(String),
}

/// Plan to bring `current` to `desired`.
pub fn deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> Result<Plan> {
    let Some(state) = current else {
        return Ok(Plan::CreateTable {
            config: desired.clone(),
        });
    };

    match state.index(&desired.index.name) {
        None => Ok(Plan::AddIndex {
            table_name: desired.table_name.clone(),
            index: desired.index.clone(),
        }),
        Some(index) if index.partition_key.as_deref() == Some(desired.index.partition_key.as_str()) => {
            Ok(Plan::UpToDate {
                table_name: desired.table_name.clone(),
            })
        }
        Some(index) => Err(DynamodbError::IndexConflict {
            index: desired.index.name.clone(),
            expected: desired.index.partition_key.clone(),
            found: index
                .partition_key
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }),
    }
}

/// Plan to delete `table_name`.
pub fn destroy_plan(current: Option<&TableState>, table_name: &str) -> Plan {
    let table_name = table_name.to_string();
    match current {
        Some(_) => Plan::DeleteTable { table_name },
        None => Plan::AlreadyGone { table_name },
    }
}

/// Render a plan for display.
pub fn describe(plan: &Plan) -> Vec<PlanLine> {
    match plan {
        Plan::CreateTable { config } => vec![
            PlanLine::Add(format!("Create table: {}", config.table_name)),
            PlanLine::Detail(format!(
                "Keys: {} (S) / {} (S), PAY_PER_REQUEST",
                config.partition_key, config.sort_key
            )),
            PlanLine::Add(index_line(&config.index)),
        ],
        Plan::AddIndex { table_name, index } => vec![
            PlanLine::Change(format!("Update table: {}", table_name)),
            PlanLine::Add(index_line(index)),
        ],
        Plan::DeleteTable { table_name } => vec![PlanLine::Remove(format!(
            "Delete table: {} (ALL DATA WILL BE LOST)",
            table_name
        ))],
        Plan::UpToDate { table_name } => {
            vec![PlanLine::Keep(format!("Table '{}' is up to date", table_name))]
        }
        Plan::AlreadyGone { table_name } => {
            vec![PlanLine::Keep(format!("Table '{}' does not exist", table_name))]
        }
    }
}

fn index_line(index: &IndexConfig) -> String {
    format!(
        "Index: {} on {} (S), projection ALL",
        index.name, index.partition_key
    )
}
