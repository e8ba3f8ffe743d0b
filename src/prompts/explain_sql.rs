use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{Args, Block, DispatchError, Entry, FieldType, Handler, Schema};

/// `explain_sql`: template for a single user-role message asking a downstream
/// model to explain the given query.
#[derive(Clone, Default)]
pub struct ExplainSql;

impl ExplainSql {
    pub fn entry() -> Entry {
        Entry::prompt(
            "explain_sql",
            "explain the given sql query",
            Schema::empty().field("sql", FieldType::String, "The sql query to explain"),
            Arc::new(Self),
        )
    }
}

#[async_trait]
impl Handler for ExplainSql {
    async fn handle(&self, args: Args<'_>) -> Result<Vec<Block>, DispatchError> {
        let sql = args.str("sql")?;
        Ok(vec![Block::text(format!(
            "Give me a detailed explanation of the following SQL query in plain English:{sql} \
             Make it very detailed and specific for a beginner to understand"
        ))])
    }
}
