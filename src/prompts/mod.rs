pub mod explain_sql;
