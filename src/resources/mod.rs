pub mod society_rules;
