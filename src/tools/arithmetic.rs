use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{Args, Block, DispatchError, Entry, FieldType, Handler, Schema};

/// `add_two_number`: pure arithmetic, no failure path.
#[derive(Clone, Default)]
pub struct AddTwoNumbers;

impl AddTwoNumbers {
    pub fn entry() -> Entry {
        Entry::tool(
            "add_two_number",
            "add two numbers",
            Schema::empty()
                .field("a", FieldType::Number, "first number")
                .field("b", FieldType::Number, "second number"),
            Arc::new(Self),
        )
    }
}

#[async_trait]
impl Handler for AddTwoNumbers {
    async fn handle(&self, args: Args<'_>) -> Result<Vec<Block>, DispatchError> {
        let a = args.number("a")?;
        let b = args.number("b")?;
        Ok(vec![Block::text(format!("Sum of two number is {}", a + b))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Payload;
    use serde_json::json;

    fn payload(v: serde_json::Value) -> Payload {
        v.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn it_formats_an_integer_sum() {
        let p = payload(json!({"a": 2, "b": 3}));
        let out = AddTwoNumbers.handle(Args::new(&p)).await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_text(), "Sum of two number is 5");
    }

    #[tokio::test]
    async fn it_formats_a_fractional_sum() {
        let p = payload(json!({"a": 2.25, "b": 3.25}));
        let out = AddTwoNumbers.handle(Args::new(&p)).await.unwrap();
        assert_eq!(out[0].as_text(), "Sum of two number is 5.5");
    }

    #[tokio::test]
    async fn it_handles_negative_operands() {
        let p = payload(json!({"a": -4, "b": 1}));
        let out = AddTwoNumbers.handle(Args::new(&p)).await.unwrap();
        assert_eq!(out[0].as_text(), "Sum of two number is -3");
    }
}
