use lore_core::entities::LearningItem;

/// Turn a lifecycle no-op on a missing id into a command failure.
pub fn require_item(item: Option<LearningItem>, id: i64) -> anyhow::Result<LearningItem> {
    item.ok_or_else(|| anyhow::anyhow!("item {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::require_item;

    #[test]
    fn missing_item_names_the_id() {
        let err = require_item(None, 42).expect_err("should fail");
        assert_eq!(err.to_string(), "item 42 not found");
    }
}
