//! Draft/Publish Workflow
//!
//! 菜单条目的生命周期：`Draft → Published`，外加独立的
//! `Available / Hidden` 开关。规则：
//!
//! - 新条目总是草稿；批量发布把一家餐厅的所有草稿一次性翻转。
//! - 公共可见性：`is_published && is_available`。
//! - 删除/切换的许可由 [`LifecyclePolicy`] 决定（仓库历史上对已发布条目
//!   能否删除存在分歧，这里收敛为显式可配置策略）。

use thiserror::Error;

use crate::db::models::MenuItem;

/// A lifecycle operation the policy refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowViolation {
    #[error("published items cannot be deleted")]
    DeletePublished,

    #[error("availability cannot be toggled on draft items")]
    ToggleDraft,
}

/// Which lifecycle operations are permitted in which publish state.
///
/// The default encodes the documented policy: delete only while unpublished;
/// availability may be toggled in either state (a pre-publish toggle has no
/// public effect until the next publish).
#[derive(Debug, Clone, Copy)]
pub struct LifecyclePolicy {
    pub allow_delete_published: bool,
    pub allow_draft_availability_toggle: bool,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            allow_delete_published: false,
            allow_draft_availability_toggle: true,
        }
    }
}

impl LifecyclePolicy {
    /// May `item` be deleted under this policy?
    pub fn check_delete(&self, item: &MenuItem) -> Result<(), WorkflowViolation> {
        if item.is_published && !self.allow_delete_published {
            return Err(WorkflowViolation::DeletePublished);
        }
        Ok(())
    }

    /// May `item`'s availability be toggled under this policy?
    pub fn check_toggle(&self, item: &MenuItem) -> Result<(), WorkflowViolation> {
        if !item.is_published && !self.allow_draft_availability_toggle {
            return Err(WorkflowViolation::ToggleDraft);
        }
        Ok(())
    }
}

/// An item appears on the public menu iff it is published AND available.
pub fn is_publicly_visible(item: &MenuItem) -> bool {
    item.is_published && item.is_available
}

/// Filter a restaurant's items down to the publicly visible ones,
/// preserving order.
pub fn public_view(items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.into_iter().filter(is_publicly_visible).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use surrealdb::RecordId;

    fn item(published: bool, available: bool) -> MenuItem {
        let mut item = MenuItem::new(
            RecordId::from_table_key("restaurant", "r1"),
            "Tea".to_string(),
            Decimal::new(300, 2),
            0,
        );
        item.is_published = published;
        item.is_available = available;
        item
    }

    #[test]
    fn test_visibility_requires_both_flags() {
        assert!(is_publicly_visible(&item(true, true)));
        assert!(!is_publicly_visible(&item(true, false)));
        assert!(!is_publicly_visible(&item(false, true)));
        assert!(!is_publicly_visible(&item(false, false)));
    }

    #[test]
    fn test_public_view_filters_hidden_and_drafts() {
        let visible = public_view(vec![
            item(true, true),
            item(true, false),
            item(false, true),
        ]);
        assert_eq!(visible.len(), 1);
        assert!(visible[0].is_published && visible[0].is_available);
    }

    #[test]
    fn test_default_policy_rejects_deleting_published() {
        let policy = LifecyclePolicy::default();
        assert_eq!(
            policy.check_delete(&item(true, true)),
            Err(WorkflowViolation::DeletePublished)
        );
        assert_eq!(policy.check_delete(&item(false, true)), Ok(()));
    }

    #[test]
    fn test_default_policy_allows_draft_toggle() {
        let policy = LifecyclePolicy::default();
        assert_eq!(policy.check_toggle(&item(false, true)), Ok(()));
        assert_eq!(policy.check_toggle(&item(true, true)), Ok(()));
    }

    #[test]
    fn test_strict_policy_rejects_draft_toggle() {
        let policy = LifecyclePolicy {
            allow_draft_availability_toggle: false,
            ..Default::default()
        };
        assert_eq!(
            policy.check_toggle(&item(false, true)),
            Err(WorkflowViolation::ToggleDraft)
        );
    }
}
