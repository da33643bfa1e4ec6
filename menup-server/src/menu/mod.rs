//! 菜单领域核心
//!
//! - [`categorizer`] - 分类分组（纯函数）
//! - [`workflow`] - 草稿/发布生命周期与可见性规则

pub mod categorizer;
pub mod workflow;

pub use categorizer::{CATEGORY_ORDER, FALLBACK_CATEGORY, MenuSection, SPECIAL_CATEGORY, categorize};
pub use workflow::{LifecyclePolicy, WorkflowViolation, is_publicly_visible, public_view};
