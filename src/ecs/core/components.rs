use serde::{Deserialize, Serialize};

/// A stack of items as the host reports it. Compared by value; "no item" is
/// `Option::None` everywhere a slot can be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: String,
    pub count: u32,
}

impl ItemStack {
    pub fn of(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            count: 1,
        }
    }
}
