// Stack of open describe blocks

use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeEntry {
    pub name: String,
}

/// Active describe scopes, innermost last
#[derive(Debug, Clone, Default)]
pub struct HierarchyTracker {
    stack: Vec<DescribeEntry>,
}

impl HierarchyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope and return the new depth
    pub fn push(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        trace!(name = %name, depth = self.stack.len() + 1, "enter describe");
        self.stack.push(DescribeEntry { name });
        self.stack.len()
    }

    /// Close the innermost scope
    pub fn pop(&mut self) -> Option<DescribeEntry> {
        let entry = self.stack.pop();
        if entry.is_none() {
            warn!("describe:end without a matching describe:start");
        }
        entry
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
