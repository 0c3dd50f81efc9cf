//! Expand/collapse state for race photo groups and race result panels

use std::future::Future;

/// What the caller has to do after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Collapsed,
    Expanded,
    /// Expanded for the first time; fetch the content and hand it to `fill`
    ExpandedNeedsLoad,
}

/// A section that starts collapsed and loads its content at most once.
///
/// `collapsed -> expanded -> collapsed -> ...` on every toggle. The first
/// expansion of a section without content asks the caller to load it; later
/// expansions reuse whatever was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Collapsible<T> {
    expanded: bool,
    requested: bool,
    content: Option<T>,
}

impl<T> Default for Collapsible<T> {
    fn default() -> Self {
        Self {
            expanded: false,
            requested: false,
            content: None,
        }
    }
}

impl<T> Collapsible<T> {
    /// Collapsed section whose content must be loaded on first expansion
    pub fn lazy() -> Self {
        Self::default()
    }

    /// Collapsed section that already has its content
    pub fn preloaded(content: T) -> Self {
        Self {
            expanded: false,
            requested: true,
            content: Some(content),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn toggle(&mut self) -> Toggle {
        if self.expanded {
            self.expanded = false;
            return Toggle::Collapsed;
        }

        self.expanded = true;
        if self.requested {
            Toggle::Expanded
        } else {
            self.requested = true;
            Toggle::ExpandedNeedsLoad
        }
    }

    /// Stores loaded content; later calls are ignored
    pub fn fill(&mut self, content: T) {
        if self.content.is_none() {
            self.content = Some(content);
        }
    }

    /// Toggles and, when needed, awaits `load` before returning
    pub async fn toggle_with<F, Fut>(&mut self, load: F) -> Toggle
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let toggle = self.toggle();
        if toggle == Toggle::ExpandedNeedsLoad {
            let content = load().await;
            self.fill(content);
        }
        toggle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_double_toggle_returns_to_collapsed_with_single_load() {
        let loads = Cell::new(0);
        let mut section: Collapsible<Vec<String>> = Collapsible::lazy();
        let original = section.clone();

        let first = section
            .toggle_with(|| async {
                loads.set(loads.get() + 1);
                vec!["foto.jpg".to_string()]
            })
            .await;
        assert_eq!(first, Toggle::ExpandedNeedsLoad);
        assert!(section.is_expanded());

        let second = section
            .toggle_with(|| async {
                loads.set(loads.get() + 1);
                Vec::new()
            })
            .await;
        assert_eq!(second, Toggle::Collapsed);
        assert!(!section.is_expanded());
        assert_eq!(section.is_expanded(), original.is_expanded());
        assert_eq!(loads.get(), 1);

        // re-expanding reuses the loaded content
        let third = section.toggle_with(|| async { Vec::new() }).await;
        assert_eq!(third, Toggle::Expanded);
        assert_eq!(loads.get(), 1);
        assert_eq!(section.content(), Some(&vec!["foto.jpg".to_string()]));
    }

    #[test]
    fn test_preloaded_never_asks_for_load() {
        let mut section = Collapsible::preloaded(3);
        assert!(!section.is_expanded());
        assert_eq!(section.toggle(), Toggle::Expanded);
        assert_eq!(section.toggle(), Toggle::Collapsed);
        assert_eq!(section, Collapsible::preloaded(3));
    }

    #[test]
    fn test_fast_double_expand_requests_once() {
        let mut section: Collapsible<u8> = Collapsible::lazy();
        assert_eq!(section.toggle(), Toggle::ExpandedNeedsLoad);
        assert_eq!(section.toggle(), Toggle::Collapsed);
        // content still in flight
        assert_eq!(section.toggle(), Toggle::Expanded);
        section.fill(1);
        section.fill(2);
        assert_eq!(section.content(), Some(&1));
    }
}
