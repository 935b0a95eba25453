use super::{DEFAULT_ROOT_SELECTOR, StyleHandle, StyleSheet, Surface, ThemeChanged};
use crate::errors::SurfaceError;
use async_trait::async_trait;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// `<link>` element in the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkNode {
    pub rel: String,
    pub as_type: Option<String>,
    pub href: String,
    /// Value of the `data-theme` attribute, if tagged
    pub data_theme: Option<String>,
}

/// Node held in the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadNode {
    Style { handle: StyleHandle, sheet: StyleSheet },
    Link(LinkNode),
}

/// Headless document: one presentation root, a head, and an event bus.
///
/// Events are recorded in order and also broadcast to subscribers obtained
/// through [`DocumentSurface::subscribe`].
#[derive(Debug)]
pub struct DocumentSurface {
    root_selector: String,
    root_classes: Option<Vec<String>>,
    head: Vec<HeadNode>,
    next_handle: u64,
    events: Vec<ThemeChanged>,
    channel: broadcast::Sender<ThemeChanged>,
}

impl DocumentSurface {
    /// A document whose root is `.reveal` with no extra classes
    pub fn new() -> Self {
        Self::with_root(DEFAULT_ROOT_SELECTOR)
    }

    /// A document whose root matches `root_selector` (a class selector)
    pub fn with_root(root_selector: &str) -> Self {
        let root_class = root_selector.trim_start_matches('.').to_string();
        let (channel, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            root_selector: root_selector.to_string(),
            root_classes: Some(vec![root_class]),
            head: Vec::new(),
            next_handle: 1,
            events: Vec::new(),
            channel,
        }
    }

    /// A document in which the presentation root has not been rendered
    pub fn without_root() -> Self {
        Self {
            root_classes: None,
            ..Self::new()
        }
    }

    pub fn head(&self) -> &[HeadNode] {
        &self.head
    }

    /// Attached stylesheets in attachment order
    pub fn styles(&self) -> Vec<&StyleSheet> {
        self.head
            .iter()
            .filter_map(|node| match node {
                HeadNode::Style { sheet, .. } => Some(sheet),
                HeadNode::Link(_) => None,
            })
            .collect()
    }

    pub fn links(&self) -> Vec<&LinkNode> {
        self.head
            .iter()
            .filter_map(|node| match node {
                HeadNode::Link(link) => Some(link),
                HeadNode::Style { .. } => None,
            })
            .collect()
    }

    /// Add a theme stylesheet link managed outside the theme manager
    pub fn add_theme_link(&mut self, theme: &str, href: &str) {
        self.head.push(HeadNode::Link(LinkNode {
            rel: "stylesheet".to_string(),
            as_type: None,
            href: href.to_string(),
            data_theme: Some(theme.to_string()),
        }));
    }

    /// Events published so far, oldest first
    pub fn events(&self) -> &[ThemeChanged] {
        &self.events
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChanged> {
        self.channel.subscribe()
    }

    fn root_mut(&mut self) -> Result<&mut Vec<String>, SurfaceError> {
        let selector = self.root_selector.clone();
        self.root_classes
            .as_mut()
            .ok_or_else(|| SurfaceError::ClassList(format!("no element matches '{selector}'")))
    }
}

impl Default for DocumentSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for DocumentSurface {
    fn root_selector(&self) -> &str {
        &self.root_selector
    }

    fn has_root(&self) -> bool {
        self.root_classes.is_some()
    }

    fn root_classes(&self) -> Vec<String> {
        self.root_classes.clone().unwrap_or_default()
    }

    fn add_class(&mut self, class: &str) -> Result<(), SurfaceError> {
        let classes = self.root_mut()?;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, class: &str) -> Result<(), SurfaceError> {
        let classes = self.root_mut()?;
        classes.retain(|existing| existing != class);
        Ok(())
    }

    async fn attach_style(&mut self, sheet: StyleSheet) -> Result<StyleHandle, SurfaceError> {
        let handle = StyleHandle(self.next_handle);
        self.next_handle += 1;
        self.head.push(HeadNode::Style { handle, sheet });
        Ok(handle)
    }

    fn detach_style(&mut self, handle: StyleHandle) -> Result<(), SurfaceError> {
        let position = self
            .head
            .iter()
            .position(|node| matches!(node, HeadNode::Style { handle: h, .. } if *h == handle))
            .ok_or(SurfaceError::UnknownStyle(handle.0))?;
        self.head.remove(position);
        Ok(())
    }

    fn preload_style(&mut self, theme: &str, href: &str) -> Result<(), SurfaceError> {
        self.head.push(HeadNode::Link(LinkNode {
            rel: "preload".to_string(),
            as_type: Some("style".to_string()),
            href: href.to_string(),
            data_theme: Some(theme.to_string()),
        }));
        Ok(())
    }

    fn remove_theme_links(&mut self) -> usize {
        let before = self.head.len();
        self.head
            .retain(|node| !matches!(node, HeadNode::Link(link) if link.data_theme.is_some()));
        before - self.head.len()
    }

    fn publish(&mut self, event: ThemeChanged) {
        self.events.push(event.clone());
        // No subscribers is fine; the event is still recorded.
        let _ = self.channel.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_new_document_has_reveal_root() {
        let document = DocumentSurface::new();
        assert!(document.has_root());
        assert_eq!(document.root_classes(), vec!["reveal"]);
    }

    #[test]
    fn test_class_operations_are_idempotent() {
        let mut document = DocumentSurface::new();
        assert_ok!(document.add_class("theme-minimal"));
        assert_ok!(document.add_class("theme-minimal"));
        assert_eq!(document.root_classes(), vec!["reveal", "theme-minimal"]);

        assert_ok!(document.remove_class("theme-minimal"));
        assert_ok!(document.remove_class("theme-minimal"));
        assert_eq!(document.root_classes(), vec!["reveal"]);
    }

    #[test]
    fn test_class_operations_fail_without_root() {
        let mut document = DocumentSurface::without_root();
        assert!(!document.has_root());
        assert_err!(document.add_class("theme-minimal"));
    }

    #[tokio::test]
    async fn test_attach_and_detach_style() {
        let mut document = DocumentSurface::new();
        let sheet = StyleSheet {
            owner: "corporate".to_string(),
            css: ".reveal.theme-corporate {}".to_string(),
        };

        let handle = assert_ok!(document.attach_style(sheet).await);
        assert_eq!(document.styles().len(), 1);

        assert_ok!(document.detach_style(handle));
        assert!(document.styles().is_empty());
        assert_eq!(
            document.detach_style(handle),
            Err(SurfaceError::UnknownStyle(handle.0))
        );
    }

    #[test]
    fn test_remove_theme_links_only_removes_tagged_links() {
        let mut document = DocumentSurface::new();
        document.add_theme_link("corporate", "/themes/corporate/theme.css");
        assert_ok!(document.preload_style("minimal", "/themes/minimal/theme.css"));

        assert_eq!(document.remove_theme_links(), 2);
        assert!(document.links().is_empty());
    }

    #[tokio::test]
    async fn test_publish_reaches_subscribers() {
        let mut document = DocumentSurface::new();
        let mut receiver = document.subscribe();
        let event = ThemeChanged {
            previous_theme: "starship".to_string(),
            current_theme: "minimal".to_string(),
        };

        document.publish(event.clone());

        assert_eq!(receiver.recv().await.unwrap(), event);
        assert_eq!(document.events(), &[event]);
    }
}
