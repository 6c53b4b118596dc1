//! In-memory host: a single-window stand-in for the node editor.
//!
//! Used by the demo to mount the picker outside a real editor, and by the
//! tests to observe what the picker does to its node.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use crate::host::{
    DomRegion, DomWidgetOptions, ExtensionRegistry, HostNode, NodeCreatedHook, TextWidget,
    ValueCallback,
};

/// A string widget backed by a `RefCell`.
pub struct StandaloneWidget {
    name: String,
    value: RefCell<String>,
    callback: RefCell<Option<ValueCallback>>,
    input_hidden: Cell<bool>,
}

impl StandaloneWidget {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: RefCell::new(value.into()),
            callback: RefCell::new(None),
            input_hidden: Cell::new(false),
        }
    }

    /// Simulate an edit made by the host itself: store the value, then fire
    /// the registered callback with it.
    pub fn change(&self, value: &str) {
        self.set_value(value);
        if let Some(callback) = self.callback() {
            callback(value);
        }
    }

    pub fn input_hidden(&self) -> bool {
        self.input_hidden.get()
    }
}

impl TextWidget for StandaloneWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn callback(&self) -> Option<ValueCallback> {
        self.callback.borrow().clone()
    }

    fn set_callback(&self, callback: Option<ValueCallback>) {
        *self.callback.borrow_mut() = callback;
    }

    fn hide_input(&self) {
        self.input_hidden.set(true);
    }
}

/// A region attached to a [`StandaloneNode`].
#[derive(Debug)]
pub struct AttachedRegion {
    pub name: String,
    pub kind: String,
    pub options: DomWidgetOptions,
    region: Option<DomRegion>,
}

/// A node holding widgets, attached regions, size and a repaint counter.
pub struct StandaloneNode {
    node_type: String,
    widgets: Vec<Rc<StandaloneWidget>>,
    regions: RefCell<Vec<AttachedRegion>>,
    size: Cell<(f64, f64)>,
    redraws: Cell<usize>,
    alerts: RefCell<Vec<String>>,
}

impl StandaloneNode {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            widgets: Vec::new(),
            regions: RefCell::new(Vec::new()),
            size: Cell::new((200.0, 80.0)),
            redraws: Cell::new(0),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn with_widget(mut self, widget: Rc<StandaloneWidget>) -> Self {
        self.widgets.push(widget);
        self
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.size.set((width, height));
        self
    }

    /// Names, kinds and options of the attached regions, in order.
    pub fn regions(&self) -> Vec<(String, String, DomWidgetOptions)> {
        self.regions
            .borrow()
            .iter()
            .map(|r| (r.name.clone(), r.kind.clone(), r.options))
            .collect()
    }

    /// Take the region named `name` out for mounting. The attachment itself
    /// is kept, so `has_dom_widget` still reports it.
    pub fn take_region(&self, name: &str) -> Option<DomRegion> {
        self.regions
            .borrow_mut()
            .iter_mut()
            .find(|r| r.name == name)
            .and_then(|r| r.region.take())
    }

    /// Number of repaint requests so far.
    pub fn redraws(&self) -> usize {
        self.redraws.get()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl HostNode for StandaloneNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn widget(&self, name: &str) -> Option<Rc<dyn TextWidget>> {
        self.widgets
            .iter()
            .find(|w| w.name == name)
            .map(|w| w.clone() as Rc<dyn TextWidget>)
    }

    fn has_dom_widget(&self, name: &str) -> bool {
        self.regions.borrow().iter().any(|r| r.name == name)
    }

    fn add_dom_widget(&self, name: &str, kind: &str, region: DomRegion, options: DomWidgetOptions) {
        self.regions.borrow_mut().push(AttachedRegion {
            name: name.to_string(),
            kind: kind.to_string(),
            options,
            region: Some(region),
        });
    }

    fn size(&self) -> (f64, f64) {
        self.size.get()
    }

    fn set_size(&self, size: (f64, f64)) {
        self.size.set(size);
    }

    fn set_dirty_canvas(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

struct Registration {
    name: String,
    node_type: String,
    hook: NodeCreatedHook,
}

/// Extension registry that fires hooks when nodes are created through it.
#[derive(Default)]
pub struct StandaloneRegistry {
    registrations: Vec<Registration>,
}

impl StandaloneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the registered extensions.
    pub fn extension_names(&self) -> Vec<String> {
        self.registrations.iter().map(|r| r.name.clone()).collect()
    }

    /// Announce a new node: every hook registered for its type runs once.
    pub fn create_node(&self, node: Rc<dyn HostNode>) -> Rc<dyn HostNode> {
        for registration in self
            .registrations
            .iter()
            .filter(|r| r.node_type == node.node_type())
        {
            debug!("running '{}' for new '{}' node", registration.name, node.node_type());
            (registration.hook)(&node);
        }
        node
    }
}

impl ExtensionRegistry for StandaloneRegistry {
    fn register_extension(&mut self, name: &str, node_type: &str, on_node_created: NodeCreatedHook) {
        self.registrations.push(Registration {
            name: name.to_string(),
            node_type: node_type.to_string(),
            hook: on_node_created,
        });
    }
}
