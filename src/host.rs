//! Traits for the node editor that hosts the picker.
//!
//! The editor owns nodes, their value widgets, canvas invalidation and the
//! mounting of extra visual regions. The picker only talks to it through the
//! traits below; [`crate::standalone`] provides an in-memory implementation.

use std::rc::Rc;

use floem::AnyView;

/// Change callback registered on a host widget.
pub type ValueCallback = Rc<dyn Fn(&str)>;

/// Hook fired by the host once per created node of a registered type.
pub type NodeCreatedHook = Box<dyn Fn(&Rc<dyn HostNode>)>;

/// A string-valued widget owned by a host node.
pub trait TextWidget {
    /// Stable name the widget is looked up by.
    fn name(&self) -> &str;

    fn value(&self) -> String;

    /// Overwrite the value. Does not fire the callback.
    fn set_value(&self, value: &str);

    fn callback(&self) -> Option<ValueCallback>;

    fn set_callback(&self, callback: Option<ValueCallback>);

    /// Hide the widget's default text input. The value slot stays attached.
    fn hide_input(&self);
}

/// How the host treats an attached region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomWidgetOptions {
    /// Whether the region contributes a value when the node is serialized.
    pub serialize: bool,
    /// Whether the region disappears when the canvas is zoomed out.
    pub hide_on_zoom: bool,
}

/// A visual region handed to the host; the view is built when mounted.
pub struct DomRegion {
    build: Box<dyn FnOnce() -> AnyView>,
}

impl DomRegion {
    pub fn new(build: impl FnOnce() -> AnyView + 'static) -> Self {
        Self {
            build: Box::new(build),
        }
    }

    /// Build the Floem view for mounting.
    pub fn into_view(self) -> AnyView {
        (self.build)()
    }
}

impl std::fmt::Debug for DomRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomRegion").finish_non_exhaustive()
    }
}

/// A node instance in the host editor.
pub trait HostNode {
    /// Type identifier the node was created from.
    fn node_type(&self) -> &str;

    /// Find a value-bearing widget by name.
    fn widget(&self, name: &str) -> Option<Rc<dyn TextWidget>>;

    fn has_dom_widget(&self, name: &str) -> bool;

    fn add_dom_widget(&self, name: &str, kind: &str, region: DomRegion, options: DomWidgetOptions);

    /// Current (width, height).
    fn size(&self) -> (f64, f64);

    fn set_size(&self, size: (f64, f64));

    /// Ask the host to repaint the node.
    fn set_dirty_canvas(&self);

    /// Show a blocking notice to the user.
    fn alert(&self, message: &str);
}

/// Where extensions announce themselves to the host.
pub trait ExtensionRegistry {
    /// Register `on_node_created` under `name`, fired for every new node
    /// whose type is `node_type`.
    fn register_extension(&mut self, name: &str, node_type: &str, on_node_created: NodeCreatedHook);
}
