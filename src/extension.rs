//! Host integration: installs the key color editor on new nodes.

use std::rc::Rc;

use floem::IntoView;
use log::{debug, info};

use crate::color::HexColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::host::{DomRegion, DomWidgetOptions, ExtensionRegistry, HostNode};
use crate::picker::ColorPicker;
use crate::sampler::{platform_sampler, ColorSampler};

/// The key color picker extension.
#[derive(Clone)]
pub struct KeyColorExtension {
    config: Rc<PickerConfig>,
    sampler: Rc<dyn ColorSampler>,
}

impl KeyColorExtension {
    /// Create the extension with this platform's screen sampler.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config: Rc::new(config),
            sampler: platform_sampler(),
        }
    }

    /// Replace the screen sampler.
    pub fn with_sampler(mut self, sampler: Rc<dyn ColorSampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Register with the host under the configured name and node type.
    pub fn register(self, registry: &mut dyn ExtensionRegistry) {
        let name = self.config.extension_name.clone();
        let node_type = self.config.node_type.clone();
        registry.register_extension(
            &name,
            &node_type,
            Box::new(move |node: &Rc<dyn HostNode>| {
                self.on_node_created(node);
            }),
        );
    }

    /// Install the editor on `node`.
    ///
    /// Returns `None` and leaves the node untouched when the node is of
    /// another type, lacks the key color widget, or already has the editor.
    pub fn on_node_created(&self, node: &Rc<dyn HostNode>) -> Option<ColorPicker> {
        if node.node_type() != self.config.node_type {
            return None;
        }
        let Some(widget) = node.widget(&self.config.widget_name) else {
            debug!(
                "'{}' node has no '{}' widget, skipping",
                node.node_type(),
                self.config.widget_name
            );
            return None;
        };
        if node.has_dom_widget(constants::REGION_NAME) {
            debug!("key color editor already installed, skipping");
            return None;
        }

        let current = widget.value();
        let seed = HexColor::normalize(&current)
            .unwrap_or_else(|_| self.config.default_color.clone());
        if seed.as_str() != current {
            widget.set_value(seed.as_str());
        }

        let picker = ColorPicker::new(
            seed,
            widget.clone(),
            node,
            self.sampler.clone(),
            &self.config.unsupported_message,
        );
        picker.chain_host_callback();

        let editor = picker.clone();
        node.add_dom_widget(
            constants::REGION_NAME,
            constants::REGION_KIND,
            DomRegion::new(move || crate::key_color_editor(editor).into_any()),
            DomWidgetOptions {
                serialize: false,
                hide_on_zoom: false,
            },
        );
        widget.hide_input();

        let (_, height) = node.size();
        node.set_size((self.config.node_width, height));

        info!("key color editor installed, seeded with {}", picker.value());
        Some(picker)
    }
}

impl Default for KeyColorExtension {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
