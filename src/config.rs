//! Extension configuration: which host node and widget to attach to, and the
//! picker's defaults.

use crate::color::HexColor;
use crate::constants;

/// Settings for [`KeyColorExtension`](crate::KeyColorExtension).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Unique name the extension registers under.
    pub extension_name: String,
    /// Type identifier of the background transparency node.
    pub node_type: String,
    /// Name of the node's string widget holding the key color.
    pub widget_name: String,
    /// Seed used when the widget holds no valid color.
    pub default_color: HexColor,
    /// Node width once the picker is installed.
    pub node_width: f64,
    /// Notice shown when screen sampling is unavailable.
    pub unsupported_message: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            extension_name: "AFOLIE.BackgroundTransparent".to_string(),
            node_type: "AFOLIE背景透明化".to_string(),
            widget_name: "透明色值".to_string(),
            default_color: HexColor::white(),
            node_width: constants::NODE_WIDTH,
            unsupported_message:
                "Screen color sampling (eyedropper) is not supported in this environment"
                    .to_string(),
        }
    }
}

impl PickerConfig {
    pub fn with_extension_name(mut self, name: impl Into<String>) -> Self {
        self.extension_name = name.into();
        self
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    pub fn with_widget_name(mut self, name: impl Into<String>) -> Self {
        self.widget_name = name.into();
        self
    }

    pub fn with_default_color(mut self, color: HexColor) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_node_width(mut self, width: f64) -> Self {
        self.node_width = width;
        self
    }

    pub fn with_unsupported_message(mut self, message: impl Into<String>) -> Self {
        self.unsupported_message = message.into();
        self
    }
}
