//! Sizing, color, and naming constants for the key color picker.

use floem::peniko::Color;

/// Name of the region attached to the node.
pub const REGION_NAME: &str = "color_picker_widget";

/// Kind tag passed along with the region.
pub const REGION_KIND: &str = "color_picker";

/// Node width after installation
pub const NODE_WIDTH: f64 = 280.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker row
pub const PADDING: f32 = 5.0;

/// Height shared by the hex field and the buttons
pub const CONTROL_HEIGHT: f32 = 28.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 80.0;

/// Swatch button width
pub const SWATCH_WIDTH: f32 = 36.0;

/// Eyedropper and copy button width
pub const BUTTON_WIDTH: f32 = 32.0;

/// Preview square side
pub const PREVIEW_SIZE: f32 = 20.0;

/// Saturation/brightness area height
pub const AREA_HEIGHT: f32 = 96.0;

/// Cursor circle radius on the saturation/brightness area
pub const CURSOR_RADIUS: f64 = 6.0;

/// Hue slider height
pub const SLIDER_HEIGHT: f32 = 14.0;

/// Hue slider thumb radius
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for controls
pub const RADIUS: f32 = 4.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;

/// Icon font size
pub const ICON_FONT: f32 = 14.0;

pub const BORDER: Color = Color::rgb8(0x55, 0x55, 0x55);
pub const BORDER_INVALID: Color = Color::rgb8(0xff, 0x44, 0x44);
pub const FIELD_BACKGROUND: Color = Color::rgb8(0x33, 0x33, 0x33);
pub const BUTTON_BACKGROUND: Color = Color::rgb8(0x44, 0x44, 0x44);
pub const BUTTON_HOVER: Color = Color::rgb8(0x55, 0x55, 0x55);
pub const BUTTON_ACTIVE: Color = Color::rgb8(0x66, 0x66, 0x66);
pub const TEXT: Color = Color::rgb8(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::rgb8(0xaa, 0xaa, 0xaa);
