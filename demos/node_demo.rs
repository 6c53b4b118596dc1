//! Standalone demo: one background transparency node with the key color
//! editor installed, plus a readout of the value the node would serialize.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::window::WindowConfig;
use floem_keycolor::{
    HostNode, KeyColorExtension, PickerConfig, StandaloneNode, StandaloneRegistry,
    StandaloneWidget, TextWidget, REGION_NAME,
};

fn main() {
    env_logger::init();

    let config = PickerConfig::default();
    let mut registry = StandaloneRegistry::new();
    KeyColorExtension::new(config.clone()).register(&mut registry);

    // The node's own callback, registered before the extension wraps it.
    let serialized = RwSignal::new("#00ff00".to_string());
    let widget = Rc::new(StandaloneWidget::new(config.widget_name.clone(), "#0f0"));
    widget.set_callback(Some(Rc::new(move |value: &str| {
        serialized.set(value.to_string());
    })));

    let node = Rc::new(StandaloneNode::new(config.node_type.clone()).with_widget(widget));
    registry.create_node(node.clone());

    let Some(region) = node.take_region(REGION_NAME) else {
        log::error!("key color editor was not installed");
        return;
    };
    let (width, _) = node.size();

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    region.into_view(),
                    label(move || format!("node value: {}", serialized.get())).style(|s| {
                        s.font_size(11.0)
                            .font_family("monospace".to_string())
                            .color(Color::rgb8(0xaa, 0xaa, 0xaa))
                            .padding(5.0)
                    }),
                ))
                .style(|s| s.size_full().background(Color::rgb8(0x22, 0x22, 0x22)))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((width + 40.0, 200.0))
                    .title("floem-keycolor"),
            ),
        )
        .run();
}
