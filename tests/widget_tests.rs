//! Integration tests for the full widget mount path
//!
//! These drive the widget exactly as a host adapter would: declare the page
//! markup, mount, then feed gestures through the entry points.

use pinlet::dom::memory::MemoryPage;
use pinlet::prelude::*;

/// Helper: a page with every element the full configuration references.
fn full_page() -> MemoryPage {
    let page = MemoryPage::new("https://host.example");
    page.insert_element("map");
    page.insert_element("icon");
    page.insert_text_element("popup", "Hello from the point");
    page.insert_element("center-control");
    page.insert_element("center-button");
    page
}

fn full_config() -> WidgetConfig {
    let mut config = WidgetConfig::new("map").with_point(10.0, 20.0);
    config.icon_element_id = Some("icon".to_string());
    config.popup_element_id = Some("popup".to_string());
    config.center_control_element_id = Some("center-control".to_string());
    config.center_control_button_id = Some("center-button".to_string());
    config
}

#[test]
fn test_full_scenario_mounts_both_overlays() {
    let page = full_page();
    let widget = Widget::mount(page.clone(), full_config()).unwrap();

    // Stylesheet injected once
    assert_eq!(page.links().len(), 1);
    assert_eq!(page.links()[0].href, "ol-sp.min.css");

    // Map element sized by the "100%"/"100%" defaults
    let map_element = page.element_by_id("map").unwrap();
    assert_eq!(map_element.style("height").as_deref(), Some("100%"));
    assert_eq!(map_element.style("width").as_deref(), Some("100%"));

    // Icon overlay fixed at the projected point, popup hidden with the
    // icon-size derived offset
    assert_eq!(widget.popup_state(), PopupState::PopupHidden);
    assert_eq!(widget.map().overlays().len(), 2);
    let controller = widget.controller().borrow();
    let icon = controller.icon().unwrap().borrow();
    let expected = from_lon_lat(LonLat::new(10.0, 20.0));
    assert_eq!(icon.position(), Some(expected));
    let popup = controller.popup().unwrap().borrow();
    assert_eq!(popup.position(), None);
    assert_eq!(popup.offset(), Point::new(0.0, -76.8));
    assert_eq!(popup.positioning(), Positioning::BottomCenter);
    assert_eq!(icon.positioning(), Positioning::BottomCenter);
}

#[test]
fn test_icon_click_shows_popup_then_map_gestures_hide_it() {
    let page = full_page();
    let mut widget = Widget::mount(page, full_config()).unwrap();

    widget.icon_clicked();
    assert_eq!(widget.popup_state(), PopupState::PopupShown);
    {
        let controller = widget.controller().borrow();
        let popup_position = controller.popup().unwrap().borrow().position();
        let icon_position = controller.icon().unwrap().borrow().position();
        assert_eq!(popup_position, icon_position);
    }

    widget.map_clicked();
    assert_eq!(widget.popup_state(), PopupState::PopupHidden);
    {
        let controller = widget.controller().borrow();
        assert_eq!(controller.popup().unwrap().borrow().position(), None);
    }

    widget.icon_clicked();
    assert_eq!(widget.popup_state(), PopupState::PopupShown);
    widget.pan_started();
    assert_eq!(widget.popup_state(), PopupState::PopupHidden);
}

#[test]
fn test_mounting_twice_injects_the_stylesheet_once() {
    let page = full_page();
    let _first = Widget::mount(page.clone(), full_config()).unwrap();
    let _second = Widget::mount(page.clone(), full_config()).unwrap();
    assert_eq!(page.links().len(), 1);
}

#[test]
fn test_missing_map_element_aborts_setup() {
    let page = MemoryPage::default();
    let result = Widget::mount(page.clone(), WidgetConfig::new("map"));
    assert!(result.is_err());
    // Nothing rendered, but the stylesheet guard already ran; the next
    // mount on a fixed page must not duplicate it.
    assert_eq!(page.links().len(), 1);
}

#[test]
fn test_init_swallows_fatal_errors() {
    let _ = env_logger::builder().is_test(true).try_init();
    let page = MemoryPage::default();
    init(page, WidgetConfig::new("map"));
}

#[test]
fn test_config_without_point_creates_no_overlays() {
    let page = full_page();
    let mut config = full_config();
    config.point_longitude = None;
    config.point_latitude = None;

    let widget = Widget::mount(page, config).unwrap();
    assert_eq!(widget.popup_state(), PopupState::NoIcon);
    assert!(widget.map().overlays().is_empty());
}

#[test]
fn test_missing_icon_element_creates_no_overlays() {
    let page = MemoryPage::default();
    page.insert_element("map");
    page.insert_text_element("popup", "content");
    let mut config = full_config();
    config.center_control_element_id = None;
    config.center_control_button_id = None;

    let mut widget = Widget::mount(page, config).unwrap();
    assert_eq!(widget.popup_state(), PopupState::NoIcon);
    assert!(widget.map().overlays().is_empty());

    // Gestures stay harmless
    widget.icon_clicked();
    widget.map_clicked();
    assert_eq!(widget.popup_state(), PopupState::NoIcon);
}

#[test]
fn test_whitespace_popup_content_yields_icon_only() {
    let page = MemoryPage::default();
    page.insert_element("map");
    page.insert_element("icon");
    page.insert_text_element("popup", "  \n\t ");
    let mut config = full_config();
    config.center_control_element_id = None;
    config.center_control_button_id = None;

    let mut widget = Widget::mount(page, config).unwrap();
    assert_eq!(widget.popup_state(), PopupState::IconOnly);
    assert_eq!(widget.map().overlays().len(), 1);

    // Icon remains clickable but inert
    widget.icon_clicked();
    assert_eq!(widget.popup_state(), PopupState::IconOnly);
}

#[test]
fn test_center_control_recenters_after_pan() {
    let page = full_page();
    let config = full_config().with_center(13.405, 52.52);
    let configured_center = from_lon_lat(LonLat::new(13.405, 52.52));
    let mut widget = Widget::mount(page.clone(), config).unwrap();

    assert_eq!(widget.map().view().center(), configured_center);
    assert_eq!(widget.map().controls().len(), 1);
    assert_eq!(
        page.element_by_id("center-control").unwrap().title(),
        "Center"
    );
    assert_eq!(
        page.element_by_id("center-button")
            .unwrap()
            .style("display")
            .as_deref(),
        Some("block")
    );

    // Engine pans elsewhere; the button brings the view back.
    widget
        .map_mut()
        .view_mut()
        .set_center(Point::new(0.0, 0.0));
    widget.center_control_clicked();
    assert_eq!(widget.map().view().center(), configured_center);
}

#[test]
fn test_center_control_skipped_when_button_missing() {
    let page = MemoryPage::default();
    page.insert_element("map");
    page.insert_element("center-control");
    let mut config = WidgetConfig::new("map");
    config.center_control_element_id = Some("center-control".to_string());
    config.center_control_button_id = Some("center-button".to_string());

    let widget = Widget::mount(page, config).unwrap();
    assert!(widget.map().controls().is_empty());
}

#[test]
fn test_preexisting_stylesheet_spellings_are_respected() {
    let page = full_page();
    page.insert_link("https://host.example/ol-sp.min.css");
    let _widget = Widget::mount(page.clone(), full_config()).unwrap();
    // The origin-qualified spelling already covers the default href.
    assert_eq!(page.links().len(), 1);
}

#[test]
fn test_tile_url_template_follows_config() {
    let page = full_page();
    let mut config = full_config();
    config.tile_base_url = "https://tiles.example".to_string();

    let widget = Widget::mount(page, config).unwrap();
    assert_eq!(
        widget.map().tile_layer().url_template(),
        "https://tiles.example/{z}/{x}/{y}.png"
    );
    assert_eq!(
        widget.map().tile_layer().tile_url(TileCoord::new(1, 2, 3)),
        "https://tiles.example/3/1/2.png"
    );
}

#[test]
fn test_data_attribute_boot_path_matches_manual_config() {
    let attrs: HashMap<String, String> = [
        ("data-map-id", "map"),
        ("data-icon-id", "icon"),
        ("data-popup-id", "popup"),
        ("data-point-lon", "10"),
        ("data-point-lat", "20"),
        ("data-icon-size", "64"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = config_from_attributes(|name| attrs.get(name).cloned());
    let page = full_page();
    let widget = Widget::mount(page, config).unwrap();

    assert_eq!(widget.popup_state(), PopupState::PopupHidden);
    let controller = widget.controller().borrow();
    assert_eq!(
        controller.popup().unwrap().borrow().offset(),
        popup_offset(64)
    );
}
